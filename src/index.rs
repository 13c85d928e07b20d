//! Reloadable in-memory chunk cache.
//!
//! The index holds every chunk built from every known material. A rebuild
//! constructs the full replacement vector locally and then swaps the shared
//! `Arc`, so a reader always observes either the old snapshot or the new
//! one, never a partially rebuilt sequence. Chunks are never mutated in
//! place.

use std::sync::{Arc, RwLock};

use crate::chunk::chunk_material;
use crate::models::{Chunk, Material};

/// Process-wide cache of chunks, rebuilt wholesale on demand.
///
/// Empty at construction; populated via
/// [`rebuild_from`](ContextIndex::rebuild_from), typically whenever a
/// material is created, updated, or deleted. There is no incremental
/// update path.
pub struct ContextIndex {
    chunks: RwLock<Arc<Vec<Chunk>>>,
}

impl ContextIndex {
    pub fn new() -> Self {
        Self {
            chunks: RwLock::new(Arc::new(Vec::new())),
        }
    }

    /// Rebuild the cache from `materials`.
    ///
    /// Chunk order is deterministic: material order as given, with
    /// intra-material chunk order preserved. Materials without any
    /// non-whitespace text are skipped. The new sequence replaces the old
    /// one atomically; snapshots handed out earlier are unaffected.
    pub fn rebuild_from(&self, materials: &[Material], chunk_size: usize) {
        let mut chunks = Vec::new();
        let mut used = 0usize;
        for material in materials {
            if material.full_text.trim().is_empty() {
                continue;
            }
            chunks.extend(chunk_material(material, chunk_size));
            used += 1;
        }
        tracing::info!(
            materials = used,
            chunks = chunks.len(),
            "rebuilt context index"
        );
        *self.chunks.write().unwrap() = Arc::new(chunks);
    }

    /// Cheap handle to the current chunk sequence.
    pub fn snapshot(&self) -> Arc<Vec<Chunk>> {
        Arc::clone(&self.chunks.read().unwrap())
    }

    /// True if the cache was never built or no materials had text.
    pub fn is_empty(&self) -> bool {
        self.chunks.read().unwrap().is_empty()
    }

    pub fn len(&self) -> usize {
        self.chunks.read().unwrap().len()
    }
}

impl Default for ContextIndex {
    fn default() -> Self {
        Self::new()
    }
}
