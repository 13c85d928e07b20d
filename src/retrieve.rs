//! Filtered, ranked top-K retrieval over the context index.
//!
//! [`RetrievalService`] is the public entry point of the crate: it owns the
//! material store handle and the chunk cache, and turns a query plus
//! optional topic/level filters into an ordered list of scored chunks.
//!
//! # Algorithm
//!
//! 1. Lazily build the index on first use; an explicit [`reload`] picks up
//!    material changes.
//! 2. Filter the cached chunks by topic, then level (case-insensitive).
//! 3. If nothing matches the filters, widen to the whole corpus.
//! 4. Score every candidate: term frequency plus title bonus.
//! 5. Stable-sort descending by score and keep the first `top_k`.
//!
//! [`reload`]: RetrievalService::reload

use std::fmt::Write as _;

use anyhow::Result;

use crate::chunk::DEFAULT_CHUNK_SIZE;
use crate::config::Config;
use crate::index::ContextIndex;
use crate::models::{Chunk, RetrievedChunk};
use crate::score::relevance;
use crate::store::MaterialStore;
use crate::tokenize::tokenize;

/// Default number of chunks returned when the caller gives no `top_k`.
pub const DEFAULT_TOP_K: usize = 3;

/// Inputs for a single retrieval call.
#[derive(Debug, Clone, Default)]
pub struct RetrievalRequest<'a> {
    /// The learner's question or topic phrase.
    pub query: &'a str,
    /// Restrict candidates to this topic, if given.
    pub topic: Option<&'a str>,
    /// Restrict candidates to this level, if given.
    pub level: Option<&'a str>,
    /// Result count; assumed `>= 1` when supplied. Falls back to the
    /// configured default when absent.
    pub top_k: Option<usize>,
}

/// Context retrieval over a [`MaterialStore`].
///
/// Construct one per store and share it; every instance carries its own
/// index, so tests can build isolated services. Repeated
/// [`retrieve`](RetrievalService::retrieve) calls without an intervening
/// [`reload`](RetrievalService::reload) are idempotent and side-effect-free.
pub struct RetrievalService<S> {
    store: S,
    index: ContextIndex,
    chunk_size: usize,
    default_top_k: usize,
}

impl<S: MaterialStore> RetrievalService<S> {
    /// Build a service with default chunking and retrieval settings.
    pub fn new(store: S) -> Self {
        Self {
            store,
            index: ContextIndex::new(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            default_top_k: DEFAULT_TOP_K,
        }
    }

    /// Build a service from a loaded [`Config`].
    pub fn with_config(store: S, config: &Config) -> Self {
        Self {
            store,
            index: ContextIndex::new(),
            chunk_size: config.chunking.chunk_size,
            default_top_k: config.retrieval.top_k,
        }
    }

    /// Refetch all materials and rebuild the chunk index.
    ///
    /// Call after any material create, update, or delete; existing chunks
    /// keep their frozen metadata until then. A store failure propagates
    /// and leaves the previous index intact, so a transient outage does not
    /// erase previously good retrieval capability.
    pub async fn reload(&self) -> Result<()> {
        let materials = self.store.fetch_all().await?;
        self.index.rebuild_from(&materials, self.chunk_size);
        Ok(())
    }

    /// Select the most relevant chunks for `req.query`.
    ///
    /// An empty filtered candidate set falls back to the whole corpus: a
    /// slightly off-topic grounding beats a hard failure for a best-effort
    /// tutoring explanation. Results come back sorted by descending score,
    /// with chunk insertion order (material order, then intra-material
    /// chunk order) breaking ties. An empty corpus yields an empty vector,
    /// never an error.
    pub async fn retrieve(&self, req: &RetrievalRequest<'_>) -> Result<Vec<RetrievedChunk>> {
        let top_k = req.top_k.unwrap_or(self.default_top_k);

        if self.index.is_empty() {
            self.reload().await?;
        }
        let chunks = self.index.snapshot();
        if chunks.is_empty() {
            return Ok(Vec::new());
        }

        let query_tokens = tokenize(req.query);

        let mut candidates: Vec<&Chunk> = chunks
            .iter()
            .filter(|c| matches_filter(&c.metadata.topic, req.topic))
            .filter(|c| matches_filter(&c.metadata.level, req.level))
            .collect();
        if candidates.is_empty() {
            tracing::debug!(
                topic = req.topic,
                level = req.level,
                "no chunks match filters, widening to full corpus"
            );
            candidates = chunks.iter().collect();
        }

        let mut scored: Vec<(f64, &Chunk)> = candidates
            .into_iter()
            .map(|chunk| {
                let chunk_tokens = tokenize(&chunk.text);
                let title_tokens = tokenize(&chunk.metadata.title);
                (relevance(&query_tokens, &chunk_tokens, &title_tokens), chunk)
            })
            .collect();

        // Stable sort keeps insertion order as the tie-break.
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_k);

        Ok(scored
            .into_iter()
            .map(|(score, chunk)| RetrievedChunk {
                text: chunk.text.clone(),
                score,
                metadata: chunk.metadata.clone(),
            })
            .collect())
    }

    /// Combine the full text of every material matching `topic` (and
    /// `level`, if given), each under a titled heading.
    ///
    /// Reads the store directly rather than the chunk cache, so it always
    /// reflects current materials. Returns an empty string when nothing
    /// matches.
    pub async fn combined_material(&self, topic: &str, level: Option<&str>) -> Result<String> {
        let materials = self.store.fetch_all().await?;

        let mut combined = String::new();
        for material in &materials {
            if !eq_ignore_case(&material.topic, topic) {
                continue;
            }
            if let Some(level) = level {
                if !eq_ignore_case(&material.level, level) {
                    continue;
                }
            }
            if !combined.is_empty() {
                combined.push_str("\n\n");
            }
            let _ = write!(
                combined,
                "=== {} (by {}) ===\n\n{}",
                material.title,
                material.author,
                material.full_text.trim()
            );
        }
        Ok(combined)
    }
}

fn matches_filter(value: &str, filter: Option<&str>) -> bool {
    match filter {
        Some(f) => eq_ignore_case(value, f),
        None => true,
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_filter_is_case_insensitive() {
        assert!(matches_filter("cube", Some("CUBE")));
        assert!(matches_filter("Cube", Some("cube")));
        assert!(!matches_filter("cube", Some("sphere")));
        assert!(matches_filter("anything", None));
    }
}
