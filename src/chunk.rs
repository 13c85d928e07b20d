//! Paragraph-boundary text chunker.
//!
//! Splits a material's full text into [`Chunk`]s that respect a configurable
//! character limit. Splitting occurs only on blank-line boundaries (`\n\n`)
//! to preserve semantic coherence within each chunk: a paragraph longer than
//! the limit is emitted whole rather than cut mid-sentence.
//!
//! # Algorithm
//!
//! 1. Split text on `\n\n` paragraph boundaries; trim each paragraph and
//!    drop empty ones.
//! 2. Accumulate paragraphs into a buffer until adding the next paragraph
//!    would exceed `chunk_size` characters.
//! 3. When exceeded, flush the non-empty buffer as a chunk and start a new
//!    one with that paragraph.
//! 4. Always flush the final non-empty buffer, even if under the limit.
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use tutor_context::chunk::chunk_material;
//! use tutor_context::models::Material;
//!
//! let material = Material {
//!     id: 1,
//!     title: "Cube Basics".into(),
//!     topic: "cube".into(),
//!     level: "beginner".into(),
//!     author: "Ms. Hart".into(),
//!     full_text: "A cube has six faces.\n\nVolume equals side cubed.".into(),
//!     created_at: Utc::now(),
//!     updated_at: Utc::now(),
//! };
//!
//! let chunks = chunk_material(&material, 500);
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0].chunk_index, 0);
//! ```

use crate::models::{Chunk, ChunkMetadata, Material};

/// Default chunk size in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Split a material's text into chunks on paragraph boundaries.
///
/// Sizes are measured in characters, not bytes, so multibyte text never
/// splits the buffer early. The `\n\n` joiner between accumulated
/// paragraphs counts toward the limit.
///
/// # Guarantees
///
/// - Chunk indices are contiguous: `0, 1, …, N-1`.
/// - Joining the chunk texts with `"\n\n"` reproduces the material's
///   trimmed paragraph sequence (no loss, no duplication).
/// - No chunk exceeds `chunk_size` characters unless a single paragraph
///   alone does, in which case that paragraph is emitted as one chunk.
/// - Each chunk carries its own copy of the material's metadata.
/// - Text with no non-whitespace paragraphs produces no chunks.
pub fn chunk_material(material: &Material, chunk_size: usize) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut buf = String::new();

    for para in material.full_text.split("\n\n") {
        let para = para.trim();
        if para.is_empty() {
            continue;
        }

        let would_be = if buf.is_empty() {
            para.chars().count()
        } else {
            buf.chars().count() + 2 + para.chars().count()
        };
        if would_be > chunk_size && !buf.is_empty() {
            chunks.push(make_chunk(material, chunks.len(), &buf));
            buf.clear();
        }

        if !buf.is_empty() {
            buf.push_str("\n\n");
        }
        buf.push_str(para);
    }

    if !buf.is_empty() {
        chunks.push(make_chunk(material, chunks.len(), &buf));
    }

    chunks
}

/// Create a single [`Chunk`] with a frozen copy of the material's metadata.
fn make_chunk(material: &Material, index: usize, text: &str) -> Chunk {
    Chunk {
        metadata: ChunkMetadata {
            material_id: material.id,
            title: material.title.clone(),
            topic: material.topic.clone(),
            level: material.level.clone(),
            author: material.author.clone(),
        },
        chunk_index: index,
        text: text.to_owned(),
    }
}
