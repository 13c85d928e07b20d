//! Core data models for the retrieval pipeline.
//!
//! These types represent the materials, chunks, and retrieval results that
//! flow through the index and scoring pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A unit of teacher-authored subject content.
///
/// Fetched read-only from a [`MaterialStore`](crate::store::MaterialStore);
/// the core never writes materials back. A material whose `full_text` is
/// empty (no extractable text) is skipped when the index is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub id: i64,
    pub title: String,
    /// Category tag, compared case-insensitively.
    pub topic: String,
    /// Difficulty tag (e.g. "beginner"), compared case-insensitively.
    pub level: String,
    /// Display name of the content owner.
    pub author: String,
    /// Complete plain-text content, already extracted from any source
    /// document by the hosting application.
    pub full_text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Material fields frozen into a chunk at creation time.
///
/// Later edits to the material do not touch existing chunks; a reload
/// rebuilds the whole index with fresh copies.
#[derive(Debug, Clone, Serialize)]
pub struct ChunkMetadata {
    pub material_id: i64,
    pub title: String,
    pub topic: String,
    pub level: String,
    pub author: String,
}

/// A bounded, contiguous slice of a material's text.
#[derive(Debug, Clone)]
pub struct Chunk {
    pub metadata: ChunkMetadata,
    /// 0-based position within the owning material.
    pub chunk_index: usize,
    pub text: String,
}

/// A scored chunk returned from retrieval, ordered most-to-least relevant.
///
/// Carries enough metadata for the prompt assembler to cite the source
/// material to the end user.
#[derive(Debug, Clone, Serialize)]
pub struct RetrievedChunk {
    pub text: String,
    /// Relevance estimate for one query; always >= 0.
    pub score: f64,
    pub metadata: ChunkMetadata,
}
