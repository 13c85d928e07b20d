//! Material storage boundary.
//!
//! The [`MaterialStore`] trait is the core's single inbound dependency: the
//! hosting application implements it over whatever persistence it uses, and
//! the retrieval pipeline treats it as the source of truth for materials.
//! The core only ever reads through it.
//!
//! Implementations must be `Send + Sync` to work with async runtimes; the
//! bundled in-memory implementation returns immediately-ready futures.

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::Material;

/// Read-only access to the full set of teacher materials.
///
/// [`RetrievalService::reload`](crate::retrieve::RetrievalService::reload)
/// calls [`fetch_all`](MaterialStore::fetch_all) and rebuilds the chunk
/// index from the result. A fetch error leaves the previous index intact.
#[async_trait]
pub trait MaterialStore: Send + Sync {
    /// Fetch every material currently known, in a stable order.
    async fn fetch_all(&self) -> Result<Vec<Material>>;
}
