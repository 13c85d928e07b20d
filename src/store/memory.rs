//! In-memory [`MaterialStore`] implementation for tests and embedded hosts.
//!
//! Uses a `Vec` behind `std::sync::RwLock` for thread safety. Clones share
//! the same underlying set, so a handle kept by the hosting layer can upsert
//! or remove materials while a retrieval service owns another handle.

use std::sync::{Arc, RwLock};

use anyhow::Result;
use async_trait::async_trait;

use crate::models::Material;

use super::MaterialStore;

/// Cloneable in-memory material store.
#[derive(Clone, Default)]
pub struct InMemoryMaterialStore {
    materials: Arc<RwLock<Vec<Material>>>,
}

impl InMemoryMaterialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a material, replacing any existing one with the same id.
    pub fn upsert(&self, material: Material) {
        let mut materials = self.materials.write().unwrap();
        materials.retain(|m| m.id != material.id);
        materials.push(material);
    }

    /// Remove a material by id. Returns true if one was removed.
    pub fn remove(&self, id: i64) -> bool {
        let mut materials = self.materials.write().unwrap();
        let before = materials.len();
        materials.retain(|m| m.id != id);
        materials.len() != before
    }

    pub fn clear(&self) {
        self.materials.write().unwrap().clear();
    }

    pub fn len(&self) -> usize {
        self.materials.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl MaterialStore for InMemoryMaterialStore {
    /// Returns materials ordered by `(created_at, id)` so index rebuilds
    /// are deterministic regardless of insertion order.
    async fn fetch_all(&self) -> Result<Vec<Material>> {
        let mut materials = self.materials.read().unwrap().clone();
        materials.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(materials)
    }
}
