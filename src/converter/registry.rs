//! Name to identifier table for police parent resolution
//!
//! Built while one tier is processed and consulted by the next: station rows
//! look up their headquarters by name, koban rows their station.

use crate::models::PoliceTier;

use std::collections::HashMap;
use tracing::warn;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ParentRegistry {
    tier: PoliceTier,
    ids_by_name: HashMap<String, Uuid>,
}

impl ParentRegistry {
    pub fn new(tier: PoliceTier) -> Self {
        Self {
            tier,
            ids_by_name: HashMap::new(),
        }
    }

    /// Tier whose records this table points at
    pub fn tier(&self) -> PoliceTier {
        self.tier
    }

    /// Record `name` as `id`. A repeated name takes the later id.
    pub fn insert(&mut self, name: &str, id: Uuid) {
        if let Some(previous) = self.ids_by_name.insert(name.to_string(), id) {
            warn!(
                "Duplicate {} name '{}': replacing {} with {}",
                self.tier, name, previous, id
            );
        }
    }

    /// Exact name match
    pub fn resolve(&self, name: &str) -> Option<Uuid> {
        self.ids_by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.ids_by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids_by_name.is_empty()
    }
}
