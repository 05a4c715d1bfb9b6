//! # Inventory
//!
//! Owns every [`CatalogEntry`], keyed by exact product name, listed in the
//! order the entries were first registered.
//!
//! Names are case-sensitive: `"indomie goreng"` does not find
//! `"Indomie Goreng"`.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::types::CatalogEntry;

/// The store's product catalog.
///
/// ## Invariants
/// - At most one entry per name
/// - `index[name]` is the position of that entry in `entries`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, silently replacing any entry with the same name.
    ///
    /// A replaced entry keeps its original listing position.
    pub fn register(&mut self, entry: CatalogEntry) {
        match self.index.get(entry.name()) {
            Some(&pos) => self.entries[pos] = entry,
            None => {
                self.index.insert(entry.name().to_string(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&CatalogEntry> {
        self.index.get(name).map(|&pos| &self.entries[pos])
    }

    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut CatalogEntry> {
        match self.index.get(name) {
            Some(&pos) => Some(&mut self.entries[pos]),
            None => None,
        }
    }

    /// Like [`lookup`](Self::lookup) but reports a missing product as
    /// `NotFound`.
    pub fn require(&self, name: &str) -> CoreResult<&CatalogEntry> {
        self.lookup(name)
            .ok_or_else(|| CoreError::NotFound(name.to_string()))
    }

    pub fn require_mut(&mut self, name: &str) -> CoreResult<&mut CatalogEntry> {
        self.lookup_mut(name)
            .ok_or_else(|| CoreError::NotFound(name.to_string()))
    }

    /// All entries in registration order.
    pub fn list(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<CatalogEntry> for Inventory {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        let mut inventory = Inventory::new();
        for entry in iter {
            inventory.register(entry);
        }
        inventory
    }
}
