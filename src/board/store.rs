//! Fixed-capacity territory storage.
//!
//! The store is populated once during session setup, one registration per
//! call, and thereafter only mutated in place by combat resolution. It is
//! never resized. The size is an explicit field of the store, mutated only
//! through `register`.

use super::color::ArmyColor;
use super::territory::Territory;

/// Errors raised by territory registration and lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("territory limit of {0} reached")]
    CapacityExceeded(usize),

    #[error("territory '{0}' is already registered")]
    DuplicateName(String),

    #[error("no territory at index {0}")]
    IndexOutOfRange(usize),
}

/// Ordered, fixed-capacity collection of territories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerritoryStore {
    territories: Vec<Territory>,
    capacity: usize,
}

impl TerritoryStore {
    /// Creates an empty store that will accept up to `capacity` territories.
    pub fn new(capacity: usize) -> Self {
        TerritoryStore {
            territories: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Registers a new territory and returns its index.
    ///
    /// Fails with `CapacityExceeded` once the store is full and with
    /// `DuplicateName` if a territory of the same name already exists;
    /// the store is unchanged on failure.
    pub fn register(
        &mut self,
        name: &str,
        owner: ArmyColor,
        troops: u32,
    ) -> Result<usize, StoreError> {
        if self.territories.len() >= self.capacity {
            return Err(StoreError::CapacityExceeded(self.capacity));
        }
        if self.find_by_name(name).is_some() {
            return Err(StoreError::DuplicateName(name.to_string()));
        }
        self.territories.push(Territory::new(name, owner, troops));
        Ok(self.territories.len() - 1)
    }

    /// Returns the territory at `index`.
    pub fn get(&self, index: usize) -> Result<&Territory, StoreError> {
        self.territories
            .get(index)
            .ok_or(StoreError::IndexOutOfRange(index))
    }

    /// Returns the territory at `index` mutably.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Territory, StoreError> {
        self.territories
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange(index))
    }

    /// Finds a territory index by exact name match. Linear scan.
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.territories.iter().position(|t| t.name() == name)
    }

    /// Returns the number of registered territories.
    pub fn len(&self) -> usize {
        self.territories.len()
    }

    /// Returns true if no territory has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    /// Returns the maximum number of territories this store accepts.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates over all registered territories in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Territory> {
        self.territories.iter()
    }

    /// Returns the distinct colors currently holding territory,
    /// in first-seen order.
    pub fn colors_present(&self) -> Vec<ArmyColor> {
        let mut colors = Vec::new();
        for t in &self.territories {
            if !colors.contains(&t.owner) {
                colors.push(t.owner);
            }
        }
        colors
    }

    /// Counts the territories currently owned by `color`.
    pub fn count_owned_by(&self, color: ArmyColor) -> usize {
        self.territories.iter().filter(|t| t.owner == color).count()
    }
}
