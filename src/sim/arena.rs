//! Index-stable entity storage with soft delete
//!
//! Entities are never removed while a level is running. Retiring one clears
//! its bit in the alive mask; its slot (and every other index) stays put, so
//! an in-progress scan over the slots is never invalidated.

use serde::{Deserialize, Serialize};

/// Stable handle into an [`Arena`]
pub type EntityId = usize;

const WORD_BITS: usize = u64::BITS as usize;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena<T> {
    slots: Vec<T>,
    /// One bit per slot, set while the slot is live
    alive: Vec<u64>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            alive: Vec::new(),
        }
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a live entity and return its handle
    pub fn insert(&mut self, value: T) -> EntityId {
        let id = self.slots.len();
        self.slots.push(value);
        if id / WORD_BITS >= self.alive.len() {
            self.alive.push(0);
        }
        self.alive[id / WORD_BITS] |= 1 << (id % WORD_BITS);
        id
    }

    pub fn is_alive(&self, id: EntityId) -> bool {
        self.alive
            .get(id / WORD_BITS)
            .is_some_and(|word| word & (1 << (id % WORD_BITS)) != 0)
    }

    /// Soft-delete. Returns false if the slot was already retired or unknown.
    pub fn retire(&mut self, id: EntityId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        self.alive[id / WORD_BITS] &= !(1 << (id % WORD_BITS));
        true
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.slots.get(id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        self.slots.get_mut(id)
    }

    /// Every slot in insertion order, live or retired
    pub fn slots(&self) -> &[T] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Live entities in insertion order
    pub fn iter_alive(&self) -> impl Iterator<Item = (EntityId, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(id, _)| self.is_alive(*id))
    }

    /// Handles of live entities in insertion order
    pub fn alive_ids(&self) -> Vec<EntityId> {
        (0..self.slots.len()).filter(|&id| self.is_alive(id)).collect()
    }

    /// Number of live entities
    pub fn live_count(&self) -> usize {
        self.alive.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Total slots, including retired ones
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drop every slot (between levels, never mid-scan)
    pub fn clear(&mut self) {
        self.slots.clear();
        self.alive.clear();
    }
}
