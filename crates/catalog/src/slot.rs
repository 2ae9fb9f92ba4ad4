//! Generic fixed-capacity open-addressing hash table.
//!
//! All three catalog indices (movies, users, tags) are specializations of
//! [`SlotTable`]. The table never grows: capacity is chosen at construction
//! and inserting into a table with no usable slot left is an error
//! (`CapacityExceeded`), not a trigger for rehashing.
//!
//! Collision resolution is linear probing. A lookup walks the probe sequence
//! until it hits a true `Empty` slot (key provably absent) or the matching
//! occupied slot. `Tombstone` slots do not stop a lookup — the key may still
//! live further along the sequence — but are reusable on insert. No delete
//! operation is exposed, so the current load/query flow never produces a
//! tombstone; probing stays tombstone-aware so a future delete only has to
//! write the marker.

use crate::error::{CatalogError, Result};
use std::borrow::Borrow;

/// Hashing contract for slot table keys.
///
/// Implementations reduce the key to a base slot index for a table of the
/// given capacity. Integer keys hash to `key mod capacity`; text keys use a
/// multiplicative polynomial accumulator with base 131.
pub trait SlotKey {
    fn table_hash(&self, capacity: usize) -> usize;
}

impl SlotKey for u32 {
    fn table_hash(&self, capacity: usize) -> usize {
        *self as usize % capacity
    }
}

impl SlotKey for str {
    fn table_hash(&self, capacity: usize) -> usize {
        let mut h: usize = 0;
        for byte in self.bytes() {
            h = h.wrapping_mul(131).wrapping_add(byte as usize);
        }
        h % capacity
    }
}

impl SlotKey for String {
    fn table_hash(&self, capacity: usize) -> usize {
        self.as_str().table_hash(capacity)
    }
}

/// One slot of the table.
///
/// `Empty` means the slot was never used and blocks further probing on
/// lookup. `Tombstone` marks a removed entry: it must not stop a lookup but
/// may be reused by an insert once the key is confirmed absent.
#[derive(Debug)]
enum Slot<K, V> {
    Empty,
    Occupied { key: K, value: V },
    Tombstone,
}

/// Where the probe sequence ended for an insert.
enum Probe {
    /// The key already lives at this index
    Found(usize),
    /// The key is absent; this is the slot to claim
    Claim(usize),
    /// Every slot was scanned and none is usable
    Exhausted,
}

/// Fixed-capacity associative store with linear probing.
#[derive(Debug)]
pub struct SlotTable<K, V> {
    slots: Vec<Slot<K, V>>,
    occupied: usize,
    name: &'static str,
}

impl<K, V> SlotTable<K, V>
where
    K: SlotKey + Eq,
{
    /// Creates a table with room for `capacity` entries (at least one).
    ///
    /// `name` identifies the table in `CapacityExceeded` errors.
    pub fn new(name: &'static str, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: (0..capacity).map(|_| Slot::Empty).collect(),
            occupied: 0,
            name,
        }
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.occupied
    }

    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Returns the entry for `key`, inserting `init()` first if absent.
    ///
    /// The probe walks from the key's base index. The first tombstone seen
    /// is remembered but only claimed once a true `Empty` slot (or a scan of
    /// the whole sequence) proves the key does not live further along.
    /// Fails with `CapacityExceeded` when the full sequence holds neither
    /// the key nor a usable slot.
    pub fn insert_or_get_with<F>(&mut self, key: K, init: F) -> Result<&mut V>
    where
        F: FnOnce() -> V,
    {
        let index = match self.probe(&key) {
            Probe::Found(index) => index,
            Probe::Claim(index) => {
                self.slots[index] = Slot::Occupied {
                    key,
                    value: init(),
                };
                self.occupied += 1;
                index
            }
            Probe::Exhausted => {
                return Err(CatalogError::CapacityExceeded {
                    table: self.name,
                    capacity: self.slots.len(),
                });
            }
        };

        match &mut self.slots[index] {
            Slot::Occupied { value, .. } => Ok(value),
            // The index came from Found or was just written above.
            _ => unreachable!("probed slot is occupied"),
        }
    }

    /// Looks up `key`, stopping early only on a true `Empty` slot.
    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: SlotKey + Eq + ?Sized,
    {
        let capacity = self.slots.len();
        let base = key.table_hash(capacity);

        for step in 0..capacity {
            match &self.slots[(base + step) % capacity] {
                Slot::Empty => return None,
                Slot::Occupied { key: k, value } if k.borrow() == key => return Some(value),
                _ => {}
            }
        }

        None
    }

    /// Full-table enumeration of occupied entries in physical slot order.
    ///
    /// The order is an implementation detail; callers re-sort anything they
    /// hand out.
    pub fn occupied(&self) -> impl Iterator<Item = (&K, &V)> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied { key, value } => Some((key, value)),
            _ => None,
        })
    }

    /// Walks the probe sequence for `key` and reports where it ended.
    fn probe(&self, key: &K) -> Probe {
        let capacity = self.slots.len();
        let base = key.table_hash(capacity);
        let mut first_tombstone = None;

        for step in 0..capacity {
            let index = (base + step) % capacity;
            match &self.slots[index] {
                Slot::Occupied { key: k, .. } if *k == *key => return Probe::Found(index),
                Slot::Occupied { .. } => {}
                Slot::Tombstone => {
                    if first_tombstone.is_none() {
                        first_tombstone = Some(index);
                    }
                }
                Slot::Empty => return Probe::Claim(first_tombstone.unwrap_or(index)),
            }
        }

        // The whole sequence was scanned, so the key is provably absent and
        // a recorded tombstone is safe to reuse.
        match first_tombstone {
            Some(index) => Probe::Claim(index),
            None => Probe::Exhausted,
        }
    }

    /// Tombstones the entry for `key`, if present.
    ///
    /// Nothing in the load/query flow deletes entries; this exists so tests
    /// can exercise tombstone-aware probing.
    #[cfg(test)]
    fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: SlotKey + Eq + ?Sized,
    {
        let capacity = self.slots.len();
        let base = key.table_hash(capacity);

        for step in 0..capacity {
            let index = (base + step) % capacity;
            match &self.slots[index] {
                Slot::Empty => return false,
                Slot::Occupied { key: k, .. } if k.borrow() == key => {
                    self.slots[index] = Slot::Tombstone;
                    self.occupied -= 1;
                    return true;
                }
                _ => {}
            }
        }

        false
    }
}
