//! ChainedTable: fixed-capacity slot array with per-slot overflow chains.

use crate::chain::{self, Chain, Nodes};
use crate::entry::Entry;
use crate::error::{CreateError, InsertError};
use crate::hasher::SlotHasher;
use core::fmt;
use core::mem;
use core::num::NonZeroUsize;
use log::{debug, trace, warn};
use std::io::{self, Write};

const DUMP_HEADER: &str = "|------------------------| HASH TABLE |------------------------|";
const DUMP_FOOTER: &str = "|------------------------| !END TABLE |------------------------|";

/// String-to-string map with a fixed number of slots.
///
/// Each slot holds at most one primary entry. Further keys that hash to an
/// occupied slot are appended to that slot's chain. `count` tracks primary
/// occupancy only; chains are unbounded.
#[derive(Debug)]
pub struct ChainedTable {
    hasher: SlotHasher,
    count: usize,
    slots: Vec<Option<Entry>>,
    chains: Vec<Chain>,
    nodes: Nodes,
}

impl ChainedTable {
    /// Allocate a table with `capacity` empty slots.
    ///
    /// Fails on a zero capacity or when the slot arrays cannot be reserved;
    /// no partially built table is ever returned.
    pub fn with_capacity(capacity: usize) -> Result<Self, CreateError> {
        let modulus = NonZeroUsize::new(capacity).ok_or(CreateError::ZeroCapacity)?;
        let alloc_err = |source| CreateError::Allocation { capacity, source };

        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity).map_err(alloc_err)?;
        slots.resize_with(capacity, || None);

        let mut chains = Vec::new();
        chains.try_reserve_exact(capacity).map_err(alloc_err)?;
        chains.resize_with(capacity, Chain::new);

        debug!("created hash table with {capacity} slots");
        Ok(Self {
            hasher: SlotHasher::new(modulus),
            count: 0,
            slots,
            chains,
            nodes: Nodes::with_key(),
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied primary slots.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Total number of stored entries, primary and chained.
    pub fn len(&self) -> usize {
        self.count + self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.capacity() as f64
    }

    /// Slot that `key` hashes to.
    pub fn slot_index(&self, key: &str) -> usize {
        self.hasher.index(key)
    }

    /// Number of chained (non-primary) entries at `index`; 0 when out of range.
    pub fn chain_len(&self, index: usize) -> usize {
        self.chains.get(index).map_or(0, Chain::len)
    }

    /// Insert or update `key`.
    ///
    /// Returns the previous value when `key` was already present. A new key
    /// that would claim an empty slot is rejected with
    /// [`InsertError::TableFull`] once `count == capacity`.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Option<String>, InsertError> {
        let (key, value) = (key.into(), value.into());
        let capacity = self.capacity();
        let i = self.hasher.index(&key);
        trace!("insert {key:?} -> slot {i}");

        match self.slots[i] {
            None => {
                if self.count == capacity {
                    warn!("rejected insert of {key:?}: hash table is full ({capacity} slots)");
                    return Err(InsertError::TableFull { capacity });
                }
                debug_assert!(self.chains[i].is_empty());
                self.slots[i] = Some(Entry::new(key, value));
                self.count += 1;
                Ok(None)
            }
            Some(ref mut primary) if primary.matches(&key) => Ok(Some(primary.replace_value(value))),
            Some(_) => {
                let chain = &mut self.chains[i];
                if let Some(existing) = chain.find_mut(&mut self.nodes, &key) {
                    return Ok(Some(existing.replace_value(value)));
                }
                debug!("collision at slot {i}: chaining {key:?}");
                chain.append(&mut self.nodes, Entry::new(key, value));
                Ok(None)
            }
        }
    }

    /// Value stored under `key`, checking the slot and then the whole chain.
    pub fn search(&self, key: &str) -> Option<&str> {
        let i = self.hasher.index(key);
        match &self.slots[i] {
            Some(primary) if primary.matches(key) => Some(primary.value()),
            _ => self.chains[i].find(&self.nodes, key).map(Entry::value),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Remove `key`, returning its value. Absent keys are a no-op.
    ///
    /// Deleting a primary entry whose slot has a chain promotes the chain
    /// head into the slot; `count` only drops when the slot becomes empty.
    pub fn delete(&mut self, key: &str) -> Option<String> {
        let i = self.hasher.index(key);
        trace!("delete {key:?} at slot {i}");
        let primary = self.slots[i].as_ref()?;

        if primary.matches(key) {
            let promoted = self.chains[i].pop_front(&mut self.nodes);
            match &promoted {
                Some(head) => debug!("slot {i}: promoted {:?} after deleting {key:?}", head.key()),
                None => self.count -= 1,
            }
            return mem::replace(&mut self.slots[i], promoted).map(Entry::into_value);
        }

        let removed = self.chains[i].remove(&mut self.nodes, key)?;
        debug!("slot {i}: unlinked chained key {key:?}");
        Some(removed.into_value())
    }

    /// Drop every entry, keeping the capacity.
    pub fn clear(&mut self) {
        for chain in &mut self.chains {
            chain.clear(&mut self.nodes);
        }
        self.slots.iter_mut().for_each(|s| *s = None);
        self.count = 0;
    }

    /// Release the table and everything it owns.
    pub fn teardown(self) {
        debug!(
            "tearing down hash table ({} slots, {} entries)",
            self.capacity(),
            self.len()
        );
    }

    /// Entries in slot order; each primary is followed by its chain.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            table: self,
            next_slot: 0,
            chained: None,
        }
    }

    /// Write the diagnostic dump of every occupied slot and its chain.
    pub fn write_dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }

    /// Write a single found / not-found line for `key`.
    pub fn write_search<W: Write>(&self, key: &str, out: &mut W) -> io::Result<()> {
        match self.search(key) {
            Some(value) => writeln!(out, "Key:{key}\tValue:{value}"),
            None => writeln!(out, "Key {key} does not exist"),
        }
    }

    pub fn print(&self) -> io::Result<()> {
        self.write_dump(&mut io::stdout().lock())
    }

    pub fn print_search(&self, key: &str) -> io::Result<()> {
        self.write_search(key, &mut io::stdout().lock())
    }

    #[cfg(test)]
    pub(crate) fn is_primary(&self, key: &str) -> bool {
        self.slots[self.hasher.index(key)]
            .as_ref()
            .is_some_and(|e| e.matches(key))
    }

    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        let occupied = self.slots.iter().filter(|s| s.is_some()).count();
        assert_eq!(self.count, occupied, "count must equal primary occupancy");
        assert!(self.count <= self.capacity());
        assert_eq!(self.slots.len(), self.chains.len());

        let chained: usize = self.chains.iter().map(Chain::len).sum();
        assert_eq!(chained, self.nodes.len(), "every node belongs to exactly one chain");

        for (i, (slot, chain)) in self.slots.iter().zip(&self.chains).enumerate() {
            if slot.is_none() {
                assert!(chain.is_empty(), "slot {i} empty but chain non-empty");
            }
            let mut seen = std::collections::HashSet::new();
            for e in slot.iter().chain(chain.iter(&self.nodes)) {
                assert_eq!(self.hasher.index(e.key()), i, "{:?} stored at wrong slot", e.key());
                assert!(seen.insert(e.key()), "duplicate key {:?} at slot {i}", e.key());
            }
            assert_eq!(chain.iter(&self.nodes).count(), chain.len());
        }
    }
}

impl fmt::Display for ChainedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{DUMP_HEADER}")?;
        for (i, (slot, chain)) in self.slots.iter().zip(&self.chains).enumerate() {
            let Some(primary) = slot else { continue };
            writeln!(f, "Index:{i}\tKey:{}\tValue:{}", primary.key(), primary.value())?;
            for e in chain.iter(&self.nodes) {
                writeln!(f, "Index:{i}\tKey:{}\tValue:{}\t(chained)", e.key(), e.value())?;
            }
        }
        writeln!(f, "{DUMP_FOOTER}")
    }
}

/// Iterator over `(key, value)` pairs of a `ChainedTable`.
pub struct Iter<'a> {
    table: &'a ChainedTable,
    next_slot: usize,
    chained: Option<chain::Iter<'a>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let table = self.table;
        loop {
            if let Some(e) = self.chained.as_mut().and_then(Iterator::next) {
                return Some((e.key(), e.value()));
            }
            let i = self.next_slot;
            let slot = table.slots.get(i)?;
            self.next_slot += 1;
            self.chained = Some(table.chains[i].iter(&table.nodes));
            if let Some(primary) = slot {
                return Some((primary.key(), primary.value()));
            }
        }
    }
}

impl<'a> IntoIterator for &'a ChainedTable {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
