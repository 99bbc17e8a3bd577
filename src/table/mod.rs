//! Symbol Table
//!
//! A fixed-size chained hash table mapping names to [`SymbolEntry`] metadata.
//!
//! Entries live in an arena owned by the table; each of the 256 buckets
//! holds the handle of its newest entry and every entry links to the next
//! older one in the same bucket. Nothing is ever removed individually and
//! the bucket array never grows, so crowded buckets turn into long chains.

pub mod entry;
pub mod stats;

pub use entry::{EntryKind, SymbolEntry, UnknownValueType, ValueType};
pub use stats::Statistics;

use crate::config::TableConfig;

/// Number of buckets in every table
pub const BUCKET_COUNT: usize = 256;

const HASH_MULTIPLIER: usize = 31;

/// Handle to an entry inside a [`SymbolTable`]
///
/// Handles carry the table generation they were issued in, so a handle kept
/// across [`SymbolTable::clear`] resolves to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId {
    index: usize,
    generation: u32,
}

#[derive(Debug, Clone)]
struct Slot {
    entry: SymbolEntry,
    next: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct SymbolTable {
    slots: Vec<Slot>,
    buckets: [Option<usize>; BUCKET_COUNT],
    /// Bumped on every clear
    generation: u32,
    fold_case: bool,
    clear_resets_counters: bool,
    probe_count: u64,
    hit_count: u64,
}

impl SymbolTable {
    pub fn new(fold_case: bool) -> Self {
        Self::with_config(&TableConfig {
            fold_case,
            ..TableConfig::default()
        })
    }

    pub fn with_config(config: &TableConfig) -> Self {
        Self {
            slots: Vec::new(),
            buckets: [None; BUCKET_COUNT],
            generation: 0,
            fold_case: config.fold_case,
            clear_resets_counters: config.clear_resets_counters,
            probe_count: 0,
            hit_count: 0,
        }
    }

    pub fn fold_case(&self) -> bool {
        self.fold_case
    }

    /// Number of distinct names stored
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn probe_count(&self) -> u64 {
        self.probe_count
    }

    pub fn hit_count(&self) -> u64 {
        self.hit_count
    }

    /// Bucket index for `name`
    ///
    /// `h = h * 31 + c` over the bytes of the name with wrapping arithmetic,
    /// lowering each byte first when the table folds case. Only ASCII letters
    /// are folded.
    pub fn hash(&self, name: &str) -> usize {
        let mut hash: usize = 0;
        for byte in name.bytes() {
            let byte = if self.fold_case {
                byte.to_ascii_lowercase()
            } else {
                byte
            };
            hash = hash
                .wrapping_mul(HASH_MULTIPLIER)
                .wrapping_add(byte as usize);
        }
        hash % BUCKET_COUNT
    }

    fn names_match(&self, stored: &str, name: &str) -> bool {
        if self.fold_case {
            stored.eq_ignore_ascii_case(name)
        } else {
            stored == name
        }
    }

    /// Walk one chain looking for `name`. Never touches the counters.
    fn walk(&self, bucket: usize, name: &str) -> Option<EntryId> {
        let mut cursor = self.buckets[bucket];
        while let Some(index) = cursor {
            let slot = &self.slots[index];
            if self.names_match(slot.entry.name(), name) {
                return Some(self.id_at(index));
            }
            cursor = slot.next;
        }
        None
    }

    fn id_at(&self, index: usize) -> EntryId {
        EntryId {
            index,
            generation: self.generation,
        }
    }

    /// Look up `name`, counting one probe and, on success, one hit
    pub fn find_id(&mut self, name: &str) -> Option<EntryId> {
        let bucket = self.hash(name);
        self.probe_count += 1;

        let found = self.walk(bucket, name);
        if found.is_some() {
            self.hit_count += 1;
            log::trace!("probe '{}' hit in bucket {}", name, bucket);
        } else {
            log::trace!("probe '{}' missed in bucket {}", name, bucket);
        }
        found
    }

    /// Look up `name` and borrow its entry for reading or reclassifying
    pub fn find(&mut self, name: &str) -> Option<&mut SymbolEntry> {
        let id = self.find_id(name)?;
        Some(&mut self.slots[id.index].entry)
    }

    /// Return the entry for `name`, creating an undefined one if needed
    ///
    /// Unlike [`find_id`](Self::find_id) this does not count as a probe.
    pub fn insert_or_find_id(&mut self, name: &str) -> EntryId {
        let bucket = self.hash(name);
        if let Some(id) = self.walk(bucket, name) {
            return id;
        }

        let index = self.slots.len();
        self.slots.push(Slot {
            entry: SymbolEntry::new(name),
            next: self.buckets[bucket],
        });
        self.buckets[bucket] = Some(index);
        log::debug!("inserted '{}' into bucket {}", name, bucket);
        self.id_at(index)
    }

    pub fn insert_or_find(&mut self, name: &str) -> &mut SymbolEntry {
        let id = self.insert_or_find_id(name);
        &mut self.slots[id.index].entry
    }

    /// Entry behind `id`, or `None` if the handle predates the last clear
    pub fn entry(&self, id: EntryId) -> Option<&SymbolEntry> {
        if id.generation != self.generation {
            return None;
        }
        self.slots.get(id.index).map(|slot| &slot.entry)
    }

    pub fn entry_mut(&mut self, id: EntryId) -> Option<&mut SymbolEntry> {
        if id.generation != self.generation {
            return None;
        }
        self.slots.get_mut(id.index).map(|slot| &mut slot.entry)
    }

    /// Entries of one bucket, newest first
    ///
    /// # Panics
    ///
    /// Panics if `bucket >= BUCKET_COUNT`.
    pub fn chain(&self, bucket: usize) -> Chain<'_> {
        Chain {
            table: self,
            cursor: self.buckets[bucket],
        }
    }

    /// All entries, bucket by bucket
    pub fn iter(&self) -> impl Iterator<Item = &SymbolEntry> + '_ {
        (0..BUCKET_COUNT).flat_map(move |bucket| self.chain(bucket))
    }

    /// Drop every entry and empty every bucket
    ///
    /// Probe and hit counters are reset too unless the table was configured
    /// with `clear_resets_counters = false`.
    pub fn clear(&mut self) {
        log::debug!("clearing {} entries", self.slots.len());
        self.slots.clear();
        self.buckets.fill(None);
        self.generation = self.generation.wrapping_add(1);
        if self.clear_resets_counters {
            self.probe_count = 0;
            self.hit_count = 0;
        }
    }

    fn chain_len(&self, bucket: usize) -> usize {
        self.chain(bucket).count()
    }

    /// Scan every bucket and summarize the table
    pub fn statistics(&self) -> Statistics {
        Statistics::from_chain_lengths(
            (0..BUCKET_COUNT).map(|bucket| self.chain_len(bucket)),
            self.len(),
            self.probe_count,
            self.hit_count,
        )
    }

    /// Human-readable statistics, one labeled line per metric
    pub fn report(&self) -> String {
        self.statistics().to_string()
    }
}

/// Iterator over one bucket's chain, newest entry first
pub struct Chain<'a> {
    table: &'a SymbolTable,
    cursor: Option<usize>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a SymbolEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let table = self.table;
        let slot = &table.slots[self.cursor?];
        self.cursor = slot.next;
        Some(&slot.entry)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::with_config(&TableConfig::default())
    }
}
