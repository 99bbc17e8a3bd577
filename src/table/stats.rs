//! Table statistics
//!
//! A snapshot of how well the hash function spreads the stored names.

use std::fmt;

use rustc_hash::FxHashMap as HashMap;
use serde::Serialize;

/// Diagnostic snapshot produced by [`SymbolTable::statistics`](super::SymbolTable::statistics)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub entry_count: usize,
    pub empty_bucket_count: usize,
    pub probe_count: u64,
    /// `probe_count / entry_count`, `None` while the table holds no entries
    pub average_probes_per_entry: Option<f64>,
    pub hit_count: u64,
    pub longest_chain_length: usize,
    /// Chain length -> number of buckets with that length (empty buckets included)
    #[serde(skip)]
    pub chain_length_histogram: HashMap<usize, usize>,
}

impl Statistics {
    pub(super) fn from_chain_lengths(
        lengths: impl IntoIterator<Item = usize>,
        entry_count: usize,
        probe_count: u64,
        hit_count: u64,
    ) -> Self {
        let mut histogram = HashMap::default();
        let mut empty_bucket_count = 0;
        let mut longest_chain_length = 0;

        for len in lengths {
            if len == 0 {
                empty_bucket_count += 1;
            }
            longest_chain_length = longest_chain_length.max(len);
            *histogram.entry(len).or_insert(0) += 1;
        }

        let average_probes_per_entry =
            (entry_count > 0).then(|| probe_count as f64 / entry_count as f64);

        Self {
            entry_count,
            empty_bucket_count,
            probe_count,
            average_probes_per_entry,
            hit_count,
            longest_chain_length,
            chain_length_histogram: histogram,
        }
    }

    /// Number of buckets holding exactly `len` entries
    pub fn buckets_with_chain_length(&self, len: usize) -> usize {
        self.chain_length_histogram.get(&len).copied().unwrap_or(0)
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of entries: {}", self.entry_count)?;
        writeln!(f, "Number of empty slots: {}", self.empty_bucket_count)?;
        match self.average_probes_per_entry {
            Some(avg) => writeln!(f, "Average number of probes: {}", avg)?,
            None => writeln!(f, "Average number of probes: undefined")?,
        }
        writeln!(f, "Number of hits: {}", self.hit_count)?;
        write!(f, "Longest search chain: {}", self.longest_chain_length)
    }
}
