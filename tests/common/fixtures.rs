//! Name fixtures
//!
//! Known bucket layouts under the `h = h * 31 + c` hash.

use symtab::{BUCKET_COUNT, SymbolTable};

/// Two-letter names that all hash to bucket 33
pub const BUCKET_33: [&str; 4] = ["ab", "ij", "qr", "yz"];

/// Generate `count` distinct identifiers
pub fn identifiers(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("ident_{}", i)).collect()
}

/// Fill a table with `names` and return it
pub fn table_with(fold_case: bool, names: &[&str]) -> SymbolTable {
    let mut table = SymbolTable::new(fold_case);
    for name in names {
        table.insert_or_find(name);
    }
    table
}

/// Length of every chain, in bucket order
pub fn chain_lengths(table: &SymbolTable) -> Vec<usize> {
    (0..BUCKET_COUNT).map(|b| table.chain(b).count()).collect()
}
