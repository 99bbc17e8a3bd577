use afl::fuzz;
use symtab::{SymbolTable, TableConfig};

fn main() {
    fuzz!(|data: &[u8]| {
        if let Ok(input) = std::str::from_utf8(data) {
            // Arbitrary names must never break the bucket invariants
            let mut table = SymbolTable::new(true);
            for name in input.split_whitespace() {
                table.insert_or_find(name);
                assert!(table.find(&name.to_uppercase()).is_some() || !name.is_ascii());
            }

            let _ = symtab::run_source(input, &TableConfig::default());
        }
    });
}
