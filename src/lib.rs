//! symtab - a fixed-size chained symbol table
//!
//! This crate provides a 256-bucket hash table that maps identifiers to
//! variable, constant or routine metadata, together with diagnostic
//! statistics about how the names spread over the buckets. A small script
//! language and CLI drive the table from the outside.

pub mod ast;
pub mod config;
pub mod driver;
pub mod lexer;
pub mod parser;
pub mod table;

// Re-export commonly used types
pub use config::{ConfigError, TableConfig};
pub use driver::{Run, RunError, run_demo, run_script, run_source};
pub use lexer::lex;
pub use parser::Parser;
pub use table::{
    BUCKET_COUNT, EntryId, EntryKind, Statistics, SymbolEntry, SymbolTable, ValueType,
};
