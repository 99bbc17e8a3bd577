//! Test harness for running symtab scripts
//!
//! Runs scripts through every phase and reports which phase failed.

use symtab::{RunError, SymbolTable, TableConfig, run_source};

/// Result of running a script
#[derive(Debug)]
pub enum ScriptResult {
    Success(SymbolTable, Vec<String>),
    LexError(String),
    ParseError(String),
}

/// Run a script on a table built from `config`
pub fn run_with(source: &str, config: TableConfig) -> ScriptResult {
    match run_source(source, &config) {
        Ok(run) => ScriptResult::Success(run.table, run.output),
        Err(e @ RunError::Lex(_)) => ScriptResult::LexError(e.format_with_source_and_file(source, None)),
        Err(e @ RunError::Parse(_)) => {
            ScriptResult::ParseError(e.format_with_source_and_file(source, None))
        }
        Err(e) => panic!("unexpected error: {}", e),
    }
}

/// Run a script on a table that keeps case distinct
pub fn run(source: &str) -> ScriptResult {
    run_with(source, TableConfig::default())
}

/// Run a script on a case-folding table
pub fn run_folded(source: &str) -> ScriptResult {
    run_with(
        source,
        TableConfig {
            fold_case: true,
            ..TableConfig::default()
        },
    )
}

/// Run a script and return the table and output, panicking on failure
pub fn run_ok(source: &str) -> (SymbolTable, Vec<String>) {
    match run(source) {
        ScriptResult::Success(table, output) => (table, output),
        other => panic!("expected success, got {:?}", other),
    }
}

/// Assert a script fails in the given phase ("lex" or "parse") and return the message
pub fn assert_fails_at(source: &str, phase: &str) -> String {
    match (run(source), phase) {
        (ScriptResult::LexError(msg), "lex") => msg,
        (ScriptResult::ParseError(msg), "parse") => msg,
        (other, _) => panic!("expected {} failure, got {:?}", phase, other),
    }
}

/// Value of the last labeled statistics line, e.g. "Number of hits"
pub fn stat_line<'a>(output: &'a [String], label: &str) -> &'a str {
    let prefix = format!("{}: ", label);
    output
        .iter()
        .rev()
        .find_map(|line| line.strip_prefix(prefix.as_str()))
        .unwrap_or_else(|| panic!("no '{}' line in output {:?}", label, output))
}
