//! Script driver
//!
//! Runs parsed scripts against a [`SymbolTable`], playing the part of the
//! front end that populates the table and classifies each name.

use std::path::PathBuf;

use thiserror::Error;

use crate::ast::{Command, Script};
use crate::config::{ConfigError, TableConfig};
use crate::lexer::{LexError, lex};
use crate::parser::{ParseError, Parser};
use crate::table::{EntryKind, SymbolTable};

/// Script run when the CLI is given no input file
pub const DEMO_SCRIPT: &str = "\
var apple: string;
const banana = 42;
lookup apple;
lookup orange;
stats;
";

#[derive(Debug, Error)]
pub enum RunError {
    #[error("lexical analysis failed: {0}")]
    Lex(#[from] LexError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RunError {
    /// Format error with line:col positions where the error has a span
    pub fn format_with_source_and_file(&self, source: &str, filename: Option<&str>) -> String {
        match self {
            RunError::Parse(e) => e.format_with_source_and_file(source, filename),
            RunError::Lex(e) => {
                let pos = crate::ast::Span::from(e.span.clone()).format_position(source);
                match filename {
                    Some(file) => format!("error: {} at {}:{}", e.message, file, pos),
                    None => format!("error: {} at {}", e.message, pos),
                }
            }
            other => format!("error: {}", other),
        }
    }
}

/// Result of running a script: the populated table and the printed lines
#[derive(Debug)]
pub struct Run {
    pub table: SymbolTable,
    pub output: Vec<String>,
}

impl Run {
    pub fn output_text(&self) -> String {
        self.output.join("\n")
    }
}

/// Execute every command of `script` in order, returning the output lines
pub fn run_script(table: &mut SymbolTable, script: &Script) -> Vec<String> {
    let mut output = Vec::new();

    for command in &script.commands {
        match &command.node {
            Command::Var { name, value_type } => {
                table.insert_or_find(&name.node).kind = EntryKind::Variable {
                    value_type: *value_type,
                };
            }
            Command::Const { name, value } => {
                table.insert_or_find(&name.node).kind = EntryKind::Constant { value: *value };
            }
            Command::Routine { name, result_type } => {
                table.insert_or_find(&name.node).kind = EntryKind::Routine {
                    result_type: *result_type,
                };
            }
            Command::Declare { name } => {
                table.insert_or_find(&name.node);
            }
            Command::Lookup { name } => match table.find(&name.node) {
                Some(entry) => output.push(format!("Found entry: {}", entry.name())),
                None => output.push("Entry not found.".to_string()),
            },
            Command::Clear => table.clear(),
            Command::Stats => output.extend(table.report().lines().map(str::to_string)),
        }
    }

    output
}

/// Lex, parse and run `source` on a fresh table built from `config`
pub fn run_source(source: &str, config: &TableConfig) -> Result<Run, RunError> {
    let tokens = lex(source)?;
    let script = Parser::parse(&tokens)?;
    log::debug!("running {} commands", script.commands.len());

    let mut table = SymbolTable::with_config(config);
    let output = run_script(&mut table, &script);
    Ok(Run { table, output })
}

/// Run the built-in demo on a case-folding table
pub fn run_demo() -> Result<Run, RunError> {
    let config = TableConfig {
        fold_case: true,
        ..TableConfig::default()
    };
    run_source(DEMO_SCRIPT, &config)
}
