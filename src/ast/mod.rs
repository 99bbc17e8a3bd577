//! Syntax tree for symbol table scripts
//!
//! A script is a flat list of commands, each driving one table operation.

mod span;

pub use span::{LineCol, Span, Spanned};

use crate::table::ValueType;

/// One script command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `var name: type;`
    Var {
        name: Spanned<String>,
        value_type: ValueType,
    },
    /// `const name = value;`
    Const { name: Spanned<String>, value: i32 },
    /// `routine name: type;`
    Routine {
        name: Spanned<String>,
        result_type: ValueType,
    },
    /// `declare name;` inserts without classifying
    Declare { name: Spanned<String> },
    /// `lookup name;`
    Lookup { name: Spanned<String> },
    /// `clear;`
    Clear,
    /// `stats;`
    Stats,
}

/// A parsed script
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Script {
    pub commands: Vec<Spanned<Command>>,
}
