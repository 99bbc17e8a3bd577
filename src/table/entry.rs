//! Symbol entries
//!
//! The metadata attached to every name stored in a [`SymbolTable`](super::SymbolTable).

use std::fmt;
use std::str::FromStr;

/// The value types a variable or routine result can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Integer,
    String,
    Boolean,
    Float,
    None,
}

impl ValueType {
    pub const ALL: [ValueType; 5] = [
        ValueType::Integer,
        ValueType::String,
        ValueType::Boolean,
        ValueType::Float,
        ValueType::None,
    ];

    /// Lowercase name used in reports and scripts
    pub fn display_name(&self) -> &'static str {
        match self {
            ValueType::Integer => "integer",
            ValueType::String => "string",
            ValueType::Boolean => "boolean",
            ValueType::Float => "float",
            ValueType::None => "none",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when a string does not name a [`ValueType`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value type '{0}'")]
pub struct UnknownValueType(pub String);

impl FromStr for ValueType {
    type Err = UnknownValueType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValueType::ALL
            .into_iter()
            .find(|ty| ty.display_name() == s)
            .ok_or_else(|| UnknownValueType(s.to_string()))
    }
}

/// What role a name plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryKind {
    Variable { value_type: ValueType },
    Constant { value: i32 },
    Routine { result_type: ValueType },
    /// Freshly inserted, not yet classified by the caller
    #[default]
    Undefined,
}

impl EntryKind {
    pub fn is_undefined(&self) -> bool {
        matches!(self, EntryKind::Undefined)
    }

    pub fn display_name(&self) -> String {
        match self {
            EntryKind::Variable { value_type } => format!("variable: {}", value_type),
            EntryKind::Constant { value } => format!("constant = {}", value),
            EntryKind::Routine { result_type } => format!("routine -> {}", result_type),
            EntryKind::Undefined => "undefined".to_string(),
        }
    }
}

/// A single name in the table together with its metadata
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolEntry {
    name: Box<str>,
    pub kind: EntryKind,
}

impl SymbolEntry {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Undefined,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Variable type, if this entry is a variable
    pub fn value_type(&self) -> Option<ValueType> {
        match self.kind {
            EntryKind::Variable { value_type } => Some(value_type),
            _ => None,
        }
    }

    /// Constant value, if this entry is a constant
    pub fn constant_value(&self) -> Option<i32> {
        match self.kind {
            EntryKind::Constant { value } => Some(value),
            _ => None,
        }
    }

    /// Routine result type, if this entry is a routine
    pub fn result_type(&self) -> Option<ValueType> {
        match self.kind {
            EntryKind::Routine { result_type } => Some(result_type),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_is_undefined() {
        let entry = SymbolEntry::new("apple");
        assert_eq!(entry.name(), "apple");
        assert!(entry.kind.is_undefined());
        assert_eq!(entry.value_type(), None);
        assert_eq!(entry.constant_value(), None);
        assert_eq!(entry.result_type(), None);
    }

    #[test]
    fn test_payload_accessors_follow_tag() {
        let mut entry = SymbolEntry::new("x");
        entry.kind = EntryKind::Variable { value_type: ValueType::String };
        assert_eq!(entry.value_type(), Some(ValueType::String));
        assert_eq!(entry.result_type(), None);

        entry.kind = EntryKind::Constant { value: 42 };
        assert_eq!(entry.constant_value(), Some(42));
        assert_eq!(entry.value_type(), None);

        entry.kind = EntryKind::Routine { result_type: ValueType::Float };
        assert_eq!(entry.result_type(), Some(ValueType::Float));
        assert_eq!(entry.constant_value(), None);
    }

    #[test]
    fn test_value_type_names() {
        for ty in ValueType::ALL {
            assert_eq!(ty.display_name().parse::<ValueType>(), Ok(ty));
        }
        assert_eq!(
            "double".parse::<ValueType>(),
            Err(UnknownValueType("double".to_string()))
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(
            EntryKind::Variable { value_type: ValueType::Boolean }.display_name(),
            "variable: boolean"
        );
        assert_eq!(EntryKind::Constant { value: -3 }.display_name(), "constant = -3");
        assert_eq!(
            EntryKind::Routine { result_type: ValueType::None }.display_name(),
            "routine -> none"
        );
        assert_eq!(EntryKind::Undefined.display_name(), "undefined");
    }
}
