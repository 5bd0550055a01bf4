//! Diagnostic codes with category prefixes for structured identification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a diagnostic code, determining its prefix letter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    /// Error diagnostics, prefixed with `E`.
    Error,
    /// Warning diagnostics, prefixed with `W`.
    Warning,
}

impl Category {
    /// Returns the single-character prefix for this category.
    pub fn prefix(self) -> char {
        match self {
            Category::Error => 'E',
            Category::Warning => 'W',
        }
    }
}

/// A structured diagnostic code combining a category prefix and a numeric
/// identifier, displayed as e.g. `W101` or `E203`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// The category of this diagnostic.
    pub category: Category,
    /// The numeric identifier within the category.
    pub number: u16,
}

impl DiagnosticCode {
    /// Creates a new diagnostic code.
    pub fn new(category: Category, number: u16) -> Self {
        Self { category, number }
    }
}

/// A LUT mask references an input port that has no source selected.
pub const MISCONFIG_MISSING_INPUT: DiagnosticCode = DiagnosticCode {
    category: Category::Warning,
    number: 101,
};

/// An input port has a source selected but the LUT mask never reads it.
pub const MISCONFIG_UNUSED_INPUT: DiagnosticCode = DiagnosticCode {
    category: Category::Warning,
    number: 102,
};

/// Input ports are selected on an element that has no LUT mask at all.
pub const MISCONFIG_NO_MASK: DiagnosticCode = DiagnosticCode {
    category: Category::Warning,
    number: 103,
};

/// A FASM line did not match any recognized line family.
pub const UNHANDLED_FASM_LINE: DiagnosticCode = DiagnosticCode {
    category: Category::Warning,
    number: 201,
};

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.category.prefix(), self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_prefixes() {
        assert_eq!(Category::Error.prefix(), 'E');
        assert_eq!(Category::Warning.prefix(), 'W');
    }

    #[test]
    fn display_format() {
        let code = DiagnosticCode::new(Category::Error, 101);
        assert_eq!(format!("{code}"), "E101");

        let code = DiagnosticCode::new(Category::Warning, 3);
        assert_eq!(format!("{code}"), "W003");
    }

    #[test]
    fn named_codes() {
        assert_eq!(format!("{MISCONFIG_MISSING_INPUT}"), "W101");
        assert_eq!(format!("{MISCONFIG_UNUSED_INPUT}"), "W102");
        assert_eq!(format!("{MISCONFIG_NO_MASK}"), "W103");
        assert_eq!(format!("{UNHANDLED_FASM_LINE}"), "W201");
    }

    #[test]
    fn serde_roundtrip() {
        let code = DiagnosticCode::new(Category::Error, 101);
        let json = serde_json::to_string(&code).unwrap();
        let back: DiagnosticCode = serde_json::from_str(&json).unwrap();
        assert_eq!(code, back);
    }
}
