//! Structured diagnostic messages with severity, code, and context.

use crate::code::DiagnosticCode;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A structured diagnostic message.
///
/// Diagnostics are the mechanism for reporting warnings and non-fatal errors
/// to the user. Each diagnostic carries a severity level, a unique code, a
/// message, and an optional context naming the configuration item it refers
/// to (an element, a mux index, or a verbatim input line).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The unique code identifying the type of diagnostic.
    pub code: DiagnosticCode,
    /// The main diagnostic message.
    pub message: String,
    /// The configuration item this diagnostic refers to, if any.
    pub context: Option<String>,
}

impl Diagnostic {
    /// Creates a new error diagnostic with the given code and message.
    pub fn error(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            context: None,
        }
    }

    /// Creates a new warning diagnostic with the given code and message.
    pub fn warning(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            context: None,
        }
    }

    /// Attaches a context (e.g. `"BLE_X1Y2"` or `"MUX3"`) to this diagnostic.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context {
            Some(ctx) => write!(
                f,
                "{} [{}] {}: {}",
                self.severity, self.code, ctx, self.message
            ),
            None => write!(f, "{} [{}]: {}", self.severity, self.code, self.message),
        }
    }
}
