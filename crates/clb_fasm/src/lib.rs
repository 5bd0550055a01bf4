//! FASM (FPGA Assembly) reader for the CLB fabric.
//!
//! Place-and-route tools describe a fabric configuration as a line-oriented
//! text file of dotted identifiers. This crate reads that form into the same
//! [`ClbConfig`](clb_model::ClbConfig) record the bitstream codec produces,
//! so a FASM file and a packed bitstream describing the same design decode
//! to records that agree on every field the FASM file set.
//!
//! Lines starting with `#` are comments. A line that matches no recognized
//! family is reported as a warning and skipped by default;
//! [`Strictness::Strict`] turns it into a parse failure. Malformed tokens
//! inside a recognized family always fail, naming the offending line
//! verbatim.

#![warn(missing_docs)]

pub mod parser;

pub use parser::parse_str;

use clb_diagnostics::DiagnosticSink;
use clb_model::{ClbConfig, ClbError, ClbResult};
use std::path::Path;

/// How to treat lines that match no recognized family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strictness {
    /// Warn through the diagnostic sink and keep parsing.
    #[default]
    Lenient,
    /// Fail with a parse error.
    Strict,
}

/// Reads a FASM file into a configuration record.
pub fn load(path: &Path, sink: &DiagnosticSink, strictness: Strictness) -> ClbResult<ClbConfig> {
    let text = std::fs::read_to_string(path).map_err(|e| ClbError::io(path, e))?;
    parse_str(&text, sink, strictness)
}
