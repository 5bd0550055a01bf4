//! Diagnostics for the CLB configuration toolchain.
//!
//! Warnings produced while building or reading a fabric configuration (a LUT
//! mask that disagrees with its port selections, an unrecognized FASM line)
//! are not fatal: the hardware accepts inconsistent configurations, and the
//! reader's default policy is to keep going. This crate provides the channel
//! those warnings flow through — a structured [`Diagnostic`] with a severity
//! and code, accumulated in a thread-safe [`DiagnosticSink`] that callers
//! drain or inspect after an operation completes.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod severity;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::Diagnostic;
pub use severity::Severity;
pub use sink::DiagnosticSink;
