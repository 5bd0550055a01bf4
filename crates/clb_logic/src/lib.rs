//! Symbolic Boolean front end for the CLB fabric.
//!
//! A user describes what a logic element should compute as a Boolean
//! expression over named fabric signals:
//!
//! ```
//! use clb_logic::{auto_ble, signal};
//! use clb_model::{LutInA, LutInB, LutInC};
//! use clb_diagnostics::DiagnosticSink;
//!
//! let sink = DiagnosticSink::new();
//! let expr = signal(LutInA::ClbBle5) ^ signal(LutInC::In8) | signal(LutInB::ClbBle8);
//! let cfg = auto_ble(expr, None, &sink).unwrap();
//! assert_eq!(cfg.input_a, Some(LutInA::ClbBle5));
//! ```
//!
//! Expressions stay symbolic: combining them never evaluates anything, and
//! each expression carries the set of signals it references. That is what
//! lets [`auto_ble`] both synthesize the 16-bit truth table (by evaluating
//! the tree across all 16 input combinations) and assign each referenced
//! signal to its LUT input port in one pass.

#![warn(missing_docs)]

pub mod expr;
pub mod lut4;
pub mod resolve;
pub mod signal;

pub use expr::{BinOp, Expr};
pub use lut4::{truth_table, truth_table_fn};
pub use resolve::auto_ble;
pub use signal::{signal, LutSignal};
