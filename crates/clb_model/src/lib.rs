//! Data model for the PIC16F131xx Configurable Logic Block fabric.
//!
//! This crate is the ground truth the rest of the toolchain builds on: the
//! port-specific signal enumerations selectable at each LUT input, the
//! routing/output/interrupt/counter enumerations, the typed configuration
//! record for one fully configured fabric, and the bit-address tables that
//! place every field inside the 1632-bit configuration store.
//!
//! The fabric has 32 basic logic elements (each a 4-input LUT plus an
//! optional flip-flop), 16 input routing muxes, 8 output-pin selectors,
//! 4 interrupt selectors, a counter block, and a clock divider. Everything
//! here is plain data with value semantics; encoding and decoding live in
//! `clb_bitstream`, and the FASM reader in `clb_fasm` fills the same record.

#![warn(missing_docs)]

pub mod bitmap;
pub mod ble;
pub mod error;
pub mod lut_mask;
pub mod record;
pub mod routing;
pub mod selectors;
pub mod signals;

pub use ble::BleId;
pub use error::{ClbError, ClbResult};
pub use lut_mask::LutMask;
pub use record::{BleCfg, ClbConfig, CounterCfg, MuxCfg};
pub use routing::{Clbin, ClkDiv, InputSync, Oesel};
pub use selectors::{CntMux, IrqSel, PpsPinSel};
pub use signals::{Flopsel, LutInA, LutInB, LutInC, LutInD, PortLetter};
