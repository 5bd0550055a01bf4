//! Packed-bitstream codec for the CLB fabric.
//!
//! The configuration memory is a 1632-bit store with an irregular bit
//! layout. This crate marshals between the typed [`ClbConfig`] record and
//! that store in both directions, and persists the store as 102 16-bit words
//! in either a JSON document or a PIC assembly source file.
//!
//! [`Bitstream`] is the facade most callers want: it pairs a store with its
//! decoded record, so a configuration can be loaded, inspected, edited
//! through the record, and written back:
//!
//! ```no_run
//! use clb_bitstream::Bitstream;
//! use clb_model::ClkDiv;
//! use std::path::Path;
//!
//! let mut bs = Bitstream::load(Path::new("design.json"))?;
//! bs.config_mut().clkdiv = ClkDiv::DivBy4;
//! bs.save(Path::new("design.json"))?;
//! # Ok::<(), clb_model::ClbError>(())
//! ```

#![warn(missing_docs)]

pub mod asm;
pub mod buffer;
pub mod codec;
pub mod json;

pub use asm::AsmOptions;
pub use buffer::BitBuffer;
pub use codec::{decode, encode};

use clb_model::{ClbConfig, ClbResult};
use std::path::Path;

/// A packed configuration store paired with its decoded record.
///
/// The record is the editable view; [`sync`](Self::sync) (called implicitly
/// by the save methods) re-encodes it into the store. Decoding always
/// produces a fully populated record, so a freshly constructed `Bitstream`
/// reads back every enumeration at its zero code.
#[derive(Debug, Clone)]
pub struct Bitstream {
    buffer: BitBuffer,
    config: ClbConfig,
}

impl Bitstream {
    /// Creates an all-zero bitstream with its decoded (zero-code) record.
    pub fn new() -> Self {
        let buffer = BitBuffer::new();
        let config = decode(&buffer).expect("an all-zero store decodes to the zero-code record");
        Self { buffer, config }
    }

    /// Loads a bitstream from its JSON word-list file and decodes it.
    pub fn load(path: &Path) -> ClbResult<Self> {
        let words = json::load_words(path)?;
        let buffer = BitBuffer::from_words(&words)?;
        let config = decode(&buffer)?;
        Ok(Self { buffer, config })
    }

    /// Returns the decoded configuration record.
    pub fn config(&self) -> &ClbConfig {
        &self.config
    }

    /// Returns the configuration record for editing.
    pub fn config_mut(&mut self) -> &mut ClbConfig {
        &mut self.config
    }

    /// Returns the packed store as currently synced.
    pub fn buffer(&self) -> &BitBuffer {
        &self.buffer
    }

    /// Re-encodes the record into the packed store.
    pub fn sync(&mut self) -> ClbResult<()> {
        encode(&self.config, &mut self.buffer)
    }

    /// Syncs the record and writes the JSON word-list file.
    pub fn save(&mut self, path: &Path) -> ClbResult<()> {
        self.sync()?;
        json::save_words(path, &self.buffer.to_words())
    }

    /// Syncs the record and writes the assembly-source file.
    pub fn save_s(&mut self, path: &Path, options: &AsmOptions) -> ClbResult<()> {
        self.sync()?;
        asm::save_source(path, &self.buffer.to_words(), options)
    }
}

impl Default for Bitstream {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clb_model::{BleId, Clbin, ClkDiv, Flopsel, LutMask};

    #[test]
    fn new_bitstream_reads_zero_codes() {
        let bs = Bitstream::new();
        assert!(bs.buffer().is_empty());
        for ble in BleId::all() {
            assert_eq!(
                bs.config().ble(ble).lut_mask.unwrap().to_string(),
                "0000000000000000"
            );
        }
        assert_eq!(bs.config().clkdiv, ClkDiv::DivBy1);
    }

    #[test]
    fn new_bitstream_saves_as_102_zero_words() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zero.json");
        Bitstream::new().save(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.matches("\"0000\"").count(), 102);
    }

    #[test]
    fn edit_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("design.json");

        let mut bs = Bitstream::new();
        let ble = BleId::new(4).unwrap();
        bs.config_mut().ble_mut(ble).lut_mask = Some(LutMask::new(0x8421));
        bs.config_mut().ble_mut(ble).flopsel = Some(Flopsel::Enable);
        bs.config_mut().muxes[2].clbin = Some(Clbin::Tmr0OverflowOut);
        bs.config_mut().clkdiv = ClkDiv::DivBy64;
        bs.save(&path).unwrap();

        let back = Bitstream::load(&path).unwrap();
        assert_eq!(back.config().ble(ble).lut_mask, Some(LutMask::new(0x8421)));
        assert_eq!(back.config().ble(ble).flopsel, Some(Flopsel::Enable));
        assert_eq!(back.config().muxes[2].clbin, Some(Clbin::Tmr0OverflowOut));
        assert_eq!(back.config().clkdiv, ClkDiv::DivBy64);
    }

    #[test]
    fn save_s_emits_assembly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clb_config.S");
        Bitstream::new()
            .save_s(&path, &AsmOptions::default())
            .unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("dw  0x0000;"));
        assert!(text.contains("_start_clb_config:"));
    }

    #[test]
    fn load_rejects_missing_file() {
        assert!(Bitstream::load(Path::new("/nonexistent/x.json")).is_err());
    }
}
