//! The assembly-source form of the packed configuration.
//!
//! Emits the 102 words as `dw` directives inside a PIC assembly boilerplate:
//! a device-family preprocessor guard and a read-only, non-executable psect
//! whose name is configurable. When `CLB_CONFIG_ADDR` is defined at assembly
//! time the section is placed absolutely at that address. Emission only —
//! the assembly form is never read back.

use clb_model::{ClbError, ClbResult};
use std::fmt::Write as _;
use std::path::Path;

/// Options for assembly-source emission.
#[derive(Debug, Clone)]
pub struct AsmOptions {
    /// Device macros accepted by the preprocessor guard.
    pub device_macros: Vec<String>,
    /// Name of the emitted program section.
    pub section_name: String,
}

impl Default for AsmOptions {
    fn default() -> Self {
        Self {
            device_macros: [
                "_16F13113",
                "_16F13114",
                "_16F13115",
                "_16F13123",
                "_16F13124",
                "_16F13125",
                "_16F13143",
                "_16F13144",
                "_16F13145",
            ]
            .map(String::from)
            .to_vec(),
            section_name: "clb_config".to_string(),
        }
    }
}

/// Renders the words as assembly source text.
pub fn render_source(words: &[u16], opts: &AsmOptions) -> String {
    let guard = opts
        .device_macros
        .iter()
        .map(|m| format!("defined({m})"))
        .collect::<Vec<_>>()
        .join(" || ");
    let psect = &opts.section_name;

    let mut out = String::new();
    let _ = writeln!(out, "#if !({guard})");
    let _ = writeln!(
        out,
        "    #error This module is only suitable for PIC16F13145 family devices"
    );
    let _ = writeln!(out, "#endif");
    let _ = writeln!(out);
    let _ = writeln!(out, "#ifdef CLB_CONFIG_ADDR");
    let _ = writeln!(
        out,
        "    psect {psect},global,class=STRCODE,abs,ovrld,delta=2,noexec,split=0,merge=0,keep"
    );
    let _ = writeln!(out, "#else");
    let _ = writeln!(
        out,
        "    psect {psect},global,class=STRCODE,delta=2,noexec,split=0,merge=0,keep"
    );
    let _ = writeln!(out, "#endif");
    let _ = writeln!(out);
    let _ = writeln!(out, "global _start_{psect}");
    let _ = writeln!(out);
    let _ = writeln!(out, "psect   {psect}");
    let _ = writeln!(out, "#ifdef CLB_CONFIG_ADDR");
    let _ = writeln!(out, "    ORG CLB_CONFIG_ADDR");
    let _ = writeln!(out, "#endif");
    let _ = writeln!(out);
    let _ = writeln!(out, "_start_{psect}:");
    for (i, w) in words.iter().enumerate() {
        if i + 1 == words.len() {
            let _ = write!(out, "    dw  0x{w:04X};");
        } else {
            let _ = writeln!(out, "    dw  0x{w:04X};");
        }
    }
    out
}

/// Writes the assembly source to a file.
pub fn save_source(path: &Path, words: &[u16], opts: &AsmOptions) -> ClbResult<()> {
    std::fs::write(path, render_source(words, opts)).map_err(|e| ClbError::io(path, e))
}
