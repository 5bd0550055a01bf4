//! The 16-bit LUT truth table and active-input detection.

use crate::error::ClbError;
use crate::signals::PortLetter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 4-input LUT truth table.
///
/// Bit `w` of the mask (for `w` in 0..16) is the LUT output when the inputs
/// are driven with `a = bit0(w)`, `b = bit1(w)`, `c = bit2(w)`, `d = bit3(w)`.
/// The textual form is the 16-character '0'/'1' string with the most
/// significant bit (address 15) leftmost, matching the `16'b...` literal in
/// FASM `LUT.INIT` lines.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct LutMask(u16);

impl LutMask {
    /// Creates a mask from its raw 16-bit value.
    pub fn new(bits: u16) -> Self {
        Self(bits)
    }

    /// Returns the raw 16-bit value.
    pub fn bits(self) -> u16 {
        self.0
    }

    /// Returns the LUT output at address `w` (0..16).
    pub fn output_at(self, w: usize) -> bool {
        debug_assert!(w < 16);
        self.0 >> w & 1 == 1
    }

    /// Evaluates the mask as a function of the four named inputs.
    pub fn eval(self, a: bool, b: bool, c: bool, d: bool) -> bool {
        let w = (a as usize) | (b as usize) << 1 | (c as usize) << 2 | (d as usize) << 3;
        self.output_at(w)
    }

    /// Determines which inputs the truth table actually depends on.
    ///
    /// Input `k` is active iff toggling it changes the output for some
    /// assignment of the other three inputs. The result is indexed by
    /// positional input (A=0 .. D=3); it is the minimal set of inputs the
    /// LUT uses, regardless of which ports have sources selected.
    pub fn active_inputs(self) -> [bool; 4] {
        let mut active = [false; 4];
        for k in 0..4 {
            for addr in 0..16usize {
                if addr & (1 << k) != 0 {
                    continue;
                }
                if self.output_at(addr) != self.output_at(addr | 1 << k) {
                    active[k] = true;
                    break;
                }
            }
        }
        active
    }

    /// Returns the ports whose positional inputs are active.
    pub fn active_ports(self) -> Vec<PortLetter> {
        let active = self.active_inputs();
        PortLetter::ALL
            .into_iter()
            .filter(|p| active[p.index()])
            .collect()
    }
}

impl fmt::Display for LutMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016b}", self.0)
    }
}

impl FromStr for LutMask {
    type Err = ClbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 16 || !s.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(ClbError::parse(s));
        }
        let bits = u16::from_str_radix(s, 2).map_err(|_| ClbError::parse(s))?;
        Ok(Self(bits))
    }
}
