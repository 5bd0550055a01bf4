//! The flattened signal namespace for the Boolean front end.
//!
//! The four port-specific enumerations share signal names but assign them
//! different numeric codes. A [`LutSignal`] wraps a port-specific member
//! together with its port letter, so an expression can remember exactly
//! which source it references and the resolver can recover the
//! port-specific code with a lookup rather than arithmetic.

use clb_model::{LutInA, LutInB, LutInC, LutInD, PortLetter};
use std::fmt;

/// A signal flattened out of one of the four port-specific enumerations.
///
/// The variant records which LUT input port the signal can be reached from;
/// the payload is the port-specific enumeration member. Signals are ordered
/// by port letter, then code, which makes signal sets deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LutSignal {
    /// A source reachable from port A.
    A(LutInA),
    /// A source reachable from port B.
    B(LutInB),
    /// A source reachable from port C.
    C(LutInC),
    /// A source reachable from port D.
    D(LutInD),
}

impl LutSignal {
    /// Returns the port this signal is reachable from.
    pub fn letter(self) -> PortLetter {
        match self {
            LutSignal::A(_) => PortLetter::A,
            LutSignal::B(_) => PortLetter::B,
            LutSignal::C(_) => PortLetter::C,
            LutSignal::D(_) => PortLetter::D,
        }
    }

    /// Returns the positional LUT input index fixed by the port letter.
    pub fn input_index(self) -> usize {
        self.letter().index()
    }

    /// Returns the port-specific 5-bit code.
    pub fn code(self) -> u8 {
        match self {
            LutSignal::A(s) => s.code(),
            LutSignal::B(s) => s.code(),
            LutSignal::C(s) => s.code(),
            LutSignal::D(s) => s.code(),
        }
    }

    /// Returns the hardware spelling of this signal.
    pub fn name(self) -> &'static str {
        match self {
            LutSignal::A(s) => s.name(),
            LutSignal::B(s) => s.name(),
            LutSignal::C(s) => s.name(),
            LutSignal::D(s) => s.name(),
        }
    }
}

impl fmt::Display for LutSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<LutInA> for LutSignal {
    fn from(s: LutInA) -> Self {
        LutSignal::A(s)
    }
}

impl From<LutInB> for LutSignal {
    fn from(s: LutInB) -> Self {
        LutSignal::B(s)
    }
}

impl From<LutInC> for LutSignal {
    fn from(s: LutInC) -> Self {
        LutSignal::C(s)
    }
}

impl From<LutInD> for LutSignal {
    fn from(s: LutInD) -> Self {
        LutSignal::D(s)
    }
}

/// Flattens any port-specific member into a [`LutSignal`].
///
/// A convenience for expression building: `signal(LutInA::ClbBle5)` reads
/// better at call sites than the `From` conversions it wraps.
pub fn signal(s: impl Into<LutSignal>) -> LutSignal {
    s.into()
}
