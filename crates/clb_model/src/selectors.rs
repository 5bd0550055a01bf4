//! Output-pin, interrupt, and counter-threshold selectors.
//!
//! Output pins and interrupt lines each see only a slice of the fabric: pin
//! `n` chooses among logic elements `4n..4n+3` with a 2-bit code, interrupt
//! `n` among elements `8n..8n+7` with a 3-bit code. The selectors here store
//! the raw code; constructing one from a [`BleId`] checks that the element
//! actually belongs to the pin's or interrupt's group.

use crate::ble::BleId;
use crate::error::ClbError;
use serde::{Deserialize, Serialize};

/// Number of fabric output pins.
pub const PPS_OUT_COUNT: usize = 8;

/// Number of interrupt-source selectors.
pub const IRQ_OUT_COUNT: usize = 4;

/// The 2-bit output selector for one fabric output pin.
///
/// Pin `n` drives one of logic elements `4n..4n+3`; the code is the element's
/// offset within that group of four.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PpsPinSel(u8);

impl PpsPinSel {
    /// Creates a selector from a raw 2-bit code.
    pub fn from_code(code: u8) -> Option<Self> {
        (code < 4).then_some(Self(code))
    }

    /// Creates a selector for `pin` from the logic element it should route.
    ///
    /// Fails with `TypeMisuse` when the element is served by a different
    /// pin's group of four.
    pub fn from_ble(pin: usize, ble: BleId) -> Result<Self, ClbError> {
        let group = ble.index() / 4;
        if group != pin {
            return Err(ClbError::TypeMisuse(format!(
                "{ble} is routed via PPS_OUT{group}, not PPS_OUT{pin}"
            )));
        }
        Ok(Self((ble.index() % 4) as u8))
    }

    /// Returns the raw 2-bit code.
    pub fn code(self) -> u8 {
        self.0
    }

    /// Returns the logic element this selector routes on the given pin.
    pub fn ble(self, pin: usize) -> BleId {
        BleId::new((pin * 4) as u8 + self.0).expect("pin index in 0..8")
    }
}

/// The 3-bit source selector for one interrupt line.
///
/// Interrupt `n` watches one of logic elements `8n..8n+7`; the code is the
/// element's offset within that group of eight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IrqSel(u8);

impl IrqSel {
    /// Creates a selector from a raw 3-bit code.
    pub fn from_code(code: u8) -> Option<Self> {
        (code < 8).then_some(Self(code))
    }

    /// Creates a selector for interrupt `irq` from the logic element it
    /// should watch.
    ///
    /// Fails with `TypeMisuse` when the element belongs to a different
    /// interrupt's group of eight.
    pub fn from_ble(irq: usize, ble: BleId) -> Result<Self, ClbError> {
        let group = ble.index() / 8;
        if group != irq {
            return Err(ClbError::TypeMisuse(format!(
                "{ble} is watched by CLB_IRQ{group}, not CLB_IRQ{irq}"
            )));
        }
        Ok(Self((ble.index() % 8) as u8))
    }

    /// Returns the raw 3-bit code.
    pub fn code(self) -> u8 {
        self.0
    }

    /// Returns the logic element this selector watches on the given
    /// interrupt line.
    pub fn ble(self, irq: usize) -> BleId {
        BleId::new((irq * 8) as u8 + self.0).expect("irq index in 0..4")
    }
}

/// Comparator threshold selector for one counter tap (3-bit code).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
#[repr(u8)]
pub enum CntMux {
    #[default]
    CountIs0 = 0b000,
    CountIs1 = 0b001,
    CountIs2 = 0b010,
    CountIs3 = 0b011,
    CountIs4 = 0b100,
    CountIs5 = 0b101,
    CountIs6 = 0b110,
    CountIs7 = 0b111,
}

impl CntMux {
    /// Every member in code order.
    pub const ALL: [CntMux; 8] = [
        CntMux::CountIs0,
        CntMux::CountIs1,
        CntMux::CountIs2,
        CntMux::CountIs3,
        CntMux::CountIs4,
        CntMux::CountIs5,
        CntMux::CountIs6,
        CntMux::CountIs7,
    ];

    const NAMES: [&'static str; 8] = [
        "CNT0_COUNT_IS_0",
        "CNT0_COUNT_IS_1",
        "CNT0_COUNT_IS_2",
        "CNT0_COUNT_IS_3",
        "CNT0_COUNT_IS_4",
        "CNT0_COUNT_IS_5",
        "CNT0_COUNT_IS_6",
        "CNT0_COUNT_IS_7",
    ];

    /// Returns the 3-bit hardware code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Looks up a member by its 3-bit hardware code.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// Returns the hardware spelling of this threshold.
    pub fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    /// Looks up a member by its hardware spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::NAMES
            .iter()
            .position(|&n| n == name)
            .map(|i| Self::ALL[i])
    }
}
