//! Input routing, output-enable, and clock enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;

/// Source selectable by one of the 16 input routing muxes (5-bit code).
///
/// The packed field is six bits wide; bit 5 is reserved in silicon and is
/// never set by this enumeration. Codes `0b11101` and `0b11110` are
/// unassigned and decode as `UnknownEncoding`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
#[repr(u8)]
pub enum Clbin {
    Clbin0Pps = 0b00000,
    Clbin1Pps = 0b00001,
    Clbin2Pps = 0b00010,
    Clbin3Pps = 0b00011,
    Fosc = 0b00100,
    Hfintosc = 0b00101,
    Lfintosc = 0b00110,
    Mfintosc500Khz = 0b00111,
    Mfintosc32Khz = 0b01000,
    Extosc = 0b01001,
    Adcrc = 0b01010,
    Tmr0OverflowOut = 0b01011,
    Tmr1OverflowOut = 0b01100,
    Tmr2PostscaledOut = 0b01101,
    Ccp1Out = 0b01110,
    Ccp2Out = 0b01111,
    Pwm1Out = 0b10000,
    Pwm2Out = 0b10001,
    Iocif = 0b10010,
    Clc1Out = 0b10011,
    Clc2Out = 0b10100,
    Clc3Out = 0b10101,
    Clc4Out = 0b10110,
    Tx1 = 0b10111,
    Sdo1 = 0b11000,
    Sck1 = 0b11001,
    ClbswinWriteHold = 0b11010,
    C1Out = 0b11011,
    C2Out = 0b11100,
    Zero = 0b11111,
}

impl Clbin {
    /// The reserved sixth bit of the packed CLBIN field. Preserved in the
    /// layout but rejected on decode; the encoder always writes it as 0.
    pub const RESERVED_BIT: u8 = 0b100000;

    /// Every assigned member in code order.
    pub const ALL: [Clbin; 30] = [
        Clbin::Clbin0Pps,
        Clbin::Clbin1Pps,
        Clbin::Clbin2Pps,
        Clbin::Clbin3Pps,
        Clbin::Fosc,
        Clbin::Hfintosc,
        Clbin::Lfintosc,
        Clbin::Mfintosc500Khz,
        Clbin::Mfintosc32Khz,
        Clbin::Extosc,
        Clbin::Adcrc,
        Clbin::Tmr0OverflowOut,
        Clbin::Tmr1OverflowOut,
        Clbin::Tmr2PostscaledOut,
        Clbin::Ccp1Out,
        Clbin::Ccp2Out,
        Clbin::Pwm1Out,
        Clbin::Pwm2Out,
        Clbin::Iocif,
        Clbin::Clc1Out,
        Clbin::Clc2Out,
        Clbin::Clc3Out,
        Clbin::Clc4Out,
        Clbin::Tx1,
        Clbin::Sdo1,
        Clbin::Sck1,
        Clbin::ClbswinWriteHold,
        Clbin::C1Out,
        Clbin::C2Out,
        Clbin::Zero,
    ];

    /// Returns the 5-bit hardware code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Looks up a member by its 5-bit hardware code.
    ///
    /// Returns `None` for the unassigned codes `0b11101` and `0b11110` and
    /// anything that does not fit in five bits (including values carrying the
    /// reserved sixth bit).
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.code() == code)
    }

    /// Returns the hardware spelling of this source.
    pub fn name(self) -> &'static str {
        match self {
            Clbin::Clbin0Pps => "CLBIN0PPS",
            Clbin::Clbin1Pps => "CLBIN1PPS",
            Clbin::Clbin2Pps => "CLBIN2PPS",
            Clbin::Clbin3Pps => "CLBIN3PPS",
            Clbin::Fosc => "FOSC",
            Clbin::Hfintosc => "HFINTOSC",
            Clbin::Lfintosc => "LFINTOSC",
            Clbin::Mfintosc500Khz => "MFINTOSC_500KHZ",
            Clbin::Mfintosc32Khz => "MFINTOSC_32KHZ",
            Clbin::Extosc => "EXTOSC",
            Clbin::Adcrc => "ADCRC",
            Clbin::Tmr0OverflowOut => "TMR0_OVERFLOW_OUT",
            Clbin::Tmr1OverflowOut => "TMR1_OVERFLOW_OUT",
            Clbin::Tmr2PostscaledOut => "TMR2_POSTSCALED_OUT",
            Clbin::Ccp1Out => "CCP1_OUT",
            Clbin::Ccp2Out => "CCP2_OUT",
            Clbin::Pwm1Out => "PWM1_OUT",
            Clbin::Pwm2Out => "PWM2_OUT",
            Clbin::Iocif => "IOCIF",
            Clbin::Clc1Out => "CLC1_OUT",
            Clbin::Clc2Out => "CLC2_OUT",
            Clbin::Clc3Out => "CLC3_OUT",
            Clbin::Clc4Out => "CLC4_OUT",
            Clbin::Tx1 => "TX1",
            Clbin::Sdo1 => "SDO1",
            Clbin::Sck1 => "SCK1",
            Clbin::ClbswinWriteHold => "CLBSWIN_WRITE_HOLD",
            Clbin::C1Out => "C1_OUT",
            Clbin::C2Out => "C2_OUT",
            Clbin::Zero => "ZERO",
        }
    }
}

impl fmt::Display for Clbin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input synchronizer mode for a routing mux (3-bit flag field).
///
/// The all-zero value is the direct (unsynchronized) path; the three flag
/// bits select synchronization, edge detection, and edge inversion and may
/// be combined freely. Any 3-bit value is a valid configuration.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct InputSync(u8);

impl InputSync {
    /// The direct (unsynchronized) input path.
    pub const DIRECT_IN: InputSync = InputSync(0b000);
    /// Synchronize the input to the CLB clock.
    pub const SYNC: InputSync = InputSync(0b100);
    /// Detect edges instead of passing the level.
    pub const EDGE_DETECT: InputSync = InputSync(0b010);
    /// Invert the detected edge.
    pub const EDGE_INVERT: InputSync = InputSync(0b001);

    /// Creates a mode from raw bits, rejecting anything wider than 3 bits.
    pub fn from_bits(bits: u8) -> Option<Self> {
        (bits <= 0b111).then_some(Self(bits))
    }

    /// Returns the raw 3-bit field value.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` when every flag in `other` is set in `self`.
    pub fn contains(self, other: InputSync) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for InputSync {
    type Output = InputSync;

    fn bitor(self, rhs: InputSync) -> InputSync {
        InputSync(self.0 | rhs.0)
    }
}

/// Output-enable selector for one of the eight fabric output pins (4-bit code).
///
/// Selects either a logic element (the high half of the code space) or a
/// TRIS-controlled pad direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
#[repr(u8)]
pub enum Oesel {
    Tris7 = 0b0000,
    Tris6 = 0b0001,
    Tris5 = 0b0010,
    Tris4 = 0b0011,
    Tris3 = 0b0100,
    Tris2 = 0b0101,
    Tris1 = 0b0110,
    Tris0 = 0b0111,
    Ble3 = 0b1000,
    Ble7 = 0b1001,
    Ble11 = 0b1010,
    Ble15 = 0b1011,
    Ble19 = 0b1100,
    Ble23 = 0b1101,
    Ble27 = 0b1110,
    Ble31 = 0b1111,
}

impl Oesel {
    /// Every member in code order.
    pub const ALL: [Oesel; 16] = [
        Oesel::Tris7,
        Oesel::Tris6,
        Oesel::Tris5,
        Oesel::Tris4,
        Oesel::Tris3,
        Oesel::Tris2,
        Oesel::Tris1,
        Oesel::Tris0,
        Oesel::Ble3,
        Oesel::Ble7,
        Oesel::Ble11,
        Oesel::Ble15,
        Oesel::Ble19,
        Oesel::Ble23,
        Oesel::Ble27,
        Oesel::Ble31,
    ];

    const NAMES: [&'static str; 16] = [
        "TRIS7", "TRIS6", "TRIS5", "TRIS4", "TRIS3", "TRIS2", "TRIS1", "TRIS0", "BLE_3", "BLE_7",
        "BLE_11", "BLE_15", "BLE_19", "BLE_23", "BLE_27", "BLE_31",
    ];

    /// Returns the 4-bit hardware code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Looks up a member by its 4-bit hardware code.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// Returns the hardware spelling of this selector.
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

impl fmt::Display for Oesel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Clock divider for the fabric clock (3-bit code, powers of two).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[allow(missing_docs)]
#[repr(u8)]
pub enum ClkDiv {
    #[default]
    DivBy1 = 0b000,
    DivBy2 = 0b001,
    DivBy4 = 0b010,
    DivBy8 = 0b011,
    DivBy16 = 0b100,
    DivBy32 = 0b101,
    DivBy64 = 0b110,
    DivBy128 = 0b111,
}

impl ClkDiv {
    /// Every member in code order.
    pub const ALL: [ClkDiv; 8] = [
        ClkDiv::DivBy1,
        ClkDiv::DivBy2,
        ClkDiv::DivBy4,
        ClkDiv::DivBy8,
        ClkDiv::DivBy16,
        ClkDiv::DivBy32,
        ClkDiv::DivBy64,
        ClkDiv::DivBy128,
    ];

    /// Returns the 3-bit hardware code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Looks up a member by its 3-bit hardware code.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// Returns the divide ratio (1, 2, 4, ... 128).
    pub fn ratio(self) -> u16 {
        1 << self.code()
    }
}
