//! Logic-element addressing and coordinate translation.
//!
//! The 32 basic logic elements are numbered 0..=31, row-major with the column
//! fastest. Two textual coordinate systems name the same element:
//!
//! - the `BLE_X<x>Y<y>` grid with `x` in 1..=4 and `y` in 2..=9, used by FASM
//!   element headers, and
//! - the `LO_<y>_<x>` grid with origin two rows and one column earlier, used
//!   by routed-source tokens.
//!
//! Both translations are invertible and exercised by the FASM reader.

use crate::error::ClbError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The index of one basic logic element, 0..=31.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct BleId(u8);

impl BleId {
    /// The number of logic elements in the fabric.
    pub const COUNT: usize = 32;

    /// Creates a `BleId` from a raw element index.
    pub fn new(index: u8) -> Option<Self> {
        (index < Self::COUNT as u8).then_some(Self(index))
    }

    /// Returns the raw element index.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterates over all 32 element ids in index order.
    pub fn all() -> impl Iterator<Item = BleId> {
        (0..Self::COUNT as u8).map(BleId)
    }

    /// Returns the `x` coordinate of the `BLE_X<x>Y<y>` grid (1..=4).
    pub fn x(self) -> u8 {
        self.0 % 4 + 1
    }

    /// Returns the `y` coordinate of the `BLE_X<x>Y<y>` grid (2..=9).
    pub fn y(self) -> u8 {
        self.0 / 4 + 2
    }

    /// Creates a `BleId` from `BLE_X<x>Y<y>` grid coordinates.
    pub fn from_xy(x: u8, y: u8) -> Option<Self> {
        if !(1..=4).contains(&x) || !(2..=9).contains(&y) {
            return None;
        }
        Some(Self((y - 2) * 4 + (x - 1)))
    }

    /// Returns the FASM element header spelling, e.g. `BLE_X3Y4`.
    pub fn fasm_name(self) -> String {
        format!("BLE_X{}Y{}", self.x(), self.y())
    }

    /// Parses the FASM element header spelling (`BLE_X<x>Y<y>`).
    pub fn from_fasm(token: &str) -> Result<Self, ClbError> {
        let rest = token
            .strip_prefix("BLE_X")
            .ok_or_else(|| ClbError::parse(token))?;
        let (x, y) = rest.split_once('Y').ok_or_else(|| ClbError::parse(token))?;
        let x: u8 = x.parse().map_err(|_| ClbError::parse(token))?;
        let y: u8 = y.parse().map_err(|_| ClbError::parse(token))?;
        Self::from_xy(x, y).ok_or_else(|| ClbError::parse(token))
    }

    /// Returns the routed-source spelling, e.g. `LO_2_2` for `BLE_X3Y4`.
    pub fn lo_name(self) -> String {
        format!("LO_{}_{}", self.y() - 2, self.x() - 1)
    }

    /// Parses the routed-source spelling (`LO_<y>_<x>`).
    pub fn from_lo(token: &str) -> Result<Self, ClbError> {
        let rest = token
            .strip_prefix("LO_")
            .ok_or_else(|| ClbError::parse(token))?;
        let (y, x) = rest.split_once('_').ok_or_else(|| ClbError::parse(token))?;
        let y: u8 = y.parse().map_err(|_| ClbError::parse(token))?;
        let x: u8 = x.parse().map_err(|_| ClbError::parse(token))?;
        Self::from_xy(x + 1, y + 2).ok_or_else(|| ClbError::parse(token))
    }

    /// Returns the hardware spelling of this element's output signal
    /// (`CLB_BLE_<n>`).
    pub fn signal_name(self) -> String {
        format!("CLB_BLE_{}", self.0)
    }
}

impl fmt::Display for BleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CLB_BLE_{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_bounds() {
        assert!(BleId::new(0).is_some());
        assert!(BleId::new(31).is_some());
        assert!(BleId::new(32).is_none());
    }

    #[test]
    fn xy_mapping_is_row_major_x_fastest() {
        let b0 = BleId::new(0).unwrap();
        assert_eq!((b0.x(), b0.y()), (1, 2));
        let b3 = BleId::new(3).unwrap();
        assert_eq!((b3.x(), b3.y()), (4, 2));
        let b4 = BleId::new(4).unwrap();
        assert_eq!((b4.x(), b4.y()), (1, 3));
        let b31 = BleId::new(31).unwrap();
        assert_eq!((b31.x(), b31.y()), (4, 9));
    }

    #[test]
    fn xy_roundtrip_all() {
        for ble in BleId::all() {
            assert_eq!(BleId::from_xy(ble.x(), ble.y()), Some(ble));
        }
    }

    #[test]
    fn from_xy_rejects_out_of_grid() {
        assert_eq!(BleId::from_xy(0, 2), None);
        assert_eq!(BleId::from_xy(5, 2), None);
        assert_eq!(BleId::from_xy(1, 1), None);
        assert_eq!(BleId::from_xy(1, 10), None);
    }

    #[test]
    fn fasm_name_roundtrip_all() {
        for ble in BleId::all() {
            assert_eq!(BleId::from_fasm(&ble.fasm_name()).unwrap(), ble);
        }
        assert_eq!(BleId::from_fasm("BLE_X3Y4").unwrap().index(), 10);
    }

    #[test]
    fn lo_name_roundtrip_all() {
        for ble in BleId::all() {
            assert_eq!(BleId::from_lo(&ble.lo_name()).unwrap(), ble);
        }
    }

    #[test]
    fn lo_and_fasm_name_same_element() {
        // LO_1_2 is one column and two rows off BLE_X3Y3.
        let from_lo = BleId::from_lo("LO_1_2").unwrap();
        let from_fasm = BleId::from_fasm("BLE_X3Y3").unwrap();
        assert_eq!(from_lo, from_fasm);
        assert_eq!(from_lo.index(), 6);
    }

    #[test]
    fn malformed_tokens_fail() {
        assert!(BleId::from_fasm("BLE_3Y4").is_err());
        assert!(BleId::from_fasm("BLE_XaY4").is_err());
        assert!(BleId::from_fasm("BLE_X9Y4").is_err());
        assert!(BleId::from_lo("LO_8_0").is_err());
        assert!(BleId::from_lo("LO_1").is_err());
    }

    #[test]
    fn signal_name_spelling() {
        assert_eq!(BleId::new(17).unwrap().signal_name(), "CLB_BLE_17");
        assert_eq!(format!("{}", BleId::new(5).unwrap()), "CLB_BLE_5");
    }

    #[test]
    fn serde_roundtrip() {
        let ble = BleId::new(21).unwrap();
        let json = serde_json::to_string(&ble).unwrap();
        let back: BleId = serde_json::from_str(&json).unwrap();
        assert_eq!(ble, back);
    }
}
