//! Fundamental data types used throughout iguk

use std::{
    num::Wrapping,
    ops::{Add, AddAssign, Sub, SubAssign},
};
use thiserror::Error;

/// Error type for TapeAddr operations
#[derive(Debug, Clone, Copy, Error, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum TapeAddrError {
    /// The tape addr is negative in a context where this is not allowed.
    #[error("Tape pointer moved too far left (before start of tape)")]
    TapeAddrIsNegative,
    /// Tape address is past the end of the tape
    #[error("Tape pointer moved too far to the right (past end of tape)")]
    TapeAddrTooLarge,
}

/// Newtype for the tape pointer
///
/// The pointer is signed: moving left of cell 0 is allowed, only accessing
/// the cell there is subject to the tape's pointer policy.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct TapeAddr(pub i64);

impl TapeAddr {
    pub fn new(val: i64) -> Self {
        Self(val)
    }
}

impl From<i32> for TapeAddr {
    fn from(value: i32) -> Self {
        Self(value as i64)
    }
}

impl From<i64> for TapeAddr {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<TapeAddr> for i64 {
    fn from(value: TapeAddr) -> Self {
        value.0
    }
}

impl TryFrom<TapeAddr> for usize {
    type Error = TapeAddrError;

    fn try_from(value: TapeAddr) -> Result<Self, Self::Error> {
        if value.0 < 0 {
            Err(TapeAddrError::TapeAddrIsNegative)
        } else {
            Ok(value.0 as Self)
        }
    }
}

impl Add for TapeAddr {
    type Output = TapeAddr;

    fn add(self, rhs: Self) -> Self::Output {
        TapeAddr(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for TapeAddr {
    type Output = TapeAddr;

    fn sub(self, rhs: Self) -> Self::Output {
        TapeAddr(self.0.wrapping_sub(rhs.0))
    }
}

/// A tape cell value (u8 with wrapping semantics).
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct CellValue(Wrapping<u8>);

impl CellValue {
    pub fn is_zero(&self) -> bool {
        self.0 .0 == 0
    }
}

impl AddAssign for CellValue {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for CellValue {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self(Wrapping::<u8>(value.rem_euclid(256) as u8))
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        Self(Wrapping::<u8>(value.rem_euclid(256) as u8))
    }
}

impl From<u8> for CellValue {
    fn from(value: u8) -> Self {
        Self(Wrapping::<u8>(value))
    }
}

impl From<CellValue> for u8 {
    fn from(value: CellValue) -> Self {
        value.0 .0
    }
}

#[cfg(test)]
mod tests {
    use super::{CellValue, TapeAddr, TapeAddrError};

    #[test]
    fn test_cell_value_wraps() {
        let mut v: CellValue = 250.into();
        v += 10.into();
        assert_eq!(u8::from(v), 4);
        v -= 5.into();
        assert_eq!(u8::from(v), 255);
        assert_eq!(CellValue::from(-1i64), 255.into());
        assert_eq!(CellValue::from(513i64), 1.into());
        assert!(CellValue::from(256i32).is_zero());
    }

    #[test]
    fn test_tape_addr_to_usize() {
        assert_eq!(usize::try_from(TapeAddr::new(7)), Ok(7));
        assert_eq!(
            usize::try_from(TapeAddr::new(-1)),
            Err(TapeAddrError::TapeAddrIsNegative)
        );
        assert_eq!(TapeAddr::from(3) - TapeAddr::from(5), TapeAddr::new(-2));
    }
}
