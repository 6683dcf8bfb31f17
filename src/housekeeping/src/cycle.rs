//! Dev cycle numbers and the archive filename prefix built from them.

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;
use thiserror::Error;

/// Smallest accepted cycle number
pub const MIN_CYCLE: u16 = 1;

/// Largest accepted cycle number (fits the 4-digit padding)
pub const MAX_CYCLE: u16 = 9999;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CycleError {
    #[error("Cycle number must be a valid integer, got {0:?}")]
    NotAnInteger(String),

    #[error("Cycle number must be between {MIN_CYCLE} and {MAX_CYCLE}, got {0}")]
    OutOfRange(String),
}

/// A validated dev cycle number in `1..=9999`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CycleNumber(u16);

impl CycleNumber {
    pub fn new(value: i64) -> Result<Self, CycleError> {
        match u16::try_from(value) {
            Ok(n) if (MIN_CYCLE..=MAX_CYCLE).contains(&n) => Ok(CycleNumber(n)),
            _ => Err(CycleError::OutOfRange(value.to_string())),
        }
    }

    pub fn get(self) -> u16 {
        self.0
    }

    /// Zero-padded 4-digit form, e.g. `0013`
    pub fn padded(self) -> String {
        format!("{:04}", self.0)
    }

    /// Filename prefix shared by every document of this cycle
    ///
    /// `CycleNumber(13).prefix("DevCycle", 2025)` gives `DevCycle_2025_0013`.
    pub fn prefix(self, name: &str, year: u32) -> String {
        format!("{}_{}_{}", name, year, self.padded())
    }
}

impl fmt::Display for CycleNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl FromStr for CycleNumber {
    type Err = CycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed.parse::<i64>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                CycleError::OutOfRange(trimmed.to_string())
            }
            _ => CycleError::NotAnInteger(s.to_string()),
        })?;
        CycleNumber::new(value)
    }
}
