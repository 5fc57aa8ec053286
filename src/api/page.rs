//! Validated page numbers.

use std::fmt;
use std::num::NonZeroU32;

use super::error::ApiError;

/// A page index accepted by the users API: an integer `>= 1`.
///
/// Conversions from wider numeric types reject zero, negatives, fractions and
/// non-finite floats with [`ApiError::InvalidArgument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(NonZeroU32::MIN);

    pub fn new(page: u32) -> Result<Self, ApiError> {
        NonZeroU32::new(page)
            .map(PageNumber)
            .ok_or_else(|| ApiError::InvalidArgument(page.to_string()))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// The following page. Saturates at `u32::MAX`.
    pub fn next(self) -> Self {
        PageNumber(self.0.saturating_add(1))
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NonZeroU32> for PageNumber {
    fn from(page: NonZeroU32) -> Self {
        PageNumber(page)
    }
}

impl TryFrom<u32> for PageNumber {
    type Error = ApiError;

    fn try_from(page: u32) -> Result<Self, Self::Error> {
        PageNumber::new(page)
    }
}

impl TryFrom<i64> for PageNumber {
    type Error = ApiError;

    fn try_from(page: i64) -> Result<Self, Self::Error> {
        u32::try_from(page)
            .map_err(|_| ApiError::InvalidArgument(page.to_string()))
            .and_then(PageNumber::new)
    }
}

impl TryFrom<f64> for PageNumber {
    type Error = ApiError;

    fn try_from(page: f64) -> Result<Self, Self::Error> {
        if !page.is_finite() || page.fract() != 0.0 || page < 1.0 || page > u32::MAX as f64 {
            return Err(ApiError::InvalidArgument(page.to_string()));
        }
        PageNumber::new(page as u32)
    }
}
