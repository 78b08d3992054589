use std::{
    fmt::{self, Display},
    iter::Sum,
    ops::{Add, Div, Mul, Sub},
};

use reborn_utils::{text::fluid::value_display, units};
use serde::{Deserialize, Serialize};

/// An amount of fluid, measured in droplets.
///
/// Every operation returns a new value. Results that would be negative are
/// clamped to zero and results that would overflow saturate at `i64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "FluidValueRepr", into = "FluidValueRepr")]
pub struct FluidValue {
    raw_value: i64,
}

/// The structured form, `{"value": <droplets>}`.
#[derive(Serialize, Deserialize)]
struct FluidValueRepr {
    value: i64,
}

impl From<FluidValueRepr> for FluidValue {
    fn from(repr: FluidValueRepr) -> Self {
        Self::from_raw(repr.value)
    }
}

impl From<FluidValue> for FluidValueRepr {
    fn from(value: FluidValue) -> Self {
        Self {
            value: value.raw_value,
        }
    }
}

#[allow(clippy::should_implement_trait)]
impl FluidValue {
    /// No fluid.
    pub const EMPTY: Self = Self::new(0);
    /// A quarter of a bucket.
    pub const BUCKET_QUARTER: Self = Self::new(units::BUCKET / 4);
    /// One bucket.
    pub const BUCKET: Self = Self::new(units::BUCKET);

    /// Creates a value from a droplet count the caller knows is not negative.
    #[must_use]
    pub const fn new(raw_value: i64) -> Self {
        debug_assert!(raw_value >= 0, "fluid values can't be negative");
        Self { raw_value }
    }

    /// Creates a value from a droplet count, clamping negatives to zero.
    #[must_use]
    pub const fn from_raw(raw_value: i64) -> Self {
        Self {
            raw_value: if raw_value < 0 { 0 } else { raw_value },
        }
    }

    /// Same as [`FluidValue::EMPTY`].
    #[must_use]
    pub const fn zero() -> Self {
        Self::EMPTY
    }

    /// `buckets` whole buckets.
    #[must_use]
    pub fn from_buckets(buckets: i64) -> Self {
        Self::BUCKET.multiply(buckets)
    }

    /// Converts legacy millibuckets, 81 droplets each.
    #[must_use]
    pub fn from_millibuckets(millibuckets: i64) -> Self {
        Self::from_raw(millibuckets.saturating_mul(units::MILLIBUCKET))
    }

    /// The amount in droplets.
    #[must_use]
    pub const fn raw_value(self) -> i64 {
        self.raw_value
    }

    /// Multiplies the amount by `value`.
    #[must_use]
    pub fn multiply(self, value: i64) -> Self {
        Self::from_raw(self.raw_value.saturating_mul(value))
    }

    /// Integer division, rounding toward zero. Dividing by zero gives [`FluidValue::EMPTY`].
    #[must_use]
    pub fn fraction(self, divider: i64) -> Self {
        self.raw_value
            .checked_div(divider)
            .map_or(Self::EMPTY, Self::from_raw)
    }

    /// Adds both amounts.
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self::from_raw(self.raw_value.saturating_add(other.raw_value))
    }

    /// Subtracts `other`, stopping at zero.
    #[must_use]
    pub fn subtract(self, other: Self) -> Self {
        Self::from_raw(self.raw_value.saturating_sub(other.raw_value))
    }

    /// The smaller of both amounts.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::from_raw(self.raw_value.min(other.raw_value))
    }

    /// Returns `true` if there are no droplets.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.raw_value == 0
    }

    /// `self > other`.
    #[must_use]
    pub const fn more_than(self, other: Self) -> bool {
        self.raw_value > other.raw_value
    }

    /// `self >= other`.
    #[must_use]
    pub const fn equal_or_more_than(self, other: Self) -> bool {
        self.raw_value >= other.raw_value
    }

    /// `self < other`.
    #[must_use]
    pub const fn less_than(self, other: Self) -> bool {
        self.raw_value < other.raw_value
    }

    /// `self <= other`.
    #[must_use]
    pub const fn less_than_or_equal(self, other: Self) -> bool {
        self.raw_value <= other.raw_value
    }
}

impl Display for FluidValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Mb", value_display(self.raw_value))
    }
}

impl Add for FluidValue {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        FluidValue::add(self, rhs)
    }
}

impl Sub for FluidValue {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl Mul<i64> for FluidValue {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        self.multiply(rhs)
    }
}

impl Div<i64> for FluidValue {
    type Output = Self;

    fn div(self, rhs: i64) -> Self {
        self.fraction(rhs)
    }
}

impl Sum for FluidValue {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::EMPTY, FluidValue::add)
    }
}
