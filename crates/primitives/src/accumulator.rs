//! Accumulator: a running total with a read-only tally
//!
//! ## Design
//!
//! The tally lives in a private field. Callers read it with
//! [`Accumulator::count`] and change it only through [`Accumulator::increment`]
//! and [`Accumulator::increment_by`]. Assigning to it does not compile:
//!
//! ```rust,compile_fail
//! use accum_primitives::Accumulator;
//!
//! let mut accum = Accumulator::new();
//! accum.count = 10;
//! ```
//!
//! Callers that address attributes by name go through
//! [`Accumulator::get_attr`] and [`Accumulator::set_attr`]. Setting `count`
//! that way fails with [`Error::ReadOnlyAttribute`] and leaves the tally
//! untouched.
//!
//! ## Amounts
//!
//! Increments are never validated. Negative and zero amounts are accepted
//! for every tally type, fractional ones wherever `T` can represent them.

use crate::config::AccumConfig;
use crate::tally::Tally;
use accum_core::{Error, Number, Result};
use tracing::{trace, warn};

/// Name under which the tally is exposed to the attribute surface
pub const COUNT_ATTR: &str = "count";

/// Running total of the amounts added to it
///
/// ## Example
///
/// A [`Number`] tally takes any amount and adds it exactly, widening to a
/// float once a fraction arrives:
///
/// ```rust
/// use accum_core::Number;
/// use accum_primitives::Accumulator;
///
/// let mut accum = Accumulator::<Number>::empty();
/// accum.increment();
/// accum.increment_by(3);
/// assert!(accum.count().is_int());
///
/// accum.increment_by(0.5);
/// assert_eq!(accum.count(), Number::Float(4.5));
/// ```
///
/// The default tally is `i64`:
///
/// ```rust
/// use accum_primitives::Accumulator;
///
/// let mut accum = Accumulator::new();
/// accum.increment_by(3);
/// assert_eq!(accum.count(), 3);
/// ```
///
/// ## Saturation
///
/// Integer tallies (`i32`, `i64`) saturate at their bounds. Past
/// `i64::MAX` an increment leaves the count at `i64::MAX` instead of adding
/// the amount, so the "increases by exactly `x`" guarantee holds only while
/// the total stays in range. Use a [`Number`] tally when totals may
/// overflow; it widens to a float instead.
///
/// ```rust
/// use accum_primitives::Accumulator;
///
/// let mut accum = Accumulator::new();
/// accum.increment_by(i64::MAX);
/// accum.increment();
/// assert_eq!(accum.count(), i64::MAX);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Accumulator<T: Tally = i64> {
    count: T,
}

impl Accumulator {
    /// Create an integer accumulator with a count of zero
    pub fn new() -> Self {
        Self::empty()
    }
}

impl<T: Tally> Accumulator<T> {
    /// Create an accumulator of any tally type with a count of zero
    pub fn empty() -> Self {
        Self { count: T::ZERO }
    }

    /// Current tally
    pub fn count(&self) -> T {
        self.count
    }

    /// Add one to the tally
    pub fn increment(&mut self) {
        self.increment_by(T::ONE);
    }

    /// Add `amount` to the tally
    pub fn increment_by(&mut self, amount: impl Into<T>) {
        let amount = amount.into();
        self.count = self.count.accumulate(amount);
        trace!(?amount, count = ?self.count, "Accumulator incremented");
    }

    /// Read an attribute by name
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAttribute`] for any name other than `count`.
    pub fn get_attr(&self, name: &str) -> Result<Number> {
        match name {
            COUNT_ATTR => Ok(self.count.into_number()),
            _ => Err(Error::unknown_attribute(name)),
        }
    }

    /// Assign an attribute by name
    ///
    /// The accumulator has no assignable attributes, so this never succeeds
    /// and never changes the tally.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadOnlyAttribute`] for `count` and
    /// [`Error::UnknownAttribute`] for anything else.
    pub fn set_attr(&mut self, name: &str, value: impl Into<Number>) -> Result<()> {
        let value = value.into();
        match name {
            COUNT_ATTR => {
                warn!(
                    attempted = %value,
                    count = ?self.count,
                    "Rejected assignment to read-only count"
                );
                Err(Error::read_only(name))
            }
            _ => Err(Error::unknown_attribute(name)),
        }
    }
}

impl Accumulator<Number> {
    /// Create a dynamically typed accumulator whose zero follows `config`
    pub fn from_config(config: &AccumConfig) -> Self {
        Self {
            count: config.numeric.zero(),
        }
    }
}

impl<T: Tally> Default for Accumulator<T> {
    fn default() -> Self {
        Self::empty()
    }
}
