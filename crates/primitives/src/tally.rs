//! Numeric types an [`Accumulator`](crate::Accumulator) can hold
//!
//! Integer tallies saturate at their bounds and `Number` tallies widen to
//! float, so accumulating never panics.

use accum_core::Number;
use std::fmt;

/// A value that can be summed into a running total
pub trait Tally: Copy + PartialEq + fmt::Debug {
    /// Starting value of a fresh tally
    const ZERO: Self;

    /// Amount added by a bare increment
    const ONE: Self;

    /// Add `amount` to `self`, returning the new total
    fn accumulate(self, amount: Self) -> Self;

    /// Convert to the dynamically typed representation
    fn into_number(self) -> Number;
}

macro_rules! int_tally {
    ($($t:ty),*) => {$(
        impl Tally for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline]
            fn accumulate(self, amount: Self) -> Self {
                self.saturating_add(amount)
            }

            fn into_number(self) -> Number {
                Number::from(self)
            }
        }
    )*};
}

macro_rules! float_tally {
    ($($t:ty),*) => {$(
        impl Tally for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn accumulate(self, amount: Self) -> Self {
                self + amount
            }

            fn into_number(self) -> Number {
                Number::from(self)
            }
        }
    )*};
}

int_tally!(i32, i64);
float_tally!(f32, f64);

impl Tally for Number {
    const ZERO: Self = Number::ZERO;
    const ONE: Self = Number::ONE;

    #[inline]
    fn accumulate(self, amount: Self) -> Self {
        self + amount
    }

    fn into_number(self) -> Number {
        self
    }
}
