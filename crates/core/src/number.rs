//! Number type for accum
//!
//! This module defines:
//! - Number: a dynamically typed numeric value, either integer or float
//!
//! ## Widening Rules
//!
//! - `Int op Int` stays `Int` unless the result overflows `i64`, in which case
//!   the result is computed in floating point and returned as `Float`
//! - Any operation involving a `Float` produces a `Float`
//! - True division always produces a `Float`
//!
//! Every operation except division is total. Division fails only on a zero
//! divisor.
//!
//! ## Equality
//!
//! Unlike a strict value model, numbers compare by magnitude across variants:
//! `Int(2) == Float(2.0)`. The comparison is exact, so an integer past 2^53
//! never equals the float it would round to. Float equality follows
//! IEEE-754: `NaN != NaN`, `-0.0 == 0.0`.

use crate::error::{Error, Result};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Integer or floating-point number
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point (IEEE-754)
    Float(f64),
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            (Number::Int(a), Number::Float(b)) | (Number::Float(b), Number::Int(a)) => {
                int_eq_float(*a, *b)
            }
        }
    }
}

/// Exact comparison: `b` must be integral, inside the i64 range and equal
/// to `a` without rounding `a` to the nearest float.
fn int_eq_float(a: i64, b: f64) -> bool {
    // i64::MIN is a power of two, so both bounds are exact in f64.
    const LOWER: f64 = i64::MIN as f64;
    const UPPER: f64 = -(i64::MIN as f64);
    b.fract() == 0.0 && (LOWER..UPPER).contains(&b) && b as i64 == a
}

impl Default for Number {
    fn default() -> Self {
        Number::Int(0)
    }
}

impl Number {
    /// Integer zero
    pub const ZERO: Number = Number::Int(0);

    /// Integer one
    pub const ONE: Number = Number::Int(1);

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Number::Int(_) => "Int",
            Number::Float(_) => "Float",
        }
    }

    /// Check if this is an integer
    pub fn is_int(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// Check if this is a float
    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Check if this number is zero (`-0.0` included)
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Int(i) => *i == 0,
            Number::Float(f) => *f == 0.0,
        }
    }

    /// Get as i64 if this is an Int
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Int(i) => Some(*i),
            Number::Float(_) => None,
        }
    }

    /// Get the value as f64, converting integers
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    /// True division
    ///
    /// The quotient is always a `Float`, even for two integers that divide
    /// evenly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(self, rhs: Number) -> Result<Number> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Number::Float(self.as_f64() / rhs.as_f64()))
    }
}

macro_rules! widening_op {
    ($trait:ident, $method:ident, $checked:ident, $op:tt) => {
        impl $trait for Number {
            type Output = Number;

            fn $method(self, rhs: Number) -> Number {
                match (self, rhs) {
                    (Number::Int(a), Number::Int(b)) => match a.$checked(b) {
                        Some(v) => Number::Int(v),
                        None => Number::Float(a as f64 $op b as f64),
                    },
                    (a, b) => Number::Float(a.as_f64() $op b.as_f64()),
                }
            }
        }
    };
}

widening_op!(Add, add, checked_add, +);
widening_op!(Sub, sub, checked_sub, -);
widening_op!(Mul, mul, checked_mul, *);

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Number::Int(i) => i
                .checked_neg()
                .map(Number::Int)
                .unwrap_or(Number::Float(-(i as f64))),
            Number::Float(f) => Number::Float(-f),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<i32> for Number {
    fn from(i: i32) -> Self {
        Number::Int(i64::from(i))
    }
}

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Number::Int(i)
    }
}

impl From<f32> for Number {
    fn from(f: f32) -> Self {
        Number::Float(f64::from(f))
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}
