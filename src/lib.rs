//! accum - a running total with a read-only tally
//!
//! # Quick Start
//!
//! ```
//! use accum::{Accumulator, Number};
//!
//! let mut accum = Accumulator::<Number>::empty();
//! accum.increment();
//! accum.increment_by(3);
//! accum.increment_by(0.5);
//! assert_eq!(accum.count(), Number::Float(4.5));
//! ```
//!
//! The default `Accumulator::new()` holds an `i64` tally, which saturates at
//! its bounds.
//!
//! # Architecture
//!
//! - `accum-core` holds the [`Number`] value type and the [`Error`] hierarchy
//! - `accum-primitives` holds the [`Accumulator`] and its configuration
//!
//! This crate re-exports both.

pub use accum_core::*;
pub use accum_primitives::*;
