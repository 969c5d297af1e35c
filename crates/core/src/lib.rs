//! Core types for accum
//!
//! This crate defines the foundational types used throughout the workspace:
//! - Number: integer-or-float value with widening arithmetic
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod number;

pub use error::{Error, Result};
pub use number::Number;
