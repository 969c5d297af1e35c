//! Primitives layer for accum
//!
//! Provides the accumulator and its supporting pieces:
//! - **Accumulator**: running total with a read-only tally
//! - **Tally**: numeric types an accumulator can hold
//! - **AccumConfig**: optional `accum.toml` configuration
//!
//! ## Read-Only Tally
//!
//! The tally changes only through `increment` and `increment_by`. The
//! backing field is private, and the name-based attribute surface rejects
//! assignment with `Error::ReadOnlyAttribute`.
//!
//! ```rust
//! use accum_core::Error;
//! use accum_primitives::Accumulator;
//!
//! let mut accum = Accumulator::new();
//! assert_eq!(accum.set_attr("count", 10), Err(Error::read_only("count")));
//! assert_eq!(accum.count(), 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod accumulator;
pub mod config;
pub mod tally;

pub use accumulator::{Accumulator, COUNT_ATTR};
pub use config::{AccumConfig, NumericMode, CONFIG_FILE_NAME};
pub use tally::Tally;
