//! Accumulator Comprehensive Test Suite
//!
//! Every test follows Arrange-Act-Assert: a fixture arranges a fresh
//! accumulator, the test acts through its public API, then asserts on the
//! tally or on the error returned.
//!
//! ## Modules
//!
//! - `basic_ops`: construction and increments
//! - `read_only`: the tally cannot be assigned
//! - `properties`: increments compose additively for arbitrary amounts
//! - `config_file`: accumulators built from `accum.toml`
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test accumulator_comprehensive
//!
//! # Read-only tests only
//! cargo test --test accumulator_comprehensive read_only::
//!
//! # With increment tracing
//! cargo test --test accumulator_comprehensive -- --nocapture
//! ```

#[path = "../common/mod.rs"]
mod common;
