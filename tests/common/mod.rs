//! Shared fixtures for all integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from any test's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::sync::Once;

// `::accum` keeps the crate path distinct from the `accum` fixture below.
pub use ::accum::{AccumConfig, Accumulator, Error, Number, NumericMode, CONFIG_FILE_NAME};
pub use rstest::fixture;

static INIT_TRACING: Once = Once::new();

/// Route `tracing` output through the test harness so it shows up with
/// `--nocapture` and stays attached to the failing test otherwise.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Fixtures
// ============================================================================

/// Fresh integer accumulator.
#[fixture]
pub fn accum() -> Accumulator {
    init_tracing();
    Accumulator::new()
}

/// Second, independent integer accumulator.
#[fixture]
pub fn accum2() -> Accumulator {
    Accumulator::new()
}

/// Fresh dynamically typed accumulator starting at `Int(0)`.
#[fixture]
pub fn dynamic_accum() -> Accumulator<Number> {
    init_tracing();
    Accumulator::from_config(&AccumConfig::default())
}

/// Fresh float accumulator.
#[fixture]
pub fn float_accum() -> Accumulator<f64> {
    Accumulator::empty()
}
