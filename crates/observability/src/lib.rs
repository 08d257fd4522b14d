//! `trellis-observability` — shared tracing/logging setup.
//!
//! Access decisions are logged at `debug` level by `trellis-access`; a
//! process that wants to see them calls [`init`] once at startup and sets
//! `RUST_LOG` accordingly.

pub mod tracing;

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
