//! Forecast summarization core.
//!
//! Pure functions from `(raw samples, now, window mode)` to a
//! `DailySummary` plus derived advisory text. Performs no I/O and no
//! logging — failures surface as typed `common::Error` values for the
//! driver to log and map to exit codes.

pub mod advice;
pub mod aggregate;
pub mod narrative;
pub mod window;

pub use advice::{clothing_advice, items_advice};
pub use aggregate::{band_readings, summarize, BandReadings};
pub use window::select_window;
