//! Report renderers for scan results.
//!
//! - [`terminal`] — colored, tabular output with summary box; respects `--verbose` / `--quiet`.
//! - [`json`] — pretty-printed array of results for machine consumption.

pub mod json;
pub mod terminal;
