//! resample-cli: command-line wrappers around `resample-ensemble`.
pub mod input;
pub mod ops;
pub mod output;
