//! IO utilities for the line-oriented ensemble text format.

pub mod ensemble_file;

pub use ensemble_file::{
    format_ensemble, parse_ensemble, read_ensemble, read_ensemble_with, to_ensemble_string,
    write_ensemble,
};
