//! resample-ensemble: arithmetic on jackknife/bootstrap ensembles.
//!
//! An ensemble stores resampled replicas (bins) of an observable over a set of
//! time-slices. Arithmetic runs bin by bin so that the spread across bins
//! carries the propagated statistical error; nonlinear operations are bracketed
//! by a rescale around the per-slice mean to stay correct for correlated bins.
//!
//! The crate also provides the mean/error estimator, time-axis transforms, the
//! ensemble text file format, and printable tables.
pub mod config;
pub mod display;
pub mod ensemble;
pub mod error;
pub mod estimator;
pub mod io;

pub use config::{CalcConfig, Resampling};
pub use ensemble::{compatibility, Compatibility, ElementKind, Ensemble, Scalar};
pub use error::{EnsembleError, Result};
pub use estimator::{estimate, CalcResult, Estimate};
pub use num_complex::Complex64;
