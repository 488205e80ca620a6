//! Mean and standard-error estimation over bins.
//!
//! For every time-slice the estimator returns the bin average and
//!
//! err = sqrt( Σ |x_b - mean|² / ((n - 1) n) )
//!
//! Bins are used as stored, without any rescaling. Stored bins follow the
//! expanded convention of [`Ensemble::rescale_up`], under which this formula
//! gives the jackknife standard error and, for bootstrap ensembles (expanded
//! by `sqrt(n - 1)`), the standard deviation of the bootstrap replicas.
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::ensemble::{ElementKind, Ensemble};

/// Mean and standard error of one time-slice.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub mean: Complex64,
    pub err: f64,
}

/// Per-slice estimates of an ensemble.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CalcResult {
    kind: ElementKind,
    estimates: Vec<Estimate>,
}

impl CalcResult {
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }

    pub fn get(&self, t: usize) -> Option<&Estimate> {
        self.estimates.get(t)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Estimate> {
        self.estimates.iter()
    }

    pub fn means(&self) -> Vec<Complex64> {
        self.estimates.iter().map(|e| e.mean).collect()
    }

    pub fn errors(&self) -> Vec<f64> {
        self.estimates.iter().map(|e| e.err).collect()
    }
}

/// Estimate mean and error for every time-slice of `ensemble`.
///
/// With a single bin the error denominator is zero and `err` is `NaN`.
pub fn estimate(ensemble: &Ensemble) -> CalcResult {
    let n = ensemble.nbin() as f64;
    let estimates = (0..ensemble.length())
        .map(|t| {
            let slice = ensemble.time_slice(t);
            let mean = slice.iter().sum::<Complex64>() / n;
            let sum_sq: f64 = slice.iter().map(|&x| (x - mean).norm_sqr()).sum();
            Estimate {
                mean,
                err: (sum_sq / ((n - 1.0) * n)).sqrt(),
            }
        })
        .collect();

    CalcResult {
        kind: ensemble.kind(),
        estimates,
    }
}
