//! Human-readable tables for ensembles and estimates.
//!
//! The formatter precision selects the digits after the decimal point, e.g.
//! `format!("{:.4}", result)`; without one, 8 digits are printed.
use std::fmt;

use num_complex::Complex64;

use crate::ensemble::{ElementKind, Ensemble};
use crate::estimator::CalcResult;

const DEFAULT_PRECISION: usize = 8;

fn write_value(
    f: &mut fmt::Formatter<'_>,
    kind: ElementKind,
    z: Complex64,
    precision: usize,
) -> fmt::Result {
    match kind {
        ElementKind::Real => write!(f, "{:.*e}", precision, z.re),
        ElementKind::Complex => write!(f, "({:.*e}, {:.*e})", precision, z.re, precision, z.im),
    }
}

impl fmt::Display for Ensemble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        writeln!(
            f,
            "{} {} ensemble: {} bins x {} slices",
            self.resampling(),
            self.kind(),
            self.nbin(),
            self.length()
        )?;
        for bin in 0..self.nbin() {
            write!(f, "  bin {:>4}: [", bin)?;
            for (t, &z) in self.bin(bin).iter().enumerate() {
                write_value(f, self.kind(), z, precision)?;
                if t + 1 != self.length() {
                    write!(f, ", ")?;
                }
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

impl fmt::Display for CalcResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        for (t, estimate) in self.iter().enumerate() {
            write!(f, "{:>4} ", t)?;
            write_value(f, self.kind(), estimate.mean, precision)?;
            writeln!(f, " +/- {:.*e}", precision, estimate.err)?;
        }
        Ok(())
    }
}
