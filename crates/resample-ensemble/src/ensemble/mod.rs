//! Dense storage for resampled ensembles.
//!
//! An [`Ensemble`] holds `nbin` resampled replicas of an observable measured on
//! `length` time-slices. Values are stored bin-major as complex numbers,
//! `data[t + length * bin]`; real ensembles keep every imaginary part at
//! exactly zero.
//!
//! Every operation returns a fresh ensemble. Binary operations accept operands
//! of equal length, or one operand of length 1 which is broadcast against all
//! slices of the other (see [`Compatibility`]).
mod arith;
mod math;
mod rescale;
mod time;

use std::fmt;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::config::Resampling;
use crate::error::{EnsembleError, Result};

/// Whether the imaginary component of an ensemble is meaningful.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Real,
    Complex,
}

impl ElementKind {
    /// Result kind of combining two operands: complex if either is.
    pub fn promote(self, other: ElementKind) -> ElementKind {
        match (self, other) {
            (ElementKind::Real, ElementKind::Real) => ElementKind::Real,
            _ => ElementKind::Complex,
        }
    }

    /// Tag used in the ensemble file header.
    pub fn type_tag(self) -> u8 {
        match self {
            ElementKind::Real => 0,
            ElementKind::Complex => 1,
        }
    }

    pub fn from_type_tag(tag: u8) -> Option<ElementKind> {
        match tag {
            0 => Some(ElementKind::Real),
            1 => Some(ElementKind::Complex),
            _ => None,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ElementKind::Real => write!(f, "real"),
            ElementKind::Complex => write!(f, "complex"),
        }
    }
}

/// A single real or complex constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Real(f64),
    Complex(Complex64),
}

impl Scalar {
    pub fn kind(self) -> ElementKind {
        match self {
            Scalar::Real(_) => ElementKind::Real,
            Scalar::Complex(_) => ElementKind::Complex,
        }
    }

    pub fn value(self) -> Complex64 {
        match self {
            Scalar::Real(re) => Complex64::new(re, 0.0),
            Scalar::Complex(z) => z,
        }
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Real(value)
    }
}

impl From<Complex64> for Scalar {
    fn from(value: Complex64) -> Self {
        Scalar::Complex(value)
    }
}

/// How two ensembles line up for an element-wise operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compatibility {
    EqualLength,
    /// Left operand has a single slice, repeated against every slice of the right.
    BroadcastLeft,
    /// Right operand has a single slice, repeated against every slice of the left.
    BroadcastRight,
    Incompatible,
}

/// Classify the shapes of `a` and `b` for element-wise combination.
pub fn compatibility(a: &Ensemble, b: &Ensemble) -> Compatibility {
    if a.nbin != b.nbin {
        Compatibility::Incompatible
    } else if a.length == b.length {
        Compatibility::EqualLength
    } else if a.length == 1 {
        Compatibility::BroadcastLeft
    } else if b.length == 1 {
        Compatibility::BroadcastRight
    } else {
        Compatibility::Incompatible
    }
}

/// Resampled replicas of an observable over a set of time-slices.
#[derive(Clone, Debug, PartialEq)]
pub struct Ensemble {
    kind: ElementKind,
    resampling: Resampling,
    nbin: usize,
    length: usize,
    data: Vec<Complex64>,
}

impl Ensemble {
    fn check_shape(nbin: usize, length: usize) -> Result<()> {
        if nbin == 0 || length == 0 {
            return Err(EnsembleError::EmptyShape { nbin, length });
        }
        Ok(())
    }

    /// Assemble an ensemble from a buffer already known to be `nbin * length`
    /// long. Imaginary parts are cleared for real ensembles.
    pub(crate) fn from_parts(
        kind: ElementKind,
        resampling: Resampling,
        nbin: usize,
        length: usize,
        mut data: Vec<Complex64>,
    ) -> Self {
        debug_assert_eq!(data.len(), nbin * length);
        if kind == ElementKind::Real {
            for z in data.iter_mut() {
                z.im = 0.0;
            }
        }
        Self {
            kind,
            resampling,
            nbin,
            length,
            data,
        }
    }

    /// Every bin and slice set to `value`. The kind follows the scalar.
    pub fn from_scalar<S: Into<Scalar>>(value: S, nbin: usize, length: usize) -> Result<Self> {
        Self::check_shape(nbin, length)?;
        let value = value.into();
        Ok(Self::from_parts(
            value.kind(),
            Resampling::default(),
            nbin,
            length,
            vec![value.value(); nbin * length],
        ))
    }

    /// Every bin holds the same per-slice sequence, giving an ensemble with
    /// no statistical spread. Complex if any value is complex.
    pub fn from_sequence<S: Into<Scalar> + Copy>(values: &[S], nbin: usize) -> Result<Self> {
        let length = values.len();
        Self::check_shape(nbin, length)?;
        let values: Vec<Scalar> = values.iter().map(|&v| v.into()).collect();
        let kind = values
            .iter()
            .fold(ElementKind::Real, |kind, v| kind.promote(v.kind()));
        let mut data = Vec::with_capacity(nbin * length);
        for _ in 0..nbin {
            data.extend(values.iter().map(|v| v.value()));
        }
        Ok(Self::from_parts(kind, Resampling::default(), nbin, length, data))
    }

    /// Build from bin-major data, `data[t + length * bin]`.
    pub fn from_bins(
        kind: ElementKind,
        nbin: usize,
        length: usize,
        data: Vec<Complex64>,
    ) -> Result<Self> {
        Self::check_shape(nbin, length)?;
        if nbin.checked_mul(length) != Some(data.len()) {
            return Err(EnsembleError::BufferLength {
                expected: nbin.saturating_mul(length),
                got: data.len(),
            });
        }
        if kind == ElementKind::Real && data.iter().any(|z| z.im != 0.0) {
            return Err(EnsembleError::Type {
                op: "from_bins",
                kind: ElementKind::Complex,
            });
        }
        Ok(Self::from_parts(kind, Resampling::default(), nbin, length, data))
    }

    pub fn from_real_bins(nbin: usize, length: usize, data: Vec<f64>) -> Result<Self> {
        let data = data.into_iter().map(|re| Complex64::new(re, 0.0)).collect();
        Self::from_bins(ElementKind::Real, nbin, length, data)
    }

    /// Re-tag the ensemble with a different resampling scheme.
    pub fn with_resampling(mut self, resampling: Resampling) -> Self {
        self.resampling = resampling;
        self
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn is_real(&self) -> bool {
        self.kind == ElementKind::Real
    }

    pub fn resampling(&self) -> Resampling {
        self.resampling
    }

    pub fn nbin(&self) -> usize {
        self.nbin
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    /// Value of `bin` at time-slice `t`.
    ///
    /// Panics if either index is out of range.
    pub fn get(&self, bin: usize, t: usize) -> Complex64 {
        assert!(bin < self.nbin && t < self.length, "ensemble index out of bounds");
        self.data[t + self.length * bin]
    }

    /// All time-slices of one bin.
    ///
    /// Panics if `bin` is out of range.
    pub fn bin(&self, bin: usize) -> &[Complex64] {
        assert!(bin < self.nbin, "bin out of bounds");
        let start = self.length * bin;
        &self.data[start..start + self.length]
    }

    /// One time-slice across all bins.
    pub fn time_slice(&self, t: usize) -> Vec<Complex64> {
        assert!(t < self.length, "time-slice out of bounds");
        (0..self.nbin).map(|bin| self.data[t + self.length * bin]).collect()
    }

    /// Average over bins of slice `t`.
    pub(crate) fn slice_mean(&self, t: usize) -> Complex64 {
        let sum: Complex64 = (0..self.nbin).map(|bin| self.data[t + self.length * bin]).sum();
        sum / self.nbin as f64
    }

    /// Value at `(bin, t)` with `t` clamped to the last slice, so a length-1
    /// operand repeats its only slice.
    #[inline]
    pub(crate) fn broadcast_at(&self, bin: usize, t: usize) -> Complex64 {
        self.data[t.min(self.length - 1) + self.length * bin]
    }

    /// Apply `f` to every element, producing an ensemble of `kind`.
    pub(crate) fn map<F>(&self, kind: ElementKind, f: F) -> Ensemble
    where
        F: Fn(Complex64) -> Complex64,
    {
        let data = self.data.iter().map(|&z| f(z)).collect();
        Ensemble::from_parts(kind, self.resampling, self.nbin, self.length, data)
    }

    pub(crate) fn check_resampling(&self, other: &Ensemble) -> Result<()> {
        if self.resampling != other.resampling {
            return Err(EnsembleError::ResamplingMismatch {
                left: self.resampling,
                right: other.resampling,
            });
        }
        Ok(())
    }

    /// Combine two ensembles element-wise under the broadcast rule. The
    /// result kind is the promotion of both operand kinds.
    pub(crate) fn zip_with<F>(&self, other: &Ensemble, f: F) -> Result<Ensemble>
    where
        F: Fn(Complex64, Complex64) -> Complex64,
    {
        self.check_binary(other)?;

        let length = self.length.max(other.length);
        let mut data = Vec::with_capacity(self.nbin * length);
        for bin in 0..self.nbin {
            for t in 0..length {
                data.push(f(self.broadcast_at(bin, t), other.broadcast_at(bin, t)));
            }
        }
        Ok(Ensemble::from_parts(
            self.kind.promote(other.kind),
            self.resampling,
            self.nbin,
            length,
            data,
        ))
    }
}
