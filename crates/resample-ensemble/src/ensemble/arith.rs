use std::ops::Neg;

use log::warn;
use num_complex::Complex64;

use super::{compatibility, Compatibility, ElementKind, Ensemble, Scalar};
use crate::error::{EnsembleError, Result};

impl Ensemble {
    /// Fail early on operands that cannot be combined, before any rescaling.
    pub(crate) fn check_binary(&self, other: &Ensemble) -> Result<()> {
        if compatibility(self, other) == Compatibility::Incompatible {
            return Err(EnsembleError::Shape {
                left: (self.nbin, self.length),
                right: (other.nbin, other.length),
            });
        }
        self.check_resampling(other)
    }

    pub fn add(&self, other: &Ensemble) -> Result<Ensemble> {
        self.zip_with(other, |a, b| a + b)
    }

    pub fn sub(&self, other: &Ensemble) -> Result<Ensemble> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Bin-wise product with the rescale bracket applied to the operands and
    /// the result.
    pub fn mul(&self, other: &Ensemble) -> Result<Ensemble> {
        self.check_binary(other)?;
        let product = self
            .rescale_down()
            .zip_with(&other.rescale_down(), mul_complex)?;
        Ok(product.rescale_up())
    }

    /// Bin-wise quotient with the rescale bracket applied.
    ///
    /// A real divisor divides both parts of the numerator by its real part.
    /// Zero divisors are not rejected: the result carries IEEE `inf`/`NaN`.
    pub fn div(&self, other: &Ensemble) -> Result<Ensemble> {
        self.check_binary(other)?;
        let numerator = self.rescale_down();
        let divisor = other.rescale_down();
        warn_zero_divisors(&divisor);
        let quotient = match other.kind {
            ElementKind::Real => numerator.zip_with(&divisor, div_by_real)?,
            ElementKind::Complex => numerator.zip_with(&divisor, div_by_complex)?,
        };
        Ok(quotient.rescale_up())
    }

    pub fn neg(&self) -> Ensemble {
        self.map(self.kind, |z| -z)
    }

    /// Complex conjugate; the identity on real ensembles.
    pub fn conj(&self) -> Ensemble {
        match self.kind {
            ElementKind::Real => self.clone(),
            ElementKind::Complex => self.map(ElementKind::Complex, |z| z.conj()),
        }
    }

    pub fn re(&self) -> Ensemble {
        self.map(ElementKind::Real, |z| Complex64::new(z.re, 0.0))
    }

    pub fn im(&self) -> Ensemble {
        self.map(ElementKind::Real, |z| Complex64::new(z.im, 0.0))
    }

    /// `re² + im²` per bin, bracketed by the rescale protocol.
    pub fn norm_sqr(&self) -> Ensemble {
        self.rescale_down()
            .map(ElementKind::Real, |z| Complex64::new(z.norm_sqr(), 0.0))
            .rescale_up()
    }

    /// Multiply by `i`. Always produces a complex ensemble.
    pub fn times_i(&self) -> Ensemble {
        self.map(ElementKind::Complex, |z| Complex64::new(-z.im, z.re))
    }

    pub fn add_scalar<S: Into<Scalar>>(&self, value: S) -> Ensemble {
        let value = value.into();
        let c = value.value();
        self.map(self.kind.promote(value.kind()), |z| z + c)
    }

    pub fn sub_scalar<S: Into<Scalar>>(&self, value: S) -> Ensemble {
        let value = value.into();
        let c = value.value();
        self.map(self.kind.promote(value.kind()), |z| z - c)
    }

    pub fn mul_scalar<S: Into<Scalar>>(&self, value: S) -> Ensemble {
        let value = value.into();
        let c = value.value();
        self.map(self.kind.promote(value.kind()), |z| mul_complex(z, c))
    }

    pub fn div_scalar<S: Into<Scalar>>(&self, value: S) -> Ensemble {
        let value = value.into();
        let c = value.value();
        let kind = self.kind.promote(value.kind());
        match value {
            Scalar::Real(_) => self.map(kind, |z| div_by_real(z, c)),
            Scalar::Complex(_) => self.map(kind, |z| div_by_complex(z, c)),
        }
    }
}

impl Neg for &Ensemble {
    type Output = Ensemble;

    fn neg(self) -> Ensemble {
        Ensemble::neg(self)
    }
}

#[inline]
fn mul_complex(a: Complex64, b: Complex64) -> Complex64 {
    Complex64::new(a.re * b.re - a.im * b.im, a.re * b.im + a.im * b.re)
}

#[inline]
fn div_by_real(a: Complex64, b: Complex64) -> Complex64 {
    Complex64::new(a.re / b.re, a.im / b.re)
}

#[inline]
fn div_by_complex(a: Complex64, b: Complex64) -> Complex64 {
    let denom = 1.0 / (b.re * b.re + b.im * b.im);
    Complex64::new(
        (a.re * b.re + a.im * b.im) * denom,
        (a.im * b.re - a.re * b.im) * denom,
    )
}

fn count_zero_divisors(divisor: &Ensemble) -> usize {
    divisor
        .as_slice()
        .iter()
        .filter(|z| match divisor.kind {
            ElementKind::Real => z.re == 0.0,
            ElementKind::Complex => z.re == 0.0 && z.im == 0.0,
        })
        .count()
}

/// `divisor` is the rescaled operand that actually enters the division.
fn warn_zero_divisors(divisor: &Ensemble) {
    let zeros = count_zero_divisors(divisor);
    if zeros > 0 {
        warn!(
            "division by zero in {} of {} divisor values; results carry inf/NaN",
            zeros,
            divisor.as_slice().len()
        );
    }
}
