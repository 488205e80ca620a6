//! Nonlinear element-wise functions. Each one applies the rescale bracket
//! exactly once around its own evaluation.
use num_complex::Complex64;

use super::{ElementKind, Ensemble};
use crate::error::{EnsembleError, Result};

impl Ensemble {
    fn bracketed<F>(&self, kind: ElementKind, f: F) -> Ensemble
    where
        F: Fn(Complex64) -> Complex64,
    {
        self.rescale_down().map(kind, f).rescale_up()
    }

    /// Real ensembles go through the `f64` function so their imaginary part
    /// stays zero; complex ones through the complex function.
    fn real_or_complex<R, C>(&self, real: R, complex: C) -> Ensemble
    where
        R: Fn(f64) -> f64,
        C: Fn(Complex64) -> Complex64,
    {
        match self.kind {
            ElementKind::Real => {
                self.bracketed(ElementKind::Real, |z| Complex64::new(real(z.re), 0.0))
            }
            ElementKind::Complex => self.bracketed(ElementKind::Complex, complex),
        }
    }

    fn require_real(&self, op: &'static str) -> Result<()> {
        match self.kind {
            ElementKind::Real => Ok(()),
            ElementKind::Complex => Err(EnsembleError::Type {
                op,
                kind: ElementKind::Complex,
            }),
        }
    }

    fn real_only<R>(&self, op: &'static str, real: R) -> Result<Ensemble>
    where
        R: Fn(f64) -> f64,
    {
        self.require_real(op)?;
        Ok(self.bracketed(ElementKind::Real, |z| Complex64::new(real(z.re), 0.0)))
    }

    /// Square root. Negative real values give `NaN`.
    pub fn sqrt(&self) -> Ensemble {
        self.real_or_complex(f64::sqrt, |z| z.sqrt())
    }

    pub fn exp(&self) -> Ensemble {
        self.real_or_complex(f64::exp, |z| z.exp())
    }

    /// Natural logarithm.
    pub fn ln(&self) -> Ensemble {
        self.real_or_complex(f64::ln, |z| z.ln())
    }

    pub fn sin(&self) -> Ensemble {
        self.real_or_complex(f64::sin, |z| z.sin())
    }

    pub fn cos(&self) -> Ensemble {
        self.real_or_complex(f64::cos, |z| z.cos())
    }

    pub fn tan(&self) -> Ensemble {
        self.real_or_complex(f64::tan, |z| z.tan())
    }

    /// Absolute value (modulus for complex data). Always real.
    pub fn abs(&self) -> Ensemble {
        self.bracketed(ElementKind::Real, |z| Complex64::new(z.norm(), 0.0))
    }

    pub fn asin(&self) -> Result<Ensemble> {
        self.real_only("asin", f64::asin)
    }

    pub fn acos(&self) -> Result<Ensemble> {
        self.real_only("acos", f64::acos)
    }

    pub fn atan(&self) -> Result<Ensemble> {
        self.real_only("atan", f64::atan)
    }

    pub fn powf(&self, exponent: f64) -> Result<Ensemble> {
        self.real_only("pow", |x| x.powf(exponent))
    }

    /// Four-quadrant arctangent of `self / x`, both operands real.
    pub fn atan2(&self, x: &Ensemble) -> Result<Ensemble> {
        self.require_real("atan2")?;
        x.require_real("atan2")?;
        self.check_binary(x)?;
        let angle = self
            .rescale_down()
            .zip_with(&x.rescale_down(), |y, x| Complex64::new(y.re.atan2(x.re), 0.0))?;
        Ok(angle.rescale_up())
    }
}
