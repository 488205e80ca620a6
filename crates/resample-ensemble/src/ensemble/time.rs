//! Transforms along the time axis. All of them are linear and act on each
//! bin independently.
use num_complex::Complex64;

use super::Ensemble;
use crate::error::{EnsembleError, Result};

impl Ensemble {
    /// Build an ensemble of `length` slices where `source(t)` names the input
    /// slice feeding output slice `t`, or `None` for a zero.
    fn remap<F>(&self, length: usize, source: F) -> Ensemble
    where
        F: Fn(usize) -> Option<usize>,
    {
        let mut data = Vec::with_capacity(self.nbin * length);
        for bin in 0..self.nbin {
            let row = self.bin(bin);
            data.extend((0..length).map(|t| match source(t) {
                Some(src) => row[src],
                None => Complex64::new(0.0, 0.0),
            }));
        }
        Ensemble::from_parts(self.kind, self.resampling, self.nbin, length, data)
    }

    /// `out[t] = self[t + amount]`, zero where `t + amount` falls outside the
    /// ensemble. A positive amount zero-fills the tail, a negative one the head.
    pub fn shift(&self, amount: isize) -> Result<Ensemble> {
        let length = self.length as isize;
        if amount.unsigned_abs() > self.length {
            return Err(EnsembleError::Range {
                op: "shift",
                reason: format!("shift by {} exceeds length {}", amount, self.length),
            });
        }
        Ok(self.remap(self.length, |t| {
            let src = t as isize + amount;
            (0..length).contains(&src).then_some(src as usize)
        }))
    }

    /// `out[t] = self[(t + amount) mod length]`.
    pub fn circular_shift(&self, amount: isize) -> Ensemble {
        let length = self.length as isize;
        self.remap(self.length, |t| {
            Some((t as isize + amount).rem_euclid(length) as usize)
        })
    }

    /// Slices `first..=last`.
    pub fn extract(&self, first: usize, last: usize) -> Result<Ensemble> {
        if first >= self.length || last >= self.length || last < first {
            return Err(EnsembleError::Range {
                op: "extract",
                reason: format!(
                    "bounds [{}, {}] invalid for length {}",
                    first, last, self.length
                ),
            });
        }
        Ok(self.remap(last - first + 1, |t| Some(first + t)))
    }

    /// Append the slices of `other` after those of `self`, bin by bin.
    pub fn concatenate(&self, other: &Ensemble) -> Result<Ensemble> {
        if self.nbin != other.nbin {
            return Err(EnsembleError::Shape {
                left: (self.nbin, self.length),
                right: (other.nbin, other.length),
            });
        }
        self.check_resampling(other)?;
        let length = self.length + other.length;
        let mut data = Vec::with_capacity(self.nbin * length);
        for bin in 0..self.nbin {
            data.extend_from_slice(self.bin(bin));
            data.extend_from_slice(other.bin(bin));
        }
        Ok(Ensemble::from_parts(
            self.kind.promote(other.kind),
            self.resampling,
            self.nbin,
            length,
            data,
        ))
    }

    /// Repeat each bin `times` times in a row, giving `nbin * times` bins.
    ///
    /// This only copies data; the statistical meaning of the inflated bin
    /// count is up to the caller.
    pub fn replicate(&self, times: usize) -> Result<Ensemble> {
        if times == 0 {
            return Err(EnsembleError::Range {
                op: "replicate",
                reason: "replication count must be positive".to_string(),
            });
        }
        let nbin = self
            .nbin
            .checked_mul(times)
            .filter(|nbin| nbin.checked_mul(self.length).is_some())
            .ok_or_else(|| EnsembleError::Range {
                op: "replicate",
                reason: format!(
                    "{} bins x {} slices replicated {} times overflows",
                    self.nbin, self.length, times
                ),
            })?;
        let mut data = Vec::with_capacity(nbin * self.length);
        for bin in 0..self.nbin {
            for _ in 0..times {
                data.extend_from_slice(self.bin(bin));
            }
        }
        Ok(Ensemble::from_parts(
            self.kind,
            self.resampling,
            nbin,
            self.length,
            data,
        ))
    }

    /// Time reflection `out[t] = self[(length - t) mod length]`; slice 0 stays
    /// in place.
    pub fn reverse(&self) -> Ensemble {
        let length = self.length;
        self.remap(length, |t| Some((length - t) % length))
    }

    /// Average of the ensemble and its time reflection.
    pub fn symmetrize(&self) -> Ensemble {
        let reflected = self.reverse();
        let data = self
            .data
            .iter()
            .zip(reflected.data.iter())
            .map(|(&a, &b)| (a + b) * 0.5)
            .collect();
        Ensemble::from_parts(self.kind, self.resampling, self.nbin, self.length, data)
    }
}
