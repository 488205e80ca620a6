//! Rescaling of bins around their per-slice mean.
//!
//! Resampled bins are strongly correlated, so a nonlinear function applied
//! bin by bin does not propagate the error of the underlying samples. The
//! bracket used throughout the crate is: rescale every operand down by
//! `1 / factor`, apply the naive operation, rescale the result up by `factor`
//! (see [`Resampling::rescale_factor`]). Linear operations skip it.
use log::trace;

use super::Ensemble;
use crate::config::Resampling;

impl Ensemble {
    /// Replace every bin value with `avg + (x - avg) * factor`, where `avg` is
    /// the mean of its time-slice over all bins.
    pub fn rescale_around_mean(&self, factor: f64) -> Ensemble {
        let means: Vec<_> = (0..self.length).map(|t| self.slice_mean(t)).collect();
        let mut data = Vec::with_capacity(self.data.len());
        for bin in 0..self.nbin {
            for (t, &avg) in means.iter().enumerate() {
                let x = self.data[t + self.length * bin];
                data.push(avg + (x - avg) * factor);
            }
        }
        Ensemble::from_parts(self.kind, self.resampling, self.nbin, self.length, data)
    }

    /// Shrink the spread by `1 / rescale_factor`, ahead of a nonlinear step.
    pub fn rescale_down(&self) -> Ensemble {
        match scheme_factor(self.resampling, self.nbin) {
            Some(factor) => self.rescale_around_mean(1.0 / factor),
            None => self.clone(),
        }
    }

    /// Expand the spread by `rescale_factor`, after a nonlinear step.
    pub fn rescale_up(&self) -> Ensemble {
        match scheme_factor(self.resampling, self.nbin) {
            Some(factor) => self.rescale_around_mean(factor),
            None => self.clone(),
        }
    }
}

/// A single bin carries no spread and its factor is zero; rescaling is then
/// the identity.
fn scheme_factor(resampling: Resampling, nbin: usize) -> Option<f64> {
    if nbin < 2 {
        return None;
    }
    let factor = resampling.rescale_factor(nbin);
    trace!("{} rescale factor for {} bins: {}", resampling, nbin, factor);
    Some(factor)
}
