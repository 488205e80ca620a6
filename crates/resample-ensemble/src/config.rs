use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{EnsembleError, Result};

/// Resampling scheme that produced an ensemble's bins.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Resampling {
    #[default]
    Jackknife,
    Bootstrap,
}

impl Resampling {
    /// Factor that maps resampled bins onto the spread of the underlying
    /// samples: `-(n - 1)` for jackknife, `sqrt(n - 1)` for bootstrap.
    pub fn rescale_factor(self, nbin: usize) -> f64 {
        let n = nbin as f64;
        match self {
            Resampling::Jackknife => -(n - 1.0),
            Resampling::Bootstrap => (n - 1.0).sqrt(),
        }
    }
}

impl fmt::Display for Resampling {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Resampling::Jackknife => write!(f, "jackknife"),
            Resampling::Bootstrap => write!(f, "bootstrap"),
        }
    }
}

impl FromStr for Resampling {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jackknife" | "jk" => Ok(Resampling::Jackknife),
            "bootstrap" | "bs" => Ok(Resampling::Bootstrap),
            _ => Err(format!(
                "Unknown resampling scheme: {}. Expected `jackknife` or `bootstrap`",
                s
            )),
        }
    }
}

/// Settings shared by tools that load, combine and print ensembles.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CalcConfig {
    /// Scheme assigned to ensembles read from disk.
    pub resampling: Resampling,
    /// Digits after the decimal point in printed tables.
    pub precision: usize,
}

impl CalcConfig {
    pub fn new(resampling: Resampling, precision: usize) -> Self {
        Self {
            resampling,
            precision,
        }
    }
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            resampling: Resampling::Jackknife,
            precision: 8,
        }
    }
}

/// Load a [`CalcConfig`] from a JSON file. Missing keys take their defaults.
pub fn load_calc_config<P: AsRef<Path>>(path: P) -> Result<CalcConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| EnsembleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|err| EnsembleError::Parse {
        line: err.line(),
        reason: format!("invalid config {}: {}", path.display(), err),
    })
}
