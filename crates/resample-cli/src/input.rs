use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ArgMatches;

use resample_ensemble::config::load_calc_config;
use resample_ensemble::io::read_ensemble_with;
use resample_ensemble::{CalcConfig, Ensemble, Resampling};

/// Resolve the effective configuration: JSON file (if any), then flag
/// overrides.
pub fn config_from_arguments(matches: &ArgMatches) -> Result<CalcConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            log::info!("[resample] Using config: {:?}", path);
            load_calc_config(path)
                .with_context(|| format!("Failed to load config file: {}", path.display()))?
        }
        None => CalcConfig::default(),
    };

    if let Some(scheme) = matches.get_one::<String>("resampling") {
        config.resampling = Resampling::from_str(scheme).map_err(anyhow::Error::msg)?;
    }

    if let Some(precision) = matches.get_one::<usize>("precision") {
        config.precision = *precision;
    }

    Ok(config)
}

pub fn validate_ensemble_file(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("File does not exist: {}", path.display());
    }
    if !path.is_file() {
        anyhow::bail!("Not a regular file: {}", path.display());
    }
    Ok(())
}

/// Load an ensemble file, tagged with the configured resampling scheme.
pub fn load_ensemble(path: &Path, config: &CalcConfig) -> Result<Ensemble> {
    validate_ensemble_file(path)?;
    read_ensemble_with(path, config.resampling)
        .with_context(|| format!("Failed to read ensemble: {}", path.display()))
}
