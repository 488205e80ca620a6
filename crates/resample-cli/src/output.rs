use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use resample_ensemble::io::{format_ensemble, write_ensemble};
use resample_ensemble::{CalcConfig, CalcResult, Ensemble};

/// Write `ensemble` to `path`, or to stdout when no path is given.
pub fn write_output(ensemble: &Ensemble, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            write_ensemble(path, ensemble)
                .with_context(|| format!("Failed to write ensemble: {}", path.display()))?;
            log::info!(
                "[resample] Wrote {} bins x {} slices to {}",
                ensemble.nbin(),
                ensemble.length(),
                path.display()
            );
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            format_ensemble(&mut handle, ensemble).context("Failed to write to stdout")?;
            handle.flush()?;
        }
    }
    Ok(())
}

/// Print the estimator table, or its JSON form.
pub fn print_stats(result: &CalcResult, config: &CalcConfig, json: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(result).context("Failed to serialize estimates")?;
        println!("{}", text);
    } else {
        print!("{:.*}", config.precision, result);
    }
    Ok(())
}
