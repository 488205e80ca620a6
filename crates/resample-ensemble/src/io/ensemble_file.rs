//! Ensemble text files.
//!
//! ```text
//! <nbin> <length> <type> 0 1
//! <t> <re>            (type 0, real)
//! <t> <re> <im>       (type 1, complex)
//! ```
//!
//! Records are grouped by bin: all `length` slices of bin 0, then bin 1, and so
//! on, with `t` running `0..length` inside each bin. The last two header fields
//! are a reserved value and the column count, which must be 1.
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::debug;
use num_complex::Complex64;

use crate::config::Resampling;
use crate::ensemble::{ElementKind, Ensemble};
use crate::error::{EnsembleError, Result};

#[derive(Debug, Clone, Copy)]
struct Header {
    nbin: usize,
    length: usize,
    kind: ElementKind,
}

/// Read a jackknife ensemble file.
pub fn read_ensemble<P: AsRef<Path>>(path: P) -> Result<Ensemble> {
    read_ensemble_with(path, Resampling::default())
}

/// Read an ensemble file and tag it with `resampling`.
pub fn read_ensemble_with<P: AsRef<Path>>(path: P, resampling: Resampling) -> Result<Ensemble> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| EnsembleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let ensemble = parse_ensemble(&content)?.with_resampling(resampling);
    debug!(
        "Read {} ensemble from {}: {} bins x {} slices",
        ensemble.kind(),
        path.display(),
        ensemble.nbin(),
        ensemble.length()
    );
    Ok(ensemble)
}

/// Parse the text form of an ensemble. Blank lines are ignored.
pub fn parse_ensemble(content: &str) -> Result<Ensemble> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_line, header) = lines.next().ok_or_else(|| EnsembleError::Parse {
        line: 1,
        reason: "missing header".to_string(),
    })?;
    let header = parse_header(header_line, header)?;

    let expected = header
        .nbin
        .checked_mul(header.length)
        .ok_or_else(|| EnsembleError::Parse {
            line: header_line,
            reason: format!(
                "ensemble size {} x {} overflows",
                header.nbin, header.length
            ),
        })?;
    // The header is untrusted; grow with the records actually present.
    let mut data = Vec::new();
    for _bin in 0..header.nbin {
        for t in 0..header.length {
            let (line_no, line) = lines.next().ok_or_else(|| EnsembleError::Parse {
                line: content.lines().count() + 1,
                reason: format!(
                    "unexpected end of input: expected {} records, found {}",
                    expected,
                    data.len()
                ),
            })?;
            data.push(parse_record(line_no, line, t, header.kind)?);
        }
    }

    if let Some((line_no, _)) = lines.next() {
        return Err(EnsembleError::Parse {
            line: line_no,
            reason: format!("trailing data after {} records", expected),
        });
    }

    Ensemble::from_bins(header.kind, header.nbin, header.length, data)
}

fn parse_header(line_no: usize, line: &str) -> Result<Header> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 5 {
        return Err(EnsembleError::Parse {
            line: line_no,
            reason: format!("header needs 5 fields, found {}", fields.len()),
        });
    }

    let mut values = [0usize; 5];
    for (value, field) in values.iter_mut().zip(fields.iter()) {
        *value = field.parse().map_err(|_| EnsembleError::Parse {
            line: line_no,
            reason: format!("invalid header field '{}'", field),
        })?;
    }
    let [nbin, length, tag, _reserved, ncol] = values;

    if nbin == 0 || length == 0 {
        return Err(EnsembleError::Parse {
            line: line_no,
            reason: format!("empty ensemble: {} bins x {} slices", nbin, length),
        });
    }
    let kind = u8::try_from(tag)
        .ok()
        .and_then(ElementKind::from_type_tag)
        .ok_or_else(|| EnsembleError::Parse {
            line: line_no,
            reason: format!("unsupported type tag {}", tag),
        })?;
    if ncol != 1 {
        return Err(EnsembleError::Parse {
            line: line_no,
            reason: format!("unsupported column count {}", ncol),
        });
    }

    Ok(Header { nbin, length, kind })
}

fn parse_record(line_no: usize, line: &str, expected_t: usize, kind: ElementKind) -> Result<Complex64> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let width = match kind {
        ElementKind::Real => 2,
        ElementKind::Complex => 3,
    };
    if fields.len() != width {
        return Err(EnsembleError::Parse {
            line: line_no,
            reason: format!("{} record needs {} fields, found {}", kind, width, fields.len()),
        });
    }

    let t: usize = fields[0].parse().map_err(|_| EnsembleError::Parse {
        line: line_no,
        reason: format!("invalid time index '{}'", fields[0]),
    })?;
    if t != expected_t {
        return Err(EnsembleError::Parse {
            line: line_no,
            reason: format!("time index {} out of sequence, expected {}", t, expected_t),
        });
    }

    let parse_value = |field: &str| -> Result<f64> {
        field.parse().map_err(|_| EnsembleError::Parse {
            line: line_no,
            reason: format!("invalid value '{}'", field),
        })
    };
    let re = parse_value(fields[1])?;
    let im = match kind {
        ElementKind::Real => 0.0,
        ElementKind::Complex => parse_value(fields[2])?,
    };
    Ok(Complex64::new(re, im))
}

/// Write `ensemble` to `path`, replacing any existing file.
pub fn write_ensemble<P: AsRef<Path>>(path: P, ensemble: &Ensemble) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source: io::Error| EnsembleError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    format_ensemble(&mut writer, ensemble).map_err(io_err)?;
    writer.flush().map_err(io_err)?;
    debug!(
        "Wrote {} ensemble to {}: {} bins x {} slices",
        ensemble.kind(),
        path.display(),
        ensemble.nbin(),
        ensemble.length()
    );
    Ok(())
}

/// Stream the text form of `ensemble` into `writer`.
pub fn format_ensemble<W: Write>(writer: &mut W, ensemble: &Ensemble) -> io::Result<()> {
    for line in text_lines(ensemble) {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

/// Text form of `ensemble`.
pub fn to_ensemble_string(ensemble: &Ensemble) -> String {
    text_lines(ensemble).map(|line| line + "\n").collect()
}

/// Header followed by one record per bin and slice, without line endings.
fn text_lines(ensemble: &Ensemble) -> impl Iterator<Item = String> + '_ {
    let header = format!(
        "{} {} {} 0 1",
        ensemble.nbin(),
        ensemble.length(),
        ensemble.kind().type_tag()
    );
    let records = (0..ensemble.nbin()).flat_map(move |bin| {
        ensemble
            .bin(bin)
            .iter()
            .enumerate()
            .map(move |(t, z)| match ensemble.kind() {
                ElementKind::Real => format!("{} {}", t, format_value(z.re)),
                ElementKind::Complex => {
                    format!("{} {} {}", t, format_value(z.re), format_value(z.im))
                }
            })
    });
    std::iter::once(header).chain(records)
}

/// Shortest decimal text that parses back to exactly `x`. Integral values
/// print without a fraction; very small or large magnitudes use an exponent.
fn format_value(x: f64) -> String {
    let magnitude = x.abs();
    if x == 0.0 || !x.is_finite() || (1e-5..1e16).contains(&magnitude) {
        format!("{}", x)
    } else {
        format!("{:e}", x)
    }
}
