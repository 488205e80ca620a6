use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::config::Resampling;
use crate::ensemble::ElementKind;

/// Errors returned by ensemble construction, arithmetic and file I/O.
#[derive(Debug)]
pub enum EnsembleError {
    /// Operands differ in bin count, or in length outside the broadcast rule.
    /// Shapes are `(nbin, length)`.
    Shape {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Zero bins or zero time-slices requested.
    EmptyShape { nbin: usize, length: usize },
    /// Explicit data buffer does not hold `nbin * length` values.
    BufferLength { expected: usize, got: usize },
    /// Operands carry different resampling schemes.
    ResamplingMismatch { left: Resampling, right: Resampling },
    /// Operation requires real data.
    Type {
        op: &'static str,
        kind: ElementKind,
    },
    Range { op: &'static str, reason: String },
    /// Malformed ensemble file; `line` is 1-based.
    Parse { line: usize, reason: String },
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for EnsembleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EnsembleError::Shape { left, right } => write!(
                f,
                "incompatible ensembles: {} bins x {} slices vs {} bins x {} slices",
                left.0, left.1, right.0, right.1
            ),
            EnsembleError::EmptyShape { nbin, length } => write!(
                f,
                "ensemble needs at least one bin and one slice, got {} bins x {} slices",
                nbin, length
            ),
            EnsembleError::BufferLength { expected, got } => {
                write!(f, "expected {} values, got {}", expected, got)
            }
            EnsembleError::ResamplingMismatch { left, right } => {
                write!(f, "cannot combine {} and {} ensembles", left, right)
            }
            EnsembleError::Type { op, kind } => {
                write!(f, "{} requires real data, got {} ensemble", op, kind)
            }
            EnsembleError::Range { op, reason } => write!(f, "{}: {}", op, reason),
            EnsembleError::Parse { line, reason } => {
                write!(f, "parse error at line {}: {}", line, reason)
            }
            EnsembleError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for EnsembleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EnsembleError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EnsembleError>;
