//! Mapping from command-line operation names to ensemble operations.
use std::str::FromStr;

use resample_ensemble::{Ensemble, Result};

/// Single-operand operations exposed by `resample unary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Conj,
    Re,
    Im,
    Norm2,
    TimesI,
    Sqrt,
    Exp,
    Log,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Abs,
    Reverse,
    Symmetrize,
}

impl UnaryOp {
    pub const NAMES: [&'static str; 18] = [
        "neg",
        "conj",
        "re",
        "im",
        "norm2",
        "times-i",
        "sqrt",
        "exp",
        "log",
        "sin",
        "cos",
        "tan",
        "asin",
        "acos",
        "atan",
        "abs",
        "reverse",
        "symmetrize",
    ];

    pub fn apply(self, e: &Ensemble) -> Result<Ensemble> {
        Ok(match self {
            UnaryOp::Neg => e.neg(),
            UnaryOp::Conj => e.conj(),
            UnaryOp::Re => e.re(),
            UnaryOp::Im => e.im(),
            UnaryOp::Norm2 => e.norm_sqr(),
            UnaryOp::TimesI => e.times_i(),
            UnaryOp::Sqrt => e.sqrt(),
            UnaryOp::Exp => e.exp(),
            UnaryOp::Log => e.ln(),
            UnaryOp::Sin => e.sin(),
            UnaryOp::Cos => e.cos(),
            UnaryOp::Tan => e.tan(),
            UnaryOp::Asin => e.asin()?,
            UnaryOp::Acos => e.acos()?,
            UnaryOp::Atan => e.atan()?,
            UnaryOp::Abs => e.abs(),
            UnaryOp::Reverse => e.reverse(),
            UnaryOp::Symmetrize => e.symmetrize(),
        })
    }
}

impl FromStr for UnaryOp {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "neg" => Ok(UnaryOp::Neg),
            "conj" => Ok(UnaryOp::Conj),
            "re" => Ok(UnaryOp::Re),
            "im" => Ok(UnaryOp::Im),
            "norm2" => Ok(UnaryOp::Norm2),
            "times-i" => Ok(UnaryOp::TimesI),
            "sqrt" => Ok(UnaryOp::Sqrt),
            "exp" => Ok(UnaryOp::Exp),
            "log" => Ok(UnaryOp::Log),
            "sin" => Ok(UnaryOp::Sin),
            "cos" => Ok(UnaryOp::Cos),
            "tan" => Ok(UnaryOp::Tan),
            "asin" => Ok(UnaryOp::Asin),
            "acos" => Ok(UnaryOp::Acos),
            "atan" => Ok(UnaryOp::Atan),
            "abs" => Ok(UnaryOp::Abs),
            "reverse" => Ok(UnaryOp::Reverse),
            "symmetrize" => Ok(UnaryOp::Symmetrize),
            _ => Err(format!("Unknown unary operation: {}", s)),
        }
    }
}

/// Two-operand operations exposed by `resample binary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Atan2,
}

impl BinaryOp {
    pub const NAMES: [&'static str; 5] = ["add", "sub", "mul", "div", "atan2"];

    pub fn apply(self, a: &Ensemble, b: &Ensemble) -> Result<Ensemble> {
        match self {
            BinaryOp::Add => a.add(b),
            BinaryOp::Sub => a.sub(b),
            BinaryOp::Mul => a.mul(b),
            BinaryOp::Div => a.div(b),
            BinaryOp::Atan2 => a.atan2(b),
        }
    }
}

impl FromStr for BinaryOp {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "add" => Ok(BinaryOp::Add),
            "sub" => Ok(BinaryOp::Sub),
            "mul" => Ok(BinaryOp::Mul),
            "div" => Ok(BinaryOp::Div),
            "atan2" => Ok(BinaryOp::Atan2),
            _ => Err(format!("Unknown binary operation: {}", s)),
        }
    }
}
