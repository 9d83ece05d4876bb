use std::{fmt, str::FromStr};

use thiserror::Error;

use super::weight::Weight;

/// Objective of the path computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Find paths with the smallest cumulative weight.
    #[default]
    Minimize,
    /// Find paths with the largest cumulative weight.
    ///
    /// Relaxation only terminates with a well-defined answer on acyclic
    /// graphs, so cycles must be
    /// [eliminated](crate::algo::EliminateCycles) beforehand.
    Maximize,
}

pub use Mode::*;

impl Mode {
    /// The "no finite path known" label: `+∞` when minimizing, `−∞` when
    /// maximizing.
    #[inline]
    pub fn sentinel<W: Weight>(&self) -> W {
        match self {
            Minimize => W::inf(),
            Maximize => W::neg_inf(),
        }
    }

    /// Returns `true` if `candidate` is strictly better than `current`.
    #[inline]
    pub fn improves<W: Weight>(&self, candidate: &W, current: &W) -> bool {
        match self {
            Minimize => candidate < current,
            Maximize => candidate > current,
        }
    }

    pub fn is_maximize(&self) -> bool {
        matches!(self, Maximize)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Minimize => "min",
            Maximize => "max",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode `{0}`, expected `min` or `max`")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" | "minimize" | "shortest" => Ok(Minimize),
            "max" | "maximize" | "longest" => Ok(Maximize),
            _ => Err(ParseModeError(s.to_owned())),
        }
    }
}
