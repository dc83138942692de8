//! Algorithm trait and the shipped variants

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A stateless two-operand computation the [`Context`](crate::Context) delegates to
///
/// Implementors must be pure: the same operands always give the same result.
pub trait Algorithm: Send + Sync {
    /// Stable identifier, matches the [`AlgorithmKind`] spelling
    fn name(&self) -> &str;

    /// Human-readable name printed by the context
    fn display_name(&self) -> &str;

    fn compute(&self, a: i64, b: i64) -> String;
}

/// Renders the arithmetic sum of the operands
#[derive(Debug, Clone, Copy, Default)]
pub struct Sum;

impl Algorithm for Sum {
    fn name(&self) -> &str {
        "sum"
    }

    fn display_name(&self) -> &str {
        "summation"
    }

    fn compute(&self, a: i64, b: i64) -> String {
        debug!(%a, %b, "Sum::compute: called");
        // Widened so i64 extremes cannot overflow
        (i128::from(a) + i128::from(b)).to_string()
    }
}

/// Glues the operands' decimal text together
#[derive(Debug, Clone, Copy, Default)]
pub struct Concat;

impl Algorithm for Concat {
    fn name(&self) -> &str {
        "concat"
    }

    fn display_name(&self) -> &str {
        "concatenation"
    }

    fn compute(&self, a: i64, b: i64) -> String {
        debug!(%a, %b, "Concat::compute: called");
        format!("{}{}", a, b)
    }
}

/// Names of the shipped algorithms, for config files and the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    Sum,
    Concat,
}

impl AlgorithmKind {
    pub fn build(self) -> Box<dyn Algorithm> {
        match self {
            Self::Sum => Box::new(Sum),
            Self::Concat => Box::new(Concat),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sum => write!(f, "sum"),
            Self::Concat => write!(f, "concat"),
        }
    }
}
