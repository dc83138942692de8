//! Context - forwards computations to whichever algorithm is installed

use std::io::{self, Write};

use tracing::debug;

use crate::algorithm::Algorithm;

/// Holds exactly one algorithm and delegates to it
///
/// The algorithm can be swapped at any time; a swap only affects calls made
/// after it.
pub struct Context {
    algorithm: Box<dyn Algorithm>,
}

impl Context {
    pub fn new(algorithm: Box<dyn Algorithm>) -> Self {
        debug!(algorithm = algorithm.name(), "Context::new: called");
        Self { algorithm }
    }

    /// The currently installed algorithm
    pub fn algorithm(&self) -> &dyn Algorithm {
        self.algorithm.as_ref()
    }

    /// Replace the installed algorithm
    pub fn set_algorithm(&mut self, algorithm: Box<dyn Algorithm>) {
        debug!(
            from = self.algorithm.name(),
            to = algorithm.name(),
            "Context::set_algorithm: called"
        );
        self.algorithm = algorithm;
    }

    /// Delegate `(a, b)` to the installed algorithm, narrating to `out`
    pub fn run<W: Write + ?Sized>(&self, a: i64, b: i64, out: &mut W) -> io::Result<String> {
        debug!(%a, %b, algorithm = self.algorithm.name(), "Context::run: called");
        writeln!(out, "Taking two numbers {} and {}", a, b)?;
        let result = self.algorithm.compute(a, b);
        writeln!(out, "using the {} algorithm", self.algorithm.display_name())?;
        writeln!(out, "result: {}", result)?;
        Ok(result)
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("algorithm", &self.algorithm.name())
            .finish()
    }
}
