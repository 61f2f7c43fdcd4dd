//! Terminal results of a method run.

use std::fmt;

use getset::{CopyGetters, Getters};
use nalgebra::RealField;

use crate::core::{Point, Termination};

/// Final state of a single method run.
///
/// The `Display` implementation prints a one-line summary with the converged
/// point and the function value to 15 decimal places.
#[derive(Debug, Clone, CopyGetters, Getters)]
pub struct Report<T: RealField + Copy> {
    /// Human readable name of the method.
    #[getset(get = "pub")]
    method: String,
    /// Terminal point.
    #[getset(get_copy = "pub")]
    point: Point<T>,
    /// Number of iterations taken.
    #[getset(get_copy = "pub")]
    iters: usize,
    /// Function value at the terminal point.
    #[getset(get_copy = "pub")]
    value: T,
    /// Reason why the run stopped.
    #[getset(get_copy = "pub")]
    termination: Termination,
}

impl<T: RealField + Copy> Report<T> {
    /// Creates the report.
    pub fn new(
        method: String,
        point: Point<T>,
        iters: usize,
        value: T,
        termination: Termination,
    ) -> Self {
        Self {
            method,
            point,
            iters,
            value,
            termination,
        }
    }

    /// Returns `true` if the run stopped because of convergence.
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

impl<T: RealField + Copy> fmt::Display for Report<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "With the {}, it converges to (x, y) = ({:.15}, {:.15}) in {} iterations, with f(x, y) = {:.15}",
            self.method, self.point.x, self.point.y, self.iters, self.value
        )?;

        if !self.converged() {
            write!(f, " ({})", self.termination)?;
        }

        Ok(())
    }
}
