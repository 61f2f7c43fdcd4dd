use std::fmt;

use getset::CopyGetters;
use nalgebra::RealField;

use super::base::Gradient;

/// Reason why the iterative process stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The squared gradient norm dropped to the tolerance.
    Converged,
    /// The iteration cap was hit first.
    MaxIterReached,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Converged => write!(f, "converged"),
            Termination::MaxIterReached => write!(f, "maximum number of iterations reached"),
        }
    }
}

/// Stopping policy based on the squared gradient norm and an iteration cap.
///
/// The squared norm is compared against the squared tolerance, so no square
/// root is ever taken.
#[derive(Debug, Clone, Copy, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Convergence<T: RealField + Copy> {
    /// Squared tolerance for the gradient norm.
    tolerance_squared: T,
    /// Maximum number of iterations.
    max_iters: usize,
}

impl<T: RealField + Copy> Convergence<T> {
    /// Creates the policy from the squared tolerance and the iteration cap.
    pub fn new(tolerance_squared: T, max_iters: usize) -> Self {
        Self {
            tolerance_squared,
            max_iters,
        }
    }

    /// Returns the termination reason if the process should stop at this
    /// gradient and iteration, `None` otherwise.
    ///
    /// Convergence takes precedence over the iteration cap.
    pub fn check(&self, grad: &Gradient<T>, iter: usize) -> Option<Termination> {
        if grad.norm_squared() <= self.tolerance_squared {
            Some(Termination::Converged)
        } else if iter >= self.max_iters {
            Some(Termination::MaxIterReached)
        } else {
            None
        }
    }

    /// Returns `true` if the iteration should continue.
    pub fn should_continue(&self, grad: &Gradient<T>, iter: usize) -> bool {
        self.check(grad, iter).is_none()
    }
}
