use getset::{CopyGetters, Setters};
use nalgebra::{convert, RealField};

use super::{base::Point, convergence::Convergence};

/// Configuration shared by all method runs.
///
/// The defaults reproduce the canonical comparison setup: start at
/// `(-1.5, -1)`, stop when the squared gradient norm drops to `1e-14` or after
/// 1000 iterations, backtrack with `rho = 0.996` and `sigma = 0.501` and
/// restart conjugate gradient every 10 iterations.
#[derive(Debug, Clone, CopyGetters, Setters)]
#[getset(get_copy = "pub", set = "pub")]
pub struct Config<T: RealField + Copy> {
    /// Starting point of every run. Default: `(-1.5, -1)`.
    initial: Point<T>,
    /// Squared tolerance for the gradient norm. Default: `1e-14`.
    tolerance_squared: T,
    /// Maximum number of iterations. Default: `1000`.
    max_iters: usize,
    /// Backtracking factor, must be in `(0, 1)`. Default: `0.996`.
    rho: T,
    /// Sufficient decrease coefficient. Default: `0.501`.
    sigma: T,
    /// Maximum number of step shrinks in a single line search. Default:
    /// `20000`.
    max_backtracks: usize,
    /// Period of the restart for partial conjugate gradient. Default: `10`.
    restart_period: usize,
}

impl<T: RealField + Copy> Default for Config<T> {
    fn default() -> Self {
        Self {
            initial: Point::new(convert(-1.5), convert(-1.0)),
            tolerance_squared: convert(1e-14),
            max_iters: 1000,
            rho: convert(0.996),
            sigma: convert(0.501),
            max_backtracks: 20_000,
            restart_period: 10,
        }
    }
}

impl<T: RealField + Copy> Config<T> {
    /// Returns the convergence check derived from the tolerance and the
    /// iteration cap.
    pub fn convergence(&self) -> Convergence<T> {
        Convergence::new(self.tolerance_squared, self.max_iters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::<f64>::default();

        assert_eq!(config.initial(), Point::new(-1.5, -1.0));
        assert_eq!(config.tolerance_squared(), 1e-14);
        assert_eq!(config.max_iters(), 1000);
        assert_eq!(config.rho(), 0.996);
        assert_eq!(config.sigma(), 0.501);
        assert_eq!(config.restart_period(), 10);
    }

    #[test]
    fn setters_feed_convergence() {
        let mut config = Config::<f64>::default();
        config.set_max_iters(5).set_tolerance_squared(1e-4);

        let convergence = config.convergence();
        assert_eq!(convergence.max_iters(), 5);
        assert_eq!(convergence.tolerance_squared(), 1e-4);
    }
}
