//! Backtracking line search.
//!
//! Starting from the full step `alpha = 1`, the step is repeatedly shrunk by
//! a factor `rho` until the Armijo sufficient decrease condition
//!
//! ```text
//! f(x + alpha D) <= f(x) + sigma alpha (g . D)
//! ```
//!
//! holds, where `g` is the gradient at `x` and `D` is the search direction.
//!
//! # References
//!
//! \[1\] [Numerical
//! Optimization](https://link.springer.com/book/10.1007/978-0-387-40065-5)
//!
//! \[2\] [Wikipedia](https://en.wikipedia.org/wiki/Backtracking_line_search)

use getset::{CopyGetters, Setters};
use log::debug;
use nalgebra::RealField;
use thiserror::Error;

use crate::core::{Config, Direction, Function, FunctionExt, Gradient, Point, ProblemError};

/// Options for [`Backtracking`] line search.
#[derive(Debug, Clone, CopyGetters, Setters)]
#[getset(get_copy = "pub", set = "pub")]
pub struct BacktrackingOptions<T: RealField + Copy> {
    /// Factor by which the step is shrunk, must be in `(0, 1)`, otherwise the
    /// search fails with [`LineSearchError::InvalidFactor`]. Default: `0.996`.
    rho: T,
    /// Coefficient of the sufficient decrease condition. Default: `0.501`.
    sigma: T,
    /// Maximum number of shrinks before giving up. Default: `20000`.
    max_backtracks: usize,
}

impl<T: RealField + Copy> Default for BacktrackingOptions<T> {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl<T: RealField + Copy> From<&Config<T>> for BacktrackingOptions<T> {
    fn from(config: &Config<T>) -> Self {
        Self {
            rho: config.rho(),
            sigma: config.sigma(),
            max_backtracks: config.max_backtracks(),
        }
    }
}

/// Error returned from [`Backtracking`] line search.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LineSearchError {
    /// The direction is not a descent direction and even the full step does
    /// not decrease the function sufficiently.
    #[error("direction is not a descent direction")]
    NotDescent,
    /// No acceptable step was found within the allowed number of shrinks.
    #[error("no acceptable step found after {0} backtracks")]
    MaxBacktracks(usize),
    /// The backtracking factor is not in `(0, 1)`.
    #[error("backtracking factor must be in (0, 1)")]
    InvalidFactor,
    /// Error when evaluating the function.
    #[error("{0}")]
    Problem(#[from] ProblemError),
}

/// Backtracking line search. See [module](self) documentation for more
/// details.
#[derive(Debug, Clone)]
pub struct Backtracking<T: RealField + Copy> {
    options: BacktrackingOptions<T>,
}

impl<T: RealField + Copy> Backtracking<T> {
    /// Initializes the line search with default options.
    pub fn new() -> Self {
        Self::with_options(BacktrackingOptions::default())
    }

    /// Initializes the line search with given options.
    pub fn with_options(options: BacktrackingOptions<T>) -> Self {
        Self { options }
    }

    /// Initializes the line search with the constants from the configuration.
    pub fn from_config(config: &Config<T>) -> Self {
        Self::with_options(BacktrackingOptions::from(config))
    }

    /// Returns the options of the line search.
    pub fn options(&self) -> &BacktrackingOptions<T> {
        &self.options
    }

    /// Finds a step length `alpha > 0` along `dir` from point `p` with gradient
    /// `grad` such that the sufficient decrease condition holds.
    pub fn search<F>(
        &self,
        f: &F,
        p: &Point<T>,
        grad: &Gradient<T>,
        dir: &Direction<T>,
    ) -> Result<T, LineSearchError>
    where
        F: Function<Field = T>,
    {
        let BacktrackingOptions {
            rho,
            sigma,
            max_backtracks,
        } = self.options;

        if !(rho > T::zero() && rho < T::one()) {
            debug!("line search: invalid backtracking factor {}", rho);
            return Err(LineSearchError::InvalidFactor);
        }

        let fx = f.checked_value(p)?;
        let slope = grad.dot(dir);

        let mut alpha = T::one();
        let mut backtracks = 0;

        loop {
            let trial = p + dir * alpha;
            let f_trial = f.value(&trial);

            // A NaN trial value fails the comparison and is rejected.
            let sufficient = f_trial <= fx + sigma * alpha * slope;

            if sufficient {
                break;
            }

            if slope >= T::zero() {
                debug!("line search: slope {} is not negative", slope);
                return Err(LineSearchError::NotDescent);
            }

            if backtracks >= max_backtracks {
                debug!("line search: gave up at alpha = {}", alpha);
                return Err(LineSearchError::MaxBacktracks(backtracks));
            }

            alpha *= rho;
            backtracks += 1;

            if alpha <= T::zero() {
                return Err(LineSearchError::MaxBacktracks(backtracks));
            }
        }

        debug!(
            "line search: alpha = {} after {} backtracks",
            alpha, backtracks
        );

        Ok(alpha)
    }
}

impl<T: RealField + Copy> Default for Backtracking<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::rosenbrock::Rosenbrock;
    use crate::testing::*;

    fn armijo<F: Function<Field = f64>>(
        f: &F,
        p: &Point<f64>,
        grad: &Gradient<f64>,
        dir: &Direction<f64>,
        alpha: f64,
        sigma: f64,
    ) -> bool {
        f.value(&(p + dir * alpha)) <= f.value(p) + sigma * alpha * grad.dot(dir)
    }

    #[test]
    fn accepts_full_step() {
        let f = Sphere::new();
        let p = Point::new(1.0, 0.0);
        let grad = f.gradient(&p);
        let dir = Direction::new(-0.5, 0.0);

        let alpha = Backtracking::new().search(&f, &p, &grad, &dir).unwrap();
        assert_eq!(alpha, 1.0);
    }

    #[test]
    fn sufficient_decrease() {
        let line_search = Backtracking::<f64>::new();
        let sigma = line_search.options().sigma();

        let sphere = Sphere::new();
        for p in sphere.initials() {
            let grad = sphere.gradient(&p);
            let dir = -grad;
            let alpha = line_search.search(&sphere, &p, &grad, &dir).unwrap();

            assert!(alpha > 0.0 && alpha < 1.0);
            assert!(armijo(&sphere, &p, &grad, &dir, alpha, sigma));
        }

        let rosenbrock = Rosenbrock::<f64>::default();
        for p in rosenbrock.initials() {
            let grad = rosenbrock.gradient(&p);
            let dir = -grad;
            let alpha = line_search.search(&rosenbrock, &p, &grad, &dir).unwrap();

            assert!(alpha > 0.0);
            assert!(armijo(&rosenbrock, &p, &grad, &dir, alpha, sigma));
        }
    }

    #[test]
    fn ascent_direction() {
        let f = Sphere::new();
        let p = Point::new(1.0, 2.0);
        let grad = f.gradient(&p);

        assert_eq!(
            Backtracking::new().search(&f, &p, &grad, &grad),
            Err(LineSearchError::NotDescent)
        );
    }

    #[test]
    fn backtracks_exhausted() {
        let f = Rosenbrock::<f64>::default();
        let p = Point::new(-1.5, -1.0);
        let grad = f.gradient(&p);

        let mut options = BacktrackingOptions::default();
        options.set_max_backtracks(10);

        assert_eq!(
            Backtracking::with_options(options).search(&f, &p, &grad, &-grad),
            Err(LineSearchError::MaxBacktracks(10))
        );
    }

    #[test]
    fn invalid_factor() {
        let f = Sphere::new();
        let p = Point::new(1.0, 2.0);
        let grad = f.gradient(&p);

        for rho in [1.0, 1.5, 0.0, -0.5, f64::NAN] {
            let mut options = BacktrackingOptions::default();
            options.set_rho(rho);

            assert_eq!(
                Backtracking::with_options(options).search(&f, &p, &grad, &-grad),
                Err(LineSearchError::InvalidFactor)
            );
        }
    }

    #[test]
    fn invalid_start() {
        let f = Sphere::new();
        let p = Point::new(f64::INFINITY, 0.0);
        let dir = Direction::new(-1.0, 0.0);

        assert_eq!(
            Backtracking::new().search(&f, &p, &dir, &dir),
            Err(LineSearchError::Problem(ProblemError::InvalidValue))
        );
    }
}
