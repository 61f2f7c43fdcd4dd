//! Testing functions and utilities useful for benchmarking, debugging and smoke
//! testing.
//!
//! [`Sphere`] is recommended for first tests, [`Booth`] is a simple but
//! non-separable quadratic and [`Rosenbrock`] is the actual challenge.
//!
//! # References
//!
//! \[1\] [A Literature Survey of Benchmark Functions For Global Optimization
//! Problems](https://arxiv.org/abs/1308.4008)
//!
//! \[2\] [Numerical Methods for Unconstrained Optimization and Nonlinear
//! Equations](https://epubs.siam.org/doi/book/10.1137/1.9781611971200)

#![allow(unused)]

use crate::{
    core::{Config, Function, Optimizer, Point, Problem},
    driver::{DriverError, OptimizerDriver},
    report::Report,
    rosenbrock::Rosenbrock,
};

/// Extension of the [`Function`] trait that provides additional information
/// that is useful for testing optimizers.
pub trait TestFunction: Function<Field = f64> {
    /// Standard initial values for the function. Using the same initial values
    /// is essential for fair comparison of methods.
    fn initials(&self) -> Vec<Point<f64>>;

    /// A set of global optima. This is mostly just for information, for
    /// example to know how close an optimizer got even if it failed. For
    /// testing if a given point is global optimum,
    /// [`TestFunction::is_optimum`] should be used.
    fn optima(&self) -> Vec<Point<f64>>;

    /// Test if given point is a global optimum of the function, given the
    /// tolerance `eps` on the distance.
    fn is_optimum(&self, x: &Point<f64>, eps: f64) -> bool {
        self.optima()
            .iter()
            .any(|optimum| (x - optimum).norm() <= eps)
    }
}

/// [Sphere
/// function](https://en.wikipedia.org/wiki/Test_functions_for_optimization)
/// \[1\].
///
/// This is a simple paraboloid which can be used in early development and
/// sanity checking as it can be considered a trivial problem.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sphere;

impl Sphere {
    /// Initializes the function.
    pub fn new() -> Self {
        Self
    }
}

impl Problem for Sphere {
    type Field = f64;
}

impl Function for Sphere {
    fn value(&self, p: &Point<f64>) -> f64 {
        p.x * p.x + p.y * p.y
    }

    fn partial_x(&self, p: &Point<f64>) -> f64 {
        2.0 * p.x
    }

    fn partial_y(&self, p: &Point<f64>) -> f64 {
        2.0 * p.y
    }
}

impl TestFunction for Sphere {
    fn initials(&self) -> Vec<Point<f64>> {
        vec![
            Point::new(10.0, -10.0),
            Point::new(1.0, 1.0),
            Point::new(-3.0, 2.0),
        ]
    }

    fn optima(&self) -> Vec<Point<f64>> {
        vec![Point::new(0.0, 0.0)]
    }
}

/// [Booth
/// function](https://en.wikipedia.org/wiki/Test_functions_for_optimization)
/// \[1\].
///
/// A quadratic with coupled variables. Unlike for [`Sphere`], the steepest
/// descent directions zig-zag, while the conjugate directions do not.
#[derive(Debug, Clone, Copy, Default)]
pub struct Booth;

impl Booth {
    /// Initializes the function.
    pub fn new() -> Self {
        Self
    }
}

impl Problem for Booth {
    type Field = f64;
}

impl Function for Booth {
    fn value(&self, p: &Point<f64>) -> f64 {
        let r1 = p.x + 2.0 * p.y - 7.0;
        let r2 = 2.0 * p.x + p.y - 5.0;
        r1 * r1 + r2 * r2
    }

    fn partial_x(&self, p: &Point<f64>) -> f64 {
        let r1 = p.x + 2.0 * p.y - 7.0;
        let r2 = 2.0 * p.x + p.y - 5.0;
        2.0 * r1 + 4.0 * r2
    }

    fn partial_y(&self, p: &Point<f64>) -> f64 {
        let r1 = p.x + 2.0 * p.y - 7.0;
        let r2 = 2.0 * p.x + p.y - 5.0;
        4.0 * r1 + 2.0 * r2
    }
}

impl TestFunction for Booth {
    fn initials(&self) -> Vec<Point<f64>> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(-10.0, 10.0),
            Point::new(10.0, 10.0),
        ]
    }

    fn optima(&self) -> Vec<Point<f64>> {
        vec![Point::new(1.0, 3.0)]
    }
}

impl TestFunction for Rosenbrock<f64> {
    fn initials(&self) -> Vec<Point<f64>> {
        vec![Point::new(-1.5, -1.0), Point::new(-1.2, 1.0)]
    }

    fn optima(&self) -> Vec<Point<f64>> {
        vec![self.minimizer()]
    }
}

/// A simple driver setup that can be used in tests.
pub fn optimize<F: Function, O: Optimizer<F>>(
    f: &F,
    config: &Config<F::Field>,
    x: Point<F::Field>,
    optimizer: O,
) -> Result<Report<F::Field>, DriverError> {
    OptimizerDriver::builder(f)
        .with_config(config.clone())
        .with_initial(x)
        .with_algo(|_, _| optimizer)
        .build()
        .run()
}
