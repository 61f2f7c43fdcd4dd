//! Steepest descent method.
//!
//! The [steepest descent](https://en.wikipedia.org/wiki/Gradient_descent)
//! method always moves along the negated gradient. It is robust but converges
//! slowly in narrow curved valleys, where consecutive directions zig-zag.

use std::marker::PhantomData;

use crate::core::{Config, Direction, Function, Gradient, Optimizer, ProblemError, Update};

/// Steepest descent optimizer. See [module](self) documentation for more
/// details.
pub struct SteepestDescent<F: Function> {
    _phantom: PhantomData<F::Field>,
}

impl<F: Function> SteepestDescent<F> {
    /// Initializes the steepest descent optimizer.
    pub fn new(_f: &F, _config: &Config<F::Field>) -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<F: Function> Optimizer<F> for SteepestDescent<F> {
    fn name(&self) -> String {
        "steepest descent method".to_string()
    }

    fn next_direction(
        &mut self,
        _iter: usize,
        _old_grad: &Gradient<F::Field>,
        new_grad: &Gradient<F::Field>,
        _old_dir: &Direction<F::Field>,
    ) -> Result<Update<F::Field>, ProblemError> {
        Ok(Update::Direction(-new_grad))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::Point;
    use crate::testing::*;

    #[test]
    fn negated_gradient() {
        let f = Sphere::new();
        let mut optimizer = SteepestDescent::new(&f, &Config::default());

        let update = optimizer
            .next_direction(
                3,
                &Gradient::new(5.0, 5.0),
                &Gradient::new(1.0, -2.0),
                &Direction::new(7.0, 7.0),
            )
            .unwrap();

        assert_eq!(update, Update::Direction(Direction::new(-1.0, 2.0)));
    }

    #[test]
    fn sphere() {
        let f = Sphere::new();
        let config = Config::default();

        for x in f.initials() {
            let optimizer = SteepestDescent::new(&f, &config);
            let report = optimize(&f, &config, x, optimizer).unwrap();
            assert!(f.is_optimum(&report.point(), 1e-6));
        }
    }

    #[test]
    fn rosenbrock() {
        let f = crate::rosenbrock::Rosenbrock::<f64>::default();
        let config = Config::default();
        let optimizer = SteepestDescent::new(&f, &config);

        let report = optimize(&f, &config, Point::new(-1.5, -1.0), optimizer).unwrap();
        assert!(report.converged());
        assert!(f.is_optimum(&report.point(), 1e-6));
    }
}
