//! The [Rosenbrock function](https://en.wikipedia.org/wiki/Rosenbrock_function)
//! (also known as Rosenbrock's valley or banana function).
//!
//! ```text
//! f(x, y) = b (y - x^2)^2 + (a - x)^2
//! ```
//!
//! The global minimum `f = 0` at `(a, a^2)` lies inside a long, narrow,
//! parabolic shaped flat valley. Finding the valley is trivial, converging to
//! the minimum is difficult, which makes it a classic benchmark for gradient
//! methods.

use nalgebra::{convert, RealField};

use crate::core::{Function, Point, Problem};

/// Two-dimensional Rosenbrock function with parameters `a` and `b`.
#[derive(Debug, Clone, Copy)]
pub struct Rosenbrock<T: RealField + Copy> {
    a: T,
    b: T,
}

impl<T: RealField + Copy> Rosenbrock<T> {
    /// Creates the function with given parameters.
    pub fn new(a: T, b: T) -> Self {
        Self { a, b }
    }

    /// Returns the global minimizer `(a, a^2)`.
    pub fn minimizer(&self) -> Point<T> {
        Point::new(self.a, self.a * self.a)
    }
}

impl Default for Rosenbrock<f64> {
    /// The standard `a = 1`, `b = 100` parameterization.
    fn default() -> Self {
        Self::new(1.0, 100.0)
    }
}

impl<T: RealField + Copy> Problem for Rosenbrock<T> {
    type Field = T;
}

impl<T: RealField + Copy> Function for Rosenbrock<T> {
    fn value(&self, p: &Point<T>) -> T {
        let valley = p.y - p.x * p.x;
        let offset = self.a - p.x;
        self.b * valley * valley + offset * offset
    }

    fn partial_x(&self, p: &Point<T>) -> T {
        let four: T = convert(4.0);
        let two: T = convert(2.0);
        -four * self.b * p.x * (p.y - p.x * p.x) - two * (self.a - p.x)
    }

    fn partial_y(&self, p: &Point<T>) -> T {
        let two: T = convert(2.0);
        two * self.b * (p.y - p.x * p.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    #[test]
    fn value_at_start() {
        let f = Rosenbrock::<f64>::default();

        // 100 * (-1 - 2.25)^2 + 2.5^2
        assert_abs_diff_eq!(f.value(&Point::new(-1.5, -1.0)), 1062.5, epsilon = 1e-12);
    }

    #[test]
    fn minimum() {
        let f = Rosenbrock::<f64>::default();
        let x = f.minimizer();

        assert_eq!(x, Point::new(1.0, 1.0));
        assert_eq!(f.value(&x), 0.0);
        assert_eq!(f.gradient(&x), Point::new(0.0, 0.0));
    }

    #[test]
    fn partials_match_finite_differences() {
        let f = Rosenbrock::new(1.0, 100.0);
        let h = 1e-6;

        for p in [
            Point::new(-1.5, -1.0),
            Point::new(0.3, 0.7),
            Point::new(2.0, -0.5),
        ] {
            let dx = (f.value(&Point::new(p.x + h, p.y)) - f.value(&Point::new(p.x - h, p.y)))
                / (2.0 * h);
            let dy = (f.value(&Point::new(p.x, p.y + h)) - f.value(&Point::new(p.x, p.y - h)))
                / (2.0 * h);

            assert_abs_diff_eq!(f.partial_x(&p), dx, epsilon = 1e-3);
            assert_abs_diff_eq!(f.partial_y(&p), dy, epsilon = 1e-3);
        }
    }

    #[test]
    fn custom_parameters() {
        let f = Rosenbrock::new(2.0, 1.0);

        assert_eq!(f.minimizer(), Point::new(2.0, 4.0));
        assert_eq!(f.value(&Point::new(2.0, 4.0)), 0.0);
        assert_eq!(f.value(&Point::new(0.0, 0.0)), 4.0);
    }
}
