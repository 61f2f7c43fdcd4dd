use nalgebra::{ComplexField, Vector2};

use super::base::{Gradient, Point, Problem, ProblemError};

/// The trait for defining objective functions.
///
/// ## Defining a function
///
/// A function is any type that implements [`Function`] and [`Problem`] traits.
/// There is one required associated type (the scalar type) and three required
/// methods: [`value`](Function::value), [`partial_x`](Function::partial_x) and
/// [`partial_y`](Function::partial_y).
///
/// ```rust
/// use gradopt::{Function, Point, Problem};
///
/// // A problem is represented by a type.
/// struct Paraboloid {
///     c: f64,
/// }
///
/// impl Problem for Paraboloid {
///     // The numeric type. Usually f64 or f32.
///     type Field = f64;
/// }
///
/// impl Function for Paraboloid {
///     fn value(&self, p: &Point<f64>) -> f64 {
///         p.x * p.x + self.c * p.y * p.y
///     }
///
///     fn partial_x(&self, p: &Point<f64>) -> f64 {
///         2.0 * p.x
///     }
///
///     fn partial_y(&self, p: &Point<f64>) -> f64 {
///         2.0 * self.c * p.y
///     }
/// }
///
/// let f = Paraboloid { c: 4.0 };
/// let grad = f.gradient(&Point::new(1.0, 1.0));
/// assert_eq!((grad.x, grad.y), (2.0, 8.0));
/// ```
pub trait Function: Problem {
    /// Calculate the function value at given point.
    fn value(&self, p: &Point<Self::Field>) -> Self::Field;

    /// Calculate the partial derivative with respect to `x` at given point.
    fn partial_x(&self, p: &Point<Self::Field>) -> Self::Field;

    /// Calculate the partial derivative with respect to `y` at given point.
    fn partial_y(&self, p: &Point<Self::Field>) -> Self::Field;

    /// Calculate the gradient at given point from both partial derivatives.
    fn gradient(&self, p: &Point<Self::Field>) -> Gradient<Self::Field> {
        Vector2::new(self.partial_x(p), self.partial_y(p))
    }
}

/// Some extensions methods for the [`Function`] that may be found useful.
pub trait FunctionExt: Function {
    /// Calculate the function value, failing with
    /// [`ProblemError::InvalidValue`] if it is not finite.
    fn checked_value(&self, p: &Point<Self::Field>) -> Result<Self::Field, ProblemError>;

    /// Calculate the gradient, failing with [`ProblemError::InvalidValue`] if
    /// any of the partial derivatives is not finite.
    fn checked_gradient(
        &self,
        p: &Point<Self::Field>,
    ) -> Result<Gradient<Self::Field>, ProblemError>;
}

impl<F: Function> FunctionExt for F {
    fn checked_value(&self, p: &Point<F::Field>) -> Result<F::Field, ProblemError> {
        let value = self.value(p);

        if value.is_finite() {
            Ok(value)
        } else {
            Err(ProblemError::InvalidValue)
        }
    }

    fn checked_gradient(&self, p: &Point<F::Field>) -> Result<Gradient<F::Field>, ProblemError> {
        let grad = self.gradient(p);

        if grad.iter().all(|d| d.is_finite()) {
            Ok(grad)
        } else {
            Err(ProblemError::InvalidValue)
        }
    }
}
