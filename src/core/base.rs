use nalgebra::{RealField, Vector2};
use thiserror::Error;

/// Current iterate `(x, y)`.
pub type Point<T> = Vector2<T>;

/// Partial derivatives `(dx, dy)` of the objective at a point.
pub type Gradient<T> = Vector2<T>;

/// Descent direction `(Dx, Dy)` used for the next step.
pub type Direction<T> = Vector2<T>;

/// The base trait for [`Function`](super::function::Function).
pub trait Problem {
    /// Type of the scalar, usually f32 or f64.
    type Field: RealField + Copy;
}

/// Error encountered while evaluating the objective or quantities derived
/// from it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProblemError {
    /// An invalid value (NaN, positive or negative infinity) of the function
    /// value, a partial derivative or a derived coefficient occurred.
    #[error("invalid value encountered")]
    InvalidValue,
}
