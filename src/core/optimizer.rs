use nalgebra::RealField;

use super::{
    base::{Direction, Gradient, ProblemError},
    function::Function,
};

/// Outcome of a direction update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Update<T: RealField + Copy> {
    /// Continue along the given direction.
    Direction(Direction<T>),
    /// The previous iterate was stationary and no direction can be computed.
    /// The process is considered converged.
    Stationary,
}

/// Common interface for all optimizers.
///
/// The [driver](crate::driver) owns the iteration state, performs the line
/// search and moves the point. An optimizer is only responsible for
/// computing the next descent direction from the gradient history. The
/// initial direction is always the negated gradient and is not computed by
/// the optimizer.
///
/// ## Implementing an optimizer
///
/// Here is the steepest descent with a fixed scaling of the gradient.
///
/// ```rust
/// use gradopt::{Direction, Function, Gradient, Optimizer, ProblemError, Update};
///
/// struct Scaled(f64);
///
/// impl<F: Function<Field = f64>> Optimizer<F> for Scaled {
///     fn name(&self) -> String {
///         "scaled steepest descent method".to_string()
///     }
///
///     fn next_direction(
///         &mut self,
///         _iter: usize,
///         _old_grad: &Gradient<f64>,
///         new_grad: &Gradient<f64>,
///         _old_dir: &Direction<f64>,
///     ) -> Result<Update<f64>, ProblemError> {
///         Ok(Update::Direction(-new_grad * self.0))
///     }
/// }
/// ```
pub trait Optimizer<F: Function> {
    /// Human readable name of the method, used in reports.
    fn name(&self) -> String;

    /// Computes the direction for the step following iteration `iter`
    /// (counted from 1).
    ///
    /// `old_grad` and `old_dir` are the gradient and direction used for the
    /// step just performed, `new_grad` is the gradient at the new point.
    fn next_direction(
        &mut self,
        iter: usize,
        old_grad: &Gradient<F::Field>,
        new_grad: &Gradient<F::Field>,
        old_dir: &Direction<F::Field>,
    ) -> Result<Update<F::Field>, ProblemError>;
}
