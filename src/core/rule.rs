use nalgebra::RealField;

use super::base::Gradient;

/// Interface of a conjugate gradient update rule.
///
/// A rule computes the scalar coefficient *beta* which blends the previous
/// direction into the new one: `D' = beta * D - g'`. The
/// [`ConjugateGradient`](crate::algo::ConjugateGradient) optimizer is agnostic
/// to which rule is used.
///
/// ## Implementing a rule
///
/// Here is the Fletcher-Reeves rule with the coefficient halved.
///
/// ```rust
/// use gradopt::nalgebra::RealField;
/// use gradopt::{DirectionRule, Gradient};
///
/// struct Damped;
///
/// impl<T: RealField + Copy> DirectionRule<T> for Damped {
///     const NAME: &'static str = "Damped";
///
///     fn beta(&self, old: &Gradient<T>, new: &Gradient<T>) -> Option<T> {
///         let denom = old.norm_squared();
///         (denom != T::zero()).then(|| new.norm_squared() / (denom + denom))
///     }
/// }
/// ```
pub trait DirectionRule<T: RealField + Copy> {
    /// Name of the rule.
    const NAME: &'static str;

    /// Computes beta from the gradient of the previous iterate (`old`) and the
    /// gradient of the current one (`new`).
    ///
    /// Returns `None` if beta is undefined because the old gradient is exactly
    /// zero, that is, the previous iterate was already stationary.
    fn beta(&self, old: &Gradient<T>, new: &Gradient<T>) -> Option<T>;
}
