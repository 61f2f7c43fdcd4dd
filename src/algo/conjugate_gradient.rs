//! Nonlinear conjugate gradient method.
//!
//! [Nonlinear conjugate
//! gradient](https://en.wikipedia.org/wiki/Nonlinear_conjugate_gradient_method)
//! blends the negated gradient with the previous direction,
//!
//! ```text
//! D' = beta D - g'
//! ```
//!
//! where the coefficient *beta* is given by a [`DirectionRule`]. Two rules are
//! provided: [`FletcherReeves`] and [`PolakRibiere`].
//!
//! Conjugacy of the directions degrades over long runs on nonquadratic
//! functions. The *partial* variant therefore restarts the method every *N*
//! iterations by forcing `beta = 0`, which makes that step a pure steepest
//! descent step.
//!
//! # References
//!
//! \[1\] [Numerical
//! Optimization](https://link.springer.com/book/10.1007/978-0-387-40065-5)
//!
//! \[2\] [Function minimization by conjugate
//! gradients](https://academic.oup.com/comjnl/article/7/2/149/335311)

use getset::{CopyGetters, Setters};
use log::debug;
use nalgebra::{zero, ComplexField, RealField};

use crate::core::{
    Config, Direction, DirectionRule, Function, Gradient, Optimizer, ProblemError, Update,
};

/// Fletcher-Reeves rule: `beta = |g'|^2 / |g|^2`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FletcherReeves;

impl<T: RealField + Copy> DirectionRule<T> for FletcherReeves {
    const NAME: &'static str = "Fletcher-Reeves";

    fn beta(&self, old: &Gradient<T>, new: &Gradient<T>) -> Option<T> {
        let denom = old.norm_squared();

        if denom == T::zero() {
            return None;
        }

        Some(new.norm_squared() / denom)
    }
}

/// Polak-Ribière rule: `beta = ((g' - g) . g') / |g|^2`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolakRibiere;

impl<T: RealField + Copy> DirectionRule<T> for PolakRibiere {
    const NAME: &'static str = "Polak-Ribiere";

    fn beta(&self, old: &Gradient<T>, new: &Gradient<T>) -> Option<T> {
        let denom = old.norm_squared();

        if denom == T::zero() {
            return None;
        }

        Some((new - old).dot(new) / denom)
    }
}

/// Options for [`ConjugateGradient`] optimizer.
#[derive(Debug, Clone, Copy, Default, CopyGetters, Setters)]
#[getset(get_copy = "pub", set = "pub")]
pub struct ConjugateGradientOptions {
    /// Period of the restart. `None` disables restarting (plain variant),
    /// `Some(n)` forces `beta = 0` at iterations `n, 2n, 3n, ...` (partial
    /// variant). Default: `None`.
    restart: Option<usize>,
}

impl ConjugateGradientOptions {
    /// Returns `true` if `beta` is forced to zero after iteration `iter`.
    pub fn restart_due(&self, iter: usize) -> bool {
        matches!(self.restart, Some(period) if period > 0 && iter % period == 0)
    }
}

/// Nonlinear conjugate gradient optimizer. See [module](self) documentation
/// for more details.
#[derive(Debug, Clone)]
pub struct ConjugateGradient<R> {
    rule: R,
    options: ConjugateGradientOptions,
}

impl<R: Default> ConjugateGradient<R> {
    /// Initializes the plain variant (no restart).
    pub fn new<F: Function>(f: &F, config: &Config<F::Field>) -> Self {
        Self::with_options(f, config, R::default(), ConjugateGradientOptions::default())
    }

    /// Initializes the partial variant which restarts with the period given
    /// in the configuration.
    pub fn partial<F: Function>(f: &F, config: &Config<F::Field>) -> Self {
        let mut options = ConjugateGradientOptions::default();
        options.set_restart(Some(config.restart_period()));
        Self::with_options(f, config, R::default(), options)
    }
}

impl<R> ConjugateGradient<R> {
    /// Initializes the optimizer with given rule and options.
    pub fn with_options<F: Function>(
        _f: &F,
        _config: &Config<F::Field>,
        rule: R,
        options: ConjugateGradientOptions,
    ) -> Self {
        Self { rule, options }
    }

    /// Returns the options of the optimizer.
    pub fn options(&self) -> &ConjugateGradientOptions {
        &self.options
    }
}

impl<F, R> Optimizer<F> for ConjugateGradient<R>
where
    F: Function,
    R: DirectionRule<F::Field>,
{
    fn name(&self) -> String {
        if self.options.restart.is_some() {
            format!("partial {} conjugate gradient method", R::NAME)
        } else {
            format!("{} conjugate gradient method", R::NAME)
        }
    }

    fn next_direction(
        &mut self,
        iter: usize,
        old_grad: &Gradient<F::Field>,
        new_grad: &Gradient<F::Field>,
        old_dir: &Direction<F::Field>,
    ) -> Result<Update<F::Field>, ProblemError> {
        let beta = match self.rule.beta(old_grad, new_grad) {
            Some(beta) => beta,
            None => {
                debug!("{}: previous gradient is zero", R::NAME);
                return Ok(Update::Stationary);
            }
        };

        let beta = if self.options.restart_due(iter) {
            debug!("{}: restart at iteration {}", R::NAME, iter);
            zero()
        } else {
            beta
        };

        if !beta.is_finite() {
            debug!("{}: invalid beta = {}", R::NAME, beta);
            return Err(ProblemError::InvalidValue);
        }

        debug!("{}: beta = {}", R::NAME, beta);

        Ok(Update::Direction(old_dir * beta - new_grad))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::Point;
    use crate::rosenbrock::Rosenbrock;
    use crate::testing::*;

    use approx::assert_abs_diff_eq;

    fn beta<R: DirectionRule<f64>>(rule: R, old: (f64, f64), new: (f64, f64)) -> Option<f64> {
        rule.beta(&Gradient::new(old.0, old.1), &Gradient::new(new.0, new.1))
    }

    #[test]
    fn orthogonal_unit_gradients() {
        assert_eq!(beta(FletcherReeves, (1.0, 0.0), (0.0, 1.0)), Some(1.0));
        assert_eq!(beta(PolakRibiere, (1.0, 0.0), (0.0, 1.0)), Some(1.0));
    }

    #[test]
    fn rules_differ() {
        // |(1, 2)|^2 / |(3, 4)|^2
        assert_abs_diff_eq!(
            beta(FletcherReeves, (3.0, 4.0), (1.0, 2.0)).unwrap(),
            5.0 / 25.0
        );
        // ((1 - 3) * 1 + (2 - 4) * 2) / 25
        assert_abs_diff_eq!(
            beta(PolakRibiere, (3.0, 4.0), (1.0, 2.0)).unwrap(),
            -6.0 / 25.0
        );
    }

    #[test]
    fn zero_old_gradient() {
        assert_eq!(beta(FletcherReeves, (0.0, 0.0), (1.0, 1.0)), None);
        assert_eq!(beta(PolakRibiere, (0.0, 0.0), (1.0, 1.0)), None);

        let f = Sphere::new();
        let mut optimizer = ConjugateGradient::<FletcherReeves>::new(&f, &Config::default());
        let update = Optimizer::<Sphere>::next_direction(
            &mut optimizer,
            1,
            &Gradient::zeros(),
            &Gradient::new(1.0, 1.0),
            &Direction::new(1.0, 1.0),
        )
        .unwrap();

        assert_eq!(update, Update::Stationary);
    }

    #[test]
    fn restart_schedule() {
        let mut options = ConjugateGradientOptions::default();
        assert!((1..=100).all(|iter| !options.restart_due(iter)));

        options.set_restart(Some(10));
        let due = (1..=35)
            .filter(|&iter| options.restart_due(iter))
            .collect::<Vec<_>>();
        assert_eq!(due, vec![10, 20, 30]);

        options.set_restart(Some(0));
        assert!(!options.restart_due(10));
    }

    #[test]
    fn restart_forces_steepest_step() {
        let f = Sphere::new();
        let mut optimizer = ConjugateGradient::<FletcherReeves>::partial(&f, &Config::default());

        let old_grad = Gradient::new(1.0, 0.0);
        let new_grad = Gradient::new(0.0, 1.0);
        let old_dir = Direction::new(1.0, 1.0);

        for iter in [9, 11, 19] {
            let update = Optimizer::<Sphere>::next_direction(
                &mut optimizer,
                iter,
                &old_grad,
                &new_grad,
                &old_dir,
            )
            .unwrap();
            assert_eq!(update, Update::Direction(Direction::new(1.0, 0.0)));
        }

        for iter in [10, 20, 30] {
            let update = Optimizer::<Sphere>::next_direction(
                &mut optimizer,
                iter,
                &old_grad,
                &new_grad,
                &old_dir,
            )
            .unwrap();
            assert_eq!(update, Update::Direction(Direction::new(0.0, -1.0)));
        }
    }

    #[test]
    fn overflowing_beta() {
        let f = Sphere::new();
        let mut optimizer = ConjugateGradient::<FletcherReeves>::new(&f, &Config::default());

        let result = Optimizer::<Sphere>::next_direction(
            &mut optimizer,
            1,
            &Gradient::new(1e-150, 0.0),
            &Gradient::new(1e200, 0.0),
            &Direction::new(1.0, 0.0),
        );
        assert_eq!(result, Err(ProblemError::InvalidValue));
    }

    #[test]
    fn names() {
        let f = Sphere::new();
        let config = Config::default();

        let plain = ConjugateGradient::<FletcherReeves>::new(&f, &config);
        let partial = ConjugateGradient::<PolakRibiere>::partial(&f, &config);

        assert_eq!(
            Optimizer::<Sphere>::name(&plain),
            "Fletcher-Reeves conjugate gradient method"
        );
        assert_eq!(
            Optimizer::<Sphere>::name(&partial),
            "partial Polak-Ribiere conjugate gradient method"
        );
    }

    #[test]
    fn sphere() {
        let f = Sphere::new();
        let config = Config::default();

        for x in f.initials() {
            let optimizer = ConjugateGradient::<PolakRibiere>::new(&f, &config);
            let report = optimize(&f, &config, x, optimizer).unwrap();
            assert!(f.is_optimum(&report.point(), 1e-6));
        }
    }

    #[test]
    fn rosenbrock_all_variants() {
        let f = Rosenbrock::<f64>::default();
        let config = Config::default();
        let x0 = Point::new(-1.5, -1.0);

        let reports = [
            optimize(&f, &config, x0, ConjugateGradient::<FletcherReeves>::new(&f, &config)),
            optimize(&f, &config, x0, ConjugateGradient::<FletcherReeves>::partial(&f, &config)),
            optimize(&f, &config, x0, ConjugateGradient::<PolakRibiere>::new(&f, &config)),
            optimize(&f, &config, x0, ConjugateGradient::<PolakRibiere>::partial(&f, &config)),
        ];

        for report in reports {
            let report = report.unwrap();
            assert!(report.converged());
            assert!(report.iters() < config.max_iters());
            assert!(f.is_optimum(&report.point(), 1e-6));
        }
    }
}
