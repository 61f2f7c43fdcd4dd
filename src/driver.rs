//! High-level API for running an optimization method to termination.
//!
//! The driver encapsulates the iteration state (point, gradient, direction
//! and iteration counter) and provides a simple API to run the
//! iterate-evaluate-step loop. In each iteration it asks the
//! [line search](crate::algo::line_search) for a step length, moves the point,
//! recomputes the gradient and asks the [`Optimizer`] for the next direction.
//!
//! The simplest way of using the driver is to initialize it with the defaults
//! (steepest descent, [default configuration](Config)):
//!
//! ```rust
//! use gradopt::{OptimizerDriver, Rosenbrock};
//!
//! let f = Rosenbrock::default();
//!
//! let mut optimizer = OptimizerDriver::new(&f);
//! ```
//!
//! If you need to specify additional settings, use the builder. Note that the
//! algorithm factory receives the configuration, so the configuration should
//! be set first:
//!
//! ```rust
//! use gradopt::algo::{ConjugateGradient, PolakRibiere};
//! use gradopt::{Config, OptimizerDriver, Point, Rosenbrock};
//!
//! let f = Rosenbrock::default();
//!
//! let mut config = Config::default();
//! config.set_max_iters(500);
//!
//! let mut optimizer = OptimizerDriver::builder(&f)
//!     .with_config(config)
//!     .with_initial(Point::new(-1.2, 1.0))
//!     .with_algo(ConjugateGradient::<PolakRibiere>::partial)
//!     .build();
//! ```
//!
//! Once you have the driver, you can run it until convergence or the
//! iteration cap:
//!
//! ```rust
//! # use gradopt::{OptimizerDriver, Rosenbrock};
//! # let f = Rosenbrock::default();
//! # let mut optimizer = OptimizerDriver::new(&f);
//! let report = optimizer.run().expect("optimizer encountered an error");
//! println!("{}", report);
//! ```
//!
//! If you need more control over the iteration process, you can supply your
//! own stopping criterion or do the iterations manually:
//!
//! ```rust
//! # use gradopt::{OptimizerDriver, Rosenbrock};
//! # let f = Rosenbrock::default();
//! # let mut optimizer = OptimizerDriver::new(&f);
//! let state = optimizer
//!     .find(|state| state.norm_squared() <= 1e-6 || state.iter() >= 100)
//!     .expect("optimizer encountered an error");
//!
//! loop {
//!     let state = optimizer.next().expect("no optimizer error");
//!     // ...
//! #   break;
//! }
//! ```

use getset::CopyGetters;
use log::{debug, info, warn};
use nalgebra::RealField;
use thiserror::Error;

use crate::{
    algo::{line_search::LineSearchError, Backtracking, SteepestDescent},
    core::{
        Config, Convergence, Direction, Function, FunctionExt, Gradient, Optimizer, Point,
        ProblemError, Termination, Update,
    },
    report::Report,
};

/// Error returned from [`OptimizerDriver`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DriverError {
    /// The line search failed to find an acceptable step.
    #[error("line search failed: {0}")]
    LineSearch(#[from] LineSearchError),
    /// An invalid value occurred in the computation.
    #[error("{0}")]
    Problem(#[from] ProblemError),
}

/// Phase of the iterative process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The gradient was evaluated at the starting point and the direction is
    /// the negated gradient. No step was taken yet.
    Initialized,
    /// At least one step was taken.
    Iterating,
    /// The gradient norm dropped to the tolerance.
    Converged,
    /// The iteration cap was hit before convergence.
    MaxIterReached,
}

impl Status {
    /// Returns the termination reason for the terminal states.
    pub fn termination(&self) -> Option<Termination> {
        match self {
            Status::Converged => Some(Termination::Converged),
            Status::MaxIterReached => Some(Termination::MaxIterReached),
            Status::Initialized | Status::Iterating => None,
        }
    }
}

impl From<Termination> for Status {
    fn from(termination: Termination) -> Self {
        match termination {
            Termination::Converged => Status::Converged,
            Termination::MaxIterReached => Status::MaxIterReached,
        }
    }
}

/// State of the current iteration.
#[derive(Debug, Clone, Copy, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct IterState<T: RealField + Copy> {
    /// Current point.
    x: Point<T>,
    /// Gradient at the current point.
    grad: Gradient<T>,
    /// Direction of the next step.
    dir: Direction<T>,
    /// Number of steps taken.
    iter: usize,
}

impl<T: RealField + Copy> IterState<T> {
    /// Returns squared norm of the gradient.
    pub fn norm_squared(&self) -> T {
        self.grad.norm_squared()
    }
}

struct Builder<'a, F: Function, A> {
    f: &'a F,
    config: Config<F::Field>,
    algo: A,
    x0: Option<Point<F::Field>>,
}

impl<'a, F: Function> Builder<'a, F, SteepestDescent<F>> {
    fn new(f: &'a F) -> Self {
        let config = Config::default();
        let algo = SteepestDescent::new(f, &config);

        Self {
            f,
            config,
            algo,
            x0: None,
        }
    }
}

impl<'a, F: Function, A> Builder<'a, F, A> {
    fn with_config(mut self, config: Config<F::Field>) -> Self {
        self.config = config;
        self
    }

    fn with_initial(mut self, x0: Point<F::Field>) -> Self {
        self.x0 = Some(x0);
        self
    }

    fn with_algo<A2, FA>(self, factory: FA) -> Builder<'a, F, A2>
    where
        FA: FnOnce(&F, &Config<F::Field>) -> A2,
    {
        let algo = factory(self.f, &self.config);

        Builder {
            f: self.f,
            config: self.config,
            algo,
            x0: self.x0,
        }
    }
}

/// Builder for the [`OptimizerDriver`].
pub struct OptimizerBuilder<'a, F: Function, A>(Builder<'a, F, A>);

impl<'a, F: Function, A> OptimizerBuilder<'a, F, A> {
    /// Sets the configuration. The starting point is taken from the
    /// configuration unless set by [`with_initial`](Self::with_initial).
    pub fn with_config(self, config: Config<F::Field>) -> Self {
        Self(self.0.with_config(config))
    }

    /// Sets the initial point from which the iterative process starts.
    pub fn with_initial(self, x0: Point<F::Field>) -> Self {
        Self(self.0.with_initial(x0))
    }

    /// Sets specific algorithm to be used.
    ///
    /// This builder method accepts a closure that takes the reference to the
    /// function and the configuration. For the algorithms in gradopt, you can
    /// simply pass the constructor directly (e.g., `SteepestDescent::new` or
    /// `ConjugateGradient::<FletcherReeves>::partial`).
    pub fn with_algo<A2, FA>(self, factory: FA) -> OptimizerBuilder<'a, F, A2>
    where
        FA: FnOnce(&F, &Config<F::Field>) -> A2,
    {
        OptimizerBuilder(self.0.with_algo(factory))
    }

    /// Builds the [`OptimizerDriver`].
    pub fn build(self) -> OptimizerDriver<'a, F, A> {
        let Builder {
            f,
            config,
            algo,
            x0,
        } = self.0;

        let x = x0.unwrap_or_else(|| config.initial());
        let grad = f.gradient(&x);

        OptimizerDriver {
            f,
            line_search: Backtracking::from_config(&config),
            convergence: config.convergence(),
            algo,
            state: IterState {
                x,
                grad,
                dir: -grad,
                iter: 0,
            },
            status: Status::Initialized,
        }
    }
}

/// The driver for the process of minimizing a function.
///
/// For default settings, use [`OptimizerDriver::new`]. For more flexibility,
/// use [`OptimizerDriver::builder`]. For the usage of the driver, see
/// [module](self) documentation.
pub struct OptimizerDriver<'a, F: Function, A> {
    f: &'a F,
    line_search: Backtracking<F::Field>,
    convergence: Convergence<F::Field>,
    algo: A,
    state: IterState<F::Field>,
    status: Status,
}

impl<'a, F: Function> OptimizerDriver<'a, F, SteepestDescent<F>> {
    /// Returns the builder for specifying additional settings.
    pub fn builder(f: &'a F) -> OptimizerBuilder<'a, F, SteepestDescent<F>> {
        OptimizerBuilder(Builder::new(f))
    }

    /// Initializes the driver with the default settings.
    pub fn new(f: &'a F) -> Self {
        OptimizerDriver::builder(f).build()
    }
}

impl<'a, F: Function, A> OptimizerDriver<'a, F, A> {
    /// Returns the current point.
    pub fn x(&self) -> Point<F::Field> {
        self.state.x
    }

    /// Returns the gradient at the current point.
    pub fn grad(&self) -> Gradient<F::Field> {
        self.state.grad
    }

    /// Returns the direction of the next step.
    pub fn dir(&self) -> Direction<F::Field> {
        self.state.dir
    }

    /// Returns the number of steps taken.
    pub fn iter(&self) -> usize {
        self.state.iter
    }

    /// Returns the current state.
    pub fn state(&self) -> &IterState<F::Field> {
        &self.state
    }

    /// Returns the phase of the process.
    pub fn status(&self) -> Status {
        self.status
    }
}

impl<'a, F: Function, A: Optimizer<F>> OptimizerDriver<'a, F, A> {
    /// Does one iteration of the process, returning the new state in case of
    /// no error.
    ///
    /// The state is updated only when the whole step succeeds, so on error the
    /// point and the iteration counter still describe the last completed step.
    /// Once the process has terminated, the state is returned unchanged.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&IterState<F::Field>, DriverError> {
        if self.status.termination().is_some() {
            return Ok(&self.state);
        }

        if self.status == Status::Initialized {
            self.state.grad = self.f.checked_gradient(&self.state.x)?;
            self.state.dir = -self.state.grad;
            self.status = Status::Iterating;
        }

        let IterState { x, grad, dir, iter } = self.state;
        let iter = iter + 1;

        let alpha = self.line_search.search(self.f, &x, &grad, &dir)?;

        let x = x + dir * alpha;
        let new_grad = self.f.checked_gradient(&x)?;
        let update = self.algo.next_direction(iter, &grad, &new_grad, &dir)?;

        self.state.x = x;
        self.state.grad = new_grad;
        self.state.iter = iter;

        match update {
            Update::Direction(dir) => self.state.dir = dir,
            Update::Stationary => self.status = Status::Converged,
        }

        debug!(
            "iter = {}\talpha = {}\tx = {:?}\t|| grad ||^2 = {}",
            iter,
            alpha,
            x.as_slice(),
            new_grad.norm_squared()
        );

        Ok(&self.state)
    }

    /// Runs the iterative process until convergence or the iteration cap.
    pub fn run(&mut self) -> Result<Report<F::Field>, DriverError> {
        loop {
            if let Some(termination) = self.termination() {
                self.status = termination.into();
                return self.report(termination);
            }

            if let Err(error) = self.next() {
                warn!("{}: {} after {} completed iterations", self.name(), error, self.iter());
                return Err(error);
            }
        }
    }

    /// Runs the iterative process until given stopping criterion is satisfied.
    ///
    /// The criterion is evaluated before each iteration, including the very
    /// first one. The convergence check from the configuration is not
    /// consulted, but the process stops when the optimizer reports a
    /// stationary point.
    pub fn find<C>(&mut self, stop: C) -> Result<&IterState<F::Field>, DriverError>
    where
        C: Fn(&IterState<F::Field>) -> bool,
    {
        while !stop(&self.state) && self.status.termination().is_none() {
            self.next()?;
        }

        Ok(&self.state)
    }

    /// Returns the name of the used optimizer.
    pub fn name(&self) -> String {
        self.algo.name()
    }

    fn termination(&self) -> Option<Termination> {
        self.status
            .termination()
            .or_else(|| self.convergence.check(&self.state.grad, self.state.iter))
    }

    fn report(&self, termination: Termination) -> Result<Report<F::Field>, DriverError> {
        let value = self.f.checked_value(&self.state.x)?;

        info!(
            "{}: {} after {} iterations",
            self.name(),
            termination,
            self.state.iter
        );

        Ok(Report::new(
            self.name(),
            self.state.x,
            self.state.iter,
            value,
            termination,
        ))
    }
}
