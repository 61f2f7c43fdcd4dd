#![allow(clippy::many_single_char_names)]
#![warn(missing_docs)]

//! # Gradopt
//!
//! Steepest descent and nonlinear conjugate gradient methods with
//! backtracking line search, written in pure Rust for two-dimensional
//! problems.
//!
//! The library runs and compares classic gradient-based methods for
//! unconstrained minimization on the [Rosenbrock
//! function](https://en.wikipedia.org/wiki/Rosenbrock_function). All methods
//! share the same iteration loop, line search and stopping policy, and differ
//! only in how the next descent direction is computed.
//!
//! ## Algorithms
//!
//! * [Steepest descent](algo::steepest_descent) -- Always moves along the
//!   negated gradient.
//! * [Conjugate gradient](algo::conjugate_gradient) -- Blends the negated
//!   gradient with the previous direction, using either
//!   [Fletcher-Reeves](algo::FletcherReeves) or
//!   [Polak-Ribière](algo::PolakRibiere) rule, optionally with a periodic
//!   restart.
//!
//! The step length is chosen by a [backtracking line
//! search](algo::line_search) enforcing the Armijo sufficient decrease
//! condition.
//!
//! ## Problem
//!
//! Mathematically, the problem is formulated as
//!
//! ```text
//! min f(x, y)
//! ```
//!
//! for a differentiable function *f* with known partial derivatives. When it
//! comes to code, the problem is any type that implements the [`Function`]
//! and [`Problem`] traits.
//!
//! ```rust
//! use gradopt::{Function, Point, Problem};
//!
//! struct Himmelblau;
//!
//! impl Problem for Himmelblau {
//!     type Field = f64;
//! }
//!
//! impl Function for Himmelblau {
//!     fn value(&self, p: &Point<f64>) -> f64 {
//!         (p.x * p.x + p.y - 11.0).powi(2) + (p.x + p.y * p.y - 7.0).powi(2)
//!     }
//!
//!     fn partial_x(&self, p: &Point<f64>) -> f64 {
//!         4.0 * p.x * (p.x * p.x + p.y - 11.0) + 2.0 * (p.x + p.y * p.y - 7.0)
//!     }
//!
//!     fn partial_y(&self, p: &Point<f64>) -> f64 {
//!         2.0 * (p.x * p.x + p.y - 11.0) + 4.0 * p.y * (p.x + p.y * p.y - 7.0)
//!     }
//! }
//! ```
//!
//! ## Optimizing
//!
//! When you have your function available, you can use the
//! [`OptimizerDriver`] to run the iteration process until the squared norm of
//! the gradient drops below the tolerance or the iteration cap is hit.
//!
//! ```rust
//! use gradopt::algo::{ConjugateGradient, FletcherReeves};
//! use gradopt::{OptimizerDriver, Rosenbrock};
//!
//! let f = Rosenbrock::default();
//! let mut optimizer = OptimizerDriver::builder(&f)
//!     .with_algo(ConjugateGradient::<FletcherReeves>::partial)
//!     .build();
//!
//! let report = optimizer.run().expect("optimizer encountered an error");
//!
//! if report.converged() {
//!     println!("{}", report);
//! } else {
//!     println!("maximum number of iteration exceeded");
//! }
//! ```
//!
//! To run all methods side by side, use [`comparison::compare`].
//!
//! ## License
//!
//! Licensed under MIT.

pub mod algo;
pub mod comparison;
mod core;
pub mod driver;
pub mod report;
pub mod rosenbrock;

pub use core::*;
pub use driver::{DriverError, OptimizerDriver};
pub use report::Report;
pub use rosenbrock::Rosenbrock;

#[cfg(feature = "testing")]
pub mod testing;

#[cfg(not(feature = "testing"))]
pub(crate) mod testing;

pub use nalgebra;
