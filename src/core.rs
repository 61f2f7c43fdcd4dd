//! Core abstractions and types for gradopt.
//!
//! *Users* are mainly interested in implementing the [`Function`] trait for
//! their objective and tuning the [`Config`].
//!
//! Algorithm *developers* are interested in implementing the [`Optimizer`] or
//! [`DirectionRule`] traits and using the extension trait [`FunctionExt`].

mod base;
mod config;
mod convergence;
mod function;
mod optimizer;
mod rule;

pub use base::*;
pub use config::*;
pub use convergence::*;
pub use function::*;
pub use optimizer::*;
pub use rule::*;
