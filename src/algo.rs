//! The collection of implemented algorithms.

pub mod conjugate_gradient;
pub mod line_search;
pub mod steepest_descent;

pub use conjugate_gradient::{ConjugateGradient, FletcherReeves, PolakRibiere};
pub use line_search::Backtracking;
pub use steepest_descent::SteepestDescent;
