//! Side-by-side comparison of all implemented methods.
//!
//! Every [`Method`] is run independently from the same starting point on the
//! same function. No state is shared between the runs.

use std::fmt;

use log::debug;

use crate::{
    algo::{ConjugateGradient, FletcherReeves, PolakRibiere},
    core::{Config, DirectionRule, Function},
    driver::{DriverError, OptimizerDriver},
    report::Report,
};

/// Method variant taking part in the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Steepest descent.
    SteepestDescent,
    /// Conjugate gradient with Fletcher-Reeves rule.
    FletcherReeves,
    /// Conjugate gradient with Fletcher-Reeves rule and periodic restart.
    PartialFletcherReeves,
    /// Conjugate gradient with Polak-Ribière rule.
    PolakRibiere,
    /// Conjugate gradient with Polak-Ribière rule and periodic restart.
    PartialPolakRibiere,
}

impl Method {
    /// All methods in the order in which they are compared.
    pub const ALL: [Method; 5] = [
        Method::SteepestDescent,
        Method::FletcherReeves,
        Method::PartialFletcherReeves,
        Method::PolakRibiere,
        Method::PartialPolakRibiere,
    ];

    /// Returns the name of the conjugate gradient rule, or `None` for steepest
    /// descent.
    pub fn rule(&self) -> Option<&'static str> {
        match self {
            Method::SteepestDescent => None,
            Method::FletcherReeves | Method::PartialFletcherReeves => {
                Some(<FletcherReeves as DirectionRule<f64>>::NAME)
            }
            Method::PolakRibiere | Method::PartialPolakRibiere => {
                Some(<PolakRibiere as DirectionRule<f64>>::NAME)
            }
        }
    }

    /// Runs the method to termination.
    pub fn run<F: Function>(
        &self,
        f: &F,
        config: &Config<F::Field>,
    ) -> Result<Report<F::Field>, DriverError> {
        let builder = OptimizerDriver::builder(f).with_config(config.clone());

        match self {
            Method::SteepestDescent => builder.build().run(),
            Method::FletcherReeves => builder
                .with_algo(ConjugateGradient::<FletcherReeves>::new)
                .build()
                .run(),
            Method::PartialFletcherReeves => builder
                .with_algo(ConjugateGradient::<FletcherReeves>::partial)
                .build()
                .run(),
            Method::PolakRibiere => builder
                .with_algo(ConjugateGradient::<PolakRibiere>::new)
                .build()
                .run(),
            Method::PartialPolakRibiere => builder
                .with_algo(ConjugateGradient::<PolakRibiere>::partial)
                .build()
                .run(),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::SteepestDescent => write!(f, "steepest descent"),
            Method::FletcherReeves | Method::PolakRibiere => {
                write!(f, "{} conjugate gradient", self.rule().unwrap_or_default())
            }
            Method::PartialFletcherReeves | Method::PartialPolakRibiere => {
                write!(
                    f,
                    "partial {} conjugate gradient",
                    self.rule().unwrap_or_default()
                )
            }
        }
    }
}

/// Runs all [methods](Method::ALL) in fixed order and collects their results.
pub fn compare<F: Function>(
    f: &F,
    config: &Config<F::Field>,
) -> Vec<(Method, Result<Report<F::Field>, DriverError>)> {
    Method::ALL
        .iter()
        .map(|&method| {
            debug!("running {}", method);
            (method, method.run(f, config))
        })
        .collect()
}
