//! Runs all methods on the Rosenbrock function from the same starting point
//! and prints one line per run.
//!
//! Set `RUST_LOG=debug` to trace the individual iterations.

use std::process::ExitCode;

use gradopt::comparison::compare;
use gradopt::{Config, Rosenbrock};
use log::error;

fn main() -> ExitCode {
    env_logger::init();

    let f = Rosenbrock::default();
    let config = Config::default();

    let mut group = None;
    let mut failed = false;

    for (method, result) in compare(&f, &config) {
        if method.rule() != group {
            group = method.rule();

            if let Some(rule) = group {
                println!("\n{} method:", rule);
            }
        }

        match result {
            Ok(report) => println!("{}", report),
            Err(err) => {
                error!("{} failed: {}", method, err);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
