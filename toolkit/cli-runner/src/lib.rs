//! Glue for driving command line clients from tests: argument rendering, process execution with
//! retries, output parsing, checksums and scratch files.

pub mod files;
pub mod hash;
pub mod output;
pub mod params;
pub mod runner;
pub mod wait;

pub use params::{ParamValue, Params};
pub use runner::{CommandError, CommandRunner, RetryPolicy, ShellRunner, run_with_retry};
pub use wait::{WaitTimeout, wait, wait_until};
