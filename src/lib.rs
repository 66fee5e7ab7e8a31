//! CI automation for the VsTestRunner solution
//!
//! Drives the dotnet CLI to build the solution's smoke-test target and to run
//! its test suites across the runtime frameworks supported on the host.

pub mod cli;
pub mod commands;
pub mod common;
pub mod plan;
pub mod runner;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use plan::{Invocation, Platform};
