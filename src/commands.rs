//! CLI command definitions
//!
//! Defines the clap commands for the CI wrapper.

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Build the solution's smoke-test target in Release configuration
    Smoke,

    /// Run the already-built test suites for every framework this host supports
    Test,
}
