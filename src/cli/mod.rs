//! CLI command handling
//!
//! Dispatches CLI commands: resolves the base directory, loads the optional
//! configuration, builds the invocation plan, and runs it.

use colored::Colorize;

use crate::commands::Commands;
use crate::common::config::Config;
use crate::common::{paths, Result};
use crate::plan::{self, Platform};
use crate::runner::{self, ProcessRunner};

/// Dispatch a CLI command
pub async fn dispatch(command: Commands) -> Result<()> {
    let base = paths::base_dir()?;
    println!("Working directory is {}", base.display());

    let config = Config::load(&base)?;
    let runner = ProcessRunner::new(&config.tool, &base)?;

    let plan = match command {
        Commands::Smoke => {
            println!("\n{}", "Smoke build:".cyan());
            plan::smoke_plan(&config)
        }
        Commands::Test => {
            let platform = Platform::current();
            tracing::debug!(?platform, "selecting framework coverage");
            println!("\n{}", "Test suites:".cyan());
            plan::test_plan(platform, &config)
        }
    };

    runner::execute(&runner, &plan).await
}
