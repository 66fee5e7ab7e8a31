//! vstest-ci - CI automation for the VsTestRunner solution
//!
//! Replaces the repository's build/test helper scripts with one binary that
//! drives the dotnet CLI: a smoke build of the solution and the per-framework
//! test runs.

use clap::Parser;
use vstest_ci::commands::Commands;
use vstest_ci::{cli, common::logging};

#[derive(Parser)]
#[command(name = "vstest-ci", about = "Build and test the VsTestRunner solution")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    logging::init_cli();

    let cli = Cli::parse();

    if let Err(e) = cli::dispatch(cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
