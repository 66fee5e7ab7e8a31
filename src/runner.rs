//! Sequential invocation execution
//!
//! Drives an invocation plan through a [`CommandRunner`], one process at a
//! time. The tool's stdout/stderr pass through untouched; the first non-zero
//! exit aborts the rest of the plan.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use colored::Colorize;
use tokio::process::Command as TokioCommand;

use crate::common::{Error, Result};
use crate::plan::Invocation;

/// Capability to run one external invocation to completion
///
/// The real implementation spawns the dotnet CLI; tests substitute a
/// scripted runner.
#[async_trait]
pub trait CommandRunner {
    /// Run the invocation and return its exit code
    async fn run(&self, invocation: &Invocation) -> Result<i32>;

    /// Program name prefixed to rendered command lines
    fn program(&self) -> String;
}

/// Runs invocations through the real external tool
pub struct ProcessRunner {
    /// Tool name as configured, kept for display
    name: String,
    /// Resolved executable path
    tool: PathBuf,
    /// Working directory for every spawned process
    base_dir: PathBuf,
}

impl ProcessRunner {
    /// Resolve the tool on PATH and bind the working directory for spawns
    pub fn new(tool: &str, base_dir: &Path) -> Result<Self> {
        let resolved = which::which(tool).map_err(|_| Error::ToolNotFound {
            name: tool.to_string(),
        })?;
        tracing::debug!(tool = %resolved.display(), "resolved external tool");

        Ok(Self {
            name: tool.to_string(),
            tool: resolved,
            base_dir: base_dir.to_path_buf(),
        })
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, invocation: &Invocation) -> Result<i32> {
        let status = TokioCommand::new(&self.tool)
            .args(&invocation.args)
            .current_dir(&self.base_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| Error::Launch {
                command: format!("{} {}", self.name, invocation),
                source: e,
            })?;

        // Signal terminations carry no exit code; report them as 1
        Ok(status.code().unwrap_or(1))
    }

    fn program(&self) -> String {
        self.name.clone()
    }
}

/// Run a plan strictly sequentially, aborting at the first failure
///
/// Each invocation runs to completion before the next starts. A non-zero
/// exit becomes an [`Error::InvocationFailed`] naming the command line and
/// carrying the tool's exit code.
pub async fn execute<R: CommandRunner>(runner: &R, plan: &[Invocation]) -> Result<()> {
    for invocation in plan {
        let command = format!("{} {}", runner.program(), invocation);
        tracing::info!(%command, "running");
        println!("  $ {}", command.dimmed());

        let code = runner.run(invocation).await?;

        if code != 0 {
            println!("  {} {}", "✗".red(), invocation.label);
            return Err(Error::InvocationFailed { command, code });
        }

        println!("  {} {}", "✓".green(), invocation.label);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::common::config::Config;
    use crate::plan::{smoke_plan, test_plan, Platform};

    /// Scripted runner that records every invocation it is handed
    struct MockRunner {
        codes: Vec<i32>,
        seen: Mutex<Vec<Invocation>>,
    }

    impl MockRunner {
        fn new(codes: Vec<i32>) -> Self {
            Self {
                codes,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn seen(&self) -> Vec<Invocation> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CommandRunner for MockRunner {
        async fn run(&self, invocation: &Invocation) -> Result<i32> {
            let mut seen = self.seen.lock().unwrap();
            let code = self.codes[seen.len()];
            seen.push(invocation.clone());
            Ok(code)
        }

        fn program(&self) -> String {
            "dotnet".to_string()
        }
    }

    #[tokio::test]
    async fn all_zero_exits_is_success() {
        let plan = test_plan(Platform::Unix, &Config::default());
        let runner = MockRunner::new(vec![0, 0, 0]);

        execute(&runner, &plan).await.unwrap();

        assert_eq!(runner.seen().len(), 3);
    }

    #[tokio::test]
    async fn invocations_run_in_plan_order() {
        let plan = test_plan(Platform::Unix, &Config::default());
        let runner = MockRunner::new(vec![0, 0, 0]);

        execute(&runner, &plan).await.unwrap();

        assert_eq!(runner.seen(), plan);
    }

    #[tokio::test]
    async fn first_failure_aborts_remaining_invocations() {
        // If net5.0 fails, netcoreapp3.1 has already passed and net6.0 must
        // never be launched
        let plan = test_plan(Platform::Unix, &Config::default());
        let runner = MockRunner::new(vec![0, 1, 0]);

        let err = execute(&runner, &plan).await.unwrap_err();

        let seen = runner.seen();
        assert_eq!(seen.len(), 2);
        assert!(seen[1].args.contains(&"--framework=net5.0".to_string()));

        match err {
            Error::InvocationFailed { command, code } => {
                assert_eq!(code, 1);
                assert!(command.contains("--framework=net5.0"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn failure_preserves_tool_exit_code() {
        let plan = smoke_plan(&Config::default());
        let runner = MockRunner::new(vec![7]);

        let err = execute(&runner, &plan).await.unwrap_err();

        assert_eq!(err.exit_code(), 7);
    }

    #[tokio::test]
    async fn single_invocation_plan_issues_exactly_one_run() {
        let plan = test_plan(Platform::Windows, &Config::default());
        let runner = MockRunner::new(vec![0]);

        execute(&runner, &plan).await.unwrap();

        let seen = runner.seen();
        assert_eq!(seen.len(), 1);
        assert!(!seen[0].args.iter().any(|a| a.starts_with("--framework")));
    }
}
