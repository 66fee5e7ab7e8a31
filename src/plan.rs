//! Invocation planning
//!
//! Each subcommand's work is computed up front as an ordered list of dotnet
//! invocations, consumed by the sequential loop in [`crate::runner`]. The
//! framework coverage difference between platforms is data (the
//! `windows_only` flag on the table below), not a separate code path.

use std::fmt;

use crate::common::config::Config;

/// Build target invoked by the smoke build
const SMOKE_TARGET: &str = "SmokeTest";

/// Runtime frameworks targeted by the solution, in the order they are tested
///
/// net48 has no test host off Windows; there it is skipped and the remaining
/// frameworks run one invocation each.
const FRAMEWORKS: &[Framework] = &[
    Framework {
        label: "net48",
        windows_only: true,
    },
    Framework {
        label: "netcoreapp3.1",
        windows_only: false,
    },
    Framework {
        label: "net5.0",
        windows_only: false,
    },
    Framework {
        label: "net6.0",
        windows_only: false,
    },
];

/// A runtime framework the solution targets
#[derive(Debug, Clone, Copy)]
struct Framework {
    label: &'static str,
    windows_only: bool,
}

/// Host operating-system family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    /// Platform this binary was compiled for
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// A single external tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Short name used in progress output
    pub label: String,

    /// Arguments passed to the tool
    pub args: Vec<String>,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.args.join(" "))
    }
}

/// Plan for `vstest-ci smoke`: one msbuild invocation of the smoke target
pub fn smoke_plan(config: &Config) -> Vec<Invocation> {
    vec![Invocation {
        label: "smoke build".to_string(),
        args: vec![
            "msbuild".to_string(),
            config.solution.clone(),
            format!("/t:{SMOKE_TARGET}"),
            format!("/p:Configuration={}", config.configuration),
        ],
    }]
}

/// Plan for `vstest-ci test`
///
/// On Windows a single invocation covers every framework the solution
/// targets. Elsewhere each framework with a test host runs as its own
/// invocation, in table order.
pub fn test_plan(platform: Platform, config: &Config) -> Vec<Invocation> {
    let base_args = vec![
        "test".to_string(),
        config.solution.clone(),
        "--no-build".to_string(),
        format!("--configuration={}", config.configuration),
    ];

    match platform {
        Platform::Windows => vec![Invocation {
            label: "tests".to_string(),
            args: base_args,
        }],
        Platform::Unix => FRAMEWORKS
            .iter()
            .filter(|fw| !fw.windows_only)
            .map(|fw| {
                let mut args = base_args.clone();
                args.push(format!("--framework={}", fw.label));
                Invocation {
                    label: format!("tests [{}]", fw.label),
                    args,
                }
            })
            .collect(),
    }
}
