//! Configuration file handling
//!
//! An optional `vstest-ci.toml` next to the binary can override the tool
//! name, solution path, and build configuration. Every default matches what
//! the CI scripts hardcoded, so a missing file changes nothing.

use serde::Deserialize;
use std::path::Path;

use super::{Error, Result};

/// Name of the optional configuration file, looked up in the base directory
const CONFIG_FILE: &str = "vstest-ci.toml";

/// Main configuration structure
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Name or path of the dotnet CLI executable
    #[serde(default = "default_tool")]
    pub tool: String,

    /// Solution file passed to every invocation, relative to the base directory
    #[serde(default = "default_solution")]
    pub solution: String,

    /// Build configuration selector
    #[serde(default = "default_configuration")]
    pub configuration: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tool: default_tool(),
            solution: default_solution(),
            configuration: default_configuration(),
        }
    }
}

fn default_tool() -> String {
    "dotnet".to_string()
}

fn default_solution() -> String {
    "./VsTestRunner.sln".to_string()
}

fn default_configuration() -> String {
    "Release".to_string()
}

impl Config {
    /// Load configuration from `vstest-ci.toml` in the base directory
    ///
    /// Returns default configuration if the file doesn't exist
    pub fn load(base: &Path) -> Result<Self> {
        let path = base.join(CONFIG_FILE);
        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| Error::FileRead {
                path: path.display().to_string(),
                error: e.to_string(),
            })?;
            return toml::from_str(&content).map_err(|e| Error::ConfigParse(e.to_string()));
        }
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_scripts() {
        let config = Config::default();
        assert_eq!(config.tool, "dotnet");
        assert_eq!(config.solution, "./VsTestRunner.sln");
        assert_eq!(config.configuration, "Release");
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let config: Config = toml::from_str("tool = \"/opt/dotnet/dotnet\"").unwrap();
        assert_eq!(config.tool, "/opt/dotnet/dotnet");
        assert_eq!(config.solution, "./VsTestRunner.sln");
        assert_eq!(config.configuration, "Release");
    }

    #[test]
    fn missing_file_loads_defaults() {
        let config = Config::load(Path::new("/nonexistent-vstest-ci-base")).unwrap();
        assert_eq!(config.solution, "./VsTestRunner.sln");
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        assert!(toml::from_str::<Config>("tool = [1, 2]").is_err());
    }
}
