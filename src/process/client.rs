//! Command runner configuration

use std::path::PathBuf;

/// Configuration for the subprocess runner
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Directory commands run in
    ///
    /// If not provided, commands inherit the current directory.
    pub working_dir: Option<PathBuf>,

    /// Pass the current process environment to commands
    pub inherit_env: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            working_dir: None,
            inherit_env: true,
        }
    }
}

impl RunnerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_inherit_env(mut self, inherit_env: bool) -> Self {
        self.inherit_env = inherit_env;
        self
    }
}
