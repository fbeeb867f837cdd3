use std::path::{Path, PathBuf};

use md_merge_core::{MergeConfig, Result};
use uuid::Uuid;

use crate::cli::Cli;

/// Everything a run needs, fixed before any file is touched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSettings {
    pub output: PathBuf,
    pub title: String,
    pub extension: String,
}

impl RunSettings {
    /// Flags override the config file, which overrides built-in defaults.
    /// The default output path is generated here, once.
    pub fn resolve(cli: &Cli, cwd: &Path) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => MergeConfig::from_toml_file(path)?,
            None => MergeConfig::default(),
        };
        let output = cli
            .output
            .clone()
            .or(config.output)
            .unwrap_or_else(|| default_output_path(cwd));
        Ok(Self {
            output,
            title: cli.title.clone().unwrap_or(config.title),
            extension: config.extension,
        })
    }
}

/// `<dir>/md-merge-<uuid>.md`
pub fn default_output_path(dir: &Path) -> PathBuf {
    dir.join(format!("md-merge-{}.md", Uuid::new_v4()))
}
