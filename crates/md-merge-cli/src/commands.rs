use std::path::{Path, PathBuf};

use anyhow::Context;
use colored::Colorize;
use md_merge_core::{
    validate_input_directory, validate_input_files, InputSpec, MergeEngine, MergeError, MergeType,
    Scanner,
};
use tracing::{debug, info, warn};

use crate::cli::Cli;
use crate::exit::{self, ErrorCode};
use crate::settings::RunSettings;

/// What a successful run did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The output file was written.
    Merged {
        output: PathBuf,
        requested: usize,
        merged: usize,
    },
    /// Directory mode found no matching files; nothing was written.
    NothingToMerge,
}

/// Run and translate the result into an exit status.
pub fn execute(cli: Cli, settings: &RunSettings) -> ErrorCode {
    match run(cli, settings) {
        Ok(RunOutcome::Merged {
            output,
            requested,
            merged,
        }) => {
            debug!(output = %output.display(), requested, merged, "run finished");
            ErrorCode::Success
        }
        Ok(RunOutcome::NothingToMerge) => ErrorCode::Success,
        Err(err) => exit::report(&err),
    }
}

pub fn run(cli: Cli, settings: &RunSettings) -> anyhow::Result<RunOutcome> {
    let spec = InputSpec::new(cli.files, cli.directory)?;

    let inputs = match spec.merge_type()? {
        MergeType::Files => {
            info!("Mode: Explicit files");
            validate_input_files(spec.files())?;
            spec.files().to_vec()
        }
        MergeType::Directory => {
            info!("Mode: Directory");
            let directory = spec
                .directory()
                .ok_or_else(|| MergeError::Validation("no directory given".into()))?;
            validate_input_directory(directory)?;
            let scanner = Scanner::with_extension(&settings.extension);
            let found = scanner.scan(directory)?;
            if found.is_empty() {
                warn!(
                    "No '{}' files found in directory {}. Nothing to merge.",
                    scanner.suffix(),
                    directory.display()
                );
                return Ok(RunOutcome::NothingToMerge);
            }
            found
        }
    };

    let result =
        MergeEngine::default().merge_files(&inputs, &settings.output, Some(&settings.title))?;
    if !result.skipped.is_empty() {
        warn!(skipped = result.skipped.len(), "some input files were skipped");
    }

    info!("md-merge process completed successfully.");
    println!("{}", success_message(result.requested, &settings.output).green());
    Ok(RunOutcome::Merged {
        output: settings.output.clone(),
        requested: result.requested,
        merged: result.merged,
    })
}

/// The line printed after a merge. `count` is the number of files requested.
pub fn success_message(count: usize, output: &Path) -> String {
    format!("Successfully merged {count} file(s) into {}", output.display())
}

/// Resolve settings against the current directory.
pub fn settings_for(cli: &Cli) -> anyhow::Result<RunSettings> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    settings_in(cli, &cwd)
}

/// Resolve settings against an explicit base directory.
pub fn settings_in(cli: &Cli, base: &Path) -> anyhow::Result<RunSettings> {
    Ok(RunSettings::resolve(cli, base)?)
}
