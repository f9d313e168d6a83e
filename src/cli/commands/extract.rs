use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, ExtractSummary};
use crate::cli::{args::ExtractArgs, exit_status::ExitStatus};
use crate::config::{Config, load_config};
use crate::core::pipeline::{ExtractOptions, run_pipeline};

/// Apply command-line overrides on top of the loaded config.
fn apply_overrides(mut config: Config, args: &ExtractArgs) -> Result<Config> {
    if let Some(output) = &args.output {
        config.output = output.to_string_lossy().into_owned();
    }
    if let Some(remap_file) = &args.remap_file {
        config.remap_file = remap_file.to_string_lossy().into_owned();
    }
    if args.line_numbers {
        config.line_numbers = true;
    }
    config.validate()?;
    Ok(config)
}

fn resolve_root(args: &ExtractArgs) -> Result<PathBuf> {
    match &args.root {
        Some(root) => Ok(root.clone()),
        None => env::current_dir().context("Failed to get current directory"),
    }
}

pub fn extract(args: ExtractArgs) -> Result<CommandResult> {
    let root = resolve_root(&args)?;
    let loaded = load_config(&root)?;
    let config = apply_overrides(loaded.config, &args)?;

    if args.verbose && config.line_numbers {
        eprintln!("Enabling line numbers in the context locations.");
    }

    let options = ExtractOptions {
        root,
        config,
        verbose: args.verbose,
    };
    let output = run_pipeline(&options)?;
    let generated = output.generated;

    Ok(CommandResult {
        summary: CommandSummary::Extract(ExtractSummary {
            output_path: output.output_path,
            files_scanned: generated.files_scanned,
            files_skipped: generated.files_skipped,
            message_count: generated.message_count,
            location_count: generated.location_count,
            comments_merged: generated.comments_merged,
            diagnostic_count: generated.diagnostic_count,
            remap_count: generated.remap_count,
            diff: output.diff,
            changed: output.changed,
            config_path: loaded.path,
        }),
        exit_status: ExitStatus::Success,
    })
}
