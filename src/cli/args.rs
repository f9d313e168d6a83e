//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Scan the source tree and write the message catalog
//! - `init`: Initialize potgen configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(args)) => args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    /// Source tree root (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Catalog output path, relative to the root (overrides config file)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Remap table source file, relative to the root (overrides config file)
    #[arg(long)]
    pub remap_file: Option<PathBuf>,

    /// Append line numbers to message locations
    #[arg(long, alias = "with-line-nb")]
    pub line_numbers: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translatable messages into the catalog template
    Extract(ExtractArgs),
    /// Initialize a new .potgenrc.json configuration file
    Init,
}
