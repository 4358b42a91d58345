//! CLI module for plconv

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::playlist::PlsNumbering;

pub mod commands;

#[derive(Parser, Debug)]
#[command(name = "plconv", about = "Convert playlists between extended M3U and PLS")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub convert: ConvertArgs,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Options for converting a single playlist
#[derive(clap::Args, Debug, Default)]
pub struct ConvertArgs {
    /// Playlist to convert (must end in .m3u or .pls)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Write to this path instead of swapping the input's suffix
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Convert and print without writing the output file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Do not print the converted playlist
    #[arg(short, long)]
    pub quiet: bool,

    /// Numbering of File/Title/Length keys in PLS output
    #[arg(long, value_enum, env = "PLCONV_NUMBERING")]
    pub numbering: Option<PlsNumbering>,

    /// Treat 0-second durations as valid instead of unset
    #[arg(long)]
    pub keep_zero_length: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
