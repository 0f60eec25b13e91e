// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Enumerate every ordering of characters, strings, or audio files", long_about = None)]
pub struct Args {
    /// Directory holding saved settings (defaults to the platform config dir)
    #[clap(long, global = true, env = "PERMUTATOR_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// More log output on stderr (-v debug, -vv trace); overrides RUST_LOG
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List registered strategies and the inputs they expect
    List,
    /// Count the distinct permutations a run would produce
    Count {
        /// Strategy whose tokenization to use
        #[clap(short, long, default_value = "String")]
        strategy: String,
        /// Raw inputs
        inputs: Vec<String>,
    },
    /// Stream permutations to stdout without writing files
    Print {
        /// Permute the characters of each input instead of the inputs themselves
        #[clap(long)]
        chars: bool,
        /// Raw inputs
        inputs: Vec<String>,
    },
    /// Run a strategy and write its artifacts to a destination directory
    Run(RunArgs),
    /// Inspect or change saved settings
    #[clap(subcommand)]
    Config(ConfigCommand),
}

#[derive(ClapArgs, Debug)]
pub struct RunArgs {
    /// Strategy name (see `list`)
    pub strategy: String,
    /// Output directory (defaults to the last one used)
    #[clap(short, long)]
    pub dest: Option<PathBuf>,
    /// Stop after this many permutations
    #[clap(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub limit: Option<u64>,
    #[clap(flatten)]
    pub merge: MergeToolArgs,
    /// Raw inputs (strings, or file paths for Audio)
    pub inputs: Vec<String>,
}

/// Overrides for the saved merge tool settings.
#[derive(ClapArgs, Debug, Default)]
pub struct MergeToolArgs {
    /// Merge tool program for the Audio strategy
    #[clap(long)]
    pub merge_tool: Option<String>,
    /// Argument passed to the merge tool before the output path (repeatable)
    #[clap(long = "merge-arg", allow_hyphen_values = true)]
    pub merge_args: Vec<String>,
    /// Extension of merged artifacts
    #[clap(long)]
    pub extension: Option<String>,
    /// Suffix the merge tool appends to output file stems
    #[clap(long, conflicts_with = "no_output_suffix")]
    pub output_suffix: Option<String>,
    /// The merge tool writes exactly the requested output path
    #[clap(long)]
    pub no_output_suffix: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the saved settings as JSON
    Show,
    /// Save merge tool settings used by the Audio strategy
    SetMergeTool(MergeToolArgs),
}
