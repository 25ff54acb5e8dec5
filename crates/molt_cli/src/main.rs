//! # molt
//!
//! Command-line interface for the Molt codemod linter: check files for
//! outdated PatternFly API usage, or rewrite them in place.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "molt")]
#[command(about = "Codemod linter for PatternFly React major-version upgrades", long_about = None)]
#[command(version, disable_version_flag = true)]
struct Cli {
    /// Print version
    #[arg(short = 'v', short_alias = 'V', long, action = clap::ArgAction::Version)]
    version: (),
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report outdated API usage without modifying files (default command)
    Check(commands::check::CheckArgs),

    /// Apply fixes in place, reapplying until files converge
    Fix(commands::fix::FixArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Check(args)) => commands::check::run(args),
        Some(Commands::Fix(args)) => commands::fix::run(args),
        None => {
            // Default to check with default args
            commands::check::run(commands::check::CheckArgs::default());
        }
    }
}
