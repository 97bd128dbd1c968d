//! # tabgen CLI
//!
//! Command-line interface for the tabgen completion-script generator.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

use tabgen::commands::{self, GenerateArgs};
use tabgen::Shell;

const GLOBAL_HELP: &str = "\
Manifest Format (TOML):
  name = \"tool\"                  Command name (the token users type)
  about = \"...\"                  One-line description
  [[arguments]]                  Options, flags, and positionals
  [[subcommands]]                Nested commands, same fields as the root

Argument Fields:
  kind          positional | option | flag
  names         [{ kind = \"long\", name = \"config\" }, ...]
  completion    { type = \"none\" | \"file\" | \"directory\" | \"list\"
                  | \"shell-command\" | \"custom\", ... }

Getting Started:
  tabgen check tool.toml                    Validate a manifest
  tabgen generate --shell bash tool.toml    Print a bash script
  tabgen install --shell fish tool.toml     Install fish completions

Learn more:
  tabgen <COMMAND> --help                   Show detailed help for a command";

#[derive(Parser)]
#[command(name = "tabgen")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Generate bash and fish completion scripts from a command manifest")]
#[command(
    long_about = "tabgen turns a static TOML description of a command-line tool — its name, \
arguments, and nested subcommands — into shell completion scripts.

Bash gets an imperative script with one dispatch function per command; fish gets a \
declarative list of guarded completion rules. Both support file, directory, fixed-list, \
shell-command, and custom (callback-based) value completion."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a completion script
    #[command(
        long_about = "Generate a completion script for one shell.\n\n\
Reads the manifest, validates it, and prints a complete, directly-sourceable \
script to stdout (or writes it to --output).",
        after_help = "Examples:\n  \
tabgen generate --shell bash tool.toml > tool.bash\n  \
tabgen generate --shell fish tool.toml -o tool.fish"
    )]
    Generate {
        /// Target shell
        #[arg(short, long, value_enum)]
        shell: Shell,

        /// Path to the command manifest
        manifest: PathBuf,

        /// Write the script to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Install a completion script into the shell's user completion directory
    #[command(
        long_about = "Generate a completion script and install it where the shell \
auto-loads completions from:\n  \
bash    ~/.local/share/bash-completion/completions/<tool>\n  \
fish    ~/.config/fish/completions/<tool>.fish",
        after_help = "Examples:\n  \
tabgen install --shell bash tool.toml\n  \
tabgen install --shell fish tool.toml"
    )]
    Install {
        /// Target shell
        #[arg(short, long, value_enum)]
        shell: Shell,

        /// Path to the command manifest
        manifest: PathBuf,
    },

    /// Validate a manifest without generating anything
    #[command(
        long_about = "Load and validate a manifest: TOML syntax, unique sibling command \
names and aliases, and collision-free completion function names.",
        after_help = "Examples:\n  \
tabgen check tool.toml"
    )]
    Check {
        /// Path to the command manifest
        manifest: PathBuf,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            shell,
            manifest,
            output,
        } => commands::generate(&GenerateArgs {
            shell,
            manifest,
            output,
        }),

        Commands::Install { shell, manifest } => commands::install(shell, &manifest),

        Commands::Check { manifest } => commands::check(&manifest),
    }
}
