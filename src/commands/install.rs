//! # Install Command
//!
//! Generates a completion script and writes it into the shell's user
//! completion directory, creating directories as needed.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::{
    completions::Shell,
    constants::{BASH_COMPLETIONS_DIR, FISH_COMPLETIONS_DIR},
    manifest,
};

/// Loads the manifest, generates the script for `shell`, and installs it
/// under the user's home directory.
pub fn execute(shell: Shell, manifest_path: &Path) -> Result<()> {
    let root = manifest::load(manifest_path)?;
    let script = shell.script(&root);

    let install_path = completion_path(shell, &root.name)
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

    if let Some(parent) = install_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(&install_path, script).with_context(|| {
        format!(
            "Failed to write completions file: {}",
            install_path.display()
        )
    })?;

    eprintln!(
        "{} Installed {shell} completions: {}",
        "✓".green(),
        install_path.display()
    );
    print_activation_instructions(shell, &install_path);

    Ok(())
}

/// Returns the per-shell install path for a tool's completions.
fn completion_path(shell: Shell, tool: &str) -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    let dir = match shell {
        Shell::Bash => BASH_COMPLETIONS_DIR,
        Shell::Fish => FISH_COMPLETIONS_DIR,
    };
    Some(home.join(dir).join(shell.completion_file_name(tool)))
}

/// Prints instructions for activating the installed completions.
fn print_activation_instructions(shell: Shell, install_path: &Path) {
    match shell {
        Shell::Bash => {
            // bash-completion usually auto-loads from this directory
            eprintln!(
                "\n  {} Completions installed. If not auto-loaded, add to ~/.bashrc:",
                "→".cyan(),
            );
            eprintln!(
                "    {}",
                format!("source {}", install_path.display()).dimmed()
            );
        }
        Shell::Fish => {
            eprintln!(
                "\n  {} Completions will be loaded automatically on next shell start.",
                "→".cyan(),
            );
        }
    }
}
