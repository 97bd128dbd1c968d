//! # Check Command
//!
//! Loads and validates a manifest without generating anything.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{info::CommandInfo, manifest};

/// Validates the manifest and reports a short summary.
pub fn execute(manifest_path: &Path) -> Result<()> {
    let root = manifest::load(manifest_path)?;

    let (commands, hidden) = count_commands(&root);
    eprintln!(
        "{} {} is valid: {commands} commands ({hidden} hidden)",
        "✓".green(),
        manifest_path.display()
    );

    Ok(())
}

/// Counts all command nodes and how many of them are hidden.
fn count_commands(command: &CommandInfo) -> (usize, usize) {
    let mut commands = 1;
    let mut hidden = usize::from(!command.should_display);
    for sub in &command.subcommands {
        let (c, h) = count_commands(sub);
        commands += c;
        hidden += h;
    }
    (commands, hidden)
}
