//! # Generate Command
//!
//! Generates a completion script for one shell and writes it to stdout or
//! a file.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};

use crate::{completions::Shell, manifest};

/// Arguments for the generate command
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    /// Target shell
    pub shell: Shell,

    /// Path to the command manifest
    pub manifest: PathBuf,

    /// Destination file; stdout when absent
    pub output: Option<PathBuf>,
}

/// Loads the manifest and emits the completion script.
pub fn execute(args: &GenerateArgs) -> Result<()> {
    let root = manifest::load(&args.manifest)?;
    let script = args.shell.script(&root);

    match &args.output {
        Some(path) => fs::write(path, script)
            .with_context(|| format!("Failed to write script: {}", path.display()))?,
        None => {
            io::stdout().write_all(script.as_bytes())?;
            io::stdout().flush()?;
        }
    }

    Ok(())
}
