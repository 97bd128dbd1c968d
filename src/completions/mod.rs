//! # Completions
//!
//! The two completion-script generators. Both consume the same read-only
//! [`CommandInfo`](crate::info::CommandInfo) tree and return a complete
//! script as a string; they share no state and can run in either order.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod bash;
pub mod fish;

use std::fmt;

use clap::ValueEnum;

use crate::info::CommandInfo;

/// Supported target shells
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Shell {
    /// Imperative model: one dispatch function per command
    Bash,
    /// Declarative model: guarded `complete` rules
    Fish,
}

impl Shell {
    /// Generates the completion script for the given command tree.
    pub fn script(self, root: &CommandInfo) -> String {
        match self {
            Self::Bash => bash::completion_script(root),
            Self::Fish => fish::completion_script(root),
        }
    }

    /// File name under which the shell auto-loads a tool's completions.
    pub fn completion_file_name(self, tool: &str) -> String {
        match self {
            Self::Bash => tool.to_string(),
            Self::Fish => format!("{tool}.fish"),
        }
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bash => write!(f, "bash"),
            Self::Fish => write!(f, "fish"),
        }
    }
}
