//! # Command Metadata
//!
//! The read-only command tree both generators consume: commands, their
//! arguments, argument name spellings, and value-completion kinds.
//!
//! The tree is fully materialized before generation starts (usually by
//! [`crate::manifest::load`]) and is never mutated during generation.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use serde::{Deserialize, Serialize};

use crate::constants::CUSTOM_COMPLETION_MARKER;

const fn default_true() -> bool {
    true
}

/// Kind of argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentKind {
    /// Unnamed value, identified by position
    Positional,
    /// Named argument taking exactly one value
    Option,
    /// Boolean switch taking no value
    Flag,
}

/// One invocable spelling of an argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Name {
    /// `--name`
    Long { name: String },
    /// `-n`
    Short { name: char },
    /// `-name` (single dash, long spelling)
    LongWithSingleDash { name: String },
}

impl Name {
    /// Returns the spelling as the user types it (`--config`, `-c`, `-config`).
    pub fn synopsis(&self) -> String {
        match self {
            Self::Long { name } => format!("--{name}"),
            Self::Short { name } => format!("-{name}"),
            Self::LongWithSingleDash { name } => format!("-{name}"),
        }
    }
}

/// What values may follow an argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CompletionKind {
    /// No value suggestions beyond the generic word list
    #[default]
    None,

    /// Files, filtered by extension when `extensions` is non-empty
    File {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        extensions: Vec<String>,
    },

    /// Directories only
    Directory,

    /// A fixed list of literal values
    List { values: Vec<String> },

    /// Stdout lines of a shell command run at completion time
    ShellCommand { command: String },

    /// Candidates computed by the described binary itself via the
    /// reserved callback invocation
    Custom,
}

/// One option, flag, or positional parameter of a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentInfo {
    /// Argument kind
    pub kind: ArgumentKind,

    /// Invocable spellings; empty for positionals
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<Name>,

    /// Placeholder for the argument's value in help output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_name: Option<String>,

    /// One-line description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub about: String,

    /// Hidden arguments still parse but never complete
    #[serde(default = "default_true")]
    pub should_display: bool,

    /// What values may follow this argument
    #[serde(default, skip_serializing_if = "is_default_completion")]
    pub completion: CompletionKind,
}

fn is_default_completion(kind: &CompletionKind) -> bool {
    *kind == CompletionKind::None
}

impl Default for ArgumentInfo {
    fn default() -> Self {
        Self {
            kind: ArgumentKind::Positional,
            names: Vec::new(),
            value_name: None,
            about: String::new(),
            should_display: true,
            completion: CompletionKind::None,
        }
    }
}

impl ArgumentInfo {
    /// Returns the spellings this argument contributes to completion word
    /// lists. Hidden arguments (and positionals, which have no names)
    /// contribute nothing.
    pub fn completion_names(&self) -> Vec<String> {
        if self.should_display {
            self.names.iter().map(Name::synopsis).collect()
        } else {
            Vec::new()
        }
    }

    /// The name used to identify this argument in the callback invocation:
    /// the first long spelling, else the first spelling of any kind, else
    /// the value placeholder for positionals.
    fn callback_name(&self) -> String {
        self.names
            .iter()
            .find(|name| matches!(name, Name::Long { .. }))
            .or_else(|| self.names.first())
            .map_or_else(
                || self.value_name.clone().unwrap_or_else(|| "---".to_string()),
                Name::synopsis,
            )
    }

    /// Builds the reserved argument sequence a completion script passes back
    /// to the described binary to request candidates for this argument:
    /// `---completion <subcommand path...> -- <argument name>`.
    ///
    /// The script appends every word typed so far and captures stdout, one
    /// candidate per line.
    pub fn custom_completion_call(&self, command: &CommandInfo) -> String {
        let mut words = vec![CUSTOM_COMPLETION_MARKER.to_string()];
        words.extend(command.path().iter().skip(1).map(ToString::to_string));
        words.push("--".to_string());
        words.push(self.callback_name());
        words.join(" ")
    }
}

/// One command or subcommand node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInfo {
    /// The literal token the user types
    pub name: String,

    /// One-line description, shown as inline help by fish
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub about: String,

    /// Alternate spellings accepted by the parser; completions only ever
    /// offer the canonical name
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    /// Arguments belonging to this command, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<ArgumentInfo>,

    /// Child commands, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subcommands: Vec<CommandInfo>,

    /// Ancestor command names from the root down to (not including) this
    /// node. Resolved by [`CommandInfo::resolve_paths`]; manifest authors
    /// never write it by hand.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub super_commands: Vec<String>,

    /// Hidden commands still parse but never complete
    #[serde(default = "default_true")]
    pub should_display: bool,
}

impl Default for CommandInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            about: String::new(),
            aliases: Vec::new(),
            arguments: Vec::new(),
            subcommands: Vec::new(),
            super_commands: Vec::new(),
            should_display: true,
        }
    }
}

impl CommandInfo {
    /// True for the top-level command.
    pub fn is_root(&self) -> bool {
        self.super_commands.is_empty()
    }

    /// The full command path, root first, ending with this command's name.
    pub fn path(&self) -> Vec<&str> {
        self.super_commands
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.name.as_str()))
            .collect()
    }

    /// Display-eligible subcommands, in declaration order.
    pub fn visible_subcommands(&self) -> impl Iterator<Item = &Self> {
        self.subcommands.iter().filter(|sub| sub.should_display)
    }

    /// Display-eligible arguments, in declaration order.
    pub fn visible_arguments(&self) -> impl Iterator<Item = &ArgumentInfo> {
        self.arguments.iter().filter(|arg| arg.should_display)
    }

    /// Fills in every descendant's `super_commands` chain from this node's
    /// own path. Called once after deserialization.
    pub fn resolve_paths(&mut self) {
        let path: Vec<String> = self.path().iter().map(ToString::to_string).collect();
        for sub in &mut self.subcommands {
            sub.super_commands.clone_from(&path);
            sub.resolve_paths();
        }
    }
}
