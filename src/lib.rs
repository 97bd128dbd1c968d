//! # tabgen
//!
//! Generates bash and fish completion scripts from a declarative command manifest.
//!
//! A manifest describes a command-line tool as a tree of commands, each with its
//! options, flags, positionals, and subcommands. Both generators consume the same
//! read-only tree and return a complete, directly-sourceable script as a string:
//!
//! - **Bash** gets one dispatch function per command that recurses into
//!   subcommand functions as the user descends the tree.
//! - **Fish** gets a flat list of `complete` rules, each guarded by a predicate
//!   that re-derives the command path from the live input line.
//!
//! Generation is a pure fold over the tree: no I/O, no shared state, and the
//! same tree always produces byte-identical output.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod commands;
pub mod completions;
pub mod constants;
pub mod escape;
pub mod info;
pub mod manifest;
pub mod script;

pub use completions::{bash, fish, Shell};
pub use info::{ArgumentInfo, ArgumentKind, CommandInfo, CompletionKind, Name};
pub use manifest::ManifestError;
