//! # Test Helpers
//!
//! Shared manifest fixtures for the integration tests.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use tabgen::{manifest, CommandInfo};

/// The README example: a root `tool` with one list-completed option and
/// one `build` subcommand.
pub const SAMPLE_MANIFEST: &str = r#"
name = "tool"
about = "An example tool"

[[arguments]]
kind = "option"
about = "Build configuration"
names = [{ kind = "long", name = "config" }]
completion = { type = "list", values = ["debug", "release"] }

[[subcommands]]
name = "build"
about = "Builds the project"
"#;

/// A three-level tree exercising every completion kind plus hidden nodes.
pub const NESTED_MANIFEST: &str = r#"
name = "pkg"

[[arguments]]
kind = "flag"
about = "Verbose output"
names = [{ kind = "long", name = "verbose" }, { kind = "short", name = "v" }]

[[subcommands]]
name = "remote"
about = "Manage remotes"

[[subcommands.arguments]]
kind = "option"
about = "Remote URL"
names = [{ kind = "long", name = "url" }]
completion = { type = "custom" }

[[subcommands.subcommands]]
name = "add"
about = "Add a remote"

[[subcommands.subcommands.arguments]]
kind = "option"
about = "Key file"
names = [{ kind = "long", name = "key" }, { kind = "long-with-single-dash", name = "k" }]
completion = { type = "file", extensions = ["pem"] }

[[subcommands.subcommands]]
name = "prune"
about = "Prune stale remotes"
should_display = false

[[subcommands]]
name = "fetch"
about = "Fetch from a remote"

[[subcommands.arguments]]
kind = "positional"
value_name = "remote"
completion = { type = "shell-command", command = "pkg remote list" }
"#;

#[allow(dead_code)]
pub fn sample_tree() -> CommandInfo {
    manifest::parse(SAMPLE_MANIFEST).expect("sample manifest should parse")
}

#[allow(dead_code)]
pub fn nested_tree() -> CommandInfo {
    manifest::parse(NESTED_MANIFEST).expect("nested manifest should parse")
}
