//! # Manifest
//!
//! Loads a command tree from a TOML manifest, resolves every node's
//! ancestor chain, and validates the invariants the generators rely on:
//! sibling names (including aliases) are unique within one parent, and no
//! two command paths sanitize to the same shell function identifier.
//!
//! The generators themselves are total functions over a valid tree;
//! validation lives here, at the load boundary.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    collections::{HashMap, HashSet},
    fs,
    path::Path,
};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::{escape, info::CommandInfo};

/// Tree-invariant violations detected at load time
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ManifestError {
    #[error("duplicate name or alias `{name}` among subcommands of `{parent}`")]
    DuplicateSiblingName { parent: String, name: String },

    #[error(
        "commands `{first}` and `{second}` both sanitize to completion function `{identifier}`"
    )]
    FunctionNameCollision {
        first: String,
        second: String,
        identifier: String,
    },
}

/// Loads, resolves, and validates a manifest file.
pub fn load(path: &Path) -> Result<CommandInfo> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
    parse(&content).with_context(|| format!("Invalid manifest: {}", path.display()))
}

/// Parses manifest text into a validated command tree.
pub fn parse(content: &str) -> Result<CommandInfo> {
    let mut root: CommandInfo = toml::from_str(content).context("Failed to parse manifest TOML")?;
    // The root owns its path; any super_commands written in the file are
    // author error and get overwritten.
    root.super_commands.clear();
    root.resolve_paths();
    validate(&root)?;
    Ok(root)
}

/// Checks tree invariants on an already-resolved tree.
pub fn validate(root: &CommandInfo) -> std::result::Result<(), ManifestError> {
    let mut function_names: HashMap<String, String> = HashMap::new();
    validate_node(root, &mut function_names)
}

fn validate_node(
    command: &CommandInfo,
    function_names: &mut HashMap<String, String>,
) -> std::result::Result<(), ManifestError> {
    let path = command.path().join(" ");

    // Hidden commands emit no function, so only visible ones can collide.
    if command.should_display {
        let identifier = escape::function_name(&command.path());
        if let Some(existing) = function_names.insert(identifier.clone(), path.clone()) {
            return Err(ManifestError::FunctionNameCollision {
                first: existing,
                second: path,
                identifier,
            });
        }
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for sub in &command.subcommands {
        for token in std::iter::once(sub.name.as_str())
            .chain(sub.aliases.iter().map(String::as_str))
        {
            if !seen.insert(token) {
                return Err(ManifestError::DuplicateSiblingName {
                    parent: path,
                    name: token.to_string(),
                });
            }
        }
    }

    for sub in &command.subcommands {
        validate_node(sub, function_names)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::{ArgumentKind, CompletionKind};

    const SAMPLE: &str = r#"
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

        [[subcommands.subcommands]]
        name = "all"
    "#;

    #[test]
    fn test_parse_resolves_paths() {
        let root = parse(SAMPLE).unwrap();
        assert_eq!(root.name, "tool");
        assert_eq!(root.arguments[0].kind, ArgumentKind::Option);
        assert!(matches!(
            root.arguments[0].completion,
            CompletionKind::List { .. }
        ));
        assert_eq!(
            root.subcommands[0].subcommands[0].path(),
            vec!["tool", "build", "all"]
        );
    }

    #[test]
    fn test_parse_overwrites_author_written_super_commands() {
        let root = parse("name = \"tool\"\nsuper_commands = [\"bogus\"]\n").unwrap();
        assert!(root.is_root());
    }

    #[test]
    fn test_duplicate_sibling_name_rejected() {
        let source = r#"
            name = "tool"

            [[subcommands]]
            name = "build"

            [[subcommands]]
            name = "build"
        "#;
        let err = parse(source).unwrap_err();
        let manifest_err = err
            .downcast_ref::<ManifestError>()
            .expect("should be a manifest error");
        assert_eq!(
            *manifest_err,
            ManifestError::DuplicateSiblingName {
                parent: "tool".to_string(),
                name: "build".to_string(),
            }
        );
    }

    #[test]
    fn test_alias_conflicts_with_sibling_name() {
        let source = r#"
            name = "tool"

            [[subcommands]]
            name = "build"

            [[subcommands]]
            name = "check"
            aliases = ["build"]
        "#;
        let root: CommandInfo = toml::from_str(source).unwrap();
        let mut root = root;
        root.resolve_paths();
        assert_eq!(
            validate(&root),
            Err(ManifestError::DuplicateSiblingName {
                parent: "tool".to_string(),
                name: "build".to_string(),
            })
        );
    }

    #[test]
    fn test_function_name_collision_rejected() {
        let source = r#"
            name = "tool"

            [[subcommands]]
            name = "my-sub"

            [[subcommands]]
            name = "my_sub"
        "#;
        let mut root: CommandInfo = toml::from_str(source).unwrap();
        root.resolve_paths();
        assert_eq!(
            validate(&root),
            Err(ManifestError::FunctionNameCollision {
                first: "tool my-sub".to_string(),
                second: "tool my_sub".to_string(),
                identifier: "_tool_my_sub".to_string(),
            })
        );
    }

    #[test]
    fn test_hidden_commands_exempt_from_collision_check() {
        let source = r#"
            name = "tool"

            [[subcommands]]
            name = "my-sub"

            [[subcommands]]
            name = "my_sub"
            should_display = false
        "#;
        let mut root: CommandInfo = toml::from_str(source).unwrap();
        root.resolve_paths();
        assert_eq!(validate(&root), Ok(()));
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = load(Path::new("/nonexistent/tabgen.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read manifest"));
    }
}
