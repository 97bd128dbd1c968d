//! # Constants
//!
//! Centralized constants for magic values used throughout tabgen.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Generated Script Environment
// =============================================================================

/// Environment variable naming the shell a completion script runs under.
/// Exported by the generated script so custom-completion callbacks can
/// introspect their invocation context.
pub const SHELL_ENV_VAR: &str = "TABGEN_SHELL";

/// Environment variable carrying the running shell's version string.
pub const SHELL_VERSION_ENV_VAR: &str = "TABGEN_SHELL_VERSION";

/// Reserved first argument of the custom-completion callback invocation.
/// The described binary must recognize this marker, compute candidates, and
/// print one per line to stdout.
pub const CUSTOM_COMPLETION_MARKER: &str = "---completion";

// =============================================================================
// Shell Completion Paths
// =============================================================================

/// Bash completions directory (relative to home).
pub const BASH_COMPLETIONS_DIR: &str = ".local/share/bash-completion/completions";

/// Fish completions directory (relative to home).
pub const FISH_COMPLETIONS_DIR: &str = ".config/fish/completions";
