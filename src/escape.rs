//! # Escaping & Naming
//!
//! Pure string helpers for building shell-safe identifiers and literals.
//! Everything here is deterministic and free of external state so the
//! generators stay trivially testable.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

/// Replaces every character that is not legal in a shell identifier with
/// an underscore.
///
/// Assumes the ASCII command-name domain; for arbitrary Unicode input two
/// distinct strings can sanitize to the same identifier, which is why
/// manifest validation checks the whole tree for collisions up front.
pub fn sanitize_identifier(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Builds the shell function identifier for a command path: underscore
/// prefix, path segments joined with underscores, sanitized.
pub fn function_name(path: &[&str]) -> String {
    format!("_{}", sanitize_identifier(&path.join("_")))
}

/// Escapes text for embedding inside a single-quoted shell literal by
/// backslash-prefixing backslashes (first) and single quotes.
///
/// One pass handles one level of embedding; `passes` exists for nested
/// quoting contexts and is 1 everywhere in normal use.
pub fn escape_for_single_quotes(text: &str, passes: u32) -> String {
    let mut result = text.to_string();
    for _ in 0..passes {
        result = result.replace('\\', "\\\\").replace('\'', "\\'");
    }
    result
}

/// Prepares file extensions for use inside single-quoted glob filters:
/// escapes embedded single quotes character-wise, then appends an
/// uppercased variant of every extension so filtering matches
/// case-insensitively without relying on shell options.
pub fn case_insensitive_extensions(extensions: &[String]) -> Vec<String> {
    let mut safe: Vec<String> = extensions
        .iter()
        .map(|ext| {
            let mut escaped = String::with_capacity(ext.len());
            for c in ext.chars() {
                if c == '\'' {
                    escaped.push('\\');
                }
                escaped.push(c);
            }
            escaped
        })
        .collect();

    let upper: Vec<String> = safe.iter().map(|ext| ext.to_uppercase()).collect();
    safe.extend(upper);
    safe
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_identifier() {
        assert_eq!(sanitize_identifier("tool"), "tool");
        assert_eq!(sanitize_identifier("my-tool"), "my_tool");
        assert_eq!(sanitize_identifier("a.b c"), "a_b_c");
    }

    #[test]
    fn test_function_name() {
        assert_eq!(function_name(&["tool"]), "_tool");
        assert_eq!(function_name(&["tool", "build"]), "_tool_build");
        assert_eq!(function_name(&["my-tool", "sub"]), "_my_tool_sub");
    }

    #[test]
    fn test_escape_for_single_quotes() {
        assert_eq!(escape_for_single_quotes("plain", 1), "plain");
        assert_eq!(escape_for_single_quotes("it's", 1), "it\\'s");
        assert_eq!(escape_for_single_quotes("a\\b", 1), "a\\\\b");
        // Backslash is escaped before the quote so the quote's own
        // backslash is not doubled.
        assert_eq!(escape_for_single_quotes("\\'", 1), "\\\\\\'");
    }

    #[test]
    fn test_escape_zero_passes_is_identity() {
        assert_eq!(escape_for_single_quotes("it's", 0), "it's");
    }

    #[test]
    fn test_escape_two_passes_nests() {
        assert_eq!(escape_for_single_quotes("'", 2), "\\\\\\'");
    }

    #[test]
    fn test_case_insensitive_extensions() {
        let exts = vec!["jpg".to_string(), "png".to_string()];
        assert_eq!(
            case_insensitive_extensions(&exts),
            vec!["jpg", "png", "JPG", "PNG"]
        );
    }

    #[test]
    fn test_case_insensitive_extensions_escapes_quotes() {
        let exts = vec!["o'dd".to_string()];
        assert_eq!(
            case_insensitive_extensions(&exts),
            vec!["o\\'dd", "O\\'DD"]
        );
    }
}
