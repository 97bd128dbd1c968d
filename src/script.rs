//! # Script Builder
//!
//! Small line-oriented builder the generators use instead of freeform string
//! interpolation. Lines carry an indent level; indentation is applied once,
//! at render time, which keeps it uniform and testable away from the tree
//! traversal.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

/// Number of spaces per indent level.
const INDENT_WIDTH: usize = 4;

/// An ordered list of (indent level, text) lines.
#[derive(Debug, Default)]
pub struct Script {
    lines: Vec<(usize, String)>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one line at the given indent level.
    pub fn line(&mut self, level: usize, text: impl Into<String>) {
        self.lines.push((level, text.into()));
    }

    /// Appends a multi-line block at the given indent level. The block's own
    /// relative indentation is preserved under the level indent.
    pub fn block(&mut self, level: usize, text: &str) {
        for line in text.lines() {
            self.lines.push((level, line.to_string()));
        }
    }

    /// Appends an empty line.
    pub fn blank(&mut self) {
        self.lines.push((0, String::new()));
    }

    /// Renders all lines with indentation applied, ending with a newline.
    /// Empty lines stay empty rather than carrying trailing spaces.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for (level, text) in &self.lines {
            if !text.is_empty() {
                for _ in 0..level * INDENT_WIDTH {
                    result.push(' ');
                }
                result.push_str(text);
            }
            result.push('\n');
        }
        result
    }
}
