//! # Bash Generator
//!
//! Imperative-model completion generator: every visible command gets one
//! shell function that offers this level's word list, completes option
//! values, or delegates to a subcommand's function with an incremented
//! word index. The script is a flat, depth-first concatenation of those
//! functions plus a trailing `complete -F` registration.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::{
    constants::{SHELL_ENV_VAR, SHELL_VERSION_ENV_VAR},
    escape,
    info::{ArgumentInfo, ArgumentKind, CommandInfo, CompletionKind},
    script::Script,
};

/// Generates the complete bash completion script for a command tree.
pub fn completion_script(root: &CommandInfo) -> String {
    format!(
        "#!/bin/bash\n\n{}\ncomplete -F {} {}\n",
        completion_function(root),
        escape::function_name(&root.path()),
        root.name
    )
}

/// Generates the dispatch function for one command, followed by the
/// functions of all its visible subcommands, depth first.
fn completion_function(command: &CommandInfo) -> String {
    let function_name = escape::function_name(&command.path());
    let is_root = command.is_root();

    // The root function completes word 1 and hands index 2 to children;
    // everywhere else the frame's index arrives as $1.
    let word_index = if is_root { "1" } else { "$1" };
    let subcommand_index = if is_root { "2" } else { "$(($1+1))" };

    let subcommands: Vec<&CommandInfo> = command.visible_subcommands().collect();

    let mut words = completion_words(command);
    words.extend(subcommands.iter().map(|sub| sub.name.clone()));

    let mut s = Script::new();
    s.line(0, format!("{function_name}() {{"));

    // One-time setup, only in the root function: export the environment
    // markers and initialize the working variables.
    if is_root {
        s.line(1, format!("export {SHELL_ENV_VAR}=bash"));
        s.line(
            1,
            format!("{SHELL_VERSION_ENV_VAR}=\"$(IFS='.'; printf %s \"${{BASH_VERSINFO[*]}}\")\""),
        );
        s.line(1, format!("export {SHELL_VERSION_ENV_VAR}"));
        s.line(1, "cur=\"${COMP_WORDS[COMP_CWORD]}\"");
        s.line(1, "prev=\"${COMP_WORDS[COMP_CWORD-1]}\"");
        s.line(1, "COMPREPLY=()");
    }

    s.line(1, format!("opts=\"{}\"", words.join(" ")));
    for extra in positional_completions(command) {
        s.line(1, format!("opts=\"$opts {extra}\""));
    }

    // Completing the word right after this command: offer the word list
    // and stop.
    s.line(1, format!("if [[ $COMP_CWORD == \"{word_index}\" ]]; then"));
    s.line(2, "COMPREPLY=( $(compgen -W \"$opts\" -- \"$cur\") )");
    s.line(2, "return");
    s.line(1, "fi");

    // Option value dispatch on the previous word.
    let option_cases = option_cases(command);
    if !option_cases.is_empty() {
        s.line(1, "case $prev in");
        for (patterns, body) in option_cases {
            s.line(2, format!("({patterns})"));
            if !body.is_empty() {
                s.block(3, &body);
            }
            s.line(3, "return");
            s.line(3, ";;");
        }
        s.line(1, "esac");
    }

    // Subcommand dispatch on the word at this command's child index.
    if !subcommands.is_empty() {
        s.line(1, format!("case ${{COMP_WORDS[{word_index}]}} in"));
        for sub in &subcommands {
            s.line(2, format!("({})", sub.name));
            s.line(
                3,
                format!("{} {subcommand_index}", escape::function_name(&sub.path())),
            );
            s.line(3, "return");
            s.line(3, ";;");
        }
        s.line(1, "esac");
    }

    s.line(1, "COMPREPLY=( $(compgen -W \"$opts\" -- \"$cur\") )");
    s.line(0, "}");

    let mut result = s.render();
    for sub in subcommands {
        result.push('\n');
        result.push_str(&completion_function(sub));
    }
    result
}

/// Option and flag spellings that complete at the top level of a command.
fn completion_words(command: &CommandInfo) -> Vec<String> {
    command
        .arguments
        .iter()
        .flat_map(ArgumentInfo::completion_names)
        .collect()
}

/// Extra top-level words contributed by positional arguments with `list`,
/// `shell-command`, or `custom` completion. File and directory positionals
/// contribute nothing here and fall back to the generic word list; that is
/// a known limitation carried over deliberately.
fn positional_completions(command: &CommandInfo) -> Vec<String> {
    command
        .visible_arguments()
        .filter(|arg| arg.kind == ArgumentKind::Positional)
        .filter_map(|arg| match &arg.completion {
            CompletionKind::None | CompletionKind::File { .. } | CompletionKind::Directory => None,
            CompletionKind::List { values } => Some(values.join(" ")),
            CompletionKind::ShellCommand { command } => Some(format!("$({command})")),
            CompletionKind::Custom => Some(format!(
                "$(\"${{COMP_WORDS[0]}}\" {} \"${{COMP_WORDS[@]}}\")",
                arg.custom_completion_call(command)
            )),
        })
        .collect()
}

/// Case patterns and bodies for completing option values. Flags never
/// take a value; an option with no spellings cannot be typed, so neither
/// contributes a case.
fn option_cases(command: &CommandInfo) -> Vec<(String, String)> {
    command
        .visible_arguments()
        .filter(|arg| arg.kind != ArgumentKind::Flag)
        .filter_map(|arg| {
            let keys = arg.completion_names();
            if keys.is_empty() {
                return None;
            }
            Some((keys.join("|"), option_completion_values(arg, command)))
        })
        .collect()
}

/// The body of one option's value-completion case.
///
/// File and directory values prefer bash-completion's `_filedir` helper
/// when it exists and degrade to plain `compgen` otherwise.
fn option_completion_values(argument: &ArgumentInfo, command: &CommandInfo) -> String {
    match &argument.completion {
        CompletionKind::None => String::new(),

        CompletionKind::File { extensions } if extensions.is_empty() => "\
if declare -F _filedir >/dev/null; then
  _filedir
else
  COMPREPLY=( $(compgen -f -- \"$cur\") )
fi"
        .to_string(),

        CompletionKind::File { extensions } => {
            let safe_exts = escape::case_insensitive_extensions(extensions);
            let filedir_lines: Vec<String> = safe_exts
                .iter()
                .map(|ext| format!("  _filedir '{ext}'"))
                .collect();
            let compgen_lines: Vec<String> = safe_exts
                .iter()
                .map(|ext| format!("    $(compgen -f -X '!*.{ext}' -- \"$cur\")"))
                .collect();
            format!(
                "if declare -F _filedir >/dev/null; then\n\
                 {}\n  _filedir -d\nelse\n  COMPREPLY=(\n\
                 {}\n    $(compgen -d -- \"$cur\")\n  )\nfi",
                filedir_lines.join("\n"),
                compgen_lines.join("\n"),
            )
        }

        CompletionKind::Directory => "\
if declare -F _filedir >/dev/null; then
  _filedir -d
else
  COMPREPLY=( $(compgen -d -- \"$cur\") )
fi"
        .to_string(),

        CompletionKind::List { values } => format!(
            "COMPREPLY=( $(compgen -W \"{}\" -- \"$cur\") )",
            values.join(" ")
        ),

        CompletionKind::ShellCommand { command } => format!("COMPREPLY=( $({command}) )"),

        CompletionKind::Custom => format!(
            "COMPREPLY=( $(compgen -W \"$(\"${{COMP_WORDS[0]}}\" {} \"${{COMP_WORDS[@]}}\")\" -- \"$cur\") )",
            argument.custom_completion_call(command)
        ),
    }
}
