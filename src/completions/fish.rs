//! # Fish Generator
//!
//! Declarative-model completion generator: a fixed prologue defines two
//! predicate functions that recover the command path from the live input
//! line, then every visible command contributes guarded `complete` rules
//! for its subcommands and arguments. Fish unions all rules whose guard
//! matches a position, so rule order never affects correctness.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::{
    constants::{SHELL_ENV_VAR, SHELL_VERSION_ENV_VAR},
    escape,
    info::{ArgumentInfo, CommandInfo, CompletionKind, Name},
};

/// Separator used both between path segments inside a guard string and
/// between literal list values.
const SEPARATOR: &str = " ";

/// Generates the complete fish completion script for a command tree.
pub fn completion_script(root: &CommandInfo) -> String {
    let tool = escape::sanitize_identifier(&root.name);
    let filter_fn = format!("_tabgen_{tool}_commands_and_positionals");
    let guard_fn = format!("_tabgen_{tool}_using_command");

    let rules = rules(root, &guard_fn, root).join("\n");

    format!(
        r#"# A function which filters options which starts with "-" from $argv.
function {filter_fn}
    set -l results
    for i in (seq (count $argv))
        switch (echo $argv[$i] | string sub -l 1)
            case '-'
            case '*'
                echo $argv[$i]
        end
    end
end

function {guard_fn}
    set -gx {SHELL_ENV_VAR} fish
    set -gx {SHELL_VERSION_ENV_VAR} "$FISH_VERSION"
    set -l commands_and_positionals ({filter_fn} (commandline -opc))
    set -l expected_commands (string split -- '{SEPARATOR}' $argv[1])
    set -l subcommands (string split -- '{SEPARATOR}' $argv[2])
    if [ (count $commands_and_positionals) -ge (count $expected_commands) ]
        for i in (seq (count $expected_commands))
            if [ $commands_and_positionals[$i] != $expected_commands[$i] ]
                return 1
            end
        end
        if [ (count $commands_and_positionals) -eq (count $expected_commands) ]
            return 0
        end
        if [ (count $subcommands) -gt 0 ]
            for i in (seq (count $subcommands))
                if [ $commands_and_positionals[(math (count $expected_commands) + 1)] = $subcommands[$i] ]
                    return 1
                end
            end
        end
        return 0
    end
    return 1
end

{rules}
"#
    )
}

/// Rules for one command and, recursively, all its visible subcommands.
/// Subcommand rules come first, then this command's argument rules, then
/// the suggestions for its subcommand names.
fn rules(root: &CommandInfo, guard_fn: &str, command: &CommandInfo) -> Vec<String> {
    let mut subcommands: Vec<CommandInfo> = command.visible_subcommands().cloned().collect();

    // The root always completes a help subcommand even when the tree
    // declares none.
    if command.is_root() && !subcommands.iter().any(|sub| sub.name == "help") {
        subcommands.push(help_subcommand(command));
    }

    let mut prefix = format!(
        "complete -c {} -n '{guard_fn} \"{}\"",
        root.name,
        command.path().join(SEPARATOR)
    );
    if !subcommands.is_empty() {
        let names: Vec<&str> = subcommands.iter().map(|sub| sub.name.as_str()).collect();
        prefix.push_str(&format!(" \"{}\"", names.join(SEPARATOR)));
    }
    prefix.push('\'');

    let subcommand_rules = subcommands.iter().map(|sub| {
        format!(
            "{prefix} -fa '{}' -d '{}'",
            sub.name,
            escape::escape_for_single_quotes(&sub.about, 1)
        )
    });

    let argument_rules = command
        .visible_arguments()
        .filter_map(|arg| argument_segments(arg, command, root))
        .map(|segments| format!("{prefix} {}", segments.join(SEPARATOR)));

    let mut result: Vec<String> = subcommands
        .iter()
        .flat_map(|sub| rules(root, guard_fn, sub))
        .collect();
    result.extend(argument_rules);
    result.extend(subcommand_rules);
    result
}

/// The synthetic `help` subcommand appended to the root's child list.
fn help_subcommand(root: &CommandInfo) -> CommandInfo {
    CommandInfo {
        name: "help".to_string(),
        about: "Show subcommand help information.".to_string(),
        super_commands: root.path().iter().map(ToString::to_string).collect(),
        ..Default::default()
    }
}

/// The rule segments for one argument: its spellings, its description,
/// and a value-completion suffix by completion kind. Positionals with no
/// completion contribute no rule at all.
fn argument_segments(
    argument: &ArgumentInfo,
    command: &CommandInfo,
    root: &CommandInfo,
) -> Option<Vec<String>> {
    let mut segments: Vec<String> = argument.names.iter().map(fish_name_segment).collect();

    if !argument.about.is_empty() {
        segments.push(format!(
            "-d '{}'",
            escape::escape_for_single_quotes(&argument.about, 1)
        ));
    }

    match &argument.completion {
        CompletionKind::None if argument.names.is_empty() => return None,
        CompletionKind::None => {}
        CompletionKind::List { values } => {
            segments.push(format!("-rfka '{}'", values.join(SEPARATOR)));
        }
        // An empty extension set means any file; fish's default file
        // completion already does that, so just require a value.
        CompletionKind::File { extensions } if extensions.is_empty() => {
            segments.push("-r".to_string());
        }
        CompletionKind::File { extensions } => {
            segments.push(format!(
                "-rfa '(for i in *.{{{}}}; echo $i;end)'",
                extensions.join(",")
            ));
        }
        CompletionKind::Directory => {
            segments.push("-rfa '(__fish_complete_directories)'".to_string());
        }
        CompletionKind::ShellCommand { command } => {
            segments.push(format!("-rfa '({command})'"));
        }
        CompletionKind::Custom => {
            segments.push(format!(
                "-rfa '(command {} {} (commandline -opc)[1..-1])'",
                root.name,
                argument.custom_completion_call(command)
            ));
        }
    }

    Some(segments)
}

/// Renders one argument spelling as fish's option-declaration segment.
fn fish_name_segment(name: &Name) -> String {
    match name {
        Name::Long { name } => format!("-l {name}"),
        Name::Short { name } => format!("-s {name}"),
        Name::LongWithSingleDash { name } => format!("-o {name}"),
    }
}
