//! Line-oriented command grammar for the interactive session.

use clap::{Parser, Subcommand};
use todo_core::{SortMode, TaskId};

use crate::error::CliError;

/// Startup options.
#[derive(Parser, Debug)]
#[command(name = "todo", author, version, about = "Interactive task list client")]
pub struct Args {
    /// Base URL of the task API
    #[arg(long, env = "TODO_API_URL", default_value = "http://localhost:8000")]
    pub base_url: String,
}

/// One line typed at the prompt.
#[derive(Parser, Debug)]
#[command(name = "todo", no_binary_name = true, disable_help_flag = true)]
pub struct Line {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show the list
    List,
    /// Reload the list from the server
    Refresh,
    /// Set the title of the open form
    ///
    /// Example: title Buy milk
    Title { words: Vec<String> },
    /// Set the description of the open form; no argument clears it
    Desc { words: Vec<String> },
    /// Set the due date (YYYY-MM-DD) of the open form; no argument clears it
    Due { date: Option<String> },
    /// Set the priority (high, medium, low) of the open form; no argument clears it
    Priority { level: Option<String> },
    /// Submit the new task, optionally filling the form first
    ///
    /// Example: add Buy milk --due 2025-12-31 --priority high
    Add {
        words: Vec<String>,
        #[arg(long)]
        desc: Option<String>,
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        priority: Option<String>,
    },
    /// Flip the completion of a task
    Toggle { id: TaskId },
    /// Delete a task
    Delete { id: TaskId },
    /// Open a task in the edit form
    Edit { id: TaskId },
    /// Save the edit form
    Save,
    /// Discard the edit form
    Cancel,
    /// Change the display order: none, due or priority
    Sort { mode: SortMode },
}

/// Parse one prompt line into a command.
pub fn parse_line(line: &str) -> Result<Command, CliError> {
    let args = split_command_line(line)?;
    Line::try_parse_from(args)
        .map(|line| line.command)
        .map_err(|err| CliError::invalid_input(first_line(&err.to_string())))
}

fn first_line(rendered: &str) -> String {
    rendered
        .lines()
        .next()
        .unwrap_or("invalid command")
        .trim()
        .trim_start_matches("error: ")
        .to_string()
}

/// Split on whitespace, honoring double quotes and `\"` / `\\` escapes
/// inside them. `""` yields an empty argument.
pub fn split_command_line(line: &str) -> Result<Vec<String>, CliError> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut in_quotes = false;
    let mut escape = false;

    for ch in line.chars() {
        if escape {
            if ch != '"' && ch != '\\' {
                current.push('\\');
            }
            current.push(ch);
            escape = false;
            continue;
        }

        if in_quotes && ch == '\\' {
            escape = true;
            continue;
        }

        if ch == '"' {
            in_quotes = !in_quotes;
            quoted = true;
            continue;
        }

        if ch.is_whitespace() && !in_quotes {
            if !current.is_empty() || quoted {
                args.push(std::mem::take(&mut current));
                quoted = false;
            }
            continue;
        }

        current.push(ch);
    }

    if in_quotes {
        return Err(CliError::invalid_input("unterminated quote in command"));
    }

    if !current.is_empty() || quoted {
        args.push(current);
    }

    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_words() {
        assert_eq!(
            split_command_line("add  Buy milk").unwrap(),
            vec!["add", "Buy", "milk"]
        );
    }

    #[test]
    fn keeps_quoted_spans_together() {
        assert_eq!(
            split_command_line(r#"desc "two liters, \"whole\"" "#).unwrap(),
            vec!["desc", r#"two liters, "whole""#]
        );
        assert_eq!(split_command_line(r#"desc """#).unwrap(), vec!["desc", ""]);
    }

    #[test]
    fn unterminated_quote_is_an_error() {
        assert!(split_command_line(r#"title "oops"#).is_err());
    }

    #[test]
    fn parses_add_with_flags() {
        let command = parse_line("add Buy milk --due 2025-12-31 --priority high").unwrap();
        assert_eq!(
            command,
            Command::Add {
                words: vec!["Buy".into(), "milk".into()],
                desc: None,
                due: Some("2025-12-31".into()),
                priority: Some("high".into()),
            }
        );
    }

    #[test]
    fn parses_ids_and_sort_modes() {
        assert_eq!(parse_line("toggle 3").unwrap(), Command::Toggle { id: 3 });
        assert_eq!(
            parse_line("sort due").unwrap(),
            Command::Sort { mode: SortMode::DueDate }
        );
        assert_eq!(parse_line("due").unwrap(), Command::Due { date: None });
    }

    #[test]
    fn rejects_unknown_commands_and_bad_ids() {
        assert!(parse_line("frobnicate").is_err());
        assert!(parse_line("delete abc").is_err());
        assert!(parse_line("sort alphabetical").is_err());
    }
}
