//! Shell command parsing.
//!
//! # Responsibility
//! - Turn one input line into a typed `Command`.
//! - Report malformed input without touching the store.
//!
//! # Invariants
//! - Blank lines parse to `None`, not an error.
//! - `add` without a name yields an empty name so the store can reject it.

use listkeeper_core::Number;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Show,
    Get(String),
    Add { name: String, values: Vec<Number> },
    Delete(String),
    Sort(String),
    Append { name: String, value: Number },
    Dump,
    Version,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownCommand(String),
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    InvalidNumber(String),
    UnexpectedArgument(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand(word) => {
                write!(f, "unknown command `{word}`; type `help` for a list")
            }
            Self::MissingArgument { command, argument } => {
                write!(f, "`{command}` needs {argument}")
            }
            Self::InvalidNumber(token) => write!(f, "not a number: `{token}`"),
            Self::UnexpectedArgument(token) => write!(f, "unexpected argument `{token}`"),
        }
    }
}

impl Error for ParseError {}

pub const HELP_TEXT: &str = "\
commands:
  show                 list names
  get NAME             print one list
  add NAME [V...]      add or replace a list
  delete NAME          remove a list
  sort NAME            sort a list ascending
  append NAME V        append one value
  dump                 print all lists as JSON
  version              print core version
  help                 print this text
  quit | exit          leave the shell";

/// Parses one shell line.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = words.collect();

    let command = match head.to_ascii_lowercase().as_str() {
        "show" | "ls" => no_args(&rest, Command::Show)?,
        "get" => Command::Get(single_name("get", &rest)?),
        "add" => {
            let name = rest.first().map(|word| word.to_string()).unwrap_or_default();
            let values = rest
                .iter()
                .skip(1)
                .copied()
                .map(parse_number)
                .collect::<Result<Vec<_>, _>>()?;
            Command::Add { name, values }
        }
        "delete" | "rm" => Command::Delete(single_name("delete", &rest)?),
        "sort" => Command::Sort(single_name("sort", &rest)?),
        "append" => match rest.as_slice() {
            [] => {
                return Err(ParseError::MissingArgument {
                    command: "append",
                    argument: "a list name",
                })
            }
            [_] => {
                return Err(ParseError::MissingArgument {
                    command: "append",
                    argument: "a value",
                })
            }
            [name, value] => Command::Append {
                name: name.to_string(),
                value: parse_number(value)?,
            },
            [_, _, extra, ..] => return Err(ParseError::UnexpectedArgument(extra.to_string())),
        },
        "dump" => no_args(&rest, Command::Dump)?,
        "version" => no_args(&rest, Command::Version)?,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(ParseError::UnknownCommand(head.to_string())),
    };

    Ok(Some(command))
}

fn no_args(rest: &[&str], command: Command) -> Result<Command, ParseError> {
    match rest.first() {
        Some(extra) => Err(ParseError::UnexpectedArgument(extra.to_string())),
        None => Ok(command),
    }
}

fn single_name(command: &'static str, rest: &[&str]) -> Result<String, ParseError> {
    match rest {
        [] => Err(ParseError::MissingArgument {
            command,
            argument: "a list name",
        }),
        [name] => Ok(name.to_string()),
        [_, extra, ..] => Err(ParseError::UnexpectedArgument(extra.to_string())),
    }
}

fn parse_number(token: &str) -> Result<Number, ParseError> {
    token
        .trim_end_matches(',')
        .parse::<Number>()
        .map_err(|_| ParseError::InvalidNumber(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{parse_line, Command, ParseError};

    #[test]
    fn blank_line_is_ignored() {
        assert_eq!(parse_line("   ").unwrap(), None);
    }

    #[test]
    fn add_parses_name_and_values() {
        assert_eq!(
            parse_line("add X 3, 1, 2.5").unwrap(),
            Some(Command::Add {
                name: "X".to_string(),
                values: vec![3.0, 1.0, 2.5],
            })
        );
    }

    #[test]
    fn add_without_name_forwards_empty_name() {
        assert_eq!(
            parse_line("add").unwrap(),
            Some(Command::Add {
                name: String::new(),
                values: Vec::new(),
            })
        );
    }

    #[test]
    fn add_rejects_bad_number() {
        assert_eq!(
            parse_line("add X 1 two").unwrap_err(),
            ParseError::InvalidNumber("two".to_string())
        );
    }

    #[test]
    fn append_takes_exactly_one_value() {
        assert_eq!(
            parse_line("append X -4").unwrap(),
            Some(Command::Append {
                name: "X".to_string(),
                value: -4.0,
            })
        );
        assert!(matches!(
            parse_line("append X").unwrap_err(),
            ParseError::MissingArgument {
                argument: "a value",
                ..
            }
        ));
        assert_eq!(
            parse_line("append X 1 2").unwrap_err(),
            ParseError::UnexpectedArgument("2".to_string())
        );
    }

    #[test]
    fn name_commands_require_one_name() {
        assert_eq!(
            parse_line("SORT Liste").unwrap(),
            Some(Command::Sort("Liste".to_string()))
        );
        assert!(matches!(
            parse_line("delete").unwrap_err(),
            ParseError::MissingArgument {
                command: "delete",
                ..
            }
        ));
        assert!(parse_line("get a b").is_err());
    }

    #[test]
    fn unknown_command_is_reported() {
        let err = parse_line("frobnicate").unwrap_err();
        assert!(err.to_string().contains("frobnicate"));
    }

    #[test]
    fn keyword_commands_parse() {
        assert_eq!(parse_line("show").unwrap(), Some(Command::Show));
        assert_eq!(parse_line("dump").unwrap(), Some(Command::Dump));
        assert_eq!(parse_line("exit").unwrap(), Some(Command::Quit));
        assert!(parse_line("show extra").is_err());
    }
}
