//! Command-line parser for race log files
//!
//! Each line is `COMMAND;arg1;arg2;...`, semicolon separated with no
//! escaping. Arity is checked before any argument is converted, so a wrong
//! argument count is always reported as an invalid command.

use serde::Serialize;

use crate::core::scoring::ScoringMethod;
use crate::error::CommandError;

/// Field separator within a command line
pub const SEPARATOR: char = ';';

/// A parsed command
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Command {
    Race {
        year: i32,
        location: String,
        race_id: i32,
        point_multiplier: f64,
    },
    Result {
        position: i32,
        name: String,
        team_name: String,
    },
    Fastest {
        name: String,
        team_name: String,
    },
    Finish,
    Query {
        year: i32,
        race_id: Option<i32>,
    },
    Point {
        scoring: ScoringMethod,
    },
    /// Empty line or `EXIT`
    Exit,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Race { .. } => "RACE",
            Command::Result { .. } => "RESULT",
            Command::Fastest { .. } => "FASTEST",
            Command::Finish => "FINISH",
            Command::Query { .. } => "QUERY",
            Command::Point { .. } => "POINT",
            Command::Exit => "EXIT",
        }
    }
}

/// Split a line the way `String.split` on a single char would: trailing
/// empty fields are dropped, so `FINISH;` has no arguments.
fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(SEPARATOR).collect();
    while fields.len() > 1 && fields.last() == Some(&"") {
        fields.pop();
    }
    fields
}

fn arity_error(msg: &str) -> CommandError {
    CommandError::invalid(msg)
}

/// Parse one line into a [`Command`]
pub fn parse_line(line: &str) -> Result<Command, CommandError> {
    let fields = split_fields(line);
    let args = &fields[1..];

    match fields[0] {
        "RACE" => {
            if args.len() != 4 {
                return Err(arity_error(
                    "The RACE command must have 4 arguments! (RACE;year;location;raceID;pointMultiplier)",
                ));
            }
            Ok(Command::Race {
                year: args[0].parse()?,
                location: args[1].to_string(),
                race_id: args[2].parse()?,
                point_multiplier: args[3].parse()?,
            })
        }
        "RESULT" => {
            if args.len() != 3 {
                return Err(arity_error(
                    "The RESULT command must have 3 arguments! (RESULT;position;name;teamName)",
                ));
            }
            Ok(Command::Result {
                position: args[0].parse()?,
                name: args[1].to_string(),
                team_name: args[2].to_string(),
            })
        }
        "FASTEST" => {
            if args.len() != 2 {
                return Err(arity_error(
                    "The FASTEST command must have 2 arguments! (FASTEST;name;teamName)",
                ));
            }
            Ok(Command::Fastest {
                name: args[0].to_string(),
                team_name: args[1].to_string(),
            })
        }
        "FINISH" => {
            if !args.is_empty() {
                return Err(arity_error("The FINISH command must have no arguments!"));
            }
            Ok(Command::Finish)
        }
        "QUERY" => match args {
            [year] => Ok(Command::Query {
                year: year.parse()?,
                race_id: None,
            }),
            [year, race_id] => Ok(Command::Query {
                year: year.parse()?,
                race_id: Some(race_id.parse()?),
            }),
            _ => Err(arity_error(
                "The QUERY command must have 1 or 2 arguments! (QUERY;year OR QUERY;year;raceId)",
            )),
        },
        "POINT" => {
            if args.len() != 1 {
                return Err(arity_error(
                    "The POINT command must have 1 argument! (POINT;CLASSIC/MODERN/NEW/PRESENT)",
                ));
            }
            Ok(Command::Point {
                scoring: args[0].parse()?,
            })
        }
        "" | "EXIT" => Ok(Command::Exit),
        _ => Err(CommandError::invalid(format!("Wrong command! ({})", line))),
    }
}
