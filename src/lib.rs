//! F1 standings - command log interpreter for race results
//!
//! This library provides:
//! - Parsing of `COMMAND;arg;...` race log lines
//! - A race log state machine (RACE / RESULT / FASTEST / FINISH, QUERY / POINT)
//! - Championship standings under the CLASSIC, MODERN, NEW and PRESENT tables
//!
//! # Example
//!
//! ```
//! use f1standings::{RaceLog, VecSink};
//!
//! let mut log = RaceLog::new();
//! let mut sink = VecSink::default();
//! let mut lines = vec!["RACE;2021;Spa;1;1".to_string()];
//! for p in 1..=10 {
//!     lines.push(format!("RESULT;{};Driver {};Team", p, p));
//! }
//! lines.push("FINISH".to_string());
//! lines.push("QUERY;2021".to_string());
//! lines.push("POINT;NEW".to_string());
//!
//! log.run_lines(&lines, &mut sink);
//! assert_eq!(sink.reports[0].points_of("Driver 1"), Some(25.0));
//! ```

pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod models;
pub mod race_log;

// Re-export commonly used types
pub use crate::core::{ScoringMethod, StandingsCalculator, StandingsReport};
pub use config::{OutputFormat, RunConfig};
pub use data::{parse_line, Command, RaceRecord};
pub use error::{CommandError, CommandErrorKind};
pub use models::{Competitor, PendingQuery, Standing};
pub use race_log::{Outcome, RaceLog, ReportSink, RunSummary, VecSink};
