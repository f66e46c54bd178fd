//! Race log interpreter
//!
//! Owns every race entered so far and enforces command ordering. Two
//! independent modes exist: building a race (RACE ... FINISH) and querying
//! (QUERY ... POINT). Each command either applies fully or leaves the log
//! untouched.

use serde::Serialize;
use tracing::{debug, info};

use crate::core::scoring::ScoringMethod;
use crate::core::standings::{StandingsCalculator, StandingsReport};
use crate::data::parser::{parse_line, Command};
use crate::data::race::RaceRecord;
use crate::error::{
    validate_point_multiplier, validate_position, validate_race_id, CommandError,
};
use crate::models::{Competitor, PendingQuery};

/// What a successfully applied command produced
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Human-readable confirmation line
    Status(String),
    /// Standings computed by POINT
    Report(StandingsReport),
    /// Command accepted with nothing to print
    Silent,
    /// Stop reading input
    Stop,
}

/// Receives interpreter output in order
pub trait ReportSink {
    fn status(&mut self, line: &str);
    fn report(&mut self, report: &StandingsReport);
    fn error(&mut self, error: &CommandError);
}

/// Sink that keeps everything in memory
#[derive(Debug, Default)]
pub struct VecSink {
    pub lines: Vec<String>,
    pub reports: Vec<StandingsReport>,
    pub errors: Vec<CommandError>,
}

impl ReportSink for VecSink {
    fn status(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn report(&mut self, report: &StandingsReport) {
        self.lines.extend(report.to_string().lines().map(str::to_string));
        self.reports.push(report.clone());
    }

    fn error(&mut self, error: &CommandError) {
        self.lines.push(error.to_string());
        self.errors.push(error.clone());
    }
}

/// Counters for one run over an input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub lines_read: usize,
    pub applied: usize,
    pub rejected: usize,
}

/// The race database and its command state machine
#[derive(Debug, Default)]
pub struct RaceLog {
    races: Vec<RaceRecord>,
    open_race: Option<usize>,
    pending_query: Option<PendingQuery>,
}

impl RaceLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn races(&self) -> &[RaceRecord] {
        &self.races
    }

    pub fn open_race(&self) -> Option<&RaceRecord> {
        self.open_race.map(|i| &self.races[i])
    }

    pub fn pending_query(&self) -> Option<PendingQuery> {
        self.pending_query
    }

    fn open_race_mut(&mut self, msg: &str) -> Result<&mut RaceRecord, CommandError> {
        match self.open_race {
            Some(i) => Ok(&mut self.races[i]),
            None => Err(CommandError::invalid(msg)),
        }
    }

    /// Start a new race. Fails while another race is still open.
    pub fn race(
        &mut self,
        year: i32,
        location: &str,
        race_id: i32,
        point_multiplier: f64,
    ) -> Result<Outcome, CommandError> {
        if self.open_race.is_some() {
            return Err(CommandError::invalid("The previous RACE was not finished!"));
        }
        validate_race_id(race_id)?;
        validate_point_multiplier(point_multiplier)?;

        self.races.push(RaceRecord::new(
            year,
            location,
            race_id as u32,
            point_multiplier,
        ));
        self.open_race = Some(self.races.len() - 1);
        Ok(Outcome::Status("Race started!".to_string()))
    }

    pub fn result(
        &mut self,
        position: i32,
        name: &str,
        team_name: &str,
    ) -> Result<Outcome, CommandError> {
        let race = self.open_race_mut("RESULT must be after RACE command!")?;
        validate_position(position)?;

        race.add_result(position as u32, Competitor::new(name, team_name));
        Ok(Outcome::Status(format!(
            "#{} {} ({}) added!",
            position, name, team_name
        )))
    }

    pub fn fastest(&mut self, name: &str, team_name: &str) -> Result<Outcome, CommandError> {
        let race = self.open_race_mut("FASTEST must be after RACE command!")?;
        let holder = race
            .set_fastest(name, team_name)
            .ok_or_else(|| CommandError::not_found("No participant found!"))?;
        Ok(Outcome::Status(format!("The fastest is: {}!", holder.name)))
    }

    pub fn finish(&mut self) -> Result<Outcome, CommandError> {
        let race = self.open_race_mut("FINISH must be after a RACE command!")?;
        if !race.is_complete() {
            return Err(CommandError::invalid(
                "Before FINISH must be minimum 10 RESULT command!",
            ));
        }
        self.open_race = None;
        Ok(Outcome::Status("Race finished!".to_string()))
    }

    fn check_query(&self, year: i32) -> Result<(), CommandError> {
        if self.pending_query.is_some() {
            return Err(CommandError::invalid(
                "The previous QUERY requires a POINT command! (POINT;CLASSIC/MODERN/NEW/PRESENT)",
            ));
        }
        if !self.races.iter().any(|r| r.year == year) {
            return Err(CommandError::not_found(format!(
                "The given year is not in the database! ({})",
                year
            )));
        }
        Ok(())
    }

    /// Highest race id recorded for `year`
    pub fn max_race_id(&self, year: i32) -> Option<u32> {
        self.races
            .iter()
            .filter(|r| r.year == year)
            .map(|r| r.race_id)
            .max()
    }

    /// Open a standings query for a year, optionally up to a race id
    pub fn query(&mut self, year: i32, race_id: Option<i32>) -> Result<Outcome, CommandError> {
        self.check_query(year)?;

        let cutoff = match race_id {
            None => None,
            Some(id) => {
                validate_race_id(id)?;
                let max = self.max_race_id(year).unwrap_or(0);
                if id as u32 > max {
                    return Err(CommandError::invalid(format!(
                        "The id of the last race is {}!",
                        max
                    )));
                }
                Some(id as u32)
            }
        };

        self.pending_query = Some(PendingQuery {
            year,
            race_id: cutoff,
        });
        Ok(Outcome::Silent)
    }

    /// Resolve the pending query with a scoring method
    pub fn point(&mut self, scoring: ScoringMethod) -> Result<Outcome, CommandError> {
        let query = self
            .pending_query
            .take()
            .ok_or_else(|| CommandError::invalid("POINT must be after QUERY command!"))?;

        let report = StandingsCalculator::new(scoring).report(&self.races, query);
        Ok(Outcome::Report(report))
    }

    /// Apply an already parsed command
    pub fn apply(&mut self, command: Command) -> Result<Outcome, CommandError> {
        match command {
            Command::Race {
                year,
                location,
                race_id,
                point_multiplier,
            } => self.race(year, &location, race_id, point_multiplier),
            Command::Result {
                position,
                name,
                team_name,
            } => self.result(position, &name, &team_name),
            Command::Fastest { name, team_name } => self.fastest(&name, &team_name),
            Command::Finish => self.finish(),
            Command::Query { year, race_id } => self.query(year, race_id),
            Command::Point { scoring } => self.point(scoring),
            Command::Exit => Ok(Outcome::Stop),
        }
    }

    /// Parse and apply one line of input
    pub fn execute_line(&mut self, line: &str) -> Result<Outcome, CommandError> {
        let command = parse_line(line)?;
        debug!("Applying {}", command.name());
        self.apply(command)
    }

    /// Feed lines in order until input ends or an empty line / `EXIT`
    /// stops the run
    pub fn run_lines<I, S>(&mut self, lines: I, sink: &mut dyn ReportSink) -> RunSummary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut summary = RunSummary::default();

        for line in lines {
            let line = line.as_ref();
            summary.lines_read += 1;

            match self.execute_line(line) {
                Ok(Outcome::Stop) => break,
                Ok(outcome) => {
                    summary.applied += 1;
                    match outcome {
                        Outcome::Status(msg) => sink.status(&msg),
                        Outcome::Report(report) => sink.report(&report),
                        Outcome::Silent | Outcome::Stop => {}
                    }
                }
                Err(e) => {
                    summary.rejected += 1;
                    debug!("Rejected {:?}: {}", line, e);
                    sink.error(&e);
                }
            }
        }

        info!(
            "Processed {} lines: {} applied, {} rejected",
            summary.lines_read, summary.applied, summary.rejected
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandErrorKind;

    fn log_with_open_race() -> RaceLog {
        let mut log = RaceLog::new();
        log.race(2021, "Spa", 1, 1.0).unwrap();
        log
    }

    fn fill_results(log: &mut RaceLog, count: i32) {
        for p in 1..=count {
            log.result(p, &format!("Driver {}", p), "Team").unwrap();
        }
    }

    fn finished_log() -> RaceLog {
        let mut log = log_with_open_race();
        fill_results(&mut log, 10);
        log.finish().unwrap();
        log
    }

    #[test]
    fn test_race_opens_record() {
        let log = log_with_open_race();
        assert_eq!(log.races().len(), 1);
        assert_eq!(log.open_race().unwrap().location, "Spa");
    }

    #[test]
    fn test_second_race_rejected_while_open() {
        let mut log = log_with_open_race();
        log.result(1, "A", "T").unwrap();

        let err = log.race(2021, "Monza", 2, 1.0).unwrap_err();
        assert_eq!(err.kind(), CommandErrorKind::InvalidCommand);
        assert_eq!(log.races().len(), 1);
        assert_eq!(log.open_race().unwrap().location, "Spa");
        assert_eq!(log.open_race().unwrap().result_count(), 1);
    }

    #[test]
    fn test_race_validation() {
        let mut log = RaceLog::new();
        assert!(log.race(2021, "Spa", 0, 1.0).is_err());
        assert!(log.race(2021, "Spa", 1, 1.5).is_err());
        assert!(log.races().is_empty());
        assert!(log.open_race().is_none());
    }

    #[test]
    fn test_negative_zero_multiplier_rejected() {
        let mut log = RaceLog::new();
        let err = log.execute_line("RACE;2021;Spa;1;-0").unwrap_err();
        assert_eq!(err.kind(), CommandErrorKind::InvalidCommand);
        assert!(log.races().is_empty());
        assert!(log.execute_line("RACE;2021;Spa;1;0").is_ok());
    }

    #[test]
    fn test_result_requires_open_race() {
        let mut log = RaceLog::new();
        let err = log.result(1, "A", "T").unwrap_err();
        assert_eq!(err.to_string(), "RESULT must be after RACE command!");
    }

    #[test]
    fn test_result_rejects_bad_position() {
        let mut log = log_with_open_race();
        assert!(log.result(0, "A", "T").is_err());
        assert_eq!(log.open_race().unwrap().result_count(), 0);
    }

    #[test]
    fn test_fastest_requires_matching_result() {
        let mut log = log_with_open_race();
        log.result(1, "A", "T").unwrap();

        let err = log.fastest("A", "Other").unwrap_err();
        assert_eq!(err.kind(), CommandErrorKind::NotFound);

        let outcome = log.fastest("A", "T").unwrap();
        assert_eq!(outcome, Outcome::Status("The fastest is: A!".to_string()));
    }

    #[test]
    fn test_finish_needs_ten_results() {
        let mut log = log_with_open_race();
        fill_results(&mut log, 9);

        assert!(log.finish().is_err());
        assert!(log.open_race().is_some());
        assert!(log.result(10, "Driver 10", "Team").is_ok());
        assert!(log.finish().is_ok());
        assert!(log.open_race().is_none());
    }

    #[test]
    fn test_finished_race_is_sealed() {
        let mut log = finished_log();
        assert!(log.result(11, "Late", "Team").is_err());
        assert!(log.fastest("Driver 1", "Team").is_err());
        assert!(log.finish().is_err());
        assert_eq!(log.races()[0].result_count(), 10);
    }

    #[test]
    fn test_query_unknown_year() {
        let mut log = finished_log();
        let err = log.query(1999, None).unwrap_err();
        assert_eq!(err.kind(), CommandErrorKind::NotFound);
        assert!(log.pending_query().is_none());
    }

    #[test]
    fn test_query_cutoff_bounds() {
        let mut log = finished_log();

        let err = log.query(2021, Some(0)).unwrap_err();
        assert_eq!(err.kind(), CommandErrorKind::InvalidCommand);

        let err = log.query(2021, Some(2)).unwrap_err();
        assert_eq!(err.kind(), CommandErrorKind::InvalidCommand);
        assert_eq!(err.to_string(), "The id of the last race is 1!");

        assert!(log.query(2021, Some(1)).is_ok());
    }

    #[test]
    fn test_query_blocked_until_point() {
        let mut log = finished_log();
        log.query(2021, None).unwrap();
        assert!(log.query(2021, None).is_err());

        let outcome = log.point(ScoringMethod::Modern).unwrap();
        assert!(matches!(outcome, Outcome::Report(_)));
        assert!(log.pending_query().is_none());
        assert!(log.query(2021, None).is_ok());
    }

    #[test]
    fn test_point_requires_query() {
        let mut log = finished_log();
        let err = log.point(ScoringMethod::New).unwrap_err();
        assert_eq!(err.to_string(), "POINT must be after QUERY command!");
    }

    #[test]
    fn test_bad_scoring_keeps_query_pending() {
        let mut log = finished_log();
        log.query(2021, None).unwrap();
        assert!(log.execute_line("POINT;LEGACY").is_err());
        assert!(log.pending_query().is_some());
    }

    #[test]
    fn test_query_includes_open_race() {
        let mut log = log_with_open_race();
        log.result(1, "A", "T").unwrap();
        log.query(2021, None).unwrap();

        match log.point(ScoringMethod::Classic).unwrap() {
            Outcome::Report(report) => assert_eq!(report.points_of("A"), Some(10.0)),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_run_lines_stops_at_exit() {
        let mut log = RaceLog::new();
        let mut sink = VecSink::default();
        let summary = log.run_lines(
            ["RACE;2021;Spa;1;1", "EXIT", "RESULT;1;A;T"],
            &mut sink,
        );

        assert_eq!(summary.lines_read, 2);
        assert_eq!(summary.applied, 1);
        assert_eq!(log.open_race().unwrap().result_count(), 0);
        assert_eq!(sink.lines, vec!["Race started!".to_string()]);
    }

    #[test]
    fn test_run_lines_continues_after_error() {
        let mut log = RaceLog::new();
        let mut sink = VecSink::default();
        let summary = log.run_lines(
            ["FINISH", "RACE;2021;Spa;one;1", "RACE;2021;Spa;1;1"],
            &mut sink,
        );

        assert_eq!(summary.rejected, 2);
        assert_eq!(summary.applied, 1);
        assert_eq!(sink.errors[0].kind(), CommandErrorKind::InvalidCommand);
        assert_eq!(sink.errors[1].kind(), CommandErrorKind::MalformedArguments);
        assert!(log.open_race().is_some());
    }
}
