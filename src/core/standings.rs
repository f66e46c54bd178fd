//! Championship standings calculation
//!
//! Totals are keyed by competitor name only, so a driver who changes team
//! mid-season keeps a single line in the table.
//!
//! The first time a name is seen it is registered with the points from that
//! result, or with 0 if the position is outside the top ten. After that only
//! top-ten finishes add to the total. This mirrors the historic scoring tool
//! and is kept as-is; a first appearance outside the points does not lose
//! anything, it only guarantees the name is listed.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use super::scoring::ScoringMethod;
use crate::data::race::RaceRecord;
use crate::models::{Competitor, PendingQuery, Standing};

/// Separator printed above and below a standings table
pub const BANNER: &str = "---------------------------------------------";

/// Computes points tables from finished races
#[derive(Debug, Clone, Copy)]
pub struct StandingsCalculator {
    method: ScoringMethod,
}

impl StandingsCalculator {
    pub fn new(method: ScoringMethod) -> Self {
        Self { method }
    }

    pub fn method(&self) -> ScoringMethod {
        self.method
    }

    /// Points awarded for one result, including any fastest-lap bonus,
    /// scaled by the race multiplier
    pub fn result_points(
        &self,
        race: &RaceRecord,
        position: u32,
        competitor: &Competitor,
    ) -> Option<f64> {
        let base = self.method.points_for(position)?;
        let bonus = match race.fastest() {
            Some(fastest)
                if self.method.awards_fastest_lap() && fastest.name == competitor.name =>
            {
                1.0
            }
            _ => 0.0,
        };
        Some(race.point_multiplier * (base as f64 + bonus))
    }

    /// Rank competitors for `year`, optionally only counting races with
    /// `race_id <= cutoff`.
    ///
    /// Sorted by points descending. Ties keep first-seen order, which is
    /// deterministic for a given input but otherwise unspecified.
    pub fn compute(&self, races: &[RaceRecord], year: i32, cutoff: Option<u32>) -> Vec<Standing> {
        let mut table: Vec<Standing> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        let filtered = races
            .iter()
            .filter(|r| r.year == year && cutoff.map_or(true, |c| r.race_id <= c));

        for race in filtered {
            for (position, competitor) in race.iter_results() {
                let points = self.result_points(race, position, competitor);
                match index.get(&competitor.name) {
                    Some(&i) => {
                        if let Some(p) = points {
                            table[i].points += p;
                        }
                    }
                    None => {
                        index.insert(competitor.name.clone(), table.len());
                        table.push(Standing {
                            name: competitor.name.clone(),
                            points: points.unwrap_or(0.0),
                        });
                    }
                }
            }
        }

        table.sort_by(|a, b| b.points.total_cmp(&a.points));
        table
    }

    /// Compute and wrap the result for display
    pub fn report(&self, races: &[RaceRecord], query: PendingQuery) -> StandingsReport {
        StandingsReport {
            year: query.year,
            race_id: query.race_id,
            scoring: self.method,
            standings: self.compute(races, query.year, query.race_id),
        }
    }
}

/// A computed standings table together with the query that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsReport {
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race_id: Option<u32>,
    pub scoring: ScoringMethod,
    pub standings: Vec<Standing>,
}

impl StandingsReport {
    pub fn title(&self) -> String {
        match self.race_id {
            Some(id) => format!("The {} F1 standings after race {}:", self.year, id),
            None => format!("The {} F1 standings:", self.year),
        }
    }

    pub fn points_of(&self, name: &str) -> Option<f64> {
        self.standings
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.points)
    }
}

impl fmt::Display for StandingsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title())?;
        writeln!(f, "{}", BANNER)?;
        for s in &self.standings {
            writeln!(f, "{} - {:.1}", s.name, s.points)?;
        }
        write!(f, "{}", BANNER)
    }
}
