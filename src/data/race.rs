//! A single scored race and its finishing order

use serde::Serialize;

use crate::models::Competitor;

/// Minimum number of classified results before a race can be finished
pub const MIN_RESULTS: usize = 10;

/// One race of a season.
///
/// Results keep the order they were first entered in; re-entering a
/// position replaces the competitor in place. The fastest-lap holder is
/// stored as the position key of an existing result.
#[derive(Debug, Clone, Serialize)]
pub struct RaceRecord {
    pub year: i32,
    pub location: String,
    pub race_id: u32,
    pub point_multiplier: f64,
    results: Vec<(u32, Competitor)>,
    fastest: Option<u32>,
}

impl RaceRecord {
    pub fn new(
        year: i32,
        location: impl Into<String>,
        race_id: u32,
        point_multiplier: f64,
    ) -> Self {
        Self {
            year,
            location: location.into(),
            race_id,
            point_multiplier,
            results: Vec::new(),
            fastest: None,
        }
    }

    /// Insert or overwrite the competitor at `position`
    pub fn add_result(&mut self, position: u32, competitor: Competitor) {
        match self.results.iter_mut().find(|(p, _)| *p == position) {
            Some(slot) => {
                if self.fastest == Some(position) && slot.1 != competitor {
                    self.fastest = None;
                }
                slot.1 = competitor;
            }
            None => self.results.push((position, competitor)),
        }
    }

    /// Owned copy of the results, in entry order
    pub fn results(&self) -> Vec<(u32, Competitor)> {
        self.results.clone()
    }

    /// Borrowing iterator over `(position, competitor)` pairs
    pub fn iter_results(&self) -> impl Iterator<Item = (u32, &Competitor)> {
        self.results.iter().map(|(p, c)| (*p, c))
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    pub fn competitor_at(&self, position: u32) -> Option<&Competitor> {
        self.results
            .iter()
            .find(|(p, _)| *p == position)
            .map(|(_, c)| c)
    }

    /// Mark the first result matching name and team as the fastest lap.
    ///
    /// Returns the matched competitor, or `None` if nobody matches.
    pub fn set_fastest(&mut self, name: &str, team_name: &str) -> Option<&Competitor> {
        let (position, competitor) = self
            .results
            .iter()
            .find(|(_, c)| c.matches(name, team_name))?;
        self.fastest = Some(*position);
        Some(competitor)
    }

    pub fn fastest(&self) -> Option<&Competitor> {
        self.fastest.and_then(|p| self.competitor_at(p))
    }

    pub fn is_complete(&self) -> bool {
        self.results.len() >= MIN_RESULTS
    }
}
