//! Championship scoring tables
//!
//! Each method maps finishing positions 1-10 to points. Positions 11 and
//! below score nothing. `PRESENT` additionally awards one point for the
//! fastest lap.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommandError;

/// Number of scoring positions
pub const SCORING_POSITIONS: usize = 10;

const CLASSIC_POINTS: [u32; SCORING_POSITIONS] = [10, 6, 4, 3, 2, 1, 0, 0, 0, 0];
const MODERN_POINTS: [u32; SCORING_POSITIONS] = [10, 8, 6, 5, 4, 3, 2, 1, 0, 0];
const NEW_POINTS: [u32; SCORING_POSITIONS] = [25, 18, 15, 12, 10, 8, 6, 4, 2, 1];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScoringMethod {
    Classic,
    Modern,
    New,
    Present,
}

impl ScoringMethod {
    pub const ALL: [ScoringMethod; 4] = [
        ScoringMethod::Classic,
        ScoringMethod::Modern,
        ScoringMethod::New,
        ScoringMethod::Present,
    ];

    /// Points for positions 1-10
    pub fn points(&self) -> &'static [u32; SCORING_POSITIONS] {
        match self {
            ScoringMethod::Classic => &CLASSIC_POINTS,
            ScoringMethod::Modern => &MODERN_POINTS,
            ScoringMethod::New | ScoringMethod::Present => &NEW_POINTS,
        }
    }

    /// Points for a 1-based finishing position, `None` outside the top ten
    pub fn points_for(&self, position: u32) -> Option<u32> {
        let idx = (position as usize).checked_sub(1)?;
        self.points().get(idx).copied()
    }

    pub fn awards_fastest_lap(&self) -> bool {
        matches!(self, ScoringMethod::Present)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringMethod::Classic => "CLASSIC",
            ScoringMethod::Modern => "MODERN",
            ScoringMethod::New => "NEW",
            ScoringMethod::Present => "PRESENT",
        }
    }
}

impl fmt::Display for ScoringMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoringMethod {
    type Err = CommandError;

    /// Identifiers are case-sensitive, as written in command files
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScoringMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| CommandError::invalid(format!("Unknown scoring method! ({})", s)))
    }
}
