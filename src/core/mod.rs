//! Scoring tables and standings calculation

pub mod scoring;
pub mod standings;

// Re-export commonly used types
pub use scoring::{ScoringMethod, SCORING_POSITIONS};
pub use standings::{StandingsCalculator, StandingsReport, BANNER};
