//! Error types for the Woodhead fantasy league core.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LeagueError>;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("{position} cannot fill the {slot} slot")]
    InvalidPlacement { position: String, slot: String },

    #[error("Unrecognized reporting period: {period:?}")]
    InvalidPeriod { period: String },

    #[error("Week {week} is outside the league calendar (1-20)")]
    OutOfRangeWeek { week: u16 },

    #[error("Invalid position: {position:?}")]
    InvalidPosition { position: String },

    #[error("Invalid lineup slot: {slot:?}")]
    InvalidSlot { slot: String },

    #[error("Invalid injury status: {status:?}")]
    InvalidStatus { status: String },

    #[error("{name} already occupies another slot in this lineup")]
    PlayerAlreadySlotted { name: String },

    #[error("{name} was already used in week {week}")]
    PlayerAlreadyUsed { name: String, week: u16 },

    #[error("Failed to parse week number: {0}")]
    InvalidWeek(#[from] std::num::ParseIntError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}
