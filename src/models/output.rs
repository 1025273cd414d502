//! Output models used for printing and JSON serialization.

use serde::Serialize;

use crate::cli::types::position::Position;
use crate::league::UsedPlayer;

/// One row of a standings table.
#[derive(Debug, Serialize)]
pub struct TeamStanding {
    /// 1-based rank after sorting.
    pub rank: usize,
    pub team: String,
    pub owner: String,
    /// Period total with any playoff multiplier already applied.
    pub points: f64,
}

/// Full standings payload for one reporting period.
#[derive(Debug, Serialize)]
pub struct StandingsReport {
    pub title: String,
    /// Multiplier applied to the period's weeks (1.5 for playoff views).
    pub multiplier: f64,
    pub standings: Vec<TeamStanding>,
}

/// One row of the live scoreboard.
#[derive(Debug, Serialize)]
pub struct ScoreboardRow {
    pub rank: usize,
    pub team: String,
    pub owner: String,
    pub current_score: f64,
    pub projected_score: f64,
    pub players_remaining: u8,
    pub is_live: bool,
    pub game_status: String,
}

/// A top scorer for the week.
#[derive(Debug, Serialize)]
pub struct LeaderRow {
    pub rank: usize,
    pub name: String,
    pub position: Position,
    pub team: String,
    pub points: f64,
    pub owner: String,
}

/// Per-team used-player summary.
#[derive(Debug, Serialize)]
pub struct TeamUsageReport {
    pub team: String,
    pub owner: String,
    pub players_used: usize,
    pub used_players: Vec<UsedPlayer>,
}

/// Result of a slot eligibility check.
#[derive(Debug, Serialize)]
pub struct SlotCheck {
    pub slot: String,
    pub position: String,
    pub allowed: bool,
    pub eligible_positions: Vec<Position>,
}
