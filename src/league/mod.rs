//! League domain records: players, teams, and the league snapshot.
//!
//! All records are immutable value types owned by the caller; the core never
//! mutates them in place. A [`League`] can be loaded from a JSON snapshot or
//! built from the bundled demo data.

pub mod demo;

use crate::cli::types::{
    ids::{PlayerId, TeamId},
    position::Position,
    time::Week,
};
use crate::error::LeagueError;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Injury designation for a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InjuryStatus {
    Questionable,
    Doubtful,
    Out,
    Probable,
}

impl fmt::Display for InjuryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InjuryStatus::Questionable => "Questionable",
            InjuryStatus::Doubtful => "Doubtful",
            InjuryStatus::Out => "Out",
            InjuryStatus::Probable => "Probable",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for InjuryStatus {
    type Err = LeagueError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "questionable" => Ok(InjuryStatus::Questionable),
            "doubtful" => Ok(InjuryStatus::Doubtful),
            "out" => Ok(InjuryStatus::Out),
            "probable" => Ok(InjuryStatus::Probable),
            _ => Err(LeagueError::InvalidStatus {
                status: s.to_string(),
            }),
        }
    }
}

/// An NFL player as the league sees him.
///
/// Players are value records: state changes (e.g. marking a player used)
/// happen by replacing the record, never by mutating a shared one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    /// NFL team code, e.g. "BUF".
    pub team: String,
    pub projected_points: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_points: Option<f64>,
    pub is_injured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub injury_status: Option<InjuryStatus>,
    pub bye_week: Week,
    /// The week this player was consumed in, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_in_week: Option<Week>,
    /// Display-formatted kickoff or game-clock string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_time: Option<String>,
}

/// A usage record: one player consumed by a team in a given week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsedPlayer {
    pub player_id: PlayerId,
    pub name: String,
    pub position: Position,
    pub week_used: Week,
    pub points: f64,
}

/// A fantasy team: weekly point totals plus its used-player history.
///
/// `weekly_points` is indexed by week (entry 0 = week 1) and may be shorter
/// than the full 20-week calendar; missing future weeks score 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub owner: String,
    pub weekly_points: Vec<f64>,
    #[serde(default)]
    pub used_players: Vec<UsedPlayer>,
}

/// A league snapshot: the team list plus the current week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub name: String,
    pub current_week: Week,
    pub teams: Vec<Team>,
}

impl League {
    /// Load a league snapshot from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let league = serde_json::from_str(&contents)?;
        Ok(league)
    }

    /// True once the current week is past the regular season.
    pub fn is_playoffs(&self) -> bool {
        self.current_week.is_playoff()
    }
}
