//! Woodhead Fantasy League Library
//!
//! The rules core of the Woodhead fantasy football league: lineup slot
//! eligibility, reporting-period scoring with the 1.5x playoff multiplier,
//! and used-player tracking, plus the CLI front end that displays them.
//!
//! ## Features
//!
//! - **Lineup Eligibility**: which positions may fill which roster slots
//!   (flex takes WR/TE only in this league)
//! - **Scoring Periods**: single weeks, four regular-season rounds, three
//!   playoff weeks, combined playoffs, season, and overall totals
//! - **Standings**: stable descending team ranking for any period
//! - **Used Players**: one start per player per regular season, with an
//!   independent playoff pool
//!
//! ## Quick Start
//!
//! ```rust
//! use woodhead_ffl::{aggregate, can_fill_slot, Position, ReportingPeriod, SlotId};
//!
//! // Flex slots take WR or TE, never RB.
//! assert!(can_fill_slot(Position::WR, SlotId::FLEX1));
//! assert!(!can_fill_slot(Position::RB, SlotId::FLEX1));
//!
//! // Playoff weeks score 1.5x.
//! let mut weekly = vec![0.0; 17];
//! weekly.push(100.0); // week 18
//! assert_eq!(aggregate(&weekly, ReportingPeriod::Playoff1), 150.0);
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod league;
pub mod lineup;
pub mod models;
pub mod scoring;

// Re-export commonly used types
pub use cli::types::{
    ids::{PlayerId, TeamId},
    position::Position,
    time::{Week, PLAYOFF_WEEKS, REGULAR_SEASON_WEEKS, TOTAL_WEEKS},
    view::StandingsView,
};
pub use error::{LeagueError, Result};
pub use league::{InjuryStatus, League, Player, Team, UsedPlayer};
pub use lineup::{can_fill_slot, Lineup, LineupSlot, SlotId};
pub use scoring::{
    aggregate, rank_teams, season_total, usage::UsageLedger, usage_count, used_players_report,
    ReportingPeriod, PLAYOFF_MULTIPLIER,
};
