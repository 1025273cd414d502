//! Reporting periods and point aggregation.
//!
//! Weekly point totals live on each [`Team`] as a sequence indexed by week
//! (entry 0 = week 1, up to 20 entries). A [`ReportingPeriod`] names a fixed
//! set of weeks and a multiplier; aggregation is a plain sum over that set.
//! Playoff weeks (18-20) count 1.5x, everything else 1.0x.

pub mod usage;

use crate::cli::types::time::{Week, PLAYOFF_WEEKS, REGULAR_SEASON_WEEKS, TOTAL_WEEKS};
use crate::error::LeagueError;
use crate::league::{Team, UsedPlayer};
use crate::Result;
use std::str::FromStr;


/// Multiplier applied to points scored in playoff weeks.
pub const PLAYOFF_MULTIPLIER: f64 = 1.5;

const ROUND1_WEEKS: [u16; 5] = [1, 2, 3, 4, 5];
const ROUND2_WEEKS: [u16; 4] = [6, 7, 8, 9];
const ROUND3_WEEKS: [u16; 4] = [10, 11, 12, 13];
const ROUND4_WEEKS: [u16; 4] = [14, 15, 16, 17];

/// A named, fixed set of weeks used to aggregate team points for display.
///
/// Periods are a closed set and are matched exhaustively; an unrecognized
/// selector string fails to parse with [`LeagueError::InvalidPeriod`] instead
/// of silently defaulting to a season total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportingPeriod {
    /// A single week (1-20).
    Week(Week),
    /// Weeks 1-5.
    Round1,
    /// Weeks 6-9.
    Round2,
    /// Weeks 10-13.
    Round3,
    /// Weeks 14-17.
    Round4,
    /// Week 18, at 1.5x.
    Playoff1,
    /// Week 19, at 1.5x.
    Playoff2,
    /// Week 20, at 1.5x.
    Playoff3,
    /// Weeks 18-20 combined, at 1.5x.
    Playoffs,
    /// Regular season, weeks 1-17.
    Season,
    /// Full calendar: weeks 1-17 at 1.0x plus weeks 18-20 at 1.5x.
    Overall,
}

impl ReportingPeriod {
    /// Build a single-week period, validating the week number.
    pub fn single_week(week: Week) -> Result<Self> {
        Ok(ReportingPeriod::Week(week.checked()?))
    }

    /// The week numbers this period covers, in ascending order.
    pub fn weeks(&self) -> Vec<u16> {
        match self {
            ReportingPeriod::Week(w) => vec![w.as_u16()],
            ReportingPeriod::Round1 => ROUND1_WEEKS.to_vec(),
            ReportingPeriod::Round2 => ROUND2_WEEKS.to_vec(),
            ReportingPeriod::Round3 => ROUND3_WEEKS.to_vec(),
            ReportingPeriod::Round4 => ROUND4_WEEKS.to_vec(),
            ReportingPeriod::Playoff1 => vec![PLAYOFF_WEEKS[0]],
            ReportingPeriod::Playoff2 => vec![PLAYOFF_WEEKS[1]],
            ReportingPeriod::Playoff3 => vec![PLAYOFF_WEEKS[2]],
            ReportingPeriod::Playoffs => PLAYOFF_WEEKS.to_vec(),
            ReportingPeriod::Season => (1..=REGULAR_SEASON_WEEKS).collect(),
            ReportingPeriod::Overall => (1..=TOTAL_WEEKS).collect(),
        }
    }

    /// The point multiplier for this period.
    ///
    /// 1.5 for any playoff period, 1.0 for everything else. `Overall` mixes
    /// both multipliers internally, so it reports 1.0 here and is handled
    /// specially by [`aggregate`].
    pub fn multiplier(&self) -> f64 {
        match self {
            ReportingPeriod::Playoff1
            | ReportingPeriod::Playoff2
            | ReportingPeriod::Playoff3
            | ReportingPeriod::Playoffs => PLAYOFF_MULTIPLIER,
            _ => 1.0,
        }
    }

    /// Human-readable title for standings display.
    pub fn title(&self) -> String {
        match self {
            ReportingPeriod::Week(w) => format!("Week {} Standings", w),
            ReportingPeriod::Round1 => "Round 1 Standings (Weeks 1-5)".to_string(),
            ReportingPeriod::Round2 => "Round 2 Standings (Weeks 6-9)".to_string(),
            ReportingPeriod::Round3 => "Round 3 Standings (Weeks 10-13)".to_string(),
            ReportingPeriod::Round4 => "Round 4 Standings (Weeks 14-17)".to_string(),
            ReportingPeriod::Playoff1 => "Playoff 1 Standings (Week 18)".to_string(),
            ReportingPeriod::Playoff2 => "Playoff 2 Standings (Week 19)".to_string(),
            ReportingPeriod::Playoff3 => "Playoff 3 Standings (Week 20)".to_string(),
            ReportingPeriod::Playoffs => "Total Playoffs Standings".to_string(),
            ReportingPeriod::Season => "Regular Season Standings".to_string(),
            ReportingPeriod::Overall => "Overall Standings".to_string(),
        }
    }
}

impl FromStr for ReportingPeriod {
    type Err = LeagueError;

    /// Parse the standings view-mode vocabulary: `overall`, `season`,
    /// `round1`..`round4`, `playoff1`..`playoff3`, `playoffs`, or `week<N>`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || LeagueError::InvalidPeriod {
            period: s.to_string(),
        };
        match s.to_lowercase().as_str() {
            "overall" => Ok(ReportingPeriod::Overall),
            "season" => Ok(ReportingPeriod::Season),
            "round1" => Ok(ReportingPeriod::Round1),
            "round2" => Ok(ReportingPeriod::Round2),
            "round3" => Ok(ReportingPeriod::Round3),
            "round4" => Ok(ReportingPeriod::Round4),
            "playoff1" => Ok(ReportingPeriod::Playoff1),
            "playoff2" => Ok(ReportingPeriod::Playoff2),
            "playoff3" => Ok(ReportingPeriod::Playoff3),
            "playoffs" | "playoffstotal" => Ok(ReportingPeriod::Playoffs),
            other => {
                let digits = other.strip_prefix("week").ok_or_else(invalid)?;
                let week: u16 = digits.parse().map_err(|_| invalid())?;
                ReportingPeriod::single_week(Week::new(week))
            }
        }
    }
}

/// Points for a single week, with missing future weeks counting as zero.
fn week_points(weekly_points: &[f64], week: u16) -> f64 {
    debug_assert!((1..=TOTAL_WEEKS).contains(&week), "week {week} out of calendar");
    weekly_points.get(week as usize - 1).copied().unwrap_or(0.0)
}

/// Total points for one team over a reporting period.
///
/// Sums `weekly_points[week - 1] * multiplier` over the period's weeks.
/// Weeks beyond the end of the sequence contribute 0.
pub fn aggregate(weekly_points: &[f64], period: ReportingPeriod) -> f64 {
    match period {
        ReportingPeriod::Overall => season_total(weekly_points),
        _ => {
            let multiplier = period.multiplier();
            period
                .weeks()
                .iter()
                .map(|&week| week_points(weekly_points, week) * multiplier)
                .sum()
        }
    }
}

/// Full-calendar total: regular-season weeks at 1.0x plus playoff weeks at 1.5x.
pub fn season_total(weekly_points: &[f64]) -> f64 {
    let regular: f64 = weekly_points
        .iter()
        .take(REGULAR_SEASON_WEEKS as usize)
        .sum();
    let playoffs: f64 = weekly_points
        .iter()
        .skip(REGULAR_SEASON_WEEKS as usize)
        .take(PLAYOFF_WEEKS.len())
        .map(|points| points * PLAYOFF_MULTIPLIER)
        .sum();
    regular + playoffs
}

/// Rank teams by their point total for a period, highest first.
///
/// The sort is stable, so teams with equal totals keep their input order.
pub fn rank_teams(teams: &[Team], period: ReportingPeriod) -> Vec<(&Team, f64)> {
    let mut ranked: Vec<(&Team, f64)> = teams
        .iter()
        .map(|team| (team, aggregate(&team.weekly_points, period)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

/// The players a team has consumed, in the order they were recorded.
pub fn used_players_report(team: &Team) -> &[UsedPlayer] {
    &team.used_players
}

/// How many players a team has consumed.
pub fn usage_count(team: &Team) -> usize {
    team.used_players.len()
}
