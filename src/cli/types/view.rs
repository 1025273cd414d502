//! Standings view selection for CLI commands.

use crate::cli::types::time::Week;
use crate::scoring::ReportingPeriod;
use crate::Result;
use std::fmt;

/// Which standings view to show.
///
/// Mirrors the tabs of the standings screen; `Week` needs a `--week` number
/// alongside it (defaults to the league's current week).
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StandingsView {
    /// Full calendar with the 1.5x playoff multiplier applied.
    Overall,
    /// Regular season only (weeks 1-17).
    Season,
    /// A single week; pair with `--week`.
    Week,
    /// Weeks 1-5.
    Round1,
    /// Weeks 6-9.
    Round2,
    /// Weeks 10-13.
    Round3,
    /// Weeks 14-17.
    Round4,
    /// Week 18 at 1.5x.
    Playoff1,
    /// Week 19 at 1.5x.
    Playoff2,
    /// Week 20 at 1.5x.
    Playoff3,
    /// All three playoff weeks at 1.5x.
    Playoffs,
}

impl StandingsView {
    /// Resolve the view into a reporting period.
    ///
    /// Only the `Week` view consumes the week argument; it is validated
    /// against the 1-20 calendar here.
    pub fn to_period(self, week: Week) -> Result<ReportingPeriod> {
        Ok(match self {
            StandingsView::Overall => ReportingPeriod::Overall,
            StandingsView::Season => ReportingPeriod::Season,
            StandingsView::Week => ReportingPeriod::single_week(week)?,
            StandingsView::Round1 => ReportingPeriod::Round1,
            StandingsView::Round2 => ReportingPeriod::Round2,
            StandingsView::Round3 => ReportingPeriod::Round3,
            StandingsView::Round4 => ReportingPeriod::Round4,
            StandingsView::Playoff1 => ReportingPeriod::Playoff1,
            StandingsView::Playoff2 => ReportingPeriod::Playoff2,
            StandingsView::Playoff3 => ReportingPeriod::Playoff3,
            StandingsView::Playoffs => ReportingPeriod::Playoffs,
        })
    }
}

impl fmt::Display for StandingsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StandingsView::Overall => "overall",
            StandingsView::Season => "season",
            StandingsView::Week => "week",
            StandingsView::Round1 => "round1",
            StandingsView::Round2 => "round2",
            StandingsView::Round3 => "round3",
            StandingsView::Round4 => "round4",
            StandingsView::Playoff1 => "playoff1",
            StandingsView::Playoff2 => "playoff2",
            StandingsView::Playoff3 => "playoff3",
            StandingsView::Playoffs => "playoffs",
        };
        write!(f, "{}", s)
    }
}
