//! Standings command implementation.

use crate::cli::types::{time::Week, view::StandingsView};
use crate::models::output::{StandingsReport, TeamStanding};
use crate::scoring::rank_teams;
use crate::Result;
use std::path::Path;

use super::load_league;

/// Build the standings report for a view over a league snapshot.
pub fn build_standings(
    league_file: Option<&Path>,
    view: StandingsView,
    week: Option<Week>,
) -> Result<StandingsReport> {
    let league = load_league(league_file)?;
    let week = week.unwrap_or(league.current_week);
    let period = view.to_period(week)?;

    let standings = rank_teams(&league.teams, period)
        .into_iter()
        .enumerate()
        .map(|(i, (team, points))| TeamStanding {
            rank: i + 1,
            team: team.name.clone(),
            owner: team.owner.clone(),
            points,
        })
        .collect();

    Ok(StandingsReport {
        title: period.title(),
        multiplier: period.multiplier(),
        standings,
    })
}

/// Handle the standings command.
pub fn handle_standings(
    league_file: Option<&Path>,
    view: StandingsView,
    week: Option<Week>,
    as_json: bool,
) -> Result<()> {
    let report = build_standings(league_file, view, week)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.title);
    if report.multiplier > 1.0 {
        println!("(playoff weeks score {:.1}x)", report.multiplier);
    }
    for row in &report.standings {
        println!(
            "{:>2}. {:<20} {:<10} {:>8.1}",
            row.rank, row.team, row.owner, row.points
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_overall_standings_ordering() {
        let report = build_standings(None, StandingsView::Overall, None).unwrap();
        assert_eq!(report.title, "Overall Standings");
        assert_eq!(report.standings.len(), 4);
        // Descending point order, ranks starting at 1.
        for pair in report.standings.windows(2) {
            assert!(pair[0].points >= pair[1].points);
        }
        assert_eq!(report.standings[0].rank, 1);
    }

    #[test]
    fn test_week_view_uses_current_week_by_default() {
        // Demo league is in week 3; Team Alpha scored 134.2 then.
        let report = build_standings(None, StandingsView::Week, None).unwrap();
        assert_eq!(report.title, "Week 3 Standings");
        let alpha = report
            .standings
            .iter()
            .find(|row| row.team == "Team Alpha")
            .unwrap();
        assert!((alpha.points - 134.2).abs() < 1e-9);
    }

    #[test]
    fn test_week_view_rejects_out_of_calendar_week() {
        let result = build_standings(None, StandingsView::Week, Some(Week::new(21)));
        assert!(result.is_err());
    }

    #[test]
    fn test_playoff_view_reports_multiplier() {
        let report = build_standings(None, StandingsView::Playoff1, None).unwrap();
        assert_eq!(report.multiplier, 1.5);
        // Demo teams have no week-18 scores yet.
        assert!(report.standings.iter().all(|row| row.points == 0.0));
    }
}
