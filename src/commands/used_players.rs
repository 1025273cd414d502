//! Used players command implementation.

use crate::models::output::TeamUsageReport;
use crate::scoring::{usage_count, used_players_report};
use crate::Result;
use std::path::Path;

use super::load_league;

/// Build per-team usage reports for a league snapshot.
pub fn build_usage_reports(league_file: Option<&Path>) -> Result<Vec<TeamUsageReport>> {
    let league = load_league(league_file)?;
    Ok(league
        .teams
        .iter()
        .map(|team| TeamUsageReport {
            team: team.name.clone(),
            owner: team.owner.clone(),
            players_used: usage_count(team),
            used_players: used_players_report(team).to_vec(),
        })
        .collect())
}

/// Handle the used-players command.
pub fn handle_used_players(league_file: Option<&Path>, as_json: bool) -> Result<()> {
    let reports = build_usage_reports(league_file)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in &reports {
        println!(
            "{} (owner: {}) - {} players used",
            report.team, report.owner, report.players_used
        );
        if report.used_players.is_empty() {
            println!("   no players used yet this season");
        }
        for used in &report.used_players {
            println!(
                "   {} {:<22} week {:>2}  {:>5.1} pts",
                used.position, used.name, used.week_used, used.points
            );
        }
    }

    Ok(())
}
