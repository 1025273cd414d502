//! Live scores command implementation.

use crate::league::demo::{demo_scoreboard, demo_weekly_leaders};
use crate::models::output::{LeaderRow, ScoreboardRow};
use crate::Result;
use serde::Serialize;

/// Live scores payload: scoreboard plus the week's top scorers.
#[derive(Debug, Serialize)]
pub struct ScoresReport {
    pub games_live: usize,
    pub scoreboard: Vec<ScoreboardRow>,
    pub weekly_leaders: Vec<LeaderRow>,
}

/// Build the live scores report from the demo feed.
pub fn build_scores() -> ScoresReport {
    let mut teams = demo_scoreboard();
    teams.sort_by(|a, b| b.current_score.total_cmp(&a.current_score));

    let games_live = teams.iter().filter(|t| t.is_live).count();
    let scoreboard = teams
        .into_iter()
        .enumerate()
        .map(|(i, t)| ScoreboardRow {
            rank: i + 1,
            team: t.team,
            owner: t.owner,
            current_score: t.current_score,
            projected_score: t.projected_score,
            players_remaining: t.players_remaining,
            is_live: t.is_live,
            game_status: t.game_status,
        })
        .collect();

    let weekly_leaders = demo_weekly_leaders()
        .into_iter()
        .enumerate()
        .map(|(i, leader)| LeaderRow {
            rank: i + 1,
            name: leader.name,
            position: leader.position,
            team: leader.team,
            points: leader.points,
            owner: leader.owner,
        })
        .collect();

    ScoresReport {
        games_live,
        scoreboard,
        weekly_leaders,
    }
}

/// Handle the scores command.
pub fn handle_scores(as_json: bool) -> Result<()> {
    let report = build_scores();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Live Scores ({} games live)", report.games_live);
    for row in &report.scoreboard {
        let status = if row.is_live { "LIVE" } else { "Final" };
        println!(
            "{:>2}. {:<16} {:<8} {:>6.1} (proj {:.1}) {:>2} left  {} - {}",
            row.rank,
            row.team,
            row.owner,
            row.current_score,
            row.projected_score,
            row.players_remaining,
            status,
            row.game_status
        );
    }

    println!();
    println!("Weekly Leaders");
    for leader in &report.weekly_leaders {
        println!(
            "{:>2}. {:<22} {} - {}  {:>5.1}  ({})",
            leader.rank, leader.name, leader.position, leader.team, leader.points, leader.owner
        );
    }

    Ok(())
}
