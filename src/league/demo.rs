//! Bundled demo league data.
//!
//! Stands in for a real data source so the CLI works out of the box; pass
//! `--league-file` to any command to use a real snapshot instead.

use super::{League, Player, Team, UsedPlayer};
use crate::cli::types::{
    ids::{PlayerId, TeamId},
    position::Position,
    time::Week,
};

fn player(
    id: u64,
    name: &str,
    position: Position,
    team: &str,
    projected_points: f64,
    is_injured: bool,
    bye_week: u16,
) -> Player {
    Player {
        id: PlayerId::new(id),
        name: name.to_string(),
        position,
        team: team.to_string(),
        projected_points,
        actual_points: None,
        is_injured,
        injury_status: None,
        bye_week: Week::new(bye_week),
        used_in_week: None,
        game_time: None,
    }
}

/// The demo player pool.
pub fn demo_players() -> Vec<Player> {
    vec![
        player(1, "Josh Allen", Position::QB, "BUF", 24.5, false, 12),
        player(2, "Christian McCaffrey", Position::RB, "SF", 20.8, false, 9),
        player(3, "Cooper Kupp", Position::WR, "LAR", 18.9, false, 6),
        player(4, "Travis Kelce", Position::TE, "KC", 16.2, false, 10),
        player(5, "Nick Chubb", Position::RB, "CLE", 16.8, true, 5),
        player(6, "Tyreek Hill", Position::WR, "MIA", 18.1, false, 6),
        player(7, "Lamar Jackson", Position::QB, "BAL", 23.8, false, 14),
        player(8, "Austin Ekeler", Position::RB, "LAC", 18.5, false, 5),
    ]
}

fn used(id: u64, name: &str, position: Position, week: u16, points: f64) -> UsedPlayer {
    UsedPlayer {
        player_id: PlayerId::new(id),
        name: name.to_string(),
        position,
        week_used: Week::new(week),
        points,
    }
}

/// The demo league: four teams, three weeks into the season.
pub fn demo_league() -> League {
    League {
        name: "Woodhead League".to_string(),
        current_week: Week::new(3),
        teams: vec![
            Team {
                id: TeamId::new(1),
                name: "Team Alpha".to_string(),
                owner: "Troy".to_string(),
                weekly_points: vec![
                    112.4, 98.6, 134.2, 89.7, 127.3, 156.1, 91.8, 143.9, 108.2, 125.7, 159.9,
                    142.3, 167.8, 134.5, 189.2, 201.4, 178.6,
                ],
                used_players: vec![
                    used(1, "Josh Allen", Position::QB, 1, 24.5),
                    used(2, "Christian McCaffrey", Position::RB, 1, 20.8),
                    used(3, "Cooper Kupp", Position::WR, 1, 18.9),
                    used(4, "Travis Kelce", Position::TE, 1, 16.2),
                    used(8, "Austin Ekeler", Position::RB, 1, 18.5),
                ],
            },
            Team {
                id: TeamId::new(2),
                name: "Thunder Bolts".to_string(),
                owner: "Alex".to_string(),
                weekly_points: vec![
                    98.2, 145.7, 87.3, 132.6, 109.8, 142.1, 95.4, 167.2, 124.5, 95.6, 134.7,
                    156.9, 178.4, 145.2, 198.7, 167.3, 189.1,
                ],
                used_players: vec![
                    used(9, "Patrick Mahomes", Position::QB, 1, 23.2),
                    used(10, "Derrick Henry", Position::RB, 1, 17.2),
                ],
            },
            Team {
                id: TeamId::new(3),
                name: "Grid Gladiators".to_string(),
                owner: "Sam".to_string(),
                weekly_points: vec![
                    134.5, 89.2, 167.8, 92.1, 145.6, 87.4, 156.3, 98.7, 142.8, 142.5, 167.9,
                    134.2, 145.6, 178.9, 156.4, 189.7, 167.2,
                ],
                used_players: vec![],
            },
            Team {
                id: TeamId::new(4),
                name: "End Zone Elite".to_string(),
                owner: "Jordan".to_string(),
                weekly_points: vec![
                    87.6, 156.9, 94.2, 142.7, 89.5, 167.1, 92.8, 134.6, 87.4, 136.5, 145.8,
                    123.4, 189.2, 156.7, 134.9, 178.3, 145.6,
                ],
                used_players: vec![],
            },
        ],
    }
}

/// One row of the live scoreboard.
#[derive(Debug, Clone)]
pub struct LiveTeamScore {
    pub team: String,
    pub owner: String,
    pub current_score: f64,
    pub projected_score: f64,
    pub players_remaining: u8,
    pub is_live: bool,
    pub game_status: String,
}

fn live(
    team: &str,
    owner: &str,
    current_score: f64,
    projected_score: f64,
    players_remaining: u8,
    is_live: bool,
    game_status: &str,
) -> LiveTeamScore {
    LiveTeamScore {
        team: team.to_string(),
        owner: owner.to_string(),
        current_score,
        projected_score,
        players_remaining,
        is_live,
        game_status: game_status.to_string(),
    }
}

/// The demo live scoreboard for the current week.
pub fn demo_scoreboard() -> Vec<LiveTeamScore> {
    vec![
        live("Troy's Team", "Troy", 87.2, 94.3, 2, true, "2:34 left in 4th"),
        live("Mike's Squad", "Mike", 92.7, 98.1, 1, true, "2:34 left in 4th"),
        live("Dynasty Kings", "Sam", 156.8, 162.4, 0, false, "Final"),
        live("Thunder Bolts", "Alex", 142.3, 145.7, 0, false, "Final"),
        live("Grid Gladiators", "Jordan", 78.9, 85.2, 3, true, "1:15 left in 3rd"),
        live("End Zone Elite", "Chris", 134.6, 139.8, 1, true, "5:42 left in 4th"),
    ]
}

/// A weekly leader entry: player, points, and owning team.
#[derive(Debug, Clone)]
pub struct WeeklyLeader {
    pub name: String,
    pub position: Position,
    pub team: String,
    pub points: f64,
    pub owner: String,
}

/// Top scorers for the current week, highest first.
pub fn demo_weekly_leaders() -> Vec<WeeklyLeader> {
    let leader = |name: &str, position, team: &str, points, owner: &str| WeeklyLeader {
        name: name.to_string(),
        position,
        team: team.to_string(),
        points,
        owner: owner.to_string(),
    };
    vec![
        leader("Josh Allen", Position::QB, "BUF", 28.7, "Troy's Team"),
        leader("Christian McCaffrey", Position::RB, "SF", 26.4, "Mike's Squad"),
        leader("Cooper Kupp", Position::WR, "LAR", 24.8, "Dynasty Kings"),
        leader("Travis Kelce", Position::TE, "KC", 22.1, "Thunder Bolts"),
        leader("Austin Ekeler", Position::RB, "LAC", 20.9, "Grid Gladiators"),
    ]
}
