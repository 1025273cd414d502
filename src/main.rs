//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use woodhead_ffl::{
    cli::{Commands, Woodhead},
    commands::{
        lineup::handle_lineup, scores::handle_scores, standings::handle_standings,
        used_players::handle_used_players,
    },
    Result,
};

/// Run the CLI.
fn main() -> Result<()> {
    let app = Woodhead::parse();

    match app.command {
        Commands::Standings {
            source,
            view,
            week,
            json,
        } => handle_standings(source.league_file.as_deref(), view, week, json)?,

        Commands::Scores { json } => handle_scores(json)?,

        Commands::UsedPlayers { source, json } => {
            handle_used_players(source.league_file.as_deref(), json)?
        }

        Commands::Lineup { slot, position } => handle_lineup(slot, position)?,
    }

    Ok(())
}
