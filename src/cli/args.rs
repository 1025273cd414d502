//! CLI argument definitions and parsing structures.

use super::types::{
    position::Position,
    time::Week,
    view::StandingsView,
};
use crate::lineup::SlotId;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// League source arguments shared between commands.
#[derive(Debug, Args)]
pub struct LeagueSource {
    /// Load the league from a JSON snapshot instead of the bundled demo data.
    #[clap(long)]
    pub league_file: Option<PathBuf>,
}

#[derive(Debug, Parser)]
#[clap(name = "woodhead", about = "Woodhead fantasy league CLI")]
pub struct Woodhead {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rank teams by points over a reporting period.
    ///
    /// Playoff views (weeks 18-20) apply the 1.5x multiplier.
    Standings {
        #[clap(flatten)]
        source: LeagueSource,

        /// Which standings view to show.
        #[clap(long, short, value_enum, default_value_t = StandingsView::Overall)]
        view: StandingsView,

        /// Week for the `week` view (defaults to the league's current week).
        #[clap(long, short)]
        week: Option<Week>,

        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },

    /// Show the live scoreboard and the week's top scorers.
    Scores {
        /// Output results as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// Show each team's used-player records and counts.
    UsedPlayers {
        #[clap(flatten)]
        source: LeagueSource,

        /// Output results as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// Inspect lineup slots and check a placement.
    ///
    /// With `--slot` and `--position`, prints whether the placement is legal
    /// and which positions the slot accepts. Without flags, prints the empty
    /// lineup template.
    Lineup {
        /// Slot to check (QB, RB1, RB2, FLEX1, FLEX2).
        #[clap(long, value_parser = clap::value_parser!(SlotId))]
        slot: Option<SlotId>,

        /// Player position to check (QB, RB, WR, TE).
        #[clap(long, short = 'p', value_parser = clap::value_parser!(Position))]
        position: Option<Position>,
    },
}
