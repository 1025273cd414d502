//! Command handlers for the Woodhead CLI.

pub mod lineup;
pub mod scores;
pub mod standings;
pub mod used_players;

use crate::league::{demo, League};
use crate::Result;
use std::path::Path;

/// Load the league snapshot a command should operate on.
///
/// A `--league-file` path wins; otherwise the bundled demo league is used.
pub fn load_league(league_file: Option<&Path>) -> Result<League> {
    match league_file {
        Some(path) => League::from_json_file(path),
        None => Ok(demo::demo_league()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_league_defaults_to_demo() {
        let league = load_league(None).unwrap();
        assert_eq!(league.name, "Woodhead League");
        assert_eq!(league.teams.len(), 4);
    }

    #[test]
    fn test_load_league_missing_file_errors() {
        let result = load_league(Some(Path::new("/nonexistent/league.json")));
        assert!(result.is_err());
    }
}
