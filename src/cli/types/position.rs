//! Player position types.

use crate::error::LeagueError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Player positions used by the league.
///
/// The league rosters only the four skill positions; there are no kicker or
/// defense slots in this format.
///
/// # Examples
///
/// ```rust
/// use woodhead_ffl::Position;
///
/// let qb: Position = "qb".parse().unwrap();
/// assert_eq!(qb, Position::QB);
/// assert_eq!(qb.to_string(), "QB");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
}

impl Position {
    /// All positions, in display order.
    pub const ALL: [Position; 4] = [Position::QB, Position::RB, Position::WR, Position::TE];
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = LeagueError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            _ => Err(LeagueError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_string_round_trip() {
        for pos in Position::ALL {
            let parsed: Position = pos.to_string().parse().unwrap();
            assert_eq!(parsed, pos);
        }
    }

    #[test]
    fn test_position_parse_case_insensitive() {
        assert_eq!("wr".parse::<Position>().unwrap(), Position::WR);
        assert_eq!("Te".parse::<Position>().unwrap(), Position::TE);
    }

    #[test]
    fn test_position_parse_rejects_unknown() {
        assert!("K".parse::<Position>().is_err());
        assert!("FLEX".parse::<Position>().is_err());
        assert!("".parse::<Position>().is_err());
    }
}
