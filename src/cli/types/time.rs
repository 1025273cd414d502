//! Week numbers and the league calendar.

use crate::error::LeagueError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of regular-season weeks (weeks 1 through 17).
pub const REGULAR_SEASON_WEEKS: u16 = 17;

/// Playoff week numbers. Points scored in these weeks count 1.5x.
pub const PLAYOFF_WEEKS: [u16; 3] = [18, 19, 20];

/// Last valid week number in the league calendar.
pub const TOTAL_WEEKS: u16 = 20;

/// Type-safe wrapper for week numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// True for weeks 18-20.
    pub fn is_playoff(&self) -> bool {
        self.0 > REGULAR_SEASON_WEEKS && self.0 <= TOTAL_WEEKS
    }

    /// True for weeks 1-20.
    pub fn in_calendar(&self) -> bool {
        (1..=TOTAL_WEEKS).contains(&self.0)
    }

    /// Validate that the week falls inside the league calendar.
    pub fn checked(self) -> crate::Result<Self> {
        if self.in_calendar() {
            Ok(self)
        } else {
            Err(LeagueError::OutOfRangeWeek { week: self.0 })
        }
    }
}

impl Default for Week {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = LeagueError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
