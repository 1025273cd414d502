//! Used-player tracking.
//!
//! League rule: each player can be started only once during the regular
//! season (weeks 1-17). The pool resets completely for the playoffs, so
//! playoff usage is tracked independently of regular-season usage.

use crate::cli::types::{ids::PlayerId, position::Position, time::Week};
use crate::error::LeagueError;
use crate::league::UsedPlayer;
use crate::Result;

/// Caller-owned session object enforcing the one-use-per-player rule.
///
/// The ledger holds two independent pools: regular season (weeks 1-17) and
/// playoffs (weeks 18-20). Recording a player twice in the same pool fails;
/// a player burned in the regular season becomes available again once the
/// playoffs start.
#[derive(Debug, Clone, Default)]
pub struct UsageLedger {
    regular_season: Vec<UsedPlayer>,
    playoffs: Vec<UsedPlayer>,
}

impl UsageLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn pool(&self, week: Week) -> &Vec<UsedPlayer> {
        if week.is_playoff() {
            &self.playoffs
        } else {
            &self.regular_season
        }
    }

    /// Record a player as consumed for the given week.
    ///
    /// Fails with [`LeagueError::OutOfRangeWeek`] for weeks outside 1-20 and
    /// [`LeagueError::PlayerAlreadyUsed`] when the player is already in the
    /// pool covering that week. On failure the ledger is unchanged.
    pub fn record(
        &mut self,
        player_id: PlayerId,
        name: &str,
        position: Position,
        week: Week,
        points: f64,
    ) -> Result<()> {
        let week = week.checked()?;
        if let Some(prior) = self.pool(week).iter().find(|u| u.player_id == player_id) {
            return Err(LeagueError::PlayerAlreadyUsed {
                name: prior.name.clone(),
                week: prior.week_used.as_u16(),
            });
        }
        let record = UsedPlayer {
            player_id,
            name: name.to_string(),
            position,
            week_used: week,
            points,
        };
        if week.is_playoff() {
            self.playoffs.push(record);
        } else {
            self.regular_season.push(record);
        }
        Ok(())
    }

    /// Advisory check: could this player still be started in the given week?
    ///
    /// Returns false for weeks outside the calendar.
    pub fn is_available(&self, player_id: PlayerId, week: Week) -> bool {
        week.in_calendar() && !self.pool(week).iter().any(|u| u.player_id == player_id)
    }

    /// Regular-season usage records, in recording order.
    pub fn regular_season(&self) -> &[UsedPlayer] {
        &self.regular_season
    }

    /// Playoff usage records, in recording order.
    pub fn playoffs(&self) -> &[UsedPlayer] {
        &self.playoffs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ledger: &mut UsageLedger, id: u64, week: u16) -> Result<()> {
        ledger.record(
            PlayerId::new(id),
            "Josh Allen",
            Position::QB,
            Week::new(week),
            24.5,
        )
    }

    #[test]
    fn test_single_use_in_regular_season() {
        let mut ledger = UsageLedger::new();
        record(&mut ledger, 1, 1).unwrap();

        let err = record(&mut ledger, 1, 5).unwrap_err();
        match err {
            LeagueError::PlayerAlreadyUsed { week, .. } => assert_eq!(week, 1),
            other => panic!("Expected PlayerAlreadyUsed, got {other:?}"),
        }
        assert_eq!(ledger.regular_season().len(), 1);
    }

    #[test]
    fn test_playoff_pool_resets() {
        let mut ledger = UsageLedger::new();
        record(&mut ledger, 1, 3).unwrap();

        // Burned in the regular season, but the playoff pool is independent.
        assert!(ledger.is_available(PlayerId::new(1), Week::new(18)));
        record(&mut ledger, 1, 18).unwrap();
        assert!(!ledger.is_available(PlayerId::new(1), Week::new(19)));
        assert!(record(&mut ledger, 1, 19).is_err());

        assert_eq!(ledger.regular_season().len(), 1);
        assert_eq!(ledger.playoffs().len(), 1);
    }

    #[test]
    fn test_out_of_calendar_week_rejected() {
        let mut ledger = UsageLedger::new();
        assert!(matches!(
            record(&mut ledger, 1, 0),
            Err(LeagueError::OutOfRangeWeek { week: 0 })
        ));
        assert!(matches!(
            record(&mut ledger, 1, 21),
            Err(LeagueError::OutOfRangeWeek { week: 21 })
        ));
        assert!(ledger.regular_season().is_empty());
        assert!(!ledger.is_available(PlayerId::new(1), Week::new(21)));
    }
}
