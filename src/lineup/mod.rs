//! Lineup slots and placement eligibility.
//!
//! The lineup format is fixed: QB, RB1, RB2, FLEX1, FLEX2. The flex slots
//! take WR or TE only; RB is deliberately excluded from flex (a league rule,
//! not an oversight - do not "fix" it to match typical flex formats).

use crate::cli::types::position::Position;
use crate::error::LeagueError;
use crate::league::Player;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
mod tests;

/// The five roster slots of a weekly lineup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotId {
    QB,
    RB1,
    RB2,
    FLEX1,
    FLEX2,
}

impl SlotId {
    /// All slots, in lineup order.
    pub const ALL: [SlotId; 5] = [
        SlotId::QB,
        SlotId::RB1,
        SlotId::RB2,
        SlotId::FLEX1,
        SlotId::FLEX2,
    ];

    /// The positions this slot accepts, for display and messaging.
    ///
    /// The authoritative placement decision is [`can_fill_slot`]; this
    /// lookup exists so the UI can label slots and explain rejections.
    pub fn eligible_positions(&self) -> &'static [Position] {
        match self {
            SlotId::QB => &[Position::QB],
            SlotId::RB1 | SlotId::RB2 => &[Position::RB],
            SlotId::FLEX1 | SlotId::FLEX2 => &[Position::WR, Position::TE],
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SlotId::QB => "QB",
            SlotId::RB1 => "RB1",
            SlotId::RB2 => "RB2",
            SlotId::FLEX1 => "FLEX1",
            SlotId::FLEX2 => "FLEX2",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SlotId {
    type Err = LeagueError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "QB" => Ok(SlotId::QB),
            "RB1" => Ok(SlotId::RB1),
            "RB2" => Ok(SlotId::RB2),
            "FLEX1" => Ok(SlotId::FLEX1),
            "FLEX2" => Ok(SlotId::FLEX2),
            _ => Err(LeagueError::InvalidSlot {
                slot: s.to_string(),
            }),
        }
    }
}

/// Whether a player position can legally occupy a lineup slot.
///
/// QB slot takes QB only; RB1/RB2 take RB only; FLEX1/FLEX2 take WR or TE.
/// Pure, total, and deterministic.
pub fn can_fill_slot(position: Position, slot: SlotId) -> bool {
    match slot {
        SlotId::QB => position == Position::QB,
        SlotId::RB1 | SlotId::RB2 => position == Position::RB,
        SlotId::FLEX1 | SlotId::FLEX2 => position == Position::WR || position == Position::TE,
    }
}

/// One slot in a lineup: the slot id and its occupant, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupSlot {
    pub id: SlotId,
    pub player: Option<Player>,
}

/// A weekly lineup: the five slots in fixed order.
///
/// This is the caller-owned session state behind a roster-builder screen.
/// Placement goes through [`Lineup::assign`], which enforces eligibility and
/// the one-slot-per-player rule; a rejected assignment leaves the lineup
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lineup {
    slots: [LineupSlot; 5],
}

impl Lineup {
    /// An empty lineup: QB, RB1, RB2, FLEX1, FLEX2, all unfilled.
    pub fn new() -> Self {
        Self {
            slots: SlotId::ALL.map(|id| LineupSlot { id, player: None }),
        }
    }

    fn slot_mut(&mut self, id: SlotId) -> &mut LineupSlot {
        // Slots are stored in SlotId::ALL order.
        &mut self.slots[id as usize]
    }

    /// Place a player into a slot.
    ///
    /// Fails with [`LeagueError::InvalidPlacement`] if the position is not
    /// eligible for the slot, and [`LeagueError::PlayerAlreadySlotted`] if
    /// the same player already occupies a different slot. On success any
    /// previous occupant is displaced and returned.
    pub fn assign(&mut self, player: Player, slot: SlotId) -> Result<Option<Player>> {
        if !can_fill_slot(player.position, slot) {
            return Err(LeagueError::InvalidPlacement {
                position: player.position.to_string(),
                slot: slot.to_string(),
            });
        }
        if self
            .slots
            .iter()
            .any(|s| s.id != slot && s.player.as_ref().is_some_and(|p| p.id == player.id))
        {
            return Err(LeagueError::PlayerAlreadySlotted { name: player.name });
        }
        Ok(self.slot_mut(slot).player.replace(player))
    }

    /// Empty a slot, returning its occupant.
    pub fn remove(&mut self, slot: SlotId) -> Option<Player> {
        self.slot_mut(slot).player.take()
    }

    /// The player currently in a slot.
    pub fn player(&self, slot: SlotId) -> Option<&Player> {
        self.slots[slot as usize].player.as_ref()
    }

    /// True when every slot is filled.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|s| s.player.is_some())
    }

    /// Sum of projected points across filled slots.
    pub fn projected_total(&self) -> f64 {
        self.slots
            .iter()
            .filter_map(|s| s.player.as_ref())
            .map(|p| p.projected_points)
            .sum()
    }

    /// The slots in lineup order.
    pub fn slots(&self) -> &[LineupSlot] {
        &self.slots
    }
}

impl Default for Lineup {
    fn default() -> Self {
        Self::new()
    }
}
