//! Lineup command implementation.

use crate::cli::types::position::Position;
use crate::lineup::{can_fill_slot, SlotId};
use crate::models::output::SlotCheck;
use crate::Result;

/// Check whether a position may fill a slot.
pub fn check_slot(position: Position, slot: SlotId) -> SlotCheck {
    SlotCheck {
        slot: slot.to_string(),
        position: position.to_string(),
        allowed: can_fill_slot(position, slot),
        eligible_positions: slot.eligible_positions().to_vec(),
    }
}

fn format_eligible(slot: SlotId) -> String {
    slot.eligible_positions()
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// Handle the lineup command.
///
/// With both a slot and a position, reports the placement decision; without,
/// prints the empty lineup template with each slot's accepted positions.
pub fn handle_lineup(slot: Option<SlotId>, position: Option<Position>) -> Result<()> {
    match (slot, position) {
        (Some(slot), Some(position)) => {
            let check = check_slot(position, slot);
            if check.allowed {
                println!("✓ {} can fill the {} slot", check.position, check.slot);
            } else {
                println!(
                    "✗ {} cannot fill the {} slot (accepts {})",
                    check.position,
                    check.slot,
                    format_eligible(slot)
                );
            }
        }
        _ => {
            println!("Lineup slots:");
            for slot in SlotId::ALL {
                println!("  {:<6} accepts {}", slot.to_string(), format_eligible(slot));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_slot_reports_eligible_positions() {
        let check = check_slot(Position::RB, SlotId::FLEX1);
        assert!(!check.allowed);
        assert_eq!(check.eligible_positions, vec![Position::WR, Position::TE]);

        let check = check_slot(Position::TE, SlotId::FLEX2);
        assert!(check.allowed);
    }
}
