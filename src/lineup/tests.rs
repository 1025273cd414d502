//! Unit tests for lineup slots and placement eligibility

use super::*;
use crate::cli::types::{ids::PlayerId, time::Week};
use crate::error::LeagueError;

fn player(id: u64, name: &str, position: Position, projected: f64) -> Player {
    Player {
        id: PlayerId::new(id),
        name: name.to_string(),
        position,
        team: "BUF".to_string(),
        projected_points: projected,
        actual_points: None,
        is_injured: false,
        injury_status: None,
        bye_week: Week::new(12),
        used_in_week: None,
        game_time: None,
    }
}

#[test]
fn test_can_fill_slot_full_table() {
    // Every (position, slot) pair against the league's eligibility rules.
    let table = [
        (Position::QB, SlotId::QB, true),
        (Position::QB, SlotId::RB1, false),
        (Position::QB, SlotId::RB2, false),
        (Position::QB, SlotId::FLEX1, false),
        (Position::QB, SlotId::FLEX2, false),
        (Position::RB, SlotId::QB, false),
        (Position::RB, SlotId::RB1, true),
        (Position::RB, SlotId::RB2, true),
        (Position::RB, SlotId::FLEX1, false),
        (Position::RB, SlotId::FLEX2, false),
        (Position::WR, SlotId::QB, false),
        (Position::WR, SlotId::RB1, false),
        (Position::WR, SlotId::RB2, false),
        (Position::WR, SlotId::FLEX1, true),
        (Position::WR, SlotId::FLEX2, true),
        (Position::TE, SlotId::QB, false),
        (Position::TE, SlotId::RB1, false),
        (Position::TE, SlotId::RB2, false),
        (Position::TE, SlotId::FLEX1, true),
        (Position::TE, SlotId::FLEX2, true),
    ];
    for (position, slot, expected) in table {
        assert_eq!(
            can_fill_slot(position, slot),
            expected,
            "{position} in {slot}"
        );
    }
}

#[test]
fn test_flex_excludes_rb() {
    // League rule: flex is WR/TE only. RB in flex must stay rejected even
    // though most fantasy formats allow it.
    assert!(!can_fill_slot(Position::RB, SlotId::FLEX1));
    assert!(!can_fill_slot(Position::RB, SlotId::FLEX2));
}

#[test]
fn test_eligible_positions_lookup() {
    assert_eq!(SlotId::QB.eligible_positions(), &[Position::QB]);
    assert_eq!(SlotId::RB1.eligible_positions(), &[Position::RB]);
    assert_eq!(SlotId::RB2.eligible_positions(), &[Position::RB]);
    assert_eq!(
        SlotId::FLEX1.eligible_positions(),
        &[Position::WR, Position::TE]
    );
    assert_eq!(
        SlotId::FLEX2.eligible_positions(),
        &[Position::WR, Position::TE]
    );
}

#[test]
fn test_eligible_positions_agree_with_predicate() {
    for slot in SlotId::ALL {
        for position in Position::ALL {
            assert_eq!(
                can_fill_slot(position, slot),
                slot.eligible_positions().contains(&position)
            );
        }
    }
}

#[test]
fn test_slot_id_parsing() {
    assert_eq!("flex1".parse::<SlotId>().unwrap(), SlotId::FLEX1);
    assert_eq!("RB2".parse::<SlotId>().unwrap(), SlotId::RB2);
    assert!(matches!(
        "WR1".parse::<SlotId>(),
        Err(LeagueError::InvalidSlot { .. })
    ));
}

#[test]
fn test_assign_and_remove() {
    let mut lineup = Lineup::new();
    assert!(!lineup.is_complete());

    let allen = player(1, "Josh Allen", Position::QB, 24.5);
    assert!(lineup.assign(allen.clone(), SlotId::QB).unwrap().is_none());
    assert_eq!(lineup.player(SlotId::QB), Some(&allen));

    let removed = lineup.remove(SlotId::QB).unwrap();
    assert_eq!(removed, allen);
    assert!(lineup.player(SlotId::QB).is_none());
}

#[test]
fn test_assign_rejects_ineligible_position() {
    let mut lineup = Lineup::new();
    let mccaffrey = player(2, "Christian McCaffrey", Position::RB, 20.8);

    let err = lineup.assign(mccaffrey, SlotId::FLEX1).unwrap_err();
    match err {
        LeagueError::InvalidPlacement { position, slot } => {
            assert_eq!(position, "RB");
            assert_eq!(slot, "FLEX1");
        }
        other => panic!("Expected InvalidPlacement, got {other:?}"),
    }
    // Rejection leaves the lineup untouched.
    assert_eq!(lineup, Lineup::new());
}

#[test]
fn test_assign_rejects_double_slotting() {
    let mut lineup = Lineup::new();
    let kupp = player(3, "Cooper Kupp", Position::WR, 18.9);

    lineup.assign(kupp.clone(), SlotId::FLEX1).unwrap();
    let err = lineup.assign(kupp.clone(), SlotId::FLEX2).unwrap_err();
    assert!(matches!(err, LeagueError::PlayerAlreadySlotted { .. }));
    assert_eq!(lineup.player(SlotId::FLEX1), Some(&kupp));
    assert!(lineup.player(SlotId::FLEX2).is_none());
}

#[test]
fn test_assign_displaces_previous_occupant() {
    let mut lineup = Lineup::new();
    let kupp = player(3, "Cooper Kupp", Position::WR, 18.9);
    let kelce = player(4, "Travis Kelce", Position::TE, 16.2);

    lineup.assign(kupp.clone(), SlotId::FLEX1).unwrap();
    let displaced = lineup.assign(kelce.clone(), SlotId::FLEX1).unwrap();
    assert_eq!(displaced, Some(kupp));
    assert_eq!(lineup.player(SlotId::FLEX1), Some(&kelce));
}

#[test]
fn test_reassigning_same_slot_is_allowed() {
    // Re-dropping a player onto the slot they already hold is not an error.
    let mut lineup = Lineup::new();
    let kupp = player(3, "Cooper Kupp", Position::WR, 18.9);

    lineup.assign(kupp.clone(), SlotId::FLEX1).unwrap();
    let displaced = lineup.assign(kupp.clone(), SlotId::FLEX1).unwrap();
    assert_eq!(displaced, Some(kupp));
}

#[test]
fn test_complete_lineup_and_projected_total() {
    let mut lineup = Lineup::new();
    lineup
        .assign(player(1, "Josh Allen", Position::QB, 24.5), SlotId::QB)
        .unwrap();
    lineup
        .assign(
            player(2, "Christian McCaffrey", Position::RB, 20.8),
            SlotId::RB1,
        )
        .unwrap();
    lineup
        .assign(player(8, "Austin Ekeler", Position::RB, 18.5), SlotId::RB2)
        .unwrap();
    lineup
        .assign(player(3, "Cooper Kupp", Position::WR, 18.9), SlotId::FLEX1)
        .unwrap();
    lineup
        .assign(player(4, "Travis Kelce", Position::TE, 16.2), SlotId::FLEX2)
        .unwrap();

    assert!(lineup.is_complete());
    let expected = 24.5 + 20.8 + 18.5 + 18.9 + 16.2;
    assert!((lineup.projected_total() - expected).abs() < 1e-9);
}
