//! The bag never holds more than four items, whatever is taken in what order.

mod common;

use castle_escape::castle::{
    CastleError, CommandProcessor, GameState, ItemId, RoomId, BAG_CAPACITY,
};
use common::quiet_config;

/// Teleport to every room holding items and try to take all of them.
#[test]
fn taking_everything_stops_at_capacity() {
    let mut state = GameState::new("Tester");
    let mut processor = CommandProcessor::new(&quiet_config());
    state.world.unlock(RoomId::Armory);

    let mut refusals = 0;
    for room in [
        RoomId::EntranceHall,
        RoomId::GuardTower,
        RoomId::Library,
        RoomId::Kitchen,
        RoomId::Armory,
        RoomId::Study,
    ] {
        state.player.current_room = room;
        for item in state.world.room(room).items.clone() {
            let out = processor.process(&mut state, &format!("take {}", item.name()));
            if out == (CastleError::BagFull { capacity: BAG_CAPACITY }).to_string() {
                refusals += 1;
                assert!(state.world.room(room).items.contains(&item));
            }
            assert!(state.player.inventory.len() <= BAG_CAPACITY);
        }
    }

    assert_eq!(state.player.inventory.len(), BAG_CAPACITY);
    assert_eq!(refusals, 3);
}

#[test]
fn dropping_frees_a_slot() {
    let mut state = GameState::new("Tester");
    let mut processor = CommandProcessor::new(&quiet_config());
    for item in [ItemId::Sword, ItemId::Note, ItemId::OldBook, ItemId::Crowbar] {
        state.player.inventory.add(item);
    }

    let out = processor.process(&mut state, "take torch");
    assert_eq!(out, "Your bag is full! (Maximum 4 items)");
    assert!(state.world.room(RoomId::EntranceHall).items.contains(&ItemId::Torch));

    processor.process(&mut state, "drop note");
    let out = processor.process(&mut state, "take torch");
    assert_eq!(out, "You picked up the Torch.");
    assert_eq!(
        state.player.inventory.items(),
        &[ItemId::Sword, ItemId::OldBook, ItemId::Crowbar, ItemId::Torch]
    );
    assert!(state.world.room(RoomId::EntranceHall).items.contains(&ItemId::Note));
}

#[test]
fn ambiguous_and_missing_names_change_nothing() {
    let mut state = GameState::new("Tester");
    let mut processor = CommandProcessor::new(&quiet_config());
    state.player.current_room = RoomId::Library;

    assert_eq!(processor.process(&mut state, "take lamp"), "There's no lamp here.");
    assert_eq!(
        processor.process(&mut state, "take k"),
        "Which do you mean: Rusty Key, Old Book?"
    );
    assert!(state.player.inventory.is_empty());
    assert_eq!(state.world.room(RoomId::Library).items.len(), 2);

    assert_eq!(processor.process(&mut state, "drop key"), "Your bag is empty!");
}
