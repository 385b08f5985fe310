//! End-to-end games driven through the session loop.

mod common;

use castle_escape::castle::{GameStatus, ItemId, RoomId};
use common::{play, play_bytes};

#[test]
fn shortest_route_to_the_crown_wins() {
    let (state, out) = play("take torch\nn\ne\ns\ne\nn\ntake crown\n");

    assert_eq!(state.status, GameStatus::Won);
    assert_eq!(state.player.current_room, RoomId::ThroneRoom);
    assert!(state.player.inventory.contains(ItemId::GoldenCrown));
    assert!(out.contains("VICTORY!"));
    assert!(out.contains("Congratulations Tester!"));
    // six rooms and two items
    assert!(out.contains("Final Score: 70"));
    assert!(out.contains("Turns Taken: 7"));
    assert!(out.trim_end().ends_with("Thanks for playing Castle Escape!"));
}

#[test]
fn commands_after_victory_are_not_read() {
    let (state, out) = play("take torch\nn\ne\ns\ne\nn\ntake crown\nquit\n");
    assert_eq!(state.status, GameStatus::Won);
    assert!(!out.contains("Thanks for playing!\n"));
}

#[test]
fn quitting_never_shows_victory() {
    let (state, out) = play("take torch\nn\nquit\n");
    assert_eq!(state.status, GameStatus::Quit);
    assert!(out.contains("Thanks for playing!"));
    assert!(out.contains("Game Over. Better luck next time!"));
    assert!(!out.contains("VICTORY!"));
}

#[test]
fn end_of_input_counts_as_quit() {
    let (state, out) = play("n\n");
    assert_eq!(state.status, GameStatus::Quit);
    assert_eq!(state.player.current_room, RoomId::Courtyard);
    assert!(!out.contains("VICTORY!"));
}

#[test]
fn dungeon_blocks_until_torch_is_carried() {
    // East to the Library, pick up the key, then try the dungeon without light.
    let (state, out) = play(
        "e\ntake key\nw\nn\ne\ns\n\
         w\ns\ntake torch\nn\ne\ns\nquit\n",
    );

    assert!(out.contains("You picked up the Rusty Key."));
    assert!(out.contains("It's pitch black beyond the Dungeon doorway. You need a Torch to go in."));
    assert!(out.contains("You move south to the Dungeon."));
    assert_eq!(state.player.current_room, RoomId::Dungeon);
    assert_eq!(state.player.inventory.items(), &[ItemId::RustyKey, ItemId::Torch]);
    assert!(state.player.visited_rooms.contains(&RoomId::Dungeon));
}

#[test]
fn blocked_move_leaves_room_unchanged() {
    let (state, out) = play("s\nquit\n");
    assert!(out.contains("You can't go south from here."));
    assert_eq!(state.player.current_room, RoomId::EntranceHall);
    assert_eq!(state.player.visited_rooms.len(), 1);
}

#[test]
fn full_bag_still_lets_the_crown_win() {
    // Fill the bag with torch, key, book and herb before reaching the throne.
    let (state, out) = play(
        "take torch\ne\ntake key\ntake book\nw\nn\ne\ntake herb\ns\ne\nn\ntake crown\n",
    );
    assert_eq!(state.status, GameStatus::Won);
    assert_eq!(state.player.inventory.len(), 4);
    assert!(!state.player.inventory.contains(ItemId::GoldenCrown));
    assert!(out.contains("lift the Golden Crown onto your head"));
    assert!(out.contains("VICTORY!"));
}

#[test]
fn invalid_commands_do_not_cost_turns() {
    let (state, out) = play("dance\n\nfly north\nlook\nquit\n");
    assert_eq!(out.matches("Invalid command. Type 'help' for available commands.").count(), 2);
    assert_eq!(state.player.turns, 1);
}

#[test]
fn help_map_and_score_are_available() {
    let (_, out) = play("help\nmap\nscore\nbag\nquit\n");
    assert!(out.contains("HELP - AVAILABLE COMMANDS"));
    assert!(out.contains("MAP - VISITED LOCATIONS"));
    assert!(out.contains("=== Tester ==="));
    assert!(out.contains("Rooms Visited: 1/10"));
    assert!(out.contains("Your bag is empty"));
}

#[test]
fn garbage_lines_leave_the_game_untouched() {
    let mut script = b"take torch\n".to_vec();
    script.extend_from_slice(&[0xff, 0xfe, 0x00, b'\n']);
    script.extend_from_slice(&[0xc3, b'\n']);
    script.extend_from_slice(b"\x1b[A\n");
    let (state, out) = play_bytes(&script);

    // input ran out without a quit, so only end of input stopped play
    assert_eq!(state.status, GameStatus::Quit);
    assert_eq!(state.player.current_room, RoomId::EntranceHall);
    assert_eq!(state.player.turns, 1);
    assert_eq!(state.player.inventory.items(), &[ItemId::Torch]);
    assert_eq!(out.matches("Invalid command. Type 'help' for available commands.").count(), 3);
    assert!(out.contains("\nThanks for playing!"));
}

#[test]
fn play_continues_after_garbage_until_quit() {
    let mut script = b"n\n".to_vec();
    script.extend_from_slice(&[0x80, 0x81, b'\n']);
    script.extend_from_slice(b"quit\nn\n");
    let (state, out) = play_bytes(&script);

    assert_eq!(state.status, GameStatus::Quit);
    assert_eq!(state.player.current_room, RoomId::Courtyard);
    assert_eq!(state.player.turns, 1);
    assert!(out.contains("Invalid command"));
    assert!(!out.contains("VICTORY!"));
}
