//! Session state: the character, the castle, and whether play continues.

use crate::castle::types::{ItemId, PlayerRecord};
use crate::castle::world::{World, CROWN_ROOM_ID, START_ROOM_ID};

/// Where the session stands after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    /// Crown claimed; terminal.
    Won,
    /// Health ran out; only reachable with fatigue enabled.
    Lost,
    /// Player quit or input ended.
    Quit,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::Playing
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub player: PlayerRecord,
    pub world: World,
    pub status: GameStatus,
    /// Set once the injured guard has been given a herb.
    pub guard_healed: bool,
}

impl GameState {
    pub fn new(player_name: &str) -> Self {
        Self {
            player: PlayerRecord::new(player_name, START_ROOM_ID),
            world: World::canonical(),
            status: GameStatus::Playing,
            guard_healed: false,
        }
    }

    /// True when the player stands in the throne room holding the crown.
    pub fn holds_crown_in_throne_room(&self) -> bool {
        self.player.current_room == CROWN_ROOM_ID
            && self.player.inventory.contains(ItemId::GoldenCrown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::castle::types::RoomId;

    #[test]
    fn fresh_state_is_playing_at_entrance() {
        let state = GameState::new("Ada");
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.player.current_room, RoomId::EntranceHall);
        assert!(!state.status.is_over());
        assert!(!state.holds_crown_in_throne_room());
    }
}
