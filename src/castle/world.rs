//! The castle: ten fixed rooms, their exits, and the items lying in them.
//!
//! The layout never changes during a session. Only room contents (items
//! taken or dropped) and gates (a door unlocked) mutate.

use log::debug;

use crate::castle::types::{Direction, Gate, ItemId, NpcId, PlayerRecord, RoomId, RoomRecord};

/// Where every new character begins.
pub const START_ROOM_ID: RoomId = RoomId::EntranceHall;

/// Room holding the crown.
pub const CROWN_ROOM_ID: RoomId = RoomId::ThroneRoom;

/// Grid used by the `map` command. `None` cells are open ground.
const MAP_LAYOUT: [[Option<RoomId>; 3]; 6] = [
    [Some(RoomId::GuardTower), Some(RoomId::Courtyard), Some(RoomId::Kitchen)],
    [None, Some(RoomId::EntranceHall), Some(RoomId::Library)],
    [Some(RoomId::Armory), None, Some(RoomId::Study)],
    [None, None, Some(RoomId::Dungeon)],
    [None, None, Some(RoomId::SecretPassage)],
    [None, None, Some(RoomId::ThroneRoom)],
];

/// Build the canonical castle, one record per [`RoomId`] in declaration order.
pub fn canonical_castle_seed() -> Vec<RoomRecord> {
    vec![
        RoomRecord::new(
            RoomId::EntranceHall,
            "A grand entrance hall with a large oak door behind you. Dusty tapestries hang on the walls.",
        )
        .with_exit(Direction::North, RoomId::Courtyard)
        .with_exit(Direction::East, RoomId::Library)
        .with_item(ItemId::Torch),
        RoomRecord::new(
            RoomId::Courtyard,
            "An overgrown courtyard with a cracked fountain in the center. Vines cover the stone walls.",
        )
        .with_exit(Direction::South, RoomId::EntranceHall)
        .with_exit(Direction::North, RoomId::GuardTower)
        .with_exit(Direction::East, RoomId::Kitchen)
        .with_exit(Direction::West, RoomId::Armory)
        .with_npc(NpcId::Ghost),
        RoomRecord::new(
            RoomId::GuardTower,
            "A tall tower with a view of the entire castle. Arrow slits let in shafts of light.",
        )
        .with_exit(Direction::South, RoomId::Courtyard)
        .with_item(ItemId::Crowbar)
        .with_npc(NpcId::Guard),
        RoomRecord::new(
            RoomId::Library,
            "A dusty library with shelves full of ancient books. A large desk sits in the center.",
        )
        .with_exit(Direction::West, RoomId::EntranceHall)
        .with_exit(Direction::North, RoomId::Study)
        .with_item(ItemId::RustyKey)
        .with_item(ItemId::OldBook),
        RoomRecord::new(
            RoomId::Kitchen,
            "A large kitchen with pots and pans hanging from the ceiling. A cold hearth dominates one wall.",
        )
        .with_exit(Direction::West, RoomId::Courtyard)
        .with_exit(Direction::South, RoomId::Dungeon)
        .with_item(ItemId::HealingHerb),
        RoomRecord::new(
            RoomId::Armory,
            "A room filled with weapons and armor behind an old iron lock.",
        )
        .with_exit(Direction::East, RoomId::Courtyard)
        .with_item(ItemId::Sword)
        .with_gate(Gate::Locked {
            key: ItemId::RustyKey,
        }),
        RoomRecord::new(
            RoomId::Study,
            "A small study with a desk and a mysterious map. Quills and ink pots are scattered about.",
        )
        .with_exit(Direction::South, RoomId::Library)
        .with_item(ItemId::Note),
        RoomRecord::new(
            RoomId::Dungeon,
            "A dark, damp dungeon. Chains hang from the walls.",
        )
        .with_exit(Direction::North, RoomId::Kitchen)
        .with_exit(Direction::East, RoomId::SecretPassage)
        .with_gate(Gate::Dark {
            light: ItemId::Torch,
        }),
        RoomRecord::new(
            RoomId::SecretPassage,
            "A hidden passage behind a bookcase. Cobwebs brush against your face as you walk.",
        )
        .with_exit(Direction::West, RoomId::Dungeon)
        .with_exit(Direction::North, RoomId::ThroneRoom),
        RoomRecord::new(
            RoomId::ThroneRoom,
            "The castle's throne room, with a glittering golden crown on an ornate throne.",
        )
        .with_exit(Direction::South, RoomId::SecretPassage)
        .with_item(ItemId::GoldenCrown),
    ]
}

/// Mutable state of every room for one session.
#[derive(Debug, Clone)]
pub struct World {
    rooms: Vec<RoomRecord>,
}

impl Default for World {
    fn default() -> Self {
        Self::canonical()
    }
}

impl World {
    pub fn canonical() -> Self {
        let rooms = canonical_castle_seed();
        debug_assert!(rooms
            .iter()
            .zip(RoomId::ALL.iter())
            .all(|(room, id)| room.id == *id));
        Self { rooms }
    }

    pub fn room(&self, id: RoomId) -> &RoomRecord {
        &self.rooms[id as usize]
    }

    pub fn room_mut(&mut self, id: RoomId) -> &mut RoomRecord {
        &mut self.rooms[id as usize]
    }

    pub fn rooms(&self) -> impl Iterator<Item = &RoomRecord> {
        self.rooms.iter()
    }

    /// Room reached by leaving `from` in `direction`, if there is an exit.
    pub fn neighbor(&self, from: RoomId, direction: Direction) -> Option<RoomId> {
        self.room(from).exits.get(&direction).copied()
    }

    pub fn is_adjacent(&self, from: RoomId, to: RoomId) -> bool {
        self.room(from).exits.values().any(|dest| *dest == to)
    }

    /// Whether the player can see in their current room.
    pub fn is_lit_for(&self, player: &PlayerRecord) -> bool {
        match self.room(player.current_room).gate {
            Some(Gate::Dark { light }) => player.inventory.contains(light),
            _ => true,
        }
    }

    /// Clear a locked gate. Returns false when the room was not locked.
    pub fn unlock(&mut self, id: RoomId) -> bool {
        let room = self.room_mut(id);
        if room.is_locked() {
            room.gate = None;
            debug!("unlocked room={:?}", id);
            true
        } else {
            false
        }
    }

    /// Find which room currently holds an item.
    pub fn locate_item(&self, item: ItemId) -> Option<RoomId> {
        self.rooms
            .iter()
            .find(|room| room.items.contains(&item))
            .map(|room| room.id)
    }
}

/// Render the fog-of-war map: visited rooms by tag, the rest as `[ ? ]`.
pub fn format_map(player: &PlayerRecord) -> String {
    let rule = "=".repeat(50);
    let mut out = format!("{}\nMAP - VISITED LOCATIONS\n{}\n", rule, rule);
    for row in MAP_LAYOUT.iter() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Some(room) if *room == player.current_room => format!("<{}>", room.abbrev()),
                Some(room) if player.visited_rooms.contains(room) => format!("[{}]", room.abbrev()),
                Some(_) => "[ ? ]".to_string(),
                None => "     ".to_string(),
            })
            .collect();
        out.push_str(cells.join(" ").trim_end());
        out.push('\n');
    }
    out.push_str("\nLegend: [XXX] = Visited, <XXX> = You are here, [ ? ] = Unexplored");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_one_record_per_room_in_order() {
        let seed = canonical_castle_seed();
        assert_eq!(seed.len(), RoomId::ALL.len());
        for (room, id) in seed.iter().zip(RoomId::ALL.iter()) {
            assert_eq!(room.id, *id);
        }
    }

    #[test]
    fn every_exit_has_a_way_back() {
        let world = World::canonical();
        for room in world.rooms() {
            for dest in room.exits.values() {
                assert!(
                    world.is_adjacent(*dest, room.id),
                    "{} -> {} has no return exit",
                    room.id,
                    dest
                );
            }
        }
    }

    #[test]
    fn each_item_starts_in_exactly_one_room() {
        let world = World::canonical();
        for item in ItemId::ALL {
            let holders = world.rooms().filter(|r| r.items.contains(&item)).count();
            assert_eq!(holders, 1, "{} should be placed once", item);
        }
        assert_eq!(world.locate_item(ItemId::GoldenCrown), Some(CROWN_ROOM_ID));
    }

    #[test]
    fn gates_sit_on_dungeon_and_armory() {
        let mut world = World::canonical();
        assert!(world.room(RoomId::Dungeon).is_dark());
        assert!(world.room(RoomId::Armory).is_locked());
        assert!(world.unlock(RoomId::Armory));
        assert!(!world.unlock(RoomId::Armory));
        assert!(!world.unlock(RoomId::Dungeon));
        assert!(world.room(RoomId::Dungeon).is_dark());
    }

    #[test]
    fn map_marks_current_visited_and_unknown() {
        let mut player = PlayerRecord::new("Ada", START_ROOM_ID);
        player.visited_rooms.insert(RoomId::Courtyard);
        let map = format_map(&player);
        assert!(map.contains("<Ent>"));
        assert!(map.contains("[Cou]"));
        assert!(map.contains("[ ? ]"));
        assert!(!map.contains("[Thr]"));
    }
}
