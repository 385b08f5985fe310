use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::castle::inventory::Inventory;

/// Health a fresh character starts with, and the ceiling healing can reach.
pub const MAX_HEALTH: u8 = 100;

/// Compass directions used by the castle's exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    /// Parse a direction word or its single-letter abbreviation.
    pub fn parse(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "n" | "north" => Some(Direction::North),
            "s" | "south" => Some(Direction::South),
            "e" | "east" => Some(Direction::East),
            "w" | "west" => Some(Direction::West),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The ten fixed locations of the castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RoomId {
    EntranceHall,
    Courtyard,
    GuardTower,
    Library,
    Kitchen,
    Armory,
    Study,
    Dungeon,
    SecretPassage,
    ThroneRoom,
}

impl RoomId {
    pub const ALL: [RoomId; 10] = [
        RoomId::EntranceHall,
        RoomId::Courtyard,
        RoomId::GuardTower,
        RoomId::Library,
        RoomId::Kitchen,
        RoomId::Armory,
        RoomId::Study,
        RoomId::Dungeon,
        RoomId::SecretPassage,
        RoomId::ThroneRoom,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RoomId::EntranceHall => "Entrance Hall",
            RoomId::Courtyard => "Courtyard",
            RoomId::GuardTower => "Guard Tower",
            RoomId::Library => "Library",
            RoomId::Kitchen => "Kitchen",
            RoomId::Armory => "Armory",
            RoomId::Study => "Study",
            RoomId::Dungeon => "Dungeon",
            RoomId::SecretPassage => "Secret Passage",
            RoomId::ThroneRoom => "Throne Room",
        }
    }

    /// Three-letter tag used on the map.
    pub fn abbrev(self) -> &'static str {
        &self.name()[..3]
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every item that exists somewhere in the castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemId {
    Torch,
    RustyKey,
    OldBook,
    Crowbar,
    HealingHerb,
    Sword,
    Note,
    GoldenCrown,
}

impl ItemId {
    pub const ALL: [ItemId; 8] = [
        ItemId::Torch,
        ItemId::RustyKey,
        ItemId::OldBook,
        ItemId::Crowbar,
        ItemId::HealingHerb,
        ItemId::Sword,
        ItemId::Note,
        ItemId::GoldenCrown,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ItemId::Torch => "Torch",
            ItemId::RustyKey => "Rusty Key",
            ItemId::OldBook => "Old Book",
            ItemId::Crowbar => "Crowbar",
            ItemId::HealingHerb => "Healing Herb",
            ItemId::Sword => "Sword",
            ItemId::Note => "Note",
            ItemId::GoldenCrown => "Golden Crown",
        }
    }

    /// Text shown when the player looks around a room holding this item.
    pub fn look_text(self) -> &'static str {
        match self {
            ItemId::Torch => "A Torch hangs on the wall, it could be useful in dark places.",
            ItemId::RustyKey => "A Rusty Key sits on the desk. It might open something important.",
            ItemId::OldBook => "An Old Book titled 'History of the Castle'. It might contain clues.",
            ItemId::Crowbar => "A sturdy Crowbar leans against the wall. It could pry things open.",
            ItemId::HealingHerb => "Fresh Healing Herb grows in a crack in the wall. It smells restorative.",
            ItemId::Sword => "A sharp Sword hangs on the wall. It looks well-maintained.",
            ItemId::Note => "A Note on the desk reads: 'The passage opens when the moon is high'",
            ItemId::GoldenCrown => "The Golden Crown glitters on the throne. This is what you came for!",
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Characters that can be talked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NpcId {
    Ghost,
    Guard,
}

/// Entry requirements a room can impose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    /// Unlit; the item must be carried to enter or see. Never consumed.
    Dark { light: ItemId },
    /// Barred door; the key opens it once and is used up.
    Locked { key: ItemId },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomRecord {
    pub id: RoomId,
    pub description: String,
    pub exits: HashMap<Direction, RoomId>,
    pub items: Vec<ItemId>,
    pub gate: Option<Gate>,
    pub npc: Option<NpcId>,
}

impl RoomRecord {
    pub fn new(id: RoomId, description: &str) -> Self {
        Self {
            id,
            description: description.to_string(),
            exits: HashMap::new(),
            items: Vec::new(),
            gate: None,
            npc: None,
        }
    }

    pub fn with_exit(mut self, direction: Direction, destination: RoomId) -> Self {
        self.exits.insert(direction, destination);
        self
    }

    pub fn with_item(mut self, item: ItemId) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_gate(mut self, gate: Gate) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn with_npc(mut self, npc: NpcId) -> Self {
        self.npc = Some(npc);
        self
    }

    /// Exits in a stable north/south/east/west order.
    pub fn sorted_exits(&self) -> Vec<(Direction, RoomId)> {
        Direction::ALL
            .iter()
            .filter_map(|d| self.exits.get(d).map(|dest| (*d, *dest)))
            .collect()
    }

    pub fn is_dark(&self) -> bool {
        matches!(self.gate, Some(Gate::Dark { .. }))
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.gate, Some(Gate::Locked { .. }))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub name: String,
    pub current_room: RoomId,
    pub inventory: Inventory,
    pub health: u8,
    pub visited_rooms: BTreeSet<RoomId>,
    pub turns: u32,
}

impl PlayerRecord {
    pub fn new(name: &str, start: RoomId) -> Self {
        let mut visited_rooms = BTreeSet::new();
        visited_rooms.insert(start);
        Self {
            name: name.to_string(),
            current_room: start,
            inventory: Inventory::new(),
            health: MAX_HEALTH,
            visited_rooms,
            turns: 0,
        }
    }

    /// Ten points per room seen, five per item carried.
    pub fn score(&self) -> u32 {
        self.visited_rooms.len() as u32 * 10 + self.inventory.len() as u32 * 5
    }

    pub fn heal(&mut self, amount: u8) {
        self.health = self.health.saturating_add(amount).min(MAX_HEALTH);
    }

    pub fn hurt(&mut self, amount: u8) {
        self.health = self.health.saturating_sub(amount);
    }
}
