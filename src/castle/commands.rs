//! Command parsing and processing for Castle Escape.
//!
//! Raw input lines are parsed into [`CastleCommand`] values and applied to a
//! [`GameState`] by [`CommandProcessor`], which returns the text to show the
//! player. Rule violations surface as [`CastleError`] inside the handlers and
//! are rendered as ordinary output; state is left untouched when they occur.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::castle::errors::CastleError;
use crate::castle::inventory::{format_inventory, InventoryResult, BAG_CAPACITY};
use crate::castle::resolver::resolve_item;
use crate::castle::state::{GameState, GameStatus};
use crate::castle::types::{Direction, Gate, ItemId, NpcId, RoomId};
use crate::castle::world::format_map;
use crate::config::GameConfig;
use crate::logutil::escape_log;

/// Messages that drift in every few turns.
const AMBIENT_MESSAGES: &[&str] = &[
    "You hear strange noises echoing through the castle...",
    "A cold draft sweeps through the corridor and snuffs out a distant candle.",
    "Somewhere above, heavy footsteps cross the floor and stop.",
    "The old walls groan as the wind picks up outside.",
];

/// Player commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CastleCommand {
    Move(Direction),            // N, NORTH, GO N, MOVE NORTH
    Look,                       // L, LOOK
    Take(Option<String>),       // T, TAKE torch, GET key
    Drop(String),               // DROP sword
    Use(String),                // U herb, USE crowbar
    Talk,                       // TALK
    Inventory,                  // I, INV, BAG
    Map,                        // MAP
    Score,                      // SCORE, STATS
    Help,                       // H, HELP, ?
    Quit,                       // Q, QUIT, EXIT

    /// Unrecognized or incomplete input
    Unknown(String),
}

/// Parse raw input into a command. Verbs are case-insensitive; object names
/// keep the player's spelling and are resolved later.
pub fn parse_command(input: &str) -> CastleCommand {
    let trimmed = input.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();

    if parts.is_empty() {
        return CastleCommand::Unknown(String::new());
    }

    let verb = parts[0].to_ascii_lowercase();
    let rest = parts[1..].join(" ");

    if let Some(direction) = Direction::parse(&verb) {
        return CastleCommand::Move(direction);
    }

    match verb.as_str() {
        "go" | "move" | "walk" => match parts.get(1).and_then(|w| Direction::parse(w)) {
            Some(direction) if parts.len() == 2 => CastleCommand::Move(direction),
            _ => CastleCommand::Unknown(trimmed.to_string()),
        },
        "l" | "look" => CastleCommand::Look,
        "t" | "take" | "get" | "grab" => {
            if rest.is_empty() {
                CastleCommand::Take(None)
            } else {
                CastleCommand::Take(Some(rest))
            }
        }
        "drop" => {
            if rest.is_empty() {
                CastleCommand::Unknown(trimmed.to_string())
            } else {
                CastleCommand::Drop(rest)
            }
        }
        "u" | "use" => {
            if rest.is_empty() {
                CastleCommand::Unknown(trimmed.to_string())
            } else {
                CastleCommand::Use(rest)
            }
        }
        "talk" | "speak" => CastleCommand::Talk,
        "i" | "inv" | "inventory" | "bag" => CastleCommand::Inventory,
        "map" => CastleCommand::Map,
        "score" | "stats" => CastleCommand::Score,
        "h" | "help" | "?" => CastleCommand::Help,
        "q" | "quit" | "exit" => CastleCommand::Quit,
        _ => CastleCommand::Unknown(trimmed.to_string()),
    }
}

/// Applies commands to a [`GameState`]
pub struct CommandProcessor {
    config: GameConfig,
    rng: StdRng,
}

impl CommandProcessor {
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config: config.clone(),
            rng,
        }
    }

    /// Process one line of input and return the response text.
    ///
    /// Recognized commands cost a turn; unrecognized or empty input does not.
    pub fn process(&mut self, state: &mut GameState, input: &str) -> String {
        if state.status.is_over() {
            return String::new();
        }

        let command = parse_command(input);
        debug!(
            "command parsed: player={} input={} command={:?}",
            escape_log(&state.player.name),
            escape_log(input),
            command
        );

        let result = match command {
            CastleCommand::Unknown(ref raw) if raw.is_empty() => return String::new(),
            CastleCommand::Unknown(_) => {
                return "Invalid command. Type 'help' for available commands.".to_string()
            }
            CastleCommand::Quit => {
                state.status = GameStatus::Quit;
                info!("player quit: player={}", escape_log(&state.player.name));
                return "Thanks for playing!".to_string();
            }
            CastleCommand::Move(direction) => self.handle_move(state, direction),
            CastleCommand::Look => self.handle_look(state),
            CastleCommand::Take(target) => self.handle_take(state, target.as_deref()),
            CastleCommand::Drop(target) => self.handle_drop(state, &target),
            CastleCommand::Use(target) => self.handle_use(state, &target),
            CastleCommand::Talk => self.handle_talk(state),
            CastleCommand::Inventory => Ok(format_inventory(&state.player.inventory)),
            CastleCommand::Map => Ok(format_map(&state.player)),
            CastleCommand::Score => Ok(self.format_score(state)),
            CastleCommand::Help => Ok(help_text()),
        };

        state.player.turns += 1;
        let mut response = match result {
            Ok(text) => text,
            Err(e) => {
                debug!("command refused: {}", e);
                e.to_string()
            }
        };

        if state.holds_crown_in_throne_room() {
            state.status = GameStatus::Won;
        }
        if state.status == GameStatus::Won {
            info!(
                "player won: player={} turns={} score={}",
                escape_log(&state.player.name),
                state.player.turns,
                state.player.score()
            );
            response.push_str("\n\n");
            response.push_str(&victory_text(state));
            return response;
        }

        self.after_turn(state, &mut response);
        response
    }

    /// Turn-based events: ambient messages and fatigue.
    fn after_turn(&mut self, state: &mut GameState, response: &mut String) {
        let turns = state.player.turns;
        let interval = self.config.ambient_interval;
        if interval > 0 && turns % interval == 0 {
            if let Some(message) = AMBIENT_MESSAGES.choose(&mut self.rng) {
                response.push_str("\n\n");
                response.push_str(message);
            }
        }

        let fatigue = &self.config.fatigue;
        if fatigue.enabled && turns > fatigue.after_turns {
            state.player.hurt(fatigue.damage);
            response.push_str(&format!(
                "\n\nYou're taking too long! The castle feels more dangerous... (Health: {})",
                state.player.health
            ));
            if state.player.health == 0 {
                state.status = GameStatus::Lost;
                info!(
                    "player lost: player={} turns={}",
                    escape_log(&state.player.name),
                    turns
                );
                response.push_str("\nYou succumb to the dangers of the castle. Game Over!");
            }
        }
    }

    fn handle_move(&mut self, state: &mut GameState, direction: Direction) -> Result<String, CastleError> {
        let from = state.player.current_room;
        let destination = state
            .world
            .neighbor(from, direction)
            .ok_or(CastleError::NoExit(direction))?;

        let mut response = String::new();
        let gate = state.world.room(destination).gate;
        match gate {
            Some(Gate::Dark { light }) if !state.player.inventory.contains(light) => {
                return Err(CastleError::TooDarkToEnter {
                    room: destination,
                    light,
                });
            }
            Some(Gate::Locked { key }) => {
                if !state.player.inventory.contains(key) {
                    return Err(CastleError::Locked {
                        room: destination,
                        key,
                    });
                }
                state.player.inventory.remove(key);
                state.world.unlock(destination);
                response.push_str(&format!(
                    "You use the {} to unlock the {}!\n",
                    key, destination
                ));
            }
            _ => {}
        }

        state.player.current_room = destination;
        state.player.visited_rooms.insert(destination);
        debug!(
            "player moved: player={} from={:?} to={:?}",
            escape_log(&state.player.name),
            from,
            destination
        );

        response.push_str(&format!("You move {} to the {}.\n\n", direction, destination));
        response.push_str(&describe_room(state));
        Ok(response)
    }

    fn handle_look(&mut self, state: &GameState) -> Result<String, CastleError> {
        if !state.world.is_lit_for(&state.player) {
            return Err(CastleError::TooDark);
        }

        let room = state.world.room(state.player.current_room);
        let mut response = "You look around carefully...".to_string();
        if room.items.is_empty() {
            response.push_str("\nThere's nothing of interest here.");
        } else {
            for item in &room.items {
                response.push('\n');
                response.push_str(item.look_text());
            }
        }
        Ok(response)
    }

    fn handle_take(&mut self, state: &mut GameState, target: Option<&str>) -> Result<String, CastleError> {
        if !state.world.is_lit_for(&state.player) {
            return Err(CastleError::TooDark);
        }

        let here = state.player.current_room;
        let room_items = state.world.room(here).items.clone();
        if room_items.is_empty() {
            return Err(CastleError::NothingHere);
        }

        let item = match target {
            Some(query) => resolve_item(query, &room_items)
                .into_item(|| CastleError::NotHere(query.to_string()))?,
            None if room_items.len() == 1 => room_items[0],
            None => {
                return Err(CastleError::ChooseItem(
                    room_items.iter().map(|i| i.name().to_string()).collect(),
                ));
            }
        };

        if item == ItemId::GoldenCrown {
            return Ok(self.claim_crown(state));
        }

        match state.player.inventory.add(item) {
            InventoryResult::Added { .. } => {
                state.world.room_mut(here).items.retain(|i| *i != item);
                debug!(
                    "item taken: player={} item={:?} bag={}",
                    escape_log(&state.player.name),
                    item,
                    state.player.inventory.len()
                );
                Ok(format!("You picked up the {}.", item))
            }
            _ => Err(CastleError::BagFull {
                capacity: BAG_CAPACITY,
            }),
        }
    }

    /// Taking the crown ends the game. It goes in the bag when there is room;
    /// otherwise the player carries it out in hand.
    fn claim_crown(&mut self, state: &mut GameState) -> String {
        let here = state.player.current_room;
        state
            .world
            .room_mut(here)
            .items
            .retain(|i| *i != ItemId::GoldenCrown);
        state.status = GameStatus::Won;
        match state.player.inventory.add(ItemId::GoldenCrown) {
            InventoryResult::Added { .. } => "You picked up the Golden Crown.".to_string(),
            _ => "Your bag is full, so you lift the Golden Crown onto your head instead.".to_string(),
        }
    }

    fn handle_drop(&mut self, state: &mut GameState, target: &str) -> Result<String, CastleError> {
        if state.player.inventory.is_empty() {
            return Err(CastleError::EmptyBag);
        }
        let item = resolve_item(target, state.player.inventory.items())
            .into_item(|| CastleError::NotCarried(target.to_string()))?;

        let here = state.player.current_room;
        if let Some(Gate::Dark { light }) = state.world.room(here).gate {
            if light == item {
                return Ok(format!(
                    "You'd be lost in the dark without the {}. You keep hold of it.",
                    item
                ));
            }
        }

        state.player.inventory.remove(item);
        state.world.room_mut(here).items.push(item);
        Ok(format!("You drop the {}.", item))
    }

    fn handle_use(&mut self, state: &mut GameState, target: &str) -> Result<String, CastleError> {
        if state.player.inventory.is_empty() {
            return Err(CastleError::EmptyBag);
        }
        let item = resolve_item(target, state.player.inventory.items())
            .into_item(|| CastleError::NotCarried(target.to_string()))?;

        let response = match item {
            ItemId::Torch => "The torch illuminates your surroundings.".to_string(),
            ItemId::HealingHerb => {
                state.player.heal(30);
                state.player.inventory.remove(ItemId::HealingHerb);
                format!(
                    "You eat the Healing Herb and feel better! (Health: {})",
                    state.player.health
                )
            }
            ItemId::Sword => "You swing the sword. It feels powerful and well-balanced.".to_string(),
            ItemId::Crowbar if state.player.current_room == RoomId::Study => {
                "You use the crowbar to pry open a hidden panel behind the desk! \
It holds only dust and a faded sketch of a passage beneath the kitchens."
                    .to_string()
            }
            ItemId::Crowbar => "Nothing to use the crowbar on here.".to_string(),
            ItemId::Note => "The Note reads: 'The passage opens when the moon is high'".to_string(),
            ItemId::OldBook => "You leaf through 'History of the Castle'. \
A chapter describes a throne room reached only through the dungeons."
                .to_string(),
            other => format!("You can't use the {} right now.", other),
        };
        Ok(response)
    }

    fn handle_talk(&mut self, state: &mut GameState) -> Result<String, CastleError> {
        let npc = state
            .world
            .room(state.player.current_room)
            .npc
            .ok_or(CastleError::NoOneHere)?;

        let response = match npc {
            NpcId::Ghost => "A friendly ghost appears!\n\
Ghost: 'The crown is in the throne room, but beware of dark places!'"
                .to_string(),
            NpcId::Guard if state.guard_healed => "The guard is resting, his wounds bound.\n\
Guard: 'Thank you again, friend. Remember: the library holds secrets and keys.'"
                .to_string(),
            NpcId::Guard if state.player.inventory.contains(ItemId::HealingHerb) => {
                state.player.inventory.remove(ItemId::HealingHerb);
                state.guard_healed = true;
                "An injured guard sits in the corner.\n\
Guard: 'Thank you for the herb! Here, take this clue...'\n\
Guard: 'The library holds secrets and keys.'"
                    .to_string()
            }
            NpcId::Guard => "An injured guard sits in the corner.\n\
Guard: 'I'm hurt... I need healing herbs...'"
                .to_string(),
        };
        Ok(response)
    }

    fn format_score(&self, state: &GameState) -> String {
        let player = &state.player;
        format!(
            "=== {} ===\nLocation: {}\nHealth: {}/100\nTurns: {}\nRooms Visited: {}/{}\nItems: {}/{}\nScore: {}",
            player.name,
            player.current_room,
            player.health,
            player.turns,
            player.visited_rooms.len(),
            RoomId::ALL.len(),
            player.inventory.len(),
            BAG_CAPACITY,
            player.score()
        )
    }
}

/// Describe the player's current room: name, description, then exits,
/// characters and items when the room is lit.
pub fn describe_room(state: &GameState) -> String {
    let room = state.world.room(state.player.current_room);
    let rule = "=".repeat(50);
    let mut response = format!("{}\nLOCATION: {}\n{}\n{}", rule, room.id, rule, room.description);

    if !state.world.is_lit_for(&state.player) {
        response.push_str("\nIt's too dark to see anything!");
        return response;
    }

    match room.npc {
        Some(NpcId::Ghost) => response.push_str("\nA pale shape flickers near the fountain."),
        Some(NpcId::Guard) if state.guard_healed => {
            response.push_str("\nThe guard rests in the corner, his wounds bound.")
        }
        Some(NpcId::Guard) => response.push_str("\nAn injured guard slumps in the corner."),
        None => {}
    }

    let exits: Vec<&str> = room.sorted_exits().iter().map(|(d, _)| d.as_str()).collect();
    if !exits.is_empty() {
        response.push_str(&format!("\n\nExits: {}", exits.join(", ")));
    }

    if !room.items.is_empty() {
        let names: Vec<&str> = room.items.iter().map(|i| i.name()).collect();
        response.push_str(&format!("\nYou see: {}", names.join(", ")));
    }
    response
}

pub fn victory_text(state: &GameState) -> String {
    let player = &state.player;
    let rule = "=".repeat(50);
    format!(
        "{}\nVICTORY!\n{}\nCongratulations {}!\nYou found the Golden Crown and escaped the castle!\n\
Final Score: {}\nRooms Visited: {}/{}\nTurns Taken: {}",
        rule,
        rule,
        player.name,
        player.score(),
        player.visited_rooms.len(),
        RoomId::ALL.len(),
        player.turns
    )
}

pub fn help_text() -> String {
    let rule = "=".repeat(50);
    format!(
        "{}\nHELP - AVAILABLE COMMANDS\n{}\n\
north/south/east/west (n/s/e/w) - Move to a different room\n\
look    - Look around the current room\n\
take    - Pick up an item (TAKE <item>)\n\
drop    - Leave an item here (DROP <item>)\n\
bag     - Check your inventory\n\
use     - Use an item from your bag (USE <item>)\n\
talk    - Talk to characters\n\
map     - Show visited rooms\n\
score   - Show your stats\n\
help    - Show this help message\n\
quit    - Quit the game\n\n\
TIPS:\n\
- You can only carry {} items at a time\n\
- Some rooms are dark and some doors are locked\n\
- Explore everywhere to find the crown!",
        rule, rule, BAG_CAPACITY
    )
}
