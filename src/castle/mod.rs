//! Castle Escape game model and command loop.
//!
//! The castle is built once per session from [`canonical_castle_seed`]; the
//! player's position, bag and the rooms' contents live in a [`GameState`]
//! that the [`CommandProcessor`] mutates one command at a time.

pub mod commands;
pub mod errors;
pub mod inventory;
pub mod resolver;
pub mod session;
pub mod state;
pub mod types;
pub mod world;

pub use commands::{describe_room, parse_command, CastleCommand, CommandProcessor};
pub use errors::CastleError;
pub use inventory::{format_inventory, Inventory, InventoryResult, BAG_CAPACITY};
pub use resolver::{resolve_item, ResolveResult};
pub use session::Session;
pub use state::{GameState, GameStatus};
pub use types::*;
pub use world::{canonical_castle_seed, format_map, World, CROWN_ROOM_ID, START_ROOM_ID};
