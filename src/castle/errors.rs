use thiserror::Error;

use crate::castle::types::{Direction, ItemId, RoomId};

/// Rule violations raised while processing a player command.
///
/// The `Display` text is what the player sees; the session keeps running
/// with unchanged state after any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CastleError {
    /// No exit leads that way from the current room.
    #[error("You can't go {0} from here.")]
    NoExit(Direction),

    /// Destination is dark and the player carries no light.
    #[error("It's pitch black beyond the {room} doorway. You need a {light} to go in.")]
    TooDarkToEnter { room: RoomId, light: ItemId },

    /// Current room is dark and the player has no light.
    #[error("It's too dark to see anything!")]
    TooDark,

    /// Destination door is locked and the key is not carried.
    #[error("The {room} door is locked. You need a key.")]
    Locked { room: RoomId, key: ItemId },

    #[error("Your bag is full! (Maximum {capacity} items)")]
    BagFull { capacity: usize },

    #[error("There's nothing to pick up here.")]
    NothingHere,

    #[error("There's no {0} here.")]
    NotHere(String),

    #[error("You don't have {0} in your bag.")]
    NotCarried(String),

    #[error("Your bag is empty!")]
    EmptyBag,

    /// Name matched more than one candidate.
    #[error("Which do you mean: {}?", .0.join(", "))]
    Ambiguous(Vec<String>),

    /// `take` with no object in a room holding several items.
    #[error("Take what? Available items: {}", .0.join(", "))]
    ChooseItem(Vec<String>),

    #[error("There's no one here to talk to.")]
    NoOneHere,
}
