//! Bounded bag carried by the player

use super::types::ItemId;

/// Number of items the bag can hold at once.
pub const BAG_CAPACITY: usize = 4;

/// Outcome of a bag mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryResult {
    Added { slot: usize },
    Removed { item: ItemId },
    Full,
    Missing,
}

/// The player's bag. Holds at most [`BAG_CAPACITY`] items in pickup order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<ItemId>,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(BAG_CAPACITY),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= BAG_CAPACITY
    }

    pub fn free_slots(&self) -> usize {
        BAG_CAPACITY.saturating_sub(self.items.len())
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.items.contains(&item)
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// Append an item unless the bag is already full.
    pub fn add(&mut self, item: ItemId) -> InventoryResult {
        if self.is_full() {
            return InventoryResult::Full;
        }
        self.items.push(item);
        InventoryResult::Added {
            slot: self.items.len(),
        }
    }

    /// Remove the first occurrence of an item, keeping the order of the rest.
    pub fn remove(&mut self, item: ItemId) -> InventoryResult {
        match self.items.iter().position(|i| *i == item) {
            Some(index) => InventoryResult::Removed {
                item: self.items.remove(index),
            },
            None => InventoryResult::Missing,
        }
    }
}

/// Format the bag listing shown by the `bag` command
pub fn format_inventory(inventory: &Inventory) -> String {
    let rule = "=".repeat(40);
    let mut out = format!("{}\nYOUR BAG:\n", rule);
    if inventory.is_empty() {
        out.push_str("Your bag is empty\n");
    } else {
        for (idx, item) in inventory.items().iter().enumerate() {
            out.push_str(&format!("{}. {}\n", idx + 1, item));
        }
    }
    out.push_str(&format!("Space: {}/{}\n{}", inventory.len(), BAG_CAPACITY, rule));
    out
}
