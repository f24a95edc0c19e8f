//! Command definitions
//!
//! One user action against the inventory, and what it produced.

use crate::item::Item;
use crate::store::{ItemUpdate, UpdateReport};

/// A parsed command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add a new item from raw field input
    Add {
        id: String,
        name: String,
        quantity: String,
        price: String,
    },

    /// Remove an item by id
    Remove { id: String },

    /// Update selected fields of an item
    Update { id: String, changes: ItemUpdate },

    /// Items whose id or name contains the query (case-insensitive)
    Search { query: String },

    /// All items
    List,
}

impl Command {
    /// Whether a successful run changes the inventory
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Add { .. } | Command::Remove { .. } | Command::Update { .. }
        )
    }
}

/// Result of a successful command
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The item that was added
    Added(Item),

    /// The item that was removed
    Removed(Item),

    /// Which fields changed and which were rejected
    Updated(UpdateReport),

    /// Items selected by a list or search, in inventory order
    Items(Vec<Item>),
}
