//! Store Module
//!
//! The inventory itself and its on-disk form.
//!
//! ## Responsibilities
//! - Hold items keyed by id, in insertion order
//! - Run add/remove/update/search/list against that map
//! - Load the JSON document, repairing legacy records
//! - Save the JSON document as a whole-file replace
//!
//! ## File Format
//! ```text
//! {
//!     "A1": {
//!         "name": "Widget",
//!         "quantity": 5,
//!         "price": 2.0,
//!         "total_cost": 10.0
//!     },
//!     ...
//! }
//! ```
//!
//! Legacy records may lack `total_cost` and hold `quantity`/`price` as strings.

mod file;
mod inventory;
mod record;

pub use file::{IntegrityWarning, InventoryFile, LoadReport};
pub use inventory::{Field, Inventory, ItemUpdate, UpdateReport, UpdateWarning};
