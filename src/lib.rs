//! # stocktake
//!
//! A single-user inventory tracker with:
//! - Validated add/remove/update/search/list over stock items
//! - A derived total cost kept consistent on every change
//! - Whole-document JSON persistence with legacy-record repair
//! - A clap CLI and an interactive menu shell
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 CLI / Interactive Shell                      │
//! │           (raw trimmed input, table output)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Engine                                │
//! │            (run command, save after mutation)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌───────────────┐
//!   │  Inventory  │          │ InventoryFile │
//!   │ (IndexMap)  │          │    (JSON)     │
//!   └──────┬──────┘          └───────────────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │  Validate   │
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod validate;
pub mod item;
pub mod store;
pub mod command;
pub mod engine;
pub mod present;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StockError, Result};
pub use config::Config;
pub use engine::Engine;
pub use item::Item;
pub use store::{Inventory, ItemUpdate};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of stocktake
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
