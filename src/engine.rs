//! Engine Module
//!
//! Ties the inventory to its file.
//!
//! ## Responsibilities
//! - Load the inventory document on open (repairing legacy records)
//! - Route commands to inventory operations
//! - Save the whole document after every successful mutation

use std::path::Path;

use crate::command::{Command, Outcome};
use crate::config::Config;
use crate::error::Result;
use crate::item::Item;
use crate::store::{Inventory, InventoryFile, ItemUpdate, LoadReport, UpdateReport};

/// The inventory engine
///
/// Owns the one in-memory [`Inventory`] of the process. Nothing guards the
/// file against other writers; the last save wins.
pub struct Engine {
    /// Engine configuration
    config: Config,

    /// The on-disk document
    file: InventoryFile,

    /// In-memory items
    inventory: Inventory,

    /// What happened when the document was loaded
    load_report: LoadReport,
}

impl Engine {
    /// Open the inventory described by `config`
    ///
    /// On startup:
    /// 1. Validate config
    /// 2. Load the document (missing file = empty inventory)
    /// 3. Log any records that had to be repaired
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;

        let file = InventoryFile::new(&config.inventory_path, config.indent);
        let (inventory, load_report) = file.load()?;

        for warning in &load_report.warnings {
            tracing::warn!(
                id = %warning.id,
                reason = %warning.reason,
                "check quantity and price for this item"
            );
        }

        Ok(Self {
            config,
            file,
            inventory,
            load_report,
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified inventory file
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().inventory_path(path).build();
        Self::open(config)
    }

    /// Execute a command
    ///
    /// Routes commands to appropriate handlers
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Add {
                id,
                name,
                quantity,
                price,
            } => self.add(&id, &name, &quantity, &price).map(Outcome::Added),
            Command::Remove { id } => self.remove(&id).map(Outcome::Removed),
            Command::Update { id, changes } => self.update(&id, &changes).map(Outcome::Updated),
            Command::Search { query } => Ok(Outcome::Items(
                self.search(&query).into_iter().cloned().collect(),
            )),
            Command::List => Ok(Outcome::Items(self.list().into_iter().cloned().collect())),
        }
    }

    /// Add an item, then save
    pub fn add(&mut self, id: &str, name: &str, quantity: &str, price: &str) -> Result<Item> {
        let item = self.inventory.add(id, name, quantity, price)?.clone();
        tracing::info!(id = item.id(), total_cost = item.total_cost(), "item added");
        self.persist()?;
        Ok(item)
    }

    /// Remove an item, then save
    pub fn remove(&mut self, id: &str) -> Result<Item> {
        let item = self.inventory.remove(id)?;
        tracing::info!(id = item.id(), "item removed");
        self.persist()?;
        Ok(item)
    }

    /// Update an item, then save
    pub fn update(&mut self, id: &str, changes: &ItemUpdate) -> Result<UpdateReport> {
        let report = self.inventory.update(id, changes)?;
        for warning in &report.warnings {
            tracing::debug!(id, %warning, "update field skipped");
        }
        tracing::info!(id, applied = ?report.applied, "item updated");
        self.persist()?;
        Ok(report)
    }

    /// Items matching `query` in id or name
    pub fn search(&self, query: &str) -> Vec<&Item> {
        self.inventory.search(query)
    }

    /// All items in order
    pub fn list(&self) -> Vec<&Item> {
        self.inventory.list()
    }

    /// Save the whole inventory now
    pub fn save(&self) -> Result<()> {
        self.file.save(&self.inventory)
    }

    /// Save after a mutation unless autosave is off
    fn persist(&self) -> Result<()> {
        if !self.config.autosave {
            return Ok(());
        }
        self.save().map_err(|e| {
            tracing::error!(path = %self.file.path().display(), error = %e, "failed to save inventory");
            e
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the in-memory inventory
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Get the report from the initial load
    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    /// Get the inventory file path
    pub fn inventory_path(&self) -> &Path {
        self.file.path()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
