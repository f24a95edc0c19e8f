//! Inventory File
//!
//! Loads and saves an [`Inventory`] as one JSON document.
//!
//! Saves replace the whole document: the new content is written to a
//! sibling `.tmp` file, synced, then renamed over the target.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::error::Result;
use crate::item::Item;

use super::record::{decode_record, RecordOutcome, StoredRecord};
use super::Inventory;

/// A data-integrity problem found while loading one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrityWarning {
    /// Id of the offending record
    pub id: String,

    /// What could not be coerced
    pub reason: String,
}

/// Summary of a load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Whether a document existed at the path
    pub file_found: bool,

    /// Number of records loaded (including damaged ones)
    pub records_loaded: u64,

    /// Records whose total cost was derived or recomputed
    pub records_repaired: u64,

    /// Records whose fields could not be coerced
    pub warnings: Vec<IntegrityWarning>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.records_repaired == 0 && self.warnings.is_empty()
    }
}

/// Handle on the inventory document
#[derive(Debug, Clone)]
pub struct InventoryFile {
    /// Target document path
    path: PathBuf,

    /// Indent width for pretty printing
    indent: usize,
}

impl InventoryFile {
    const TMP_EXTENSION: &'static str = "tmp";

    /// Create a handle; nothing is touched on disk until load/save
    pub fn new(path: impl Into<PathBuf>, indent: usize) -> Self {
        Self {
            path: path.into(),
            indent,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document into an inventory.
    ///
    /// A missing (or blank) file yields an empty inventory. Records that
    /// cannot be coerced are still loaded, with `total_cost = 0.0`, and
    /// reported in [`LoadReport::warnings`].
    pub fn load(&self) -> Result<(Inventory, LoadReport)> {
        let mut report = LoadReport::default();

        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no inventory file, starting empty");
            return Ok((Inventory::new(), report));
        }
        report.file_found = true;

        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            tracing::debug!(path = %self.path.display(), "inventory file is blank, starting empty");
            return Ok((Inventory::new(), report));
        }

        let records: IndexMap<String, Value> = serde_json::from_str(&contents)?;

        let mut inventory = Inventory::new();
        for (id, value) in records {
            let (item, outcome) = decode_record(id, value);
            match outcome {
                RecordOutcome::Clean => {}
                RecordOutcome::Repaired => {
                    tracing::debug!(id = item.id(), total_cost = item.total_cost(), "derived missing total cost");
                    report.records_repaired += 1;
                }
                RecordOutcome::Recomputed { stored } => {
                    tracing::debug!(
                        id = item.id(),
                        stored = ?stored,
                        total_cost = item.total_cost(),
                        "recomputed stale total cost"
                    );
                    report.records_repaired += 1;
                }
                RecordOutcome::Damaged { reason } => {
                    tracing::warn!(id = item.id(), %reason, "data error in record, total cost set to 0.0");
                    report.warnings.push(IntegrityWarning {
                        id: item.id().to_string(),
                        reason,
                    });
                }
            }
            report.records_loaded += 1;
            inventory.insert_loaded(item);
        }

        tracing::info!(
            path = %self.path.display(),
            loaded = report.records_loaded,
            repaired = report.records_repaired,
            damaged = report.warnings.len(),
            "inventory loaded"
        );

        Ok((inventory, report))
    }

    /// Write the whole inventory, replacing the existing document.
    ///
    /// On failure the previous document is left in place.
    pub fn save(&self, inventory: &Inventory) -> Result<()> {
        let bytes = self.encode(inventory)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.tmp_path();
        let written = write_and_sync(&tmp_path, &bytes)
            .and_then(|()| fs::rename(&tmp_path, &self.path).map_err(Into::into));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }

        tracing::debug!(path = %self.path.display(), items = inventory.len(), "inventory saved");
        Ok(())
    }

    /// Encode the inventory as pretty-printed JSON, in insertion order
    fn encode(&self, inventory: &Inventory) -> Result<Vec<u8>> {
        let document: IndexMap<&str, StoredRecord<'_>> = inventory
            .iter()
            .map(|item: &Item| (item.id(), StoredRecord::from(item)))
            .collect();

        let indent = vec![b' '; self.indent];
        let formatter = PrettyFormatter::with_indent(&indent);
        let mut bytes = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut bytes, formatter);
        document.serialize(&mut serializer)?;
        bytes.push(b'\n');
        Ok(bytes)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".");
        name.push(Self::TMP_EXTENSION);
        self.path.with_file_name(name)
    }
}

fn write_and_sync(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    Ok(())
}
