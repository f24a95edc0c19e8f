//! Inventory
//!
//! Insertion-ordered map of id → [`Item`] and the operations over it.
//!
//! Every operation here is purely in-memory. Persisting the result is the
//! caller's job (see [`crate::engine::Engine`]).

use std::fmt;

use indexmap::IndexMap;

use crate::error::{Result, StockError};
use crate::item::Item;
use crate::validate::{parse_price, parse_quantity};

/// The in-memory store of items
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    /// Items keyed by id, in insertion order
    items: IndexMap<String, Item>,
}

/// Requested changes for an update.
///
/// `None` or an empty string leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub price: Option<String>,
}

impl ItemUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    pub fn price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }
}

/// A field that an update changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Quantity,
    Price,
}

/// A problem with one field of an update; the rest of the update still applies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateWarning {
    /// Quantity input was rejected; the old quantity was kept
    InvalidQuantity(String),

    /// Price input was rejected; the old price was kept
    InvalidPrice(String),

    /// `quantity * price` could not be computed; total set to `0.0`
    TotalCostUnavailable,
}

impl fmt::Display for UpdateWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateWarning::InvalidQuantity(raw) => {
                write!(f, "invalid quantity {:?}, change skipped", raw)
            }
            UpdateWarning::InvalidPrice(raw) => {
                write!(f, "invalid price {:?}, change skipped", raw)
            }
            UpdateWarning::TotalCostUnavailable => {
                write!(f, "could not compute total cost, set to 0.00")
            }
        }
    }
}

/// Result of a successful update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateReport {
    /// Fields that were changed, in name/quantity/price order
    pub applied: Vec<Field>,

    /// Fields that were rejected, plus any total-cost problem
    pub warnings: Vec<UpdateWarning>,
}

impl UpdateReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    /// Iterate items in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Add a new item from raw input.
    ///
    /// Rejected without mutation if the id is empty or already present, or
    /// if quantity/price do not validate.
    pub fn add(&mut self, id: &str, name: &str, quantity: &str, price: &str) -> Result<&Item> {
        if id.is_empty() {
            return Err(StockError::Validation("item id must not be empty".to_string()));
        }
        if self.items.contains_key(id) {
            return Err(StockError::Duplicate(id.to_string()));
        }

        let quantity = parse_quantity(quantity).ok_or_else(|| {
            StockError::Validation(format!("quantity {:?} is not a non-negative integer", quantity))
        })?;
        let price = parse_price(price).ok_or_else(|| {
            StockError::Validation(format!("price {:?} is not a non-negative number", price))
        })?;
        let item = Item::new(id, name, quantity, price).ok_or_else(|| {
            StockError::Validation(format!("total cost of {} x {} is out of range", quantity, price))
        })?;

        let entry = self.items.entry(id.to_string()).or_insert(item);
        Ok(&*entry)
    }

    /// Remove an item, returning it.
    ///
    /// Removing an absent id is `NotFound` and leaves the inventory untouched.
    pub fn remove(&mut self, id: &str) -> Result<Item> {
        // shift_remove keeps the remaining items in order
        self.items
            .shift_remove(id)
            .ok_or_else(|| StockError::NotFound(id.to_string()))
    }

    /// Apply an update to an existing item.
    ///
    /// Each field is validated and applied on its own; a rejected field is
    /// reported in the returned warnings and the others still apply. The
    /// total cost is recomputed afterwards from whatever values survived.
    pub fn update(&mut self, id: &str, changes: &ItemUpdate) -> Result<UpdateReport> {
        let item = self
            .items
            .get_mut(id)
            .ok_or_else(|| StockError::NotFound(id.to_string()))?;

        let mut report = UpdateReport::default();

        if let Some(name) = provided(&changes.name) {
            item.set_name(name);
            report.applied.push(Field::Name);
        }

        if let Some(raw) = provided(&changes.quantity) {
            match parse_quantity(raw) {
                Some(quantity) => {
                    item.set_quantity(quantity);
                    report.applied.push(Field::Quantity);
                }
                None => report.warnings.push(UpdateWarning::InvalidQuantity(raw.to_string())),
            }
        }

        if let Some(raw) = provided(&changes.price) {
            match parse_price(raw) {
                Some(price) => {
                    item.set_unit_price(price);
                    report.applied.push(Field::Price);
                }
                None => report.warnings.push(UpdateWarning::InvalidPrice(raw.to_string())),
            }
        }

        if !item.recompute_total() {
            report.warnings.push(UpdateWarning::TotalCostUnavailable);
        }

        Ok(report)
    }

    /// Items whose id or name contains `query`, ignoring case, in order
    pub fn search(&self, query: &str) -> Vec<&Item> {
        let needle = query.to_lowercase();
        self.items.values().filter(|item| item.matches(&needle)).collect()
    }

    /// All items in insertion order
    pub fn list(&self) -> Vec<&Item> {
        self.items.values().collect()
    }

    /// Insert an item restored from disk (ids in a document are unique)
    pub(crate) fn insert_loaded(&mut self, item: Item) {
        self.items.insert(item.id().to_string(), item);
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = indexmap::map::Values<'a, String, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.values()
    }
}

fn provided(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
