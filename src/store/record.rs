//! Persisted Record Shape
//!
//! How one item looks inside the inventory document, and how a record read
//! back from disk is coerced into a typed [`Item`].
//!
//! Older documents stored `quantity`/`price` as strings and had no
//! `total_cost`. Those records are repaired here: the numeric fields are
//! coerced and the total is derived. When coercion fails the record is still
//! loaded, with the bad fields zeroed and `total_cost = 0.0`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::item::Item;
use crate::validate::{parse_price, parse_quantity};

/// On-disk form of an item (the id is the enclosing map key)
#[derive(Debug, Serialize)]
pub(crate) struct StoredRecord<'a> {
    pub name: &'a str,
    pub quantity: u64,
    pub price: f64,
    pub total_cost: f64,
}

impl<'a> From<&'a Item> for StoredRecord<'a> {
    fn from(item: &'a Item) -> Self {
        Self {
            name: item.name(),
            quantity: item.quantity(),
            price: item.unit_price(),
            total_cost: item.total_cost(),
        }
    }
}

/// A record as read from disk, before any coercion.
///
/// Every field is optional so that one malformed record cannot fail the
/// whole document.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawRecord {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub quantity: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub total_cost: Option<Value>,
}

/// What happened to a record while it was turned into an [`Item`]
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RecordOutcome {
    /// Stored fields were already consistent
    Clean,

    /// Legacy record without `total_cost`; the total was derived
    Repaired,

    /// `total_cost` was present but did not match; it was recomputed
    Recomputed { stored: Option<f64> },

    /// Fields could not be coerced; total pinned to `0.0`
    Damaged { reason: String },
}

/// Decode one document entry into an item keyed by `id`.
///
/// Entries that are not objects load as an empty, damaged item.
pub(crate) fn decode_record(id: String, value: Value) -> (Item, RecordOutcome) {
    match serde_json::from_value::<RawRecord>(value) {
        Ok(raw) => raw.into_item(id),
        Err(e) => {
            let reason = format!("record is not an object: {}", e);
            let item = Item::with_zero_total(id, String::new(), 0, 0.0);
            (item, RecordOutcome::Damaged { reason })
        }
    }
}

impl RawRecord {
    /// Coerce this record into an item keyed by `id`
    pub fn into_item(self, id: String) -> (Item, RecordOutcome) {
        let name = match self.name {
            Some(Value::String(s)) => s,
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };

        let quantity = coerce_quantity(self.quantity.as_ref());
        let price = coerce_price(self.price.as_ref());

        let (quantity, price) = match (quantity, price) {
            (Ok(q), Ok(p)) => (q, p),
            (q, p) => {
                let reason = [q.as_ref().err(), p.as_ref().err()]
                    .into_iter()
                    .flatten()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join("; ");
                let item = Item::with_zero_total(id, name, q.unwrap_or(0), p.unwrap_or(0.0));
                return (item, RecordOutcome::Damaged { reason });
            }
        };

        let mut item = Item::with_zero_total(id, name, quantity, price);
        if !item.recompute_total() {
            let reason = format!("total cost of {} x {} is out of range", quantity, price);
            return (item, RecordOutcome::Damaged { reason });
        }

        let stored_total = self.total_cost.as_ref().map(Value::as_f64);

        let outcome = match stored_total {
            None => RecordOutcome::Repaired,
            Some(Some(stored)) if stored == item.total_cost() => RecordOutcome::Clean,
            Some(stored) => RecordOutcome::Recomputed { stored },
        };
        (item, outcome)
    }
}

fn coerce_quantity(raw: Option<&Value>) -> std::result::Result<u64, String> {
    let value = raw.ok_or_else(|| "quantity is missing".to_string())?;
    let parsed = match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => parse_quantity(s.trim()),
        _ => None,
    };
    parsed.ok_or_else(|| format!("quantity {} is not a non-negative integer", value))
}

fn coerce_price(raw: Option<&Value>) -> std::result::Result<f64, String> {
    let value = raw.ok_or_else(|| "price is missing".to_string())?;
    let parsed = match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite() && *f >= 0.0),
        Value::String(s) => parse_price(s.trim()),
        _ => None,
    };
    parsed.ok_or_else(|| format!("price {} is not a non-negative number", value))
}
