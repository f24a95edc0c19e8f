//! Item Record
//!
//! One stock-keeping unit. `total_cost` is derived from `quantity` and
//! `unit_price` and has no setter of its own.

/// Compute `quantity * unit_price`, or `None` if the product is not finite
pub fn derive_total_cost(quantity: u64, unit_price: f64) -> Option<f64> {
    let total = quantity as f64 * unit_price;
    total.is_finite().then_some(total)
}

/// A single inventory entry
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: String,
    name: String,
    quantity: u64,
    unit_price: f64,
    total_cost: f64,
}

impl Item {
    /// Build an item, deriving its total cost.
    ///
    /// Returns `None` if `quantity * unit_price` overflows.
    pub fn new(id: impl Into<String>, name: impl Into<String>, quantity: u64, unit_price: f64) -> Option<Self> {
        let total_cost = derive_total_cost(quantity, unit_price)?;
        Some(Self {
            id: id.into(),
            name: name.into(),
            quantity,
            unit_price,
            total_cost,
        })
    }

    /// Build an item whose numeric fields could not be trusted.
    ///
    /// Used by load-time repair; the total cost is pinned to `0.0`.
    pub(crate) fn with_zero_total(id: String, name: String, quantity: u64, unit_price: f64) -> Self {
        Self {
            id,
            name,
            quantity,
            unit_price,
            total_cost: 0.0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub(crate) fn set_quantity(&mut self, quantity: u64) {
        self.quantity = quantity;
    }

    pub(crate) fn set_unit_price(&mut self, unit_price: f64) {
        self.unit_price = unit_price;
    }

    /// Recompute `total_cost` from the current quantity and price.
    ///
    /// On overflow the total is set to `0.0` and `false` is returned.
    pub(crate) fn recompute_total(&mut self) -> bool {
        match derive_total_cost(self.quantity, self.unit_price) {
            Some(total) => {
                self.total_cost = total;
                true
            }
            None => {
                self.total_cost = 0.0;
                false
            }
        }
    }

    /// Case-insensitive substring match against id or name.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.id.to_lowercase().contains(needle) || self.name.to_lowercase().contains(needle)
    }
}
