//! The order record and its structured text payload.
//!
//! An order is created once at the application boundary, serialized to a
//! field-labeled, human-readable payload, and never mutated. The payload is
//! what descends the layer stack; the record itself is reconstructed only at
//! the far endpoint.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A single customer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Name of the customer placing the order
    pub customer: String,

    /// The dish being ordered
    pub food: String,

    /// How many units of the dish
    pub quantity: u32,

    /// Delivery address
    pub address: String,
}

impl Order {
    /// Create a new order.
    pub fn new(customer: &str, food: &str, quantity: u32, address: &str) -> Self {
        Self {
            customer: customer.to_string(),
            food: food.to_string(),
            quantity,
            address: address.to_string(),
        }
    }

    /// Serialize the order to its structured text payload.
    ///
    /// The payload is pretty-printed JSON so the layer trace stays readable.
    pub fn to_payload(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reconstruct an order from a structured text payload.
    ///
    /// # Errors
    /// `Error::Order` if the payload is not a valid order document.
    pub fn from_payload(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}
