use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::cart::CartLine;
use crate::domain::types::{ItemId, Price, Quantity};

/// Contact details collected at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactInfo {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub delivery_method: String,
    pub payment_method: String,
    pub special_instructions: Option<String>,
}

/// One line of an order payload, the shape the submission collaborator
/// expects: id, name, price, quantity, variant name and category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    pub id: ItemId,
    pub name: String,
    pub price: Price,
    pub quantity: Quantity,
    pub variant: Option<String>,
    pub category: Option<String>,
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id,
            name: line.name.clone(),
            price: line.price,
            quantity: line.quantity,
            variant: line.variant.as_ref().map(|v| v.name.clone()),
            category: line.category.clone(),
        }
    }
}

/// Full order snapshot handed to the submission adapter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderPayload {
    pub order_id: String,
    pub contact: ContactInfo,
    pub lines: Vec<OrderLine>,
    pub total: f64,
    pub currency: String,
    pub created_at: NaiveDateTime,
}

/// Structured result of an order submission attempt. Submission never
/// surfaces as an error value; a failed delivery is `success: false` plus a
/// human-readable reason.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmissionOutcome {
    pub success: bool,
    pub order_id: Option<String>,
    pub error: Option<String>,
}

impl SubmissionOutcome {
    pub fn delivered(order_id: impl Into<String>) -> Self {
        Self {
            success: true,
            order_id: Some(order_id.into()),
            error: None,
        }
    }

    pub fn failed(order_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            order_id: Some(order_id.into()),
            error: Some(error.into()),
        }
    }
}

/// Delivery status stored in the local order history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Submitted,
    Failed,
}

/// Append-only audit record of a checkout attempt. Written to the orders
/// slot, never read back by the checkout flow itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRecord {
    pub id: String,
    pub date: NaiveDateTime,
    pub status: OrderStatus,
    pub payload: OrderPayload,
}
