//! Table and table session models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::order::OrderItem;

/// Physical dining table.
///
/// `current_token` is the session token of the open session, if any.
/// A table with no token is available; a table with one is occupied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: String,
    /// Display number shown on the floor plan and printed on the QR code URL
    pub number: String,
    #[serde(default)]
    pub current_token: Option<String>,
}

impl Table {
    /// A table is available exactly when it has no open session token.
    pub fn is_available(&self) -> bool {
        self.current_token.is_none()
    }
}

/// One seating of a table, from open to close.
///
/// Becomes historical once closed; the admin client only ever sees the
/// currently open session of a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSession {
    pub id: i64,
    /// Opaque session token, unique per opening
    pub token: String,
    pub opened_at: DateTime<Utc>,
    #[serde(default)]
    pub orders: Vec<OrderItem>,
}

impl TableSession {
    /// Display total: Σ(quantity × price-at-order-time) over all orders.
    ///
    /// The authoritative total is whatever the server persists on close;
    /// this is only used to render the bill preview.
    pub fn total(&self) -> f64 {
        self.orders
            .iter()
            .map(|item| item.quantity as f64 * item.price_at_time)
            .sum()
    }
}
