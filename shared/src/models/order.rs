//! Order models and the kitchen status workflow

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kitchen workflow status of a single order item.
///
/// Linear, forward-only: `PENDING → COOKING → READY TO SERVE → SERVED`.
/// `SERVED` is terminal. Wire values are exact strings (note the spaces in
/// `READY TO SERVE`); anything else lands on [`OrderStatus::Unknown`] so one
/// odd row can never fail a whole board fetch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Cooking,
    ReadyToServe,
    Served,
    /// Catch-all for statuses this client does not know about
    Unknown,
}

impl OrderStatus {
    /// The next status in the workflow, or `None` when there is no forward
    /// edge (terminal or unrecognized status).
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Cooking),
            OrderStatus::Cooking => Some(OrderStatus::ReadyToServe),
            OrderStatus::ReadyToServe => Some(OrderStatus::Served),
            OrderStatus::Served | OrderStatus::Unknown => None,
        }
    }

    /// Wire representation, as the API expects it in `{status}` bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Cooking => "COOKING",
            OrderStatus::ReadyToServe => "READY TO SERVE",
            OrderStatus::Served => "SERVED",
            OrderStatus::Unknown => "UNKNOWN",
        }
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PENDING" => OrderStatus::Pending,
            "COOKING" => OrderStatus::Cooking,
            "READY TO SERVE" => OrderStatus::ReadyToServe,
            "SERVED" => OrderStatus::Served,
            _ => OrderStatus::Unknown,
        }
    }
}

impl From<OrderStatus> for String {
    fn from(value: OrderStatus) -> Self {
        value.as_str().to_string()
    }
}

/// A single ordered line item.
///
/// `price_at_time` is captured when the item is ordered and never changes,
/// so historical bills are immune to later menu price edits. `status` is the
/// only field this client ever mutates (through the status endpoint).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: i64,
    pub quantity: i64,
    pub price_at_time: f64,
    #[serde(default)]
    pub remark: Option<String>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub menu: MenuRef,
    /// Present on the board feed, absent inside a session's own order list
    #[serde(default)]
    pub session: Option<SessionRef>,
    #[serde(default)]
    pub options: Vec<OptionSelection>,
}

/// Menu projection attached to an order item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuRef {
    pub name: String,
}

/// Session projection on the board feed, carrying the table number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRef {
    pub table: TableRef,
}

/// Table projection on the board feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRef {
    pub number: String,
}

/// Chosen option attached to an order item, for display only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionSelection {
    pub id: i64,
    pub option_group: String,
    pub option_choice: String,
}
