//! Shared types for the Mango ordering system
//!
//! Wire entities and request/response DTOs used across the admin client
//! and any other consumer of the ordering API.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Convenient access to the most common entities
pub use models::{OptionSelection, OrderItem, OrderStatus, Table, TableSession};
