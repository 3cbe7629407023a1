//! Mango Client - admin client for the ordering API
//!
//! Authenticated HTTP access plus the two admin workflows built on top of
//! it: the table open/close lifecycle and the kitchen order board.

pub mod api;
pub mod board;
pub mod config;
pub mod error;
pub mod http;
pub mod qr;
pub mod tables;

pub use api::OrderingApi;
pub use board::{Lane, Lanes, OrderBoard, DEFAULT_POLL_INTERVAL};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use tables::{BillPreview, PendingOpen, TableLifecycle};

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse};
pub use shared::models::{OptionSelection, OrderItem, OrderStatus, Table, TableSession};
