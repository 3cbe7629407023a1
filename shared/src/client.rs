//! Client-related types shared between server and client
//!
//! Request/response DTOs used in API communication.

use serde::{Deserialize, Serialize};

use crate::models::OrderStatus;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

// =============================================================================
// Table session API DTOs
// =============================================================================

/// Open a session for a table with a client-generated token
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenSessionRequest {
    pub table_id: String,
    pub token: String,
}

/// Close the open session of a table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseSessionRequest {
    pub table_id: String,
}

// =============================================================================
// Order API DTOs
// =============================================================================

/// Advance an order to a new status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}
