//! Category model

use serde::{Deserialize, Serialize};

/// Menu category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub disable: bool,
    /// Relation counts attached by the API on list responses
    #[serde(rename = "_count", default)]
    pub count: Option<CategoryCount>,
}

/// Relation counts for a category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCount {
    pub menus: i64,
}

/// Create/update category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    pub name: String,
    pub disable: bool,
}
