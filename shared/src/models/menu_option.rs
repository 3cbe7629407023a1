//! Option group and option choice models

use serde::{Deserialize, Serialize};

/// Option group entity (e.g. "Spice level")
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionGroup {
    pub id: i64,
    pub name: String,
    pub is_required: bool,
    pub disable: bool,
}

/// Option choice entity (e.g. "Mild"), belonging to a group
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionChoice {
    pub id: i64,
    pub name: String,
    pub option_group_id: i64,
    #[serde(default)]
    pub option_group: Option<OptionGroup>,
    pub disable: bool,
}

/// Create/update option group payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionGroupPayload {
    pub name: String,
    pub is_required: bool,
    pub disable: bool,
}

/// Create/update option choice payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionChoicePayload {
    pub name: String,
    pub option_group_id: i64,
    pub disable: bool,
}
