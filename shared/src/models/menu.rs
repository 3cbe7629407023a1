//! Menu entry model

use serde::{Deserialize, Serialize};

use super::menu_option::OptionGroup;

/// Menu entry entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    pub category_id: i64,
    /// Category projection attached on list responses
    #[serde(default)]
    pub category: Option<CategoryRef>,
    pub disable: bool,
    /// Option group links attached on list responses
    #[serde(default)]
    pub option_groups: Vec<MenuOptionGroupLink>,
}

/// Category projection attached to a menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
}

/// Junction row linking a menu to an option group
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuOptionGroupLink {
    pub option_group_id: i64,
    #[serde(default)]
    pub option_group: Option<OptionGroup>,
}

/// Create/update menu payload.
///
/// The menus endpoint takes a multipart form (the image rides along as a
/// file part); these are the text fields of that form.
#[derive(Debug, Clone)]
pub struct MenuPayload {
    pub name: String,
    pub price: f64,
    pub category_id: i64,
    pub disable: bool,
    pub option_group_ids: Vec<i64>,
}
