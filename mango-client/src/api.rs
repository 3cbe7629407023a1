//! Typed endpoint surface of the ordering API
//!
//! The six core operations (tables, sessions, orders) live behind the
//! [`OrderingApi`] trait so workflows can run against a test double; the
//! CRUD endpoints the generic admin screens consume are plain inherent
//! methods on [`HttpClient`].

use async_trait::async_trait;

use crate::{ClientResult, HttpClient};
use shared::client::{CloseSessionRequest, OpenSessionRequest, UpdateStatusRequest};
use shared::models::{
    Category, CategoryPayload, Menu, MenuPayload, OptionChoice, OptionChoicePayload, OptionGroup,
    OptionGroupPayload, OrderItem, OrderStatus, Table, TableSession,
};

/// Core ordering API operations used by the table lifecycle and order board.
#[async_trait]
pub trait OrderingApi: Send + Sync {
    /// List all tables with their availability
    async fn list_tables(&self) -> ClientResult<Vec<Table>>;

    /// Create a session binding a client-generated token to a table
    async fn open_table_session(&self, request: OpenSessionRequest) -> ClientResult<()>;

    /// Fetch the open session of a table with its full order list
    async fn table_orders(&self, table_id: &str) -> ClientResult<TableSession>;

    /// Close the open session of a table, releasing it
    async fn close_table_session(&self, table_id: &str) -> ClientResult<()>;

    /// List all active kitchen orders across tables
    async fn list_active_orders(&self) -> ClientResult<Vec<OrderItem>>;

    /// Set the status of a single order
    async fn update_order_status(&self, order_id: i64, status: OrderStatus) -> ClientResult<()>;
}

#[async_trait]
impl OrderingApi for HttpClient {
    async fn list_tables(&self) -> ClientResult<Vec<Table>> {
        self.get("table").await
    }

    async fn open_table_session(&self, request: OpenSessionRequest) -> ClientResult<()> {
        // The created session comes back in the body; nothing in the admin
        // flow reads it.
        let _: serde_json::Value = self.post("table-session/open", &request).await?;
        Ok(())
    }

    async fn table_orders(&self, table_id: &str) -> ClientResult<TableSession> {
        self.get(&format!("orders/table/{}", table_id)).await
    }

    async fn close_table_session(&self, table_id: &str) -> ClientResult<()> {
        let request = CloseSessionRequest {
            table_id: table_id.to_string(),
        };
        self.post_no_content("table-session/close", &request).await
    }

    async fn list_active_orders(&self) -> ClientResult<Vec<OrderItem>> {
        self.get("orders").await
    }

    async fn update_order_status(&self, order_id: i64, status: OrderStatus) -> ClientResult<()> {
        let request = UpdateStatusRequest { status };
        let _: serde_json::Value = self
            .patch(&format!("orders/{}/status", order_id), &request)
            .await?;
        Ok(())
    }
}

/// Image handling for menu create/update forms.
#[derive(Debug, Clone)]
pub enum MenuImage {
    /// Leave the stored image untouched
    Keep,
    /// Remove the stored image
    Clear,
    /// Upload a new image file
    Upload { file_name: String, bytes: Vec<u8> },
}

fn menu_form(payload: &MenuPayload, image: MenuImage) -> ClientResult<reqwest::multipart::Form> {
    let mut form = reqwest::multipart::Form::new()
        .text("name", payload.name.clone())
        .text("price", payload.price.to_string())
        .text("categoryId", payload.category_id.to_string())
        .text("disable", payload.disable.to_string())
        .text(
            "optionGroupIds",
            serde_json::to_string(&payload.option_group_ids)?,
        );

    match image {
        MenuImage::Keep => {}
        MenuImage::Clear => form = form.text("imageUrl", ""),
        MenuImage::Upload { file_name, bytes } => {
            form = form.part("file", reqwest::multipart::Part::bytes(bytes).file_name(file_name));
        }
    }

    Ok(form)
}

impl HttpClient {
    // ========== Category API ==========

    pub async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.get("categories").await
    }

    pub async fn create_category(&self, payload: &CategoryPayload) -> ClientResult<Category> {
        self.post("categories", payload).await
    }

    pub async fn update_category(&self, id: i64, payload: &CategoryPayload) -> ClientResult<Category> {
        self.patch(&format!("categories/{}", id), payload).await
    }

    pub async fn delete_category(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("categories/{}", id)).await
    }

    // ========== Menu API ==========

    pub async fn list_menus(&self) -> ClientResult<Vec<Menu>> {
        self.get("menus").await
    }

    /// Create a menu entry. The endpoint takes a multipart form so the
    /// image can ride along as a file part.
    pub async fn create_menu(&self, payload: &MenuPayload, image: MenuImage) -> ClientResult<Menu> {
        self.post_multipart("menus", menu_form(payload, image)?).await
    }

    pub async fn update_menu(
        &self,
        id: i64,
        payload: &MenuPayload,
        image: MenuImage,
    ) -> ClientResult<Menu> {
        self.patch_multipart(&format!("menus/{}", id), menu_form(payload, image)?)
            .await
    }

    pub async fn delete_menu(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("menus/{}", id)).await
    }

    // ========== Option group API ==========

    pub async fn list_option_groups(&self) -> ClientResult<Vec<OptionGroup>> {
        self.get("option-groups").await
    }

    pub async fn create_option_group(
        &self,
        payload: &OptionGroupPayload,
    ) -> ClientResult<OptionGroup> {
        self.post("option-groups", payload).await
    }

    pub async fn update_option_group(
        &self,
        id: i64,
        payload: &OptionGroupPayload,
    ) -> ClientResult<OptionGroup> {
        self.patch(&format!("option-groups/{}", id), payload).await
    }

    pub async fn delete_option_group(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("option-groups/{}", id)).await
    }

    // ========== Option choice API ==========

    pub async fn list_option_choices(&self) -> ClientResult<Vec<OptionChoice>> {
        self.get("option-choices").await
    }

    pub async fn create_option_choice(
        &self,
        payload: &OptionChoicePayload,
    ) -> ClientResult<OptionChoice> {
        self.post("option-choices", payload).await
    }

    pub async fn update_option_choice(
        &self,
        id: i64,
        payload: &OptionChoicePayload,
    ) -> ClientResult<OptionChoice> {
        self.patch(&format!("option-choices/{}", id), payload).await
    }

    pub async fn delete_option_choice(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("option-choices/{}", id)).await
    }
}
