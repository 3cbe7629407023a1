//! Table open/close lifecycle
//!
//! Both directions are two-step flows: `open` hands back a [`PendingOpen`]
//! carrying the generated token and scannable ordering URL, `close` hands
//! back a [`BillPreview`] with the session's orders and display total. Only
//! `confirm()` touches the server; dropping the intermediate value cancels
//! the flow without a request.

use std::sync::Arc;

use uuid::Uuid;

use crate::{ClientError, ClientResult, OrderingApi};
use shared::client::OpenSessionRequest;
use shared::models::{Table, TableSession};

/// Mediates the open/close protocol for physical tables.
pub struct TableLifecycle {
    api: Arc<dyn OrderingApi>,
    ordering_base_url: String,
}

impl TableLifecycle {
    pub fn new(api: Arc<dyn OrderingApi>, ordering_base_url: impl Into<String>) -> Self {
        Self {
            api,
            ordering_base_url: ordering_base_url.into(),
        }
    }

    /// Start opening an available table.
    ///
    /// Generates a fresh v4 session token and builds the customer ordering
    /// URL for it. Only checks availability client-side; the server is
    /// trusted to reject a second open for the same table.
    pub fn open(&self, table: &Table) -> ClientResult<PendingOpen> {
        if !table.is_available() {
            return Err(ClientError::TableOccupied(table.number.clone()));
        }

        let token = Uuid::new_v4().to_string();
        let order_url = order_url(&self.ordering_base_url, &table.number, &token);

        Ok(PendingOpen {
            api: Arc::clone(&self.api),
            table_id: table.id.clone(),
            table_number: table.number.clone(),
            token,
            order_url,
        })
    }

    /// Start closing an occupied table.
    ///
    /// Fetches the open session with its order list as a read-only preview.
    /// A failed fetch aborts the flow with the raised error and the table
    /// stays occupied.
    pub async fn close(&self, table: &Table) -> ClientResult<BillPreview> {
        if table.is_available() {
            return Err(ClientError::TableIdle(table.number.clone()));
        }

        let session = self.api.table_orders(&table.id).await?;

        Ok(BillPreview {
            api: Arc::clone(&self.api),
            table_id: table.id.clone(),
            table_number: table.number.clone(),
            session,
        })
    }
}

/// An open flow awaiting confirmation.
pub struct PendingOpen {
    api: Arc<dyn OrderingApi>,
    table_id: String,
    table_number: String,
    token: String,
    order_url: String,
}

impl PendingOpen {
    pub fn table_number(&self) -> &str {
        &self.table_number
    }

    /// The generated session token
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Customer ordering URL the scannable code points at
    pub fn order_url(&self) -> &str {
        &self.order_url
    }

    /// The ordering URL rendered as a unicode QR code
    pub fn qr_code(&self) -> ClientResult<String> {
        Ok(crate::qr::render_unicode(&self.order_url)?)
    }

    /// Submit the open request, binding the token to the table.
    pub async fn confirm(self) -> ClientResult<()> {
        self.api
            .open_table_session(OpenSessionRequest {
                table_id: self.table_id,
                token: self.token,
            })
            .await
    }
}

/// A close flow awaiting confirmation, holding the previewed bill.
pub struct BillPreview {
    api: Arc<dyn OrderingApi>,
    table_id: String,
    table_number: String,
    session: TableSession,
}

impl BillPreview {
    pub fn table_number(&self) -> &str {
        &self.table_number
    }

    /// The previewed open session with its orders
    pub fn session(&self) -> &TableSession {
        &self.session
    }

    /// Display total of the previewed orders
    pub fn total(&self) -> f64 {
        self.session.total()
    }

    /// Submit the close request, releasing the table.
    pub async fn confirm(self) -> ClientResult<()> {
        self.api.close_table_session(&self.table_id).await
    }
}

fn order_url(base: &str, table_number: &str, token: &str) -> String {
    format!(
        "{}/order/{}?token={}",
        base.trim_end_matches('/'),
        table_number,
        token
    )
}
