// mango-client/tests/admin_flows.rs
// Table lifecycle and order board flows against an in-memory API double

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;

use mango_client::{ClientError, ClientResult, OrderBoard, OrderingApi, TableLifecycle};
use shared::client::OpenSessionRequest;
use shared::models::{MenuRef, OrderItem, OrderStatus, Table, TableSession};

fn table(id: &str, number: &str, current_token: Option<&str>) -> Table {
    Table {
        id: id.to_string(),
        number: number.to_string(),
        current_token: current_token.map(str::to_string),
    }
}

fn order(id: i64, quantity: i64, price_at_time: f64, status: OrderStatus) -> OrderItem {
    OrderItem {
        id,
        quantity,
        price_at_time,
        remark: None,
        status,
        created_at: Utc::now(),
        menu: MenuRef {
            name: "Pad Thai".to_string(),
        },
        session: None,
        options: vec![],
    }
}

fn session(token: &str, orders: Vec<OrderItem>) -> TableSession {
    TableSession {
        id: 1,
        token: token.to_string(),
        opened_at: Utc::now(),
        orders,
    }
}

/// Deterministic stand-in for the ordering API.
#[derive(Default)]
struct MockApi {
    tables: Mutex<Vec<Table>>,
    sessions: Mutex<HashMap<String, TableSession>>,
    orders: Mutex<Vec<OrderItem>>,
    list_order_calls: AtomicUsize,
    fail_status_update: AtomicBool,
    last_status_update: Mutex<Option<(i64, OrderStatus)>>,
}

impl MockApi {
    fn with_tables(tables: Vec<Table>) -> Self {
        Self {
            tables: Mutex::new(tables),
            ..Default::default()
        }
    }

    fn seed_session(&self, table_id: &str, session: TableSession) {
        self.sessions
            .lock()
            .unwrap()
            .insert(table_id.to_string(), session);
    }

    fn seed_orders(&self, orders: Vec<OrderItem>) {
        *self.orders.lock().unwrap() = orders;
    }

    fn table_by_id(&self, id: &str) -> Table {
        self.tables
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .unwrap()
    }
}

#[async_trait]
impl OrderingApi for MockApi {
    async fn list_tables(&self) -> ClientResult<Vec<Table>> {
        Ok(self.tables.lock().unwrap().clone())
    }

    async fn open_table_session(&self, request: OpenSessionRequest) -> ClientResult<()> {
        let mut tables = self.tables.lock().unwrap();
        let table = tables
            .iter_mut()
            .find(|t| t.id == request.table_id)
            .ok_or_else(|| ClientError::NotFound("table".to_string()))?;
        table.current_token = Some(request.token.clone());
        drop(tables);

        self.seed_session(&request.table_id, session(&request.token, vec![]));
        Ok(())
    }

    async fn table_orders(&self, table_id: &str) -> ClientResult<TableSession> {
        self.sessions
            .lock()
            .unwrap()
            .get(table_id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound("session".to_string()))
    }

    async fn close_table_session(&self, table_id: &str) -> ClientResult<()> {
        self.sessions.lock().unwrap().remove(table_id);
        let mut tables = self.tables.lock().unwrap();
        if let Some(table) = tables.iter_mut().find(|t| t.id == table_id) {
            table.current_token = None;
        }
        Ok(())
    }

    async fn list_active_orders(&self) -> ClientResult<Vec<OrderItem>> {
        self.list_order_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.orders.lock().unwrap().clone())
    }

    async fn update_order_status(&self, order_id: i64, status: OrderStatus) -> ClientResult<()> {
        *self.last_status_update.lock().unwrap() = Some((order_id, status));

        if self.fail_status_update.load(Ordering::SeqCst) {
            return Err(ClientError::Internal("update failed".to_string()));
        }

        let mut orders = self.orders.lock().unwrap();
        if let Some(order) = orders.iter_mut().find(|o| o.id == order_id) {
            order.status = status;
        }
        Ok(())
    }
}

// ========== Table lifecycle ==========

#[tokio::test]
async fn open_then_close_returns_table_to_available() {
    let api = Arc::new(MockApi::with_tables(vec![table("t-1", "4", None)]));
    let lifecycle = TableLifecycle::new(api.clone(), "http://localhost:3002");

    let pending = lifecycle.open(&api.table_by_id("t-1")).unwrap();
    let token = pending.token().to_string();
    pending.confirm().await.unwrap();

    let occupied = api.table_by_id("t-1");
    assert!(!occupied.is_available());
    assert_eq!(occupied.current_token.as_deref(), Some(token.as_str()));

    // Freshly opened table has no orders yet; preview must not fail on that.
    let preview = lifecycle.close(&occupied).await.unwrap();
    assert_eq!(preview.session().orders.len(), 0);
    assert_eq!(preview.total(), 0.0);
    preview.confirm().await.unwrap();

    assert!(api.table_by_id("t-1").is_available());
}

#[tokio::test]
async fn bill_preview_totals_previewed_orders() {
    let api = Arc::new(MockApi::with_tables(vec![table("t-1", "4", Some("tok"))]));
    api.seed_session(
        "t-1",
        session(
            "tok",
            vec![
                order(1, 2, 50.0, OrderStatus::Served),
                order(2, 1, 120.0, OrderStatus::Served),
            ],
        ),
    );
    let lifecycle = TableLifecycle::new(api.clone(), "http://localhost:3002");

    let preview = lifecycle.close(&api.table_by_id("t-1")).await.unwrap();
    assert_eq!(preview.total(), 220.0);
}

#[tokio::test]
async fn failed_close_leaves_table_occupied() {
    // No session seeded: the preview fetch itself fails and the flow aborts.
    let api = Arc::new(MockApi::with_tables(vec![table("t-1", "4", Some("tok"))]));
    let lifecycle = TableLifecycle::new(api.clone(), "http://localhost:3002");

    let result = lifecycle.close(&api.table_by_id("t-1")).await;
    assert!(result.is_err());
    assert!(!api.table_by_id("t-1").is_available());
}

// ========== Order board ==========

#[tokio::test]
async fn advance_pending_issues_cooking_and_relocates() {
    let api = Arc::new(MockApi::default());
    api.seed_orders(vec![order(1, 1, 50.0, OrderStatus::Pending)]);
    let board = OrderBoard::new(api.clone(), CancellationToken::new());

    board.refresh().await.unwrap();
    let lanes = board.lanes().await;
    assert_eq!(lanes.pending.len(), 1);
    assert!(lanes.cooking.is_empty());

    let target = lanes.pending[0].clone();
    let next = board.advance(&target).await.unwrap();
    assert_eq!(next, OrderStatus::Cooking);
    assert_eq!(
        *api.last_status_update.lock().unwrap(),
        Some((1, OrderStatus::Cooking))
    );

    // advance refetches immediately; the order moved lanes without a tick
    let lanes = board.lanes().await;
    assert!(lanes.pending.is_empty());
    assert_eq!(lanes.cooking.len(), 1);
    assert_eq!(lanes.cooking[0].id, 1);
}

#[tokio::test]
async fn failed_advance_leaves_lane_unchanged() {
    let api = Arc::new(MockApi::default());
    api.seed_orders(vec![order(1, 1, 50.0, OrderStatus::Pending)]);
    api.fail_status_update.store(true, Ordering::SeqCst);
    let board = OrderBoard::new(api.clone(), CancellationToken::new());

    board.refresh().await.unwrap();
    let target = board.lanes().await.pending[0].clone();

    let result = board.advance(&target).await;
    assert!(result.is_err());

    let lanes = board.lanes().await;
    assert_eq!(lanes.pending.len(), 1);
    assert!(lanes.cooking.is_empty());
}

#[tokio::test]
async fn advance_rejects_terminal_status() {
    let api = Arc::new(MockApi::default());
    let board = OrderBoard::new(api.clone(), CancellationToken::new());

    let served = order(9, 1, 50.0, OrderStatus::Served);
    let result = board.advance(&served).await;
    assert!(matches!(result, Err(ClientError::TerminalStatus(9))));
    // rejected locally, nothing was sent
    assert!(api.last_status_update.lock().unwrap().is_none());
}

#[tokio::test]
async fn cancelled_board_stops_polling() {
    let api = Arc::new(MockApi::default());
    let shutdown = CancellationToken::new();
    let board = Arc::new(
        OrderBoard::new(api.clone(), shutdown.clone())
            .with_poll_interval(Duration::from_millis(10)),
    );

    let runner = tokio::spawn({
        let board = board.clone();
        async move { board.run().await }
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    shutdown.cancel();
    runner.await.unwrap();

    let calls_at_cancel = api.list_order_calls.load(Ordering::SeqCst);
    assert!(calls_at_cancel > 1);

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(api.list_order_calls.load(Ordering::SeqCst), calls_at_cancel);
}

// ========== Fetch race ==========

/// Serves scripted responses; a gated response blocks until released.
struct GatedApi {
    responses: Mutex<VecDeque<(Vec<OrderItem>, Option<Arc<Notify>>)>>,
}

#[async_trait]
impl OrderingApi for GatedApi {
    async fn list_tables(&self) -> ClientResult<Vec<Table>> {
        Ok(vec![])
    }

    async fn open_table_session(&self, _request: OpenSessionRequest) -> ClientResult<()> {
        Ok(())
    }

    async fn table_orders(&self, _table_id: &str) -> ClientResult<TableSession> {
        Err(ClientError::NotFound("session".to_string()))
    }

    async fn close_table_session(&self, _table_id: &str) -> ClientResult<()> {
        Ok(())
    }

    async fn list_active_orders(&self) -> ClientResult<Vec<OrderItem>> {
        let (orders, gate) = self.responses.lock().unwrap().pop_front().unwrap();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        Ok(orders)
    }

    async fn update_order_status(&self, _order_id: i64, _status: OrderStatus) -> ClientResult<()> {
        Ok(())
    }
}

#[tokio::test]
async fn stale_fetch_response_is_discarded() {
    let gate = Arc::new(Notify::new());
    let stale = vec![order(1, 1, 50.0, OrderStatus::Pending)];
    let fresh = vec![order(2, 1, 50.0, OrderStatus::Pending)];

    let api = Arc::new(GatedApi {
        responses: Mutex::new(VecDeque::from([
            (stale, Some(gate.clone())),
            (fresh, None),
        ])),
    });
    let board = Arc::new(OrderBoard::new(api.clone(), CancellationToken::new()));

    // First refetch is issued first but its response hangs on the gate.
    let slow = tokio::spawn({
        let board = board.clone();
        async move { board.refresh().await }
    });
    tokio::time::sleep(Duration::from_millis(10)).await;

    // Second refetch is issued later and resolves immediately.
    board.refresh().await.unwrap();
    let ids: Vec<i64> = board.orders().await.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![2]);

    // Release the first response; it arrives last but must not win.
    gate.notify_one();
    slow.await.unwrap().unwrap();

    let ids: Vec<i64> = board.orders().await.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![2]);
}
