//! Kitchen order board
//!
//! Polls the active-order feed at a fixed interval and partitions it into
//! the three visible lanes. The snapshot is replaced wholesale on every
//! applied fetch; a monotonic sequence number decides which fetch wins when
//! the poll timer and a mutation-triggered refetch race, so a stale poll
//! response can never clobber a newer one.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::{ClientError, ClientResult, OrderingApi};
use shared::models::{OrderItem, OrderStatus};

/// Fixed poll interval of the board
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// The three visible board lanes.
///
/// `SERVED` and unrecognized statuses have no lane; such orders leave the
/// visible board entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    Pending,
    Cooking,
    ReadyToServe,
}

impl Lane {
    /// Lane placement is a pure function of the order status.
    pub fn of(status: OrderStatus) -> Option<Lane> {
        match status {
            OrderStatus::Pending => Some(Lane::Pending),
            OrderStatus::Cooking => Some(Lane::Cooking),
            OrderStatus::ReadyToServe => Some(Lane::ReadyToServe),
            OrderStatus::Served | OrderStatus::Unknown => None,
        }
    }

    /// Column heading shown above the lane
    pub fn title(self) -> &'static str {
        match self {
            Lane::Pending => "Pending",
            Lane::Cooking => "Cooking",
            Lane::ReadyToServe => "Ready to Serve",
        }
    }
}

/// One board snapshot partitioned into lanes, in feed order.
#[derive(Debug, Clone, Default)]
pub struct Lanes {
    pub pending: Vec<OrderItem>,
    pub cooking: Vec<OrderItem>,
    pub ready_to_serve: Vec<OrderItem>,
}

impl Lanes {
    pub fn partition(orders: &[OrderItem]) -> Lanes {
        let mut lanes = Lanes::default();
        for order in orders {
            match Lane::of(order.status) {
                Some(Lane::Pending) => lanes.pending.push(order.clone()),
                Some(Lane::Cooking) => lanes.cooking.push(order.clone()),
                Some(Lane::ReadyToServe) => lanes.ready_to_serve.push(order.clone()),
                None => {}
            }
        }
        lanes
    }
}

struct Snapshot {
    orders: Vec<OrderItem>,
    applied_seq: u64,
}

/// Polling kitchen board over the active-order feed.
pub struct OrderBoard {
    api: Arc<dyn OrderingApi>,
    snapshot: RwLock<Snapshot>,
    seq: AtomicU64,
    shutdown: CancellationToken,
    poll_interval: Duration,
}

impl OrderBoard {
    pub fn new(api: Arc<dyn OrderingApi>, shutdown: CancellationToken) -> Self {
        Self {
            api,
            snapshot: RwLock::new(Snapshot {
                orders: Vec::new(),
                applied_seq: 0,
            }),
            seq: AtomicU64::new(0),
            shutdown,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Override the poll interval (tests and demos)
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Poll loop: fetch once on entry, then on every tick until cancelled.
    ///
    /// Failed ticks are logged and swallowed; the board keeps serving its
    /// last-good snapshot through an API outage.
    pub async fn run(&self) {
        tracing::info!("order board polling started");

        if let Err(e) = self.refresh().await {
            tracing::warn!("initial order fetch failed: {e}");
        }

        let mut ticker = tokio::time::interval(self.poll_interval);
        ticker.tick().await; // skip immediate tick

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => break,

                _ = ticker.tick() => {
                    if let Err(e) = self.refresh().await {
                        tracing::warn!("order poll failed, keeping last snapshot: {e}");
                    }
                }
            }
        }

        tracing::info!("order board polling stopped");
    }

    /// Fetch the full active-order list and replace the snapshot.
    ///
    /// The sequence number is taken before the request goes out; a response
    /// is applied only while no later-numbered response has been, so the
    /// winner of a fetch race is decided by issue order, not arrival order.
    pub async fn refresh(&self) -> ClientResult<()> {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let orders = self.api.list_active_orders().await?;
        self.apply(seq, orders).await;
        Ok(())
    }

    async fn apply(&self, seq: u64, orders: Vec<OrderItem>) {
        let mut snapshot = self.snapshot.write().await;
        if seq > snapshot.applied_seq {
            snapshot.applied_seq = seq;
            snapshot.orders = orders;
        } else {
            tracing::debug!(seq, applied_seq = snapshot.applied_seq, "discarding stale order fetch");
        }
    }

    /// Current snapshot, unpartitioned
    pub async fn orders(&self) -> Vec<OrderItem> {
        self.snapshot.read().await.orders.clone()
    }

    /// Current snapshot partitioned into the three visible lanes
    pub async fn lanes(&self) -> Lanes {
        Lanes::partition(&self.snapshot.read().await.orders)
    }

    /// Advance one order to its next status.
    ///
    /// One call moves one order one edge forward; there is no batch and no
    /// backward transition. On success the board refetches immediately so
    /// the new lane placement shows without waiting for the next tick. No
    /// optimistic update: on failure the snapshot is untouched and the
    /// order stays in its prior lane.
    pub async fn advance(&self, order: &OrderItem) -> ClientResult<OrderStatus> {
        let next = order
            .status
            .next()
            .ok_or(ClientError::TerminalStatus(order.id))?;

        self.api.update_order_status(order.id, next).await?;

        if let Err(e) = self.refresh().await {
            tracing::warn!("refetch after status update failed: {e}");
        }

        Ok(next)
    }
}
