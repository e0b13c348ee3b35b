use log::{debug, info};
use serde::Deserialize;
use tokio::{
    sync::{broadcast, mpsc, oneshot},
    time::Duration,
};

use crate::{
    core::store::{DoctorStore, StoreSnapshotV1},
    doctor::{DoctorDraft, DoctorRecord},
    error::{RuntimeError, StoreError},
    types::{DoctorId, PaginationMode},
};

use super::events::RosterEvent;

/// Runtime tuning. Missing JSON keys fall back to [`RuntimeConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Artificial delay applied before every store operation completes.
    pub latency_ms: u64,
    /// How `list` treats its `(page, limit)` window.
    pub pagination: PaginationMode,
    /// Capacity of the command channel feeding the store task.
    pub command_queue_bound: usize,
    /// Capacity of the broadcast event channel.
    pub event_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            latency_ms: 500,
            pagination: PaginationMode::Slice,
            command_queue_bound: 256,
            event_capacity: 1024,
        }
    }
}

impl RuntimeConfig {
    /// Default config with no artificial latency.
    pub fn immediate() -> Self {
        Self {
            latency_ms: 0,
            ..Self::default()
        }
    }

    /// Parses a (possibly partial) JSON object of overrides.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// Cloneable async front door to a store owned by a background task.
#[derive(Clone)]
pub struct RosterHandle {
    cmd_tx: mpsc::Sender<Command>,
    events_tx: broadcast::Sender<RosterEvent>,
    latency: Duration,
}

enum Command {
    List {
        page: usize,
        limit: usize,
        resp: oneshot::Sender<Vec<DoctorRecord>>,
    },
    Get {
        id: DoctorId,
        resp: oneshot::Sender<Result<DoctorRecord, StoreError>>,
    },
    Create {
        draft: DoctorDraft,
        resp: oneshot::Sender<Result<DoctorRecord, StoreError>>,
    },
    Update {
        id: DoctorId,
        draft: DoctorDraft,
        resp: oneshot::Sender<Result<DoctorRecord, StoreError>>,
    },
    Delete {
        id: DoctorId,
        resp: oneshot::Sender<Result<(), StoreError>>,
    },
    Count {
        resp: oneshot::Sender<usize>,
    },
    Recent {
        n: usize,
        resp: oneshot::Sender<Vec<DoctorRecord>>,
    },
    Snapshot {
        resp: oneshot::Sender<StoreSnapshotV1>,
    },
    Shutdown {
        resp: oneshot::Sender<()>,
    },
}

/// Moves `store` into a background task and returns a handle to it.
///
/// Must be called from within a tokio runtime.
pub fn spawn_roster(store: DoctorStore, config: RuntimeConfig) -> RosterHandle {
    let (cmd_tx, mut cmd_rx) = mpsc::channel::<Command>(config.command_queue_bound.max(1));
    let (events_tx, _) = broadcast::channel::<RosterEvent>(config.event_capacity.max(1));

    let events_tx_loop = events_tx.clone();
    let mut store = store;
    store.set_pagination(config.pagination);

    info!(
        "event=runtime_start module=runtime status=ok latency_ms={} pagination={:?} records={}",
        config.latency_ms,
        config.pagination,
        store.len()
    );

    tokio::spawn(async move {
        while let Some(cmd) = cmd_rx.recv().await {
            if handle_command(cmd, &mut store, &events_tx_loop) {
                break;
            }
        }
        info!(
            "event=runtime_stop module=runtime status=ok records={}",
            store.len()
        );
    });

    RosterHandle {
        cmd_tx,
        events_tx,
        latency: config.latency(),
    }
}

impl RosterHandle {
    /// Subscribes to change events emitted after successful mutations.
    pub fn subscribe(&self) -> broadcast::Receiver<RosterEvent> {
        self.events_tx.subscribe()
    }

    /// Lists a window of records, see [`DoctorStore::list`].
    pub async fn list(&self, page: usize, limit: usize) -> Result<Vec<DoctorRecord>, RuntimeError> {
        self.request(|resp| Command::List { page, limit, resp }).await
    }

    /// Fetches one record by id.
    pub async fn get(&self, id: impl Into<DoctorId>) -> Result<DoctorRecord, RuntimeError> {
        let id = id.into();
        Ok(self.request(|resp| Command::Get { id, resp }).await??)
    }

    /// Creates a record, returning it with its generated id.
    pub async fn create(&self, draft: DoctorDraft) -> Result<DoctorRecord, RuntimeError> {
        Ok(self.request(|resp| Command::Create { draft, resp }).await??)
    }

    /// Replaces every non-id attribute of `id`.
    pub async fn update(
        &self,
        id: impl Into<DoctorId>,
        draft: DoctorDraft,
    ) -> Result<DoctorRecord, RuntimeError> {
        let id = id.into();
        Ok(self
            .request(|resp| Command::Update { id, draft, resp })
            .await??)
    }

    /// Removes `id`. Deleting the same id twice fails the second time.
    pub async fn delete(&self, id: impl Into<DoctorId>) -> Result<(), RuntimeError> {
        let id = id.into();
        Ok(self.request(|resp| Command::Delete { id, resp }).await??)
    }

    /// Total number of records.
    pub async fn count(&self) -> Result<usize, RuntimeError> {
        self.request(|resp| Command::Count { resp }).await
    }

    /// The last `n` records in insertion order.
    pub async fn recent(&self, n: usize) -> Result<Vec<DoctorRecord>, RuntimeError> {
        self.request(|resp| Command::Recent { n, resp }).await
    }

    /// Ordered copy of every record.
    pub async fn snapshot(&self) -> Result<StoreSnapshotV1, RuntimeError> {
        self.request(|resp| Command::Snapshot { resp }).await
    }

    /// Stops the store task. Later calls fail with [`RuntimeError::ChannelClosed`].
    pub async fn shutdown(&self) -> Result<(), RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Shutdown { resp: tx })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    // Delivery runs on its own task so the operation lands even if the caller
    // stops polling; commands apply in the order their delays elapse.
    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        let cmd = make(tx);
        let cmd_tx = self.cmd_tx.clone();
        let latency = self.latency;
        tokio::spawn(async move {
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            if cmd_tx.send(cmd).await.is_err() {
                debug!("event=command_deliver module=runtime status=error error_code=channel_closed");
            }
        });
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }
}

fn handle_command(
    cmd: Command,
    store: &mut DoctorStore,
    events_tx: &broadcast::Sender<RosterEvent>,
) -> bool {
    match cmd {
        Command::List { page, limit, resp } => {
            let _ = resp.send(store.list(page, limit));
        }
        Command::Get { id, resp } => {
            let _ = resp.send(store.get_cloned(&id));
        }
        Command::Create { draft, resp } => {
            let res = store.create(draft);
            if let Ok(rec) = &res {
                let _ = events_tx.send(RosterEvent::Created { id: rec.id.clone() });
            }
            let _ = resp.send(res);
        }
        Command::Update { id, draft, resp } => {
            let res = store.update(&id, draft);
            if res.is_ok() {
                let _ = events_tx.send(RosterEvent::Updated { id });
            }
            let _ = resp.send(res);
        }
        Command::Delete { id, resp } => {
            let res = store.delete(&id).map(|_| ());
            if res.is_ok() {
                let _ = events_tx.send(RosterEvent::Deleted { id });
            }
            let _ = resp.send(res);
        }
        Command::Count { resp } => {
            let _ = resp.send(store.len());
        }
        Command::Recent { n, resp } => {
            let _ = resp.send(store.recent_cloned(n));
        }
        Command::Snapshot { resp } => {
            let _ = resp.send(store.export_snapshot());
        }
        Command::Shutdown { resp } => {
            let _ = resp.send(());
            return true;
        }
    }

    false
}
