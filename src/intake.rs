//! Intake queue and worker pool.
//!
//! ```text
//!  Connection ─┐                         ┌─▶ worker 0 ─┐
//!  Connection ─┼─▶ intake ─▶ dispatcher ─┼─▶ worker 1 ─┼─▶ Matrix::deliver
//!  Connection ─┘  (bounded)  (by shard)  └─▶ worker N ─┘
//! ```
//!
//! Every event of one session lands on the same worker, so its commands run
//! in the order they were read, and its disconnect runs after them.

use crate::config::WorkersConfig;
use crate::handlers::Registry;
use crate::state::{Matrix, SessionId};
use relay_proto::ParsedLine;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, trace, warn};

/// Work item produced by a connection.
#[derive(Debug)]
pub enum Event {
    /// One client line for the registry.
    Line { uid: SessionId, line: ParsedLine },
    /// The connection is gone; remove the session.
    Disconnect { uid: SessionId },
}

impl Event {
    pub fn uid(&self) -> SessionId {
        match self {
            Event::Line { uid, .. } | Event::Disconnect { uid } => *uid,
        }
    }
}

#[derive(Debug, Error)]
#[error("intake queue closed")]
pub struct IntakeClosed;

/// Submission handle shared by every connection.
#[derive(Clone)]
pub struct Intake {
    tx: mpsc::Sender<Event>,
}

impl Intake {
    /// Queue an event, waiting for room if the intake is full.
    pub async fn submit(&self, event: Event) -> Result<(), IntakeClosed> {
        self.tx.send(event).await.map_err(|_| IntakeClosed)
    }
}

/// Start the dispatcher and `config.count` workers.
///
/// The returned handle completes once every `Intake` clone is dropped and
/// the workers have drained their queues.
pub fn spawn(
    matrix: Arc<Matrix>,
    registry: Arc<Registry>,
    config: &WorkersConfig,
) -> (Intake, JoinHandle<()>) {
    let (tx, mut rx) = mpsc::channel::<Event>(config.intake_capacity);
    let count = config.count.max(1);
    let per_worker = (config.intake_capacity / count).max(1);

    let mut queues = Vec::with_capacity(count);
    let mut workers = Vec::with_capacity(count);
    for id in 0..count {
        let (worker_tx, worker_rx) = mpsc::channel(per_worker);
        queues.push(worker_tx);
        workers.push(tokio::spawn(run_worker(
            id,
            worker_rx,
            Arc::clone(&matrix),
            Arc::clone(&registry),
        )));
    }
    info!(workers = count, capacity = config.intake_capacity, "Worker pool started");

    let handle = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            let shard = event.uid().shard(count);
            if queues[shard].send(event).await.is_err() {
                warn!(worker = shard, "Worker queue closed, stopping dispatcher");
                break;
            }
        }
        drop(queues);
        for worker in workers {
            let _ = worker.await;
        }
        debug!("Worker pool stopped");
    });

    (Intake { tx }, handle)
}

async fn run_worker(
    id: usize,
    mut rx: mpsc::Receiver<Event>,
    matrix: Arc<Matrix>,
    registry: Arc<Registry>,
) {
    while let Some(event) = rx.recv().await {
        match event {
            Event::Line { uid, line } => {
                let outbox = registry.dispatch(&matrix, uid, &line);
                if !outbox.is_empty() {
                    trace!(session = %uid, lines = outbox.len(), "Delivering");
                    matrix.deliver(outbox);
                }
            }
            Event::Disconnect { uid } => {
                matrix.disconnect(uid);
            }
        }
    }
    debug!(worker = id, "Worker exiting");
}
