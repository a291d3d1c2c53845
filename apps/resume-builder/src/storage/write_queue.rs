//! Single-writer persistence queue for one storage key.
//!
//! # Ordering
//! - One background task owns all writes for the key: at most one write is
//!   in flight at any time.
//! - Requests land in a `watch` slot. A request that arrives while a write
//!   is in flight replaces any request still waiting, so only the newest
//!   snapshot is written next.
//! - Every request gets a sequence number; `flush` waits until the writer
//!   has settled the newest one.
//!
//! The persisted value therefore always converges to the last requested
//! snapshot, whatever the storage latency of individual writes.

use std::sync::Arc;

use anyhow::anyhow;
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, error};

use crate::errors::AppError;
use crate::storage::PersistedValue;

enum WriteOp<T> {
    Save(Arc<T>),
    Remove,
}

impl<T> Clone for WriteOp<T> {
    fn clone(&self) -> Self {
        match self {
            WriteOp::Save(value) => WriteOp::Save(Arc::clone(value)),
            WriteOp::Remove => WriteOp::Remove,
        }
    }
}

struct Request<T> {
    seq: u64,
    op: WriteOp<T>,
}

impl<T> Clone for Request<T> {
    fn clone(&self) -> Self {
        Self {
            seq: self.seq,
            op: self.op.clone(),
        }
    }
}

/// Outcome of the most recently completed write.
#[derive(Debug, Clone, Default)]
struct Settled {
    seq: u64,
    error: Option<String>,
}

pub struct WriteQueue<T> {
    key: &'static str,
    requests: watch::Sender<Option<Request<T>>>,
    settled: watch::Receiver<Settled>,
}

impl<T> WriteQueue<T>
where
    T: Serialize + Send + Sync + 'static,
{
    /// Starts the writer task. Must be called from within a Tokio runtime.
    pub fn spawn(target: Arc<PersistedValue<T>>) -> Self {
        let key = target.key();
        let (requests, request_rx) = watch::channel(None);
        let (settled_tx, settled) = watch::channel(Settled::default());

        tokio::spawn(run_writer(target, request_rx, settled_tx));

        Self {
            key,
            requests,
            settled,
        }
    }

    /// Queues a full overwrite with `value`. Returns immediately.
    pub fn save(&self, value: Arc<T>) -> u64 {
        self.submit(WriteOp::Save(value))
    }

    /// Queues deletion of the stored value. Returns immediately.
    pub fn remove(&self) -> u64 {
        self.submit(WriteOp::Remove)
    }

    fn submit(&self, op: WriteOp<T>) -> u64 {
        let mut seq = 0;
        self.requests.send_modify(|slot| {
            seq = slot.as_ref().map_or(0, |request| request.seq) + 1;
            *slot = Some(Request { seq, op });
        });
        seq
    }

    /// Waits until every request issued so far has settled.
    ///
    /// Returns the error of the final write if it failed. Earlier, superseded
    /// requests are never written and never reported.
    pub async fn flush(&self) -> Result<(), AppError> {
        let target = self
            .requests
            .borrow()
            .as_ref()
            .map_or(0, |request| request.seq);

        let mut settled = self.settled.clone();
        let outcome = settled
            .wait_for(|settled| settled.seq >= target)
            .await
            .map(|settled| Settled::clone(&settled))
            .map_err(|_| AppError::Internal(anyhow!("writer for '{}' has stopped", self.key)))?;

        match outcome.error {
            None => Ok(()),
            Some(message) => Err(AppError::Storage(std::io::Error::other(message))),
        }
    }
}

async fn run_writer<T>(
    target: Arc<PersistedValue<T>>,
    mut requests: watch::Receiver<Option<Request<T>>>,
    settled: watch::Sender<Settled>,
) where
    T: Serialize + Send + Sync + 'static,
{
    while requests.changed().await.is_ok() {
        let Some(request) = requests.borrow_and_update().clone() else {
            continue;
        };

        let result = match &request.op {
            WriteOp::Save(value) => target.save(value).await,
            WriteOp::Remove => target.remove().await,
        };

        let error = match result {
            Ok(()) => None,
            Err(e) => {
                error!("Error persisting '{}': {e}", target.key());
                Some(e.to_string())
            }
        };

        settled.send_replace(Settled {
            seq: request.seq,
            error,
        });
    }

    debug!("Writer for '{}' stopped", target.key());
}
