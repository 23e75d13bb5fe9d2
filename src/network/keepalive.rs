//! Periodic keep-alive PING to every session.
//!
//! Best-effort only: a full or closed sink just misses the probe, and a
//! missing PONG never disconnects anyone.

use crate::state::Matrix;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{info, trace};

/// Spawn the keep-alive task. An interval of 0 disables it.
pub fn spawn_keepalive(matrix: Arc<Matrix>, interval_secs: u64) -> Option<JoinHandle<()>> {
    if interval_secs == 0 {
        info!("Keep-alive PING disabled");
        return None;
    }

    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let sent = matrix.ping_all();
            trace!(sent, sessions = matrix.session_count(), "Keep-alive PING");
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tokio::sync::mpsc;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_disabled_when_zero() {
        let matrix = Arc::new(Matrix::new(&Config::default()));
        assert!(spawn_keepalive(matrix, 0).is_none());
    }

    #[tokio::test]
    async fn test_pings_every_session() {
        let matrix = Arc::new(Matrix::new(&Config::default()));
        let a = matrix.register();
        let (tx, mut rx) = mpsc::channel(4);
        matrix.attach_sink(a, tx);

        let handle = spawn_keepalive(Arc::clone(&matrix), 1).unwrap();
        let msg = timeout(Duration::from_secs(5), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(msg.to_string(), "PING :irc.example.com");
        handle.abort();
    }
}
