//! Gateway - TCP listener that accepts incoming connections.
//!
//! The Gateway binds the listen socket, registers a session for every
//! accepted client and spawns its Connection task.

use crate::config::LimitsConfig;
use crate::intake::Intake;
use crate::network::Connection;
use crate::state::Matrix;
use crate::telemetry::spans;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tracing::{Instrument, error, info, instrument};

/// The Gateway accepts incoming TCP connections and spawns handlers.
pub struct Gateway {
    listener: TcpListener,
    matrix: Arc<Matrix>,
    intake: Intake,
    limits: LimitsConfig,
}

impl Gateway {
    /// Bind the gateway to the specified address.
    pub async fn bind(
        addr: SocketAddr,
        matrix: Arc<Matrix>,
        intake: Intake,
        limits: LimitsConfig,
    ) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        info!(address = %listener.local_addr()?, "Listener bound");
        Ok(Self {
            listener,
            matrix,
            intake,
            limits,
        })
    }

    /// Run the gateway, accepting connections forever.
    #[instrument(skip(self), name = "gateway")]
    pub async fn run(self) -> anyhow::Result<()> {
        loop {
            let (stream, addr) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    error!(error = %e, "Failed to accept connection");
                    continue;
                }
            };

            let uid = self.matrix.register();
            let (tx, rx) = mpsc::channel(self.limits.sendq);
            self.matrix.attach_sink(uid, tx);

            let connection = Connection::new(
                uid,
                stream,
                addr,
                Arc::clone(&self.matrix),
                self.intake.clone(),
                rx,
                self.limits.max_line_length,
            );
            let span = spans::connection(&uid.to_string(), &addr.to_string());
            tokio::spawn(
                async move {
                    if let Err(e) = connection.run().await {
                        info!(error = %e, "Connection ended with error");
                    }
                }
                .instrument(span),
            );
        }
    }
}
