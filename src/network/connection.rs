//! Connection - Handles an individual client connection.
//!
//! ```text
//!   socket ─▶ FramedRead<LineCodec> ─▶ ParsedLine ─▶ Intake
//!                                                     │
//!   socket ◀─ FramedWrite<LineCodec> ◀─ sink ◀─ Matrix::deliver
//! ```
//!
//! The reader answers PING and swallows PONG itself; QUIT, EOF and read
//! errors end the loop. Everything else goes through the intake so one
//! worker sees this session's commands in order.

use crate::handlers::trailing_text;
use crate::intake::{Event, Intake};
use crate::state::{Matrix, SessionId};
use futures_util::{SinkExt, StreamExt};
use relay_proto::{Command, LineCodec, Message, ParsedLine, Prefix};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_util::codec::{FramedRead, FramedWrite};
use tracing::{debug, info, warn};

/// A client connection handler.
pub struct Connection {
    uid: SessionId,
    addr: SocketAddr,
    stream: TcpStream,
    matrix: Arc<Matrix>,
    intake: Intake,
    /// Receiving half of this session's sink.
    outgoing: mpsc::Receiver<Arc<Message>>,
    max_line_length: usize,
}

impl Connection {
    /// Create a new connection handler.
    pub fn new(
        uid: SessionId,
        stream: TcpStream,
        addr: SocketAddr,
        matrix: Arc<Matrix>,
        intake: Intake,
        outgoing: mpsc::Receiver<Arc<Message>>,
        max_line_length: usize,
    ) -> Self {
        Self {
            uid,
            addr,
            stream,
            matrix,
            intake,
            outgoing,
            max_line_length,
        }
    }

    /// Run the connection until the client leaves or the socket fails.
    pub async fn run(self) -> anyhow::Result<()> {
        let Self {
            uid,
            addr,
            stream,
            matrix,
            intake,
            mut outgoing,
            max_line_length,
        } = self;
        info!(%addr, "Client connected");

        let (read_half, write_half) = stream.into_split();
        let mut reader = FramedRead::new(read_half, LineCodec::with_max_len(max_line_length));
        let mut writer = FramedWrite::new(write_half, LineCodec::new());

        // Ends once the session's sink is dropped by Matrix::disconnect
        let writer_task = tokio::spawn(async move {
            while let Some(msg) = outgoing.recv().await {
                if let Err(e) = writer.send(msg).await {
                    debug!(error = %e, "Write failed");
                    break;
                }
            }
        });

        let result = loop {
            let line = match reader.next().await {
                Some(Ok(line)) => line,
                Some(Err(e)) => break Err(anyhow::Error::from(e)),
                None => break Ok(()),
            };
            if line.is_empty() {
                continue;
            }
            debug!(raw = %line, "Received line");

            let parsed = ParsedLine::parse(&line);
            if parsed.is_quit() {
                info!("Client quit");
                break Ok(());
            }
            match parsed.verb.as_str() {
                "PING" => {
                    let server = matrix.server_info.name.clone();
                    let token = trailing_text(&parsed.params);
                    let pong = Message::from(Command::PONG(server.clone(), token))
                        .with_prefix(Prefix::ServerName(server));
                    matrix.send_to(uid, Arc::new(pong));
                    continue;
                }
                "PONG" => continue,
                _ => {}
            }

            if intake.submit(Event::Line { uid, line: parsed }).await.is_err() {
                break Err(anyhow::anyhow!("intake closed"));
            }
        };

        // Queued behind this session's pending commands
        if intake.submit(Event::Disconnect { uid }).await.is_err() {
            warn!("Intake closed, removing session directly");
            matrix.disconnect(uid);
        }
        let _ = writer_task.await;

        info!(%addr, "Client disconnected");
        result
    }
}
