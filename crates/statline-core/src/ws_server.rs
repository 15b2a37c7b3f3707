// WebSocket server for the dashboard page.

use std::sync::Arc;

use futures_util::stream::Stream;
use futures_util::{Sink, SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::tungstenite::{self, Message};
use tracing::{debug, info, warn};

/// Turns one inbound text frame into an optional reply frame.
///
/// Implementations hold whatever state they need behind `&self`; one handler
/// is shared by every connection.
pub trait MessageHandler: Send + Sync + 'static {
    fn handle_text(&self, text: &str) -> Option<String>;
}

/// Bind the WebSocket listener on `host:port`.
pub async fn bind(host: &str, port: u16) -> anyhow::Result<TcpListener> {
    let listener = TcpListener::bind(format!("{host}:{port}")).await?;
    info!("WebSocket server listening on {}", listener.local_addr()?);
    Ok(listener)
}

/// Accept connections forever, serving each one on its own task.
///
/// A failed handshake only drops that connection; the accept loop keeps
/// running until the listener itself fails or the task is cancelled.
pub async fn run<H: MessageHandler>(listener: TcpListener, handler: Arc<H>) -> anyhow::Result<()> {
    loop {
        let (stream, addr) = listener.accept().await?;
        let addr_str = addr.to_string();
        info!("Accepted TCP connection from {addr_str}");

        let handler = Arc::clone(&handler);
        tokio::spawn(async move {
            serve_connection(stream, handler, addr_str).await;
        });
    }
}

async fn serve_connection<H: MessageHandler>(stream: TcpStream, handler: Arc<H>, addr: String) {
    let ws_stream = match tokio_tungstenite::accept_async(stream).await {
        Ok(ws) => ws,
        Err(e) => {
            warn!("WebSocket handshake failed for {addr}: {e}");
            return;
        }
    };

    let (mut write, read) = ws_stream.split();
    if let Err(e) = process_message_stream(read, &mut write, handler.as_ref(), &addr).await {
        warn!("Failed to send to {addr}: {e}");
    }
    info!("Client {addr} disconnected");
}

/// Feed every text frame from `stream` to `handler`, writing replies to
/// `sink`.
///
/// Generic over both halves so it can run against in-memory streams in
/// tests. Stops at a close frame or a read error; returns `Err` only when
/// writing a reply fails.
pub async fn process_message_stream<St, Si, H>(
    mut stream: St,
    sink: &mut Si,
    handler: &H,
    addr: &str,
) -> Result<(), Si::Error>
where
    St: Stream<Item = Result<Message, tungstenite::Error>> + Unpin,
    Si: Sink<Message> + Unpin,
    H: MessageHandler + ?Sized,
{
    while let Some(msg_result) = stream.next().await {
        match msg_result {
            Ok(Message::Text(text)) => {
                debug!("Received {} bytes from {addr}", text.len());
                if let Some(reply) = handler.handle_text(text.as_str()) {
                    sink.send(Message::Text(reply.into())).await?;
                }
            }
            Ok(Message::Close(_)) => {
                info!("Client {addr} sent close frame");
                break;
            }
            Err(e) => {
                warn!("WebSocket error from {addr}: {e}");
                break;
            }
            _ => {
                // Binary, ping, pong and raw frames carry nothing for us.
            }
        }
    }
    Ok(())
}
