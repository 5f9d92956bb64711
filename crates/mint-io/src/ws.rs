use futures_util::{SinkExt, StreamExt};
use kanal::{AsyncReceiver, AsyncSender};
use mint_types::AppEvent;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use crate::surface::PageCommand;

/// Connect to the page relay and pump events both ways until the socket closes
pub async fn start_ws_bridge(
    url: &str,
    events: AsyncSender<AppEvent>,
    commands: AsyncReceiver<PageCommand>,
) -> Result<(), anyhow::Error> {
    let (ws_stream, _) = connect_async(url).await?;
    tracing::info!("Connected to page relay at {}", url);

    let (mut write, mut read) = ws_stream.split();

    let mut reader = tokio::spawn(async move {
        while let Some(msg) = read.next().await {
            match msg {
                Ok(msg) if msg.is_text() => {
                    let Some(event) = msg.to_text().ok().and_then(parse_event) else {
                        continue;
                    };
                    if events.send(event).await.is_err() {
                        break;
                    }
                }
                Ok(msg) if msg.is_close() => break,
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("Page relay read error: {}", e);
                    break;
                }
            }
        }
    });

    let writer = async {
        while let Ok(command) = commands.recv().await {
            let json = serde_json::to_string(&command)?;
            write.send(Message::text(json)).await?;
        }
        Ok::<_, anyhow::Error>(())
    };

    let result = tokio::select! {
        _ = &mut reader => Ok(()),
        result = writer => result,
    };
    reader.abort();

    tracing::info!("Page relay disconnected");
    result
}

/// Malformed frames are logged and dropped
pub fn parse_event(text: &str) -> Option<AppEvent> {
    match serde_json::from_str(text) {
        Ok(event) => Some(event),
        Err(e) => {
            tracing::warn!("Dropping malformed page event: {}", e);
            None
        }
    }
}
