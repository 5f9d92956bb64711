use std::env;
use std::sync::Arc;

use mint_config::Config;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod context;
pub mod controller;
pub mod events;
pub mod io;
pub mod state;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

// Single cooperative context: popup open/close never race across threads
#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::new();
    tracing::info!(
        "Translating to '{}' via {}, Anki at {}",
        config.translator.to_lang,
        config.translator.api_url,
        config.anki.url
    );

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks().await;

    tokio::select! {
        result = signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!("Failed to listen for ctrl+c: {}", e);
            }
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::warn!("Task exited"),
                Ok(Err(e)) => tracing::error!("Task failed: {e}"),
                Err(e) => tracing::error!("Task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    tasks.shutdown().await;
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,mint=debug"));

    let json = env::var("MINT_LOG_JSON").is_ok_and(|v| v == "1");

    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .init();
    }
}
