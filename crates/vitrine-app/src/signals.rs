//! Termination signals: SIGINT / SIGTERM (Ctrl+C on Windows) end the gallery

use std::future::Future;

use tokio::sync::mpsc;

use crate::message::Message;
use vitrine_core::prelude::*;

/// Send `Message::Quit` into the gallery loop on the first termination signal
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    spawn_quit_on(termination(), tx);
}

/// Send `Message::Quit` once `trigger` completes successfully.
///
/// A trigger that fails to register sends nothing; the gallery can still be
/// left with `q` or Ctrl+C as a key.
fn spawn_quit_on<F>(trigger: F, tx: mpsc::Sender<Message>)
where
    F: Future<Output = Result<&'static str>> + Send + 'static,
{
    tokio::spawn(async move {
        match trigger.await {
            Ok(name) => {
                info!("{} received, closing the gallery", name);
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Gallery loop already finished");
                }
            }
            Err(e) => warn!("No termination signal handler: {}", e),
        }
    });
}

#[cfg(unix)]
async fn termination() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())
        .map_err(|e| Error::terminal(format!("SIGINT: {}", e)))?;
    let mut terminate = signal(SignalKind::terminate())
        .map_err(|e| Error::terminal(format!("SIGTERM: {}", e)))?;

    let name = tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
    };
    Ok(name)
}

#[cfg(windows)]
async fn termination() -> Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Ctrl+C: {}", e)))?;
    Ok("Ctrl+C")
}
