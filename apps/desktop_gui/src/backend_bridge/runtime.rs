//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::UserDirectory;
use crossbeam_channel::{Receiver, Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Starts the backend worker. It owns a tokio runtime for its whole life and exits
/// once every command sender has been dropped.
pub fn launch(
    directory: Arc<dyn UserDirectory>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                emit(
                    &ui_tx,
                    UiEvent::Error(UiError::from_message(
                        UiErrorContext::BackendStartup,
                        format!("backend worker startup failure: failed to build runtime: {err}"),
                    )),
                );
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        emit(&ui_tx, UiEvent::Info("Backend worker ready".to_string()));

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                tracing::debug!(command = cmd.name(), "backend received command");
                match cmd {
                    BackendCommand::FetchUsers { attempt } => {
                        // Each fetch runs as its own task: an overlapping retry does not
                        // wait for the previous request, and whichever lands last wins.
                        let directory = Arc::clone(&directory);
                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            let event = fetch_users(directory.as_ref(), attempt).await;
                            emit(&ui_tx, event);
                        });
                    }
                }
            }
            tracing::debug!("backend command queue closed; worker shutting down");
        });
    })
}

async fn fetch_users(directory: &dyn UserDirectory, attempt: u64) -> UiEvent {
    match directory.fetch_users().await {
        Ok(users) => {
            tracing::info!(attempt, count = users.len(), "backend: fetch_users succeeded");
            UiEvent::UsersLoaded { attempt, users }
        }
        Err(err) => UiEvent::UsersFailed {
            attempt,
            error: UiError::from_directory(&err),
        },
    }
}

fn emit(ui_tx: &Sender<UiEvent>, event: UiEvent) {
    match ui_tx.try_send(event) {
        Ok(()) => {}
        Err(TrySendError::Full(_)) => tracing::warn!("ui event queue is full; dropping event"),
        Err(TrySendError::Disconnected(_)) => {
            tracing::debug!("ui event queue disconnected; dropping event")
        }
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
