//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::{GenerationError, WorldClient, WorldGenerator};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Spawns the backend worker thread. Commands are handled one at a time;
/// completions are delivered with a blocking send so none is ever dropped.
pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, api_base_url: String) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let reason = format!("failed to build runtime: {err}");
                fail_queued_commands(cmd_rx, &ui_tx, &reason);
                let _ = ui_tx.try_send(UiEvent::BackendStartupFailed(reason));
                return;
            }
        };

        let client = match WorldClient::new(&api_base_url) {
            Ok(client) => client,
            Err(err) => {
                tracing::error!(%api_base_url, "backend worker startup failure: {err}");
                fail_queued_commands(cmd_rx, &ui_tx, &err.to_string());
                let _ = ui_tx.try_send(UiEvent::BackendStartupFailed(err.to_string()));
                return;
            }
        };

        runtime.block_on(async move {
            let _ = ui_tx.try_send(UiEvent::Info(format!(
                "Ready - generation service at {}",
                client.base_url()
            )));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::GenerateWorld { mode, request } => {
                        tracing::info!(mode = mode.label(), "backend: generate_world");
                        let event = match client.generate(&request).await {
                            Ok(world) => UiEvent::WorldGenerated { mode, world },
                            Err(error) => {
                                tracing::warn!(mode = mode.label(), "backend: generate_world failed: {error}");
                                UiEvent::GenerationFailed { mode, error }
                            }
                        };
                        if ui_tx.send(event).is_err() {
                            tracing::debug!("ui event queue closed; stopping backend worker");
                            break;
                        }
                    }
                }
            }
        });
    });
}

/// Answers every command already queued with a failure, then closes the queue.
fn fail_queued_commands(cmd_rx: Receiver<BackendCommand>, ui_tx: &Sender<UiEvent>, reason: &str) {
    while let Ok(cmd) = cmd_rx.try_recv() {
        match cmd {
            BackendCommand::GenerateWorld { mode, .. } => {
                let error = GenerationError::BackendUnavailable(reason.to_string());
                let _ = ui_tx.try_send(UiEvent::GenerationFailed { mode, error });
            }
        }
    }
}
