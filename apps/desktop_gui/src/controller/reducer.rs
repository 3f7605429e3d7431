//! Applies backend events to UI state on the UI thread.

use client_core::{GenerationError, WorldFormController};

use crate::controller::events::{classify_startup_failure, UiEvent};
use crate::controller::orchestration::WORKER_GONE_MESSAGE;

pub fn apply_ui_event(controller: &mut WorldFormController, status: &mut String, event: UiEvent) {
    match event {
        UiEvent::Info(message) => *status = message,
        UiEvent::BackendStartupFailed(message) => {
            *status = classify_startup_failure(&message);
        }
        UiEvent::WorldGenerated { mode, world } => {
            if controller.resolve(mode, Ok(world)) {
                *status = "World ready".to_string();
            }
        }
        UiEvent::GenerationFailed { mode, error } => {
            if controller.resolve(mode, Err(error)) {
                *status = "World generation failed".to_string();
            }
        }
    }
}

/// The backend event queue has closed, so nothing will ever complete the
/// request in flight. Fail it here instead of leaving the form loading.
pub fn release_abandoned_request(controller: &mut WorldFormController, status: &mut String) {
    let Some(mode) = controller.in_flight() else {
        return;
    };
    tracing::warn!(mode = mode.label(), "backend worker gone with a request in flight");
    *status = WORKER_GONE_MESSAGE.to_string();
    controller.resolve(
        mode,
        Err(GenerationError::BackendUnavailable(WORKER_GONE_MESSAGE.to_string())),
    );
}
