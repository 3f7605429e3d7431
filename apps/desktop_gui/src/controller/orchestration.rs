//! Command orchestration helpers from UI actions to backend command queue.

use client_core::{GenerationError, WorldFormController};
use crossbeam_channel::{Sender, TrySendError};
use shared::domain::RequestMode;

use crate::backend_bridge::commands::BackendCommand;

pub const QUEUE_FULL_MESSAGE: &str = "UI command queue is full; please retry";
pub const WORKER_GONE_MESSAGE: &str =
    "Backend worker disconnected (possible startup/runtime failure); restart the app and retry";

/// Runs the synchronous half of a world request and hands the payload to the
/// backend worker. If the command cannot be queued the request is resolved as
/// failed on the spot so the in-flight marker never outlives it.
pub fn request_world(
    cmd_tx: &Sender<BackendCommand>,
    controller: &mut WorldFormController,
    mode: RequestMode,
    status: &mut String,
) {
    let Some(request) = controller.begin(mode) else {
        return;
    };
    let cmd = BackendCommand::GenerateWorld { mode, request };
    let cmd_name = cmd.name();

    let failure = match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, mode = mode.label(), "queued ui->backend command");
            *status = format!("Requested a {} world", mode.label());
            return;
        }
        Err(TrySendError::Full(_)) => QUEUE_FULL_MESSAGE,
        Err(TrySendError::Disconnected(_)) => WORKER_GONE_MESSAGE,
    };
    tracing::warn!(command = cmd_name, "{failure}");
    *status = failure.to_string();
    controller.resolve(
        mode,
        Err(GenerationError::BackendUnavailable(failure.to_string())),
    );
}

#[cfg(test)]
mod tests {
    use client_core::FormState;
    use crossbeam_channel::bounded;
    use shared::protocol::{WorldCreateRequest, WorldRequest};

    use super::*;

    fn controller() -> WorldFormController {
        WorldFormController::new(FormState::new("Kai", "A floating archipelago"))
    }

    #[test]
    fn queues_normalized_request_and_marks_in_flight() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let mut controller = controller();
        let mut status = String::new();

        request_world(&cmd_tx, &mut controller, RequestMode::Create, &mut status);

        assert_eq!(controller.in_flight(), Some(RequestMode::Create));
        let BackendCommand::GenerateWorld { mode, request } = cmd_rx.try_recv().expect("command");
        assert_eq!(mode, RequestMode::Create);
        assert_eq!(
            request,
            WorldRequest::Create(WorldCreateRequest {
                description: "A floating archipelago".to_string(),
                player_name: Some("Kai".to_string()),
            })
        );
    }

    #[test]
    fn repeated_clicks_queue_a_single_command() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let mut controller = controller();
        let mut status = String::new();

        request_world(&cmd_tx, &mut controller, RequestMode::Create, &mut status);
        request_world(&cmd_tx, &mut controller, RequestMode::Create, &mut status);
        request_world(&cmd_tx, &mut controller, RequestMode::Random, &mut status);

        assert_eq!(cmd_rx.len(), 1);
    }

    #[test]
    fn full_queue_resolves_request_as_failure() {
        let (cmd_tx, _cmd_rx) = bounded(0);
        let mut controller = controller();
        let mut status = String::new();

        request_world(&cmd_tx, &mut controller, RequestMode::Random, &mut status);

        assert_eq!(controller.in_flight(), None);
        assert_eq!(controller.error(), Some(QUEUE_FULL_MESSAGE));
        assert_eq!(status, QUEUE_FULL_MESSAGE);
    }

    #[test]
    fn disconnected_worker_resolves_request_as_failure() {
        let (cmd_tx, cmd_rx) = bounded(4);
        drop(cmd_rx);
        let mut controller = controller();
        let mut status = String::new();

        request_world(&cmd_tx, &mut controller, RequestMode::Create, &mut status);

        assert_eq!(controller.in_flight(), None);
        assert_eq!(controller.error(), Some(WORKER_GONE_MESSAGE));
        assert!(controller.can_create());
    }
}
