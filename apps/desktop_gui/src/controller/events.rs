//! Backend-to-UI events.

use client_core::GenerationError;
use shared::{domain::RequestMode, protocol::WorldResult};

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    BackendStartupFailed(String),
    WorldGenerated {
        mode: RequestMode,
        world: WorldResult,
    },
    GenerationFailed {
        mode: RequestMode,
        error: GenerationError,
    },
}

/// Turns raw startup failures into something a user can act on.
pub fn classify_startup_failure(message: &str) -> String {
    let lower = message.to_ascii_lowercase();
    if lower.contains("base url") {
        format!("The generation service address is invalid; relaunch with a valid --api-base-url. ({message})")
    } else if lower.contains("runtime") {
        "Backend worker startup failure; verify the local app environment and relaunch.".to_string()
    } else {
        format!("Backend worker error: {message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_base_url_points_at_the_flag() {
        let message = classify_startup_failure("invalid generation service base url 'x': relative URL without a base");
        assert!(message.contains("--api-base-url"));
    }

    #[test]
    fn runtime_failures_get_generic_guidance() {
        assert_eq!(
            classify_startup_failure("failed to build runtime: too many open files"),
            "Backend worker startup failure; verify the local app environment and relaunch."
        );
    }
}
