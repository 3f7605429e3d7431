//! Request controller: one optional in-flight marker gates every generation request.

use shared::{domain::RequestMode, protocol::WorldRequest, protocol::WorldResult};
use tracing::{debug, error, info, warn};

use crate::{error::GenerationError, form::FormState, WorldGenerator};

/// Last resolution of a generation request. A single slot so a world and an
/// error can never be shown together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    World(WorldResult),
    Error(String),
}

#[derive(Debug, Default)]
pub struct WorldFormController {
    form: FormState,
    in_flight: Option<RequestMode>,
    outcome: Option<Outcome>,
}

/// Clears the in-flight marker when dropped, including when the request
/// future is abandoned mid-await.
struct InFlightRelease<'a> {
    marker: &'a mut Option<RequestMode>,
}

impl Drop for InFlightRelease<'_> {
    fn drop(&mut self) {
        *self.marker = None;
    }
}

impl WorldFormController {
    pub fn new(form: FormState) -> Self {
        Self {
            form,
            in_flight: None,
            outcome: None,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn in_flight(&self) -> Option<RequestMode> {
        self.in_flight
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn can_create(&self) -> bool {
        self.form.description_is_valid() && !self.is_loading()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn result(&self) -> Option<&WorldResult> {
        match &self.outcome {
            Some(Outcome::World(world)) => Some(world),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Some(Outcome::Error(message)) => Some(message),
            _ => None,
        }
    }

    /// Starts a request for `mode` and returns the payload to send, or `None`
    /// when the request is rejected. Rejection leaves all state untouched.
    pub fn begin(&mut self, mode: RequestMode) -> Option<WorldRequest> {
        if let Some(active) = self.in_flight {
            debug!(requested = ?mode, active = ?active, "generation already in flight; ignoring");
            return None;
        }
        if mode == RequestMode::Create && !self.can_create() {
            debug!("description too short for a custom world; ignoring");
            return None;
        }

        let request = self.form.build_request(mode);
        self.in_flight = Some(mode);
        if matches!(self.outcome, Some(Outcome::Error(_))) {
            self.outcome = None;
        }
        info!(
            mode = mode.label(),
            has_player_name = request.player_name().is_some(),
            "dispatching world generation request"
        );
        Some(request)
    }

    /// Completes the request started by [`Self::begin`]. Returns `false` when
    /// no request of that mode is in flight.
    pub fn resolve(
        &mut self,
        mode: RequestMode,
        result: Result<WorldResult, GenerationError>,
    ) -> bool {
        if self.in_flight != Some(mode) {
            warn!(
                resolved = ?mode,
                active = ?self.in_flight,
                "dropping resolution for a request that is not in flight"
            );
            return false;
        }
        self.in_flight = None;
        self.apply_outcome(mode, result);
        true
    }

    /// Full round trip: guard, dispatch, await, resolve. Returns whether a
    /// request was actually sent.
    pub async fn request_world<G>(&mut self, mode: RequestMode, generator: &G) -> bool
    where
        G: WorldGenerator + ?Sized,
    {
        let Some(request) = self.begin(mode) else {
            return false;
        };

        let release = InFlightRelease {
            marker: &mut self.in_flight,
        };
        let result = generator.generate(&request).await;
        drop(release);

        self.apply_outcome(mode, result);
        true
    }

    fn apply_outcome(&mut self, mode: RequestMode, result: Result<WorldResult, GenerationError>) {
        match result {
            Ok(world) => {
                info!(mode = mode.label(), "world generated");
                self.outcome = Some(Outcome::World(world));
            }
            Err(err) => {
                match &err {
                    GenerationError::Status { status, .. } => {
                        warn!(mode = mode.label(), status, "world generation rejected: {err}");
                    }
                    _ => error!(mode = mode.label(), "world generation failed: {err}"),
                }
                self.outcome = Some(Outcome::Error(err.user_message()));
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
