//! Input state for the world form.

use shared::{
    domain::{RequestMode, MIN_DESCRIPTION_CHARS},
    protocol::{WorldCreateRequest, WorldRandomRequest, WorldRequest},
};

/// Raw text exactly as typed. Normalisation only happens in [`FormState::build_request`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub player_name: String,
    pub description: String,
}

impl FormState {
    pub fn new(player_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            description: description.into(),
        }
    }

    /// Blank names are "unset", not empty strings.
    pub fn normalized_player_name(&self) -> Option<String> {
        let trimmed = self.player_name.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    pub fn trimmed_description(&self) -> &str {
        self.description.trim()
    }

    pub fn description_is_valid(&self) -> bool {
        self.trimmed_description().chars().count() >= MIN_DESCRIPTION_CHARS
    }

    pub fn build_request(&self, mode: RequestMode) -> WorldRequest {
        let player_name = self.normalized_player_name();
        match mode {
            RequestMode::Create => WorldRequest::Create(WorldCreateRequest {
                description: self.trimmed_description().to_string(),
                player_name,
            }),
            RequestMode::Random => WorldRequest::Random(WorldRandomRequest { player_name }),
        }
    }
}
