use serde::{Deserialize, Serialize};

use crate::{
    domain::{RequestMode, MAX_DESCRIPTION_CHARS, MAX_PLAYER_NAME_CHARS, MIN_DESCRIPTION_CHARS},
    error::{ValidationError, ValidationField},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldCreateRequest {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
}

impl WorldCreateRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let description_chars = self.description.trim().chars().count();
        if description_chars < MIN_DESCRIPTION_CHARS {
            return Err(ValidationError::TooShort {
                field: ValidationField::Description,
                min: MIN_DESCRIPTION_CHARS,
            });
        }
        if description_chars > MAX_DESCRIPTION_CHARS {
            return Err(ValidationError::TooLong {
                field: ValidationField::Description,
                max: MAX_DESCRIPTION_CHARS,
            });
        }
        validate_player_name(self.player_name.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldRandomRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
}

impl WorldRandomRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_player_name(self.player_name.as_deref())
    }
}

fn validate_player_name(player_name: Option<&str>) -> Result<(), ValidationError> {
    match player_name {
        Some(name) if name.chars().count() > MAX_PLAYER_NAME_CHARS => {
            Err(ValidationError::TooLong {
                field: ValidationField::PlayerName,
                max: MAX_PLAYER_NAME_CHARS,
            })
        }
        _ => Ok(()),
    }
}

/// Outgoing body for either generation flow. Serializes as the bare inner body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum WorldRequest {
    Create(WorldCreateRequest),
    Random(WorldRandomRequest),
}

impl WorldRequest {
    pub fn mode(&self) -> RequestMode {
        match self {
            Self::Create(_) => RequestMode::Create,
            Self::Random(_) => RequestMode::Random,
        }
    }

    pub fn player_name(&self) -> Option<&str> {
        match self {
            Self::Create(req) => req.player_name.as_deref(),
            Self::Random(req) => req.player_name.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldResult {
    pub world_description: String,
    pub scenario_text: String,
    #[serde(default)]
    pub hints_for_image: Option<String>,
    #[serde(default)]
    pub player_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_omits_absent_player_name() {
        let body = serde_json::to_value(WorldRequest::Create(WorldCreateRequest {
            description: "Sky islands".to_string(),
            player_name: None,
        }))
        .expect("json");
        assert_eq!(body, serde_json::json!({ "description": "Sky islands" }));
    }

    #[test]
    fn random_request_without_name_is_empty_object() {
        let body = serde_json::to_value(WorldRequest::Random(WorldRandomRequest::default()))
            .expect("json");
        assert_eq!(body, serde_json::json!({}));
    }

    #[test]
    fn world_result_accepts_null_and_missing_optionals() {
        let result: WorldResult = serde_json::from_value(serde_json::json!({
            "world_description": "A floating archipelago",
            "scenario_text": "You wake on a cloud-dock",
            "hints_for_image": null
        }))
        .expect("json");
        assert_eq!(result.hints_for_image, None);
        assert_eq!(result.player_name, None);
    }

    #[test]
    fn create_validation_counts_trimmed_characters() {
        let short = WorldCreateRequest {
            description: "  ab  ".to_string(),
            player_name: None,
        };
        assert!(matches!(
            short.validate(),
            Err(ValidationError::TooShort {
                field: ValidationField::Description,
                ..
            })
        ));

        let cyrillic = WorldCreateRequest {
            description: "мир".to_string(),
            player_name: None,
        };
        assert_eq!(cyrillic.validate(), Ok(()));
    }

    #[test]
    fn overlong_player_name_is_rejected_for_both_modes() {
        let name = "x".repeat(MAX_PLAYER_NAME_CHARS + 1);
        let random = WorldRandomRequest {
            player_name: Some(name.clone()),
        };
        assert!(random.validate().is_err());

        let create = WorldCreateRequest {
            description: "Clockwork desert".to_string(),
            player_name: Some(name),
        };
        assert!(matches!(
            create.validate(),
            Err(ValidationError::TooLong {
                field: ValidationField::PlayerName,
                ..
            })
        ));
    }
}
