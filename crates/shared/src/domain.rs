use serde::{Deserialize, Serialize};

/// Shortest trimmed description (in characters) accepted for a custom world.
pub const MIN_DESCRIPTION_CHARS: usize = 3;
pub const MAX_DESCRIPTION_CHARS: usize = 1200;
pub const MAX_PLAYER_NAME_CHARS: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestMode {
    Create,
    Random,
}

impl RequestMode {
    pub fn endpoint_path(self) -> &'static str {
        match self {
            Self::Create => "/api/world/create",
            Self::Random => "/api/world/random",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Random => "random",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_route_to_distinct_endpoints() {
        assert_eq!(RequestMode::Create.endpoint_path(), "/api/world/create");
        assert_eq!(RequestMode::Random.endpoint_path(), "/api/world/random");
    }

    #[test]
    fn mode_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&RequestMode::Random).expect("json"),
            "\"random\""
        );
    }
}
