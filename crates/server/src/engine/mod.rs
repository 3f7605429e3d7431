//! World generation engines behind the HTTP routes.

use async_trait::async_trait;
use shared::protocol::WorldResult;
use thiserror::Error;

mod live;
mod mock;

pub use live::{LiveEngine, LiveEngineConfig};
pub use mock::MockEngine;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("AI response unreadable")]
    Unreadable,
    #[error("AI response malformed")]
    Malformed,
    #[error("AI response incomplete")]
    Incomplete { missing: Vec<&'static str> },
}

/// What the player asked for. `description == None` means a random world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorldSeed<'a> {
    pub description: Option<&'a str>,
    pub player_name: Option<&'a str>,
}

#[async_trait]
pub trait WorldEngine: Send + Sync {
    fn name(&self) -> &'static str;

    async fn generate(&self, seed: WorldSeed<'_>) -> Result<WorldResult, EngineError>;
}
