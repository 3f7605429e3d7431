use std::sync::Arc;

use shared::{
    error::{ErrorResponse, ValidationError},
    protocol::{WorldCreateRequest, WorldRandomRequest, WorldResult},
};
use thiserror::Error;
use tracing::info;

use crate::engine::{EngineError, WorldEngine, WorldSeed};

#[derive(Clone)]
pub struct ApiContext {
    pub engine: Arc<dyn WorldEngine>,
}

#[derive(Debug, Error)]
pub enum ApiFailure {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl ApiFailure {
    pub fn body(&self) -> ErrorResponse {
        ErrorResponse::new(self.to_string())
    }
}

fn normalized_player_name(player_name: Option<&str>) -> Option<&str> {
    player_name.map(str::trim).filter(|name| !name.is_empty())
}

pub async fn create_world(
    ctx: &ApiContext,
    req: WorldCreateRequest,
) -> Result<WorldResult, ApiFailure> {
    req.validate()?;
    let seed = WorldSeed {
        description: Some(req.description.trim()),
        player_name: normalized_player_name(req.player_name.as_deref()),
    };
    info!(engine = ctx.engine.name(), "generating described world");
    Ok(ctx.engine.generate(seed).await?)
}

pub async fn random_world(
    ctx: &ApiContext,
    req: WorldRandomRequest,
) -> Result<WorldResult, ApiFailure> {
    req.validate()?;
    let seed = WorldSeed {
        description: None,
        player_name: normalized_player_name(req.player_name.as_deref()),
    };
    info!(engine = ctx.engine.name(), "generating random world");
    Ok(ctx.engine.generate(seed).await?)
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
