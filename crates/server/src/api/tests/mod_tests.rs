use super::*;
use async_trait::async_trait;
use shared::error::ValidationField;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
struct RecordedSeed {
    description: Option<String>,
    player_name: Option<String>,
}

struct RecordingEngine {
    fail_with: Option<EngineError>,
    seeds: Mutex<Vec<RecordedSeed>>,
}

impl RecordingEngine {
    fn ok() -> Self {
        Self {
            fail_with: None,
            seeds: Mutex::new(Vec::new()),
        }
    }

    fn failing(err: EngineError) -> Self {
        Self {
            fail_with: Some(err),
            seeds: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl WorldEngine for RecordingEngine {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn generate(&self, seed: WorldSeed<'_>) -> Result<WorldResult, EngineError> {
        self.seeds.lock().expect("seeds lock").push(RecordedSeed {
            description: seed.description.map(str::to_string),
            player_name: seed.player_name.map(str::to_string),
        });
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        Ok(WorldResult {
            world_description: "Dunes".to_string(),
            scenario_text: "A storm".to_string(),
            hints_for_image: None,
            player_name: seed.player_name.map(str::to_string),
        })
    }
}

fn context(engine: RecordingEngine) -> (ApiContext, Arc<RecordingEngine>) {
    let engine = Arc::new(engine);
    (
        ApiContext {
            engine: engine.clone(),
        },
        engine,
    )
}

#[tokio::test]
async fn create_passes_trimmed_seed_and_normalized_name() {
    let (ctx, engine) = context(RecordingEngine::ok());
    create_world(
        &ctx,
        WorldCreateRequest {
            description: "  Sky islands ".to_string(),
            player_name: Some("  ".to_string()),
        },
    )
    .await
    .expect("world");

    assert_eq!(
        *engine.seeds.lock().expect("seeds lock"),
        vec![RecordedSeed {
            description: Some("Sky islands".to_string()),
            player_name: None,
        }]
    );
}

#[tokio::test]
async fn short_description_is_rejected_before_generation() {
    let (ctx, engine) = context(RecordingEngine::ok());
    let err = create_world(
        &ctx,
        WorldCreateRequest {
            description: "ab".to_string(),
            player_name: None,
        },
    )
    .await
    .expect_err("validation");

    assert!(matches!(
        err,
        ApiFailure::Validation(ValidationError::TooShort {
            field: ValidationField::Description,
            ..
        })
    ));
    assert!(engine.seeds.lock().expect("seeds lock").is_empty());
}

#[tokio::test]
async fn random_has_no_description() {
    let (ctx, engine) = context(RecordingEngine::ok());
    let world = random_world(
        &ctx,
        WorldRandomRequest {
            player_name: Some(" Kai ".to_string()),
        },
    )
    .await
    .expect("world");

    assert_eq!(world.player_name.as_deref(), Some("Kai"));
    assert_eq!(
        engine.seeds.lock().expect("seeds lock")[0],
        RecordedSeed {
            description: None,
            player_name: Some("Kai".to_string()),
        }
    );
}

#[tokio::test]
async fn engine_failure_surfaces_its_detail() {
    let (ctx, _engine) = context(RecordingEngine::failing(EngineError::Malformed));
    let err = random_world(&ctx, WorldRandomRequest::default())
        .await
        .expect_err("engine failure");
    assert_eq!(err.body().detail, "AI response malformed");
}
