use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::{seq::SliceRandom, Rng};
use shared::protocol::WorldResult;

use super::{EngineError, WorldEngine, WorldSeed};

const STARTER_WORLDS: &[&str] = &[
    "A world of floating islands bound together by gravity crystals.",
    "A post-apocalyptic megacity where the remnants of an AI control the weather.",
    "A labyrinth city inside a sleeping titan, every street a nerve of its memory.",
    "A space station at the edge of a nebula where time flows in a spiral.",
];

const STARTER_SCENARIOS: &[&str] = &[
    "You stand before a portal that is about to collapse. Jump through, or hold it open?",
    "An ancient core console demands a sacrifice: a memory or your strength.",
    "A voice from the depths promises help in exchange for an oath of loyalty.",
    "A child of the wind asks you to guide them through the forbidden sector, where every step rewrites the past.",
];

const STARTER_HINTS: &[&str] = &[
    "neon lights, nebula, dark sky",
    "floating islands, crystals, warm sunset",
    "cyberpunk city, rain, reflections",
    "ancient temple, bioluminescent plants",
];

const STARTER_HEROES: &[&str] = &["Rina", "Kass", "Ellar", "Soren"];

/// Offline generator so the service works without model access.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockEngine;

impl MockEngine {
    pub fn compose<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        seed: WorldSeed<'_>,
        now: DateTime<Utc>,
    ) -> WorldResult {
        let world = match seed.description.map(str::trim).filter(|text| !text.is_empty()) {
            Some(description) => description,
            None => pick(rng, STARTER_WORLDS),
        };
        let hero = match seed.player_name.filter(|name| !name.trim().is_empty()) {
            Some(name) => name,
            None => pick(rng, STARTER_HEROES),
        };
        let scenario = pick(rng, STARTER_SCENARIOS);
        let hint = pick(rng, STARTER_HINTS);

        WorldResult {
            world_description: format!("{world} (mock {})", now.format("%H:%M:%S")),
            scenario_text: format!("{hero} finds themselves facing a choice: {scenario}"),
            hints_for_image: Some(hint.to_string()),
            player_name: Some(hero.to_string()),
        }
    }
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options.choose(rng).copied().unwrap_or_default()
}

#[async_trait]
impl WorldEngine for MockEngine {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate(&self, seed: WorldSeed<'_>) -> Result<WorldResult, EngineError> {
        Ok(self.compose(&mut rand::thread_rng(), seed, Utc::now()))
    }
}
