use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use shared::protocol::WorldResult;
use tracing::{debug, error, warn};

use super::{EngineError, MockEngine, WorldEngine, WorldSeed};

const SYSTEM_PROMPT: &str = "You are the narrative engine for a lightweight text adventure called MindCraft. \
Always answer in strict JSON with the keys: world_description, scenario_text, hints_for_image. \
The setting must feel cohesive, adventurous, and react to the player input you receive. \
Keep each field under 200 words and ensure hints_for_image remains a short comma-separated list of visual cues.";

const REQUIRED_KEYS: [&str; 2] = ["world_description", "scenario_text"];
const TEMPERATURE: f64 = 0.9;

#[derive(Debug, Clone)]
pub struct LiveEngineConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

/// Generates worlds through an OpenAI-compatible Responses endpoint and
/// falls back to [`MockEngine`] whenever the model cannot be reached.
pub struct LiveEngine {
    http: Client,
    config: LiveEngineConfig,
    fallback: MockEngine,
}

impl LiveEngine {
    pub fn new(config: LiveEngineConfig) -> Self {
        Self {
            http: Client::new(),
            config,
            fallback: MockEngine,
        }
    }

    fn responses_url(&self) -> String {
        format!("{}/responses", self.config.base_url.trim_end_matches('/'))
    }

    async fn call_model(&self, prompt: &str) -> anyhow::Result<Value> {
        let body = json!({
            "model": self.config.model,
            "input": [
                { "role": "system", "content": [{ "type": "input_text", "text": SYSTEM_PROMPT }] },
                { "role": "user", "content": [{ "type": "input_text", "text": prompt }] },
            ],
            "temperature": TEMPERATURE,
        });
        let response = self
            .http
            .post(self.responses_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

pub fn build_user_prompt(description: Option<&str>, player_name: Option<&str>) -> String {
    let description = description.filter(|text| !text.is_empty());
    let mut lines = Vec::with_capacity(5);
    match description {
        Some(_) => {
            lines.push("The player described the world seed below. Expand it into a vivid reality.".to_string());
            lines.push("Respect the provided details but feel free to add new twists that match the tone.".to_string());
        }
        None => {
            lines.push("The player requested a brand-new random world. Invent something bold and distinct.".to_string());
            lines.push("Surprise the player with an imaginative genre mashup that still feels coherent.".to_string());
        }
    }
    if let Some(name) = player_name.filter(|name| !name.is_empty()) {
        lines.push(format!("The player name (if mentioned) is: {name}."));
    }
    lines.push(format!("World seed: {}", description.unwrap_or("<random>")));
    lines.push(
        "Return JSON with world_description, scenario_text, hints_for_image. \
scenario_text must pose a hook, dilemma, or event that invites action."
            .to_string(),
    );
    lines.join(" \n")
}

/// Pulls the model's text out of a Responses payload (`output[0].content[0].text`).
pub fn extract_output_text(response: &Value) -> Result<&str, EngineError> {
    response
        .pointer("/output/0/content/0/text")
        .and_then(Value::as_str)
        .ok_or(EngineError::Unreadable)
}

pub fn parse_world_payload(raw_text: &str, player_name: Option<&str>) -> Result<WorldResult, EngineError> {
    let data: Value = serde_json::from_str(raw_text).map_err(|err| {
        error!(%raw_text, "failed to parse model response: {err}");
        EngineError::Malformed
    })?;
    let Some(object) = data.as_object() else {
        error!(%raw_text, "model response is not a JSON object");
        return Err(EngineError::Malformed);
    };

    let missing: Vec<&'static str> = REQUIRED_KEYS
        .into_iter()
        .filter(|key| object.get(*key).map_or(true, Value::is_null))
        .collect();
    if !missing.is_empty() {
        error!(?missing, payload = %data, "model response missing keys");
        return Err(EngineError::Incomplete { missing });
    }

    let text_field = |key: &str| -> Result<Option<String>, EngineError> {
        match object.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(text)) => Ok(Some(text.clone())),
            Some(_) => Err(EngineError::Malformed),
        }
    };

    Ok(WorldResult {
        world_description: text_field("world_description")?.ok_or(EngineError::Malformed)?,
        scenario_text: text_field("scenario_text")?.ok_or(EngineError::Malformed)?,
        hints_for_image: text_field("hints_for_image")?,
        player_name: match player_name {
            Some(name) => Some(name.to_string()),
            None => text_field("player_name")?,
        },
    })
}

#[async_trait]
impl WorldEngine for LiveEngine {
    fn name(&self) -> &'static str {
        "live"
    }

    async fn generate(&self, seed: WorldSeed<'_>) -> Result<WorldResult, EngineError> {
        let prompt = build_user_prompt(seed.description, seed.player_name);
        debug!(%prompt, "mindcraft prompt");

        let response = match self.call_model(&prompt).await {
            Ok(response) => response,
            Err(err) => {
                warn!("model request failed; falling back to mock payload: {err:#}");
                return self.fallback.generate(seed).await;
            }
        };

        let raw_text = extract_output_text(&response).inspect_err(|_| {
            error!(%response, "unexpected response structure");
        })?;
        parse_world_payload(raw_text, seed.player_name)
    }
}
