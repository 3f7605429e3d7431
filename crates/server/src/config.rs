use std::{collections::HashMap, fs, str::FromStr, sync::Arc};

use anyhow::{bail, Context};
use tracing::warn;

use crate::engine::{LiveEngine, LiveEngineConfig, MockEngine, WorldEngine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiMode {
    Mock,
    Live,
}

impl FromStr for AiMode {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "live" => Ok(Self::Live),
            other => bail!("unknown ai mode '{other}' (expected 'mock' or 'live')"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    pub app_name: String,
    pub allow_origins: Vec<String>,
    pub ai_mode: AiMode,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "0.0.0.0:8000".into(),
            app_name: "MindCraft API".into(),
            allow_origins: vec!["*".into()],
            ai_mode: AiMode::Mock,
            openai_api_key: None,
            openai_model: "gpt-4.1-mini".into(),
            openai_base_url: "https://api.openai.com/v1".into(),
        }
    }
}

impl Settings {
    pub fn use_live_ai(&self) -> bool {
        self.ai_mode == AiMode::Live
    }

    pub fn build_engine(&self) -> anyhow::Result<Arc<dyn WorldEngine>> {
        if !self.use_live_ai() {
            return Ok(Arc::new(MockEngine));
        }
        let api_key = self
            .openai_api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .context("AI_MODE=live requires OPENAI_API_KEY")?;
        Ok(Arc::new(LiveEngine::new(LiveEngineConfig {
            api_key,
            model: self.openai_model.clone(),
            base_url: self.openai_base_url.clone(),
        })))
    }
}

pub fn load_settings() -> Settings {
    let file = fs::read_to_string("server.toml").ok();
    layered_settings(file.as_deref(), |name| std::env::var(name).ok())
}

/// Defaults, then `server.toml` keys, then environment variables.
pub fn layered_settings(file: Option<&str>, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = file {
        match toml::from_str::<HashMap<String, String>>(raw) {
            Ok(file_cfg) => {
                let lookup = |key: &str| file_cfg.get(key).cloned();
                apply(&mut settings, &lookup, FILE_KEYS);
            }
            Err(err) => warn!("ignoring unreadable server.toml: {err}"),
        }
    }

    apply(&mut settings, &env, ENV_KEYS);
    settings
}

struct Keys {
    bind: &'static [&'static str],
    app_name: &'static [&'static str],
    allow_origins: &'static [&'static str],
    ai_mode: &'static [&'static str],
    openai_api_key: &'static [&'static str],
    openai_model: &'static [&'static str],
    openai_base_url: &'static [&'static str],
}

const FILE_KEYS: Keys = Keys {
    bind: &["bind_addr"],
    app_name: &["app_name"],
    allow_origins: &["allow_origins"],
    ai_mode: &["ai_mode"],
    openai_api_key: &["openai_api_key"],
    openai_model: &["openai_model"],
    openai_base_url: &["openai_base_url"],
};

// Later names win.
const ENV_KEYS: Keys = Keys {
    bind: &["SERVER_BIND", "APP__BIND_ADDR"],
    app_name: &["APP_NAME"],
    allow_origins: &["ALLOW_ORIGINS"],
    ai_mode: &["AI_MODE", "APP__AI_MODE"],
    openai_api_key: &["OPENAI_API_KEY"],
    openai_model: &["OPENAI_MODEL"],
    openai_base_url: &["OPENAI_BASE_URL"],
};

fn last_value(lookup: &dyn Fn(&str) -> Option<String>, names: &[&str]) -> Option<String> {
    names.iter().filter_map(|name| lookup(name)).last()
}

fn apply(settings: &mut Settings, lookup: &dyn Fn(&str) -> Option<String>, keys: Keys) {
    if let Some(v) = last_value(lookup, keys.bind) {
        settings.server_bind = v;
    }
    if let Some(v) = last_value(lookup, keys.app_name) {
        settings.app_name = v;
    }
    if let Some(v) = last_value(lookup, keys.allow_origins) {
        settings.allow_origins = parse_origins(&v);
    }
    if let Some(v) = last_value(lookup, keys.ai_mode) {
        match v.parse::<AiMode>() {
            Ok(mode) => settings.ai_mode = mode,
            Err(err) => warn!("{err}; keeping {:?}", settings.ai_mode),
        }
    }
    if let Some(v) = last_value(lookup, keys.openai_api_key) {
        settings.openai_api_key = Some(v);
    }
    if let Some(v) = last_value(lookup, keys.openai_model) {
        settings.openai_model = v;
    }
    if let Some(v) = last_value(lookup, keys.openai_base_url) {
        settings.openai_base_url = v;
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
