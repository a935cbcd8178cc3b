use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::review::{Corpus, ReviewError};

pub const CONFIG_ENV: &str = "REVIEWCARD_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "reviewcard.toml";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path();
        if config_path.exists() {
            return Self::from_file(&config_path);
        }

        Ok(AppConfig::default())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&raw)
            .with_context(|| format!("failed to parse TOML from {}", path.display()))
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let parsed: AppConfig = toml::from_str(raw)?;
        parsed.generator.validate()?;
        Ok(parsed)
    }

    /// The configured corpus file, or the built-in corpus when none is set.
    pub fn load_corpus(&self) -> Result<Corpus> {
        let Some(path) = &self.corpus.path else {
            return Ok(Corpus::builtin());
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read corpus file {}", path.display()))?;
        let corpus = Corpus::from_toml_str(&raw)
            .with_context(|| format!("failed to parse corpus TOML from {}", path.display()))?;
        corpus
            .validate()
            .with_context(|| format!("invalid corpus in {}", path.display()))?;
        Ok(corpus)
    }
}

fn resolve_config_path() -> PathBuf {
    if let Ok(path) = env::var(CONFIG_ENV) {
        return Path::new(&path).to_path_buf();
    }

    Path::new(DEFAULT_CONFIG_FILE).to_path_buf()
}

/// Tunables of the review generator.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneratorConfig {
    /// Attempts at a novel review before the suffix fallback kicks in.
    #[serde(default = "default_retry_budget")]
    pub retry_budget: u32,
    #[serde(default = "default_connector_probability")]
    pub connector_probability: f64,
    #[serde(default = "default_intensifier_probability")]
    pub intensifier_probability: f64,
    #[serde(default = "default_timeframe_probability")]
    pub timeframe_probability: f64,
    /// Marker in templates replaced by the business name.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ReviewError> {
        if self.retry_budget == 0 {
            return Err(ReviewError::ZeroRetryBudget);
        }
        if self.placeholder.is_empty() {
            return Err(ReviewError::EmptyPlaceholder);
        }
        for (name, value) in [
            ("connector_probability", self.connector_probability),
            ("intensifier_probability", self.intensifier_probability),
            ("timeframe_probability", self.timeframe_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ReviewError::InvalidProbability { name, value });
            }
        }
        Ok(())
    }

    /// Same tunables with every variation switched off.
    pub fn without_variations(self) -> Self {
        Self {
            connector_probability: 0.0,
            intensifier_probability: 0.0,
            timeframe_probability: 0.0,
            ..self
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            retry_budget: default_retry_budget(),
            connector_probability: default_connector_probability(),
            intensifier_probability: default_intensifier_probability(),
            timeframe_probability: default_timeframe_probability(),
            placeholder: default_placeholder(),
        }
    }
}

fn default_retry_budget() -> u32 {
    100
}

fn default_connector_probability() -> f64 {
    0.7
}

fn default_intensifier_probability() -> f64 {
    0.6
}

fn default_timeframe_probability() -> f64 {
    0.5
}

fn default_placeholder() -> String {
    "{businessName}".to_string()
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CorpusConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,
    #[serde(default = "default_llm_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_n_predict")]
    pub n_predict: usize,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: default_llm_base_url(),
            timeout_ms: default_llm_timeout_ms(),
            n_predict: default_n_predict(),
            temperature: default_temperature(),
        }
    }
}

fn default_llm_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_llm_timeout_ms() -> u64 {
    5000
}

fn default_n_predict() -> usize {
    256
}

fn default_temperature() -> f32 {
    0.8
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    Path::new("reviewcard-cards.json").to_path_buf()
}
