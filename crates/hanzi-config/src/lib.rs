use std::env;

use serde::{Deserialize, Serialize};

use self::builder::BuilderConfig;
use self::dictionary::DictionaryConfig;

pub mod builder;
pub mod dictionary;

fn default_suggestion_limit() -> usize {
    10
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub builder: BuilderConfig,

    /// Maximum number of suggestions printed
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
    /// Emit logs as JSON lines
    #[serde(default)]
    pub log_json: bool,
}

impl Config {
    pub fn new() -> Self {
        let suggestion_limit = env::var("HANZI_SUGGESTION_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_suggestion_limit);

        let log_json = env::var("HANZI_LOG_JSON")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Config {
            dictionary: DictionaryConfig::new(),
            builder: BuilderConfig::new(),

            suggestion_limit,
            log_json,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            builder: BuilderConfig::default(),
            suggestion_limit: default_suggestion_limit(),
            log_json: false,
        }
    }
}
