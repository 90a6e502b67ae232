use std::env;

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "cedict.json".to_string()
}

fn default_fallback_enabled() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Persisted dictionary produced by `hanzi build`
    #[serde(default = "default_path")]
    pub path: String,
    /// Extra dictionaries merged after the main one
    #[serde(default)]
    pub additional_paths: Vec<String>,
    /// Use the embedded vocabulary when `path` can not be loaded
    #[serde(default = "default_fallback_enabled")]
    pub fallback_enabled: bool,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let path = env::var("HANZI_DICT_PATH").unwrap_or_else(|_| default_path());

        Self {
            path,
            ..Self::default()
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            additional_paths: vec![],
            fallback_enabled: default_fallback_enabled(),
        }
    }
}
