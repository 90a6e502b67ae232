use std::env;

use serde::{Deserialize, Serialize};

pub const CEDICT_URL: &str =
    "https://www.mdbg.net/chinese/export/cedict/cedict_1_0_ts_utf-8_mdbg.txt.gz";

fn default_corpus_url() -> String {
    CEDICT_URL.to_string()
}

fn default_download_path() -> String {
    "cedict.txt.gz".to_string()
}

fn default_output_path() -> String {
    "cedict.json".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct BuilderConfig {
    #[serde(default = "default_corpus_url")]
    pub corpus_url: String,
    /// Read this corpus file instead of downloading
    #[serde(default)]
    pub input_path: Option<String>,
    /// Where the downloaded archive is stored while parsing
    #[serde(default = "default_download_path")]
    pub download_path: String,
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default)]
    pub keep_download: bool,
    /// Write `"<chinese> (<gloss>)"` strings instead of entry objects
    #[serde(default)]
    pub display_format: bool,
}

impl BuilderConfig {
    pub fn new() -> Self {
        let corpus_url = env::var("HANZI_CEDICT_URL").unwrap_or_else(|_| default_corpus_url());
        let download_path =
            env::var("HANZI_DOWNLOAD_PATH").unwrap_or_else(|_| default_download_path());
        let output_path = env::var("HANZI_DICT_OUTPUT").unwrap_or_else(|_| default_output_path());

        Self {
            corpus_url,
            download_path,
            output_path,
            ..Self::default()
        }
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            corpus_url: default_corpus_url(),
            input_path: None,
            download_path: default_download_path(),
            output_path: default_output_path(),
            keep_download: false,
            display_format: false,
        }
    }
}
