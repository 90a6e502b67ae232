use std::path::Path;

use hanzi_config::dictionary::DictionaryConfig;
use hanzi_core::dictionary::Dictionary;
use hanzi_core::error::DictionaryError;

pub struct DictionaryLoader;

impl DictionaryLoader {
    /// Load the small embedded dictionary used when no full dictionary is available
    pub fn load_embedded() -> Result<Dictionary, DictionaryError> {
        let json = include_str!("../data/fallback.json");
        tracing::info!("Loading embedded fallback dictionary...");
        let dict = Dictionary::from_json(json)?;
        tracing::info!("Loaded {} fallback dictionary keys", dict.len());
        Ok(dict)
    }

    /// Load dictionary from file path
    pub fn load_from_file(path: &Path) -> Result<Dictionary, DictionaryError> {
        tracing::info!("Loading dictionary from file: {}", path.display());
        let dict = Dictionary::from_path(path)?;
        tracing::info!(
            "Loaded {} keys ({} entries) from file",
            dict.len(),
            dict.entry_count()
        );
        Ok(dict)
    }

    /// Merge two dictionaries (entries of `additional` go after those of `base`)
    pub fn merge(base: Dictionary, additional: Dictionary) -> Dictionary {
        base.merge(additional)
    }

    /// Load the configured dictionary plus any additional ones.
    ///
    /// A main dictionary that fails to load is replaced by the embedded one
    /// when `fallback_enabled`; additional dictionaries that fail are skipped.
    pub fn load(config: &DictionaryConfig) -> Result<Dictionary, DictionaryError> {
        let mut dict = match Self::load_from_file(Path::new(&config.path)) {
            Ok(dict) => dict,
            Err(e) if config.fallback_enabled => {
                tracing::warn!("Failed to load dictionary from {}: {}", config.path, e);
                tracing::warn!("Using limited embedded vocabulary");
                Self::load_embedded()?
            }
            Err(e) => return Err(e),
        };

        for path in &config.additional_paths {
            match Self::load_from_file(Path::new(path)) {
                Ok(additional) => {
                    tracing::info!("Merging additional dictionary from: {}", path);
                    dict = Self::merge(dict, additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load dictionary from {}: {}", path, e);
                }
            }
        }

        Ok(dict)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn config(path: &Path, fallback_enabled: bool) -> DictionaryConfig {
        DictionaryConfig {
            path: path.display().to_string(),
            additional_paths: vec![],
            fallback_enabled,
        }
    }

    #[test]
    fn embedded_dictionary_has_phrase_keys() {
        let dict = DictionaryLoader::load_embedded().unwrap();
        assert_eq!(dict.first("ni hao").unwrap().chinese, "你好");
        assert_eq!(dict.first("woaini").unwrap().gloss, "I love you");
        assert_eq!(dict.get("hao").unwrap().len(), 4);
    }

    #[test]
    fn missing_file_falls_back_when_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("cedict.json");

        let dict = DictionaryLoader::load(&config(&missing, true)).unwrap();
        assert!(dict.contains_key("zhongguo"));

        let err = DictionaryLoader::load(&config(&missing, false)).unwrap_err();
        assert!(matches!(err, DictionaryError::NotFound(_)));
    }

    #[test]
    fn corrupt_file_falls_back_when_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cedict.json");
        fs::write(&path, "{ not json").unwrap();

        let dict = DictionaryLoader::load(&config(&path, true)).unwrap();
        assert!(dict.contains_key("ni"));

        let err = DictionaryLoader::load(&config(&path, false)).unwrap_err();
        assert!(matches!(err, DictionaryError::Json(_)));
    }

    #[test]
    fn additional_dictionaries_are_merged() {
        let dir = tempfile::tempdir().unwrap();
        let main = dir.path().join("main.json");
        let extra = dir.path().join("extra.json");
        fs::write(&main, r#"{"ma": ["妈 (mother)"]}"#).unwrap();
        fs::write(&extra, r#"{"ma": [{"chinese": "马", "gloss": "horse"}], "ta": ["他 (he)"]}"#)
            .unwrap();

        let mut cfg = config(&main, false);
        cfg.additional_paths = vec![
            extra.display().to_string(),
            dir.path().join("absent.json").display().to_string(),
        ];

        let dict = DictionaryLoader::load(&cfg).unwrap();
        let ma: Vec<&str> = dict.get("ma").unwrap().iter().map(|e| e.chinese.as_str()).collect();
        assert_eq!(ma, ["妈", "马"]);
        assert!(dict.contains_key("ta"));
    }
}
