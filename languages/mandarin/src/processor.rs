use hanzi_config::dictionary::DictionaryConfig;
use hanzi_core::dictionary::{Dictionary, DictionaryEntry};
use hanzi_core::error::DictionaryError;
use hanzi_core::language::LanguageProcessor;
use hanzi_core::preprocess::{PinyinPreprocessor, Preprocessor};

use crate::converter::Converter;
use crate::loader::DictionaryLoader;
use crate::suggest::suggest;

/// Mandarin processor over an immutable dictionary
pub struct MandarinProcessor {
    dictionary: Dictionary,
    preprocessor: PinyinPreprocessor,
}

impl MandarinProcessor {
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            preprocessor: PinyinPreprocessor,
        }
    }

    /// Processor over the embedded fallback dictionary
    pub fn with_fallback() -> Self {
        let dictionary = DictionaryLoader::load_embedded().unwrap_or_else(|e| {
            tracing::error!("Failed to load embedded dictionary: {}", e);
            tracing::warn!("Starting with empty dictionary");
            Dictionary::new()
        });
        Self::new(dictionary)
    }

    pub fn from_config(config: &DictionaryConfig) -> Result<Self, DictionaryError> {
        DictionaryLoader::load(config).map(Self::new)
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}

impl LanguageProcessor for MandarinProcessor {
    fn language_code(&self) -> &str {
        "zh"
    }

    fn normalize(&self, text: &str) -> String {
        self.preprocessor.process(text)
    }

    fn convert(&self, text: &str) -> String {
        Converter::new(&self.dictionary).convert(text)
    }

    fn suggest(&self, text: &str, limit: usize) -> Vec<DictionaryEntry> {
        suggest(&self.dictionary, text, limit)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn processor_goes_through_the_trait() {
        let processor: Box<dyn LanguageProcessor> = Box::new(MandarinProcessor::with_fallback());

        assert_eq!(processor.language_code(), "zh");
        assert_eq!(processor.normalize("Ni3  Hao3"), "ni hao");
        assert_eq!(processor.convert("ni3 hao3"), "你好");
        assert_eq!(processor.suggest("xie", 1)[0].chinese, "谢");
    }

    #[test]
    fn shared_across_threads_without_locks() {
        let processor = Arc::new(MandarinProcessor::with_fallback());
        let inputs = ["ni hao", "woaini", "zhongguo", "xie xie", "duibuqi", "beijing"];

        let handles: Vec<_> = inputs
            .iter()
            .map(|input| {
                let processor = Arc::clone(&processor);
                let input = input.to_string();
                thread::spawn(move || processor.convert(&input))
            })
            .collect();

        let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, ["你好", "我爱你", "中国", "谢谢", "对不起", "北京"]);
    }
}
