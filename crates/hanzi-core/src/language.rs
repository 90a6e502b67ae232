use crate::dictionary::DictionaryEntry;

/// Text conversion interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "zh", "ja", ...)
    fn language_code(&self) -> &str;

    /// Normalize raw input (case, tone digits, whitespace)
    fn normalize(&self, text: &str) -> String;

    /// Convert romanized text into native script
    fn convert(&self, text: &str) -> String;

    /// Ranked candidates for partially typed input
    fn suggest(&self, text: &str, limit: usize) -> Vec<DictionaryEntry>;
}
