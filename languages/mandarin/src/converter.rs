use hanzi_core::dictionary::{Dictionary, DictionaryEntry};
use hanzi_core::preprocess::normalize;

use crate::syllables::SyllableTable;

/// Convert Pinyin text to characters with the built-in syllable table.
pub fn convert(dictionary: &Dictionary, text: &str) -> String {
    Converter::new(dictionary).convert(text)
}

/// Greedy longest-match converter over a borrowed dictionary.
///
/// Lines convert independently. A line that is itself a key (for example the
/// phrase key `wo ai ni`) resolves as one unit; otherwise each space separated
/// token is segmented left to right, always taking the longest key that
/// matches at the current position. Characters nothing matches pass through.
pub struct Converter<'a> {
    dictionary: &'a Dictionary,
    syllables: &'a SyllableTable,
}

impl<'a> Converter<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self::with_syllables(dictionary, SyllableTable::standard())
    }

    pub fn with_syllables(dictionary: &'a Dictionary, syllables: &'a SyllableTable) -> Self {
        Self {
            dictionary,
            syllables,
        }
    }

    pub fn convert(&self, text: &str) -> String {
        let normalized = normalize(text);
        tracing::debug!("Converting '{}'", normalized);

        normalized
            .split('\n')
            .map(|line| self.convert_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // `line` is already normalized: single spaces, no digits.
    fn convert_line(&self, line: &str) -> String {
        if line.is_empty() {
            return String::new();
        }

        if let Some(entry) = self.dictionary.first(line) {
            return entry.chinese.clone();
        }

        line.split(' ')
            .map(|token| self.convert_token(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn convert_token(&self, token: &str) -> String {
        let mut out = String::with_capacity(token.len());
        let mut i = 0;

        while i < token.len() {
            let rest = &token[i..];

            if let Some((key, entry)) = self.dictionary.longest_prefix_match(rest) {
                out.push_str(&entry.chinese);
                i += key.len();
                continue;
            }

            if let Some((syllable, entry)) = self.syllable_fallback(rest) {
                out.push_str(&entry.chinese);
                i += syllable.len();
                continue;
            }

            let Some(ch) = rest.chars().next() else { break };
            out.push(ch);
            i += ch.len_utf8();
        }

        out
    }

    /// Longest table syllable prefixing `rest` that is also a dictionary key.
    ///
    /// Any such syllable is already a candidate of the dictionary pass, so this
    /// only fires when that pass found nothing, which it then can not change.
    fn syllable_fallback(&self, rest: &str) -> Option<(&'static str, &'a DictionaryEntry)> {
        self.syllables.prefixes_of(rest).find_map(|syllable| {
            self.dictionary
                .first(syllable)
                .map(|entry| (syllable, entry))
        })
    }
}
