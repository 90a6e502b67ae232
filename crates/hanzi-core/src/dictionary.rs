use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::ops::Bound;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::DictionaryError;
use crate::preprocess::normalize_query;

static DISPLAY_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^\s(]+)\s*\(([^)]+)\)").expect("Invalid display entry pattern")
});

/// One candidate for a Pinyin key: the characters and their English gloss.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub chinese: String,
    #[serde(default)]
    pub gloss: String,
}

impl DictionaryEntry {
    pub fn new(chinese: impl Into<String>, gloss: impl Into<String>) -> Self {
        Self {
            chinese: chinese.into(),
            gloss: gloss.into(),
        }
    }

    /// Parse the combined `"<chinese> (<gloss>)"` display form.
    ///
    /// Text that does not follow that shape still yields an entry: everything
    /// before the first space is the chinese part, the rest (parentheses
    /// dropped) is the gloss.
    pub fn parse_display(display: &str) -> Self {
        let display = display.trim();

        if let Some(caps) = DISPLAY_ENTRY.captures(display) {
            return Self::new(&caps[1], &caps[2]);
        }

        match display.split_once(' ') {
            Some((chinese, rest)) => Self::new(chinese, rest.replace(['(', ')'], "").trim()),
            None => Self::new(display, ""),
        }
    }
}

impl fmt::Display for DictionaryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.gloss.is_empty() {
            f.write_str(&self.chinese)
        } else {
            write!(f, "{} ({})", self.chinese, self.gloss)
        }
    }
}

/// How entries are written when a dictionary is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryFormat {
    /// `{"chinese": "...", "gloss": "..."}`
    #[default]
    Structured,
    /// `"<chinese> (<gloss>)"`
    Display,
}

// Both persisted forms are accepted on load, even mixed within one list.
#[derive(Deserialize)]
#[serde(untagged)]
enum PersistedEntry {
    Structured(DictionaryEntry),
    Display(String),
}

impl From<PersistedEntry> for DictionaryEntry {
    fn from(value: PersistedEntry) -> Self {
        match value {
            PersistedEntry::Structured(entry) => entry,
            PersistedEntry::Display(display) => DictionaryEntry::parse_display(&display),
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum SerializedEntry<'a> {
    Structured(&'a DictionaryEntry),
    Display(String),
}

/// Immutable Pinyin key -> candidates table.
///
/// Keys are normalized Pinyin, either concatenated (`nihao`) or phrase keys
/// with single spaces (`ni hao`). Every key maps to a non-empty list whose
/// first element is the default conversion. Iteration is lexicographic.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: BTreeMap<String, Vec<DictionaryEntry>>,
    /// Distinct key lengths in bytes, longest first.
    key_lengths: Vec<usize>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(key, entries)` pairs.
    ///
    /// Keys are normalized; keys that collide after normalization are merged
    /// with duplicate entries skipped. Empty keys and empty lists are dropped.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<DictionaryEntry>)>,
        K: AsRef<str>,
    {
        let mut map: BTreeMap<String, Vec<DictionaryEntry>> = BTreeMap::new();

        for (raw_key, list) in entries {
            let key = normalize_query(raw_key.as_ref());
            if key.is_empty() || list.is_empty() {
                tracing::debug!("Dropping dictionary key {:?}", raw_key.as_ref());
                continue;
            }

            let slot = map.entry(key).or_default();
            for entry in list {
                if !slot.contains(&entry) {
                    slot.push(entry);
                }
            }
        }

        Self::from_map(map)
    }

    fn from_map(entries: BTreeMap<String, Vec<DictionaryEntry>>) -> Self {
        let lengths: BTreeSet<usize> = entries.keys().map(String::len).collect();
        let key_lengths = lengths.into_iter().rev().collect();

        Self {
            entries,
            key_lengths,
        }
    }

    /// Load from the persisted JSON object form.
    pub fn from_json(json: &str) -> Result<Self, DictionaryError> {
        let raw: BTreeMap<String, Vec<PersistedEntry>> = serde_json::from_str(json)?;
        Ok(Self::from_persisted(raw))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DictionaryError> {
        let raw: BTreeMap<String, Vec<PersistedEntry>> =
            serde_json::from_reader(BufReader::new(reader))?;
        Ok(Self::from_persisted(raw))
    }

    pub fn from_path(path: &Path) -> Result<Self, DictionaryError> {
        if !path.exists() {
            return Err(DictionaryError::NotFound(path.display().to_string()));
        }
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    fn from_persisted(raw: BTreeMap<String, Vec<PersistedEntry>>) -> Self {
        Self::from_entries(
            raw.into_iter()
                .map(|(key, list)| (key, list.into_iter().map(DictionaryEntry::from).collect())),
        )
    }

    /// Write the persisted form: keys sorted, pretty-printed.
    pub fn write_json<W: Write>(
        &self,
        writer: W,
        format: EntryFormat,
    ) -> Result<(), serde_json::Error> {
        serde_json::to_writer_pretty(writer, &self.serializable(format))
    }

    pub fn to_json_pretty(&self, format: EntryFormat) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.serializable(format))
    }

    fn serializable(&self, format: EntryFormat) -> BTreeMap<&str, Vec<SerializedEntry<'_>>> {
        self.entries
            .iter()
            .map(|(key, list)| {
                let list = list
                    .iter()
                    .map(|entry| match format {
                        EntryFormat::Structured => SerializedEntry::Structured(entry),
                        EntryFormat::Display => SerializedEntry::Display(entry.to_string()),
                    })
                    .collect();
                (key.as_str(), list)
            })
            .collect()
    }

    /// Append `other` after this dictionary's entries, skipping duplicates.
    pub fn merge(self, other: Dictionary) -> Self {
        Self::from_entries(self.entries.into_iter().chain(other.entries))
    }

    pub fn get(&self, key: &str) -> Option<&[DictionaryEntry]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Default conversion for `key`.
    pub fn first(&self, key: &str) -> Option<&DictionaryEntry> {
        self.entries.get(key).and_then(|list| list.first())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DictionaryEntry])> {
        self.entries
            .iter()
            .map(|(key, list)| (key.as_str(), list.as_slice()))
    }

    /// Keys starting with `prefix`, in key order.
    pub fn keys_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a [DictionaryEntry])> + 'a {
        self.entries
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(key, _)| key.starts_with(prefix))
            .map(|(key, list)| (key.as_str(), list.as_slice()))
    }

    /// Longest key that is a prefix of `text`, with its default entry.
    ///
    /// Only one key of a given length can prefix `text`, so the answer does
    /// not depend on iteration order.
    pub fn longest_prefix_match(&self, text: &str) -> Option<(&str, &DictionaryEntry)> {
        for &len in &self.key_lengths {
            if len > text.len() || !text.is_char_boundary(len) {
                continue;
            }
            if let Some((key, list)) = self.entries.get_key_value(&text[..len]) {
                return list.first().map(|entry| (key.as_str(), entry));
            }
        }
        None
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries across all keys
    pub fn entry_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn max_key_len(&self) -> usize {
        self.key_lengths.first().copied().unwrap_or(0)
    }
}
