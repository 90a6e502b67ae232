use hanzi_core::dictionary::{Dictionary, DictionaryEntry};
use hanzi_core::preprocess::normalize_query;

pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Candidates for partially typed Pinyin, at most `limit` of them.
///
/// An exact key answers alone. Otherwise keys starting with the query come
/// first, then keys that merely contain it, both in key order.
pub fn suggest(dictionary: &Dictionary, partial: &str, limit: usize) -> Vec<DictionaryEntry> {
    let query = normalize_query(partial);
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }

    if let Some(entries) = dictionary.get(&query) {
        return entries.iter().take(limit).cloned().collect();
    }

    let mut out = Vec::with_capacity(limit);

    for (_, entries) in dictionary.keys_with_prefix(&query) {
        if fill(&mut out, entries, limit) {
            return out;
        }
    }

    let containing = dictionary
        .iter()
        .filter(|(key, _)| !key.starts_with(&query) && key.contains(&query));
    for (_, entries) in containing {
        if fill(&mut out, entries, limit) {
            break;
        }
    }

    tracing::debug!("{} suggestions for '{}'", out.len(), query);
    out
}

// Returns true once `out` is full.
fn fill(out: &mut Vec<DictionaryEntry>, entries: &[DictionaryEntry], limit: usize) -> bool {
    let room = limit.saturating_sub(out.len());
    out.extend(entries.iter().take(room).cloned());
    out.len() >= limit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::DictionaryLoader;

    fn chinese(entries: &[DictionaryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.chinese.as_str()).collect()
    }

    fn dict(pairs: &[(&str, Vec<&str>)]) -> Dictionary {
        Dictionary::from_entries(pairs.iter().map(|(key, list)| {
            (
                *key,
                list.iter().map(|c| DictionaryEntry::new(*c, "")).collect(),
            )
        }))
    }

    #[test]
    fn exact_key_returns_only_its_entries() {
        let dict = DictionaryLoader::load_embedded().unwrap();

        let found = suggest(&dict, "ni", DEFAULT_SUGGESTION_LIMIT);
        assert_eq!(chinese(&found), ["你", "泥", "铌", "伱", "㝵"]);

        let capped = suggest(&dict, "Ni3", 2);
        assert_eq!(chinese(&capped), ["你", "泥"]);
    }

    #[test]
    fn prefix_matches_come_before_substring_matches() {
        let dict = dict(&[
            ("ahao", vec!["啊好"]),
            ("hao", vec!["好", "号"]),
            ("haoma", vec!["号码"]),
            ("nihaoma", vec!["你好吗"]),
        ]);

        let found = suggest(&dict, "ha", 10);
        assert_eq!(chinese(&found), ["好", "号", "号码", "啊好", "你好吗"]);
    }

    #[test]
    fn limit_cuts_inside_a_key() {
        let dict = dict(&[("hao", vec!["好", "号", "毫"]), ("haoma", vec!["号码"])]);

        let found = suggest(&dict, "ha", 2);
        assert_eq!(chinese(&found), ["好", "号"]);
    }

    #[test]
    fn substring_pass_skips_prefix_keys() {
        let dict = dict(&[("ab", vec!["1"]), ("xab", vec!["2"])]);
        let found = suggest(&dict, "a", 10);
        assert_eq!(chinese(&found), ["1", "2"]);
    }

    #[test]
    fn phrase_keys_are_reachable() {
        let dict = DictionaryLoader::load_embedded().unwrap();
        let found = suggest(&dict, "wo ai", 10);
        assert_eq!(chinese(&found), ["我爱你"]);
    }

    #[test]
    fn empty_query_or_zero_limit_gives_nothing() {
        let dict = DictionaryLoader::load_embedded().unwrap();
        assert!(suggest(&dict, "  42 ", 10).is_empty());
        assert!(suggest(&dict, "ni", 0).is_empty());
        assert!(suggest(&dict, "zzz", 10).is_empty());
    }
}
