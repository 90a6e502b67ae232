use unicode_normalization::UnicodeNormalization;

/// Canonical form of raw Pinyin input.
///
/// NFKC first so full-width letters and digits fold to ASCII, then lowercase,
/// `ü` -> `u`, ASCII digits (tone numbers) removed anywhere. Runs of
/// non-newline whitespace collapse to a single space and each line is trimmed.
/// Newlines survive as line separators; `\r\n` and a lone `\r` count as one.
pub fn normalize(raw: &str) -> String {
    let folded: String = raw.nfkc().collect();
    let folded = folded.replace("\r\n", "\n").replace('\r', "\n");

    let mut out = String::with_capacity(folded.len());
    let mut pending_space = false;

    for ch in folded.chars().flat_map(char::to_lowercase) {
        match ch {
            '\n' => {
                pending_space = false;
                out.push('\n');
            }
            '0'..='9' => {}
            c if c.is_whitespace() => pending_space = true,
            c => {
                if pending_space && !out.is_empty() && !out.ends_with('\n') {
                    out.push(' ');
                }
                pending_space = false;
                out.push(if c == 'ü' { 'u' } else { c });
            }
        }
    }

    out
}

/// [`normalize`] with every whitespace character removed, for no-space keys.
pub fn normalize_compact(raw: &str) -> String {
    normalize(raw).chars().filter(|c| !c.is_whitespace()).collect()
}

/// Single-line query form: lines joined by one space and trimmed.
pub fn normalize_query(raw: &str) -> String {
    normalize(raw)
        .split('\n')
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub trait Preprocessor {
    // Default Pinyin preprocessor
    fn process(&self, text: &str) -> String {
        normalize(text)
    }

    fn process_compact(&self, text: &str) -> String {
        normalize_compact(text)
    }

    fn process_query(&self, text: &str) -> String {
        normalize_query(text)
    }
}

pub struct PinyinPreprocessor;
impl Preprocessor for PinyinPreprocessor {}
