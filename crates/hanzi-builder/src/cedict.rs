//! CC-CEDICT line grammar: `Traditional Simplified [Pin1 yin1] /gloss/gloss2/.../`

use std::sync::LazyLock;

use hanzi_core::dictionary::DictionaryEntry;
use regex::Regex;

static LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?) (.+?) \[(.+?)\] /([^/]+?)/").expect("Invalid CC-CEDICT line pattern")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    /// Blank line or `#` comment
    Skip,
    /// Does not follow the line grammar
    Malformed,
    Entry(CedictLine<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CedictLine<'a> {
    pub traditional: &'a str,
    pub simplified: &'a str,
    pub pinyin: &'a str,
    /// First gloss only
    pub gloss: &'a str,
}

impl CedictLine<'_> {
    pub fn key(&self) -> String {
        pinyin_key(self.pinyin)
    }

    /// Simplified characters with the first gloss
    pub fn entry(&self) -> DictionaryEntry {
        DictionaryEntry::new(self.simplified, self.gloss)
    }
}

pub fn parse_line(line: &str) -> ParsedLine<'_> {
    if line.starts_with('#') || line.trim().is_empty() {
        return ParsedLine::Skip;
    }

    let Some(caps) = LINE.captures(line) else {
        return ParsedLine::Malformed;
    };

    let (Some(traditional), Some(simplified), Some(pinyin), Some(gloss)) =
        (caps.get(1), caps.get(2), caps.get(3), caps.get(4))
    else {
        return ParsedLine::Malformed;
    };

    ParsedLine::Entry(CedictLine {
        traditional: traditional.as_str(),
        simplified: simplified.as_str(),
        pinyin: pinyin.as_str(),
        gloss: gloss.as_str(),
    })
}

/// Dictionary key for a bracketed Pinyin field: syllables lowercased, tone
/// digits dropped, `u:`/`ü` folded to `u`, joined without separator.
pub fn pinyin_key(pinyin: &str) -> String {
    pinyin.split(' ').map(plain_syllable).collect()
}

fn plain_syllable(syllable: &str) -> String {
    syllable
        .to_lowercase()
        .replace("u:", "u")
        .replace('ü', "u")
        .chars()
        .filter(|c| !c.is_ascii_digit())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reference_line() {
        let ParsedLine::Entry(line) = parse_line("中國 中国 [Zhong1 guo2] /China/Middle Kingdom/")
        else {
            panic!("expected an entry");
        };

        assert_eq!(line.traditional, "中國");
        assert_eq!(line.simplified, "中国");
        assert_eq!(line.gloss, "China");
        assert_eq!(line.key(), "zhongguo");
        assert_eq!(line.entry().to_string(), "中国 (China)");
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        assert_eq!(parse_line("# CC-CEDICT"), ParsedLine::Skip);
        assert_eq!(parse_line("   "), ParsedLine::Skip);
        assert_eq!(parse_line(""), ParsedLine::Skip);
    }

    #[test]
    fn lines_outside_the_grammar_are_malformed() {
        assert_eq!(parse_line("中國 中国 Zhong1 guo2 /China/"), ParsedLine::Malformed);
        assert_eq!(parse_line("中國 中国 [Zhong1 guo2]"), ParsedLine::Malformed);
        assert_eq!(parse_line("中國 中国 [Zhong1 guo2] //"), ParsedLine::Malformed);
    }

    #[test]
    fn crlf_lines_still_parse() {
        let ParsedLine::Entry(line) = parse_line("你好 你好 [ni3 hao3] /hello/hi/\r") else {
            panic!("expected an entry");
        };
        assert_eq!(line.key(), "nihao");
        assert_eq!(line.gloss, "hello");
    }

    #[test]
    fn keys_fold_umlaut_and_neutral_tone() {
        assert_eq!(pinyin_key("lu:4 se4"), "luse");
        assert_eq!(pinyin_key("Lü4"), "lu");
        assert_eq!(pinyin_key("ma1 ma5"), "mama");
        assert_eq!(pinyin_key("Bei3 jing1"), "beijing");
    }
}
