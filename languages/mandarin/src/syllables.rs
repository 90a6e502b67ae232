use std::sync::LazyLock;

/// Syllables tried when no dictionary key matches at a position.
///
/// Includes bare finals (`iao`, `uang`) and the nasal syllables `n`, `ng`, `m`.
const SYLLABLES: &[&str] = &[
    "a", "o", "e", "ai", "ei", "ao", "ou", "an", "en", "ang", "eng", "er",
    "ba", "pa", "ma", "fa", "da", "ta", "na", "la", "ga", "ka", "ha", "za",
    "ca", "sa", "zha", "cha", "sha", "ra", "bi", "pi", "mi", "di", "ti", "ni",
    "li", "gi", "ki", "hi", "ji", "qi", "xi", "bo", "po", "mo", "fo", "de",
    "te", "ne", "le", "ge", "ke", "he", "ze", "ce", "se", "zhe", "che", "she",
    "re", "bu", "pu", "mu", "fu", "du", "tu", "nu", "lu", "gu", "ku", "hu",
    "zu", "cu", "su", "zhu", "chu", "shu", "ru", "wa", "ya", "wu", "yu", "we",
    "ye", "wo", "yo", "bai", "pai", "mai", "dai", "tai", "nai", "lai", "gai", "kai",
    "hai", "zai", "cai", "sai", "zhai", "chai", "shai", "bei", "pei", "mei", "fei", "dei",
    "tei", "nei", "lei", "gei", "kei", "hei", "zei", "sei", "zhei", "shei", "bao", "pao",
    "mao", "dao", "tao", "nao", "lao", "gao", "kao", "hao", "zao", "cao", "sao", "zhao",
    "chao", "shao", "rao", "ban", "pan", "man", "fan", "dan", "tan", "nan", "lan", "gan",
    "kan", "han", "zan", "can", "san", "zhan", "chan", "shan", "ran", "bang", "pang", "mang",
    "fang", "dang", "tang", "nang", "lang", "gang", "kang", "hang", "zang", "cang", "sang", "zhang",
    "chang", "shang", "rang", "bia", "pia", "mia", "dia", "nia", "lia", "jia", "qia", "xia",
    "bie", "pie", "mie", "die", "tie", "nie", "lie", "jie", "qie", "xie", "biao", "piao",
    "miao", "diao", "tiao", "niao", "liao", "jiao", "qiao", "xiao", "bin", "pin", "min", "nin",
    "lin", "jin", "qin", "xin", "bing", "ping", "ming", "ding", "ting", "ling", "jing", "qing",
    "ying", "uai", "iao", "iou", "ian", "uan", "van", "iang", "uang", "ing", "ong", "iong",
    "n", "ng", "m",
];

static STANDARD: LazyLock<SyllableTable> = LazyLock::new(|| SyllableTable::new(SYLLABLES));

/// Fixed set of Pinyin syllables, ordered longest first then lexicographically.
#[derive(Debug, Clone)]
pub struct SyllableTable {
    syllables: Vec<&'static str>,
}

impl SyllableTable {
    pub fn new(syllables: &[&'static str]) -> Self {
        let mut syllables = syllables.to_vec();
        syllables.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        syllables.dedup();
        Self { syllables }
    }

    /// The built-in table shared by every converter.
    pub fn standard() -> &'static SyllableTable {
        &STANDARD
    }

    /// Syllables that are a prefix of `text`, longest first.
    pub fn prefixes_of<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.syllables
            .iter()
            .copied()
            .filter(move |syllable| text.starts_with(syllable))
    }

    pub fn contains(&self, syllable: &str) -> bool {
        self.syllables.iter().any(|s| *s == syllable)
    }

    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }
}
