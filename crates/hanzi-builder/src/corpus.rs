use std::collections::BTreeMap;
use std::io::{BufRead, BufReader, Read};

use flate2::read::MultiGzDecoder;
use hanzi_core::dictionary::{Dictionary, DictionaryEntry};

use crate::cedict::{ParsedLine, parse_line};
use crate::error::BuildError;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
const PROGRESS_EVERY: usize = 10_000;

/// Counters collected while reading a corpus
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub lines: usize,
    /// Blank and comment lines
    pub skipped: usize,
    pub malformed: usize,
    pub parsed: usize,
    /// Entries already present under the same key
    pub duplicates: usize,
    /// Unique keys in the finished dictionary
    pub keys: usize,
}

/// Collects parsed lines into key -> entries, keeping first-seen order.
#[derive(Debug, Default)]
pub struct CorpusAccumulator {
    entries: BTreeMap<String, Vec<DictionaryEntry>>,
    report: BuildReport,
}

impl CorpusAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: &str) {
        self.report.lines += 1;

        let parsed = match parse_line(line) {
            ParsedLine::Skip => {
                self.report.skipped += 1;
                return;
            }
            ParsedLine::Malformed => {
                tracing::debug!("Skipping malformed line {}: {}", self.report.lines, line);
                self.report.malformed += 1;
                return;
            }
            ParsedLine::Entry(parsed) => parsed,
        };

        let entry = parsed.entry();
        let slot = self.entries.entry(parsed.key()).or_default();
        if slot.contains(&entry) {
            self.report.duplicates += 1;
        } else {
            slot.push(entry);
        }

        self.report.parsed += 1;
        if self.report.parsed % PROGRESS_EVERY == 0 {
            tracing::info!("Processed {} entries...", self.report.parsed);
        }
    }

    /// Consume `reader` line by line; partial lines stay buffered between reads.
    pub fn read_from<R: BufRead>(&mut self, mut reader: R) -> Result<(), BuildError> {
        let mut line = String::new();
        loop {
            line.clear();
            let read = reader.read_line(&mut line).map_err(BuildError::Corpus)?;
            if read == 0 {
                return Ok(());
            }
            self.push_line(line.trim_end_matches(['\n', '\r']));
        }
    }

    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    pub fn finish(self) -> (Dictionary, BuildReport) {
        let dictionary = Dictionary::from_entries(self.entries);
        let mut report = self.report;
        report.keys = dictionary.len();
        tracing::info!(
            "Finished parsing. Processed {} entries into {} keys.",
            report.parsed,
            report.keys
        );
        (dictionary, report)
    }
}

/// Parse a plain or gzip-compressed corpus stream.
pub fn parse_corpus<R: Read>(reader: R) -> Result<(Dictionary, BuildReport), BuildError> {
    let mut reader = BufReader::new(reader);
    let is_gzip = reader
        .fill_buf()
        .map_err(BuildError::Corpus)?
        .starts_with(&GZIP_MAGIC);

    let mut accumulator = CorpusAccumulator::new();
    if is_gzip {
        tracing::debug!("Corpus is gzip compressed");
        accumulator.read_from(BufReader::new(MultiGzDecoder::new(reader)))?;
    } else {
        accumulator.read_from(reader)?;
    }

    Ok(accumulator.finish())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::Compression;
    use flate2::write::GzEncoder;

    use super::*;

    const SAMPLE: &str = "\
# CC-CEDICT
# Community maintained free Chinese-English dictionary.
中國 中国 [Zhong1 guo2] /China/Middle Kingdom/
你好 你好 [ni3 hao3] /hello/hi/
好 好 [hao3] /good/well/
號 号 [hao4] /number/
好 好 [hao4] /to be fond of/
號 号 [hao4] /number/
this line is broken

媽媽 妈妈 [ma1 ma5] /mom/
";

    fn gzip(text: &str) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(text.as_bytes()).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn accumulates_entries_in_corpus_order() {
        let (dict, report) = parse_corpus(SAMPLE.as_bytes()).unwrap();

        assert_eq!(dict.first("zhongguo").unwrap().to_string(), "中国 (China)");
        let hao: Vec<String> = dict.get("hao").unwrap().iter().map(|e| e.to_string()).collect();
        assert_eq!(hao, ["好 (good)", "号 (number)", "好 (to be fond of)"]);
        assert!(dict.contains_key("mama"));

        assert_eq!(
            report,
            BuildReport {
                lines: 11,
                skipped: 3,
                malformed: 1,
                parsed: 7,
                duplicates: 1,
                keys: 4,
            }
        );
    }

    #[test]
    fn gzip_and_plain_corpora_agree() {
        let (plain, _) = parse_corpus(SAMPLE.as_bytes()).unwrap();
        let (packed, report) = parse_corpus(gzip(SAMPLE).as_slice()).unwrap();

        assert_eq!(report.parsed, 7);
        assert_eq!(
            plain.to_json_pretty(Default::default()).unwrap(),
            packed.to_json_pretty(Default::default()).unwrap()
        );
    }

    #[test]
    fn lines_split_across_small_reads_are_reassembled() {
        let packed = gzip(SAMPLE);
        let reader = BufReader::with_capacity(7, MultiGzDecoder::new(packed.as_slice()));

        let mut accumulator = CorpusAccumulator::new();
        accumulator.read_from(reader).unwrap();
        assert_eq!(accumulator.report().parsed, 7);
        assert_eq!(accumulator.report().malformed, 1);
    }

    #[test]
    fn corrupt_gzip_is_fatal() {
        let mut packed = gzip(SAMPLE);
        let mid = packed.len() / 2;
        packed.truncate(mid);
        packed.extend_from_slice(b"\x00\xffgarbage");

        let err = parse_corpus(packed.as_slice()).unwrap_err();
        assert!(matches!(err, BuildError::Corpus(_)));
    }

    #[test]
    fn invalid_utf8_is_fatal() {
        let bytes: &[u8] = b"\xff\xfe\xfd [a1] /x/\n";
        let err = parse_corpus(bytes).unwrap_err();
        assert!(matches!(err, BuildError::Corpus(_)));
    }

    #[test]
    fn empty_corpus_builds_empty_dictionary() {
        let (dict, report) = parse_corpus(&b""[..]).unwrap();
        assert!(dict.is_empty());
        assert_eq!(report, BuildReport::default());
    }
}
