//! Offline builder turning the CC-CEDICT corpus into the persisted dictionary.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use hanzi_config::builder::BuilderConfig;
use hanzi_core::dictionary::{Dictionary, EntryFormat};

pub mod cedict;
pub mod corpus;
pub mod error;
pub mod source;

pub use corpus::{BuildReport, CorpusAccumulator, parse_corpus};
pub use error::BuildError;
pub use source::{AcquiredCorpus, CorpusSource, HttpCorpus, LocalCorpus};

/// Options for one build
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub output_path: PathBuf,
    pub format: EntryFormat,
    pub keep_download: bool,
}

impl From<&BuilderConfig> for BuildOptions {
    fn from(config: &BuilderConfig) -> Self {
        Self {
            output_path: PathBuf::from(&config.output_path),
            format: if config.display_format {
                EntryFormat::Display
            } else {
                EntryFormat::Structured
            },
            keep_download: config.keep_download,
        }
    }
}

/// Build from the configured local file, or download the corpus.
pub async fn run(config: &BuilderConfig) -> Result<BuildReport, BuildError> {
    let source: Box<dyn CorpusSource> = match &config.input_path {
        Some(path) => Box::new(LocalCorpus::new(path)),
        None => Box::new(HttpCorpus::new(&config.corpus_url, &config.download_path)),
    };

    build(source.as_ref(), &BuildOptions::from(config)).await
}

/// Acquire, parse and persist. Any failure aborts the whole build.
pub async fn build(
    source: &dyn CorpusSource,
    options: &BuildOptions,
) -> Result<BuildReport, BuildError> {
    tracing::info!("Building dictionary from {}", source.describe());
    let corpus = source.fetch().await?;

    let corpus_path = corpus.path.clone();
    let output_path = options.output_path.clone();
    let format = options.format;
    let result = tokio::task::spawn_blocking(move || {
        let (dictionary, report) = parse_corpus(File::open(&corpus_path)?)?;
        write_dictionary(&dictionary, &output_path, format)?;
        Ok::<_, BuildError>(report)
    })
    .await;

    if corpus.temporary && !options.keep_download {
        match fs::remove_file(&corpus.path) {
            Ok(()) => tracing::info!("Cleaned up temporary file: {}", corpus.path.display()),
            Err(e) => tracing::warn!("Could not clean up temporary file: {}", e),
        }
    }

    let report = result??;
    tracing::info!(
        "Saved {} unique Pinyin keys to {}",
        report.keys,
        options.output_path.display()
    );
    Ok(report)
}

/// Write keys sorted and pretty-printed, replacing `path` only once complete.
pub fn write_dictionary(
    dictionary: &Dictionary,
    path: &Path,
    format: EntryFormat,
) -> Result<(), BuildError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let staging = staging_path(path, "tmp");
    let result = write_staged(dictionary, &staging, format)
        .and_then(|()| fs::rename(&staging, path).map_err(BuildError::from));

    if result.is_err() {
        let _ = fs::remove_file(&staging);
    }
    result
}

fn write_staged(
    dictionary: &Dictionary,
    staging: &Path,
    format: EntryFormat,
) -> Result<(), BuildError> {
    let mut writer = BufWriter::new(File::create(staging)?);
    dictionary.write_json(&mut writer, format)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// `path` with `.<suffix>` appended to the full file name
pub(crate) fn staging_path(path: &Path, suffix: &str) -> PathBuf {
    let mut staging = path.as_os_str().to_owned();
    staging.push(".");
    staging.push(suffix);
    PathBuf::from(staging)
}
