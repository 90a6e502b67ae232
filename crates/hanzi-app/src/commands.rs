use std::io::Write;

use hanzi_config::Config;
use hanzi_config::builder::BuilderConfig;
use hanzi_core::dictionary::Dictionary;
use hanzi_core::language::LanguageProcessor;
use hanzi_lang_mandarin::MandarinProcessor;

pub fn load_processor(config: &Config) -> anyhow::Result<MandarinProcessor> {
    let processor = MandarinProcessor::from_config(&config.dictionary)?;
    tracing::debug!("Dictionary ready: {} keys", processor.dictionary().len());
    Ok(processor)
}

pub fn convert(
    processor: &dyn LanguageProcessor,
    text: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if text.trim().is_empty() {
        tracing::warn!("Please enter some Pinyin text");
        return Ok(());
    }

    // Only the final line break of stdin is dropped; blank lines keep their place
    let text = text.trim_end_matches(['\r', '\n']);

    let chinese = processor.convert(text);
    tracing::debug!("Converted '{}' -> '{}'", text, chinese);
    writeln!(out, "{chinese}")?;
    Ok(())
}

pub fn suggest(
    processor: &dyn LanguageProcessor,
    partial: &str,
    limit: usize,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let suggestions = processor.suggest(partial, limit);

    if suggestions.is_empty() {
        writeln!(out, "No suggestions found")?;
        return Ok(());
    }

    for (index, entry) in suggestions.iter().enumerate() {
        // Numbered like a keyboard row: 1..9 then 0
        match index {
            0..=8 => writeln!(out, "{}. {}", index + 1, entry)?,
            9 => writeln!(out, "0. {entry}")?,
            _ => writeln!(out, "   {entry}")?,
        }
    }
    Ok(())
}

pub async fn build(config: &BuilderConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let report = hanzi_builder::run(config).await?;

    writeln!(out, "Successfully created {}", config.output_path)?;
    writeln!(out, "Total keys: {}", report.keys)?;
    writeln!(
        out,
        "Entries: {} parsed, {} duplicates, {} malformed lines",
        report.parsed, report.duplicates, report.malformed
    )?;
    Ok(())
}

pub fn info(dictionary: &Dictionary, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "Keys: {}", dictionary.len())?;
    writeln!(out, "Entries: {}", dictionary.entry_count())?;
    writeln!(out, "Longest key: {} bytes", dictionary.max_key_len())?;
    Ok(())
}
