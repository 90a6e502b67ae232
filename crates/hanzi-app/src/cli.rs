use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hanzi_config::Config;

#[derive(Parser, Debug)]
#[command(name = "hanzi")]
#[command(version)]
#[command(about = "Convert Pinyin into Chinese characters", long_about = None)]
pub struct Cli {
    /// JSON config file (defaults come from HANZI_* environment variables)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Dictionary to load instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub dict: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert Pinyin text; reads stdin when no text is given
    Convert {
        #[arg(value_name = "TEXT")]
        text: Vec<String>,
    },

    /// List candidates for partially typed Pinyin
    Suggest {
        #[arg(value_name = "PARTIAL", required = true)]
        partial: Vec<String>,

        /// Maximum number of suggestions
        #[arg(long, short)]
        limit: Option<usize>,
    },

    /// Build the dictionary from the CC-CEDICT corpus
    Build {
        /// Corpus URL to download
        #[arg(long, conflicts_with = "input")]
        url: Option<String>,

        /// Local corpus file (plain or gzip) instead of downloading
        #[arg(long, value_name = "PATH")]
        input: Option<PathBuf>,

        /// Where to write the dictionary JSON
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Keep the downloaded archive
        #[arg(long)]
        keep_download: bool,

        /// Write "<chinese> (<gloss>)" strings instead of entry objects
        #[arg(long)]
        display_format: bool,
    },

    /// Show statistics of the loaded dictionary
    Info,

    /// Write a config file with the current defaults
    InitConfig {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}

impl Cli {
    /// Command line flags take precedence over the config
    pub fn apply(&self, config: &mut Config) {
        if let Some(dict) = &self.dict {
            config.dictionary.path = dict.display().to_string();
        }
        if self.log_json {
            config.log_json = true;
        }

        match &self.command {
            Command::Suggest {
                limit: Some(limit), ..
            } => config.suggestion_limit = *limit,
            Command::Build {
                url,
                input,
                output,
                keep_download,
                display_format,
            } => {
                let builder = &mut config.builder;
                if let Some(url) = url {
                    builder.corpus_url = url.clone();
                }
                if let Some(input) = input {
                    builder.input_path = Some(input.display().to_string());
                }
                if let Some(output) = output {
                    builder.output_path = output.display().to_string();
                }
                builder.keep_download |= *keep_download;
                builder.display_format |= *display_format;
            }
            _ => {}
        }
    }
}
