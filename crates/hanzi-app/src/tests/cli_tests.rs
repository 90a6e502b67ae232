//! Argument parsing and config overrides

use std::path::PathBuf;

use clap::Parser;
use hanzi_config::Config;

use crate::cli::{Cli, Command};

#[test]
fn convert_collects_words() {
    let cli = Cli::try_parse_from(["hanzi", "convert", "ni3", "hao3"]).unwrap();
    match cli.command {
        Command::Convert { text } => assert_eq!(text, ["ni3", "hao3"]),
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn convert_without_words_reads_stdin() {
    let cli = Cli::try_parse_from(["hanzi", "convert"]).unwrap();
    assert!(matches!(cli.command, Command::Convert { ref text } if text.is_empty()));
}

#[test]
fn suggest_requires_input() {
    assert!(Cli::try_parse_from(["hanzi", "suggest"]).is_err());
}

#[test]
fn build_url_conflicts_with_input() {
    let result = Cli::try_parse_from([
        "hanzi",
        "build",
        "--url",
        "https://example.org/cedict.txt.gz",
        "--input",
        "cedict.txt",
    ]);
    assert!(result.is_err());
}

#[test]
fn global_flags_override_config() {
    let cli = Cli::try_parse_from([
        "hanzi",
        "suggest",
        "hao",
        "--limit",
        "3",
        "--dict",
        "my/dict.json",
        "--log-json",
    ])
    .unwrap();

    let mut config = Config::default();
    cli.apply(&mut config);

    assert_eq!(config.dictionary.path, "my/dict.json");
    assert_eq!(config.suggestion_limit, 3);
    assert!(config.log_json);
}

#[test]
fn build_flags_override_builder_config() {
    let cli = Cli::try_parse_from([
        "hanzi",
        "build",
        "--input",
        "corpus/cedict.txt.gz",
        "--output",
        "out/cedict.json",
        "--display-format",
    ])
    .unwrap();

    let mut config = Config::default();
    cli.apply(&mut config);

    assert_eq!(config.builder.input_path.as_deref(), Some("corpus/cedict.txt.gz"));
    assert_eq!(config.builder.output_path, "out/cedict.json");
    assert!(config.builder.display_format);
    assert!(!config.builder.keep_download);
}

#[test]
fn config_path_is_global() {
    let cli = Cli::try_parse_from(["hanzi", "info", "--config", "hanzi.json"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("hanzi.json")));
    assert!(matches!(cli.command, Command::Info));
}
