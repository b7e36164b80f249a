mod defaults;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::output::OutputFormat;
use defaults::DefaultsConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialDictionaryConfig {
    path: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialSearchConfig {
    size: Option<usize>,
    threads: Option<usize>,
    start_word: Option<String>,
    end_word: Option<String>,
    unique_words: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    pretty: Option<bool>,
}

/// Contents of an optional TOML config file. Every field may be omitted.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialRunConfig {
    dictionary: Option<PartialDictionaryConfig>,
    search: Option<PartialSearchConfig>,
    output: Option<PartialOutputConfig>,
}

/// Fully resolved settings for one run of the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub dictionary_path: PathBuf,
    pub size: usize,
    pub threads: usize,
    pub start_word: Option<String>,
    pub end_word: Option<String>,
    pub unique_words: bool,
    pub format: OutputFormat,
}

impl PartialRunConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Resolves every setting with the precedence: command-line flag, then `--set`, then the
    /// config file, then the built-in default.
    pub fn merge_with_cli(mut self, cli: &Cli) -> Result<RunConfig> {
        self.apply_set_values(&cli.set_values)?;

        let defaults = DefaultsConfig::default();
        let dictionary = self.dictionary.take().unwrap_or_default();
        let search = self.search.take().unwrap_or_default();
        let output = self.output.take().unwrap_or_default();

        let size = cli.size.or(search.size).unwrap_or(defaults.size);
        if size < 2 {
            return Err(CliError::Argument(format!("Invalid square size: {}.", size)));
        }
        let threads = cli.threads.or(search.threads).unwrap_or(defaults.threads);
        if threads < 1 {
            return Err(CliError::Argument(format!(
                "Invalid number of threads: {}.",
                threads
            )));
        }

        let pretty = cli.pretty || output.pretty.unwrap_or(defaults.pretty);

        Ok(RunConfig {
            dictionary_path: cli
                .input
                .clone()
                .or(dictionary.path)
                .unwrap_or(defaults.dictionary),
            size,
            threads,
            start_word: cli.start.clone().or(search.start_word),
            end_word: cli.end.clone().or(search.end_word),
            unique_words: cli.unique || search.unique_words.unwrap_or(defaults.unique_words),
            format: if pretty {
                OutputFormat::Pretty
            } else {
                OutputFormat::Compact
            },
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key {
                "dictionary.path" => {
                    self.dictionary.get_or_insert_with(Default::default).path =
                        Some(PathBuf::from(value_str));
                }
                "search.size" => {
                    self.search.get_or_insert_with(Default::default).size =
                        Some(parse_value(key, value_str)?);
                }
                "search.threads" => {
                    self.search.get_or_insert_with(Default::default).threads =
                        Some(parse_value(key, value_str)?);
                }
                "search.start-word" => {
                    self.search.get_or_insert_with(Default::default).start_word =
                        Some(value_str.to_string());
                }
                "search.end-word" => {
                    self.search.get_or_insert_with(Default::default).end_word =
                        Some(value_str.to_string());
                }
                "search.unique-words" => {
                    self.search.get_or_insert_with(Default::default).unique_words =
                        Some(parse_value(key, value_str)?);
                }
                "output.pretty" => {
                    self.output.get_or_insert_with(Default::default).pretty =
                        Some(parse_value(key, value_str)?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value_str: &str) -> Result<T> {
    value_str.trim().parse().map_err(|_| {
        CliError::Config(format!("Invalid value for {}: {}", key, value_str))
    })
}
