//! Run configuration

use std::path::PathBuf;
use std::str::FromStr;

use crate::data::reader::DEFAULT_ENCODING;

/// Command file read when no path is given
pub const DEFAULT_INPUT: &str = "textfiles/input-hf.txt";

/// Environment variable overriding the input path
pub const ENV_INPUT: &str = "F1_INPUT";
/// Environment variable overriding the input encoding
pub const ENV_ENCODING: &str = "F1_ENCODING";

/// How standings reports are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

/// Settings for one interpreter run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Command file to read
    pub input: PathBuf,
    /// Encoding label understood by `encoding_rs`
    pub encoding: String,
    pub format: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            encoding: DEFAULT_ENCODING.to_string(),
            format: OutputFormat::Text,
        }
    }
}

impl RunConfig {
    /// Defaults, overridden by `F1_INPUT` / `F1_ENCODING` when set
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            input: std::env::var(ENV_INPUT)
                .map(PathBuf::from)
                .unwrap_or(defaults.input),
            encoding: std::env::var(ENV_ENCODING).unwrap_or(defaults.encoding),
            format: defaults.format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RunConfig::default();
        assert_eq!(config.input, PathBuf::from("textfiles/input-hf.txt"));
        assert_eq!(config.encoding, "windows-1250");
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
