//! F1 standings CLI - runs a race command file and prints the standings

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use f1standings::data::read_command_file;
use f1standings::{
    CommandError, OutputFormat, RaceLog, ReportSink, RunConfig, StandingsReport,
};

#[derive(Parser)]
#[command(name = "f1standings")]
#[command(author, version, about = "Race result command interpreter", long_about = None)]
struct Cli {
    /// Command file to run (defaults to $F1_INPUT or textfiles/input-hf.txt)
    input: Option<PathBuf>,

    /// Character encoding of the command file
    #[arg(short, long)]
    encoding: Option<String>,

    /// Output format for standings: text or json
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Log level written to stderr
    #[arg(long, default_value = "warn")]
    log_level: Level,
}

impl Cli {
    fn into_config(self) -> RunConfig {
        let mut config = RunConfig::from_env();
        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(encoding) = self.encoding {
            config.encoding = encoding;
        }
        config.format = self.format;
        config
    }
}

/// Writes interpreter output to the terminal
struct ConsoleSink {
    format: OutputFormat,
}

impl ReportSink for ConsoleSink {
    fn status(&mut self, line: &str) {
        println!("{}", line);
    }

    fn report(&mut self, report: &StandingsReport) {
        match self.format {
            OutputFormat::Text => {
                println!();
                println!("{}", report.title().yellow().bold());
                for line in report.to_string().lines().skip(1) {
                    println!("{}", line);
                }
                println!();
            }
            OutputFormat::Json => match serde_json::to_string(report) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("{}: {}", "Failed to serialize standings".red(), e),
            },
        }
    }

    fn error(&mut self, error: &CommandError) {
        println!("{}", error.to_string().red());
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let config = cli.into_config();
    info!("Reading {:?} as {}", config.input, config.encoding);

    let lines = read_command_file(&config.input, &config.encoding)
        .with_context(|| format!("Failed to open file! ({})", config.input.display()))?;

    let mut log = RaceLog::new();
    let mut sink = ConsoleSink {
        format: config.format,
    };
    log.run_lines(&lines, &mut sink);

    Ok(())
}
