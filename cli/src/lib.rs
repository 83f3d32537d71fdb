mod filter_cmd;
mod search_cmd;

use std::fs;
use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use report_filter::TestCase;
use serde::de::DeserializeOwned;
use tracing::debug;

pub use filter_cmd::FilterArgs;
pub use search_cmd::SearchArgs;

/// Filter and search JSON test reports.
#[derive(Debug, clap::Parser)]
#[command(name = "report-filter", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Print the keys of the report nodes that pass a filter.
    Filter(FilterArgs),

    /// Count occurrences of a text in every field of a report.
    Search(SearchArgs),
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let output = match self.command {
            Command::Filter(args) => filter_cmd::run(&args)?,
            Command::Search(args) => search_cmd::run(&args)?,
        };
        print!("{output}");
        Ok(())
    }
}

pub(crate) fn load_report(path: &Path) -> Result<TestCase> {
    let report: TestCase = load_json(path, "report")?;
    debug!(
        "loaded report {} with {} actions and {} messages",
        path.display(),
        report.actions.len(),
        report.messages.len()
    );
    Ok(report)
}

pub(crate) fn load_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {what} {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {what} {}", path.display()))
}
