use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Result;
use report_filter::SearchResults;
use report_filter::search;

use crate::load_report;

#[derive(Debug, clap::Parser)]
pub struct SearchArgs {
    /// Test case JSON file.
    #[arg(long, value_name = "FILE")]
    pub report: PathBuf,

    /// Print the per-field counts as JSON.
    #[arg(long)]
    pub json: bool,

    /// Text to look for; several words are joined with single spaces.
    #[arg(value_name = "QUERY", required = true, num_args = 1..)]
    pub query: Vec<String>,
}

pub(crate) fn run(args: &SearchArgs) -> Result<String> {
    let report = load_report(&args.report)?;
    let results = search(&report, &args.query.join(" "));
    render(&results, args.json)
}

fn render(results: &SearchResults, json: bool) -> Result<String> {
    let mut output = if json {
        serde_json::to_string_pretty(results)?
    } else {
        let mut output = String::new();
        for (key, count) in results.iter() {
            let _ = writeln!(output, "{key}\t{count}");
        }
        let _ = write!(output, "total: {}", results.total());
        output
    };
    output.push('\n');
    Ok(output)
}
