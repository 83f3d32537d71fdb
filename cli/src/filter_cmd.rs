use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use report_filter::FilterBlock;
use report_filter::FilterConfig;
use report_filter::FilterResults;
use report_filter::FilterType;
use report_filter::filtrate;

use crate::load_json;
use crate::load_report;

#[derive(Debug, clap::Parser)]
pub struct FilterArgs {
    /// Test case JSON file.
    #[arg(long, value_name = "FILE")]
    pub report: PathBuf,

    /// Filter config JSON file (`{"types": [...], "blocks": [...]}`).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Node type to keep: action, verification or message. Repeatable;
    /// replaces the types of `--config`.
    #[arg(long = "type", value_name = "TYPE")]
    pub types: Vec<FilterType>,

    /// Filter block such as `service=one,two` or `status=FAILED`. Repeatable;
    /// appended to the blocks of `--config`.
    #[arg(long = "block", value_name = "PATH=VALUES")]
    pub blocks: Vec<FilterBlock>,

    /// Print the keys as a JSON array.
    #[arg(long)]
    pub json: bool,
}

pub(crate) fn run(args: &FilterArgs) -> Result<String> {
    let report = load_report(&args.report)?;
    let config = build_config(args)?;
    let results = filtrate(&report, &config).context("invalid filter")?;
    render(&results, args.json)
}

fn build_config(args: &FilterArgs) -> Result<FilterConfig> {
    let mut config = match &args.config {
        Some(path) => load_json(path, "filter config")?,
        None => FilterConfig::default(),
    };
    if !args.types.is_empty() {
        config = config.with_types(args.types.iter().copied());
    }
    config.blocks.extend(args.blocks.iter().cloned());
    Ok(config)
}

fn render(results: &FilterResults, json: bool) -> Result<String> {
    if json {
        let mut output = serde_json::to_string_pretty(results)?;
        output.push('\n');
        return Ok(output);
    }
    let mut output = String::new();
    for key in results {
        let _ = writeln!(output, "{key}");
    }
    Ok(output)
}
