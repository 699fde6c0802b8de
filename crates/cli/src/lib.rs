//! `bizcase` command-line evaluator: reads one cost-input document as JSON,
//! writes the business-case report as JSON.

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

use anyhow::Context;

use bizcase_modeling::{BusinessCaseEngine, BusinessCaseReport, CostInputs};

pub mod config;

/// Parse a [`CostInputs`] JSON document.
pub fn read_inputs(reader: impl Read) -> anyhow::Result<CostInputs> {
    serde_json::from_reader(reader).context("failed to parse cost inputs JSON")
}

/// Read inputs from `path`, or from stdin when `path` is `None` or `-`.
pub fn load_inputs(path: Option<&str>) -> anyhow::Result<CostInputs> {
    match path {
        None | Some("-") => read_inputs(io::stdin().lock()),
        Some(path) => {
            let file = File::open(Path::new(path))
                .with_context(|| format!("failed to open input file {path}"))?;
            read_inputs(BufReader::new(file))
        }
    }
}

/// Serialize `report` as pretty JSON followed by a newline.
pub fn write_report(mut writer: impl Write, report: &BusinessCaseReport) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut writer, report).context("failed to serialize report")?;
    writeln!(writer).context("failed to write report")?;
    Ok(())
}

/// Evaluate the document at `path` (or stdin) and write the report to `out`.
pub fn run(engine: &BusinessCaseEngine, path: Option<&str>, out: impl Write) -> anyhow::Result<()> {
    let inputs = load_inputs(path)?;
    tracing::info!(mode = inputs.mode(), "evaluating business case");

    let report = engine.evaluate(&inputs);
    write_report(out, &report)
}
