use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use popnorm_ingest::{read_csv_table, write_canonical_csv, write_canonical_csv_file};
use popnorm_model::{KeywordSets, NormalizeOptions};
use popnorm_normalize::Normalizer;
use popnorm_cli::present::{
    detection_table, display_order, keywords_table, records_table, report_table,
};

use crate::cli::{DetectArgs, KeywordArgs, NormalizeArgs, OutputFormatArg};

fn load_keywords(args: &KeywordArgs) -> Result<KeywordSets> {
    match &args.keywords {
        Some(path) => KeywordSets::load(path)
            .with_context(|| format!("load keywords: {}", path.display())),
        None => Ok(KeywordSets::default()),
    }
}

pub fn run_keywords(args: &KeywordArgs) -> Result<()> {
    let keywords = load_keywords(args)?;
    println!("{}", keywords_table(&keywords));
    Ok(())
}

pub fn run_detect(args: &DetectArgs) -> Result<()> {
    let keywords = load_keywords(&args.keywords)?;
    let normalizer = Normalizer::new(keywords, NormalizeOptions::default())?;
    let raw = read_csv_table(&args.input)
        .with_context(|| format!("read input: {}", args.input.display()))?;
    let detection = normalizer.detect(&raw)?;
    println!("{}", detection_table(&raw, &detection));
    Ok(())
}

pub fn run_normalize(args: &NormalizeArgs) -> Result<()> {
    let span = info_span!("normalize_file", input = %args.input.display());
    let _guard = span.enter();

    let keywords = load_keywords(&args.keywords)?;
    let options = NormalizeOptions::default().with_thousands_separators(args.thousands);
    let normalizer = Normalizer::new(keywords, options)?;
    let raw = read_csv_table(&args.input)
        .with_context(|| format!("read input: {}", args.input.display()))?;
    let outcome = normalizer.normalize_with_report(&raw)?;
    let report = &outcome.report;
    info!(
        shape = %report.detection.shape,
        records = outcome.table.len(),
        regions = outcome.table.regions().len(),
        "normalized input"
    );
    if !report.skipped_rows.is_empty() {
        warn!(rows = report.skipped_rows.len(), "rows dropped for missing age");
    }
    if !report.coerced_cells.is_empty() {
        warn!(
            cells = report.coerced_cells.len(),
            "population values replaced by zero"
        );
    }

    let shown = display_order(&outcome.table, &args.regions);
    if let (OutputFormatArg::Csv, Some(path)) = (args.format, &args.output) {
        write_canonical_csv_file(path, &shown)
            .with_context(|| format!("write output: {}", path.display()))?;
    } else {
        let rendered = match args.format {
            OutputFormatArg::Table => format!("{}\n", records_table(&shown)),
            OutputFormatArg::Json => {
                let mut text =
                    serde_json::to_string_pretty(&shown).context("serialize records")?;
                text.push('\n');
                text
            }
            OutputFormatArg::Csv => {
                let mut buffer = Vec::new();
                write_canonical_csv(&mut buffer, &shown).context("render csv")?;
                String::from_utf8(buffer).context("render csv")?
            }
        };
        match &args.output {
            Some(path) => fs::write(path, rendered)
                .with_context(|| format!("write output: {}", path.display()))?,
            None => io::stdout()
                .lock()
                .write_all(rendered.as_bytes())
                .context("write output")?,
        }
    }

    if args.report
        && let Some(table) = report_table(report)
    {
        eprintln!("{table}");
    }
    Ok(())
}
