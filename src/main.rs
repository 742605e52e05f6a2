use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, IsTerminal};
use tracing::info;

use pim_import::cli::Cli;
use pim_import::logging::init_logging;
use pim_import::{normalize_batch, read_records, write_variants, ImportOutcome, ImportReport};

fn main() {
    let cli = Cli::parse();

    let log_config = cli
        .log_config()
        .with_ansi(cli.log_file.is_none() && io::stderr().is_terminal());
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error:#}");
        std::process::exit(1);
    }

    if let Err(error) = run_import(&cli) {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

fn run_import(cli: &Cli) -> Result<()> {
    info!(input = %cli.input.display(), "reading merchant SKUs");

    // 1. Read rows
    let batch = read_records(&cli.input)?;

    // 2. Normalize, dedup, sort
    let outcome = normalize_batch(batch);

    // 3. Write import CSV
    let output = if cli.dry_run {
        info!("dry run, output not written");
        None
    } else {
        write_variants(&cli.output, &outcome.variants)?;
        info!(output = %cli.output.display(), rows = outcome.variants.len(), "import CSV written");
        Some(cli.output.display().to_string())
    };

    // 4. Optional JSON report
    if let Some(report_path) = &cli.report {
        let report = ImportReport::new(
            cli.input.display().to_string(),
            output.clone(),
            outcome.summary.clone(),
        );
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        fs::write(report_path, json)
            .with_context(|| format!("Failed to write report: {}", report_path.display()))?;
        info!(report = %report_path.display(), "report written");
    }

    print_summary(&outcome, output.as_deref());
    Ok(())
}

fn print_summary(outcome: &ImportOutcome, output: Option<&str>) {
    let summary = &outcome.summary;

    println!(
        "✅ Generated {} rows for {} products",
        summary.variants_written,
        summary.product_count()
    );

    if summary.duplicates_dropped > 0 || summary.skipped_missing_sku > 0 {
        println!(
            "   ({} duplicate(s) dropped, {} row(s) without SKU skipped)",
            summary.duplicates_dropped, summary.skipped_missing_sku
        );
    }

    if !summary.products.is_empty() {
        println!("\nProducts found:");
        for (product_code, count) in &summary.products {
            println!("  - {}: {} variant(s)", product_code, count);
        }
    }

    if let Some(path) = output {
        println!("\n📄 CSV saved to: {}", path);
    }
}
