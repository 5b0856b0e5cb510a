//! Process command - extract the record from a single filing.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use adtx_core::form::{FormParser, RecordParser};
use adtx_core::{AdtxError, DocumentRenderer, FormRecord, TesseractOcr};

use crate::ollama::Summarizer;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input filing (PDF)
    #[arg(required = true)]
    input: PathBuf,

    /// Where to write the record JSON
    #[arg(short, long, default_value = "output.json")]
    output: PathBuf,

    /// Where to write the summary, when one is generated
    #[arg(long, default_value = "summary.txt")]
    summary_output: PathBuf,

    /// Skip summary generation entirely
    #[arg(long)]
    no_summary: bool,

    /// Skip the OCR fallback and use only native text
    #[arg(long)]
    text_only: bool,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("processing filing: {}", args.input.display());

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    // Stage 1: render the document to text, OCR-ing scanned pages.
    pb.set_message("Rendering document...");
    pb.set_position(10);

    let mut pdf_config = config.pdf.clone();
    if args.text_only {
        pdf_config.ocr_fallback = false;
    }
    let renderer = DocumentRenderer::new(TesseractOcr::new(config.ocr.clone()))
        .with_config(pdf_config);

    let text = match renderer.render(&args.input) {
        Ok(text) => text,
        Err(e) => {
            pb.finish_and_clear();
            // The one fatal outcome: nothing gets written.
            anyhow::bail!("document unreadable: {}", AdtxError::from(e));
        }
    };

    if text.trim().is_empty() {
        warn!("no recognizable text in document; record will hold defaults");
    }

    // Stage 2: recover the eight fields.
    pb.set_message("Extracting fields...");
    pb.set_position(50);

    let result = FormParser::new().parse(&text);
    for warning in &result.warnings {
        debug!("{}", warning);
    }

    let json = serde_json::to_string_pretty(&result.record)?;
    fs::write(&args.output, &json)?;
    pb.finish_and_clear();

    println!(
        "{} Record written to {}",
        style("✓").green(),
        args.output.display()
    );
    print_record(&result.record);

    // Stage 3: best-effort summary. Failure here never changes the outcome.
    if !args.no_summary {
        let summarizer = Summarizer::new(config.summary.clone());
        match summarizer.summarize(&result.record).await {
            Ok(summary) => {
                if save_summary(&args.summary_output, &summary) {
                    println!(
                        "{} Summary written to {}",
                        style("✓").green(),
                        args.summary_output.display()
                    );
                } else {
                    println!(
                        "{} Summary generated but could not be saved",
                        style("ℹ").blue()
                    );
                }
                println!();
                println!("{}", summary);
            }
            Err(e) => {
                warn!("summary unavailable: {}", e);
                println!(
                    "{} Summary skipped ({})",
                    style("ℹ").blue(),
                    e
                );
            }
        }
    }

    println!();
    println!("{} Extraction complete", style("✓").green());
    debug!("total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Write the summary file. The record JSON is already on disk at this
/// point, so a failed save must not turn the run into a failure.
fn save_summary(path: &std::path::Path, summary: &str) -> bool {
    match fs::write(path, summary) {
        Ok(()) => true,
        Err(e) => {
            warn!("could not save summary to {}: {}", path.display(), e);
            false
        }
    }
}

fn print_record(record: &FormRecord) {
    println!();
    for (name, value) in record.field_pairs() {
        let label = name.replace('_', " ");
        if value.is_empty() {
            println!("  {}: {}", style(label).bold(), style("-").dim());
        } else {
            println!("  {}: {}", style(label).bold(), value);
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_summary_writes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.txt");

        assert!(save_summary(&path, "three line summary"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "three line summary");
    }

    #[test]
    fn failed_summary_save_is_absorbed() {
        let dir = tempfile::tempdir().unwrap();

        // The target is a directory, so the write fails.
        assert!(!save_summary(dir.path(), "unwritable"));
    }
}
