//! listview-scrape CLI
//!
//! Scrapes the scrollable list currently on screen of a connected Android
//! device and exports the deduplicated table to CSV, TSV or JSON.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use listview_scrape::device::adb::SwipeGesture;
use listview_scrape::{AdbDevice, DelimitedSink, JsonSink, ReportSink, Scraper, WidgetClasses};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum OutputFormat {
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    /// Infer the format from the output file extension, defaulting to CSV
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("tsv") => OutputFormat::Tsv,
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Csv,
        }
    }
}

/// Scrape the scrollable list on screen of a connected Android device
#[derive(Debug, Parser)]
#[command(name = "listview-scrape", version, about)]
struct Args {
    /// Output file for the report
    #[arg(short, long, default_value = "report.csv")]
    output: PathBuf,

    /// Output format (inferred from the output extension when omitted)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Device serial to target when several devices are attached
    #[arg(short, long)]
    serial: Option<String>,

    /// Path to the adb executable
    #[arg(long, default_value = "adb")]
    adb: String,

    /// Scroll swipe gesture as X1,Y1,X2,Y2 screen coordinates
    #[arg(long, value_parser = parse_swipe)]
    swipe: Option<SwipeGesture>,

    /// Class tag of the scrollable list container
    #[arg(long, default_value = "android.widget.ListView")]
    list_class: String,

    /// Class tag of text cells inside a row
    #[arg(long, default_value = "android.widget.TextView")]
    text_class: String,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_swipe(value: &str) -> Result<SwipeGesture, String> {
    let coords: Vec<u32> = value
        .split(',')
        .map(|part| part.trim().parse().map_err(|_| format!("invalid coordinate '{}'", part)))
        .collect::<Result<_, _>>()?;

    match coords.as_slice() {
        [x1, y1, x2, y2] => Ok(SwipeGesture { x1: *x1, y1: *y1, x2: *x2, y2: *y2 }),
        _ => Err("expected four coordinates: X1,Y1,X2,Y2".to_string()),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env().filter_level(level).init();

    let mut device = AdbDevice::new().adb_path(&args.adb);
    if let Some(serial) = &args.serial {
        device = device.serial(serial);
    }
    if let Some(swipe) = args.swipe {
        device = device.swipe(swipe);
    }

    let classes = WidgetClasses::new()
        .list_class(&args.list_class)
        .text_class(&args.text_class);

    let report = Scraper::with_classes(classes)
        .scrape(&mut device)
        .context("scrape failed")?;

    let format = args.format.unwrap_or_else(|| OutputFormat::from_path(&args.output));
    let write = match format {
        OutputFormat::Csv => DelimitedSink::csv().write_report(&report, &args.output),
        OutputFormat::Tsv => DelimitedSink::tsv().write_report(&report, &args.output),
        OutputFormat::Json => JsonSink::new().write_report(&report, &args.output),
    };
    write.with_context(|| format!("failed to write report to {}", args.output.display()))?;

    println!(
        "Wrote {} rows ({} snapshots) to {}",
        report.row_count(),
        report.iterations,
        args.output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_swipe() {
        let gesture = parse_swipe("500,1000,500,500").unwrap();
        assert_eq!(gesture, SwipeGesture { x1: 500, y1: 1000, x2: 500, y2: 500 });

        assert!(parse_swipe("500,1000").is_err());
        assert!(parse_swipe("a,b,c,d").is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path(Path::new("out.tsv")), OutputFormat::Tsv);
        assert_eq!(OutputFormat::from_path(Path::new("out.json")), OutputFormat::Json);
        assert_eq!(OutputFormat::from_path(Path::new("out.csv")), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_path(Path::new("out")), OutputFormat::Csv);
    }
}
