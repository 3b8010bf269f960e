//! Command-line exporter for report datasets.

use clap::Parser;
use report_export::config::ExportConfig;
use report_export::export::{DirectorySink, ExportFormat, ExportOutcome, export_with};
use report_export::reports::{ReportKind, export_dataset_report, is_privileged_role};
use report_export::sheet::Dataset;
use report_export::{Error, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "report-export")]
#[command(about = "Export report rows to CSV or SpreadsheetML", long_about = None)]
struct Cli {
    /// JSON file holding an array of flat objects ("-" reads stdin)
    #[arg(long, short)]
    input: PathBuf,

    /// Base file name, without extension
    #[arg(long, short, conflicts_with = "kind")]
    name: Option<String>,

    /// Report being exported (sales, cook, delivery, referral); rows are
    /// read in that report's typed shape
    #[arg(long, short, requires = "role")]
    kind: Option<ReportKind>,

    /// Output format (csv, xls)
    #[arg(long, short)]
    format: Option<ExportFormat>,

    /// Directory to write into
    #[arg(long, short)]
    out_dir: Option<PathBuf>,

    /// YAML configuration file
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Viewer role; required with --kind, and only admin roles may export reports
    #[arg(long)]
    role: Option<String>,

    /// Write tab-separated values instead of commas
    #[arg(long)]
    tsv: bool,

    /// Prefix CSV output with a UTF-8 byte order mark
    #[arg(long)]
    bom: bool,
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        Ok(input)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Runs the export and returns the written path, or `None` when skipped.
fn run(cli: Cli) -> Result<Option<PathBuf>> {
    let mut config = match &cli.config {
        Some(path) => ExportConfig::load(path)?,
        None => ExportConfig::default(),
    };
    if let Some(dir) = cli.out_dir {
        config.output_dir = dir;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.tsv {
        config.csv.delimiter = '\t';
    }
    if cli.bom {
        config.csv.bom = true;
    }

    let input = read_input(&cli.input)?;
    let sink = DirectorySink::new(&config.output_dir);
    let outcome = match (cli.kind, cli.name) {
        (Some(kind), _) => {
            let privileged = is_privileged_role(cli.role.as_deref().unwrap_or_default());
            let dataset = kind.dataset_from_json(&input)?;
            info!(rows = dataset.len(), report = %kind, "loaded report rows");
            export_dataset_report(kind, &dataset, config.format, &config.csv, privileged, &sink)
        },
        (None, Some(name)) => {
            let dataset = Dataset::from_json_str(&input)?;
            info!(rows = dataset.len(), input = %cli.input.display(), "loaded dataset");
            export_with(&dataset, &name, config.format, &config.csv, &sink)
        },
        (None, None) => Err(Error::Other(
            "either --name or --kind must be given".to_string(),
        )),
    }?;

    Ok(match outcome {
        ExportOutcome::Delivered { filename, .. } => Some(sink.target_path(&filename)?),
        ExportOutcome::Skipped => None,
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(Some(path)) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        },
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        },
    }
}
