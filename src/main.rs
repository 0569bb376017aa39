use clap::Parser;
use miette::{IntoDiagnostic, Result};
use patungan::application::service::SplitService;
use patungan::domain::ports::{ReceiptExtractorBox, SplitStoreBox};
use patungan::domain::split::{OrphanPolicy, Rounding, SplitOptions};
use patungan::infrastructure::in_memory::InMemorySplitStore;
use patungan::infrastructure::mock::MockExtractor;
use patungan::interfaces::csv::share_writer::ShareWriter;
use patungan::interfaces::json::{assignment_reader, scan_reader};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Assignment sheet JSON mapping each receipt line to participants
    assignments: PathBuf,

    /// Scan JSON produced by the receipt extractor
    #[arg(long, required_unless_present = "mock_scan", conflicts_with = "mock_scan")]
    scan: Option<PathBuf>,

    /// Use the built-in mock extractor instead of a scan file
    #[arg(long)]
    mock_scan: bool,

    /// Tax percentage applied to the subtotal
    #[arg(long, default_value = "0")]
    tax: Decimal,

    /// Service-charge percentage applied to the subtotal
    #[arg(long, default_value = "0")]
    service: Decimal,

    /// Split unclaimed lines evenly across all participants instead of
    /// absorbing their cost
    #[arg(long)]
    redistribute_orphans: bool,

    /// Correct rounding residue so shares sum exactly to the rounded total
    #[arg(long)]
    exact_total: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let scan = match &cli.scan {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            scan_reader::read_scan(file).into_diagnostic()?
        }
        None => {
            let extractor: ReceiptExtractorBox = Box::new(MockExtractor::new());
            extractor
                .extract(&[], "image/jpeg")
                .await
                .into_diagnostic()?
        }
    };

    let sheet_file = File::open(&cli.assignments).into_diagnostic()?;
    let sheet = assignment_reader::read_assignments(sheet_file).into_diagnostic()?;
    let request =
        assignment_reader::build_request(&scan, sheet, cli.tax, cli.service).into_diagnostic()?;

    let options = SplitOptions {
        orphans: if cli.redistribute_orphans {
            OrphanPolicy::Redistribute
        } else {
            OrphanPolicy::Absorb
        },
        rounding: if cli.exact_total {
            Rounding::Exact
        } else {
            Rounding::Independent
        },
    };

    let store: SplitStoreBox = Box::new(InMemorySplitStore::new());
    let service = SplitService::new(store);
    let outcome = service.process(&request, options).await.into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = ShareWriter::new(stdout.lock());
    writer.write_outcome(&outcome).into_diagnostic()?;

    Ok(())
}
