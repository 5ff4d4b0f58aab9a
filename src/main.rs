use cart_pricing::application::checkout::CheckoutRequest;
use cart_pricing::domain::ids::OfferId;
use cart_pricing::infrastructure::scenario::Scenario;
use cart_pricing::interfaces::csv::cart_reader::CartReader;
use cart_pricing::interfaces::csv::payable_writer::PayableWriter;
use cart_pricing::interfaces::json::result_writer::write_result;
use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// Full pricing breakdown as JSON
    Json,
    /// Per-seller payable amounts as CSV
    Csv,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Cart CSV file with `listing, quantity` columns
    cart: PathBuf,

    /// Scenario JSON with listings, campaigns, coupons and accepted offers
    #[arg(long)]
    scenario: PathBuf,

    /// Coupon code to apply
    #[arg(long)]
    coupon: Option<String>,

    /// Accepted offer id whose negotiated price overrides its listing
    #[arg(long)]
    offer: Option<u64>,

    /// Category excluded from discounts (repeatable, replaces the configured set)
    #[arg(long = "exempt-category")]
    exempt_categories: Vec<String>,

    /// Apply discounts to every category, clearing the exempt set
    #[arg(long, conflicts_with = "exempt_categories")]
    no_exempt: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let scenario = Scenario::from_reader(File::open(&cli.scenario).into_diagnostic()?)
        .into_diagnostic()?;
    let mut config = scenario
        .pricing_config()
        .with_exempt_categories(cli.exempt_categories);
    if cli.no_exempt {
        config = config.without_exemptions();
    }
    let service = scenario.into_service(config).await;

    let file = File::open(&cli.cart).into_diagnostic()?;
    let mut items = Vec::new();
    for item in CartReader::new(file).into_diagnostic()? {
        match item {
            Ok(item) => items.push(item),
            Err(e) => warn!(error = %e, "skipping cart row"),
        }
    }

    let request = CheckoutRequest {
        items,
        coupon_code: cli.coupon,
        offer_id: cli.offer.map(OfferId),
    };
    let result = service.quote(&request).await.into_diagnostic()?;

    let stdout = io::stdout();
    match cli.format {
        OutputFormat::Json => write_result(stdout.lock(), &result).into_diagnostic()?,
        OutputFormat::Csv => PayableWriter::new(stdout.lock())
            .write_payables(&result.payable_by_seller)
            .into_diagnostic()?,
    }

    Ok(())
}
