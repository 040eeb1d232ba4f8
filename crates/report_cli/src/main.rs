use std::{error::Error, fs, io::Read};

use chrono::NaiveDate;
use chrono_tz::Tz;
use clap::Parser;

use reporting::{
    ChartGranularity, Ledger, Money, ReportQuery, TransactionRecord, calendar, parse_kind,
};

#[derive(Parser, Debug)]
#[command(name = "cashlog_report")]
#[command(about = "Render cashflow report views from an exported transactions snapshot")]
struct Cli {
    /// JSON snapshot (array of transactions); `-` reads stdin.
    #[arg(long, short = 'i', default_value = "-")]
    input: String,

    /// Case-insensitive description search.
    #[arg(long)]
    search: Option<String>,

    /// Inclusive lower date bound (YYYY-MM-DD).
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Inclusive upper date bound (YYYY-MM-DD).
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Kind filter: `income` or `expense`.
    #[arg(long)]
    kind: Option<String>,

    #[arg(long, default_value_t = 1)]
    page: u32,

    #[arg(long, default_value_t = 25)]
    page_size: u32,

    /// Balance chart granularity: `daily` or `monthly`.
    #[arg(long, default_value = "daily")]
    granularity: String,

    /// Reference "today" for insights and the heatmap window; defaults to
    /// the current date in `--timezone`.
    #[arg(long)]
    reference_date: Option<NaiveDate>,

    /// Account timezone used to resolve the reference date.
    #[arg(long, env = "CASHLOG_TZ", default_value = "Asia/Jakarta")]
    timezone: Tz,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let raw = read_input(&cli.input)?;
    let records: Vec<TransactionRecord> = serde_json::from_str(&raw)?;
    tracing::info!(records = records.len(), "loaded snapshot");

    let reference_date = cli
        .reference_date
        .unwrap_or_else(|| calendar::today_in(cli.timezone));

    let mut query = ReportQuery::new(reference_date);
    query.search = cli.search;
    query.date_from = cli.from;
    query.date_to = cli.to;
    query.kind = cli.kind.as_deref().map(parse_kind).transpose()?;
    query.page = Some(cli.page);
    query.page_size = Some(cli.page_size);
    query.granularity = parse_granularity(&cli.granularity)?;

    let dashboard = Ledger::new(records).dashboard(&query)?;
    tracing::info!(
        income = %Money::new(dashboard.totals.total_income_minor),
        expenses = %Money::new(dashboard.totals.total_expenses_minor),
        balance = %Money::new(dashboard.totals.balance_minor),
        "report ready"
    );

    let out = if cli.pretty {
        serde_json::to_string_pretty(&dashboard)?
    } else {
        serde_json::to_string(&dashboard)?
    };
    println!("{out}");

    Ok(())
}

fn read_input(path: &str) -> Result<String, Box<dyn Error>> {
    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn parse_granularity(raw: &str) -> Result<ChartGranularity, Box<dyn Error>> {
    match raw {
        "daily" => Ok(ChartGranularity::Daily),
        "monthly" => Ok(ChartGranularity::Monthly),
        other => Err(format!("invalid granularity: {other} (expected daily or monthly)").into()),
    }
}
