use clap::Parser;
use finance::loader::{csv_separator, Loader};
use finance::logging::diagnostic_subscriber;
use finance::{Pipeline, PipelineConfig, PipelineResult};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Start/end closing-price percent change per symbol.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Price table (.csv or .parquet) with Symbol, Close and Dividends columns.
    path: String,

    /// CSV field separator.
    #[arg(long, default_value_t = ',')]
    separator: char,

    /// The CSV file has no header row.
    #[arg(long)]
    no_header: bool,

    /// JSON pipeline config.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> PipelineResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    diagnostic_subscriber(filter, io::stderr).init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::default(),
    };

    let loader = Loader::init(&args.path);
    let data = loader
        .load(csv_separator(args.separator)?, !args.no_header)?
        .collect()?;
    let result = Pipeline::new(config).run(&data)?;
    println!("{:?}", result);
    Ok(())
}
