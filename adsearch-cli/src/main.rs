mod args;

use std::fs::File;
use std::io::{self, BufWriter};
use std::process::ExitCode;

use adsearch_lib::AdsClient;
use adsearch_lib::api::query::KeywordQuery;
use adsearch_lib::config::ClientConfig;
use adsearch_lib::error::Error;
use adsearch_lib::format::{failure_summary, write_rows};
use adsearch_lib::model::CustomerId;
use clap::Parser;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};

use crate::args::Args;

fn init_logging(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let level = args.log_level();
    match &args.log_file {
        Some(path) => {
            let log_file = File::create(path)?;
            WriteLogger::init(level, Config::default(), log_file)?;
        }
        None => TermLogger::init(
            level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )?,
    }
    Ok(())
}

async fn run(args: &Args) -> Result<usize, Error> {
    let customer_id: CustomerId = args.customer_id.parse()?;
    let query = KeywordQuery::new(customer_id.get())
        .ad_group(args.ad_group_id)
        .page_size(args.page_size)
        .build()?;

    let config = match &args.env_file {
        Some(path) => ClientConfig::from_env_file(path)?,
        None => ClientConfig::from_env()?,
    };
    let client = AdsClient::from_config(&config)?;

    let mut rows = client.search(query).on_mismatch(args.mismatch_policy());
    let mut out = BufWriter::new(io::stdout().lock());
    let written = write_rows(&mut rows, &mut out).await?;

    if rows.skipped() > 0 {
        log::warn!("Skipped {} rows that were not keyword criteria", rows.skipped());
    }
    log::info!(
        "Listed {} keywords from {} pages",
        written,
        rows.pages_fetched()
    );
    Ok(written)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(&args) {
        eprintln!("Failed to initialize logger: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", failure_summary(&e));
            ExitCode::FAILURE
        }
    }
}
