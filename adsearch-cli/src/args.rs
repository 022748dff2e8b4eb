use std::path::PathBuf;

use adsearch_lib::api::query::{DEFAULT_PAGE_SIZE, MismatchPolicy};
use clap::{ArgAction, Parser};
use simplelog::LevelFilter;

/// List the keyword criteria of an advertising account.
#[derive(Debug, Parser)]
#[command(name = "adsearch", version)]
pub struct Args {
    /// Account to search, as plain digits or in 123-456-7890 form.
    #[arg(long)]
    pub customer_id: String,

    /// Only list keywords of this ad group.
    #[arg(long)]
    pub ad_group_id: Option<i64>,

    /// Rows requested per page.
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,

    /// Read credentials from this file instead of only the environment.
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Skip returned rows that are not keyword criteria.
    #[arg(long)]
    pub skip_mismatched: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn mismatch_policy(&self) -> MismatchPolicy {
        if self.skip_mismatched {
            MismatchPolicy::Skip
        } else {
            MismatchPolicy::Fail
        }
    }
}
