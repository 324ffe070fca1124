mod capture;
mod cli;
mod core;
mod error;
mod onion;
mod packet;

use anyhow::Result;
use log::debug;

use crate::cli::CliArgs;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CliArgs::parse_args();

    let summary = crate::core::runner::run(&args)?;
    debug!("Done: {} matches", summary.matches);

    Ok(())
}
