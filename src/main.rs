use anyhow::Result;
use clap::Parser;
use log::{info, LevelFilter};
use namescan::aggregate::present;
use namescan::config::load_config;
use namescan::output::OutputManager;
use namescan::platforms::resolve_platforms;
use namescan::progress::BarProgress;
use namescan::session::Session;
use namescan::utils::collect_usernames;
use namescan::{Args, BatchRunner, RunOptions};
use std::io;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let args = Args::parse();

    let default_level = if args.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    // Everything the user supplied is validated before the first request
    let config = load_config(args.config_path.as_deref())?;
    let usernames = collect_usernames(&args.usernames, args.input_file.as_deref())?;
    let platforms = resolve_platforms(&args.restrict, &config)?;
    let session = Session::new(&config)?;

    info!(
        "Checking {} usernames on {} platforms",
        usernames.len(),
        platforms.len()
    );

    let runner = BatchRunner::new(
        session,
        platforms,
        RunOptions {
            cache_tokens: args.cache_tokens,
            available_only: args.available_only,
        },
    );
    let progress = BarProgress::new(atty::is(atty::Stream::Stderr));
    let report = runner.run(&usernames, &progress).await?;

    let output = OutputManager::new();
    let reports = present(&usernames, report.results);
    output.write_reports(&mut io::stdout().lock(), &reports)?;
    output.write_failures(&mut io::stderr().lock(), &report.failures)?;
    output.write_summary(&mut io::stdout().lock(), report.total_queries, report.duration)?;

    Ok(())
}
