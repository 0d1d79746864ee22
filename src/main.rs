use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

use git_spend::cli::Cli;
use git_spend::report;
use git_spend::repository::GitLog;
use git_spend::util::PatternDateRenderer;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.usernames.is_empty() {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    // Resolve the local offset while the process is still single-threaded
    let dates = PatternDateRenderer::local(&cli.date_format)?;

    init_logging(cli.verbose);

    let source = GitLog::open(&cli.directory)
        .context("The directory you supplied might not contain a Git repository")?;
    tracing::debug!(path = %source.path().display(), users = cli.usernames.len(), "estimating");

    let params = cli.parameters();
    let mut stdout = io::stdout().lock();
    report::run(
        &source,
        &cli.usernames,
        &params,
        &dates,
        cli.output_format(),
        &mut stdout,
    )?;

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("warn,git_spend=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
