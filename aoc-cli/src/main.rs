//! AOC CLI - run Advent of Code solvers and submit their answers

mod cache;
mod cli;
mod config;
mod error;
mod executor;
mod output;
mod remote;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_http_client::AocClient;
use aoc_solver::{RegistryBuilder, SolverRegistry};
use aoc_submission::with_store;
use cache::InputCache;
use clap::Parser;
use cli::Args;
use config::{Config, Session};
use error::CliError;
use executor::{Executor, SolverResult};
use output::OutputFormatter;
use remote::Remote;
use tracing::info;

fn main() {
    let config = Config::from_args(Args::parse());

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), CliError> {
    let registry = build_registry(&config.tags)?;

    let work_items = executor::collect_work_items(&registry, config);
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    let cache = InputCache::new(config.cache_dir.clone());
    let client = AocClient::new()?;
    let session = Session::new();
    let remote = Remote::new(&cache, &client, &session, config.auto_retry);
    let executor = Executor::new(&registry, OutputFormatter::new(config.quiet));

    info!(
        "Running {} puzzle part(s), history in {}",
        work_items.len(),
        config.store_path.display()
    );

    let failed = with_store(&config.store_path, |store| {
        let results = executor.execute(&work_items, store, &remote, &remote, chrono::Utc::now());
        Ok::<_, CliError>(
            results
                .iter()
                .filter(|r| matches!(r, SolverResult::Failed(_)))
                .count(),
        )
    })?;

    if failed > 0 {
        return Err(CliError::AttemptsFailed(failed));
    }
    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
