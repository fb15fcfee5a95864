use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use moviedeck::cli::Cli;
use moviedeck::data::build_repository;
use moviedeck::logging::init_tracing;
use moviedeck::shutdown::{listen_for_signals, ShutdownHandle};
use moviedeck::ui::theme::Theme;
use moviedeck::ui::{run, RunOptions};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config_path();
    let config = cli
        .resolve_config()
        .with_context(|| format!("loading {}", config_path.display()))?;

    let log_path = init_tracing(&config.logging).context("initializing logging")?;
    tracing::info!(
        config = %config_path.display(),
        log = %log_path.display(),
        version = env!("CARGO_PKG_VERSION"),
        "Starting moviedeck"
    );

    let theme = Theme::from_config(&config.theme).context("building theme")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;
    let _guard = runtime.enter();

    let repository = build_repository(&config.repository).context("building repository")?;

    let shutdown = ShutdownHandle::new();
    let listener = shutdown.clone();
    runtime.spawn(async move {
        if let Err(err) = listen_for_signals(listener).await {
            tracing::warn!(error = %err, "Signal listener failed");
        }
    });

    run(RunOptions {
        repository,
        theme,
        category: config.home.category.clone(),
        tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
        initial_movie: cli.movie,
        shutdown,
    })
    .context("running terminal UI")?;

    tracing::info!("moviedeck exited");
    Ok(())
}
