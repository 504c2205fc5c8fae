// Shoebox - terminal dashboard for running activities and shoe wear
//
// Fetches activities and gear mileage from the stats backend and shows them
// as gear, runs and yearly views. Without a TTY (`--no-tui`) it prints one
// report to stdout and exits non-zero if the load failed.

use anyhow::Result;
use shoebox::config::Config;
use shoebox::controller::default_start_date;
use shoebox::dashboard::{Dashboard, StatusKind};
use shoebox::logging::{self, LogBuffer};
use shoebox::stats::StatsClient;
use shoebox::tui::theme::ThemeKind;
use shoebox::{cli, demo, report, tui};
use std::process::ExitCode;

/// Load once and print the report
async fn run_headless(mut dashboard: Dashboard, client: &StatsClient) -> ExitCode {
    let ticket = dashboard.load();
    let result = client.fetch(ticket.after_date).await;
    dashboard.resolve(ticket, result);

    let snapshot = dashboard.snapshot();
    let text = report::render(&snapshot);

    if snapshot.status == StatusKind::Failed {
        eprint!("{}", text);
        ExitCode::FAILURE
    } else {
        print!("{}", text);
        ExitCode::SUCCESS
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Handle CLI commands first (config --show, --reset, ...)
    let Some(args) = cli::handle_cli() else {
        return Ok(ExitCode::SUCCESS);
    };

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();
    args.apply(&mut config);

    // In TUI mode logs go to the in-memory buffer (prevents garbling the display)
    let log_buffer = LogBuffer::new();
    let _file_guard = logging::init(&config.logging, config.enable_tui, &log_buffer);

    tracing::debug!("Effective config: {:?}", config);

    // Demo mode: point the client at a local generated backend
    let demo_backend = if config.demo_mode {
        let backend = demo::spawn_demo_backend().await?;
        config.api_url = backend.url();
        tracing::info!("Running in DEMO MODE against {}", config.api_url);
        Some(backend)
    } else {
        None
    };

    let client = StatsClient::new(&config.api_url, config.request_timeout())?;

    let mut dashboard = Dashboard::new(
        args.after.unwrap_or_else(default_start_date),
        config.yearly_order,
    );
    dashboard.set_all_time(args.all_time);

    let exit = if config.enable_tui {
        tracing::info!("Starting TUI");
        // Load right away when the user already chose a range on the command line
        let initial_load = args.after.is_some() || args.all_time || config.demo_mode;
        tui::run_tui(
            dashboard,
            client,
            ThemeKind::from_name(&config.theme),
            log_buffer,
            initial_load,
        )
        .await?;
        ExitCode::SUCCESS
    } else {
        tracing::info!("TUI disabled, running in headless mode");
        run_headless(dashboard, &client).await
    };

    if let Some(backend) = demo_backend {
        backend.shutdown().await;
    }

    tracing::info!("Shutdown complete");
    Ok(exit)
}
