mod backend_bridge;
mod controller;
#[cfg(test)]
mod test_support;
mod ui;

use std::sync::Arc;

use anyhow::Context as _;
use clap::Parser;
use client_core::{HttpUserDirectory, DEFAULT_API_BASE_URL};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{DesktopGuiApp, StartupConfig, APP_TITLE};

const COMMAND_QUEUE_CAPACITY: usize = 64;
const EVENT_QUEUE_CAPACITY: usize = 256;

#[derive(Parser, Debug)]
#[command(name = "user-directory", about = "Browse and prune the public user directory")]
struct Args {
    /// Base URL of the directory service; users are read from `{base}/users`.
    #[arg(long, default_value = DEFAULT_API_BASE_URL, value_parser = parse_base_url)]
    api_base_url: Url,
    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_filter: String,
}

fn parse_base_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw.trim()).map_err(|err| format!("invalid URL '{raw}': {err}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("unsupported scheme '{other}'; expected http or https")),
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_filter);

    let startup = StartupConfig {
        api_base_url: args.api_base_url,
    };
    let directory = HttpUserDirectory::new(&startup.api_base_url).with_context(|| {
        format!(
            "failed to resolve users endpoint under {}",
            startup.api_base_url
        )
    })?;
    tracing::info!(url = %directory.users_url(), "starting user directory");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(COMMAND_QUEUE_CAPACITY);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(EVENT_QUEUE_CAPACITY);
    backend_bridge::runtime::launch(Arc::new(directory), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1180.0, 760.0])
            .with_min_inner_size([860.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(DesktopGuiApp::bootstrap(cmd_tx, ui_rx, &startup)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop gui exited with error: {err}"))
}
