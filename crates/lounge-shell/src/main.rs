//! The `lounge` binary: a terminal rendition of a living-room streaming
//! deck. Wires the static catalog, the session store, and the simulated
//! camera into an interactive remote-control REPL.

mod commands;
mod render;
mod repl;
mod splash;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use lounge_application::SessionStore;
use lounge_core::catalog::CatalogSource;
use lounge_core::media::MediaCapture;
use lounge_core::user::UserService;
use lounge_infrastructure::{
    ConfigBasedUserService, ConfigService, RandomAvatarPicker, SimulatedCapture, StaticCatalog,
    SystemClock, UuidIdSource,
};

use repl::ShellSession;

#[derive(Parser, Debug)]
#[command(name = "lounge", about = "Living-room streaming deck, in a terminal")]
struct Cli {
    /// Config file path (default: ~/.config/lounge/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the splash screen
    #[arg(long)]
    no_splash: bool,

    /// Start with camera access denied
    #[arg(long)]
    no_camera: bool,

    /// Seed for the home-shelf sampler (default: OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Tracing filter, e.g. "debug" or "lounge_application=trace"
    #[arg(long)]
    log_filter: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_service = match cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(),
    };
    let config = config_service.get_config()?;

    // Filter precedence: --log-filter, then LOUNGE_LOG, then config.
    let filter = cli
        .log_filter
        .or_else(|| std::env::var("LOUNGE_LOG").ok())
        .unwrap_or_else(|| config.shell.log_filter.clone());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let catalog: Arc<dyn CatalogSource> = Arc::new(match cli.seed {
        Some(seed) => StaticCatalog::seeded(seed),
        None => StaticCatalog::new(),
    });

    let profile = ConfigBasedUserService::new(config_service).get_user_profile();
    tracing::info!(nickname = %profile.nickname, "session starting");

    let store = SessionStore::new(
        Arc::new(UuidIdSource),
        Arc::new(SystemClock),
        Arc::new(RandomAvatarPicker),
        profile,
    );

    let capture: Arc<dyn MediaCapture> = Arc::new(if cli.no_camera {
        SimulatedCapture::denied()
    } else {
        SimulatedCapture::granted()
    });

    if !(cli.no_splash || config.shell.skip_splash) {
        let cancel = CancellationToken::new();
        let interrupt = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                interrupt.cancel();
            }
        });
        splash::show(Duration::from_millis(config.shell.splash_ms), &cancel).await;
    }

    ShellSession::new(store, catalog, capture).run().await
}
