mod app_state;
mod cli;

use std::path::PathBuf;

use tiles_common::TilesError;
use tiles_config::{SettingsStore, TilesConfig};
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = tiles_platform::crash_report::write_crash_report(info);

        eprintln!("\n--- Web Tiles crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("-------------------------\n");

        default_hook(info);
    }));
}

/// `--log-level` wins, then `RUST_LOG`, then the config file.
fn log_filter(cli_level: Option<&str>, config_level: &str) -> EnvFilter {
    match cli_level {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_level)),
    }
}

fn load_config(args: &cli::Args) -> (TilesConfig, Option<TilesError>) {
    let loaded = match &args.config {
        Some(path) => tiles_config::load_config_from(path),
        None => tiles_config::load_config(),
    };
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (TilesConfig::default(), Some(e.into())),
    }
}

fn settings_path() -> PathBuf {
    tiles_platform::settings_file().unwrap_or_else(|e| {
        let fallback = std::env::temp_dir().join("web-tiles-settings.json");
        tracing::warn!(error = %e, path = %fallback.display(), "No data directory, using fallback settings file");
        fallback
    })
}

fn open_settings(path: PathBuf, reset: bool) -> SettingsStore {
    let mut settings = SettingsStore::open(path);
    if reset {
        tracing::info!(path = %settings.path().display(), "Resetting stored settings");
        settings.clear();
        if let Err(e) = settings.sync() {
            tracing::warn!("Failed to write reset settings: {e}");
        }
    }
    settings
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Config is read before logging starts so its level can apply.
    let (config, config_error) = load_config(&args);

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(
            args.log_level.as_deref(),
            &config.logging.level,
        ))
        .init();

    tracing::info!("Web Tiles v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(path) = &args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    if let Err(e) = tiles_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let settings = open_settings(settings_path(), args.reset_settings);

    let registry = tiles_platform::KeybindRegistry::from_config(&config.keybinds);
    tracing::info!("Keybind registry loaded ({} bindings)", registry.len());

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::WebTilesApp::new(config, registry, settings);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
