//! CLI entry point for huepick-settings.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, bail};

use huepick_settings::cli::{Cli, Command};
use huepick_settings::logging::init_logging;
use huepick_settings::store::{JsonSettingsStore, SettingsStore};
use huepick_settings::sync::SettingsSynchronizer;
use huepick_settings::watch::{PollWatcher, SettingsWatcher};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let root = cli
        .settings_root
        .clone()
        .unwrap_or_else(JsonSettingsStore::default_root);

    let log_file = cli
        .log_file
        .clone()
        .unwrap_or_else(|| root.join("huepick-settings.log"));
    let mirror_stderr = matches!(cli.command, Command::Watch { .. });
    let _guard = init_logging(Some(&log_file), cli.log_level.as_deref(), mirror_stderr);

    let store = JsonSettingsStore::new(root);

    match cli.command {
        Command::Show => show(&store, &cli.module),
        Command::Init { force } => init(&store, &cli.module, force),
        Command::Path => {
            println!("{}", store.settings_path(&cli.module).display());
            Ok(())
        }
        Command::Watch { interval_ms } => watch(store, &cli.module, interval_ms),
    }
}

fn show(store: &JsonSettingsStore, module: &str) -> Result<()> {
    if !store.exists(module) {
        store
            .create_default(module)
            .wrap_err("Failed to create default settings")?;
    }
    let settings = store.load(module).wrap_err("Failed to load settings")?;
    let json =
        serde_json::to_string_pretty(&settings).wrap_err("Failed to serialize settings")?;
    println!("{json}");
    Ok(())
}

fn init(store: &JsonSettingsStore, module: &str, force: bool) -> Result<()> {
    let path = store.settings_path(module);
    if store.exists(module) && !force {
        bail!(
            "Settings file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }
    store
        .create_default(module)
        .wrap_err("Failed to write default settings")?;
    eprintln!("Wrote default settings to {}", path.display());
    Ok(())
}

fn watch(store: JsonSettingsStore, module: &str, interval_ms: u64) -> Result<()> {
    let path = store.settings_path(module);
    let sync = Arc::new(SettingsSynchronizer::new(Arc::new(store), module));
    eprintln!("Watching {} (Ctrl-C to stop)", path.display());

    let mut watcher = PollWatcher::new(Duration::from_millis(interval_ms));
    let target = Arc::clone(&sync);
    watcher.watch(
        path,
        Box::new(move || {
            target.reload();
            match serde_json::to_string(&target.current()) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("Failed to render settings: {e}"),
            }
        }),
    );

    loop {
        std::thread::park();
    }
}
