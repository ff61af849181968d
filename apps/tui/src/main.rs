mod app;
mod cli;
mod event;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use event::HeadlessOptions;
use skill_radar::config::AppConfig;
use skill_radar::radar::RadarPalette;
use skill_radar::settings::{load_theme, MemorySettingsStore, SettingsStore, SqliteSettingsStore};
use skill_radar::{logging, SkillCatalog, Theme};
use std::path::Path;

const LOG_FILE: &str = "skill-radar.log";

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = AppConfig::from_env()?;
    let headless = args.wants_headless() || !is_terminal();

    // Interactive runs log to a file so the alternate screen stays clean
    let log_file = (!headless).then(|| Path::new(LOG_FILE));
    logging::init(debug_enabled(), log_file)?;

    let catalog = match &config.catalog_path {
        Some(path) => SkillCatalog::load(path)
            .wrap_err_with(|| format!("Failed to load catalog {}", path.display()))?,
        None => SkillCatalog::builtin(),
    };
    tracing::debug!(entries = catalog.total_entries(), "catalog loaded");

    let settings = open_settings(&config.database_url).await;
    let theme = match args.theme {
        Some(theme) => theme,
        None => load_theme(settings.as_ref()).await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not read saved theme");
            Theme::default()
        }),
    };

    if headless {
        let palette = RadarPalette::for_theme(theme, config.primary_override);
        let options = HeadlessOptions {
            json: args.json,
            svg: args.svg.clone(),
            category: args.category,
            width: args.width,
            height: args.height,
            theme,
        };
        return event::run_headless(&catalog, &palette, &options);
    }

    let mut app = App::new(catalog, settings, theme, args.category);
    app.primary_override = config.primary_override;

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app).await;
    terminal::cleanup(true, true);

    result
}

/// Opens the SQLite settings store, or keeps settings in memory for this
/// run when the database is unavailable.
async fn open_settings(database_url: &str) -> Box<dyn SettingsStore> {
    match SqliteSettingsStore::connect(database_url).await {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "settings database unavailable; theme changes will not persist");
            Box::new(MemorySettingsStore::new())
        }
    }
}

fn debug_enabled() -> bool {
    std::env::var("DEBUG").is_ok_and(|value| !value.is_empty() && value != "0")
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
