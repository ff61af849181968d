use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global tracing subscriber.
///
/// Nothing is installed unless `debug` is set or `RUST_LOG` is present.
/// With `log_file` the output goes there instead of stderr, which keeps the
/// alternate screen clean while the terminal UI runs.
pub fn init(debug: bool, log_file: Option<&Path>) -> color_eyre::Result<()> {
    let env_filter = std::env::var_os("RUST_LOG").is_some();
    if !debug && !env_filter {
        return Ok(());
    }

    let filter = if env_filter {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new("skill_radar=debug,sqlx=warn")
    };

    let registry = tracing_subscriber::registry().with(filter);
    let result = match log_file {
        Some(path) => {
            let file = File::create(path)?;
            registry
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init()
        }
        None => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| color_eyre::eyre::eyre!("Failed to install logger: {e}"))
}
