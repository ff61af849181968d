use crate::radar::Rgb;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not resolve working directory: {0}")]
    WorkingDir(#[from] std::io::Error),

    #[error("database path is not valid UTF-8: {0}")]
    InvalidDatabasePath(PathBuf),

    #[error("PRIMARY_RGB must look like \"56,189,248\", got {0:?}")]
    InvalidPrimaryColor(String),
}

/// Settings resolved from the environment (and `.env`, if present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub catalog_path: Option<PathBuf>,
    pub primary_override: Option<Rgb>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let base_dir = env::current_dir()?;
        let db_name = env::var("DATABASE_NAME").unwrap_or_else(|_| "skill_radar.db".to_string());
        let database_url = database_url(&base_dir.join(db_name))?;

        let catalog_path = env::var("SKILLS_CATALOG")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let primary_override = match env::var("PRIMARY_RGB") {
            Ok(value) if !value.trim().is_empty() => Some(parse_primary(&value)?),
            _ => None,
        };

        Ok(Self {
            database_url,
            catalog_path,
            primary_override,
        })
    }
}

pub fn parse_primary(value: &str) -> Result<Rgb, ConfigError> {
    Rgb::parse(value).ok_or_else(|| ConfigError::InvalidPrimaryColor(value.to_string()))
}

/// Builds an SQLx SQLite URL: `sqlite:///abs/path` for absolute paths,
/// `sqlite://rel/path` otherwise.
fn database_url(path: &std::path::Path) -> Result<String, ConfigError> {
    let path_str = path
        .to_str()
        .ok_or_else(|| ConfigError::InvalidDatabasePath(path.to_path_buf()))?;
    let clean_path = path_str.trim_start_matches('/');

    let url = if path.is_absolute() {
        format!("sqlite:///{clean_path}")
    } else {
        format!("sqlite://{clean_path}")
    };
    tracing::debug!(%url, "resolved settings database");
    Ok(url)
}
