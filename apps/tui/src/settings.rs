use crate::domain::Theme;
use async_trait::async_trait;
use color_eyre::Result;
use sqlx::{
    migrate::MigrateDatabase, query, query_scalar, sqlite::SqlitePoolOptions, Sqlite, SqlitePool,
};
use std::collections::HashMap;
use std::sync::Mutex;

pub const THEME_KEY: &str = "theme";

/// String key/value preferences that survive restarts.
#[async_trait]
pub trait SettingsStore: Send + Sync + std::fmt::Debug {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Reads the stored theme, falling back to [`Theme::default`] when the key
/// is missing or holds an unknown value.
pub async fn load_theme(store: &dyn SettingsStore) -> Result<Theme> {
    let Some(stored) = store.get(THEME_KEY).await? else {
        return Ok(Theme::default());
    };
    Ok(Theme::parse(&stored).unwrap_or_else(|| {
        tracing::warn!(stored = %stored, "ignoring unknown theme preference");
        Theme::default()
    }))
}

pub async fn save_theme(store: &dyn SettingsStore, theme: Theme) -> Result<()> {
    store.set(THEME_KEY, theme.as_str()).await
}

#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| color_eyre::eyre::eyre!("settings lock poisoned"))?;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| color_eyre::eyre::eyre!("settings lock poisoned"))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SqliteSettingsStore {
    pool: SqlitePool,
}

impl SqliteSettingsStore {
    /// Opens (creating if needed) the database at `database_url` and makes
    /// sure the settings table exists.
    pub async fn connect(database_url: &str) -> Result<Self> {
        if !Sqlite::database_exists(database_url).await? {
            tracing::info!(database_url, "creating settings database");
            Sqlite::create_database(database_url).await.map_err(|e| {
                color_eyre::eyre::eyre!("Failed to create SQLite database: {e}")
            })?;
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(2)
            .after_connect(|conn, _| {
                Box::pin(async move {
                    use sqlx::Executor as _;
                    conn.execute("PRAGMA journal_mode = WAL;").await?;
                    conn.execute("PRAGMA synchronous = NORMAL;").await?;
                    Ok(())
                })
            })
            .connect(database_url)
            .await
            .map_err(|e| color_eyre::eyre::eyre!("Failed to connect to SQLite database: {e}"))?;

        Self::with_pool(pool).await
    }

    pub async fn with_pool(pool: SqlitePool) -> Result<Self> {
        setup_settings_table(&pool).await?;
        Ok(Self { pool })
    }
}

async fn setup_settings_table(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    query(
        "CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}

#[async_trait]
impl SettingsStore for SqliteSettingsStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let value: Option<String> = query_scalar("SELECT value FROM settings WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let updated = chrono::Utc::now()
            .format("%Y-%m-%dT%H:%M:%S%.3fZ")
            .to_string();

        query(
            "INSERT INTO settings (key, value, updated) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated = excluded.updated",
        )
        .bind(key)
        .bind(value)
        .bind(updated)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if let Ok(mut bytes) = self.0.lock() {
                bytes.extend_from_slice(buf);
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn contents(&self) -> String {
            self.0
                .lock()
                .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                .unwrap_or_default()
        }
    }

    async fn memory_sqlite() -> Result<SqliteSettingsStore> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        SqliteSettingsStore::with_pool(pool).await
    }

    #[tokio::test]
    async fn sqlite_store_upserts_values() -> Result<()> {
        let store = memory_sqlite().await?;

        assert_eq!(store.get("theme").await?, None);
        store.set("theme", "light").await?;
        store.set("theme", "dark").await?;
        assert_eq!(store.get("theme").await?, Some("dark".to_string()));

        let rows: i64 = query_scalar("SELECT COUNT(*) FROM settings")
            .fetch_one(&store.pool)
            .await?;
        assert_eq!(rows, 1);
        Ok(())
    }

    #[tokio::test]
    async fn theme_defaults_to_dark_when_absent_or_unknown() -> Result<()> {
        let store = MemorySettingsStore::new();
        assert_eq!(load_theme(&store).await?, Theme::Dark);

        store.set(THEME_KEY, "neon").await?;
        assert_eq!(load_theme(&store).await?, Theme::Dark);
        Ok(())
    }

    #[tokio::test]
    async fn saved_theme_is_read_back() -> Result<()> {
        let store = memory_sqlite().await?;
        save_theme(&store, Theme::Light).await?;

        assert_eq!(load_theme(&store).await?, Theme::Light);
        assert_eq!(store.get(THEME_KEY).await?, Some("light".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn stored_theme_is_read_loosely_and_only_garbage_warns() -> Result<()> {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let store = MemorySettingsStore::new();
        store.set(THEME_KEY, "Light").await?;
        assert_eq!(load_theme(&store).await?, Theme::Light);
        store.set(THEME_KEY, " dark ").await?;
        assert_eq!(load_theme(&store).await?, Theme::Dark);
        assert!(!logs.contents().contains("ignoring unknown theme preference"));

        store.set(THEME_KEY, "neon").await?;
        assert_eq!(load_theme(&store).await?, Theme::Dark);
        assert!(logs.contents().contains("ignoring unknown theme preference"));
        Ok(())
    }
}
