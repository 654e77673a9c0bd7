//! Builder for creating and configuring SqliteSource instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::SqliteSource;
use crate::{
    db::Database,
    error::{RecruitError, Result},
};

/// Builder for creating and configuring SqliteSource instances.
#[derive(Debug, Clone)]
pub struct SqliteSourceBuilder {
    database_path: Option<PathBuf>,
}

impl SqliteSourceBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/recruit/recruit.db` or
    /// `~/.local/share/recruit/recruit.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured source, creating the schema if needed.
    ///
    /// # Errors
    ///
    /// Returns `RecruitError::FileSystem` if the database path is invalid
    /// Returns `RecruitError::Database` if database initialization fails
    pub async fn build(self) -> Result<SqliteSource> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| RecruitError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), RecruitError>(())
        })
        .await
        .map_err(RecruitError::join)??;

        Ok(SqliteSource::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("recruit")
            .place_data_file("recruit.db")
            .map_err(|e| RecruitError::XdgDirectory(e.to_string()))
    }
}

impl Default for SqliteSourceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
