//! Factory for [`TripPlanner`] instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::TripPlanner;
use crate::{
    error::{PlannerError, Result},
    store::Database,
};

/// Configures where trip data lives and produces a ready [`TripPlanner`].
///
/// Without an explicit path the planner stores its database under the XDG
/// data directory: `$XDG_DATA_HOME/waypoint/waypoint.db` or
/// `~/.local/share/waypoint/waypoint.db`.
#[derive(Debug, Clone, Default)]
pub struct TripPlannerBuilder {
    database_path: Option<PathBuf>,
}

impl TripPlannerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the database file location. `None` keeps the XDG default.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured planner instance.
    ///
    /// Creates missing parent directories and opens the database once so
    /// schema problems surface here rather than on the first command.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if the path points at a directory,
    /// `PlannerError::FileSystem` if the parent directory cannot be created,
    /// and `PlannerError::Database` if database initialization fails.
    pub async fn build(self) -> Result<TripPlanner> {
        let db_path = self.resolve_database_path()?;

        if db_path.is_dir() {
            return Err(PlannerError::invalid_input(
                "database_file",
                format!(
                    "{} is a directory; expected a database file path",
                    db_path.display()
                ),
            ));
        }

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PlannerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let probe_path = db_path.clone();
        task::spawn_blocking(move || Database::new(&probe_path).map(drop))
            .await
            .map_err(|e| PlannerError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        Ok(TripPlanner::new(db_path))
    }

    fn resolve_database_path(&self) -> Result<PathBuf> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => xdg::BaseDirectories::with_prefix("waypoint")
                .place_data_file("waypoint.db")
                .map_err(|e| PlannerError::XdgDirectory(e.to_string())),
        }
    }
}
