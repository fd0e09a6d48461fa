use crate::error::{Result, SnippetError};
use crate::models::Document;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the data file inside the storage directory
pub const DATA_FILE_NAME: &str = "snippets.json";

/// Where the snippet document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub dir: PathBuf,
}

impl StorageConfig {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<data_dir>/snipvault`, falling back to the working directory
    pub fn default_location() -> Self {
        let dir = dirs::data_dir()
            .map(|d| d.join("snipvault"))
            .unwrap_or_else(|| PathBuf::from(".snipvault"));
        Self { dir }
    }
}

/// Storage Manager for disk operations
#[derive(Debug, Clone)]
pub struct StorageManager {
    data_dir: PathBuf,
    database_file: PathBuf,
}

impl StorageManager {
    pub fn new(config: &StorageConfig) -> Result<Self> {
        let data_dir = absolute(&config.dir)?;
        fs::create_dir_all(&data_dir).map_err(|e| SnippetError::io(&data_dir, e))?;

        Ok(Self {
            database_file: data_dir.join(DATA_FILE_NAME),
            data_dir,
        })
    }

    /// `Ok(None)` when no data file exists yet
    pub fn load_database(&self) -> Result<Option<Document>> {
        if !self.database_file.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.database_file)
            .map_err(|e| SnippetError::io(&self.database_file, e))?;
        let document: Document = serde_json::from_str(&content)?;
        debug!(
            path = %self.database_file.display(),
            groups = document.groups.len(),
            snippets = document.snippets.len(),
            "Loaded snippet document"
        );
        Ok(Some(document))
    }

    pub fn save_database(&self, db: &Document) -> Result<()> {
        let content = serde_json::to_string_pretty(db)?;

        fs::write(&self.database_file, content).map_err(|e| SnippetError::io(&self.database_file, e))
    }

    /// Backup the database to a timestamped file
    pub fn backup_database(&self) -> Result<PathBuf> {
        let backup_dir = self.data_dir.join("backups");
        fs::create_dir_all(&backup_dir).map_err(|e| SnippetError::io(&backup_dir, e))?;

        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let mut backup_file = backup_dir.join(format!("backup_{}.json", timestamp));
        let mut counter = 1;
        while backup_file.exists() {
            backup_file = backup_dir.join(format!("backup_{}_{}.json", timestamp, counter));
            counter += 1;
        }

        fs::copy(&self.database_file, &backup_file)
            .map_err(|e| SnippetError::io(&self.database_file, e))?;

        Ok(backup_file)
    }

    /// Get the data directory path
    pub fn data_directory(&self) -> &Path {
        &self.data_dir
    }

    pub fn database_file(&self) -> &Path {
        &self.database_file
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|e| SnippetError::io(path, e))
}
