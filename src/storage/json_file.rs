use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use super::traits::BlobStore;

/// File-backed blob store: one `<key>.json` file per key under a base directory
///
/// This is the device-local persistence area. Writes go through a temporary
/// file followed by a rename so a crash mid-write never leaves a truncated
/// collection behind.
#[derive(Clone)]
pub struct JsonFileStore {
    base_directory: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `base_directory`, creating it if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).with_context(|| {
                format!("Failed to create data directory {}", base_path.display())
            })?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a store in the default per-user data directory
    pub fn new_default() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow!("Could not determine user data directory"))?
            .join("expense-tracker");

        info!("Using default data directory: {}", data_dir.display());
        Self::new(data_dir)
    }

    /// Get the base directory path
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.base_directory.join(format!("{}.json", key))
    }
}

impl BlobStore for JsonFileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let file_path = self.file_path(key);

        if !file_path.exists() {
            return Ok(None);
        }

        let blob = fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read {}", file_path.display()))?;
        Ok(Some(blob))
    }

    fn write(&self, key: &str, blob: &str) -> Result<()> {
        let file_path = self.file_path(key);
        let temp_path = file_path.with_extension("json.tmp");

        fs::write(&temp_path, blob)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;

        // Atomic move from temp to final file
        if let Err(e) = fs::rename(&temp_path, &file_path) {
            warn!(
                "Failed to move {} into place: {}",
                temp_path.display(),
                e
            );
            let _ = fs::remove_file(&temp_path);
            return Err(e).with_context(|| format!("Failed to replace {}", file_path.display()));
        }

        Ok(())
    }
}
