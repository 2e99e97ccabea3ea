//! Audio file storage
//!
//! Uploaded audio lives on the filesystem under `<root>/files/`. Database
//! rows address files through the relative path returned by `save`; nothing
//! else in the service touches the filesystem for audio.

use std::path::PathBuf;

use tracing::{info, warn};
use tunelib_common::{Error, Result};

/// Filesystem store for uploaded audio
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given root folder
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Save bytes under `files/<name>`, returning the relative path stored
    /// in the audio row
    pub fn save(&self, file_name: &str, bytes: &[u8]) -> Result<String> {
        let name = sanitize_file_name(file_name)?;

        let dir = self.root.join("files");
        std::fs::create_dir_all(&dir)?;

        let relative = format!("files/{}", name);
        std::fs::write(self.root.join(&relative), bytes)?;

        info!("Stored {} ({} bytes)", relative, bytes.len());
        Ok(relative)
    }

    /// Remove a stored file by its relative path
    ///
    /// A missing file is logged and tolerated; the catalog row is the
    /// source of truth, not the disk.
    pub fn delete(&self, relative: &str) {
        let path = self.root.join(relative);
        match std::fs::remove_file(&path) {
            Ok(()) => info!("Deleted {}", path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("{} was not found", path.display())
            }
            Err(e) => warn!("Failed to delete {}: {}", path.display(), e),
        }
    }
}

// Uploaded names may carry client path fragments; only the final component
// is kept, and it must be a real name.
fn sanitize_file_name(file_name: &str) -> Result<&str> {
    let name = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    if name.is_empty() || name == "." || name == ".." {
        return Err(Error::InvalidInput(format!(
            "invalid file name: {:?}",
            file_name
        )));
    }

    Ok(name)
}
