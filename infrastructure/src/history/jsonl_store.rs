//! JSONL file store for analysis history.
//!
//! Each [`HistoryItem`] is serialized as a single JSON line and appended
//! via a buffered writer. The file is the whole store; `list` re-reads it.

use aidpal_application::{HistoryItem, HistoryStore};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL history store that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes per record so that
/// `list` always sees completed appends.
pub struct JsonlHistoryStore {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlHistoryStore {
    /// Open the store at the given path, appending to an existing file.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create history directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open history file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonlHistoryStore {
    fn append(&self, item: &HistoryItem) {
        let Ok(line) = serde_json::to_string(item) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }

    fn list(&self) -> Vec<HistoryItem> {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        // Lines that fail to parse are skipped, not fatal
        content
            .lines()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect()
    }
}

impl Drop for JsonlHistoryStore {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
