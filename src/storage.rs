// src/storage.rs

//! Durable local snapshots.
//!
//! Each namespace owns one JSON file under the storage directory. A save
//! replaces the whole snapshot; there is no merging and no history.

use crate::errors::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub struct SnapshotStore {
  dir: PathBuf,
}

impl SnapshotStore {
  /// Opens (creating if necessary) the storage directory.
  pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
    let dir = dir.into();
    fs::create_dir_all(&dir)?;
    Ok(Self { dir })
  }

  pub fn dir(&self) -> &Path {
    &self.dir
  }

  /// Loads the snapshot for `namespace`, or `None` if none was ever saved.
  /// A present-but-unreadable snapshot is an error, not an empty result.
  #[instrument(name = "storage::load", skip(self))]
  pub fn load<T: DeserializeOwned>(&self, namespace: &str) -> Result<Option<T>> {
    let path = self.path(namespace);
    if !path.exists() {
      debug!(?path, "No snapshot on disk.");
      return Ok(None);
    }
    let bytes = fs::read(&path)?;
    let value = serde_json::from_slice(&bytes)?;
    Ok(Some(value))
  }

  /// Replaces the snapshot for `namespace`. Writes to a sibling temp file
  /// first and renames, so a crash mid-write never leaves a torn snapshot.
  #[instrument(name = "storage::save", skip(self, value))]
  pub fn save<T: Serialize>(&self, namespace: &str, value: &T) -> Result<()> {
    let path = self.path(namespace);
    let tmp = path.with_extension("json.tmp");
    let bytes = serde_json::to_vec_pretty(value)?;
    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, &path)?;
    debug!(?path, "Snapshot persisted.");
    Ok(())
  }

  /// Deletes the snapshot for `namespace`; no-op when absent.
  #[instrument(name = "storage::delete", skip(self))]
  pub fn delete(&self, namespace: &str) -> Result<()> {
    let path = self.path(namespace);
    if path.exists() {
      fs::remove_file(&path)?;
    }
    Ok(())
  }

  fn path(&self, namespace: &str) -> PathBuf {
    self.dir.join(format!("{namespace}.json"))
  }
}
