use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tiles_common::SettingsError;
use tracing::{debug, warn};

/// Key/value store backed by a JSON file.
///
/// Mutations stay in memory until [`SettingsStore::sync`].
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    values: Map<String, Value>,
    dirty: bool,
}

impl SettingsStore {
    /// Open the store at `path`.
    ///
    /// A missing file gives an empty store. A file that cannot be read or
    /// does not hold a JSON object is logged and also gives an empty store;
    /// it is overwritten on the next sync.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match Self::read(&path) {
            Ok(values) => values,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable settings");
                Map::new()
            }
        };
        debug!(path = %path.display(), keys = values.len(), "settings opened");
        Self {
            path,
            values,
            dirty: false,
        }
    }

    fn read(path: &Path) -> Result<Map<String, Value>, SettingsError> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(SettingsError::Read(format!("{}: {e}", path.display()))),
        };
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(SettingsError::Format("expected a JSON object".into())),
            Err(e) => Err(SettingsError::Format(e.to_string())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> bool {
        let removed = self.values.remove(key).is_some();
        self.dirty |= removed;
        removed
    }

    /// Drop every key.
    pub fn clear(&mut self) {
        if !self.values.is_empty() {
            self.values.clear();
            self.dirty = true;
        }
    }

    /// Read a bool. The strings `"true"`/`"false"` are accepted too.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.values.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.values.get(key)?.as_str()
    }

    /// Read a list of pixel sizes.
    ///
    /// Entries may be numbers or numeric strings; anything else, or a
    /// negative size, makes the whole value unusable.
    pub fn get_sizes(&self, key: &str) -> Option<Vec<u32>> {
        let list = self.values.get(key)?.as_array()?;
        list.iter()
            .map(|v| match v {
                Value::Number(n) => n
                    .as_u64()
                    .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.round() as u64)),
                Value::String(s) => s.trim().parse::<u64>().ok(),
                _ => None,
            })
            .map(|n| n.and_then(|n| u32::try_from(n).ok()))
            .collect()
    }

    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.set(key, Value::Bool(value));
    }

    pub fn set_string(&mut self, key: &str, value: impl Into<String>) {
        self.set(key, Value::String(value.into()));
    }

    pub fn set_sizes(&mut self, key: &str, sizes: &[u32]) {
        self.set(key, Value::from(sizes.to_vec()));
    }

    fn set(&mut self, key: &str, value: Value) {
        if self.values.get(key) != Some(&value) {
            self.values.insert(key.to_string(), value);
            self.dirty = true;
        }
    }

    /// Whether there are changes not yet written to disk.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write pending changes to disk.
    ///
    /// Writes to a `.tmp` sibling and renames it into place.
    pub fn sync(&mut self) -> Result<(), SettingsError> {
        if !self.dirty {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::Write(format!("failed to create {}: {e}", parent.display()))
            })?;
        }

        let body = serde_json::to_string_pretty(&self.values)
            .map_err(|e| SettingsError::Format(e.to_string()))?;

        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, &body)
            .map_err(|e| SettingsError::Write(format!("{}: {e}", tmp_path.display())))?;

        if let Err(e) = std::fs::rename(&tmp_path, &self.path) {
            warn!("atomic rename failed ({}), falling back to direct write", e);
            std::fs::write(&self.path, &body)
                .map_err(|e2| SettingsError::Write(format!("{}: {e2}", self.path.display())))?;
        }

        self.dirty = false;
        debug!(path = %self.path.display(), "settings synced");
        Ok(())
    }
}
