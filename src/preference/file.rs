//! TOML-file backed preference store.
//!
//! The file is a flat table of string values:
//!
//! ```toml
//! theme = "dark"
//! ```
//!
//! Every `set` rewrites the whole file, preserving keys it does not know.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{PreferenceError, PreferenceStore};

pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| PreferenceError::Read {
            path: self.path.clone(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| PreferenceError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        // A corrupt file is replaced; an I/O failure aborts so other keys survive.
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(PreferenceError::Parse { .. }) => BTreeMap::new(),
            Err(err) => return Err(err),
        };
        values.insert(key.to_string(), value.to_string());
        let content = toml::to_string(&values)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| PreferenceError::Write {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        fs::write(&self.path, content).map_err(|e| PreferenceError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}
