//! Single-document storage: a JSON object of string values, with the whole
//! record serialized under one namespace key.

use super::store::PrefsBackend;
use super::Preferences;
use crate::config::PREFS_NAMESPACE_KEY;
use anyhow::{anyhow, Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct DocumentBackend {
    path: PathBuf,
    key: String,
}

impl DocumentBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_key(path, PREFS_NAMESPACE_KEY)
    }

    pub fn with_key(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    fn read_document(&self) -> Result<Option<Map<String, Value>>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read {}", self.path.display()))
            }
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        match serde_json::from_str::<Value>(&raw)
            .with_context(|| format!("failed to parse {}", self.path.display()))?
        {
            Value::Object(map) => Ok(Some(map)),
            _ => Err(anyhow!("{} is not a JSON object", self.path.display())),
        }
    }
}

impl PrefsBackend for DocumentBackend {
    fn read_record(&self) -> Result<Option<Value>> {
        let Some(document) = self.read_document()? else {
            return Ok(None);
        };
        match document.get(&self.key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(serialized)) => serde_json::from_str(serialized)
                .map(Some)
                .with_context(|| format!("stored value under '{}' is not JSON", self.key)),
            // Hand-edited files may inline the object instead of a string.
            Some(other) => Ok(Some(other.clone())),
        }
    }

    fn write_record(&mut self, prefs: &Preferences) -> Result<()> {
        // Other keys in the document belong to someone else; keep them.
        let mut document = self.read_document().ok().flatten().unwrap_or_default();
        let serialized =
            serde_json::to_string(prefs).context("failed to serialize preferences")?;
        document.insert(self.key.clone(), Value::String(serialized));

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let body = serde_json::to_string_pretty(&Value::Object(document))
            .context("failed to serialize storage document")?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, body)
            .with_context(|| format!("failed to write {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;
        Ok(())
    }

    fn label(&self) -> &'static str {
        "document"
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
