use super::{merge, Preferences};
use crate::log_debug;
use anyhow::Result;
use serde_json::Value;
use std::path::Path;

/// Physical storage behind a [`PreferencesStore`].
///
/// `read_record` returns the raw stored object (or `None` when nothing has
/// been written yet); interpreting it is left to [`merge`].
pub trait PrefsBackend {
    fn read_record(&self) -> Result<Option<Value>>;
    fn write_record(&mut self, prefs: &Preferences) -> Result<()>;
    fn label(&self) -> &'static str;
    fn path(&self) -> &Path;
}

/// Loads and saves the preference record through a pluggable backend.
pub struct PreferencesStore {
    backend: Box<dyn PrefsBackend>,
    defaults: Preferences,
}

impl PreferencesStore {
    pub fn new(backend: Box<dyn PrefsBackend>) -> Self {
        Self::with_defaults(backend, Preferences::default())
    }

    pub fn with_defaults(backend: Box<dyn PrefsBackend>, defaults: Preferences) -> Self {
        Self { backend, defaults }
    }

    /// Read the stored record merged over the defaults. Never fails.
    pub fn load(&self) -> Preferences {
        match self.backend.read_record() {
            Ok(Some(stored)) => merge(&self.defaults, &stored),
            Ok(None) => self.defaults.clone(),
            Err(err) => {
                log_debug(&format!(
                    "{} preferences unreadable, using defaults: {err:#}",
                    self.backend.label()
                ));
                tracing::warn!(
                    backend = self.backend.label(),
                    error = %format!("{err:#}"),
                    "preferences unreadable; using defaults"
                );
                self.defaults.clone()
            }
        }
    }

    /// Write the complete record, replacing whatever was stored before.
    pub fn save(&mut self, prefs: &Preferences) -> Result<()> {
        self.backend.write_record(prefs)?;
        tracing::debug!(backend = self.backend.label(), "preferences saved");
        Ok(())
    }

    pub fn defaults(&self) -> &Preferences {
        &self.defaults
    }

    pub fn backend_label(&self) -> &'static str {
        self.backend.label()
    }

    pub fn path(&self) -> &Path {
        self.backend.path()
    }
}
