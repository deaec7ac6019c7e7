// passgen Settings Engine
// Persists the generator defaults (display language, password and UUID options)
// as a JSON document next to the other per-user config. Generated values never go here.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::platform;
use crate::services::localization_engine::is_supported_locale;
use crate::types::errors::SettingsError;
use crate::types::settings::GeneratorSettings;

const SETTINGS_FILE: &str = "settings.json";

/// Load/store interface for the generator defaults.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<GeneratorSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &GeneratorSettings;
    fn set_settings(&mut self, settings: GeneratorSettings) -> Result<(), SettingsError>;
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &str;
}

/// JSON-file backed settings.
pub struct SettingsEngine {
    config_path: String,
    settings: GeneratorSettings,
}

impl SettingsEngine {
    /// `path_override` replaces `<config dir>/settings.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = path_override.unwrap_or_else(|| {
            platform::get_config_dir()
                .join(SETTINGS_FILE)
                .to_string_lossy()
                .into_owned()
        });

        Self {
            config_path,
            settings: GeneratorSettings::default(),
        }
    }

    /// Explicit updates must name a bundled language; only a hand-edited
    /// file is repaired silently on load.
    fn commit(&mut self, settings: GeneratorSettings) -> Result<(), SettingsError> {
        if !is_supported_locale(&settings.language) {
            return Err(SettingsError::InvalidValue(format!(
                "language: unsupported locale '{}'",
                settings.language
            )));
        }
        self.settings = settings.clamped();
        self.save()
    }
}

/// Replaces the leaf at dot path `key` inside `root`.
///
/// Only existing leaves can be replaced, so a typo never adds a field that
/// deserialization would silently ignore.
fn replace_leaf(root: &mut Value, key: &str, new_value: Value) -> Result<(), SettingsError> {
    let unknown = || SettingsError::InvalidKey(format!("Unknown settings key '{}'", key));

    let (leaf, parents) = match key.rsplit_once('.') {
        Some((parents, leaf)) => (leaf, Some(parents)),
        None => (key, None),
    };
    if leaf.is_empty() {
        return Err(unknown());
    }

    let mut node = root;
    for part in parents.into_iter().flat_map(|p| p.split('.')) {
        node = node.get_mut(part).ok_or_else(unknown)?;
    }

    match node.as_object_mut() {
        Some(map) if map.contains_key(leaf) => {
            map.insert(leaf.to_owned(), new_value);
            Ok(())
        }
        Some(_) => Err(unknown()),
        None => Err(SettingsError::InvalidKey(format!(
            "Settings key '{}' goes through a non-object value",
            key
        ))),
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// A missing file yields defaults; a malformed one is an error.
    fn load(&mut self) -> Result<GeneratorSettings, SettingsError> {
        let path = Path::new(&self.config_path);
        if !path.exists() {
            log::debug!("no settings at {}, using defaults", self.config_path);
            self.settings = GeneratorSettings::default();
            return Ok(self.settings.clone());
        }

        let raw = fs::read_to_string(path).map_err(|e| {
            SettingsError::IoError(format!("cannot read {}: {}", self.config_path, e))
        })?;
        let parsed: GeneratorSettings = serde_json::from_str(&raw).map_err(|e| {
            SettingsError::SerializationError(format!("{} is not valid settings: {}", self.config_path, e))
        })?;

        self.settings = parsed.clamped();
        Ok(self.settings.clone())
    }

    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| {
                SettingsError::IoError(format!("cannot create {}: {}", dir.display(), e))
            })?;
        }

        let body = serde_json::to_string_pretty(&self.settings)
            .map_err(|e| SettingsError::SerializationError(e.to_string()))?;
        fs::write(path, body).map_err(|e| {
            SettingsError::IoError(format!("cannot write {}: {}", self.config_path, e))
        })?;

        log::info!("settings saved to {}", self.config_path);
        Ok(())
    }

    fn get_settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    fn set_settings(&mut self, settings: GeneratorSettings) -> Result<(), SettingsError> {
        self.commit(settings)
    }

    /// Updates one field by dot path, e.g. `"password.length"` or `"language"`.
    ///
    /// The patched document must still deserialize into [`GeneratorSettings`];
    /// a value of the wrong type is rejected and nothing changes.
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), SettingsError> {
        if key.is_empty() {
            return Err(SettingsError::InvalidKey("empty settings key".to_string()));
        }

        let mut doc = serde_json::to_value(&self.settings)
            .map_err(|e| SettingsError::SerializationError(e.to_string()))?;
        replace_leaf(&mut doc, key, value)?;

        let updated: GeneratorSettings = serde_json::from_value(doc)
            .map_err(|e| SettingsError::InvalidValue(format!("{}: {}", key, e)))?;
        self.commit(updated)
    }

    fn reset(&mut self) -> Result<(), SettingsError> {
        self.commit(GeneratorSettings::default())
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
