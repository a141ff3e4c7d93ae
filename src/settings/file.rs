//! Settings file persistence.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::Settings;

/// Key a settings document may be nested under.
pub const NAMESPACE: &str = "profpass";

/// Read settings from `path`, falling back to defaults on any failure.
///
/// The document may be flat or nested under [`NAMESPACE`]. Fields that are
/// present override the defaults one by one; unknown keys are ignored.
pub fn load(path: impl AsRef<Path>) -> Settings {
    let path = path.as_ref();
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "no settings file, using defaults");
            return Settings::default();
        }
    };

    match parse(&data) {
        Ok(settings) => {
            tracing::debug!(path = %path.display(), "loaded settings");
            settings
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "unreadable settings, using defaults");
            Settings::default()
        }
    }
}

/// Parse a settings document, flat or namespaced.
pub fn parse(data: &str) -> serde_json::Result<Settings> {
    let value: Value = serde_json::from_str(data)?;
    serde_json::from_value(unwrap_namespace(value))
}

fn unwrap_namespace(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.len() == 1 && map.get(NAMESPACE).is_some_and(Value::is_object) => {
            map.remove(NAMESPACE).unwrap_or(Value::Object(Map::new()))
        }
        other => other,
    }
}

/// Write settings nested under [`NAMESPACE`], creating parent directories.
pub fn save(settings: &Settings, path: impl AsRef<Path>) -> std::io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut doc = Map::new();
    doc.insert(NAMESPACE.to_string(), serde_json::to_value(settings)?);
    let data = serde_json::to_string_pretty(&Value::Object(doc))?;

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(data.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

#[inline]
pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(format!("{}/.config/profpass/config.json", home))
}
