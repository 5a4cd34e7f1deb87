use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys that used to have other names in older configuration files.
const RENAMED_KEYS: &[(&str, &str)] = &[("database", "data_file"), ("csv_file", "data_file")];

/// Keys every current configuration file is expected to contain.
pub fn expected_keys() -> Vec<&'static str> {
    vec![
        "data_file",
        "default_category",
        "separator_char",
        "dashboard_bar_width",
    ]
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
    match yaml {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

/// Return the expected keys missing from the file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(expected_keys()
        .into_iter()
        .filter(|k| !map.contains_key(Value::String((*k).to_string())))
        .collect())
}

/// Rename legacy keys and add missing ones with their default values.
///
/// Returns `Ok(true)` when the file was rewritten, `Ok(false)` when it was
/// already current.
pub fn migrate_config_file(path: &Path) -> AppResult<bool> {
    let mut map = read_mapping(path)?;
    let mut changed = false;

    for (old, new) in RENAMED_KEYS {
        let old_key = Value::String((*old).to_string());
        let new_key = Value::String((*new).to_string());
        if let Some(v) = map.remove(&old_key) {
            if !map.contains_key(&new_key) {
                info(format!("Renaming config key '{old}' → '{new}'"));
                map.insert(new_key, v);
            }
            changed = true;
        }
    }

    let defaults = serde_yaml::to_value(Config::default())
        .map_err(|e| AppError::Config(e.to_string()))?;
    if let Value::Mapping(defaults) = defaults {
        for (k, v) in defaults {
            if !map.contains_key(&k) {
                if let Value::String(name) = &k {
                    info(format!("Adding missing config key '{name}'"));
                }
                map.insert(k, v);
                changed = true;
            }
        }
    }

    if changed {
        let serialized =
            serde_yaml::to_string(&Value::Mapping(map)).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, serialized)?;
        success(format!("Configuration migrated: {}", path.display()));
    }

    Ok(changed)
}
