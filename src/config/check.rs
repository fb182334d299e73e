use super::Config;
use crate::errors::AppResult;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Fields every configuration file is expected to carry.
const EXPECTED_FIELDS: [&str; 5] = [
    "database",
    "dataset",
    "state_key",
    "happening_refresh_secs",
    "separator_char",
];

/// Return the expected fields missing from the YAML document at `path`.
/// A missing file reports every field.
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        return Ok(EXPECTED_FIELDS.to_vec());
    }

    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)?;
    let map = yaml.as_mapping().cloned().unwrap_or_default();

    Ok(missing_in(&map))
}

fn missing_in(map: &Mapping) -> Vec<&'static str> {
    EXPECTED_FIELDS
        .iter()
        .copied()
        .filter(|f| !map.contains_key(Value::String((*f).to_string())))
        .collect()
}

/// Add default values for missing fields, keeping every existing value.
/// Returns the names of the fields that were added.
pub fn complete_config_file(path: &Path) -> AppResult<Vec<&'static str>> {
    let mut map = if path.exists() {
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str::<Value>(&content)?
            .as_mapping()
            .cloned()
            .unwrap_or_default()
    } else {
        Mapping::new()
    };

    let missing = missing_in(&map);
    if missing.is_empty() {
        return Ok(missing);
    }

    let defaults = serde_yaml::to_value(Config::default())?;
    if let Some(defaults) = defaults.as_mapping() {
        for field in &missing {
            let key = Value::String((*field).to_string());
            if let Some(v) = defaults.get(&key) {
                map.insert(key, v.clone());
            }
        }
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_yaml::to_string(&Value::Mapping(map))?)?;

    Ok(missing)
}
