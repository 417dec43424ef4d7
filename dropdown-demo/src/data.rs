//! Demo data: a dropdown config, its records and an optional bound model.

use std::fs;
use std::path::Path;

use dropdown::DropdownConfig;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::DemoError;

/// Contents of a data file.
///
/// ```json
/// {
///   "config": { "text_field": "name", "value_field": "id" },
///   "records": [{ "name": "Apple", "id": 1 }],
///   "model": { "name": "Apple", "id": 1 }
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DemoData {
    pub config: DropdownConfig,
    pub records: Vec<Value>,
    pub model: Option<Value>,
}

impl DemoData {
    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let text = fs::read_to_string(path).map_err(|source| DemoError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| DemoError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Built-in fruit list, used when no file is given.
    pub fn sample() -> Self {
        let names = [
            "Apple",
            "Apricot",
            "Banana",
            "Blackcurrant",
            "Blueberry",
            "Cherry",
            "Cloudberry",
            "Dragonfruit",
            "Elderberry",
            "Gooseberry",
            "Grapefruit",
            "Kiwi",
            "Lingonberry",
            "Mango",
            "Pomegranate",
        ];
        let records = names
            .iter()
            .enumerate()
            .map(|(i, name)| json!({ "name": name, "id": i + 1 }))
            .collect();

        Self {
            config: DropdownConfig::new("name", "id")
                .placeholder("Search fruit…")
                .theme("dark")
                .max_label_width(Some(24))
                .diagnostics(),
            records,
            model: None,
        }
    }
}
