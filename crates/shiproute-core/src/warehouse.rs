//! Warehouse records and the YAML fixture loader.
//!
//! Warehouse lists normally arrive per routing call from the platform API
//! collaborators as loose JSON; [`WarehouseInfo::from_value`] ingests those
//! tolerantly. [`load_warehouses`] loads an injected fixture file for glue
//! code that has no live platform connection.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::carrier::Platform;
use crate::ConfigError;

/// One fulfillment location owned by a backing platform.
///
/// `id` is opaque and platform-specific; it is never interpreted beyond
/// equality and selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseInfo {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Free-form region or state string, e.g. `"Nevada Fulfillment Center"`.
    #[serde(default)]
    pub region: String,
    /// Which platform owns this warehouse, when known.
    #[serde(default)]
    pub platform: Option<Platform>,
}

impl WarehouseInfo {
    /// Build a warehouse from a raw platform JSON object.
    ///
    /// The two platforms disagree on key names, and either may omit
    /// fields; missing keys become empty strings.
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Self {
        let platform = value
            .get("platform")
            .and_then(serde_json::Value::as_str)
            .and_then(Platform::parse);

        WarehouseInfo {
            id: first_text(value, &["id", "warehouse_id"]),
            name: first_text(value, &["name", "warehouse_name"]),
            region: first_text(value, &["region", "state", "region_name"]),
            platform,
        }
    }
}

/// First non-empty string (or number rendered as a string) among `keys`.
fn first_text(value: &serde_json::Value, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| {
            let field = value.get(key)?;
            match field {
                serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
                serde_json::Value::Number(n) => Some(n.to_string()),
                _ => None,
            }
        })
        .unwrap_or_default()
}

#[derive(Debug, Deserialize)]
pub struct WarehousesFile {
    pub warehouses: Vec<WarehouseInfo>,
}

/// Load and validate a warehouse fixture from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation (empty or duplicate ids).
pub fn load_warehouses(path: &Path) -> Result<WarehousesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FixtureIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: WarehousesFile = serde_yaml::from_str(&content)?;
    validate_warehouses(&file)?;
    Ok(file)
}

fn validate_warehouses(file: &WarehousesFile) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for warehouse in &file.warehouses {
        if warehouse.id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "warehouse id must be non-empty".to_string(),
            ));
        }
        if !seen_ids.insert(warehouse.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate warehouse id: '{}'",
                warehouse.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // from_value
    // -----------------------------------------------------------------------

    #[test]
    fn from_value_reads_canonical_keys() {
        let value = serde_json::json!({
            "id": "wh-1",
            "name": "Reno DC",
            "region": "Nevada",
            "platform": "VEEQO"
        });
        let warehouse = WarehouseInfo::from_value(&value);
        assert_eq!(warehouse.id, "wh-1");
        assert_eq!(warehouse.name, "Reno DC");
        assert_eq!(warehouse.region, "Nevada");
        assert_eq!(warehouse.platform, Some(Platform::Veeqo));
    }

    #[test]
    fn from_value_falls_back_across_key_spellings() {
        let value = serde_json::json!({
            "warehouse_id": 4410,
            "warehouse_name": "Austin Hub",
            "state": "Texas"
        });
        let warehouse = WarehouseInfo::from_value(&value);
        assert_eq!(warehouse.id, "4410");
        assert_eq!(warehouse.name, "Austin Hub");
        assert_eq!(warehouse.region, "Texas");
        assert_eq!(warehouse.platform, None);
    }

    #[test]
    fn from_value_tolerates_missing_keys() {
        let warehouse = WarehouseInfo::from_value(&serde_json::json!({}));
        assert_eq!(warehouse.id, "");
        assert_eq!(warehouse.name, "");
        assert_eq!(warehouse.region, "");
        assert_eq!(warehouse.platform, None);
    }

    #[test]
    fn from_value_ignores_unknown_platform_tag() {
        let value = serde_json::json!({"id": "x", "platform": "SHIPBOB"});
        assert_eq!(WarehouseInfo::from_value(&value).platform, None);
    }

    // -----------------------------------------------------------------------
    // fixture loading
    // -----------------------------------------------------------------------

    fn make_warehouse(id: &str) -> WarehouseInfo {
        WarehouseInfo {
            id: id.to_string(),
            name: format!("Warehouse {id}"),
            region: "Nevada".to_string(),
            platform: Some(Platform::Veeqo),
        }
    }

    #[test]
    fn validate_rejects_empty_id() {
        let file = WarehousesFile {
            warehouses: vec![make_warehouse("  ")],
        };
        let err = validate_warehouses(&file).unwrap_err();
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn validate_rejects_duplicate_id() {
        let file = WarehousesFile {
            warehouses: vec![make_warehouse("wh-1"), make_warehouse("wh-1")],
        };
        let err = validate_warehouses(&file).unwrap_err();
        assert!(err.to_string().contains("duplicate warehouse id"));
    }

    #[test]
    fn validate_accepts_distinct_ids() {
        let file = WarehousesFile {
            warehouses: vec![make_warehouse("wh-1"), make_warehouse("wh-2")],
        };
        assert!(validate_warehouses(&file).is_ok());
    }

    #[test]
    fn load_warehouses_from_real_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("config")
            .join("warehouses.yaml");
        assert!(
            path.exists(),
            "warehouses.yaml missing at {path:?} — required for this test"
        );
        let result = load_warehouses(&path);
        assert!(result.is_ok(), "failed to load warehouses.yaml: {result:?}");
        assert!(!result.unwrap().warehouses.is_empty());
    }
}
