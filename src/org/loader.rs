//! Load org records from the JSON template export
//!
//! The document is parsed in two passes: first into raw JSON values, then
//! each value into an `OrgRecord`. The second pass lets a bad record be
//! reported by position and name instead of by byte offset.

use crate::core::error::{OrgError, Result};
use crate::org::record::OrgRecord;
use serde_json::Value;
use std::path::Path;

/// Parse a JSON array of org records
pub fn load_from_json(json: &str) -> Result<Vec<OrgRecord>> {
    let values: Vec<Value> = serde_json::from_str(json)?;
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| parse_record(index, value))
        .collect()
}

/// Read and parse the org template file at `path`
pub fn load_from_file(path: &Path) -> Result<Vec<OrgRecord>> {
    let content = std::fs::read_to_string(path).map_err(|source| OrgError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let records = load_from_json(&content)?;
    tracing::info!("Loaded {} org records from {:?}", records.len(), path);
    Ok(records)
}

fn parse_record(index: usize, value: Value) -> Result<OrgRecord> {
    let name = record_label(&value);
    serde_json::from_value(value).map_err(|source| OrgError::InvalidRecord {
        index,
        name,
        source,
    })
}

/// Identify a raw record for error messages before it is parsed
fn record_label(value: &Value) -> String {
    ["friendlyName", "dataName"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .unwrap_or("<unnamed>")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal(name: &str) -> String {
        format!(
            r#"{{
                "friendlyName": "{}",
                "missionsGrantedNames": [],
                "techBonuses": [],
                "requiredOwnerTraits": [],
                "prohibitedOwnerTraits": [],
                "restricted": ["", "", "", "", "", "", "", ""]
            }}"#,
            name
        )
    }

    #[test]
    fn test_load_preserves_order() {
        let json = format!("[{}, {}]", minimal("First"), minimal("Second"));
        let records = load_from_json(&json).unwrap();
        let names: Vec<&str> = records.iter().map(OrgRecord::name).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn test_empty_array() {
        assert!(load_from_json("[]").unwrap().is_empty());
    }

    #[test]
    fn test_json_parse_error() {
        let result = load_from_json("{ invalid json }");
        assert!(matches!(result, Err(OrgError::SerdeError(_))));
    }

    #[test]
    fn test_top_level_must_be_array() {
        let result = load_from_json(&minimal("Lonely"));
        assert!(matches!(result, Err(OrgError::SerdeError(_))));
    }

    #[test]
    fn test_invalid_record_is_identified() {
        let broken = r#"{ "friendlyName": "Broken", "restricted": [] }"#;
        let json = format!("[{}, {}]", minimal("Fine"), broken);

        match load_from_json(&json) {
            Err(OrgError::InvalidRecord { index, name, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(name, "Broken");
            }
            other => panic!("Expected InvalidRecord error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_record_falls_back_to_data_name() {
        let json = r#"[{ "dataName": "HiddenOrg" }]"#;
        match load_from_json(json) {
            Err(OrgError::InvalidRecord { name, .. }) => assert_eq!(name, "HiddenOrg"),
            other => panic!("Expected InvalidRecord error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let path = Path::new("definitely/not/here/TIOrgTemplate.json");
        let result = load_from_file(path);
        assert!(matches!(result, Err(OrgError::ReadInput { .. })));
    }
}
