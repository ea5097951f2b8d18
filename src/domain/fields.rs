//! Request field helpers shared by every payload.
//!
//! Blank strings are treated exactly like absent fields, so a single
//! `required` check covers `null`, missing and `""`.

use serde::{Deserialize, Deserializer};

use crate::errors::{AppError, AppResult};

/// Deserialize an optional string, mapping blank values to `None`.
pub fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty()))
}

/// Deserialize an optional list of IDs, dropping blank entries.
pub fn id_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Vec<String>>::deserialize(deserializer)?;
    let mut ids: Vec<String> = Vec::new();
    for id in value.unwrap_or_default() {
        let id = id.trim().to_string();
        if !id.is_empty() && !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

/// Take a required field or fail with a 400 carrying `message`.
pub fn required(value: Option<String>, message: &str) -> AppResult<String> {
    value.ok_or_else(|| AppError::validation(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "blank_as_none")]
        name: Option<String>,
        #[serde(default, deserialize_with = "id_list")]
        ids: Vec<String>,
    }

    #[test]
    fn test_blank_as_none() {
        let probe: Probe = serde_json::from_str(r#"{"name": "   "}"#).unwrap();
        assert_eq!(probe.name, None);

        let probe: Probe = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(probe.name, None);

        let probe: Probe = serde_json::from_str(r#"{"name": " X-IPA 1 "}"#).unwrap();
        assert_eq!(probe.name.as_deref(), Some("X-IPA 1"));
    }

    #[test]
    fn test_id_list_dedups_and_drops_blanks() {
        let probe: Probe =
            serde_json::from_str(r#"{"ids": ["CLS-001", "", "CLS-002", "CLS-001"]}"#).unwrap();
        assert_eq!(probe.ids, vec!["CLS-001", "CLS-002"]);

        let probe: Probe = serde_json::from_str(r#"{"ids": null}"#).unwrap();
        assert!(probe.ids.is_empty());

        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert!(probe.ids.is_empty());
    }

    #[test]
    fn test_required() {
        assert!(required(None, "wajib").is_err());
        assert_eq!(required(Some("a".into()), "wajib").unwrap(), "a");
    }
}
