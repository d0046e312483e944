use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

use crate::layout::Block;

/// A number or a free-form display string, as the dataset mixes both
/// (`"atomicMass": 1.008` next to `"density": "0.534 (at 20 °C)"`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(Number),
    Text(String),
}

impl Scalar {
    pub fn is_blank(&self) -> bool {
        match self {
            Scalar::Number(_) => false,
            Scalar::Text(s) => s.trim().is_empty(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Text(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Isotope {
    #[serde(default)]
    pub isotope: Option<String>,
    #[serde(default)]
    pub abundance: Option<Scalar>,
    #[serde(default)]
    pub half_life: Option<Scalar>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Compound {
    #[serde(default)]
    pub name: Option<String>,
    /// Markup handed to the page's formula renderer untouched.
    #[serde(default)]
    pub formula: Option<String>,
    #[serde(default)]
    pub properties: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum KeyProperty {
    Text(String),
    Pairs(Map<String, Value>),
}

impl KeyProperty {
    /// `{"crystal_structure": "bcc", "magnetic": true}` becomes
    /// `crystal structure: bcc, magnetic: true`.
    pub fn display_text(&self) -> String {
        match self {
            KeyProperty::Text(s) => s.clone(),
            KeyProperty::Pairs(map) => map
                .iter()
                .map(|(key, value)| format!("{}: {}", key.replace('_', " "), value_text(value)))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRecord {
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub atomic_number: Option<Scalar>,
    #[serde(default)]
    pub atomic_mass: Option<Scalar>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub group: Option<Scalar>,
    #[serde(default)]
    pub density: Option<Scalar>,
    #[serde(default)]
    pub melting_point: Option<Scalar>,
    #[serde(default)]
    pub boiling_point: Option<Scalar>,
    #[serde(default)]
    pub appearance: Option<String>,
    #[serde(default)]
    pub discovered_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<Block>,
    #[serde(default, deserialize_with = "list_or_null")]
    pub isotopes: Vec<Isotope>,
    #[serde(default, rename = "key_properties", deserialize_with = "list_or_null")]
    pub key_properties: Vec<KeyProperty>,
    #[serde(default, deserialize_with = "list_or_null")]
    pub uses: Vec<String>,
    #[serde(default, rename = "interesting_facts", deserialize_with = "list_or_null")]
    pub interesting_facts: Vec<String>,
    #[serde(default, rename = "common_uses", deserialize_with = "list_or_null")]
    pub common_uses: Vec<String>,
    #[serde(default, deserialize_with = "list_or_null")]
    pub compounds: Vec<Compound>,
}

impl ElementRecord {
    pub fn category_contains(&self, needle: &str) -> bool {
        self.category
            .as_deref()
            .map(|c| c.to_lowercase().contains(needle))
            .unwrap_or(false)
    }

    pub fn atomic_number_text(&self) -> String {
        present(self.atomic_number.as_ref()).unwrap_or_default()
    }
}

/// Text of an optional scalar, treating blank strings as missing.
pub fn present(value: Option<&Scalar>) -> Option<String> {
    value.filter(|v| !v.is_blank()).map(|v| v.to_string())
}

pub fn present_str(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn list_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_record() {
        let record: ElementRecord =
            serde_json::from_str(r#"{"symbol": "He", "name": "Helium"}"#).unwrap();
        assert_eq!(record.symbol, "He");
        assert!(record.category.is_none());
        assert!(record.isotopes.is_empty());
        assert!(record.key_properties.is_empty());
        assert_eq!(record.atomic_number_text(), "");
    }

    #[test]
    fn test_null_lists_are_empty() {
        let record: ElementRecord = serde_json::from_str(
            r#"{"symbol": "X", "name": "Xenotest", "isotopes": null, "uses": null, "compounds": null}"#,
        )
        .unwrap();
        assert!(record.isotopes.is_empty());
        assert!(record.uses.is_empty());
        assert!(record.compounds.is_empty());
    }

    #[test]
    fn test_mixed_scalars() {
        let record: ElementRecord = serde_json::from_str(
            r#"{"symbol": "Li", "name": "Lithium", "atomicNumber": 3, "atomicMass": "6.94", "density": 0.534, "meltingPoint": ""}"#,
        )
        .unwrap();
        assert_eq!(record.atomic_number_text(), "3");
        assert_eq!(present(record.atomic_mass.as_ref()).as_deref(), Some("6.94"));
        assert_eq!(present(record.density.as_ref()).as_deref(), Some("0.534"));
        assert_eq!(present(record.melting_point.as_ref()), None);
    }

    #[test]
    fn test_key_property_flattening() {
        let record: ElementRecord = serde_json::from_str(
            r#"{"symbol": "Fe", "name": "Iron", "key_properties": [
                "Ferromagnetic",
                {"crystal_structure": "bcc", "oxidation_states": "+2, +3", "magnetic": true}
            ]}"#,
        )
        .unwrap();
        let texts: Vec<String> = record.key_properties.iter().map(|p| p.display_text()).collect();
        assert_eq!(texts[0], "Ferromagnetic");
        assert_eq!(
            texts[1],
            "crystal structure: bcc, oxidation states: +2, +3, magnetic: true"
        );
    }

    #[test]
    fn test_category_contains_is_case_insensitive() {
        let record: ElementRecord = serde_json::from_str(
            r#"{"symbol": "Ne", "name": "Neon", "category": "Noble Gas"}"#,
        )
        .unwrap();
        assert!(record.category_contains("noble gas"));
        assert!(record.category_contains("gas"));
        assert!(!record.category_contains("metal"));
    }
}
