//! Raw record normalization: clean, title-case, and annotate incoming
//! records, dropping entries that lack the required fields.

use chrono::Utc;
use heck::ToTitleCase;
use serde::Serialize;
use serde_json::Value;

const SCHEMA_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub word_count: usize,
    pub metadata: RecordMetadata,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMetadata {
    pub processed_at: String,
    pub version: String,
    pub status: String,
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Normalize raw records. Non-object entries and entries missing `id` or
/// `name` are skipped rather than reported.
pub fn normalize(records: &[Value]) -> Vec<NormalizedRecord> {
    if records.is_empty() {
        return Vec::new();
    }

    let mut results = Vec::new();
    for record in records {
        let Some(obj) = record.as_object() else {
            continue;
        };

        let (Some(id), Some(name)) = (obj.get("id"), obj.get("name")) else {
            continue;
        };

        let description = obj
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or("")
            .trim()
            .to_string();

        let category = obj
            .get("category")
            .and_then(Value::as_str)
            .unwrap_or("uncategorized")
            .to_lowercase();

        let tags = obj
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| {
                tags.iter()
                    .filter_map(Value::as_str)
                    .map(|t| t.trim().to_lowercase())
                    .collect()
            })
            .unwrap_or_default();

        let word_count = description.split_whitespace().count();

        results.push(NormalizedRecord {
            id: scalar_to_string(id).trim().to_string(),
            name: scalar_to_string(name).trim().to_title_case(),
            description,
            category,
            tags,
            word_count,
            metadata: RecordMetadata {
                processed_at: Utc::now().to_rfc3339(),
                version: SCHEMA_VERSION.to_string(),
                status: "active".to_string(),
            },
        });
    }

    results
}
