use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

use crate::core::error::DecodeError;

/// A backend-owned project. Replaced wholesale on every re-fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(with = "timestamp")]
    pub created_at: OffsetDateTime,
}

impl Project {
    /// Calendar date of creation, e.g. `2024-01-01`.
    pub fn created_date(&self) -> String {
        self.created_at
            .format(DATE_FORMAT)
            .unwrap_or_else(|_| self.created_at.date().to_string())
    }
}

const DATE_FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    time::macros::format_description!("[year]-[month]-[day]");

/// Decodes the directory listing, where every project arrives as its own JSON string.
///
/// Malformed records are returned as errors next to the good ones instead of
/// failing the whole batch.
pub fn decode_projects<S: AsRef<str>>(raw: &[S]) -> (Vec<Project>, Vec<DecodeError>) {
    let mut projects = Vec::with_capacity(raw.len());
    let mut errors = Vec::new();
    for (index, record) in raw.iter().enumerate() {
        match decode_project(record.as_ref()) {
            Ok(project) => projects.push(project),
            Err(reason) => errors.push(DecodeError { index, reason }),
        }
    }
    (projects, errors)
}

fn decode_project(record: &str) -> Result<Project, String> {
    let project: Project = serde_json::from_str(record).map_err(|e| e.to_string())?;
    if project.name.trim().is_empty() {
        return Err("project name is empty".to_string());
    }
    Ok(project)
}

/// Name of a table in the current project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableName(String);

impl TableName {
    /// Normalizes one entry of the dashboard's `tables` array.
    ///
    /// A sequence stands for its first element; anything else is its scalar text.
    pub fn from_entry(entry: &Value) -> Self {
        let name = match entry {
            Value::Array(items) => items.first().map(scalar_text).unwrap_or_default(),
            other => scalar_text(other),
        };
        TableName(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TableName {
    fn from(name: String) -> Self {
        TableName(name)
    }
}

impl From<&str> for TableName {
    fn from(name: &str) -> Self {
        TableName(name.to_string())
    }
}

impl std::fmt::Display for TableName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for TableName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Normalizes a whole `tables` array.
pub fn normalize_tables(entries: &[Value]) -> Vec<TableName> {
    entries.iter().map(TableName::from_entry).collect()
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(scalar_text)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

/// `created_at` arrives either as RFC 3339 or as a naive UTC timestamp.
mod timestamp {
    use serde::{Deserialize, Deserializer, Serializer, de, ser};
    use time::{
        OffsetDateTime, PrimitiveDateTime, format_description::BorrowedFormatItem,
        format_description::well_known::Rfc3339, macros::format_description,
    };

    const NAIVE_SPACE: &[BorrowedFormatItem<'static>] = format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]]"
    );
    const NAIVE_T: &[BorrowedFormatItem<'static>] = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
    );

    pub(super) fn parse(text: &str) -> Option<OffsetDateTime> {
        if let Ok(parsed) = OffsetDateTime::parse(text, &Rfc3339) {
            return Some(parsed);
        }
        [NAIVE_SPACE, NAIVE_T]
            .into_iter()
            .find_map(|format| PrimitiveDateTime::parse(text, format).ok())
            .map(PrimitiveDateTime::assume_utc)
    }

    pub fn serialize<S: Serializer>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        let text = value.format(&Rfc3339).map_err(<S::Error as ser::Error>::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<OffsetDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse(&text).ok_or_else(|| de::Error::custom(format!("unrecognised timestamp {text:?}")))
    }
}

/// Parses a project timestamp in any accepted shape.
pub fn parse_timestamp(text: &str) -> Option<OffsetDateTime> {
    timestamp::parse(text)
}
