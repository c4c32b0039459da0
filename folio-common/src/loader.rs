//! Data document loading
//!
//! The document maps year labels to arrays of project objects:
//!
//! ```json
//! { "2024": [ { "Project": "A", "Date": "01/03/2024" } ],
//!   "2025": [ { "Project": "B", "Date": "2025-02-10" } ] }
//! ```
//!
//! Loading flattens the groups into one sequence (each record tagged with its
//! group key as `Year`) and sorts it once by date, newest first. The result is
//! the master sequence; filtering only ever subtracts from it.

use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;

use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::records::ProjectRecord;
use crate::{Error, Result};

/// Shown in place of the gallery when loading fails
pub const LOAD_ERROR_MESSAGE: &str = "Error loading data.";

/// Shown in place of the gallery when the document holds no records
pub const EMPTY_MESSAGE: &str = "No projects found.";

/// Where the data document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// Interpret a user-supplied location: `http(s)://` prefixes are URLs,
    /// everything else is a file path
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            DataSource::Url(trimmed.to_string())
        } else {
            DataSource::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => f.write_str(url),
        }
    }
}

/// Outcome of the one-time load
///
/// `Empty` and `Unavailable` are terminal display states; nothing retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Catalog {
    Ready(Vec<ProjectRecord>),
    Empty,
    Unavailable,
}

impl Catalog {
    /// Wrap a loaded sequence, mapping an empty one to `Catalog::Empty`
    pub fn from_records(records: Vec<ProjectRecord>) -> Self {
        if records.is_empty() {
            Catalog::Empty
        } else {
            Catalog::Ready(records)
        }
    }

    /// Master record sequence (empty for fallback states)
    pub fn records(&self) -> &[ProjectRecord] {
        match self {
            Catalog::Ready(records) => records,
            Catalog::Empty | Catalog::Unavailable => &[],
        }
    }

    /// Message to show instead of the gallery, if any
    pub fn fallback_message(&self) -> Option<&'static str> {
        match self {
            Catalog::Ready(_) => None,
            Catalog::Empty => Some(EMPTY_MESSAGE),
            Catalog::Unavailable => Some(LOAD_ERROR_MESSAGE),
        }
    }

    /// Short status label for API responses
    pub fn status(&self) -> &'static str {
        match self {
            Catalog::Ready(_) => "ready",
            Catalog::Empty => "empty",
            Catalog::Unavailable => "error",
        }
    }
}

/// Fetch and parse the raw JSON document
pub async fn fetch_document(source: &DataSource) -> Result<Value> {
    match source {
        DataSource::File(path) => {
            let bytes = tokio::fs::read(path).await?;
            Ok(serde_json::from_slice(&bytes)?)
        }
        DataSource::Url(url) => {
            let response = reqwest::get(url).await?.error_for_status()?;
            Ok(response.json::<Value>().await?)
        }
    }
}

/// Fetch, flatten and sort the document into the master sequence
pub async fn load_projects(source: &DataSource) -> Result<Vec<ProjectRecord>> {
    debug!("Loading project document from {}", source);
    let document = fetch_document(source).await?;
    let mut records = flatten_document(&document)?;
    sort_by_date(&mut records);
    Ok(records)
}

/// Load the catalog, reporting failures and mapping them to fallback states
pub async fn load_catalog(source: &DataSource) -> Catalog {
    match load_projects(source).await {
        Ok(records) => {
            let catalog = Catalog::from_records(records);
            match &catalog {
                Catalog::Ready(records) => {
                    info!("Loaded {} project records from {}", records.len(), source)
                }
                _ => warn!("Project document at {} contains no records", source),
            }
            catalog
        }
        Err(e) => {
            error!("Error loading data from {}: {}", source, e);
            Catalog::Unavailable
        }
    }
}

/// Flatten a year-keyed document into one record sequence
///
/// Groups are visited in the order a browser enumerates object keys:
/// integer-like keys ascending, then the rest in document order. Non-array
/// groups are skipped; non-object entries inside a group are skipped.
///
/// A top-level array is enumerated by index, so an array of arrays still
/// yields records. Strings, numbers and booleans have no groups and flatten
/// to nothing. Only `null` is rejected.
pub fn flatten_document(document: &Value) -> Result<Vec<ProjectRecord>> {
    let groups = year_groups(document)?;

    let mut records = Vec::new();
    for (key, group) in groups {
        let Some(entries) = group.as_array() else {
            debug!("Skipping non-array group '{}'", key);
            continue;
        };

        for (position, entry) in entries.iter().enumerate() {
            match ProjectRecord::from_json(entry) {
                Some(mut record) => {
                    record.year = Some(key.clone());
                    records.push(record);
                }
                None => warn!("Skipping non-object entry {} in group '{}'", position, key),
            }
        }
    }

    Ok(records)
}

/// Top-level keys with their values, in enumeration order
fn year_groups(document: &Value) -> Result<Vec<(String, &Value)>> {
    match document {
        Value::Object(map) => {
            let mut groups: Vec<(String, &Value)> =
                map.iter().map(|(key, value)| (key.clone(), value)).collect();
            // Stable sort keeps document order among non-index keys
            groups.sort_by(|(a, _), (b, _)| match (array_index(a), array_index(b)) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
            Ok(groups)
        }
        Value::Array(items) => Ok(items
            .iter()
            .enumerate()
            .map(|(index, value)| (index.to_string(), value))
            .collect()),
        Value::Null => Err(Error::InvalidDocument("top-level value is null".to_string())),
        Value::String(_) | Value::Number(_) | Value::Bool(_) => {
            debug!("Top-level value has no year groups");
            Ok(Vec::new())
        }
    }
}

/// Sort records by date, newest first
///
/// Dated records precede undated ones; undated records (and records sharing a
/// date) keep their relative order.
pub fn sort_by_date(records: &mut [ProjectRecord]) {
    records.sort_by_cached_key(|record| std::cmp::Reverse(record.parsed_date()));
}

/// Canonical array-index key ("0", "2024"), as JavaScript orders them first
fn array_index(key: &str) -> Option<u32> {
    let value = key.parse::<u32>().ok()?;
    if value == u32::MAX || value.to_string() != key {
        return None;
    }
    Some(value)
}
