use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One normalized row of a detected table.
///
/// Keys are normalized header names in header order; `IndexMap` keeps
/// iteration deterministic and gives last-wins semantics when two headers
/// normalize to the same key. Values stay trimmed strings; `None` is the
/// wire form of an absent cell.
pub type Record = IndexMap<String, Option<String>>;

/// Which shape a raw answer was classified as. A result is never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseKind {
    Percentage,
    Tabular,
}

/// The shaped form of one raw answer, serialized for the frontend as
/// `{"response": .., "percentage"?: .., "data"?: [..]}`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct StructuredResult {
    /// The trimmed raw answer, always present.
    pub response: String,
    /// Present only for percentage-style answers: the verbatim text
    /// carrying the percentage signal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<String>,
    /// Present only for tabular answers. An empty list is a valid table
    /// with zero usable rows.
    #[serde(rename = "data", skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<Record>>,
}

impl StructuredResult {
    /// Build a percentage-style result. The whole trimmed text is the
    /// percentage payload.
    pub fn percentage(text: String) -> Self {
        Self {
            response: text.clone(),
            percentage: Some(text),
            records: None,
        }
    }

    /// Build a tabular result from already-extracted records.
    pub fn tabular(text: String, records: Vec<Record>) -> Self {
        Self {
            response: text,
            percentage: None,
            records: Some(records),
        }
    }

    pub fn kind(&self) -> ResponseKind {
        if self.percentage.is_some() {
            ResponseKind::Percentage
        } else {
            ResponseKind::Tabular
        }
    }
}

/// Body of `POST /process-query`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ProcessQueryRequest {
    pub query: String,
}
