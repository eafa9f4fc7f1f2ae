use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page size used when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Direction in which display names are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid sort direction '{0}' (expected 'asc' or 'desc')")]
pub struct ParseSortDirectionError(pub String);

impl FromStr for SortDirection {
    type Err = ParseSortDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(ParseSortDirectionError(s.to_string())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "asc"),
            SortDirection::Descending => write!(f, "desc"),
        }
    }
}

/// User-controlled inputs to a derivation.
///
/// `page_size` must be positive; the engine rejects zero rather than
/// dividing by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    pub filter_text: String,
    pub sort_direction: SortDirection,
    pub page_index: usize,
    pub page_size: usize,
}

impl QueryParams {
    pub fn new(
        filter_text: impl Into<String>,
        sort_direction: SortDirection,
        page_index: usize,
        page_size: usize,
    ) -> Self {
        Self {
            filter_text: filter_text.into(),
            sort_direction,
            page_index,
            page_size,
        }
    }
}

impl Default for QueryParams {
    fn default() -> Self {
        Self::new("", SortDirection::Ascending, 0, DEFAULT_PAGE_SIZE)
    }
}
