use crate::explorer::mvi::Intent;
use crate::model::SortDirection;
use crate::source::Fetched;

#[derive(Debug, Clone)]
pub enum ExplorerIntent {
    /// Filter text changed. Moves back to the first page when it differs.
    SetFilter(String),
    /// Sort direction changed. Moves back to the first page when it differs.
    SetSort(SortDirection),
    /// Jump to a page. Not clamped.
    SetPage(usize),
    NextPage,
    PrevPage,
    /// Rows per page changed. Zero is ignored.
    SetPageSize(usize),
    /// A fetch was started. `term` is the upstream search term, if any.
    RequestIssued { token: u64, term: Option<String> },
    /// A fetch finished. Ignored unless `token` is the latest issued.
    Loaded { token: u64, fetched: Fetched },
    /// A fetch failed. Ignored unless `token` is the latest issued.
    LoadFailed { token: u64, message: String },
}

impl Intent for ExplorerIntent {}
