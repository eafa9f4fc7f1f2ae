use serde::Serialize;

/// One page of a derivation plus its pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedView<T> {
    /// Items on the requested page, in sorted order.
    pub items: Vec<T>,
    /// Number of items after filtering, before pagination.
    pub total_count: usize,
    /// `ceil(total_count / page_size)`; zero when nothing matched.
    pub total_pages: usize,
    /// The requested page index, echoed back unclamped.
    pub page_index: usize,
}

impl<T> DerivedView<T> {
    /// True when the requested page lies past the last page.
    pub fn is_out_of_range(&self) -> bool {
        self.page_index >= self.total_pages && self.total_pages > 0
    }

    /// True when a previous page exists. An out-of-range page always has one.
    pub fn has_previous(&self) -> bool {
        self.page_index > 0 && self.total_pages > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index.saturating_add(1) < self.total_pages
    }
}
