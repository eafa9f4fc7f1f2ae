//! The list derivation engine: filter, then sort, then paginate.
//!
//! Every function here is pure. Nothing is cached between calls and the
//! source collection is never reordered in place, so it is safe to derive
//! on every keystroke.

mod collation;
mod error;
mod filter;
mod paginate;
mod sort;

pub use collation::compare_names;
pub use error::EngineError;
pub use filter::filter_items;
pub use paginate::{clamp_page_index, paginate, Page};
pub use sort::sort_items;

use crate::model::{DerivedView, Listable, QueryParams};

/// Run the full pipeline over `source` and return the requested page.
///
/// `total_count` is the number of items that survived the filter, counted
/// before pagination.
pub fn derive<T: Listable + Clone>(
    source: &[T],
    params: &QueryParams,
) -> Result<DerivedView<T>, EngineError> {
    let filtered = filter_items(source, &params.filter_text);
    let sorted = sort_items(&filtered, params.sort_direction);
    let page = paginate(&sorted, params.page_index, params.page_size)?;

    Ok(DerivedView {
        items: page.items.into_iter().cloned().collect(),
        total_count: sorted.len(),
        total_pages: page.total_pages,
        page_index: params.page_index,
    })
}
