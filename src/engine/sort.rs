use crate::engine::collation::compare_names;
use crate::model::{Listable, SortDirection};

/// Return a copy of `items` ordered by display name.
///
/// The sort is stable: items with equal names keep their relative order in
/// both directions. Missing names compare as the empty string.
pub fn sort_items<T: Listable + Clone>(items: &[T], direction: SortDirection) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_names(
            a.display_name().unwrap_or_default(),
            b.display_name().unwrap_or_default(),
        );
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}
