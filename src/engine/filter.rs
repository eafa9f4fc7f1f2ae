use crate::model::Listable;

/// Keep the items whose display name contains `filter_text`, ignoring case.
///
/// An empty `filter_text` keeps everything. Whitespace is not trimmed, so
/// `" "` only matches names containing a space. Items without a display
/// name are dropped by any non-empty filter.
pub fn filter_items<'a, T: Listable>(source: &'a [T], filter_text: &str) -> Vec<&'a T> {
    if filter_text.is_empty() {
        return source.iter().collect();
    }

    let needle = filter_text.to_lowercase();
    source
        .iter()
        .filter(|item| {
            item.display_name()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
        })
        .collect()
}
