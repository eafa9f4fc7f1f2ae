/// A record the derivation engine can filter and sort.
///
/// The engine only ever looks at the display name. Everything else on the
/// implementing type is passthrough.
pub trait Listable {
    /// Stable unique identifier, used as a row key by front ends.
    fn id(&self) -> &str;

    /// Human-readable name used for filtering and sorting.
    ///
    /// `None` means the record has no usable name: it never matches a
    /// non-empty filter and sorts as the empty string.
    fn display_name(&self) -> Option<&str>;
}

impl<T: Listable + ?Sized> Listable for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn display_name(&self) -> Option<&str> {
        (**self).display_name()
    }
}
