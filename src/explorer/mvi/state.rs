/// Marker trait for UI state objects.
///
/// States are cloned to publish, compared to detect changes, and start
/// from `Default`.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
