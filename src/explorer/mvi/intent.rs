/// Marker trait for intent objects.
///
/// Intents are either user actions (typing a filter, paging) or system
/// events (a fetch finished). Reducers turn them into new states.
pub trait Intent: Send + 'static {}
