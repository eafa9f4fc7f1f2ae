//! Orchestration around the derivation engine.
//!
//! [`ExplorerReducer`] owns the query parameters and the page-reset
//! policy. [`Explorer`] drives it from async fetches, debouncing searches
//! and dropping responses that a newer request has superseded.

mod controller;
mod intent;
pub mod mvi;
mod reducer;
mod state;

pub use controller::{Explorer, ExplorerSettings};
pub use intent::ExplorerIntent;
pub use reducer::ExplorerReducer;
pub use state::{ExplorerState, LoadState};
