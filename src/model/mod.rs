//! Data model shared by the derivation engine and its collaborators.
//!
//! - [`Listable`]: anything with a stable id and a display name
//! - [`Country`]: the concrete record served by the data sources
//! - [`QueryParams`] / [`SortDirection`]: user-controlled inputs
//! - [`DerivedView`]: the page handed back to the presentation layer

mod country;
mod item;
mod query;
mod view;

pub use country::Country;
pub use item::Listable;
pub use query::{ParseSortDirectionError, QueryParams, SortDirection, DEFAULT_PAGE_SIZE};
pub use view::DerivedView;
