//! Country data sources.
//!
//! The explorer never looks a source up globally: it is handed an
//! `Arc<impl CountrySource>` at construction time.

mod error;
mod fallback;
mod rest;

pub use error::SourceError;
pub use fallback::{fallback_countries, FallbackSource, WithFallback};
pub use rest::{RestCountriesClient, RestSettings};

use std::future::Future;

use crate::model::Country;

/// Where a dataset came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataOrigin {
    #[default]
    Live,
    /// The live source failed and the static sample was used instead.
    Fallback,
}

/// A dataset together with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    pub countries: Vec<Country>,
    pub origin: DataOrigin,
}

impl Fetched {
    pub fn live(countries: Vec<Country>) -> Self {
        Self {
            countries,
            origin: DataOrigin::Live,
        }
    }

    pub fn fallback(countries: Vec<Country>) -> Self {
        Self {
            countries,
            origin: DataOrigin::Fallback,
        }
    }
}

/// An asynchronous provider of countries.
pub trait CountrySource: Send + Sync + 'static {
    /// Fetch the whole directory.
    fn fetch_all(&self) -> impl Future<Output = Result<Fetched, SourceError>> + Send;

    /// Fetch countries whose name matches `term`. An empty term behaves
    /// like [`CountrySource::fetch_all`].
    fn search(&self, term: &str) -> impl Future<Output = Result<Fetched, SourceError>> + Send;
}
