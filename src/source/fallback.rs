use crate::engine::filter_items;
use crate::model::Country;
use crate::source::{CountrySource, Fetched, SourceError};

/// The fixed sample substituted when the live source is unavailable.
pub fn fallback_countries() -> Vec<Country> {
    const ROWS: [(&str, &str, &str, &str, u64, &str); 12] = [
        (
            "GB",
            "United Kingdom",
            "United Kingdom of Great Britain and Northern Ireland",
            "Europe",
            67_215_293,
            "+44",
        ),
        ("US", "United States", "United States of America", "Americas", 329_484_123, "+1"),
        ("CA", "Canada", "Canada", "Americas", 38_005_238, "+1"),
        ("AU", "Australia", "Commonwealth of Australia", "Oceania", 25_499_884, "+61"),
        ("DE", "Germany", "Federal Republic of Germany", "Europe", 83_240_525, "+49"),
        ("FR", "France", "French Republic", "Europe", 67_391_582, "+33"),
        ("IT", "Italy", "Italian Republic", "Europe", 60_461_826, "+39"),
        ("ES", "Spain", "Kingdom of Spain", "Europe", 47_351_567, "+34"),
        ("JP", "Japan", "Japan", "Asia", 125_836_021, "+81"),
        ("BR", "Brazil", "Federative Republic of Brazil", "Americas", 212_559_409, "+55"),
        ("IN", "India", "Republic of India", "Asia", 1_380_004_385, "+91"),
        ("CN", "China", "People's Republic of China", "Asia", 1_439_323_776, "+86"),
    ];

    ROWS.iter()
        .map(|&(code, name, official, region, population, calling_code)| Country {
            code: code.to_string(),
            name: name.to_string(),
            official_name: Some(official.to_string()),
            region: Some(region.to_string()),
            population: Some(population),
            flag_url: Some(format!("https://flagcdn.com/{}.svg", code.to_ascii_lowercase())),
            calling_code: Some(calling_code.to_string()),
        })
        .collect()
}

fn search_fallback(term: &str) -> Vec<Country> {
    let countries = fallback_countries();
    filter_items(&countries, term).into_iter().cloned().collect()
}

/// A source that only ever serves the static sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackSource;

impl CountrySource for FallbackSource {
    async fn fetch_all(&self) -> Result<Fetched, SourceError> {
        Ok(Fetched::fallback(fallback_countries()))
    }

    async fn search(&self, term: &str) -> Result<Fetched, SourceError> {
        Ok(Fetched::fallback(search_fallback(term)))
    }
}

/// Wraps a source and substitutes the static sample whenever it fails.
///
/// The returned [`Fetched::origin`] tells callers which one they got.
#[derive(Debug, Clone)]
pub struct WithFallback<S> {
    inner: S,
}

impl<S> WithFallback<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: CountrySource> CountrySource for WithFallback<S> {
    async fn fetch_all(&self) -> Result<Fetched, SourceError> {
        match self.inner.fetch_all().await {
            Ok(fetched) => Ok(fetched),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    kind = err.kind(),
                    "live fetch failed, using fallback data"
                );
                Ok(Fetched::fallback(fallback_countries()))
            }
        }
    }

    async fn search(&self, term: &str) -> Result<Fetched, SourceError> {
        match self.inner.search(term).await {
            Ok(fetched) => Ok(fetched),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    kind = err.kind(),
                    term,
                    "live search failed, using fallback data"
                );
                Ok(Fetched::fallback(search_fallback(term)))
            }
        }
    }
}
