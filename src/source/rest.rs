use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use crate::model::Country;
use crate::source::{CountrySource, Fetched, SourceError};

/// Fields requested from the `/all` and `/name` endpoints.
const FIELDS_QUERY: &str = "fields=name,cca2,flags,idd,region,population";

/// Connection settings for [`RestCountriesClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestSettings {
    /// API root, e.g. `https://restcountries.com/v3.1`.
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for RestSettings {
    fn default() -> Self {
        Self {
            base_url: "https://restcountries.com/v3.1".to_string(),
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

/// Client for the REST Countries v3.1 API.
pub struct RestCountriesClient {
    client: Client,
    base_url: Url,
}

impl RestCountriesClient {
    pub fn new(settings: RestSettings) -> Result<Self, SourceError> {
        let base_url = Url::parse(&settings.base_url).map_err(|_| SourceError::InvalidUrl {
            url: settings.base_url.clone(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(SourceError::InvalidUrl {
                url: settings.base_url,
            });
        }

        let client = Client::builder()
            .timeout(settings.timeout)
            .connect_timeout(settings.connect_timeout)
            .build()
            .map_err(SourceError::Client)?;

        Ok(Self { client, base_url })
    }

    /// Build `{base_url}/{segments...}?fields=...`, percent-encoding each
    /// segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, SourceError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| SourceError::InvalidUrl {
                url: self.base_url.to_string(),
            })?;
            path.pop_if_empty().extend(segments);
        }
        url.set_query(Some(FIELDS_QUERY));
        Ok(url)
    }

    async fn get(&self, url: Url, not_found_is_empty: bool) -> Result<Vec<Country>, SourceError> {
        tracing::debug!(url = %url, "fetching countries");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| SourceError::Request {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND && not_found_is_empty {
            tracing::debug!(url = %url, "no countries matched");
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(|e| SourceError::Request {
            url: url.to_string(),
            source: e,
        })?;
        let raw: Vec<RawCountry> =
            serde_json::from_slice(&body).map_err(|e| SourceError::Decode {
                url: url.to_string(),
                source: e,
            })?;

        let countries: Vec<Country> = raw.into_iter().map(Country::from).collect();
        tracing::debug!(url = %url, count = countries.len(), "fetched countries");
        Ok(countries)
    }
}

impl CountrySource for RestCountriesClient {
    async fn fetch_all(&self) -> Result<Fetched, SourceError> {
        let url = self.endpoint(&["all"])?;
        self.get(url, false).await.map(Fetched::live)
    }

    async fn search(&self, term: &str) -> Result<Fetched, SourceError> {
        if term.is_empty() {
            return self.fetch_all().await;
        }
        let url = self.endpoint(&["name", term])?;
        self.get(url, true).await.map(Fetched::live)
    }
}

// Wire shape of a v3.1 country record. Everything is optional so a sparse
// record degrades to missing fields instead of failing the whole list.
#[derive(Debug, Deserialize)]
struct RawCountry {
    #[serde(default)]
    name: Option<RawName>,
    #[serde(default)]
    cca2: Option<String>,
    #[serde(default)]
    flags: Option<RawFlags>,
    #[serde(default)]
    idd: Option<RawIdd>,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    population: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RawName {
    #[serde(default)]
    common: Option<String>,
    #[serde(default)]
    official: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawFlags {
    #[serde(default)]
    svg: Option<String>,
    #[serde(default)]
    png: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawIdd {
    #[serde(default)]
    root: Option<String>,
    #[serde(default)]
    suffixes: Vec<String>,
}

impl From<RawCountry> for Country {
    fn from(raw: RawCountry) -> Self {
        let code = raw.cca2.unwrap_or_default();
        let (name, official_name) = match raw.name {
            Some(n) => (n.common.unwrap_or_default(), n.official),
            None => (String::new(), None),
        };

        // Dialing prefix is root + first suffix ("+4" + "4"); without a root
        // the country code stands in.
        let calling_code = raw
            .idd
            .and_then(|idd| {
                let root = idd.root.filter(|r| !r.is_empty())?;
                let suffix = idd.suffixes.into_iter().next().unwrap_or_default();
                Some(format!("{root}{suffix}"))
            })
            .or_else(|| (!code.is_empty()).then(|| code.clone()));

        Country {
            code,
            name,
            official_name,
            region: raw.region,
            population: raw.population,
            flag_url: raw.flags.and_then(|f| f.svg.or(f.png)),
            calling_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> RestCountriesClient {
        RestCountriesClient::new(RestSettings {
            base_url: base.to_string(),
            ..RestSettings::default()
        })
        .unwrap()
    }

    #[test]
    fn endpoint_appends_segments_to_base_path() {
        let url = client("https://restcountries.com/v3.1").endpoint(&["all"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://restcountries.com/v3.1/all?fields=name,cca2,flags,idd,region,population"
        );
    }

    #[test]
    fn endpoint_handles_bare_host_and_trailing_slash() {
        let bare = client("http://127.0.0.1:9000").endpoint(&["all"]).unwrap();
        assert_eq!(bare.path(), "/all");
        let slashed = client("http://127.0.0.1:9000/v3.1/").endpoint(&["all"]).unwrap();
        assert_eq!(slashed.path(), "/v3.1/all");
    }

    #[test]
    fn endpoint_percent_encodes_search_terms() {
        let url = client("http://127.0.0.1:9000")
            .endpoint(&["name", "côte d/ivoire"])
            .unwrap();
        assert_eq!(url.path(), "/name/c%C3%B4te%20d%2Fivoire");
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let result = RestCountriesClient::new(RestSettings {
            base_url: "not a url".to_string(),
            ..RestSettings::default()
        });
        assert!(matches!(result, Err(SourceError::InvalidUrl { .. })));
    }

    #[test]
    fn maps_full_record() {
        let raw: RawCountry = serde_json::from_str(
            r#"{
                "name": {
                    "common": "United Kingdom",
                    "official": "United Kingdom of Great Britain and Northern Ireland"
                },
                "cca2": "GB",
                "flags": {
                    "png": "https://flagcdn.com/w320/gb.png",
                    "svg": "https://flagcdn.com/gb.svg"
                },
                "idd": {"root": "+4", "suffixes": ["4"]},
                "region": "Europe",
                "population": 67215293
            }"#,
        )
        .unwrap();
        let country = Country::from(raw);
        assert_eq!(country.code, "GB");
        assert_eq!(country.name, "United Kingdom");
        assert_eq!(country.calling_code.as_deref(), Some("+44"));
        assert_eq!(country.flag_url.as_deref(), Some("https://flagcdn.com/gb.svg"));
        assert_eq!(country.population, Some(67215293));
    }

    #[test]
    fn calling_code_falls_back_to_country_code() {
        let raw: RawCountry =
            serde_json::from_str(r#"{"name": {"common": "Antarctica"}, "cca2": "AQ", "idd": {}}"#)
                .unwrap();
        assert_eq!(Country::from(raw).calling_code.as_deref(), Some("AQ"));
    }

    #[test]
    fn sparse_record_maps_to_empty_name() {
        let raw: RawCountry = serde_json::from_str("{}").unwrap();
        let country = Country::from(raw);
        assert!(country.name.is_empty());
        assert_eq!(country.calling_code, None);
        assert_eq!(country.flag_url, None);
    }
}
