use serde::{Deserialize, Serialize};

use super::item::Listable;

/// A country as served by the data sources.
///
/// Only `name` is interpreted by the engine; the rest is carried through
/// untouched for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code (e.g., "GB"). Stable row key.
    pub code: String,
    /// Common name (e.g., "United Kingdom"). Empty when upstream omitted it.
    pub name: String,
    /// Official name (e.g., "United Kingdom of Great Britain and Northern Ireland").
    #[serde(default)]
    pub official_name: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub population: Option<u64>,
    /// URL of the flag image (SVG preferred).
    #[serde(default)]
    pub flag_url: Option<String>,
    /// International dialing prefix (e.g., "+44"), or the country code when
    /// upstream has no dialing information.
    #[serde(default)]
    pub calling_code: Option<String>,
}

impl Country {
    /// Minimal country with just a code and a common name.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            official_name: None,
            region: None,
            population: None,
            flag_url: None,
            calling_code: None,
        }
    }
}

impl Listable for Country {
    fn id(&self) -> &str {
        &self.code
    }

    fn display_name(&self) -> Option<&str> {
        if self.name.is_empty() {
            None
        } else {
            Some(&self.name)
        }
    }
}
