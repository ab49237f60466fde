//! Caller-supplied context for an analysis run

use serde::{Deserialize, Deserializer, Serialize};

use crate::url_utils::normalize_host;

/// Where the analysed content is published.
///
/// The site host decides which links count as internal. It is always passed
/// in explicitly; nothing is inferred from the environment. Without a host,
/// every absolute link is treated as external.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContext {
    #[serde(default, deserialize_with = "deserialize_host")]
    site_host: Option<String>,
}

impl SiteContext {
    /// Build a context from a host or site URL (`example.com`,
    /// `https://www.example.com/`).
    pub fn new(site: &str) -> Self {
        Self {
            site_host: normalize_host(site),
        }
    }

    /// Context with no site host.
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Normalized host, if any.
    pub fn site_host(&self) -> Option<&str> {
        self.site_host.as_deref()
    }
}

fn deserialize_host<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(normalize_host))
}
