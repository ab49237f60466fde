use serde::{Deserialize, Serialize};
use url::Url;

/// Whether a link stays on the caller's site or leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Internal,
    External,
}

/// Normalize a site address to a bare lowercase host without a `www.` prefix.
///
/// Accepts full URLs (`https://www.example.com/blog`) as well as bare hosts
/// (`example.com`). Falls back to trimming the input by hand if it cannot be
/// parsed as a URL.
pub fn normalize_host(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    // `example.com:8443` parses as a URL with scheme `example.com`
    let parsed = if input.contains("://") {
        Url::parse(input).ok()
    } else {
        None
    };

    let host = match parsed {
        Some(parsed) => parsed.host_str().map(str::to_string)?,
        None => input
            .trim_start_matches("//")
            .split(['/', '?', '#'])
            .next()
            .unwrap_or_default()
            .split(':')
            .next()
            .unwrap_or_default()
            .to_string(),
    };

    let host = host.to_ascii_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host).to_string();
    if host.is_empty() { None } else { Some(host) }
}

/// Classify an href relative to the site host.
///
/// Anything carrying a scheme (or written protocol-relative, `//host/path`)
/// is external unless it points at `site_host`. Relative paths, fragments and
/// query-only hrefs are internal. Without a site host every absolute href is
/// external.
pub fn classify_href(href: &str, site_host: Option<&str>) -> LinkKind {
    let href = href.trim();

    let absolute = if href.starts_with("//") {
        Url::parse(&format!("https:{href}")).ok()
    } else {
        Url::parse(href).ok()
    };

    let Some(url) = absolute else {
        return LinkKind::Internal;
    };

    match (site_host, url.host_str()) {
        (Some(site), Some(host)) => {
            let host = host.to_ascii_lowercase();
            let host = host.strip_prefix("www.").unwrap_or(&host);
            if host == site {
                LinkKind::Internal
            } else {
                LinkKind::External
            }
        }
        _ => LinkKind::External,
    }
}
