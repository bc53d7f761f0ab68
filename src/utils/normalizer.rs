//! Normalization of raw submitted items.
//!
//! Turns an untrusted string into a [`CanonicalItem`] or rejects it. Rejection
//! is silent: the caller drops the item and only aggregate counts reflect it.
//!
//! # Rules
//!
//! 1. Whitespace is trimmed; an empty result is rejected
//! 2. Items starting with `http://` or `https://` are URLs, everything else a bare domain
//! 3. **URLs** keep `scheme://host[path]`; host is lowercased and loses `www.`,
//!    userinfo, port, query and fragment are dropped, trailing slashes are removed
//! 4. **Bare domains** are lowercased and lose scheme, path, port and `www.`
//! 5. The resulting host must satisfy [`is_valid_domain`]
//!
//! The URL path is kept exactly as submitted: no case folding, no percent
//! encoding or decoding, no dot-segment removal. The host is validated as
//! typed, so hosts the URL parser would rewrite (IDN, embedded tabs) are
//! rejected in URL form just as they are in bare form.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use url::Url;

use crate::domain::entities::CanonicalItem;

/// Compiled domain grammar: alphanumeric labels with internal hyphens and an
/// alphabetic TLD of two or more letters.
static DOMAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([a-z0-9-]*[a-z0-9])?(\.[a-z0-9]([a-z0-9-]*[a-z0-9])?)*\.[a-z]{2,}$")
        .expect("domain regex is valid")
});

const MIN_DOMAIN_LEN: usize = 4;
const MAX_DOMAIN_LEN: usize = 253;

/// Normalizes a JSON value from a submitted batch.
///
/// Anything that is not a string is rejected.
pub fn normalize_value(raw: &Value) -> Option<CanonicalItem> {
    raw.as_str().and_then(normalize_item)
}

/// Normalizes a raw item into a canonical domain or URL.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     normalize_item("https://WWW.Example-Site.COM/Page/").unwrap().as_str(),
///     "https://example-site.com/Page"
/// );
/// assert_eq!(
///     normalize_item("WWW.Example-Site.COM:8080/a/b").unwrap().as_str(),
///     "example-site.com"
/// );
/// assert!(normalize_item("not a domain").is_none());
/// ```
pub fn normalize_item(raw: &str) -> Option<CanonicalItem> {
    let item = raw.trim();
    if item.is_empty() {
        return None;
    }

    if item.starts_with("http://") || item.starts_with("https://") {
        normalize_url(item)
    } else {
        normalize_domain(item)
    }
}

/// Cleans a URL candidate, keeping its path.
fn normalize_url(input: &str) -> Option<CanonicalItem> {
    let url = Url::parse(input).ok()?;

    let scheme = match url.scheme() {
        "http" => "http",
        _ => "https",
    };

    let (raw_host, raw_path) = split_raw_url(input)?;
    let raw_host = raw_host.to_ascii_lowercase();

    // Punycoded or otherwise rewritten hosts no longer match the typed text.
    if url.host_str() != Some(raw_host.as_str()) {
        return None;
    }

    let host = strip_www(&raw_host);
    if !is_valid_domain(host) {
        return None;
    }

    let path = match raw_path {
        "" | "/" => "",
        path => path.trim_end_matches('/'),
    };

    Some(CanonicalItem::Url {
        url: format!("{scheme}://{host}{path}"),
        host: host.to_string(),
    })
}

/// Splits `scheme://[userinfo@]host[:port][path][?query][#fragment]` as typed
/// and returns `(host, path)` without any parser rewriting.
fn split_raw_url(input: &str) -> Option<(&str, &str)> {
    let (_, rest) = input.split_once("://")?;

    let authority_end = rest
        .find(|c: char| matches!(c, '/' | '?' | '#'))
        .unwrap_or(rest.len());
    let (authority, tail) = rest.split_at(authority_end);

    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host_port)| host_port);
    let host = host_port.split(':').next().unwrap_or_default();

    let path_end = tail
        .find(|c: char| matches!(c, '?' | '#'))
        .unwrap_or(tail.len());

    Some((host, &tail[..path_end]))
}

/// Cleans a bare domain candidate.
fn normalize_domain(input: &str) -> Option<CanonicalItem> {
    let lowered = input.to_lowercase();

    let without_scheme = lowered
        .strip_prefix("http://")
        .or_else(|| lowered.strip_prefix("https://"))
        .unwrap_or(&lowered);

    let host = without_scheme.split('/').next().unwrap_or_default();
    let host = host.split(':').next().unwrap_or_default();
    let host = strip_www(host);

    is_valid_domain(host).then(|| CanonicalItem::Domain(host.to_string()))
}

/// Strips every leading `www.` label so that re-normalizing is a no-op.
fn strip_www(host: &str) -> &str {
    let mut host = host;
    while let Some(rest) = host.strip_prefix("www.") {
        host = rest;
    }
    host
}

/// Checks a lowercase host against the canonical domain grammar.
pub fn is_valid_domain(domain: &str) -> bool {
    (MIN_DOMAIN_LEN..=MAX_DOMAIN_LEN).contains(&domain.len())
        && domain.contains('.')
        && DOMAIN_REGEX.is_match(domain)
}
