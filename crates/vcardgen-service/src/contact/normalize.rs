//! Field cleanup applied before values are encoded.
//!
//! Every function here is total: malformed input is returned unchanged rather
//! than reported.

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Query parameters removed from URLs.
pub const TRACKING_PARAMS: [&str; 7] = [
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "fbclid",
    "gclid",
];

/// Opening or closing markup tag. An unterminated tag runs to the end of input.
/// A `<` followed by whitespace is plain text.
#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^\s>][^>]*(?:>|$)").expect("tag pattern is valid"));

/// Converts an internationalized domain name to its ASCII form.
///
/// Implementations return `None` when the domain cannot be converted; the
/// caller then keeps the original domain.
pub trait DomainAsciiFolder: fmt::Debug {
    fn to_ascii(&self, domain: &str) -> Option<String>;
}

/// UTS #46 (punycode) folding.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdnaFolder;

impl DomainAsciiFolder for IdnaFolder {
    fn to_ascii(&self, domain: &str) -> Option<String> {
        idna::domain_to_ascii(domain).ok()
    }
}

/// Leaves domains untouched; used when punycode conversion is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFolder;

impl DomainAsciiFolder for NoopFolder {
    fn to_ascii(&self, _domain: &str) -> Option<String> {
        None
    }
}

/// ## Summary
/// Trims the value and strips markup tags.
///
/// HTML entities are not encoded; the output is a vCard text value, not HTML.
#[must_use]
pub fn sanitize(input: &str) -> String {
    TAG_PATTERN.replace_all(input.trim(), "").trim().to_string()
}

/// ## Summary
/// Normalizes an email address: the domain is folded to ASCII and lowercased,
/// the local part is kept as is.
///
/// Input that does not contain exactly one `@` is returned trimmed but
/// otherwise unchanged.
#[must_use]
pub fn normalize_email(input: &str, folder: &dyn DomainAsciiFolder) -> String {
    let trimmed = input.trim();
    let mut parts = trimmed.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return trimmed.to_string();
    };

    let domain = folder
        .to_ascii(domain)
        .unwrap_or_else(|| domain.to_string())
        .to_lowercase();

    format!("{local}@{domain}")
}

/// ## Summary
/// Normalizes a URL: forces `https` and drops tracking query parameters.
///
/// The result is `scheme://[user[:pass]@]host[:port][path][?query][#fragment]`.
/// Port, path and fragment are copied as written, so an explicit `:80` or a
/// missing path survive the scheme upgrade. The query is re-encoded only when
/// a tracking parameter is removed; otherwise it is kept verbatim. The host is
/// lowercased (and punycoded) by the parser.
///
/// A scheme-relative `//host/...` value gets `https`. A value with no host,
/// such as `example.org/about` or `mailto:...`, is returned trimmed but
/// otherwise unchanged, as is anything the parser rejects.
#[must_use]
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    let source = match trimmed.strip_prefix("//") {
        Some(rest) => Cow::Owned(format!("https://{rest}")),
        None => Cow::Borrowed(trimmed),
    };
    let Ok(mut url) = Url::parse(&source) else {
        return trimmed.to_string();
    };

    let stripped = strip_tracking_params(&mut url);
    let Some(host) = url.host_str() else {
        return trimmed.to_string();
    };
    let raw = RawParts::split(&source);

    let scheme = match url.scheme() {
        "http" => "https",
        other => other,
    };
    let query = if stripped { url.query() } else { raw.query };

    let mut out = format!("{scheme}://");
    if !url.username().is_empty() {
        out.push_str(url.username());
        if let Some(password) = url.password().filter(|p| !p.is_empty()) {
            out.push(':');
            out.push_str(password);
        }
        out.push('@');
    }
    out.push_str(host);
    if let Some(port) = raw.port {
        out.push(':');
        out.push_str(port);
    }
    out.push_str(raw.path);
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        out.push('?');
        out.push_str(query);
    }
    if let Some(fragment) = raw.fragment.filter(|f| !f.is_empty()) {
        out.push('#');
        out.push_str(fragment);
    }
    out
}

/// URL pieces exactly as they appear in the input.
struct RawParts<'a> {
    port: Option<&'a str>,
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

impl<'a> RawParts<'a> {
    fn split(source: &'a str) -> Self {
        let rest = source.split_once("://").map_or(source, |(_, rest)| rest);
        let (rest, fragment) = match rest.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (rest, None),
        };
        let (rest, query) = match rest.split_once('?') {
            Some((rest, query)) => (rest, Some(query)),
            None => (rest, None),
        };
        let (authority, path) = rest.split_at(rest.find(['/', '\\']).unwrap_or(rest.len()));

        Self {
            port: explicit_port(authority),
            path,
            query,
            fragment,
        }
    }
}

/// The digits after `host:` in an authority, if any. IPv6 hosts are bracketed.
fn explicit_port(authority: &str) -> Option<&str> {
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, hp)| hp);
    let port = match host_port.rsplit_once(']') {
        Some((_, tail)) => tail.strip_prefix(':')?,
        None => host_port.rsplit_once(':')?.1,
    };
    (!port.is_empty() && port.bytes().all(|b| b.is_ascii_digit())).then_some(port)
}

fn is_tracking_param(key: &str) -> bool {
    TRACKING_PARAMS.contains(&key)
}

/// Removes tracking parameters; returns whether the query was rewritten.
fn strip_tracking_params(url: &mut Url) -> bool {
    if !url.query_pairs().any(|(key, _)| is_tracking_param(&key)) {
        return false;
    }

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !is_tracking_param(key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(kept);
    }
    true
}

/// ## Summary
/// Keeps ASCII digits and a leading `+`; everything else is removed.
///
/// A `+` survives only when no digit has been kept before it. No length or
/// country-code checks are made.
#[must_use]
pub fn normalize_phone(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if c.is_ascii_digit() || (c == '+' && out.is_empty()) {
            out.push(c);
        }
    }
    out
}
