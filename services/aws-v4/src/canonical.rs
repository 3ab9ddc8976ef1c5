//! Canonical request construction.
//!
//! ```text
//! METHOD
//! CANONICAL_PATH
//! CANONICAL_QUERY
//! CANONICAL_HEADERS (one `name:value\n` per header)
//! SIGNED_HEADER_NAMES
//! BODY_HASH_HEX
//! ```
//!
//! Every function here is pure; the output must be byte-identical to what a
//! verifying server recomputes.

use std::collections::BTreeMap;
use std::fmt::Write;

use cloudsign_core::hash::{hex_sha256, EMPTY_STRING_SHA256};
use cloudsign_core::Result;
use http::{HeaderMap, HeaderValue, Method};
use percent_encoding::{percent_decode_str, percent_encode, utf8_percent_encode};

use crate::constants::AWS_URI_ENCODE_SET;

/// Collapse a header map into `lowercased-name -> normalized value`, ordered
/// by name.
///
/// `HeaderMap` already stores names lower-cased. Repeated entries for the same
/// name keep only the last value.
fn sorted_headers(headers: &HeaderMap) -> BTreeMap<&str, String> {
    headers
        .keys()
        .map(|name| {
            let value = headers
                .get_all(name)
                .iter()
                .last()
                .map(normalize_header_value)
                .unwrap_or_default();
            (name.as_str(), value)
        })
        .collect()
}

/// Trim the value and collapse internal whitespace runs into a single space.
fn normalize_header_value(value: &HeaderValue) -> String {
    String::from_utf8_lossy(value.as_bytes())
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Signed header names: sorted, lower-cased and joined with `;`.
pub fn canonical_header_names(headers: &HeaderMap) -> String {
    sorted_headers(headers)
        .into_keys()
        .collect::<Vec<_>>()
        .join(";")
}

/// Canonical headers: `name:value\n` for every header, sorted by name.
///
/// An empty header map yields an empty string.
pub fn canonical_header_block(headers: &HeaderMap) -> String {
    let mut s = String::with_capacity(headers.len() * 32);
    for (name, value) in sorted_headers(headers) {
        s.push_str(name);
        s.push(':');
        s.push_str(&value);
        s.push('\n');
    }
    s
}

/// Canonical URI path.
///
/// Each segment is percent-decoded and encoded again with the unreserved set
/// so already-encoded paths are not double-encoded. `/` separators are kept.
pub fn canonical_path(path: &str) -> String {
    if path.is_empty() || path == "/" {
        return "/".to_string();
    }

    let encoded = path
        .split('/')
        .map(|segment| {
            let decoded: Vec<u8> = percent_decode_str(segment).collect();
            percent_encode(&decoded, &AWS_URI_ENCODE_SET).to_string()
        })
        .collect::<Vec<_>>()
        .join("/");

    if encoded.starts_with('/') {
        encoded
    } else {
        format!("/{encoded}")
    }
}

/// Canonical query string from decoded `(key, value)` pairs.
///
/// Keys and values are encoded independently, then ordered by encoded key.
/// Pairs sharing a key collapse to the last one.
pub fn canonical_query(params: &[(String, String)]) -> String {
    if params.is_empty() {
        return String::new();
    }

    let encoded: BTreeMap<String, String> = params
        .iter()
        .map(|(k, v)| {
            (
                utf8_percent_encode(k, &AWS_URI_ENCODE_SET).to_string(),
                utf8_percent_encode(v, &AWS_URI_ENCODE_SET).to_string(),
            )
        })
        .collect();

    encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Lower-case hex SHA-256 of the payload.
///
/// An absent payload hashes like an empty one.
pub fn body_hash(body: Option<&[u8]>) -> String {
    match body {
        Some(bs) => hex_sha256(bs),
        None => EMPTY_STRING_SHA256.to_string(),
    }
}

/// Assemble the canonical request string.
pub fn canonical_request_string(
    method: &Method,
    path: &str,
    query: &[(String, String)],
    headers: &HeaderMap,
    payload_hash: &str,
) -> Result<String> {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    writeln!(f, "{method}")?;
    writeln!(f, "{}", canonical_path(path))?;
    writeln!(f, "{}", canonical_query(query))?;
    writeln!(f, "{}", canonical_header_block(headers))?;
    writeln!(f, "{}", canonical_header_names(headers))?;
    write!(f, "{payload_hash}")?;

    Ok(f)
}
