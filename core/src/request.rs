use crate::{Error, Result};
use http::uri::Authority;
use http::uri::PathAndQuery;
use http::uri::Scheme;
use http::HeaderMap;
use http::Method;
use http::Uri;

/// Signing context for request.
///
/// Built from `http::request::Parts` before signing and applied back once
/// the signer has staged its headers.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// HTTP authority.
    pub authority: Authority,
    /// HTTP path, as it appears on the wire.
    pub path: String,
    /// HTTP query parameters, percent decoded.
    pub query: Vec<(String, String)>,
    /// HTTP headers.
    pub headers: HeaderMap,

    path_and_query: PathAndQuery,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    ///
    /// Requests without an authority can't be signed since the host is part
    /// of every signature. `parts` is left untouched until [`apply`](Self::apply)
    /// so a failed signing never changes the caller's request.
    pub fn build(parts: &http::request::Parts) -> Result<Self> {
        // Cloning keeps `parts` intact when the uri turns out to be unsignable.
        let uri = parts.uri.clone().into_parts();
        let paq = uri
            .path_and_query
            .unwrap_or_else(|| PathAndQuery::from_static("/"));

        Ok(SigningRequest {
            method: parts.method.clone(),
            scheme: uri.scheme.unwrap_or(Scheme::HTTPS),
            authority: uri.authority.ok_or_else(|| {
                Error::endpoint_invalid("request without authority is invalid for signing")
            })?,
            path: paq.path().to_string(),
            query: paq
                .query()
                .map(|v| {
                    form_urlencoded::parse(v.as_bytes())
                        .map(|(k, v)| (k.into_owned(), v.into_owned()))
                        .collect()
                })
                .unwrap_or_default(),

            headers: parts.headers.clone(),

            path_and_query: paq,
        })
    }

    /// Apply the signing context back to http::request::Parts.
    ///
    /// The path and query are restored exactly as they were received; only
    /// headers are expected to change during signing.
    pub fn apply(self, parts: &mut http::request::Parts) -> Result<()> {
        let mut uri_parts = parts.uri.clone().into_parts();
        uri_parts.scheme = Some(self.scheme);
        uri_parts.authority = Some(self.authority);
        uri_parts.path_and_query = Some(self.path_and_query);
        let uri = Uri::from_parts(uri_parts)?;

        parts.headers = self.headers;
        parts.method = self.method;
        parts.uri = uri;

        Ok(())
    }
}
