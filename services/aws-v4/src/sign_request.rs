use crate::canonical::{body_hash, canonical_header_names, canonical_request_string};
use crate::constants::{
    ALGORITHM, SCHEME, STREAMING_PAYLOAD_PREFIX, TERMINATOR, UNSIGNED_PAYLOAD,
    X_AMZ_CONTENT_SHA_256, X_AMZ_DATE, X_AMZ_SECURITY_TOKEN,
};
use crate::Credential;
use cloudsign_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use cloudsign_core::time::{format_date, format_iso8601, now, DateTime};
use cloudsign_core::{Context, Result, SignRequest, SigningRequest};
use http::request::Parts;
use http::{header, HeaderValue};
use log::debug;

/// RequestSigner that implement AWS SigV4.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
#[derive(Debug, Clone)]
pub struct RequestSigner {
    service: String,
    region: String,

    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new builder for AWS V4 signer.
    pub fn new(service: &str, region: &str) -> Self {
        Self {
            service: service.into(),
            region: region.into(),

            time: None,
        }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing or replaying a known signature.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Service name used in the scope.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Region used in the scope.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Stage the signing headers on `req` and return the `Authorization`
    /// value.
    ///
    /// The caller is expected to insert the returned value, which is what
    /// [`SignRequest::sign_request`] does.
    pub fn compute(
        &self,
        req: &mut SigningRequest,
        body: Option<&[u8]>,
        cred: &Credential,
    ) -> Result<String> {
        let now = self.time.unwrap_or_else(now);
        let timestamp = format_iso8601(now);
        let date = format_date(now);

        canonicalize_header(req, body, cred, &timestamp)?;

        let payload_hash = req
            .headers
            .get(X_AMZ_CONTENT_SHA_256)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .unwrap_or_else(|| body_hash(body));

        let creq = canonical_request_string(
            &req.method,
            &req.path,
            &req.query,
            &req.headers,
            &payload_hash,
        )?;
        debug!("calculated canonical request: {creq}");

        let scope = scope(&date, &self.region, &self.service);
        debug!("calculated scope: {scope}");

        let string_to_sign = string_to_sign(&timestamp, &scope, &creq);
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key = signing_key(cred.secret_access_key(), &date, &self.region, &self.service)?;
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes())?;

        Ok(authorization(
            cred.access_key_id(),
            &scope,
            &canonical_header_names(&req.headers),
            &signature,
        ))
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(
        &self,
        _: &Context,
        req: &mut Parts,
        body: Option<&[u8]>,
        credential: &Self::Credential,
    ) -> Result<()> {
        let mut signed_req = SigningRequest::build(req)?;

        let value = self.compute(&mut signed_req, body, credential)?;
        let mut authorization = HeaderValue::from_str(&value)?;
        authorization.set_sensitive(true);
        signed_req
            .headers
            .insert(header::AUTHORIZATION, authorization);

        // Apply to the request.
        signed_req.apply(req)
    }
}

fn canonicalize_header(
    req: &mut SigningRequest,
    body: Option<&[u8]>,
    cred: &Credential,
    timestamp: &str,
) -> Result<()> {
    // A previous signature must never sign itself.
    req.headers.remove(header::AUTHORIZATION);

    // Insert HOST header if not present.
    if req.headers.get(header::HOST).is_none() {
        req.headers
            .insert(header::HOST, req.authority.as_str().parse()?);
    }

    // Insert X_AMZ_SECURITY_TOKEN header if security token exists, drop a
    // token left behind by an earlier signature otherwise.
    match cred.session_token().filter(|_| cred.is_temporary()) {
        Some(token) => {
            let mut value = HeaderValue::from_str(token.trim())?;
            // Set token value sensitive to avoid leaking.
            value.set_sensitive(true);

            req.headers.insert(X_AMZ_SECURITY_TOKEN, value);
        }
        None => {
            req.headers.remove(X_AMZ_SECURITY_TOKEN);
        }
    }

    // Payload sentinels set by the caller are kept, any other value is
    // replaced by the hash of the body being signed.
    let is_sentinel = req
        .headers
        .get(X_AMZ_CONTENT_SHA_256)
        .is_some_and(|v| is_payload_sentinel(v.as_bytes()));
    if !is_sentinel {
        req.headers
            .insert(X_AMZ_CONTENT_SHA_256, body_hash(body).parse()?);
    }

    req.headers.insert(X_AMZ_DATE, timestamp.parse()?);

    Ok(())
}

fn is_payload_sentinel(value: &[u8]) -> bool {
    value == UNSIGNED_PAYLOAD.as_bytes() || value.starts_with(STREAMING_PAYLOAD_PREFIX.as_bytes())
}

/// Credential scope: `<date>/<region>/<service>/aws4_request`.
pub fn scope(date: &str, region: &str, service: &str) -> String {
    format!("{date}/{region}/{service}/{TERMINATOR}")
}

/// StringToSign:
///
/// ```text
/// AWS4-HMAC-SHA256
/// 20220313T072004Z
/// 20220313/<region>/<service>/aws4_request
/// <hashed_canonical_request>
/// ```
pub fn string_to_sign(timestamp: &str, scope: &str, canonical_request: &str) -> String {
    format!(
        "{ALGORITHM}\n{timestamp}\n{scope}\n{}",
        hex_sha256(canonical_request.as_bytes())
    )
}

/// Derive the signing key through the HMAC chain.
pub fn signing_key(secret: &str, date: &str, region: &str, service: &str) -> Result<Vec<u8>> {
    // Sign secret
    let secret = format!("{SCHEME}{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), date.as_bytes())?;
    // Sign region
    let sign_region = hmac_sha256(&sign_date, region.as_bytes())?;
    // Sign service
    let sign_service = hmac_sha256(&sign_region, service.as_bytes())?;
    // Sign request
    hmac_sha256(&sign_service, TERMINATOR.as_bytes())
}

/// Render the `Authorization` header value.
pub fn authorization(
    access_key_id: &str,
    scope: &str,
    signed_headers: &str,
    signature: &str,
) -> String {
    format!(
        "{ALGORITHM} Credential={access_key_id}/{scope}, SignedHeaders={signed_headers}, Signature={signature}"
    )
}
