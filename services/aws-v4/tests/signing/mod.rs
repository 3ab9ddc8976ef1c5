mod aws_sigv4;
mod live;
mod verifier;

use chrono::{DateTime, TimeZone, Utc};
use cloudsign_aws_v4::{Credential, RequestSigner};
use cloudsign_core::{Context, SignRequest};
use http::request::Parts;
use http::Request;

pub const ACCESS_KEY: &str = "AKIDEXAMPLE";
pub const SECRET_KEY: &str = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";

/// 2015-08-30T12:36:00Z, the timestamp used throughout the SigV4 test suite.
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2015, 8, 30, 12, 36, 0)
        .single()
        .expect("time must be valid")
}

pub fn credential() -> Credential {
    Credential::new(ACCESS_KEY, SECRET_KEY)
}

/// Sign `req` with a fixed clock and hand back the signed parts.
pub fn sign(
    signer: &RequestSigner,
    req: Request<&'static str>,
    cred: &Credential,
) -> (Parts, &'static str) {
    let _ = env_logger::builder().is_test(true).try_init();

    let (mut parts, body) = req.into_parts();
    signer
        .sign_request(&Context::new(), &mut parts, Some(body.as_bytes()), cred)
        .expect("sign request must succeed");
    (parts, body)
}

/// Split an `Authorization` value into (credential, signed headers, signature).
pub fn parse_authorization(value: &str) -> (String, String, String) {
    let rest = value
        .strip_prefix("AWS4-HMAC-SHA256 ")
        .expect("authorization must start with the algorithm");

    let mut credential = String::new();
    let mut signed_headers = String::new();
    let mut signature = String::new();
    for item in rest.split(", ") {
        let (k, v) = item.split_once('=').expect("item must be key=value");
        match k {
            "Credential" => credential = v.to_string(),
            "SignedHeaders" => signed_headers = v.to_string(),
            "Signature" => signature = v.to_string(),
            _ => panic!("unexpected authorization item: {item}"),
        }
    }

    (credential, signed_headers, signature)
}
