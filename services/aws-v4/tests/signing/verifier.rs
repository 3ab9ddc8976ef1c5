//! Server side recomputation of a signature from nothing but the signed
//! request and the secret key.

use super::{credential, fixed_time, parse_authorization, sign, SECRET_KEY};
use cloudsign_aws_v4::RequestSigner;
use hmac::{Hmac, Mac};
use http::request::Parts;
use http::{header, Request};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use pretty_assertions::assert_eq;
use sha2::{Digest, Sha256};

const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn hmac(key: &[u8], data: &str) -> Vec<u8> {
    let mut mac = Hmac::<Sha256>::new_from_slice(key).expect("hmac accepts any key length");
    mac.update(data.as_bytes());
    mac.finalize().into_bytes().to_vec()
}

/// Recompute the signature the way a verifying endpoint does.
fn recompute(parts: &Parts, body: &[u8], secret: &str) -> (String, String) {
    let authorization = parts.headers[header::AUTHORIZATION].to_str().unwrap();
    let (credential, signed_headers, _) = parse_authorization(authorization);

    let scope = credential
        .split_once('/')
        .map(|(_, scope)| scope.to_string())
        .unwrap();
    let mut scope_items = scope.split('/');
    let date = scope_items.next().unwrap();
    let region = scope_items.next().unwrap();
    let service = scope_items.next().unwrap();

    let mut query = form_urlencoded::parse(parts.uri.query().unwrap_or_default().as_bytes())
        .map(|(k, v)| {
            format!(
                "{}={}",
                utf8_percent_encode(&k, UNRESERVED),
                utf8_percent_encode(&v, UNRESERVED)
            )
        })
        .collect::<Vec<_>>();
    query.sort();

    let headers = signed_headers
        .split(';')
        .map(|name| {
            let value = parts.headers[name].to_str().unwrap();
            format!("{name}:{}\n", value.split_whitespace().collect::<Vec<_>>().join(" "))
        })
        .collect::<String>();

    let payload_hash = hex::encode(Sha256::digest(body));
    assert_eq!(parts.headers["x-amz-content-sha256"], payload_hash.as_str());

    let creq = format!(
        "{}\n{}\n{}\n{}\n{}\n{}",
        parts.method,
        parts.uri.path(),
        query.join("&"),
        headers,
        signed_headers,
        payload_hash
    );
    let sts = format!(
        "AWS4-HMAC-SHA256\n{}\n{}\n{}",
        parts.headers["x-amz-date"].to_str().unwrap(),
        scope,
        hex::encode(Sha256::digest(creq.as_bytes()))
    );

    let k_date = hmac(format!("AWS4{secret}").as_bytes(), date);
    let k_region = hmac(&k_date, region);
    let k_service = hmac(&k_region, service);
    let k_signing = hmac(&k_service, "aws4_request");

    (hex::encode(hmac(&k_signing, &sts)), signed_headers)
}

fn assert_verifies(signer: &RequestSigner, req: Request<&'static str>) {
    let (parts, body) = sign(signer, req, &credential());

    let authorization = parts.headers[header::AUTHORIZATION].to_str().unwrap();
    let (_, _, signature) = parse_authorization(authorization);
    let (expected, _) = recompute(&parts, body.as_bytes(), SECRET_KEY);
    assert_eq!(signature, expected, "signature of {} must verify", parts.uri);

    let (forged, _) = recompute(&parts, body.as_bytes(), "not-the-secret");
    assert_ne!(signature, forged);
}

#[test]
fn test_get_round_trip() {
    let signer = RequestSigner::new("examplesvc", "us-east-1").with_time(fixed_time());
    assert_verifies(
        &signer,
        Request::get("https://example.amazonaws.com/").body("").unwrap(),
    );
}

#[test]
fn test_get_with_query_round_trip() {
    let signer = RequestSigner::new("s3", "us-west-2").with_time(fixed_time());
    assert_verifies(
        &signer,
        Request::get(
            "https://bucket.s3.us-west-2.amazonaws.com/?list-type=2&max-keys=3&prefix=CI/&start-after=ExampleGuide.pdf",
        )
        .body("")
        .unwrap(),
    );
}

#[test]
fn test_put_with_headers_round_trip() {
    let signer = RequestSigner::new("s3", "us-east-1").with_time(fixed_time());
    assert_verifies(
        &signer,
        Request::put("http://127.0.0.1:9000/bucket/hello.txt")
            .header(header::CONTENT_TYPE, "text/plain")
            .header("x-amz-meta-note", "  spaced   out  ")
            .body("Hello,World!")
            .unwrap(),
    );
}

#[test]
fn test_json_target_round_trip() {
    let signer = RequestSigner::new("dynamodb", "us-east-1").with_time(fixed_time());
    assert_verifies(
        &signer,
        Request::post("https://dynamodb.us-east-1.amazonaws.com/")
            .header(header::CONTENT_TYPE, "application/x-amz-json-1.0")
            .header("x-amz-target", "DynamoDB_20120810.ListTables")
            .body("{}")
            .unwrap(),
    );
}
