//! Cross-check against the AWS SDK signer.

use super::{credential, fixed_time, ACCESS_KEY, SECRET_KEY};
use anyhow::Result;
use aws_credential_types::Credentials;
use aws_sigv4::http_request::{
    PayloadChecksumKind, PercentEncodingMode, SignableBody, SignableRequest, SigningSettings,
};
use aws_sigv4::sign::v4;
use cloudsign_aws_v4::{Credential, RequestSigner};
use cloudsign_core::{Context, SignRequest};
use http::{header, HeaderValue, Request};
use pretty_assertions::assert_eq;
use std::time::SystemTime;

/// (name, request_builder)
type TestCase = (&'static str, fn() -> Request<&'static str>);

fn test_cases() -> Vec<TestCase> {
    vec![
        ("get_request", test_get_request),
        ("get_request_with_sse", test_get_request_with_sse),
        ("get_request_with_query", test_get_request_with_query),
        ("get_request_virtual_host", test_get_request_virtual_host),
        ("put_request", test_put_request),
        ("put_request_virtual_host", test_put_request_virtual_host),
    ]
}

fn test_get_request() -> Request<&'static str> {
    let mut req = Request::new("");
    *req.method_mut() = http::Method::GET;
    *req.uri_mut() = "http://127.0.0.1:9000/hello"
        .parse()
        .expect("url must be valid");

    req
}

fn test_get_request_with_sse() -> Request<&'static str> {
    let mut req = test_get_request();
    for (k, v) in [
        ("x-amz-server-side-encryption", "a"),
        ("x-amz-server-side-encryption-customer-algorithm", "b"),
        ("x-amz-server-side-encryption-customer-key", "c"),
        ("x-amz-server-side-encryption-customer-key-md5", "d"),
    ] {
        req.headers_mut()
            .insert(k, v.parse().expect("must be valid"));
    }

    req
}

fn test_get_request_with_query() -> Request<&'static str> {
    let mut req = Request::new("");
    *req.method_mut() = http::Method::GET;
    *req.uri_mut() =
        "http://127.0.0.1:9000/hello?list-type=2&max-keys=3&prefix=CI/&start-after=ExampleGuide.pdf"
            .parse()
            .expect("url must be valid");

    req
}

fn test_get_request_virtual_host() -> Request<&'static str> {
    let mut req = Request::new("");
    *req.method_mut() = http::Method::GET;
    *req.uri_mut() = "http://hello.s3.test.example.com"
        .parse()
        .expect("url must be valid");

    req
}

fn test_put_request() -> Request<&'static str> {
    let content = "Hello,World!";
    let mut req = Request::new(content);
    *req.method_mut() = http::Method::PUT;
    *req.uri_mut() = "http://127.0.0.1:9000/hello"
        .parse()
        .expect("url must be valid");

    req.headers_mut().insert(
        header::CONTENT_LENGTH,
        HeaderValue::from_str(&content.len().to_string()).expect("must be valid"),
    );

    req
}

fn test_put_request_virtual_host() -> Request<&'static str> {
    let mut req = test_put_request();
    *req.uri_mut() = "http://hello.s3.test.example.com"
        .parse()
        .expect("url must be valid");

    req
}

/// Authorization produced by aws-sigv4 for the same request.
fn expected_authorization(
    req_fn: fn() -> Request<&'static str>,
    token: Option<&str>,
) -> Result<String> {
    let mut req = req_fn();

    let mut ss = SigningSettings::default();
    ss.percent_encoding_mode = PercentEncodingMode::Single;
    ss.payload_checksum_kind = PayloadChecksumKind::XAmzSha256;
    let id = Credentials::new(
        ACCESS_KEY,
        SECRET_KEY,
        token.map(|v| v.to_string()),
        None,
        "hardcoded-credentials",
    )
    .into();
    let sp = v4::SigningParams::builder()
        .identity(&id)
        .region("test")
        .name("s3")
        .time(SystemTime::from(fixed_time()))
        .settings(ss)
        .build()
        .expect("signing params must be valid");

    let output = aws_sigv4::http_request::sign(
        SignableRequest::new(
            req.method().as_str(),
            req.uri().to_string(),
            req.headers()
                .iter()
                .map(|(k, v)| (k.as_str(), std::str::from_utf8(v.as_bytes()).unwrap())),
            SignableBody::Bytes(req.body().as_bytes()),
        )
        .unwrap(),
        &sp.into(),
    )?;
    let (aws_sig, _) = output.into_parts();

    aws_sig.apply_to_request_http1x(&mut req);
    Ok(req.headers()[header::AUTHORIZATION]
        .to_str()?
        .to_string())
}

fn actual_authorization(req: Request<&'static str>, cred: &Credential) -> Result<String> {
    let (mut parts, body) = req.into_parts();

    RequestSigner::new("s3", "test")
        .with_time(fixed_time())
        .sign_request(&Context::new(), &mut parts, Some(body.as_bytes()), cred)?;

    Ok(parts.headers[header::AUTHORIZATION].to_str()?.to_string())
}

#[test]
fn test_matches_aws_sigv4() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    for (name, req_fn) in test_cases() {
        let expected = expected_authorization(req_fn, None)?;
        let actual = actual_authorization(req_fn(), &credential())?;
        assert_eq!(expected, actual, "{name} authorization mismatch");
    }

    Ok(())
}

#[test]
fn test_matches_aws_sigv4_with_token() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    for (name, req_fn) in test_cases() {
        let expected = expected_authorization(req_fn, Some("security_token"))?;
        let actual =
            actual_authorization(req_fn(), &credential().with_session_token("security_token"))?;
        assert_eq!(expected, actual, "{name} authorization mismatch");
    }

    Ok(())
}
