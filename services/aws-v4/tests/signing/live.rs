//! Tests against a real endpoint, enabled with `CLOUDSIGN_AWS_V4_TEST=on`.

use anyhow::Result;
use bytes::Bytes;
use cloudsign_aws_v4::{DefaultCredentialProvider, RequestSigner};
use cloudsign_core::{Context, OsEnv, Signer};
use cloudsign_http_send_reqwest::ReqwestHttpSend;
use http::{Method, Request, StatusCode};
use log::{debug, warn};
use std::env;

fn init_signing_test() -> Option<(Signer<cloudsign_aws_v4::Credential>, String)> {
    let _ = env_logger::builder().is_test(true).try_init();

    if env::var("CLOUDSIGN_AWS_V4_TEST").ok().as_deref() != Some("on") {
        return None;
    }

    let region = env::var("CLOUDSIGN_AWS_V4_REGION").expect("CLOUDSIGN_AWS_V4_REGION must be set");
    let service = env::var("CLOUDSIGN_AWS_V4_SERVICE").unwrap_or_else(|_| "s3".to_string());
    let url = env::var("CLOUDSIGN_AWS_V4_URL").expect("CLOUDSIGN_AWS_V4_URL must be set");

    let ctx = Context::new()
        .with_env(OsEnv)
        .with_http_send(ReqwestHttpSend::default());
    let signer = Signer::new(
        ctx,
        DefaultCredentialProvider::new(),
        RequestSigner::new(&service, &region),
    );

    Some((signer, url))
}

async fn send(
    signer: &Signer<cloudsign_aws_v4::Credential>,
    method: Method,
    url: &str,
    body: Bytes,
) -> Result<StatusCode> {
    let (mut parts, _) = Request::builder()
        .method(method)
        .uri(url)
        .body(())?
        .into_parts();
    signer.sign(&mut parts, Some(&body))?;

    let req = Request::from_parts(parts, body);
    debug!("signed request: {req:?}");

    let resp = signer.context().http_send(req).await?;
    debug!("got response: {resp:?}");
    Ok(resp.status())
}

#[tokio::test]
async fn test_head_object() -> Result<()> {
    let Some((signer, url)) = init_signing_test() else {
        warn!("CLOUDSIGN_AWS_V4_TEST is not set, skipped");
        return Ok(());
    };

    let status = send(
        &signer,
        Method::HEAD,
        &format!("{url}/not_exist_file"),
        Bytes::new(),
    )
    .await?;
    assert_eq!(StatusCode::NOT_FOUND, status);
    Ok(())
}

#[tokio::test]
async fn test_put_object() -> Result<()> {
    let Some((signer, url)) = init_signing_test() else {
        warn!("CLOUDSIGN_AWS_V4_TEST is not set, skipped");
        return Ok(());
    };

    let status = send(
        &signer,
        Method::PUT,
        &format!("{url}/put_object_test"),
        Bytes::from_static(b"Hello, World!"),
    )
    .await?;
    assert_eq!(StatusCode::OK, status);
    Ok(())
}

#[tokio::test]
async fn test_list_bucket() -> Result<()> {
    let Some((signer, url)) = init_signing_test() else {
        warn!("CLOUDSIGN_AWS_V4_TEST is not set, skipped");
        return Ok(());
    };

    let status = send(
        &signer,
        Method::GET,
        &format!("{url}?list-type=2&delimiter=/&encoding-type=url"),
        Bytes::new(),
    )
    .await?;
    assert_eq!(StatusCode::OK, status);
    Ok(())
}
