use anyhow::Result;
use bytes::Bytes;
use cloudsign::aws::StaticCredentialProvider;
use cloudsign::{default_context, Client, Config, JsonCodec, ServiceDescriptor};
use http::Method;

/// Upload and fetch an object against an S3 compatible endpoint.
///
/// Set `AWS_ENDPOINT_URL` to point at a local server such as minio. The
/// minio default credentials are registered ahead of the environment.
#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    let ctx = default_context();
    let config = Config::new().from_env(&ctx);
    let config = Config {
        region: config.region.or_else(|| Some("us-east-1".to_string())),
        endpoint: config
            .endpoint
            .or_else(|| Some("http://127.0.0.1:9000".to_string())),
    };

    let client = Client::new(ctx, config, ServiceDescriptor::s3(), JsonCodec)?
        .with_credential_provider(StaticCredentialProvider::new("minioadmin", "minioadmin"));

    let req = client.object_request(
        Method::PUT,
        "cloudsign",
        "hello/world.txt",
        Bytes::from_static(b"Hello, cloudsign!"),
    )?;
    let resp = client.send(req).await?;
    println!("PUT status: {}", resp.status());

    let req = client.object_request(Method::GET, "cloudsign", "hello/world.txt", Bytes::new())?;
    let resp = client.send(req).await?;
    println!("GET status: {}", resp.status());
    println!("GET body: {}", String::from_utf8_lossy(resp.body()));

    Ok(())
}
