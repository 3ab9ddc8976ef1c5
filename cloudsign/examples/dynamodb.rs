use anyhow::Result;
use cloudsign::{default_context, Client, Config, JsonCodec, ServiceDescriptor};
use serde_json::{json, Value};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    let ctx = default_context();
    let config = Config::new().from_env(&ctx);
    let config = match config.region {
        Some(_) => config,
        None => config.with_region("us-east-1"),
    };

    let client = Client::new(ctx, config, ServiceDescriptor::dynamodb(), JsonCodec)?;
    println!("Endpoint: {}", client.endpoint()?);

    let req = client.target_request("ListTables", &json!({"Limit": 10}))?;
    println!("x-amz-target: {:?}", req.headers()["x-amz-target"]);

    match client.call::<_, Value>("ListTables", &json!({"Limit": 10})).await {
        Ok(tables) => println!("Tables: {tables}"),
        Err(err) => println!("ListTables failed ({}): {err}", err.kind()),
    }

    Ok(())
}
