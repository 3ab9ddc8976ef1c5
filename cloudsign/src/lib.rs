//! Signed HTTP client for cloud storage and database APIs.
//!
//! `cloudsign` bundles the signing crates behind one dependency and adds a
//! small generic [`Client`] that builds, signs and sends requests for a
//! service described by a [`ServiceDescriptor`].
//!
//! ```no_run
//! use cloudsign::{default_context, Client, Config, JsonCodec, ServiceDescriptor};
//! use serde_json::{json, Value};
//!
//! # async fn run() -> cloudsign::Result<()> {
//! let ctx = default_context();
//! let config = Config::default().from_env(&ctx);
//! let client = Client::new(ctx, config, ServiceDescriptor::dynamodb(), JsonCodec)?;
//!
//! let tables: Value = client.call("ListTables", &json!({})).await?;
//! println!("{tables}");
//! # Ok(())
//! # }
//! ```

pub use cloudsign_core::*;

/// AWS SigV4 signing.
pub mod aws {
    pub use cloudsign_aws_v4::*;
}

mod codec;
pub use codec::{Codec, JsonCodec};

mod config;
pub use config::Config;

mod service;
pub use service::{EndpointStrategy, ServiceDescriptor};

mod client;
pub use client::Client;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;
