//! Core components for signing cloud API requests.
//!
//! This crate provides the foundational types and traits shared by the
//! cloudsign service crates.
//!
//! ## Overview
//!
//! - **Context**: a container holding the environment, a property store and
//!   the HTTP transport.
//! - **Traits**: credential loading ([`ProvideCredential`]) and request
//!   signing ([`SignRequest`]).
//! - **Signer**: the orchestrator that resolves credentials and signs requests.
//!
//! The whole signing path is synchronous and performs no I/O. Only the
//! [`HttpSend`] transport boundary is asynchronous.
//!
//! ## Example
//!
//! ```
//! use cloudsign_core::{Context, ProvideCredential, Result, SignRequest, Signer, SigningCredential};
//! use http::request::Parts;
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! impl ProvideCredential for MyLoader {
//!     type Credential = MyCredential;
//!
//!     fn provide_credential(&self, _: &Context) -> Result<Option<MyCredential>> {
//!         Ok(Some(MyCredential { key: "my-key".to_string() }))
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyBuilder;
//!
//! impl SignRequest for MyBuilder {
//!     type Credential = MyCredential;
//!
//!     fn sign_request(
//!         &self,
//!         _: &Context,
//!         req: &mut Parts,
//!         _: Option<&[u8]>,
//!         cred: &MyCredential,
//!     ) -> Result<()> {
//!         req.headers.insert("authorization", cred.key.parse()?);
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let signer = Signer::new(Context::new(), MyLoader, MyBuilder);
//!
//! let mut parts = http::Request::get("https://example.com")
//!     .body(())?
//!     .into_parts()
//!     .0;
//! signer.sign(&mut parts, None)?;
//! assert_eq!(parts.headers["authorization"], "my-key");
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv, StaticProperties};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod chain;
pub use chain::ProvideCredentialChain;
mod request;
pub use request::SigningRequest;
mod signer;
pub use signer::Signer;
