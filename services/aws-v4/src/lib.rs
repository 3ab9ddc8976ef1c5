//! AWS SigV4 signing for cloudsign.
//!
//! ## Example
//!
//! ```
//! use cloudsign_aws_v4::{DefaultCredentialProvider, RequestSigner, StaticCredentialProvider};
//! use cloudsign_core::{Context, OsEnv, Result, Signer};
//!
//! # fn main() -> Result<()> {
//! let ctx = Context::new().with_env(OsEnv);
//! let loader = DefaultCredentialProvider::new()
//!     .register(StaticCredentialProvider::new("AKIDEXAMPLE", "secret"));
//! let signer = Signer::new(ctx, loader, RequestSigner::new("s3", "us-east-1"));
//!
//! let mut parts = http::Request::get("https://examplebucket.s3.amazonaws.com/test.txt")
//!     .body(())?
//!     .into_parts()
//!     .0;
//! signer.sign(&mut parts, None)?;
//! assert!(parts.headers.contains_key("authorization"));
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::*;

mod credential;
pub use credential::Credential;

pub mod canonical;

mod sign_request;
pub use sign_request::{authorization, scope, signing_key, string_to_sign, RequestSigner};

mod provide_credential;
pub use provide_credential::*;
