use crate::{Context, Error, ProvideCredential, Result, SignRequest, SigningCredential};
use std::sync::Arc;

/// Signer is the main struct used to sign the request.
///
/// Credentials are resolved on every call and never cached, so rotated
/// credentials are picked up by the next request.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,

            loader: Arc::new(loader),
            builder: Arc::new(builder),
        }
    }

    /// Get the context used by this signer.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Resolve a usable credential from the configured provider.
    ///
    /// Returns [`ErrorKind::NoCredentials`](crate::ErrorKind::NoCredentials)
    /// if the provider yields nothing valid.
    pub fn resolve(&self) -> Result<K> {
        match self.loader.provide_credential(&self.ctx)? {
            Some(cred) if cred.is_valid() => Ok(cred),
            _ => Err(Error::no_credentials(
                "unable to load credentials from any source in the chain",
            )),
        }
    }

    /// Signing request.
    pub fn sign(&self, req: &mut http::request::Parts, body: Option<&[u8]>) -> Result<()> {
        let cred = self.resolve()?;
        self.builder.sign_request(&self.ctx, req, body, &cred)
    }
}
