use crate::{Context, Result};
use http::request::Parts;
use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is usable for signing.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential is the trait used by signer to load the credential from
/// a single source.
///
/// - If succeed, return `Ok(Some(cred))`
/// - If the source has nothing to offer, return `Ok(None)`
/// - If unexpected errors happened, return `Err(err)`
///
/// Loading is synchronous: sources are simple lookups against the [`Context`].
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load credential from current context.
    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest is the trait used by signer to sign the request in place.
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this signer.
    type Credential: Send + Sync + Unpin + 'static;

    /// Sign the request.
    ///
    /// `body` is the raw payload that will be sent with `req`. `None` means the
    /// request carries no payload at all, which is distinct from `Some(&[])`.
    ///
    /// Implementations stage their headers into `req` and finish by inserting
    /// the `Authorization` header.
    fn sign_request(
        &self,
        ctx: &Context,
        req: &mut Parts,
        body: Option<&[u8]>,
        credential: &Self::Credential,
    ) -> Result<()>;
}
