use crate::{Context, ProvideCredential, Result, SigningCredential};
use std::fmt::{self, Debug};
use std::sync::Arc;

/// Walk `providers` in order and return the first valid credential.
///
/// - A provider returning `Ok(None)` or an invalid credential is skipped.
/// - A provider returning an error is logged and skipped.
fn first_valid_credential<'a, C: SigningCredential>(
    ctx: &Context,
    providers: impl IntoIterator<Item = &'a dyn ProvideCredential<Credential = C>>,
) -> Result<Option<C>> {
    for provider in providers {
        log::debug!("trying credential provider: {provider:?}");

        match provider.provide_credential(ctx) {
            Ok(Some(cred)) if cred.is_valid() => {
                log::debug!("loaded credential from provider: {provider:?}");
                return Ok(Some(cred));
            }
            Ok(Some(_)) => {
                log::debug!("credential from provider {provider:?} is empty, skipped");
            }
            Ok(None) => {
                log::debug!("no credential found in provider: {provider:?}");
            }
            Err(e) => {
                log::warn!("error loading credential from provider {provider:?}: {e:?}");
            }
        }
    }

    Ok(None)
}

/// A chain of credential providers that will be tried in order.
///
/// Providers are shared, so cloning a chain is cheap.
pub struct ProvideCredentialChain<C> {
    providers: Vec<Arc<dyn ProvideCredential<Credential = C>>>,
}

impl<C: SigningCredential> ProvideCredentialChain<C> {
    /// Create a new empty credential provider chain.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Append a credential provider to the end of the chain.
    pub fn push(mut self, provider: impl ProvideCredential<Credential = C>) -> Self {
        self.providers.push(Arc::new(provider));
        self
    }

    /// Insert a credential provider at the beginning of the chain.
    pub fn push_front(mut self, provider: impl ProvideCredential<Credential = C>) -> Self {
        self.providers.insert(0, Arc::new(provider));
        self
    }

    /// Check if this chain is empty.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Number of providers in this chain.
    pub fn len(&self) -> usize {
        self.providers.len()
    }
}

impl<C: SigningCredential> Default for ProvideCredentialChain<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for ProvideCredentialChain<C> {
    fn clone(&self) -> Self {
        Self {
            providers: self.providers.clone(),
        }
    }
}

impl<C> Debug for ProvideCredentialChain<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvideCredentialChain")
            .field("providers", &self.providers)
            .finish()
    }
}

impl<C: SigningCredential> ProvideCredential for ProvideCredentialChain<C> {
    type Credential = C;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        first_valid_credential(ctx, self.providers.iter().map(|p| p.as_ref()))
    }
}
