use crate::provide_credential::{EnvCredentialProvider, PropertiesCredentialProvider};
use crate::Credential;
use cloudsign_core::{Context, Error, ProvideCredential, ProvideCredentialChain, Result};

/// DefaultCredentialProvider is a loader that will try to load credential via default chains.
///
/// Resolution order:
///
/// 1. Providers added via [`register`](Self::register), the most recently
///    registered one first
/// 2. Environment variables
/// 3. Properties (`aws.accessKeyId`, `aws.secretKey`, `aws.sessionToken`)
///
/// The first source that yields a non-empty credential wins. Nothing is
/// cached: every call walks the chain again so rotated credentials are
/// picked up.
#[derive(Debug, Clone)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
    registered: usize,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultCredentialProvider {
    /// Create a new `DefaultCredentialProvider` instance.
    pub fn new() -> Self {
        let chain = ProvideCredentialChain::new()
            .push(EnvCredentialProvider::new())
            .push(PropertiesCredentialProvider::new());

        Self {
            chain,
            registered: 0,
        }
    }

    /// Register a provider ahead of the built-in sources.
    ///
    /// A later registration takes priority over every earlier one.
    pub fn register(mut self, provider: impl ProvideCredential<Credential = Credential>) -> Self {
        self.chain = self.chain.push_front(provider);
        self.registered += 1;
        self
    }

    /// Number of registered providers, built-in sources excluded.
    pub fn registered_len(&self) -> usize {
        self.registered
    }

    /// Resolve the first non-empty credential.
    ///
    /// Returns [`ErrorKind::NoCredentials`](cloudsign_core::ErrorKind::NoCredentials)
    /// when every source comes back empty.
    pub fn resolve(&self, ctx: &Context) -> Result<Credential> {
        self.provide_credential(ctx)?.ok_or_else(|| {
            Error::no_credentials(
                "unable to load credentials from registered providers, environment or properties",
            )
        })
    }
}

impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx)
    }
}
