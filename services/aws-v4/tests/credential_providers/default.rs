use super::create_test_context_with_env;
use cloudsign_aws_v4::{
    Credential, DefaultCredentialProvider, StaticCredentialProvider, AWS_ACCESS_KEY_ID,
    AWS_SECRET_ACCESS_KEY,
};
use cloudsign_core::{Context, Error, ErrorKind, ProvideCredential, Result, StaticProperties};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug)]
struct BrokenProvider;

impl ProvideCredential for BrokenProvider {
    type Credential = Credential;

    fn provide_credential(&self, _: &Context) -> Result<Option<Credential>> {
        Err(Error::unexpected("credential endpoint is unreachable"))
    }
}

/// Hands out a new key pair on every call, like a rotating secret store.
#[derive(Debug, Default)]
struct RotatingProvider {
    calls: Arc<AtomicUsize>,
}

impl ProvideCredential for RotatingProvider {
    type Credential = Credential;

    fn provide_credential(&self, _: &Context) -> Result<Option<Credential>> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Some(Credential::new(
            format!("rotating_access_key_{n}"),
            "rotating_secret_key",
        )))
    }
}

#[test]
fn test_erroring_provider_is_skipped() {
    let ctx = create_test_context_with_env(&[
        (AWS_ACCESS_KEY_ID, "env_access_key"),
        (AWS_SECRET_ACCESS_KEY, "env_secret_key"),
    ]);

    let cred = DefaultCredentialProvider::new()
        .register(BrokenProvider)
        .resolve(&ctx)
        .expect("resolve must succeed");
    assert_eq!("env_access_key", cred.access_key_id());
}

#[test]
fn test_last_registered_provider_wins() {
    let ctx = create_test_context_with_env(&[]);

    let cred = DefaultCredentialProvider::new()
        .register(StaticCredentialProvider::new("first", "first_secret"))
        .register(BrokenProvider)
        .register(StaticCredentialProvider::new("last", "last_secret"))
        .resolve(&ctx)
        .expect("resolve must succeed");
    assert_eq!("last", cred.access_key_id());
}

#[test]
fn test_properties_are_last_resort() {
    let ctx = create_test_context_with_env(&[(AWS_ACCESS_KEY_ID, "only_access_key")])
        .with_properties(
            StaticProperties::default()
                .with_property("aws.accessKeyId", "prop_access_key")
                .with_property("aws.secretKey", "prop_secret_key"),
        );

    let cred = DefaultCredentialProvider::new()
        .resolve(&ctx)
        .expect("resolve must succeed");
    assert_eq!("prop_access_key", cred.access_key_id());
}

#[test]
fn test_resolution_is_not_cached() {
    let calls = Arc::new(AtomicUsize::new(0));
    let loader = DefaultCredentialProvider::new().register(RotatingProvider {
        calls: calls.clone(),
    });
    let ctx = create_test_context_with_env(&[]);

    let first = loader.resolve(&ctx).expect("resolve must succeed");
    let second = loader.resolve(&ctx).expect("resolve must succeed");

    assert_eq!("rotating_access_key_0", first.access_key_id());
    assert_eq!("rotating_access_key_1", second.access_key_id());
    assert_eq!(2, calls.load(Ordering::SeqCst));
}

#[test]
fn test_no_credentials() {
    let ctx = create_test_context_with_env(&[(AWS_SECRET_ACCESS_KEY, "secret_only")]);

    let err = DefaultCredentialProvider::new()
        .register(BrokenProvider)
        .resolve(&ctx)
        .expect_err("resolve must fail");
    assert_eq!(ErrorKind::NoCredentials, err.kind());
}
