//! Example of registering custom credential providers ahead of the built-in
//! environment and properties sources.

use cloudsign_aws_v4::{
    Credential, DefaultCredentialProvider, RequestSigner, StaticCredentialProvider,
};
use cloudsign_core::{Context, OsEnv, ProvideCredential, Result, Signer, StaticProperties};

/// A custom credential provider that reads from an in-house secret store.
#[derive(Debug)]
struct VaultCredentialProvider {
    path: String,
}

impl ProvideCredential for VaultCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        println!("Loading credential from vault path {}", self.path);
        Ok(ctx
            .env_var("VAULT_AWS_ACCESS_KEY")
            .zip(ctx.env_var("VAULT_AWS_SECRET_KEY"))
            .map(|(ak, sk)| Credential::new(ak, sk)))
    }
}

fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    let ctx = Context::new().with_env(OsEnv).with_properties(
        StaticProperties::default()
            .with_property("aws.accessKeyId", "AKIDPROPERTIES")
            .with_property("aws.secretKey", "properties-secret"),
    );

    // Consulted newest first: vault, then the static fallback, then the
    // environment, then the properties above.
    let loader = DefaultCredentialProvider::new()
        .register(StaticCredentialProvider::new(
            "AKIDSTATICFALLBACK",
            "static-secret",
        ))
        .register(VaultCredentialProvider {
            path: "secret/aws/prod".to_string(),
        });

    let cred = loader.resolve(&ctx)?;
    println!("Resolved credential: {cred:?}");

    let signer = Signer::new(ctx, loader, RequestSigner::new("s3", "us-east-1"));
    let (mut parts, _) = http::Request::get("https://examplebucket.s3.amazonaws.com/test.txt")
        .body(())?
        .into_parts();
    signer.sign(&mut parts, None)?;
    println!("Authorization header: {:?}", parts.headers["authorization"]);

    Ok(())
}
