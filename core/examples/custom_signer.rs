use cloudsign_core::hash::hex_hmac_sha256;
use cloudsign_core::time::{format_iso8601, now};
use cloudsign_core::utils::{non_blank, Redact};
use cloudsign_core::{
    Context, OsEnv, ProvideCredential, Result, SignRequest, Signer, SigningCredential,
    SigningRequest,
};
use http::request::Parts;
use std::fmt::{Debug, Formatter};

// Define a custom credential type
#[derive(Clone)]
struct MyCredential {
    api_key: String,
    api_secret: String,
}

impl Debug for MyCredential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MyCredential")
            .field("api_key", &Redact::from(&self.api_key))
            .field("api_secret", &Redact::from(&self.api_secret))
            .finish()
    }
}

impl SigningCredential for MyCredential {
    fn is_valid(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

// Implement a credential loader that loads from environment
#[derive(Debug)]
struct MyCredentialLoader;

impl ProvideCredential for MyCredentialLoader {
    type Credential = MyCredential;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let api_key = non_blank(ctx.env_var("MY_API_KEY"));
        let api_secret = non_blank(ctx.env_var("MY_API_SECRET"));

        Ok(match (api_key, api_secret) {
            (Some(api_key), Some(api_secret)) => Some(MyCredential {
                api_key,
                api_secret,
            }),
            _ => {
                println!("MY_API_KEY/MY_API_SECRET not set, using demo credential");
                Some(MyCredential {
                    api_key: "demo-key".to_string(),
                    api_secret: "demo-secret".to_string(),
                })
            }
        })
    }
}

// Sign `METHOD\nPATH\nTIMESTAMP` with HMAC-SHA256.
#[derive(Debug)]
struct MyRequestSigner;

impl SignRequest for MyRequestSigner {
    type Credential = MyCredential;

    fn sign_request(
        &self,
        _: &Context,
        req: &mut Parts,
        _: Option<&[u8]>,
        cred: &Self::Credential,
    ) -> Result<()> {
        let mut signing_req = SigningRequest::build(req)?;

        let timestamp = format_iso8601(now());
        let string_to_sign = format!("{}\n{}\n{}", signing_req.method, signing_req.path, timestamp);
        let signature = hex_hmac_sha256(cred.api_secret.as_bytes(), string_to_sign.as_bytes())?;

        signing_req
            .headers
            .insert("x-my-date", timestamp.parse()?);
        signing_req.headers.insert(
            http::header::AUTHORIZATION,
            format!("MY-HMAC key={}, signature={}", cred.api_key, signature).parse()?,
        );

        signing_req.apply(req)
    }
}

fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    let ctx = Context::new().with_env(OsEnv);
    let signer = Signer::new(ctx, MyCredentialLoader, MyRequestSigner);

    let mut parts = http::Request::get("https://api.example.com/v1/items")
        .body(())?
        .into_parts()
        .0;
    signer.sign(&mut parts, None)?;

    for (name, value) in parts.headers.iter() {
        println!("{name}: {value:?}");
    }

    Ok(())
}
