use cloudsign_core::{Context, OsEnv};
use cloudsign_http_send_reqwest::ReqwestHttpSend;

/// A [`Context`] reading the process environment and sending requests with
/// a default reqwest client.
pub fn default_context() -> Context {
    Context::new()
        .with_env(OsEnv)
        .with_http_send(ReqwestHttpSend::default())
}
