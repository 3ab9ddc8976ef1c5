use cloudsign_core::utils::non_blank;
use cloudsign_core::Context;

/// Region from `AWS_REGION`.
pub const AWS_REGION: &str = "AWS_REGION";
/// Region fallback from `AWS_DEFAULT_REGION`.
pub const AWS_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";
/// Endpoint override from `AWS_ENDPOINT_URL`.
pub const AWS_ENDPOINT_URL: &str = "AWS_ENDPOINT_URL";

/// Config carries the settings a [`Client`](crate::Client) needs besides
/// credentials.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// `region` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_REGION`]
    /// - env value: [`AWS_DEFAULT_REGION`]
    pub region: Option<String>,
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_ENDPOINT_URL`]
    ///
    /// When unset the endpoint is derived from the service host template.
    pub endpoint: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set region
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set endpoint, for example `http://127.0.0.1:9000`.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Load config from env.
    ///
    /// Fields that are already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = non_blank(ctx.env_var(AWS_REGION))
            .or_else(|| non_blank(ctx.env_var(AWS_DEFAULT_REGION)))
        {
            self.region.get_or_insert(v);
        }
        if let Some(v) = non_blank(ctx.env_var(AWS_ENDPOINT_URL)) {
            self.endpoint.get_or_insert(v);
        }

        self
    }
}
