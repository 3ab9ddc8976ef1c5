use crate::{Codec, Config, EndpointStrategy, ServiceDescriptor};
use bytes::Bytes;
use cloudsign_aws_v4::{Credential, DefaultCredentialProvider, RequestSigner, AWS_URI_ENCODE_SET};
use cloudsign_core::{Context, Error, ProvideCredential, Result, Signer};
use http::header::CONTENT_TYPE;
use http::uri::PathAndQuery;
use http::{HeaderValue, Method, Request, Response, Uri};
use log::debug;
use percent_encoding::utf8_percent_encode;
use serde::de::DeserializeOwned;
use serde::Serialize;

const X_AMZ_TARGET: &str = "x-amz-target";

/// Client builds, signs and sends requests for one service.
///
/// Credentials are resolved on every request through a
/// [`DefaultCredentialProvider`]: registered providers first, then the
/// environment, then the property store.
#[derive(Debug, Clone)]
pub struct Client<C: Codec> {
    ctx: Context,
    region: String,
    endpoint: Option<String>,
    descriptor: ServiceDescriptor,
    codec: C,

    loader: DefaultCredentialProvider,
    builder: RequestSigner,
    signer: Signer<Credential>,
}

impl<C: Codec> Client<C> {
    /// Create a new client.
    ///
    /// Fails with [`ErrorKind::ConfigInvalid`](cloudsign_core::ErrorKind::ConfigInvalid)
    /// if no region is configured.
    pub fn new(
        ctx: Context,
        config: Config,
        descriptor: ServiceDescriptor,
        codec: C,
    ) -> Result<Self> {
        let region = config
            .region
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| Error::config_invalid("region is required to sign requests"))?;

        let loader = DefaultCredentialProvider::new();
        let builder = RequestSigner::new(descriptor.name(), &region);
        let signer = Signer::new(ctx.clone(), loader.clone(), builder.clone());

        Ok(Self {
            ctx,
            region,
            endpoint: config.endpoint,
            descriptor,
            codec,

            loader,
            builder,
            signer,
        })
    }

    /// Register a credential provider consulted before every built-in source.
    ///
    /// The last registered provider is consulted first.
    pub fn with_credential_provider(
        mut self,
        provider: impl ProvideCredential<Credential = Credential>,
    ) -> Self {
        self.loader = self.loader.register(provider);
        self.signer = Signer::new(self.ctx.clone(), self.loader.clone(), self.builder.clone());
        self
    }

    /// Region requests are signed for.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Service descriptor of this client.
    pub fn descriptor(&self) -> &ServiceDescriptor {
        &self.descriptor
    }

    /// Parse the endpoint, either the configured one or the one derived from
    /// the service host template.
    pub fn endpoint(&self) -> Result<Uri> {
        let raw = match &self.endpoint {
            Some(v) => v.clone(),
            None => format!("https://{}", self.descriptor.host(&self.region)),
        };

        let uri: Uri = raw.parse().map_err(|e| {
            Error::endpoint_invalid(format!("invalid endpoint {raw}")).with_source(e)
        })?;
        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(Error::endpoint_invalid(format!(
                "endpoint {raw} must be an absolute url"
            )));
        }
        Ok(uri)
    }

    /// Build an unsigned object request: `<endpoint>/<bucket>/<key>`.
    ///
    /// Only available for [`EndpointStrategy::PathStyle`] services.
    pub fn object_request(
        &self,
        method: Method,
        bucket: &str,
        key: &str,
        body: Bytes,
    ) -> Result<Request<Bytes>> {
        if self.descriptor.strategy() != &EndpointStrategy::PathStyle {
            return Err(Error::request_invalid(format!(
                "service {} does not address objects by path",
                self.descriptor.name()
            )));
        }
        if bucket.is_empty() {
            return Err(Error::request_invalid("bucket must not be empty"));
        }

        let mut path = format!("/{}", utf8_percent_encode(bucket, &AWS_URI_ENCODE_SET));
        if !key.is_empty() {
            let key = key
                .split('/')
                .map(|segment| utf8_percent_encode(segment, &AWS_URI_ENCODE_SET).to_string())
                .collect::<Vec<_>>()
                .join("/");
            path.push('/');
            path.push_str(&key);
        }

        let uri = self.uri_with_path(&path)?;
        Ok(Request::builder().method(method).uri(uri).body(body)?)
    }

    /// Build an unsigned operation request carrying `input` as its body.
    ///
    /// Only available for [`EndpointStrategy::JsonTarget`] services.
    pub fn target_request<I: Serialize + ?Sized>(
        &self,
        operation: &str,
        input: &I,
    ) -> Result<Request<Bytes>> {
        let EndpointStrategy::JsonTarget {
            target_prefix,
            content_type,
        } = self.descriptor.strategy()
        else {
            return Err(Error::request_invalid(format!(
                "service {} does not accept targeted operations",
                self.descriptor.name()
            )));
        };

        let body = self.codec.encode(input)?;
        let uri = self.uri_with_path("/")?;
        Ok(Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, HeaderValue::from_str(content_type)?)
            .header(
                X_AMZ_TARGET,
                HeaderValue::from_str(&format!("{target_prefix}.{operation}"))?,
            )
            .body(body)?)
    }

    /// Sign `req` and send it through the context's transport.
    ///
    /// The response is returned whatever its status.
    pub async fn send(&self, req: Request<Bytes>) -> Result<Response<Bytes>> {
        let (mut parts, body) = req.into_parts();
        self.signer.sign(&mut parts, Some(&body))?;

        debug!(
            "sending {} {} to service {}",
            parts.method,
            parts.uri,
            self.descriptor.name()
        );
        let resp = self
            .ctx
            .http_send(Request::from_parts(parts, body))
            .await?;
        debug!("got response status: {}", resp.status());

        Ok(resp)
    }

    /// Invoke `operation` with `input` and decode the output.
    ///
    /// A non-2xx response fails with
    /// [`ErrorKind::Unexpected`](cloudsign_core::ErrorKind::Unexpected)
    /// carrying the status and the response body.
    pub async fn call<I, O>(&self, operation: &str, input: &I) -> Result<O>
    where
        I: Serialize + ?Sized,
        O: DeserializeOwned,
    {
        let req = self.target_request(operation, input)?;
        let resp = self.send(req).await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::unexpected(format!(
                "{operation} failed with status {status}: {}",
                String::from_utf8_lossy(resp.body())
            )));
        }

        self.codec.decode(resp.body())
    }

    /// Endpoint with its path replaced, keeping any base path of a
    /// configured endpoint.
    fn uri_with_path(&self, path: &str) -> Result<Uri> {
        let endpoint = self.endpoint()?;
        let base = endpoint.path().trim_end_matches('/').to_string();

        let mut parts = endpoint.into_parts();
        let full = match (base.is_empty(), path) {
            (true, _) => path.to_string(),
            (false, "/") => format!("{base}/"),
            (false, _) => format!("{base}{path}"),
        };
        parts.path_and_query = Some(PathAndQuery::try_from(full)?);
        Ok(Uri::from_parts(parts)?)
    }
}
