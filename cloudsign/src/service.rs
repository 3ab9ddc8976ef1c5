/// How requests for a service are laid out on the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EndpointStrategy {
    /// Objects addressed as `/<bucket>/<key>`, as S3 path-style requests.
    PathStyle,
    /// Every operation is a `POST /` with the operation named in
    /// `x-amz-target: <target_prefix>.<operation>` and a JSON body.
    JsonTarget {
        /// Prefix of the `x-amz-target` value, like `DynamoDB_20120810`.
        target_prefix: String,
        /// Content type of request bodies, like `application/x-amz-json-1.0`.
        content_type: String,
    },
}

/// ServiceDescriptor names a service and tells the client how to reach it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceDescriptor {
    name: String,
    host_template: String,
    strategy: EndpointStrategy,
}

impl ServiceDescriptor {
    /// Host template used when none is given: `{service}.{region}.amazonaws.com`.
    pub const DEFAULT_HOST_TEMPLATE: &'static str = "{service}.{region}.amazonaws.com";

    /// Create a descriptor with the default host template.
    ///
    /// `name` is also the service name in the signing scope.
    pub fn new(name: impl Into<String>, strategy: EndpointStrategy) -> Self {
        Self {
            name: name.into(),
            host_template: Self::DEFAULT_HOST_TEMPLATE.to_string(),
            strategy,
        }
    }

    /// Replace the host template. `{service}` and `{region}` are substituted.
    pub fn with_host_template(mut self, template: impl Into<String>) -> Self {
        self.host_template = template.into();
        self
    }

    /// Amazon S3 with path-style addressing.
    pub fn s3() -> Self {
        Self::new("s3", EndpointStrategy::PathStyle)
    }

    /// Amazon DynamoDB JSON protocol.
    pub fn dynamodb() -> Self {
        Self::new(
            "dynamodb",
            EndpointStrategy::JsonTarget {
                target_prefix: "DynamoDB_20120810".to_string(),
                content_type: "application/x-amz-json-1.0".to_string(),
            },
        )
    }

    /// Service name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Endpoint strategy.
    pub fn strategy(&self) -> &EndpointStrategy {
        &self.strategy
    }

    /// Expand the host template for `region`.
    pub fn host(&self, region: &str) -> String {
        self.host_template
            .replace("{service}", &self.name)
            .replace("{region}", region)
    }
}
