// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::{Error, Result};
use bytes::Bytes;
use std::collections::HashMap;
use std::fmt::Debug;
use std::path::Path;
use std::sync::Arc;

/// Context provides the environment that credential sources and clients
/// read from.
///
/// ## Important
///
/// cloudsign provides NO default implementations. Any unconfigured component
/// uses a no-op implementation that returns errors or empty values when called.
///
/// ## Example
///
/// ```
/// use cloudsign_core::{Context, OsEnv, StaticProperties};
///
/// let ctx = Context::new()
///     .with_env(OsEnv)
///     .with_properties(StaticProperties::default().with_property("aws.accessKeyId", "AKID"));
/// assert_eq!(ctx.property("aws.accessKeyId").as_deref(), Some("AKID"));
/// ```
#[derive(Clone)]
pub struct Context {
    env: Arc<dyn Env>,
    props: Arc<StaticProperties>,
    http: Arc<dyn HttpSend>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("env", &self.env)
            .field("properties_count", &self.props.len())
            .field("http", &self.http)
            .finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new Context with no-op implementations.
    pub fn new() -> Self {
        Self {
            env: Arc::new(NoopEnv),
            props: Arc::new(StaticProperties::default()),
            http: Arc::new(NoopHttpSend),
        }
    }

    /// Replace the environment implementation.
    pub fn with_env(mut self, env: impl Env) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Replace the property store.
    pub fn with_properties(mut self, props: StaticProperties) -> Self {
        self.props = Arc::new(props);
        self
    }

    /// Replace the HTTP client implementation.
    pub fn with_http_send(mut self, http: impl HttpSend) -> Self {
        self.http = Arc::new(http);
        self
    }

    /// Get the environment variable.
    ///
    /// - Returns `Some(v)` if the environment variable is found and is valid utf-8.
    /// - Returns `None` if the environment variable is not found or value is invalid.
    #[inline]
    pub fn env_var(&self, key: &str) -> Option<String> {
        self.env.var(key)
    }

    /// Get a configuration property such as `aws.accessKeyId`.
    #[inline]
    pub fn property(&self, key: &str) -> Option<String> {
        self.props.get(key).map(|v| v.to_string())
    }

    /// Send http request and return the response.
    #[inline]
    pub async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.http.http_send(req).await
    }
}

/// HttpSend is the transport boundary used by clients to send signed requests.
///
/// Retries, pooling and TLS are the implementation's business.
#[async_trait::async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send http request and return the response.
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>>;
}

/// Permits parameterizing environment lookups.
pub trait Env: Debug + Send + Sync + 'static {
    /// Get an environment variable.
    ///
    /// - Returns `Some(v)` if the environment variable is found and is valid utf-8.
    /// - Returns `None` if the environment variable is not found or value is invalid.
    fn var(&self, key: &str) -> Option<String>;
}

/// Implements Env for the OS context.
#[derive(Debug, Copy, Clone)]
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key)?.into_string().ok()
    }
}

/// StaticEnv provides a static env environment.
///
/// This is useful for testing or for providing a fixed environment.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    /// The environment variables to use.
    pub envs: HashMap<String, String>,
}

impl Env for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.envs.get(key).cloned()
    }
}

/// StaticProperties is an immutable `key=value` configuration store.
///
/// Properties are loaded once during setup, either programmatically or from
/// `key=value` text. Keys inside an `[section]` are exposed as
/// `section.key`, so both of the following define `aws.accessKeyId`:
///
/// ```text
/// aws.accessKeyId = AKIDEXAMPLE
///
/// [aws]
/// accessKeyId = AKIDEXAMPLE
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticProperties {
    props: HashMap<String, String>,
}

impl StaticProperties {
    /// Add a property, replacing any previous value of the same key.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Parse properties from `key=value` text.
    pub fn from_ini_str(content: &str) -> Result<Self> {
        let conf = ini::Ini::load_from_str(content).map_err(|e| {
            Error::config_invalid("failed to parse properties").with_source(e)
        })?;
        Ok(Self::from_ini(&conf))
    }

    /// Load properties from a `key=value` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conf = ini::Ini::load_from_file(path).map_err(|e| {
            Error::config_invalid(format!(
                "failed to load properties from {}",
                path.display()
            ))
            .with_source(e)
        })?;
        Ok(Self::from_ini(&conf))
    }

    fn from_ini(conf: &ini::Ini) -> Self {
        let mut props = HashMap::new();
        for (section, kvs) in conf.iter() {
            for (k, v) in kvs.iter() {
                let key = match section {
                    Some(section) => format!("{section}.{k}"),
                    None => k.to_string(),
                };
                props.insert(key, v.to_string());
            }
        }
        Self { props }
    }

    /// Get property value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.props.get(key).map(|v| v.as_str())
    }

    /// Number of properties in the store.
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

/// NoopHttpSend is a no-op implementation that always returns an error.
///
/// This is used when no HTTP client is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHttpSend;

#[async_trait::async_trait]
impl HttpSend for NoopHttpSend {
    async fn http_send(&self, _req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        Err(Error::unexpected(
            "HTTP sending not supported: no HTTP client configured",
        ))
    }
}

/// NoopEnv is a no-op implementation that always returns None.
///
/// This is used when no environment is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEnv;

impl Env for NoopEnv {
    fn var(&self, _key: &str) -> Option<String> {
        None
    }
}
