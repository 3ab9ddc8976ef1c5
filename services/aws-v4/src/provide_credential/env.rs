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

use crate::{constants::*, Credential};
use cloudsign_core::utils::non_blank;
use cloudsign_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads AWS credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `AWS_ACCESS_KEY_ID`, falling back to `AWS_ACCESS_KEY`
/// - `AWS_SECRET_ACCESS_KEY`, falling back to `AWS_SECRET_KEY`
/// - `AWS_SESSION_TOKEN` (optional)
///
/// Values are trimmed and a blank variable counts as unset.
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let access_key_id = non_blank(ctx.env_var(AWS_ACCESS_KEY_ID))
            .or_else(|| non_blank(ctx.env_var(ALTERNATE_AWS_ACCESS_KEY)));
        let secret_access_key = non_blank(ctx.env_var(AWS_SECRET_ACCESS_KEY))
            .or_else(|| non_blank(ctx.env_var(ALTERNATE_AWS_SECRET_KEY)));
        let session_token = non_blank(ctx.env_var(AWS_SESSION_TOKEN));

        Ok(Some(Credential::from_parts(
            access_key_id,
            secret_access_key,
            session_token,
        )))
    }
}
