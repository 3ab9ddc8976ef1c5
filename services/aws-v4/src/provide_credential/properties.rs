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

/// PropertiesCredentialProvider loads AWS credentials from the property
/// store carried by [`Context`].
///
/// Keys:
/// - `aws.accessKeyId`
/// - `aws.secretKey`
/// - `aws.sessionToken` (optional)
#[derive(Debug, Default, Clone)]
pub struct PropertiesCredentialProvider;

impl PropertiesCredentialProvider {
    /// Create a new PropertiesCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

impl ProvideCredential for PropertiesCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(Credential::from_parts(
            non_blank(ctx.property(ACCESS_KEY_PROPERTY)),
            non_blank(ctx.property(SECRET_KEY_PROPERTY)),
            non_blank(ctx.property(SESSION_TOKEN_PROPERTY)),
        )))
    }
}
