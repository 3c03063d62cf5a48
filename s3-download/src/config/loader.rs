/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_credential_types::Credentials;

use crate::config::Builder;
use crate::Config;

/// Load downloader [`Config`] from the environment.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    credentials: Option<Credentials>,
    endpoint_url: Option<String>,
}

impl ConfigLoader {
    /// Use an explicit access key / secret key pair.
    ///
    /// When not set, credentials are resolved through the default provider
    /// chain of the environment (env vars, profile, IMDS, ...).
    pub fn credentials(
        mut self,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials::new(
            access_key.into(),
            secret_key.into(),
            None,
            None,
            "StaticCredentials",
        ));
        self
    }

    /// Override the service endpoint URL.
    ///
    /// Useful for S3-compatible stores and non-default regional endpoints. The
    /// override applies before any request is sent.
    pub fn endpoint_url(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint.into());
        self
    }

    /// Load the default configuration
    ///
    /// If fields have been overridden during builder construction, the override values will be
    /// used. Otherwise, the default values for each field will be provided.
    pub async fn load(self) -> Config {
        let mut loader = aws_config::from_env();
        if let Some(credentials) = self.credentials {
            loader = loader.credentials_provider(credentials);
        }
        if let Some(endpoint) = self.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let shared_config = loader.load().await;
        let s3_client = aws_sdk_s3::Client::new(&shared_config);
        Builder::default().client(s3_client).build()
    }
}
