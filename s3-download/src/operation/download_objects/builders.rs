/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error;

use super::{DownloadObjectsInputBuilder, DownloadObjectsOutput};

/// Fluent builder for constructing a multiple object download transfer
#[derive(Debug)]
pub struct DownloadObjectsFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: DownloadObjectsInputBuilder,
}

impl DownloadObjectsFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Initiate the download transfer and drive it to completion
    pub async fn send(self) -> Result<DownloadObjectsOutput, error::Error> {
        let input = self.inner.build()?;
        crate::operation::download_objects::DownloadObjects::orchestrate(self.handle, input).await
    }

    /// Set the bucket name containing the object(s) to download.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the bucket name containing the object(s) to download.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket name containing the object(s).
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Set the local path to download to.
    ///
    /// A path whose final character is the path separator is treated as a
    /// directory target and created if absent.
    pub fn destination(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.destination(input);
        self
    }

    /// Set the local path to download to.
    pub fn set_destination(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_destination(input);
        self
    }

    /// The local path to download to.
    pub fn get_destination(&self) -> &Option<String> {
        self.inner.get_destination()
    }

    /// Limit the transfer to keys that begin with the given prefix.
    pub fn source(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.source(input);
        self
    }

    /// Limit the transfer to keys that begin with the given prefix.
    pub fn set_source(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_source(input);
        self
    }

    /// The key prefix to match.
    pub fn get_source(&self) -> &Option<String> {
        self.inner.get_source()
    }

    /// Strip the source prefix from resulting local relative paths.
    pub fn relative(mut self, input: bool) -> Self {
        self.inner = self.inner.relative(input);
        self
    }

    /// Whether local relative paths are computed relative to the source prefix.
    pub fn get_relative(&self) -> bool {
        self.inner.get_relative()
    }

    /// Skip keys ending with the given suffix.
    pub fn exclude(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.exclude(input);
        self
    }

    /// Skip keys ending with the given suffix.
    pub fn set_exclude(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_exclude(input);
        self
    }

    /// Suffix used to skip unwanted keys.
    pub fn get_exclude(&self) -> &Option<String> {
        self.inner.get_exclude()
    }
}

impl crate::operation::download_objects::input::DownloadObjectsInputBuilder {
    /// Initiate a download transfer with this input using the given client.
    pub async fn send_with(
        self,
        client: &crate::Client,
    ) -> Result<DownloadObjectsOutput, error::Error> {
        let mut fluent_builder = client.download_objects();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
