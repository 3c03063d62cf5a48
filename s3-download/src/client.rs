/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

/// Downloader client for Amazon Simple Storage Service.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations, e.g. config, env details, etc
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Client {
    /// Creates a new client from a downloader config.
    pub fn new(config: crate::Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &crate::Config {
        &self.handle.config
    }

    /// Download objects from an Amazon S3 bucket to a local path
    ///
    /// Every object under the source prefix is downloaded when the destination
    /// is a directory; otherwise exactly the source key is downloaded to the
    /// literal destination path.
    ///
    /// Constructs a fluent builder for the
    /// [`DownloadObjects`](crate::operation::download_objects::builders::DownloadObjectsFluentBuilder) operation.
    ///
    /// # Examples
    /// ```no_run
    /// use s3_download::error::Error;
    ///
    /// async fn download_bucket(client: &s3_download::Client) -> Result<(), Error> {
    ///     let output = client
    ///         .download_objects()
    ///         .bucket("my-bucket")
    ///         .destination("/tmp/my-bucket/")
    ///         .send()
    ///         .await?;
    ///
    ///     println!("downloaded {} objects", output.objects_downloaded());
    ///     Ok(())
    /// }
    /// ```
    pub fn download_objects(
        &self,
    ) -> crate::operation::download_objects::builders::DownloadObjectsFluentBuilder {
        crate::operation::download_objects::builders::DownloadObjectsFluentBuilder::new(
            self.handle.clone(),
        )
    }
}
