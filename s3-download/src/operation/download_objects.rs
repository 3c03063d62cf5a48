/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for downloading one or more objects from Amazon S3
pub use input::{DownloadObjectsInput, DownloadObjectsInputBuilder};
mod output;
/// Output type for downloading one or more objects from Amazon S3
pub use output::{DownloadObjectsOutput, DownloadObjectsOutputBuilder};

mod list_objects;
mod worker;

use std::sync::Arc;

use tokio::fs;

use crate::error;
use crate::operation::TransferContext;

/// Operation struct for downloading one or more objects from Amazon S3
#[derive(Clone, Default, Debug)]
pub(crate) struct DownloadObjects;

impl DownloadObjects {
    /// Execute a single `DownloadObjects` transfer operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: DownloadObjectsInput,
    ) -> Result<DownloadObjectsOutput, error::Error> {
        let ctx = DownloadObjectsContext::new(handle, input);
        let input = &ctx.state.input;
        let bucket = input.bucket().expect("bucket set");
        let destination = input.destination().expect("destination set");

        tracing::info!(
            "bucket: {bucket}, source: {:?}, destination: {destination}, relative: {}",
            input.source(),
            input.relative()
        );

        ensure_bucket_exists(&ctx, bucket).await?;

        // A destination with a trailing separator is a directory target and is
        // created up front. An existing directory selects listing mode either way.
        if worker::is_directory(destination) {
            fs::create_dir_all(destination).await?;
        }

        let dest_is_dir = fs::metadata(destination)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false);

        let output = if dest_is_dir {
            worker::download_all(&ctx).await?
        } else {
            worker::download_single(&ctx).await?
        };

        tracing::info!("successfully downloaded all objects");
        Ok(output)
    }
}

/// Verify the target bucket exists before attempting any transfer.
async fn ensure_bucket_exists(
    ctx: &DownloadObjectsContext,
    bucket: &str,
) -> Result<(), error::Error> {
    let result = ctx.client().head_bucket().bucket(bucket).send().await;
    match result {
        Ok(_) => Ok(()),
        Err(err) => {
            let not_found = err
                .as_service_error()
                .map(|err| err.is_not_found())
                .unwrap_or(false)
                || err
                    .raw_response()
                    .map(|resp| resp.status().as_u16() == 404)
                    .unwrap_or(false);

            if not_found {
                Err(error::bucket_not_found(format!(
                    "bucket does not exist: {bucket}"
                )))
            } else {
                Err(err.into())
            }
        }
    }
}

pub(crate) type DownloadObjectsContext = TransferContext<DownloadObjectsState>;

#[derive(Debug)]
pub(crate) struct DownloadObjectsState {
    input: DownloadObjectsInput,
}

impl DownloadObjectsContext {
    pub(crate) fn new(handle: Arc<crate::client::Handle>, input: DownloadObjectsInput) -> Self {
        let state = DownloadObjectsState { input };
        TransferContext {
            handle,
            state: Arc::new(state),
        }
    }
}
