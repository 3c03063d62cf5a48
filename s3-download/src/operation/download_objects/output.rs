/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Output type for downloading one or more objects
#[non_exhaustive]
#[derive(Debug)]
pub struct DownloadObjectsOutput {
    /// The number of objects that were successfully downloaded
    pub objects_downloaded: u64,

    /// Total number of bytes transferred
    pub total_bytes_transferred: u64,
}

impl DownloadObjectsOutput {
    /// Creates a new builder-style object to manufacture [`DownloadObjectsOutput`](crate::operation::download_objects::DownloadObjectsOutput).
    pub fn builder() -> DownloadObjectsOutputBuilder {
        DownloadObjectsOutputBuilder::default()
    }

    /// The number of objects that were successfully downloaded
    pub fn objects_downloaded(&self) -> u64 {
        self.objects_downloaded
    }

    /// The number of bytes successfully transferred (downloaded)
    pub fn total_bytes_transferred(&self) -> u64 {
        self.total_bytes_transferred
    }
}

/// A builder for [`DownloadObjectsOutput`](crate::operation::download_objects::DownloadObjectsOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct DownloadObjectsOutputBuilder {
    pub(crate) objects_downloaded: u64,
    pub(crate) total_bytes_transferred: u64,
}

impl DownloadObjectsOutputBuilder {
    /// The number of objects that were successfully downloaded
    pub fn objects_downloaded(mut self, input: u64) -> Self {
        self.objects_downloaded = input;
        self
    }

    /// The number of objects that were successfully downloaded
    pub fn get_objects_downloaded(&self) -> u64 {
        self.objects_downloaded
    }

    /// The number of bytes successfully transferred (downloaded)
    pub fn total_bytes_transferred(mut self, input: u64) -> Self {
        self.total_bytes_transferred = input;
        self
    }

    /// The number of bytes successfully transferred (downloaded)
    pub fn get_total_bytes_transferred(&self) -> u64 {
        self.total_bytes_transferred
    }

    /// Consume the builder and return the output
    pub fn build(self) -> DownloadObjectsOutput {
        DownloadObjectsOutput {
            objects_downloaded: self.objects_downloaded,
            total_bytes_transferred: self.total_bytes_transferred,
        }
    }
}
