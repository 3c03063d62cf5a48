/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for downloading one or more objects
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct DownloadObjectsInput {
    /// The bucket name containing the object(s).
    pub bucket: Option<String>,

    /// The local path to download to. A path whose final character is the
    /// path separator is a directory target.
    pub destination: Option<String>,

    /// Limit the transfer to keys that begin with the given prefix. When the
    /// destination is not a directory this is the single key to download.
    pub source: Option<String>,

    /// Strip the source prefix from resulting local relative paths instead of
    /// recreating the full key hierarchy under the destination.
    pub relative: bool,

    /// Skip keys ending with the given suffix.
    pub exclude: Option<String>,
}

impl DownloadObjectsInput {
    /// Creates a new builder-style object to manufacture [`DownloadObjectsInput`](crate::operation::download_objects::DownloadObjectsInput).
    pub fn builder() -> DownloadObjectsInputBuilder {
        DownloadObjectsInputBuilder::default()
    }

    /// The bucket name containing the object(s).
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// The local path to download to.
    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    /// The key prefix to match. An absent source normalizes to the empty
    /// string, which matches every key in the bucket.
    pub fn source(&self) -> &str {
        self.source.as_deref().unwrap_or("")
    }

    /// Whether local relative paths are computed relative to the source prefix.
    pub fn relative(&self) -> bool {
        self.relative
    }

    /// Suffix used to skip unwanted keys.
    pub fn exclude(&self) -> Option<&str> {
        self.exclude.as_deref()
    }
}

/// A builder for [`DownloadObjectsInput`](crate::operation::download_objects::DownloadObjectsInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct DownloadObjectsInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) destination: Option<String>,
    pub(crate) source: Option<String>,
    pub(crate) relative: bool,
    pub(crate) exclude: Option<String>,
}

impl DownloadObjectsInputBuilder {
    /// Set the bucket name containing the object(s) to download.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set the bucket name containing the object(s) to download.
    ///
    /// NOTE: A bucket name is required.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket name containing the object(s).
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Set the local path to download to.
    ///
    /// A path whose final character is the path separator is treated as a
    /// directory target and created if absent.
    ///
    /// NOTE: A destination is required.
    pub fn destination(mut self, input: impl Into<String>) -> Self {
        self.destination = Some(input.into());
        self
    }

    /// Set the local path to download to.
    ///
    /// NOTE: A destination is required.
    pub fn set_destination(mut self, input: Option<String>) -> Self {
        self.destination = input;
        self
    }

    /// The local path to download to.
    pub fn get_destination(&self) -> &Option<String> {
        &self.destination
    }

    /// Limit the transfer to keys that begin with the given prefix.
    pub fn source(mut self, input: impl Into<String>) -> Self {
        self.source = Some(input.into());
        self
    }

    /// Limit the transfer to keys that begin with the given prefix.
    pub fn set_source(mut self, input: Option<String>) -> Self {
        self.source = input;
        self
    }

    /// The key prefix to match.
    pub fn get_source(&self) -> &Option<String> {
        &self.source
    }

    /// Strip the source prefix from resulting local relative paths.
    pub fn relative(mut self, input: bool) -> Self {
        self.relative = input;
        self
    }

    /// Whether local relative paths are computed relative to the source prefix.
    pub fn get_relative(&self) -> bool {
        self.relative
    }

    /// Skip keys ending with the given suffix.
    pub fn exclude(mut self, input: impl Into<String>) -> Self {
        self.exclude = Some(input.into());
        self
    }

    /// Skip keys ending with the given suffix.
    pub fn set_exclude(mut self, input: Option<String>) -> Self {
        self.exclude = input;
        self
    }

    /// Suffix used to skip unwanted keys.
    pub fn get_exclude(&self) -> &Option<String> {
        &self.exclude
    }

    /// Consumes the builder and constructs a [`DownloadObjectsInput`](crate::operation::download_objects::DownloadObjectsInput).
    pub fn build(self) -> Result<DownloadObjectsInput, BuildError> {
        if self.bucket.is_none() {
            return Err(BuildError::missing_field("bucket", "A bucket is required"));
        }

        match self.destination.as_deref() {
            None => {
                return Err(BuildError::missing_field(
                    "destination",
                    "A destination is required",
                ));
            }
            Some("") => {
                return Err(BuildError::invalid_field(
                    "destination",
                    "A destination must not be empty",
                ));
            }
            Some(_) => {}
        }

        Result::Ok(DownloadObjectsInput {
            bucket: self.bucket,
            destination: self.destination,
            source: self.source,
            relative: self.relative,
            exclude: self.exclude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::DownloadObjectsInput;

    #[test]
    fn test_no_destination_error() {
        let err = DownloadObjectsInput::builder()
            .bucket("test-bucket")
            .build()
            .unwrap_err();

        let err_string = err.to_string();
        assert!(err_string.contains("A destination is required"));
    }

    #[test]
    fn test_empty_destination_error() {
        let err = DownloadObjectsInput::builder()
            .bucket("test-bucket")
            .destination("")
            .build()
            .unwrap_err();

        let err_string = err.to_string();
        assert!(err_string.contains("A destination must not be empty"));
    }

    #[test]
    fn test_no_bucket_error() {
        let err = DownloadObjectsInput::builder()
            .destination("/tmp/test/")
            .build()
            .unwrap_err();

        let err_string = err.to_string();
        assert!(err_string.contains("A bucket is required"));
    }

    #[test]
    fn test_absent_source_matches_all_keys() {
        let input = DownloadObjectsInput::builder()
            .bucket("test-bucket")
            .destination("/tmp/test/")
            .build()
            .unwrap();

        assert_eq!("", input.source());
    }
}
