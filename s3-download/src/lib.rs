/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! Recursive Amazon S3 downloads.
//!
//! Downloads every object under a key prefix from an S3 bucket (or any
//! S3-compatible store) to a local directory, preserving or flattening the
//! remote key hierarchy and optionally skipping keys by suffix. A destination
//! that is not a directory downloads a single object to that exact path.
//!
//! # Examples
//!
//! Load the default configuration:
//!
//! ```no_run
//! # async fn example() {
//! let config = s3_download::from_env().load().await;
//! let client = s3_download::Client::new(config);
//! # }
//! ```
//!
//! Download a bucket prefix to a local directory:
//!
//! ```no_run
//! # async fn example() -> Result<(), s3_download::error::Error> {
//! let config = s3_download::from_env().load().await;
//! let client = s3_download::Client::new(config);
//!
//! let output = client
//!     .download_objects()
//!     .bucket("my-bucket")
//!     .source("photos/2024/")
//!     .destination("/tmp/photos/")
//!     .send()
//!     .await?;
//!
//! println!("downloaded {} objects", output.objects_downloaded());
//! # Ok(())
//! # }
//! ```

/// Error types emitted by `s3-download`
pub mod error;

/// Downloader client
pub mod client;

/// Download operations
pub mod operation;

/// Downloader configuration
pub mod config;

pub use self::client::Client;
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
