/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::error::Error;
use std::process::ExitCode;

use aws_sdk_s3::error::DisplayErrorContext;
use clap::Parser;

type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "fetch")]
#[command(about = "Download S3 objects matching a key prefix to a local path.")]
pub struct Args {
    /// Bucket to download from
    #[arg(long, required = true)]
    bucket: String,

    /// Local path; treated as a directory when it ends with the path separator
    #[arg(long, required = true)]
    destination: String,

    /// Key prefix to match (the single key to fetch when the destination is a file path)
    #[arg(long, default_value = "")]
    source: String,

    /// Strip the source prefix from resulting local paths
    #[arg(long, default_value_t = false, action = clap::ArgAction::SetTrue)]
    relative: bool,

    /// Skip keys ending with this suffix
    #[arg(long)]
    exclude: Option<String>,

    /// Access key for the storage service (ambient credential chain when absent)
    #[arg(long)]
    access_key: Option<String>,

    /// Secret key for the storage service
    #[arg(long)]
    secret_key: Option<String>,

    /// Override the storage service endpoint URL
    #[arg(long)]
    endpoint: Option<String>,
}

async fn do_download(args: Args) -> Result<(), BoxError> {
    let mut loader = s3_download::from_env();
    if let (Some(access_key), Some(secret_key)) = (&args.access_key, &args.secret_key) {
        loader = loader.credentials(access_key, secret_key);
    }
    if let Some(endpoint) = &args.endpoint {
        loader = loader.endpoint_url(endpoint);
    }

    let config = loader.load().await;
    let client = s3_download::Client::new(config);

    let output = client
        .download_objects()
        .bucket(&args.bucket)
        .source(&args.source)
        .destination(&args.destination)
        .relative(args.relative)
        .set_exclude(args.exclude.clone())
        .send()
        .await?;

    println!(
        "downloaded {} objects totalling {} bytes",
        output.objects_downloaded(),
        output.total_bytes_transferred(),
    );
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match do_download(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("transfer failed: {}", DisplayErrorContext(err.as_ref()));
            ExitCode::FAILURE
        }
    }
}
