/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use path_clean::PathClean;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error;
use crate::operation::DEFAULT_DELIMITER;

use super::list_objects::ListObjectsPaginator;
use super::{DownloadObjectsContext, DownloadObjectsOutput};

/// Download every matching object under the source prefix to the destination
/// directory, in the order the service lists them.
pub(super) async fn download_all(
    ctx: &DownloadObjectsContext,
) -> Result<DownloadObjectsOutput, error::Error> {
    let mut paginator = ListObjectsPaginator::new(ctx.clone());

    let mut objects_downloaded = 0u64;
    let mut total_bytes_transferred = 0u64;

    while let Some(page) = paginator.next_page().await {
        let page = page?;
        for object in page.contents() {
            let key = object.key().unwrap_or_default();
            if let Some(bytes_transferred) = download_single_obj(ctx, key).await? {
                objects_downloaded += 1;
                total_bytes_transferred += bytes_transferred;
            }
        }
    }

    Ok(DownloadObjectsOutput::builder()
        .objects_downloaded(objects_downloaded)
        .total_bytes_transferred(total_bytes_transferred)
        .build())
}

/// Download exactly the source key to the literal destination path.
pub(super) async fn download_single(
    ctx: &DownloadObjectsContext,
) -> Result<DownloadObjectsOutput, error::Error> {
    let input = &ctx.state.input;
    let key = input.source();

    let mut output = DownloadObjectsOutput::builder();

    if is_excluded(key, input.exclude()) {
        tracing::debug!("excluding {key}");
        return Ok(output.build());
    }

    let destination = Path::new(input.destination().expect("destination set"));

    if is_directory(key) {
        fs::create_dir_all(destination).await?;
        return Ok(output.build());
    }

    tracing::debug!("downloading {key}");
    match destination.parent() {
        Some(parent_dir) if !parent_dir.as_os_str().is_empty() => {
            fs::create_dir_all(parent_dir).await?;
        }
        _ => {}
    }

    let bytes_transferred = fetch_object(ctx, key, destination).await?;
    output = output
        .objects_downloaded(1)
        .total_bytes_transferred(bytes_transferred);

    Ok(output.build())
}

/// Download a single listed object into the destination directory.
///
/// Returns the number of bytes written, or `None` when the key was excluded
/// or only named a directory marker.
async fn download_single_obj(
    ctx: &DownloadObjectsContext,
    key: &str,
) -> Result<Option<u64>, error::Error> {
    let input = &ctx.state.input;

    if is_excluded(key, input.exclude()) {
        tracing::debug!("excluding {key}");
        return Ok(None);
    }

    let root_dir = Path::new(input.destination().expect("destination set"));
    let relative = relative_key(key, input.source(), input.relative());
    let key_path = local_key_path(root_dir, relative, key)?;

    if is_directory(key) {
        fs::create_dir_all(&key_path).await?;
        return Ok(None);
    }

    tracing::debug!("downloading {key}");
    let parent_dir = key_path.parent().expect("valid parent dir for key");
    fs::create_dir_all(parent_dir).await?;

    let bytes_transferred = fetch_object(ctx, key, &key_path).await?;
    Ok(Some(bytes_transferred))
}

/// Stream the object's bytes to `dest`, overwriting any existing file.
async fn fetch_object(
    ctx: &DownloadObjectsContext,
    key: &str,
    dest: &Path,
) -> Result<u64, error::Error> {
    let input = &ctx.state.input;
    let object = ctx
        .client()
        .get_object()
        .bucket(input.bucket().expect("bucket set"))
        .key(key)
        .send()
        .await?;

    let mut body = object.body;
    let mut file = fs::File::create(dest).await?;
    let mut bytes_transferred = 0u64;
    while let Some(chunk) = body.try_next().await? {
        file.write_all(&chunk).await?;
        bytes_transferred += chunk.len() as u64;
    }

    Ok(bytes_transferred)
}

/// A path denotes a directory when its final character is the separator.
///
/// Holds for remote keys (directory markers) and local destination strings.
pub(super) fn is_directory(path: &str) -> bool {
    path.ends_with(DEFAULT_DELIMITER) || path.ends_with(MAIN_SEPARATOR)
}

/// True when `exclude` is non-empty and the key's trailing characters equal it
/// exactly (case-sensitive).
fn is_excluded(key: &str, exclude: Option<&str>) -> bool {
    exclude.is_some_and(|suffix| !suffix.is_empty() && key.ends_with(suffix))
}

/// Strip the source prefix from `key` when flattening relative to the prefix.
///
/// Keys no longer than the prefix are used unchanged, preserving the full
/// remote key hierarchy under the destination.
fn relative_key<'a>(key: &'a str, source: &str, relative: bool) -> &'a str {
    if relative && key.len() > source.len() {
        key.get(source.len()..).unwrap_or(key)
    } else {
        key
    }
}

/// Derive the local path for a given S3 key
fn local_key_path(root_dir: &Path, relative: &str, key: &str) -> Result<PathBuf, error::Error> {
    let local_path = root_dir.join(relative).clean();
    validate_path(root_dir, &local_path, key)?;

    Ok(local_path)
}

fn validate_path(root_dir: &Path, local_path: &Path, key: &str) -> Result<(), error::Error> {
    // validate the resolved key path doesn't resolve outside the destination directory
    if !local_path.starts_with(root_dir) {
        let err = error::invalid_input(format!("Unable to download key: '{key}', it's relative path resolves outside the target destination directory"));
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::ErrorKind;

    #[test]
    fn test_is_excluded() {
        assert!(is_excluded("aa/bb/cc/test.mdl", Some(".mdl")));
        assert!(is_excluded("anothertest.mdl", Some(".mdl")));
        assert!(!is_excluded("aa/bb/cc/test.mmdl", Some(".mdl")));
        assert!(!is_excluded("aa/bb/cc/", Some(".mdl")));
    }

    #[test]
    fn test_is_excluded_empty_pattern() {
        assert!(!is_excluded("aa/bb/cc/test.mdl", None));
        assert!(!is_excluded("aa/bb/cc/test.mdl", Some("")));
        assert!(!is_excluded("", Some(".mdl")));
    }

    #[test]
    fn test_is_excluded_exact_length_key() {
        // a key exactly as long as the pattern is still a suffix match
        assert!(is_excluded(".mdl", Some(".mdl")));
        assert!(!is_excluded("mdl", Some(".mdl")));
    }

    #[test]
    fn test_is_excluded_case_sensitive() {
        assert!(!is_excluded("aa/bb/cc/test.MDL", Some(".mdl")));
    }

    #[test]
    fn test_relative_key() {
        // longer than the prefix and flattening requested: prefix is stripped
        assert_eq!("c/file1.txt", relative_key("a/b/c/file1.txt", "a/b/", true));
        // flattening not requested: full key preserved
        assert_eq!(
            "a/b/c/file1.txt",
            relative_key("a/b/c/file1.txt", "a/b/", false)
        );
        // key no longer than the prefix: full key preserved
        assert_eq!("a/b/", relative_key("a/b/", "a/b/", true));
        assert_eq!("a/", relative_key("a/", "a/b/", true));
        // stripping is by length, not by path component
        assert_eq!("/file1.txt", relative_key("a/file1.txt", "a", true));
        // empty prefix strips nothing
        assert_eq!("a/file1.txt", relative_key("a/file1.txt", "", false));
        assert_eq!("a/file1.txt", relative_key("a/file1.txt", "", true));
    }

    #[test]
    fn test_is_directory() {
        assert!(is_directory("aa/bb/cc/"));
        assert!(!is_directory("aa/bb/cc"));
        assert!(is_directory("/out/"));
        assert!(!is_directory("/out"));
        assert!(!is_directory(""));
    }

    #[cfg(target_family = "unix")]
    #[test]
    fn test_local_key_path() {
        let root_dir = Path::new("test");

        let tests = &[
            ("2023/Jan/1.png", "test/2023/Jan/1.png"),
            ("1.png", "test/1.png"),
            ("many////slashes-in-a-row", "test/many/slashes-in-a-row"),
            ("trailing/dir/", "test/trailing/dir"),
        ];

        for (relative, expected) in tests {
            let actual = local_key_path(root_dir, relative, relative).unwrap();
            assert_eq!(Path::new(expected), actual.as_path());
        }
    }

    #[cfg(target_family = "unix")]
    #[test]
    fn test_local_key_path_outside_root() {
        let root_dir = Path::new("test");

        let keys = &[
            "../2023/Jan/1.png",
            "/2023/Jan/1.png",
            "foo/../2023/../../Jan/1.png",
            "../test-2/object.dat",
        ];

        for key in keys {
            let err = local_key_path(root_dir, key, key)
                .expect_err("path resolves outside of the destination, expected error");
            assert_eq!(&ErrorKind::InputInvalid, err.kind());
        }
    }
}
