//! # Object Store
//!
//! The [`ObjectStore`] seam fetches whole objects by `(bucket, key)`. The
//! handler uses it twice per invocation: once for the schema document and
//! once for the data file.
//!
//! - [`S3ObjectStore`] — AWS S3 `GetObject`, used by the Lambda binary.
//! - [`FsObjectStore`] — a local directory tree where `<root>/<bucket>/<key>`
//!   holds each object, used by the CLI.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use dval_core::ObjectLocation;
use tracing::debug;

use crate::error::StoreError;

/// Read access to an object store.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch the full contents of one object.
    async fn get(&self, location: &ObjectLocation) -> Result<Vec<u8>, StoreError>;
}

/// S3-backed object store.
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
}

impl S3ObjectStore {
    /// Wrap a configured S3 client.
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get(&self, location: &ObjectLocation) -> Result<Vec<u8>, StoreError> {
        let response = self
            .client
            .get_object()
            .bucket(&location.bucket)
            .key(&location.key)
            .send()
            .await
            .map_err(|e| {
                if e.as_service_error().is_some_and(|se| se.is_no_such_key()) {
                    StoreError::NotFound {
                        location: location.clone(),
                    }
                } else {
                    StoreError::Backend {
                        location: location.clone(),
                        reason: DisplayErrorContext(&e).to_string(),
                    }
                }
            })?;

        let body = response
            .body
            .collect()
            .await
            .map_err(|e| StoreError::Backend {
                location: location.clone(),
                reason: format!("reading body: {e}"),
            })?;
        let bytes = body.into_bytes().to_vec();
        debug!(%location, bytes = bytes.len(), "fetched object from s3");
        Ok(bytes)
    }
}

/// Directory-backed object store.
#[derive(Debug, Clone)]
pub struct FsObjectStore {
    root: PathBuf,
}

impl FsObjectStore {
    /// Serve objects from under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a location to its file path, refusing anything that could
    /// escape the root.
    pub fn path_for(&self, location: &ObjectLocation) -> Result<PathBuf, StoreError> {
        let invalid = |reason: &str| StoreError::InvalidKey {
            location: location.clone(),
            reason: reason.to_string(),
        };
        if location.bucket.is_empty() || location.key.is_empty() {
            return Err(invalid("bucket and key must be non-empty"));
        }
        let relative = Path::new(&location.bucket).join(&location.key);
        if !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            return Err(invalid("only plain relative path segments are allowed"));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl ObjectStore for FsObjectStore {
    async fn get(&self, location: &ObjectLocation) -> Result<Vec<u8>, StoreError> {
        let path = self.path_for(location)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                debug!(%location, path = %path.display(), bytes = bytes.len(), "read object from disk");
                Ok(bytes)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StoreError::NotFound {
                location: location.clone(),
            }),
            Err(e) => Err(StoreError::Backend {
                location: location.clone(),
                reason: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(files: &[(&str, &[u8])]) -> (tempfile::TempDir, FsObjectStore) {
        let dir = tempfile::tempdir().unwrap();
        for (rel, contents) in files {
            let path = dir.path().join(rel);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, contents).unwrap();
        }
        let store = FsObjectStore::new(dir.path());
        (dir, store)
    }

    #[tokio::test]
    async fn test_fs_store_reads_nested_key() {
        let (_dir, store) = store_with(&[("data/in/2026/orders.json", b"{}")]);
        let bytes = store
            .get(&ObjectLocation::new("data", "in/2026/orders.json"))
            .await
            .unwrap();
        assert_eq!(bytes, b"{}");
    }

    #[tokio::test]
    async fn test_fs_store_not_found() {
        let (_dir, store) = store_with(&[]);
        let err = store
            .get(&ObjectLocation::new("data", "missing.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }), "{err}");
        assert_eq!(err.to_string(), "object not found: s3://data/missing.json");
    }

    #[test]
    fn test_fs_store_rejects_escaping_keys() {
        let store = FsObjectStore::new("/srv/objects");
        for (bucket, key) in [
            ("data", "../secrets.json"),
            ("data", "a/../../b.json"),
            ("..", "x.json"),
            ("data", "/etc/passwd.json"),
            ("", "x.json"),
            ("data", ""),
        ] {
            let err = store.path_for(&ObjectLocation::new(bucket, key)).unwrap_err();
            assert!(matches!(err, StoreError::InvalidKey { .. }), "{bucket}/{key}");
        }
    }

    #[test]
    fn test_fs_store_path_layout() {
        let store = FsObjectStore::new("/srv/objects");
        let path = store.path_for(&ObjectLocation::new("b", "x/y.csv")).unwrap();
        assert_eq!(path, PathBuf::from("/srv/objects/b/x/y.csv"));
        assert!(path.starts_with(store.root()));
    }
}
