use std::path::{Path, PathBuf};

use crate::error::AssetError;
use crate::source::{AssetFuture, AssetSource};

/// Asset source backed by a directory on the local filesystem.
///
/// Keys map to paths below the root directory. IO is performed with
/// blocking calls when the returned futures are polled, which keeps the
/// source dependency-free; callers that need true background IO can
/// poll from a worker.
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, key: &str) -> PathBuf {
        let mut path = self.root.clone();
        for segment in key.split('/') {
            path.push(segment);
        }
        path
    }
}

impl AssetSource for DirAssets {
    fn read(&self, key: &str) -> AssetFuture<Vec<u8>> {
        let path = self.resolve(key);
        Box::pin(async move {
            let data = std::fs::read(&path)?;
            Ok(data)
        })
    }

    fn exists(&self, key: &str) -> AssetFuture<bool> {
        let path = self.resolve(key);
        Box::pin(async move { Ok(path.exists()) })
    }

    fn is_read_only(&self) -> bool {
        false
    }

    fn write(&self, key: &str, data: Vec<u8>) -> AssetFuture<()> {
        let path = self.resolve(key);
        Box::pin(async move {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, data)?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poll::poll_now;

    fn temp_root(tag: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("firethorn-assets-{tag}-{}", std::process::id()));
        path
    }

    #[test]
    fn write_then_read_round_trips() {
        let root = temp_root("rw");
        let assets = DirAssets::new(&root);
        poll_now(assets.write("nested/save.json", b"{}".to_vec())).unwrap();
        let bytes = poll_now(assets.read("nested/save.json")).unwrap();
        assert_eq!(bytes, b"{}");
        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn missing_file_is_not_found() {
        let root = temp_root("missing");
        let assets = DirAssets::new(&root);
        let err = poll_now(assets.read("nope.json")).unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
    }

    #[test]
    fn exists_tracks_written_files() {
        let root = temp_root("exists");
        let assets = DirAssets::new(&root);
        assert!(!poll_now(assets.exists("a.txt")).unwrap());
        poll_now(assets.write("a.txt", b"x".to_vec())).unwrap();
        assert!(poll_now(assets.exists("a.txt")).unwrap());
        std::fs::remove_dir_all(&root).unwrap();
    }
}
