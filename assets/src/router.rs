use std::collections::HashMap;
use std::sync::Arc;

use crate::error::AssetError;
use crate::key;
use crate::source::{AssetFuture, AssetSource};

/// Routes asset keys to mounted sources.
///
/// The first key segment selects a mounted source and the remainder is
/// passed to it. Keys whose first segment matches no mount go to the
/// default source in full, so `saves/world.json` can either hit a
/// source mounted as `saves` with `world.json`, or the default source
/// with the whole key.
///
/// Routers are cheap to clone and clones share the mount table. Mounts
/// must all happen before the first clone.
#[derive(Default, Clone)]
pub struct AssetRouter {
    inner: Arc<RouterInner>,
}

#[derive(Default)]
struct RouterInner {
    sources: HashMap<String, Box<dyn AssetSource>>,
    default_source: Option<String>,
}

impl AssetRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts `source` under `name`.
    ///
    /// Panics if called after the router has been cloned.
    pub fn mount(&mut self, name: impl Into<String>, source: impl AssetSource) {
        let name = name.into();
        let inner = Arc::get_mut(&mut self.inner)
            .expect("cannot mount sources after the router has been cloned");
        if inner.sources.insert(name.clone(), Box::new(source)).is_some() {
            log::warn!("replacing asset source mounted under {name:?}");
        }
    }

    /// Marks the source mounted under `name` as the fallback for keys
    /// whose first segment matches no mount.
    ///
    /// Panics if called after the router has been cloned or if no source
    /// is mounted under `name`.
    pub fn set_default(&mut self, name: impl Into<String>) {
        let name = name.into();
        let inner = Arc::get_mut(&mut self.inner)
            .expect("cannot change the default source after the router has been cloned");
        assert!(
            inner.sources.contains_key(&name),
            "no source mounted under {name:?}"
        );
        inner.default_source = Some(name);
    }

    fn resolve<'a>(&'a self, key: &'a str) -> Result<(&'a dyn AssetSource, &'a str), AssetError> {
        let (source_name, rest) = key::split_source(key);
        if !rest.is_empty() {
            if let Some(source) = self.inner.sources.get(source_name) {
                return Ok((source.as_ref(), rest));
            }
        }
        if let Some(default_name) = &self.inner.default_source {
            if let Some(source) = self.inner.sources.get(default_name) {
                return Ok((source.as_ref(), key));
            }
        }
        Err(AssetError::NoSuchSource(source_name.to_string()))
    }

    /// Reads the full contents of the asset at `key`.
    pub fn read(&self, key: &str) -> AssetFuture<Vec<u8>> {
        let normalized = match key::normalize(key) {
            Ok(normalized) => normalized,
            Err(err) => return Box::pin(async move { Err(err) }),
        };
        match self.resolve(&normalized) {
            Ok((source, rest)) => source.read(rest),
            Err(err) => Box::pin(async move { Err(err) }),
        }
    }

    /// Reads the asset at `key` and decodes it as UTF-8 text.
    pub fn read_text(&self, key: &str) -> AssetFuture<String> {
        let read = self.read(key);
        Box::pin(async move {
            let bytes = read.await?;
            String::from_utf8(bytes).map_err(|err| AssetError::NotText(err.utf8_error()))
        })
    }

    /// Checks whether an asset exists at `key`.
    pub fn exists(&self, key: &str) -> AssetFuture<bool> {
        let normalized = match key::normalize(key) {
            Ok(normalized) => normalized,
            Err(err) => return Box::pin(async move { Err(err) }),
        };
        match self.resolve(&normalized) {
            Ok((source, rest)) => source.exists(rest),
            Err(err) => Box::pin(async move { Err(err) }),
        }
    }

    /// Writes `data` to the asset at `key`.
    pub fn write(&self, key: &str, data: Vec<u8>) -> AssetFuture<()> {
        let normalized = match key::normalize(key) {
            Ok(normalized) => normalized,
            Err(err) => return Box::pin(async move { Err(err) }),
        };
        match self.resolve(&normalized) {
            Ok((source, rest)) => {
                if source.is_read_only() {
                    Box::pin(async { Err(AssetError::ReadOnly) })
                } else {
                    source.write(rest, data)
                }
            }
            Err(err) => Box::pin(async move { Err(err) }),
        }
    }

    /// Writes UTF-8 text to the asset at `key`.
    pub fn write_text(&self, key: &str, text: impl Into<String>) -> AssetFuture<()> {
        self.write(key, text.into().into_bytes())
    }

    /// Whether the source that would handle `key` rejects writes.
    pub fn is_read_only(&self, key: &str) -> Result<bool, AssetError> {
        let normalized = key::normalize(key)?;
        let (source, _) = self.resolve(&normalized)?;
        Ok(source.is_read_only())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryAssets;
    use crate::poll::poll_now;

    fn router_with_memory(name: &str) -> (AssetRouter, MemoryAssets) {
        let assets = MemoryAssets::new();
        let mut router = AssetRouter::new();
        router.mount(name, assets.clone());
        (router, assets)
    }

    #[test]
    fn routes_first_segment_to_mount() {
        let (router, assets) = router_with_memory("saves");
        assets.insert_text("world.json", "{}");
        let text = poll_now(router.read_text("saves/world.json")).unwrap();
        assert_eq!(text, "{}");
    }

    #[test]
    fn unmatched_segment_falls_back_to_default() {
        let (mut router, assets) = router_with_memory("mem");
        router.set_default("mem");
        assets.insert_text("other/world.json", "{}");
        let text = poll_now(router.read_text("other/world.json")).unwrap();
        assert_eq!(text, "{}");
    }

    #[test]
    fn unknown_source_without_default_errors() {
        let (router, _assets) = router_with_memory("saves");
        let err = poll_now(router.read("elsewhere/world.json")).unwrap_err();
        assert!(matches!(err, AssetError::NoSuchSource(_)));
    }

    #[test]
    fn invalid_key_is_rejected_before_routing() {
        let (router, _assets) = router_with_memory("saves");
        let err = poll_now(router.read("saves/../secrets")).unwrap_err();
        assert!(matches!(err, AssetError::InvalidKey(_)));
    }

    #[test]
    fn write_round_trips_through_router() {
        let (router, _assets) = router_with_memory("saves");
        poll_now(router.write_text("saves/world.json", "[]")).unwrap();
        let text = poll_now(router.read_text("saves/world.json")).unwrap();
        assert_eq!(text, "[]");
    }

    #[test]
    fn read_text_rejects_binary() {
        let (router, assets) = router_with_memory("saves");
        assets.insert("blob", vec![0xff, 0xfe, 0x00]);
        let err = poll_now(router.read_text("saves/blob")).unwrap_err();
        assert!(matches!(err, AssetError::NotText(_)));
    }

    #[test]
    fn read_only_source_rejects_writes() {
        struct Frozen;
        impl AssetSource for Frozen {
            fn read(&self, key: &str) -> crate::AssetFuture<Vec<u8>> {
                let key = key.to_string();
                Box::pin(async move { Err(AssetError::NotFound(key)) })
            }
            fn exists(&self, _key: &str) -> crate::AssetFuture<bool> {
                Box::pin(async { Ok(false) })
            }
        }

        let mut router = AssetRouter::new();
        router.mount("frozen", Frozen);
        assert!(router.is_read_only("frozen/a").unwrap());
        let err = poll_now(router.write("frozen/a", vec![1])).unwrap_err();
        assert!(matches!(err, AssetError::ReadOnly));
    }
}
