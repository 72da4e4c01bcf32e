/// Pooled texture handle - transparent proxy with release interception

use std::sync::{Arc, Mutex, Weak};

use crate::device::{ImageData, Texture, TextureInfo};
use crate::error::{Error, Result};
use crate::pool::key::TextureKey;
use crate::pool::texture_pool::PoolState;

/// Handle to a pooled GPU texture.
///
/// Wraps exactly one device resource and presents the same [`Texture`]
/// surface: `info` and `copy_from` forward verbatim to the wrapped
/// resource. `release` is the exception - it never touches device memory
/// and instead pushes this handle onto its pool's free list, from where the
/// next matching [`TexturePool::create`](crate::pool::TexturePool::create)
/// hands it out again.
///
/// The key is fixed at creation and immutable for the handle's lifetime.
/// A handle is either checked out (held by a caller) or sitting in a free
/// list; membership in the free list is the "available" state, there is no
/// separate flag.
pub struct PooledTexture {
    /// The wrapped device resource
    raw: Arc<dyn Texture>,
    /// Reuse key this handle was created under
    key: TextureKey,
    /// Owning pool's shared state, used only to target release
    pool: Weak<Mutex<PoolState>>,
    /// Self-reference so release(&self) can re-insert the owning Arc
    self_ref: Weak<PooledTexture>,
}

impl PooledTexture {
    /// Wrap a freshly allocated device resource (pool-internal)
    pub(crate) fn new(
        raw: Arc<dyn Texture>,
        key: TextureKey,
        pool: &Arc<Mutex<PoolState>>,
    ) -> Arc<Self> {
        Arc::new_cyclic(|me| Self {
            raw,
            key,
            pool: Arc::downgrade(pool),
            self_ref: me.clone(),
        })
    }

    /// The reuse key this handle was created under
    pub fn key(&self) -> &TextureKey {
        &self.key
    }

    /// The wrapped device resource, for whole-pool teardown only
    pub(crate) fn raw(&self) -> &Arc<dyn Texture> {
        &self.raw
    }
}

impl Texture for PooledTexture {
    fn info(&self) -> &TextureInfo {
        self.raw.info()
    }

    fn copy_from(&self, image: &ImageData) -> Result<()> {
        self.raw.copy_from(image)
    }

    /// Return this handle to its pool's free list.
    ///
    /// No device memory is freed. After this call the handle is available
    /// for reuse and the caller must not operate on it further.
    ///
    /// # Errors
    ///
    /// - `DoubleRelease` if the handle is already in its free list
    /// - `UseAfterDestroy` if the owning pool has been destroyed or dropped
    fn release(&self) -> Result<()> {
        let pool = self.pool.upgrade().ok_or_else(|| {
            Error::UseAfterDestroy("release() on a handle whose pool is gone".to_string())
        })?;

        // Handles only ever live inside the Arc built by new(), so the
        // self-reference is alive as long as the caller holds one.
        let me = self
            .self_ref
            .upgrade()
            .expect("PooledTexture is always constructed inside an Arc");

        let mut state = pool
            .lock()
            .map_err(|_| Error::DeviceError("texture pool lock poisoned".to_string()))?;
        state.check_in(me)
    }
}

#[cfg(test)]
#[path = "pooled_texture_tests.rs"]
mod tests;
