/// Texture pool - recycle GPU textures to avoid allocate/free churn

use std::sync::{Arc, Mutex, MutexGuard};

use rustc_hash::FxHashMap;

use crate::device::{RenderDevice, Texture, TextureRequest};
use crate::error::{Error, Result};
use crate::pool::key::TextureKey;
use crate::pool::pooled_texture::PooledTexture;
use crate::{pool_debug, pool_info, pool_trace, pool_warn};

const LOG_SOURCE: &str = "texpool::TexturePool";

// ===== SHARED STATE =====

/// Free lists and lifecycle flag, shared with handles via Weak references
pub(crate) struct PoolState {
    /// Available handles per key. Push and pop at the back: LIFO reuse, so
    /// the most recently released texture is handed out first.
    free: FxHashMap<TextureKey, Vec<Arc<PooledTexture>>>,
    destroyed: bool,
}

impl PoolState {
    fn new() -> Self {
        Self {
            free: FxHashMap::default(),
            destroyed: false,
        }
    }

    /// Insert a released handle into its key's free list
    pub(crate) fn check_in(&mut self, handle: Arc<PooledTexture>) -> Result<()> {
        if self.destroyed {
            return Err(Error::UseAfterDestroy(
                "release() on a handle of a destroyed pool".to_string(),
            ));
        }

        let list = self.free.entry(*handle.key()).or_default();
        if list.iter().any(|pooled| Arc::ptr_eq(pooled, &handle)) {
            return Err(Error::DoubleRelease);
        }

        pool_trace!(
            LOG_SOURCE,
            "checked in {}x{} handle ({} now pooled for this key)",
            handle.key().width,
            handle.key().height,
            list.len() + 1
        );
        list.push(handle);
        Ok(())
    }
}

// ===== TEXTURE POOL =====

/// A pool of GPU textures keyed by canonical shape.
///
/// When a handle is released it goes back into the pool instead of being
/// freed; when a matching request comes in, the pool hands the recycled
/// handle out instead of allocating. This avoids the device-level
/// allocate/free cost for the create-discard-create pattern of
/// frame-by-frame rendering.
///
/// The pool exclusively owns every device resource allocated through it,
/// checked out or pooled, until [`destroy`](TexturePool::destroy) tears
/// everything down. Pooled resources are freed only at that point; there is
/// no eviction under memory pressure.
pub struct TexturePool {
    state: Arc<Mutex<PoolState>>,
}

impl TexturePool {
    /// Create a new empty pool
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(PoolState::new())),
        }
    }

    fn lock_state(&self) -> Result<MutexGuard<'_, PoolState>> {
        self.state
            .lock()
            .map_err(|_| Error::DeviceError("texture pool lock poisoned".to_string()))
    }

    /// Get a texture matching the request, recycling a pooled one if
    /// possible.
    ///
    /// The request is canonicalized first (see
    /// [`TextureKey::canonical`]): dimensions come from the source image
    /// when one is supplied, and unset optional fields take their defaults.
    /// On a free-list hit the most recently released handle for that key is
    /// returned; if the request carries source pixel data, one device copy
    /// refreshes the contents. **Without source data a recycled texture
    /// keeps whatever pixels it held from its previous use** - callers who
    /// need defined contents must supply data or overwrite via
    /// [`Texture::copy_from`]. On a miss the device allocates a fresh
    /// resource.
    ///
    /// # Errors
    ///
    /// - `UseAfterDestroy` if the pool has been destroyed
    /// - `InvalidRequest` for degenerate requests (nothing is mutated)
    /// - device errors from allocation or the refresh copy, unmodified;
    ///   on a failed refresh the recycled handle goes back into its free
    ///   list, so the pool still frees it at teardown
    pub fn create(
        &self,
        device: &mut dyn RenderDevice,
        request: &TextureRequest,
    ) -> Result<Arc<PooledTexture>> {
        let (key, reused) = {
            let mut state = self.lock_state()?;
            if state.destroyed {
                return Err(Error::UseAfterDestroy(
                    "create() on a destroyed pool".to_string(),
                ));
            }
            let key = TextureKey::canonical(request)?;
            let reused = state.free.get_mut(&key).and_then(|list| list.pop());
            (key, reused)
        };

        if let Some(handle) = reused {
            if let Some(image) = &request.data {
                if let Err(err) = handle.copy_from(image) {
                    pool_warn!(
                        LOG_SOURCE,
                        "refresh copy failed for recycled {}x{} texture: {}",
                        key.width,
                        key.height,
                        err
                    );
                    // The pool still owns the resource; put the handle
                    // back so destroy() can free it.
                    if let Ok(mut state) = self.state.lock() {
                        let _ = state.check_in(Arc::clone(&handle));
                    }
                    return Err(err);
                }
            }
            pool_trace!(
                LOG_SOURCE,
                "reused pooled {}x{} {:?} texture",
                key.width,
                key.height,
                key.format
            );
            return Ok(handle);
        }

        let raw = device.allocate_texture_2d(&key.info(), request.data.as_ref())?;
        pool_debug!(
            LOG_SOURCE,
            "allocated new {}x{} {:?} texture",
            key.width,
            key.height,
            key.format
        );
        Ok(PooledTexture::new(raw, key, &self.state))
    }

    /// Tear down the pool, freeing every pooled texture at the device
    /// level.
    ///
    /// This is the only path on which device memory is truly released.
    /// Checked-out handles are not visited - the pool holds no reference to
    /// them - and must not be used after this call; that is the caller's
    /// responsibility, in the same sense as any stale reference.
    ///
    /// Teardown continues past individual device failures (each is logged)
    /// and returns the first one. Any operation other than
    /// [`is_destroyed`](TexturePool::is_destroyed) and the stats queries
    /// fails with `UseAfterDestroy` afterwards, including a second
    /// `destroy`.
    pub fn destroy(&self) -> Result<()> {
        let drained: Vec<Arc<PooledTexture>> = {
            let mut state = self.lock_state()?;
            if state.destroyed {
                return Err(Error::UseAfterDestroy(
                    "destroy() called on an already-destroyed pool".to_string(),
                ));
            }
            state.destroyed = true;
            state
                .free
                .drain()
                .flat_map(|(_, handles)| handles)
                .collect()
        };

        let total = drained.len();
        let mut first_error = None;
        for handle in drained {
            if let Err(err) = handle.raw().release() {
                pool_warn!(
                    LOG_SOURCE,
                    "device free failed during teardown for {}x{} texture: {}",
                    handle.key().width,
                    handle.key().height,
                    err
                );
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }

        pool_info!(LOG_SOURCE, "pool destroyed, {} pooled textures freed", total);
        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Whether the pool has been destroyed. Always safe to call.
    pub fn is_destroyed(&self) -> bool {
        self.state.lock().map(|state| state.destroyed).unwrap_or(true)
    }

    /// Total number of textures currently sitting in free lists
    pub fn pooled_count(&self) -> usize {
        self.state
            .lock()
            .map(|state| state.free.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    /// Approximate GPU memory held by pooled textures (bytes)
    pub fn pooled_bytes(&self) -> usize {
        self.state
            .lock()
            .map(|state| {
                state
                    .free
                    .iter()
                    .map(|(key, handles)| key.byte_size() * handles.len())
                    .sum()
            })
            .unwrap_or(0)
    }
}

impl Default for TexturePool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "texture_pool_tests.rs"]
mod tests;
