/// RenderDevice trait - the allocation factory the pool delegates to

use std::sync::Arc;

use crate::device::{ImageData, Texture, TextureInfo};
use crate::error::Result;

/// Rendering-device collaborator.
///
/// The pool treats the device as an opaque capability: it allocates
/// textures here on a free-list miss and never frees them except through
/// [`Texture::release`] during whole-pool teardown.
pub trait RenderDevice: Send + Sync {
    /// Allocate a new GPU-backed 2D texture.
    ///
    /// # Arguments
    ///
    /// * `info` - Resolved allocation descriptor (dimensions, format,
    ///   datatype, premultiply-alpha; no optional fields remain)
    /// * `data` - Optional initial pixel data to upload
    ///
    /// # Returns
    ///
    /// A shared pointer to the created texture, or a device-level error if
    /// the request cannot be satisfied.
    fn allocate_texture_2d(
        &mut self,
        info: &TextureInfo,
        data: Option<&ImageData>,
    ) -> Result<Arc<dyn Texture>>;
}
