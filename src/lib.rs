/*!
# Texture Pool

Pooling and recycling of GPU-backed 2D textures.

Creating and freeing textures on a graphics device is expensive; code that
allocates and discards same-shaped textures every frame pays that cost over
and over. This crate recycles instead: released textures go into per-shape
free lists, and later requests with the same canonical shape get the
recycled resource back with no device call.

## Architecture

- **TexturePool**: per-key free lists, lookup-or-allocate, whole-pool teardown
- **TextureKey**: canonical reuse key derived from a request (defaults resolved)
- **PooledTexture**: transparent handle whose `release` re-enters the pool
- **RenderDevice** / **Texture**: traits for the device collaborator that
  performs real allocation, pixel copy, and teardown

Backend implementations provide concrete types for the device traits; tests
run against a mock device with no GPU.

## Example

```no_run
use texture_pool::{TexturePool, TextureRequest, Texture, RenderDevice};

fn frame(pool: &TexturePool, device: &mut dyn RenderDevice) -> texture_pool::Result<()> {
    let scratch = pool.create(device, &TextureRequest::sized(256, 256))?;
    // ... render with scratch ...
    scratch.release()?; // recycled, not freed
    Ok(())
}
```
*/

// Internal modules
mod error;
pub mod device;
pub mod log;
pub mod pool;

// Re-exports
pub use crate::error::{Error, Result};
pub use crate::device::{
    ImageData, PixelFormat, PixelType, RenderDevice, Texture, TextureInfo, TextureRequest,
};
pub use crate::pool::{PooledTexture, TextureKey, TexturePool};
