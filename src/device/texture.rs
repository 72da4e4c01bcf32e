/// Texture trait, pixel formats, and texture descriptors

use crate::error::Result;

/// Pixel format (channel layout) of a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// Single alpha channel
    Alpha,
    /// Single luminance channel
    Luminance,
    /// Luminance + alpha
    LuminanceAlpha,
    /// Red, green, blue
    Rgb,
    /// Red, green, blue, alpha
    Rgba,
}

impl PixelFormat {
    /// Number of channels per pixel for this format
    pub fn channels(&self) -> u32 {
        match self {
            PixelFormat::Alpha => 1,
            PixelFormat::Luminance => 1,
            PixelFormat::LuminanceAlpha => 2,
            PixelFormat::Rgb => 3,
            PixelFormat::Rgba => 4,
        }
    }

    /// Bytes per pixel for this format stored with the given datatype
    pub fn bytes_per_pixel(&self, pixel_type: PixelType) -> u32 {
        self.channels() * pixel_type.byte_size()
    }
}

/// Pixel datatype (storage size per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelType {
    /// 8-bit unsigned integer per channel
    UnsignedByte,
    /// 16-bit unsigned integer per channel
    UnsignedShort,
    /// 32-bit float per channel
    Float,
}

impl PixelType {
    /// Storage size of one channel, in bytes
    pub fn byte_size(&self) -> u32 {
        match self {
            PixelType::UnsignedByte => 1,
            PixelType::UnsignedShort => 2,
            PixelType::Float => 4,
        }
    }
}

// ===== IMAGE DATA =====

/// In-memory pixel buffer with its own dimensions.
///
/// Used as optional source data on a [`TextureRequest`] and as the payload
/// of [`Texture::copy_from`]. The byte layout must match the format and
/// datatype of the texture it is uploaded to; the pool validates the length
/// before any device call.
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Raw pixel bytes, row-major, tightly packed
    pub pixels: Vec<u8>,
}

impl ImageData {
    /// Create an image buffer from raw pixel bytes
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }
}

// ===== TEXTURE REQUEST =====

/// Caller-supplied specification of a desired texture.
///
/// Optional fields are resolved during canonicalization:
/// - `format` defaults to [`PixelFormat::Rgba`]
/// - `pixel_type` defaults to [`PixelType::UnsignedByte`]
/// - `premultiply_alpha`, when unset, defaults to `true` for `Rgb` and
///   `Luminance` textures and `false` otherwise
///
/// If `data` is present, its dimensions override `width`/`height`.
#[derive(Debug, Clone, Default)]
pub struct TextureRequest {
    /// Width in pixels (ignored when `data` is present)
    pub width: u32,
    /// Height in pixels (ignored when `data` is present)
    pub height: u32,
    /// Pixel format, or None for the default
    pub format: Option<PixelFormat>,
    /// Pixel datatype, or None for the default
    pub pixel_type: Option<PixelType>,
    /// Premultiply-alpha flag, or None for the format-dependent default
    pub premultiply_alpha: Option<bool>,
    /// Optional initial pixel data
    pub data: Option<ImageData>,
}

impl TextureRequest {
    /// Request an uninitialized texture of the given size, all defaults
    pub fn sized(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Request a texture initialized from an image, all defaults
    pub fn from_image(image: ImageData) -> Self {
        Self {
            data: Some(image),
            ..Default::default()
        }
    }
}

// ===== TEXTURE INFO =====

/// Read-only properties of a created texture.
///
/// Doubles as the allocation descriptor handed to
/// [`RenderDevice::allocate_texture_2d`](crate::device::RenderDevice::allocate_texture_2d):
/// the pool resolves all request defaults first, so backends always see
/// concrete values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureInfo {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Pixel format
    pub format: PixelFormat,
    /// Pixel datatype
    pub pixel_type: PixelType,
    /// Whether color channels are premultiplied by alpha
    pub premultiply_alpha: bool,
}

impl TextureInfo {
    /// Total byte size of the pixel storage
    pub fn byte_size(&self) -> usize {
        self.width as usize
            * self.height as usize
            * self.format.bytes_per_pixel(self.pixel_type) as usize
    }
}

// ===== TEXTURE TRAIT =====

/// Operational surface of a 2D texture resource.
///
/// Backend implementations wrap the actual GPU object; their `release` is
/// the true teardown primitive that frees device memory. The pool's
/// [`PooledTexture`](crate::pool::PooledTexture) implements this same trait,
/// forwarding every operation to the wrapped resource except `release`,
/// which it redirects into the pool's free list.
pub trait Texture: Send + Sync {
    /// Get the read-only properties of this texture
    fn info(&self) -> &TextureInfo;

    /// Overwrite the texture contents in place with the given image
    fn copy_from(&self, image: &ImageData) -> Result<()>;

    /// Release this texture.
    ///
    /// For backend resources this frees device memory; for pooled handles
    /// it returns the handle to the pool instead.
    fn release(&self) -> Result<()>;
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
