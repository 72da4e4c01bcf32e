/// Canonical reuse key for pooled textures

use crate::device::{PixelFormat, PixelType, TextureInfo, TextureRequest};
use crate::error::{Error, Result};

/// Canonical, immutable encoding of a texture request's reuse-relevant
/// fields.
///
/// Two requests with the same effective dimensions, format, datatype, and
/// premultiply flag map to the same key, whether their optional fields were
/// spelled out or left to default. The key is a plain value struct used
/// directly in the free-list map, relying on structural equality and
/// hashing rather than any serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureKey {
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

impl TextureKey {
    /// Canonicalize a request into its reuse key.
    ///
    /// Resolution rules:
    /// - effective width/height come from `data` when present, else from
    ///   the explicit fields; both must be non-zero
    /// - `format` defaults to `Rgba`, `pixel_type` to `UnsignedByte`
    /// - `premultiply_alpha`, when unset, defaults to `true` for `Rgb` and
    ///   `Luminance` textures and `false` otherwise
    ///
    /// # Errors
    ///
    /// `InvalidRequest` if an effective dimension is zero, or if source
    /// pixel data is present but its byte length does not match its
    /// dimensions and the resolved format/datatype.
    pub fn canonical(request: &TextureRequest) -> Result<TextureKey> {
        let (width, height) = match &request.data {
            Some(image) => (image.width, image.height),
            None => (request.width, request.height),
        };

        if width == 0 || height == 0 {
            return Err(Error::InvalidRequest(format!(
                "texture dimensions must be non-zero, got {}x{}",
                width, height
            )));
        }

        let format = request.format.unwrap_or(PixelFormat::Rgba);
        let pixel_type = request.pixel_type.unwrap_or(PixelType::UnsignedByte);
        let premultiply_alpha = request.premultiply_alpha.unwrap_or(matches!(
            format,
            PixelFormat::Rgb | PixelFormat::Luminance
        ));

        if let Some(image) = &request.data {
            let expected = width as usize
                * height as usize
                * format.bytes_per_pixel(pixel_type) as usize;
            if image.pixels.len() != expected {
                return Err(Error::InvalidRequest(format!(
                    "source data is {} bytes, expected {} for {}x{} {:?}/{:?}",
                    image.pixels.len(),
                    expected,
                    width,
                    height,
                    format,
                    pixel_type
                )));
            }
        }

        Ok(TextureKey {
            width,
            height,
            format,
            pixel_type,
            premultiply_alpha,
        })
    }

    /// Allocation descriptor for this key (all fields resolved)
    pub fn info(&self) -> TextureInfo {
        TextureInfo {
            width: self.width,
            height: self.height,
            format: self.format,
            pixel_type: self.pixel_type,
            premultiply_alpha: self.premultiply_alpha,
        }
    }

    /// Byte size of one texture with this key's shape
    pub fn byte_size(&self) -> usize {
        self.width as usize
            * self.height as usize
            * self.format.bytes_per_pixel(self.pixel_type) as usize
    }
}

#[cfg(test)]
#[path = "key_tests.rs"]
mod tests;
