/// Mock RenderDevice for unit tests (no GPU required)
///
/// This mock device allows testing TexturePool and PooledTexture without
/// requiring a real GPU or graphics backend. It records every allocation
/// and counts pixel copies and true frees through shared counters.

#[cfg(test)]
use std::sync::{Arc, Mutex};

#[cfg(test)]
use crate::device::{ImageData, RenderDevice, Texture, TextureInfo};
#[cfg(test)]
use crate::error::{Error, Result};

// ============================================================================
// Mock Texture
// ============================================================================

#[cfg(test)]
#[derive(Debug)]
pub struct MockTexture {
    pub info: TextureInfo,
    pub name: String,
    /// Current pixel contents (updated by copy_from)
    pub pixels: Mutex<Vec<u8>>,
    /// Shared with the owning MockDevice
    copies: Arc<Mutex<usize>>,
    /// Shared with the owning MockDevice
    frees: Arc<Mutex<usize>>,
    /// Shared one-shot flag: fail the next copy_from
    fail_next_copy: Arc<Mutex<bool>>,
    /// Shared one-shot flag: fail the next release
    fail_next_release: Arc<Mutex<bool>>,
}

#[cfg(test)]
impl MockTexture {
    pub fn new(
        info: TextureInfo,
        name: String,
        initial: Option<&ImageData>,
        copies: Arc<Mutex<usize>>,
        frees: Arc<Mutex<usize>>,
        fail_next_copy: Arc<Mutex<bool>>,
        fail_next_release: Arc<Mutex<bool>>,
    ) -> Self {
        let pixels = initial.map(|img| img.pixels.clone()).unwrap_or_default();
        Self {
            info,
            name,
            pixels: Mutex::new(pixels),
            copies,
            frees,
            fail_next_copy,
            fail_next_release,
        }
    }

    /// Snapshot of the current pixel contents
    pub fn contents(&self) -> Vec<u8> {
        self.pixels.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Texture for MockTexture {
    fn info(&self) -> &TextureInfo {
        &self.info
    }

    fn copy_from(&self, image: &ImageData) -> Result<()> {
        {
            let mut fail = self.fail_next_copy.lock().unwrap();
            if *fail {
                *fail = false;
                return Err(Error::DeviceError("mock copy failure".to_string()));
            }
        }
        *self.pixels.lock().unwrap() = image.pixels.clone();
        *self.copies.lock().unwrap() += 1;
        Ok(())
    }

    fn release(&self) -> Result<()> {
        {
            let mut fail = self.fail_next_release.lock().unwrap();
            if *fail {
                *fail = false;
                return Err(Error::DeviceError("mock free failure".to_string()));
            }
        }
        *self.frees.lock().unwrap() += 1;
        Ok(())
    }
}

// ============================================================================
// Mock Device
// ============================================================================

/// Mock RenderDevice that tracks created textures without a GPU
#[cfg(test)]
#[derive(Debug)]
pub struct MockDevice {
    /// Descriptor strings of every allocation, in order
    pub allocations: Arc<Mutex<Vec<String>>>,
    /// Every texture this device allocated, in order, for content assertions
    pub textures: Arc<Mutex<Vec<Arc<MockTexture>>>>,
    /// Total copy_from calls across all textures from this device
    pub copies: Arc<Mutex<usize>>,
    /// Total true (device-level) releases across all textures
    pub frees: Arc<Mutex<usize>>,
    /// When set, the next allocation fails with OutOfMemory
    fail_next_allocation: bool,
    /// When set, the next copy_from on any texture fails
    fail_next_copy: Arc<Mutex<bool>>,
    /// When set, the next device-level release fails
    fail_next_release: Arc<Mutex<bool>>,
}

#[cfg(test)]
impl MockDevice {
    /// Create a new mock device
    pub fn new() -> Self {
        Self {
            allocations: Arc::new(Mutex::new(Vec::new())),
            textures: Arc::new(Mutex::new(Vec::new())),
            copies: Arc::new(Mutex::new(0)),
            frees: Arc::new(Mutex::new(0)),
            fail_next_allocation: false,
            fail_next_copy: Arc::new(Mutex::new(false)),
            fail_next_release: Arc::new(Mutex::new(false)),
        }
    }

    /// Number of allocations performed
    pub fn allocation_count(&self) -> usize {
        self.allocations.lock().unwrap().len()
    }

    /// Descriptor strings of performed allocations
    pub fn allocation_names(&self) -> Vec<String> {
        self.allocations.lock().unwrap().clone()
    }

    /// The nth texture this device allocated
    pub fn texture(&self, index: usize) -> Arc<MockTexture> {
        Arc::clone(&self.textures.lock().unwrap()[index])
    }

    /// Total copy_from calls observed
    pub fn copy_count(&self) -> usize {
        *self.copies.lock().unwrap()
    }

    /// Total device-level frees observed
    pub fn free_count(&self) -> usize {
        *self.frees.lock().unwrap()
    }

    /// Arm the device to fail the next allocation with OutOfMemory
    pub fn fail_next_allocation(&mut self) {
        self.fail_next_allocation = true;
    }

    /// Arm the device to fail the next copy_from with DeviceError
    pub fn fail_next_copy(&self) {
        *self.fail_next_copy.lock().unwrap() = true;
    }

    /// Arm the device to fail the next device-level release with DeviceError
    pub fn fail_next_release(&self) {
        *self.fail_next_release.lock().unwrap() = true;
    }
}

#[cfg(test)]
impl RenderDevice for MockDevice {
    fn allocate_texture_2d(
        &mut self,
        info: &TextureInfo,
        data: Option<&ImageData>,
    ) -> Result<Arc<dyn Texture>> {
        if self.fail_next_allocation {
            self.fail_next_allocation = false;
            return Err(Error::OutOfMemory);
        }

        let name = format!(
            "texture_{}x{}_{:?}_{:?}",
            info.width, info.height, info.format, info.pixel_type
        );
        self.allocations.lock().unwrap().push(name.clone());

        let texture = Arc::new(MockTexture::new(
            info.clone(),
            name,
            data,
            Arc::clone(&self.copies),
            Arc::clone(&self.frees),
            Arc::clone(&self.fail_next_copy),
            Arc::clone(&self.fail_next_release),
        ));
        self.textures.lock().unwrap().push(Arc::clone(&texture));
        Ok(texture)
    }
}

#[cfg(test)]
#[path = "mock_device_tests.rs"]
mod tests;
