/// Device module - the device-collaborator surface the pool depends on

// Module declarations
pub mod device;
pub mod mock_device;
pub mod texture;

// Re-export from submodules
pub use device::*;
pub use texture::*;
