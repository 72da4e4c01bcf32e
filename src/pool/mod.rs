/// Pool module - canonical reuse keys, pooled handles, and the texture pool

// Module declarations
pub mod key;
pub mod pooled_texture;
pub mod texture_pool;

// Re-export from submodules
pub use key::TextureKey;
pub use pooled_texture::PooledTexture;
pub use texture_pool::TexturePool;
