//! Raster surfaces the animation presents its pixel buffers on.

mod gpu;
#[cfg(test)]
pub mod mock;

pub use gpu::PixelSurface;

use shared::Raster;

use crate::error::RenderError;

pub trait RasterSurface {
    /// Dimensions every submitted buffer must match.
    fn raster(&self) -> Raster;

    /// The host's drawable area changed size; the raster itself does not.
    fn resize(&mut self, width: u32, height: u32);

    /// Writes a full frame of packed colors and presents it.
    fn submit(&mut self, pixels: &[u32]) -> Result<(), RenderError>;
}

/// Fails unless `pixels` covers `raster` exactly.
pub fn check_len(raster: Raster, pixels: &[u32]) -> Result<(), RenderError> {
    let expected = raster.pixel_count();
    if pixels.len() != expected {
        return Err(RenderError::BufferSizeMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    Ok(())
}
