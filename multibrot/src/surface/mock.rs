use shared::Raster;

use super::{check_len, RasterSurface};
use crate::error::RenderError;

/// Records every presented frame instead of drawing it.
pub struct RecordingSurface {
    raster: Raster,
    pub frames: Vec<Vec<u32>>,
}

impl RecordingSurface {
    pub fn new(raster: Raster) -> Self {
        Self {
            raster,
            frames: Vec::new(),
        }
    }
}

impl RasterSurface for RecordingSurface {
    fn raster(&self) -> Raster {
        self.raster
    }

    fn resize(&mut self, _width: u32, _height: u32) {}

    fn submit(&mut self, pixels: &[u32]) -> Result<(), RenderError> {
        check_len(self.raster, pixels)?;
        self.frames.push(pixels.to_vec());
        Ok(())
    }
}
