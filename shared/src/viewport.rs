use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ViewportError {
    #[error("range [{min}, {max}] is empty")]
    EmptyRange { min: f64, max: f64 },
    #[error("scale must be a positive number of pixels per unit, got {0}")]
    InvalidScale(f64),
    #[error("raster of {width}x{height} pixels is degenerate")]
    Degenerate { width: f64, height: f64 },
}

/// A span of the complex plane along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Result<Self, ViewportError> {
        if !(min.is_finite() && max.is_finite() && max > min) {
            return Err(ViewportError::EmptyRange { min, max });
        }

        Ok(Self { min, max })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
}

impl Raster {
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Rounds each axis' span times `scale` to whole pixels.
pub fn derive_raster(x: Range, y: Range, scale: f64) -> Result<Raster, ViewportError> {
    // Ranges built by hand skip `Range::new`.
    let x = Range::new(x.min, x.max)?;
    let y = Range::new(y.min, y.max)?;

    if !(scale.is_finite() && scale > 0.0) {
        return Err(ViewportError::InvalidScale(scale));
    }

    let width = (x.span() * scale).round();
    let height = (y.span() * scale).round();

    let fits = |v: f64| v >= 1.0 && v <= u32::MAX as f64;
    if !(fits(width) && fits(height)) {
        return Err(ViewportError::Degenerate { width, height });
    }

    Ok(Raster {
        width: width as u32,
        height: height as u32,
    })
}

/// The logical window onto the complex plane and the raster it maps to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: Range,
    pub y: Range,
    pub scale: f64,
    raster: Raster,
}

impl Viewport {
    pub fn new(x: Range, y: Range, scale: f64) -> Result<Self, ViewportError> {
        let raster = derive_raster(x, y, scale)?;

        Ok(Self {
            x,
            y,
            scale,
            raster,
        })
    }

    pub fn raster(&self) -> Raster {
        self.raster
    }
}
