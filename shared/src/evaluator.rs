//! The fractal evaluator: turns a window onto the complex plane into a
//! buffer of packed colors.

use num_complex::Complex64;
use thiserror::Error;

use crate::gradient::ColorLut;
use crate::viewport::{Range, Raster};

/// Produces one packed color per raster pixel, row-major.
pub trait Evaluator {
    type Error: std::error::Error + Send + Sync + 'static;

    fn evaluate(&mut self, x: Range, y: Range, power: f64) -> Result<Vec<u32>, Self::Error>;
}

#[derive(Debug, Error, PartialEq)]
pub enum EvaluateError {
    #[error("an evaluator needs at least one iteration")]
    NoIterations,
    #[error("divergence threshold must be positive, got {0}")]
    InvalidThreshold(f64),
    #[error("color lookup table has {lut} entries but the iteration budget is {iterations}")]
    LutLength { lut: usize, iterations: u32 },
    #[error("no color for escape index {0}")]
    ColorIndex(u32),
}

/// Escape-time evaluator for `z <- z^power + c`, computed on the CPU.
pub struct Multibrot {
    raster: Raster,
    iterations: u32,
    threshold: f64,
    colors: ColorLut,
}

impl Multibrot {
    pub fn new(
        raster: Raster,
        iterations: u32,
        threshold: f64,
        colors: ColorLut,
    ) -> Result<Self, EvaluateError> {
        if iterations == 0 {
            return Err(EvaluateError::NoIterations);
        }
        if !(threshold.is_finite() && threshold > 0.0) {
            return Err(EvaluateError::InvalidThreshold(threshold));
        }
        if colors.len() != iterations as usize {
            return Err(EvaluateError::LutLength {
                lut: colors.len(),
                iterations,
            });
        }

        Ok(Self {
            raster,
            iterations,
            threshold,
            colors,
        })
    }

    pub fn raster(&self) -> Raster {
        self.raster
    }

    /// Iteration at which `c` escapes, or the last index if it never does.
    fn escape_index(&self, c: Complex64, power: f64) -> u32 {
        let mut z = Complex64::new(0., 0.);

        for i in 0..self.iterations {
            z = z.powf(power) + c;
            if z.norm() > self.threshold {
                return i;
            }
        }

        self.iterations - 1
    }
}

impl Evaluator for Multibrot {
    type Error = EvaluateError;

    fn evaluate(&mut self, x: Range, y: Range, power: f64) -> Result<Vec<u32>, EvaluateError> {
        let Raster { width, height } = self.raster;
        let scale_x = width as f64 / x.span();
        let scale_y = height as f64 / y.span();

        let mut data = Vec::with_capacity(self.raster.pixel_count());

        for py in 0..height {
            let cy = y.min + py as f64 / scale_y;

            for px in 0..width {
                let cx = x.min + px as f64 / scale_x;

                let index = self.escape_index(Complex64::new(cx, cy), power);
                let color = self
                    .colors
                    .get(index as usize)
                    .ok_or(EvaluateError::ColorIndex(index))?;

                data.push(*color);
            }
        }

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::gradient::{build_color_lut, Gradient, GradientStop};

    const FAST: Rgba = Rgba::opaque(255, 0, 0);
    const INSIDE: Rgba = Rgba::opaque(0, 0, 255);

    fn lut(size: usize) -> ColorLut {
        let gradient =
            Gradient::new(vec![GradientStop::new(0.0, FAST), GradientStop::new(1.0, INSIDE)])
                .unwrap();
        build_color_lut(&gradient, size).unwrap()
    }

    fn multibrot(width: u32, height: u32) -> Multibrot {
        Multibrot::new(Raster { width, height }, 16, 2.0, lut(16)).unwrap()
    }

    #[test]
    fn buffer_covers_whole_raster() {
        let mut evaluator = multibrot(7, 5);
        let data = evaluator
            .evaluate(Range::new(-2., 1.).unwrap(), Range::new(-1.5, 1.5).unwrap(), 2.)
            .unwrap();

        assert_eq!(data.len(), 35);
    }

    #[test]
    fn origin_never_escapes() {
        let evaluator = multibrot(1, 1);

        assert_eq!(evaluator.escape_index(Complex64::new(0., 0.), 2.), 15);
        assert_eq!(evaluator.escape_index(Complex64::new(0., 0.), 3.7), 15);
    }

    #[test]
    fn distant_point_escapes_immediately() {
        let evaluator = multibrot(1, 1);

        assert_eq!(evaluator.escape_index(Complex64::new(10., 10.), 2.), 0);
    }

    #[test]
    fn pixels_are_row_major() {
        // Pixel (0, 0) maps to c = -10 - 10i, far outside; pixel (1, 1) to the origin.
        let mut evaluator = multibrot(2, 2);
        let data = evaluator
            .evaluate(Range::new(-10., 10.).unwrap(), Range::new(-10., 10.).unwrap(), 2.)
            .unwrap();

        assert_eq!(data, vec![FAST.pack(), FAST.pack(), FAST.pack(), INSIDE.pack()]);
    }

    #[test]
    fn rejects_mismatched_lut() {
        let raster = Raster {
            width: 1,
            height: 1,
        };

        assert_eq!(
            Multibrot::new(raster, 64, 2.0, lut(32)).err(),
            Some(EvaluateError::LutLength {
                lut: 32,
                iterations: 64
            })
        );
        assert_eq!(
            Multibrot::new(raster, 0, 2.0, lut(2)).err(),
            Some(EvaluateError::NoIterations)
        );
        assert_eq!(
            Multibrot::new(raster, 2, 0.0, lut(2)).err(),
            Some(EvaluateError::InvalidThreshold(0.0))
        );
    }
}
