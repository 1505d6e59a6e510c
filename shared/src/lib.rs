//! Platform independent pieces of the Multibrot renderer: colors, the
//! gradient lookup table, viewport math and the fractal evaluator.

pub use bytemuck;

pub mod color;
pub mod evaluator;
pub mod gradient;
pub mod viewport;

pub use color::{ColorError, Rgba};
pub use evaluator::{EvaluateError, Evaluator, Multibrot};
pub use gradient::{build_color_lut, ColorLut, Gradient, GradientError, GradientStop};
pub use viewport::{derive_raster, Range, Raster, Viewport, ViewportError};
