use shared::{Gradient, GradientError, Range, Viewport, ViewportError};

pub const ITERATIONS: u32 = 64;
pub const THRESHOLD: f64 = 2.0;

pub const RANGE_X: (f64, f64) = (-2.0, 1.0);
pub const RANGE_Y: (f64, f64) = (-1.5, 1.5);

/// Pixels per unit of the complex plane.
pub const SCALE: f64 = 256.0;

pub const INITIAL_POWER: f64 = 1.0;
pub const POWER_STEP: f64 = 0.1;

/// Escape-time palette. The final color also covers positions past its stop.
pub const PALETTE: &[(f64, &str)] = &[
    (0.00, "#000764"),
    (0.16, "#2068CB"),
    (0.42, "#EDFFFF"),
    (0.6425, "#FFAA00"),
    (0.8575, "#000200"),
];

#[derive(Debug, Clone)]
pub struct Config {
    pub iterations: u32,
    pub threshold: f64,
    pub range_x: (f64, f64),
    pub range_y: (f64, f64),
    pub scale: f64,
    pub initial_power: f64,
    pub power_step: f64,
    pub palette: &'static [(f64, &'static str)],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            iterations: ITERATIONS,
            threshold: THRESHOLD,
            range_x: RANGE_X,
            range_y: RANGE_Y,
            scale: SCALE,
            initial_power: INITIAL_POWER,
            power_step: POWER_STEP,
            palette: PALETTE,
        }
    }
}

impl Config {
    pub fn viewport(&self) -> Result<Viewport, ViewportError> {
        let x = Range::new(self.range_x.0, self.range_x.1)?;
        let y = Range::new(self.range_y.0, self.range_y.1)?;

        Viewport::new(x, y, self.scale)
    }

    pub fn gradient(&self) -> Result<Gradient, GradientError> {
        Gradient::from_hex_stops(self.palette)
    }
}
