//! Multi-stop color gradients and the lookup table sampled from them.
//!
//! The lookup table maps an escape iteration to a packed color: index 0 is
//! the color of points that escape immediately, the last index the color of
//! points that reach the iteration cap.

use std::ops::Deref;

use log::debug;
use thiserror::Error;

use crate::color::{ColorError, Rgba};

#[derive(Debug, Error, PartialEq)]
pub enum GradientError {
    #[error("a gradient needs at least 2 stops, got {0}")]
    TooFewStops(usize),
    #[error("stop position {0} is outside [0, 1]")]
    PositionOutOfRange(f64),
    #[error("stop positions must be strictly increasing ({previous} then {next})")]
    NotIncreasing { previous: f64, next: f64 },
    #[error("invalid stop color: {0}")]
    Color(#[from] ColorError),
    #[error("a color lookup table needs at least 2 entries, got {0}")]
    LutTooSmall(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub position: f64,
    pub color: Rgba,
}

impl GradientStop {
    pub fn new(position: f64, color: Rgba) -> Self {
        Self { position, color }
    }
}

/// A validated gradient. Stops are strictly increasing and always begin at
/// 0 and end at 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<GradientStop>,
}

impl Gradient {
    /// Validates `stops`. A missing stop at 0 or 1 is filled in with the
    /// color of the nearest stop, the way a canvas gradient extends its
    /// outermost colors.
    pub fn new(mut stops: Vec<GradientStop>) -> Result<Self, GradientError> {
        if stops.len() < 2 {
            return Err(GradientError::TooFewStops(stops.len()));
        }

        for stop in &stops {
            if !(0.0..=1.0).contains(&stop.position) {
                return Err(GradientError::PositionOutOfRange(stop.position));
            }
        }

        for pair in stops.windows(2) {
            if pair[1].position <= pair[0].position {
                return Err(GradientError::NotIncreasing {
                    previous: pair[0].position,
                    next: pair[1].position,
                });
            }
        }

        let first = stops[0];
        if first.position > 0.0 {
            stops.insert(0, GradientStop::new(0.0, first.color));
        }

        let last = stops[stops.len() - 1];
        if last.position < 1.0 {
            stops.push(GradientStop::new(1.0, last.color));
        }

        Ok(Self { stops })
    }

    pub fn from_hex_stops(stops: &[(f64, &str)]) -> Result<Self, GradientError> {
        let stops = stops
            .iter()
            .map(|&(position, hex)| Ok(GradientStop::new(position, hex.parse()?)))
            .collect::<Result<Vec<_>, GradientError>>()?;

        Self::new(stops)
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Color at position `t`, clamped to `[0, 1]`.
    pub fn sample(&self, t: f64) -> Rgba {
        let t = t.clamp(0.0, 1.0);

        // First stop whose position is at or past `t`; never 0 unless t == 0.
        let upper = self
            .stops
            .iter()
            .position(|stop| stop.position >= t)
            .unwrap_or(self.stops.len() - 1);

        if upper == 0 {
            return self.stops[0].color;
        }

        let (from, to) = (self.stops[upper - 1], self.stops[upper]);
        let f = (t - from.position) / (to.position - from.position);

        Rgba::lerp(from.color, to.color, f)
    }
}

/// Immutable table of packed colors, one per iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorLut(Box<[u32]>);

impl Deref for ColorLut {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.0
    }
}

/// Samples `gradient` at `size` equally spaced positions, `i / (size - 1)`.
pub fn build_color_lut(gradient: &Gradient, size: usize) -> Result<ColorLut, GradientError> {
    if size < 2 {
        return Err(GradientError::LutTooSmall(size));
    }

    let last = (size - 1) as f64;
    let lut = (0..size)
        .map(|i| gradient.sample(i as f64 / last).pack())
        .collect::<Box<[u32]>>();

    debug!(
        "built color lut with {} entries from {} stops",
        lut.len(),
        gradient.stops().len()
    );

    Ok(ColorLut(lut))
}
