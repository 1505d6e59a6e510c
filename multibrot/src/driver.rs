//! The animation loop: one evaluator call and one presented frame per tick,
//! with the power exponent advancing between ticks.

use std::time::Instant;

use log::{debug, error, info};
use shared::{Evaluator, Raster, Viewport};

use crate::error::RenderError;
use crate::surface::RasterSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    /// The host asked the animation to end.
    Stopped,
    /// A tick failed; the last presented frame stays on screen.
    Halted,
}

/// The exponent and the number of frames it has advanced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    initial: f64,
    step: f64,
    frame: u64,
}

impl AnimationState {
    pub fn new(initial: f64, step: f64) -> Self {
        Self {
            initial,
            step,
            frame: 0,
        }
    }

    /// Frames rendered so far; also the index of the next one.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn power(&self) -> f64 {
        self.initial + self.step * self.frame as f64
    }

    fn advance(&mut self) {
        self.frame += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    Rendered { frame: u64, power: f64 },
    /// The animator was not running, nothing was drawn.
    Inactive,
}

pub struct Animator<E> {
    evaluator: E,
    viewport: Viewport,
    state: AnimationState,
    pixels: Vec<u32>,
    phase: Phase,
}

impl<E: Evaluator> Animator<E> {
    pub fn new(evaluator: E, viewport: Viewport, state: AnimationState) -> Self {
        Self {
            evaluator,
            pixels: vec![0; viewport.raster().pixel_count()],
            viewport,
            state,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn raster(&self) -> Raster {
        self.viewport.raster()
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn start(&mut self) {
        if self.phase == Phase::Idle {
            info!("Animation starting at power {}", self.state.power());
            self.phase = Phase::Running;
        }
    }

    pub fn stop(&mut self) {
        if self.is_running() {
            info!("Animation stopped after {} frames", self.state.frame());
        }
        self.phase = Phase::Stopped;
    }

    /// Renders one frame. Any failure halts the animation for good.
    pub fn tick<S: RasterSurface>(&mut self, surface: &mut S) -> Result<Tick, RenderError> {
        if !self.is_running() {
            return Ok(Tick::Inactive);
        }

        match self.render(surface) {
            Ok(tick) => Ok(tick),
            Err(e) => {
                error!("Halting animation at frame {}: {}", self.state.frame(), e);
                self.phase = Phase::Halted;
                Err(e)
            }
        }
    }

    fn render<S: RasterSurface>(&mut self, surface: &mut S) -> Result<Tick, RenderError> {
        let frame = self.state.frame();
        let power = self.state.power();

        let start = Instant::now();
        let buffer = self
            .evaluator
            .evaluate(self.viewport.x, self.viewport.y, power)
            .map_err(|e| RenderError::Evaluator(Box::new(e)))?;
        debug!("frame {} (power {:.1}) evaluated in {:?}", frame, power, start.elapsed());

        if buffer.len() != self.pixels.len() {
            return Err(RenderError::BufferSizeMismatch {
                expected: self.pixels.len(),
                actual: buffer.len(),
            });
        }
        self.pixels.copy_from_slice(&buffer);

        surface.submit(&self.pixels)?;
        self.state.advance();

        Ok(Tick::Rendered { frame, power })
    }
}
