pub mod config;
pub mod driver;
pub mod error;
pub mod surface;

use anyhow::{Context, Result};
use log::{info, trace};
use shared::{build_color_lut, Multibrot};
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::{
    config::Config,
    driver::{AnimationState, Animator, Tick},
    error::RenderError,
    surface::{PixelSurface, RasterSurface},
};

fn main() -> Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config = Config::default();
    info!("Starting multibrot: {:?}", config);

    let viewport = config.viewport().context("Invalid viewport")?;
    let raster = viewport.raster();
    info!("Raster is {}x{} pixels", raster.width, raster.height);

    let gradient = config.gradient().context("Invalid palette")?;
    let colors = build_color_lut(&gradient, config.iterations as usize)
        .context("Failed to build the color table")?;
    let evaluator = Multibrot::new(raster, config.iterations, config.threshold, colors)
        .context("Failed to create the evaluator")?;

    let event_loop = EventLoop::new();

    let window = WindowBuilder::new()
        .with_title("Multibrot")
        .with_inner_size(PhysicalSize::new(raster.width, raster.height))
        .build(&event_loop)
        .map_err(|e| RenderError::ElementNotFound(e.to_string()))
        .context("Failed to open the raster window")?;

    let mut surface = pollster::block_on(PixelSurface::new(window, raster))
        .context("Failed to create the raster surface")?;

    let mut animator = Animator::new(
        evaluator,
        viewport,
        AnimationState::new(config.initial_power, config.power_step),
    );
    animator.start();

    event_loop.run(move |event, _, control_flow| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == surface.window().id() => match event {
            WindowEvent::Resized(size) => surface.resize(size.width, size.height),
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state: ElementState::Pressed,
                        virtual_keycode: Some(VirtualKeyCode::Escape),
                        ..
                    },
                ..
            } => {
                animator.stop();
                *control_flow = ControlFlow::Exit;
            }
            _ => {}
        },
        Event::RedrawRequested(window_id) if window_id == surface.window().id() => {
            match animator.tick(&mut surface) {
                Ok(Tick::Rendered { frame, power }) => {
                    trace!("Presented frame {} at power {:.1}", frame, power);
                }
                Ok(Tick::Inactive) => {}
                // Already logged; leave the last frame on screen until closed.
                Err(_) => *control_flow = ControlFlow::Wait,
            }
        }
        Event::MainEventsCleared => {
            if animator.is_running() {
                surface.window().request_redraw();
            }
        }
        _ => {}
    });
}
