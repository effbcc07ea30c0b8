//! SDL2-backed window presentation and input polling (feature `display`).
//!
//! The rendering core never calls into this module; it only promises the
//! 32bpp RGBA byte layout that [`Surface::as_bytes`] exposes. All window
//! state lives in explicit context objects owned by the caller; there are
//! no process-wide globals. Errors at this seam stay `Result<_, String>`
//! because that is what SDL reports.

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;

use log::debug;

use crate::surface::{Surface, BYTES_PER_PIXEL};

/// Window, canvas, and event pump for presenting surfaces
pub struct Display {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    width: u32,
    height: u32,
    close_requested: bool,
}

/// Streaming texture sized to match the surfaces it will present
pub struct RenderTarget<'a> {
    texture: Texture<'a>,
}

/// Input events drained by [`Display::poll_events`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The user asked to close the window
    CloseRequested,
    KeyPress(Keycode),
    KeyRelease(Keycode),
}

impl Display {
    /// Create a window with VSync enabled
    pub fn new(
        title: &str,
        width: u32,
        height: u32,
    ) -> Result<(Self, TextureCreator<WindowContext>), String> {
        Self::with_options(title, width, height, true)
    }

    /// Create a window with configurable VSync.
    /// vsync=true: locked to monitor refresh; vsync=false: uncapped.
    pub fn with_options(
        title: &str,
        width: u32,
        height: u32,
        vsync: bool,
    ) -> Result<(Self, TextureCreator<WindowContext>), String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let mut canvas_builder = window.into_canvas().accelerated();
        if vsync {
            canvas_builder = canvas_builder.present_vsync();
        }
        let canvas = canvas_builder.build().map_err(|e| e.to_string())?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump()?;
        debug!("display initialized at {width}x{height}, vsync={vsync}");

        Ok((
            Self {
                canvas,
                event_pump,
                width,
                height,
                close_requested: false,
            },
            texture_creator,
        ))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Upload `surface` into the target texture and present it.
    /// The surface bytes go up as-is; no channel conversion happens here.
    pub fn present(&mut self, target: &mut RenderTarget, surface: &Surface) -> Result<(), String> {
        target
            .texture
            .update(
                None,
                surface.as_bytes(),
                surface.width() as usize * BYTES_PER_PIXEL,
            )
            .map_err(|e| e.to_string())?;

        self.canvas.copy(&target.texture, None, None)?;
        self.canvas.present();
        Ok(())
    }

    /// Drain all pending events without blocking
    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => {
                    self.close_requested = true;
                    events.push(InputEvent::CloseRequested);
                },
                Event::KeyDown {
                    keycode: Some(k), ..
                } => events.push(InputEvent::KeyPress(k)),
                Event::KeyUp {
                    keycode: Some(k), ..
                } => events.push(InputEvent::KeyRelease(k)),
                _ => {},
            }
        }

        events
    }

    /// True once a close request has been observed by `poll_events`
    pub fn should_close(&self) -> bool {
        self.close_requested
    }
}

impl<'a> RenderTarget<'a> {
    /// Create a streaming texture matching the surface layout
    /// (ABGR8888 is the SDL name for byte order r,g,b,a on little-endian)
    pub fn new(
        texture_creator: &'a TextureCreator<WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = texture_creator
            .create_texture_streaming(PixelFormatEnum::ABGR8888, width, height)
            .map_err(|e| e.to_string())?;
        Ok(Self { texture })
    }
}
