use crate::draw::Renderer;
use crate::{BackendError, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::render::{TextureCreator, WindowCanvas};
use sdl2::ttf::Font;
use sdl2::video::WindowContext;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MouseButtonId {
    // x, y
    Left(i32, i32),
    Right(i32, i32),
    Middle(i32, i32),
    Other(i32, i32),
}

impl MouseButtonId {
    pub fn position(self) -> (i32, i32) {
        match self {
            MouseButtonId::Left(x, y)
            | MouseButtonId::Right(x, y)
            | MouseButtonId::Middle(x, y)
            | MouseButtonId::Other(x, y) => (x, y),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IoEvents {
    Quit,
    MouseButtonUp(MouseButtonId),
}

/// Maps a raw SDL event onto the events the game reacts to. Escape counts as
/// a quit request.
pub fn translate(event: &Event) -> Option<IoEvents> {
    match *event {
        Event::Quit { .. }
        | Event::KeyDown {
            keycode: Some(Keycode::Escape),
            ..
        } => Some(IoEvents::Quit),
        Event::MouseButtonUp {
            mouse_btn, x, y, ..
        } => Some(IoEvents::MouseButtonUp(match mouse_btn {
            MouseButton::Left => MouseButtonId::Left(x, y),
            MouseButton::Right => MouseButtonId::Right(x, y),
            MouseButton::Middle => MouseButtonId::Middle(x, y),
            _ => MouseButtonId::Other(x, y),
        })),
        _ => None,
    }
}

pub struct System {
    _sdl_context: sdl2::Sdl,
    _video_subsystem: sdl2::VideoSubsystem,
    timer: sdl2::TimerSubsystem,
    event_pump: sdl2::EventPump,
    canvas: WindowCanvas,
    events: Vec<IoEvents>,
}

impl System {
    pub fn new(w: u32, h: u32, title: &str) -> Result<System> {
        let sdl_context = sdl2::init().map_err(BackendError::Init)?;
        let video_subsystem = sdl_context.video().map_err(BackendError::Init)?;
        let timer = sdl_context.timer().map_err(BackendError::Init)?;

        if !sdl2::hint::set("SDL_RENDER_SCALE_QUALITY", "1") {
            log::warn!("linear texture filtering not enabled");
        }

        let window = match video_subsystem
            .window(title, w, h)
            .position_centered()
            .build()
        {
            Ok(w) => w,
            Err(e) => return Err(BackendError::Init(format!("error while building window: {e}"))),
        };

        let canvas = match window.into_canvas().accelerated().build() {
            Ok(c) => c,
            Err(e) => return Err(BackendError::Init(format!("error while creating renderer: {e}"))),
        };

        let event_pump = sdl_context.event_pump().map_err(BackendError::Init)?;
        log::info!("created {w}x{h} window \"{title}\"");

        Ok(System {
            _sdl_context: sdl_context,
            _video_subsystem: video_subsystem,
            timer,
            event_pump,
            canvas,
            events: Vec::new(),
        })
    }

    /// Drains the SDL queue without blocking. Events the game does not
    /// consume are dropped.
    pub fn process_io_events(&mut self) -> &[IoEvents] {
        self.events.clear();
        for event in self.event_pump.poll_iter() {
            if let Some(e) = translate(&event) {
                self.events.push(e);
            }
        }
        &self.events
    }

    /// Milliseconds since SDL was initialized.
    pub fn ticks(&self) -> u64 {
        u64::from(self.timer.ticks())
    }

    pub fn window_size(&self) -> (u32, u32) {
        self.canvas.window().size()
    }

    pub fn texture_creator(&self) -> TextureCreator<WindowContext> {
        self.canvas.texture_creator()
    }

    pub fn renderer<'a>(
        &'a mut self,
        creator: &'a TextureCreator<WindowContext>,
        font: &'a Font<'a, 'static>,
    ) -> Renderer<'a> {
        Renderer::new(&mut self.canvas, creator, font)
    }
}
