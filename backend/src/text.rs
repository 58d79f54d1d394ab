use crate::math::Rgba;
use crate::{BackendError, Result};
use sdl2::render::{Texture, TextureCreator};
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::WindowContext;

pub fn init() -> Result<Sdl2TtfContext> {
    sdl2::ttf::init().map_err(|e| BackendError::Init(format!("SDL_ttf could not initialize: {e}")))
}

/// Opens an asset font (path relative to the asset directory).
pub fn load_font<'ttf>(
    ctx: &'ttf Sdl2TtfContext,
    relative: &str,
    point_size: u16,
) -> Result<Font<'ttf, 'static>> {
    let path = resources::assets::locate(relative)?;
    ctx.load_font(&path, point_size)
        .map_err(|e| BackendError::AssetLoad(format!("font {}: {e}", path.display())))
}

/// Rasterizes `text` onto a solid background.
pub fn render<'a>(
    creator: &'a TextureCreator<WindowContext>,
    font: &Font<'_, 'static>,
    text: &str,
    fg: Rgba,
    bg: Rgba,
) -> Result<Texture<'a>> {
    let surface = font
        .render(text)
        .shaded(fg, bg)
        .map_err(|e| BackendError::TextRender(format!("{text:?}: {e}")))?;
    creator
        .create_texture_from_surface(&surface)
        .map_err(|e| BackendError::TextRender(format!("{text:?}: {e}")))
}
