use crate::math::{Rect, Rgba};
use crate::{text, BackendError, Result};
use sdl2::render::{Texture, TextureCreator, WindowCanvas};
use sdl2::ttf::Font;
use sdl2::video::WindowContext;

/// Drawing surface for one frame.
///
/// `Image` is whatever the implementation can blit: a GPU texture for the SDL
/// renderer, something inspectable in tests.
pub trait Draw {
    type Image;

    fn clear(&mut self, color: Rgba);
    fn fill_rect(&mut self, rect: Rect, color: Rgba) -> Result<()>;
    fn stroke_rect(&mut self, rect: Rect, color: Rgba) -> Result<()>;
    fn blit(&mut self, image: &Self::Image, x: i32, y: i32) -> Result<()>;
    /// Rasterizes a line of text with the loaded font.
    fn text(&mut self, text: &str, fg: Rgba, bg: Rgba) -> Result<Self::Image>;
    fn image_size(&self, image: &Self::Image) -> (u32, u32);
    fn present(&mut self);
}

pub struct Renderer<'a> {
    canvas: &'a mut WindowCanvas,
    creator: &'a TextureCreator<WindowContext>,
    font: &'a Font<'a, 'static>,
}

impl<'a> Renderer<'a> {
    pub fn new(
        canvas: &'a mut WindowCanvas,
        creator: &'a TextureCreator<WindowContext>,
        font: &'a Font<'a, 'static>,
    ) -> Self {
        Self {
            canvas,
            creator,
            font,
        }
    }
}

impl<'a> Draw for Renderer<'a> {
    type Image = Texture<'a>;

    fn clear(&mut self, color: Rgba) {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) -> Result<()> {
        self.canvas.set_draw_color(color);
        self.canvas.fill_rect(sdl2::rect::Rect::from(rect)).map_err(BackendError::Draw)
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgba) -> Result<()> {
        self.canvas.set_draw_color(color);
        self.canvas.draw_rect(sdl2::rect::Rect::from(rect)).map_err(BackendError::Draw)
    }

    fn blit(&mut self, image: &Texture<'a>, x: i32, y: i32) -> Result<()> {
        let (w, h) = self.image_size(image);
        self.canvas
            .copy(image, None, sdl2::rect::Rect::new(x, y, w, h))
            .map_err(BackendError::Draw)
    }

    fn text(&mut self, text: &str, fg: Rgba, bg: Rgba) -> Result<Texture<'a>> {
        text::render(self.creator, self.font, text, fg, bg)
    }

    fn image_size(&self, image: &Texture<'a>) -> (u32, u32) {
        let q = image.query();
        (q.width, q.height)
    }

    fn present(&mut self) {
        self.canvas.present();
        ::std::thread::sleep(::std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }
}
