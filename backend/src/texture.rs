use crate::{BackendError, Result};
use resources::image::RgbaImage;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{BlendMode, Texture, TextureCreator};
use sdl2::video::WindowContext;

/// Loads an asset image (path relative to the asset directory) into a texture.
pub fn load_texture<'a>(
    creator: &'a TextureCreator<WindowContext>,
    relative: &str,
) -> Result<Texture<'a>> {
    let path = resources::assets::locate(relative)?;
    let img = resources::image::load_rgba(&path)?;
    upload(creator, &img).map_err(|e| match e {
        BackendError::AssetLoad(msg) => {
            BackendError::AssetLoad(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })
}

pub fn upload<'a>(
    creator: &'a TextureCreator<WindowContext>,
    img: &RgbaImage,
) -> Result<Texture<'a>> {
    let mut texture = match creator.create_texture_static(
        PixelFormatEnum::RGBA32,
        img.width as u32,
        img.height as u32,
    ) {
        Ok(t) => t,
        Err(e) => return Err(BackendError::AssetLoad(format!("creating texture: {e}"))),
    };
    if let Err(e) = texture.update(None, &img.pixels, img.pitch()) {
        return Err(BackendError::AssetLoad(format!("uploading pixels: {e}")));
    }
    texture.set_blend_mode(BlendMode::Blend);
    Ok(texture)
}
