use backend::system::System;
use backend::texture::load_texture;

mod config;
mod grid;
mod render;
mod round;
mod session;

use config::*;
use grid::Grid;
use render::Backdrops;
use round::RoundGenerator;
use session::Session;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("Game initialization failure: {e}");
    }
}

fn run() -> backend::Result<()> {
    let mut system = System::new(SCREEN_WIDTH, SCREEN_HEIGHT + STATUS_BAR_HEIGHT, WINDOW_TITLE)?;
    let ttf = backend::text::init()?;
    let creator = system.texture_creator();
    let font = backend::text::load_font(&ttf, FONT_ASSET, FONT_SIZE)?;
    let backdrops = Backdrops {
        intro: load_texture(&creator, INTRO_ASSET)?,
        game_over: load_texture(&creator, GAME_OVER_ASSET)?,
    };

    let mut rounds = RoundGenerator::from_time();
    let mut session = Session::new(system.ticks());

    loop {
        let (w, h) = system.window_size();
        let grid = Grid::new(w, h.saturating_sub(STATUS_BAR_HEIGHT));

        // game logic
        let now = system.ticks();
        session.drain(system.process_io_events(), &grid, now, &mut rounds);
        if session.screen().is_finished() {
            break;
        }

        // game gfx render logic
        let now = system.ticks();
        let mut renderer = system.renderer(&creator, &font);
        if let Err(e) = render::frame(&mut renderer, &session, &backdrops, &grid, now) {
            log::warn!("frame dropped: {e}");
        }
    }
    log::info!("bye");
    Ok(())
}
