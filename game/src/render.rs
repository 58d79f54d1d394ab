use crate::config::{
    BACKGROUND, CELL_BORDER, FINAL_SCORE_Y, SCORE_TEXT_X, SCREEN_HEIGHT, SCREEN_WIDTH, TEXT_BG,
    TEXT_FG,
};
use crate::grid::Grid;
use crate::round::shade;
use crate::session::{Screen, Session};
use backend::draw::Draw;
use backend::Result;

/// Full-screen images for the screens that are not drawn procedurally.
pub struct Backdrops<I> {
    pub intro: I,
    pub game_over: I,
}

/// Draws and presents one frame for the session's current screen.
///
/// Text that fails to render is skipped with a warning. A failing primitive
/// stops the frame early and is returned to the caller.
pub fn frame<D: Draw>(
    draw: &mut D,
    session: &Session,
    backdrops: &Backdrops<D::Image>,
    grid: &Grid,
    now_millis: u64,
) -> Result<()> {
    match session.screen() {
        Screen::Intro => {
            draw.clear(BACKGROUND);
            draw.blit(&backdrops.intro, 0, 0)?;
        }
        Screen::Playing => playing(draw, session, grid, now_millis)?,
        Screen::GameOver => {
            draw.clear(BACKGROUND);
            draw.blit(&backdrops.game_over, 0, 0)?;
            let line = format!("Your final score: {}", session.score());
            text_at(draw, &line, |_, _| (0, FINAL_SCORE_Y))?;
        }
        Screen::Victory => victory(draw, session)?,
        Screen::Quit => return Ok(()),
    }
    draw.present();
    Ok(())
}

fn playing<D: Draw>(draw: &mut D, session: &Session, grid: &Grid, now_millis: u64) -> Result<()> {
    draw.clear(BACKGROUND);

    let base = session.base_color();
    for (_, rect) in grid.cells() {
        draw.fill_rect(rect, base)?;
    }
    let odd = shade(base, session.shade_delta());
    draw.fill_rect(grid.cell_rect(session.selected_cell()), odd)?;
    for (_, rect) in grid.cells() {
        draw.stroke_rect(rect, CELL_BORDER)?;
    }

    let status_y = SCREEN_HEIGHT as i32;
    let timer = format!("Time: {}", session.elapsed_secs(now_millis));
    text_at(draw, &timer, |_, _| (0, status_y))?;
    let score = format!("Score: {}", session.score());
    text_at(draw, &score, |_, _| (SCORE_TEXT_X, status_y))?;
    Ok(())
}

fn victory<D: Draw>(draw: &mut D, session: &Session) -> Result<()> {
    draw.clear(BACKGROUND);

    let mid = SCREEN_HEIGHT as i32 / 2;
    let won = format!("You won in: {} seconds!", session.win_time_secs());
    let won_height = text_at(draw, &won, |w, _| (centered(w), mid))?;
    // fall back to the prompt's own height when the first line was skipped
    text_at(draw, "Click anywhere to play again!", |w, h| {
        (centered(w), mid + won_height.unwrap_or(h) as i32)
    })?;
    Ok(())
}

fn centered(width: u32) -> i32 {
    (SCREEN_WIDTH as i32 - width as i32) / 2
}

/// Rasterizes `text` and blits it where `place(width, height)` says. Returns
/// the text height, or `None` when rasterizing failed and the text was skipped.
fn text_at<D: Draw>(
    draw: &mut D,
    text: &str,
    place: impl FnOnce(u32, u32) -> (i32, i32),
) -> Result<Option<u32>> {
    let image = match draw.text(text, TEXT_FG, TEXT_BG) {
        Ok(image) => image,
        Err(e) => {
            log::warn!("skipping text this frame: {e}");
            return Ok(None);
        }
    };
    let (w, h) = draw.image_size(&image);
    let (x, y) = place(w, h);
    draw.blit(&image, x, y)?;
    Ok(Some(h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CELL_COUNT, DEFAULT_BASE_COLOR, INITIAL_SHADE_DELTA};
    use crate::round::RoundGenerator;
    use crate::session::Input;
    use backend::math::{Rect, Rgba};
    use backend::BackendError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Image {
        Backdrop(&'static str),
        Text(String),
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Op {
        Clear(Rgba),
        Fill(Rect, Rgba),
        Stroke(Rect, Rgba),
        Blit(Image, i32, i32),
        Present,
    }

    /// Records draw calls; text images are 10 px per character, 40 px tall.
    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
        fail_text: bool,
        fail_fill: bool,
    }

    impl Draw for Recorder {
        type Image = Image;

        fn clear(&mut self, color: Rgba) {
            self.ops.push(Op::Clear(color));
        }

        fn fill_rect(&mut self, rect: Rect, color: Rgba) -> Result<()> {
            if self.fail_fill {
                return Err(BackendError::Draw("fill refused".to_string()));
            }
            self.ops.push(Op::Fill(rect, color));
            Ok(())
        }

        fn stroke_rect(&mut self, rect: Rect, color: Rgba) -> Result<()> {
            self.ops.push(Op::Stroke(rect, color));
            Ok(())
        }

        fn blit(&mut self, image: &Image, x: i32, y: i32) -> Result<()> {
            self.ops.push(Op::Blit(image.clone(), x, y));
            Ok(())
        }

        fn text(&mut self, text: &str, _fg: Rgba, _bg: Rgba) -> Result<Image> {
            if self.fail_text {
                return Err(BackendError::TextRender(text.to_string()));
            }
            Ok(Image::Text(text.to_string()))
        }

        fn image_size(&self, image: &Image) -> (u32, u32) {
            match image {
                Image::Backdrop(_) => (SCREEN_WIDTH, SCREEN_HEIGHT),
                Image::Text(t) => (t.len() as u32 * 10, 40),
            }
        }

        fn present(&mut self) {
            self.ops.push(Op::Present);
        }
    }

    fn backdrops() -> Backdrops<Image> {
        Backdrops {
            intro: Image::Backdrop("intro"),
            game_over: Image::Backdrop("game over"),
        }
    }

    fn grid() -> Grid {
        Grid::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    fn session_on(screen: Screen) -> Session {
        let mut rounds = RoundGenerator::new(StdRng::seed_from_u64(3));
        let g = grid();
        let mut s = Session::new(0);
        let click = |cell: usize| {
            let r = g.cell_rect(cell);
            Input::Click { x: r.x + 1, y: r.y + 1 }
        };
        match screen {
            Screen::Intro => {}
            Screen::Playing => {
                s.handle(click(0), &g, 0, &mut rounds);
            }
            Screen::GameOver => {
                s.handle(click(0), &g, 0, &mut rounds);
                let target = s.selected_cell();
                s.handle(click(target), &g, 0, &mut rounds);
                let wrong = (s.selected_cell() + 1) % CELL_COUNT;
                s.handle(click(wrong), &g, 0, &mut rounds);
            }
            Screen::Victory => {
                s.handle(click(0), &g, 0, &mut rounds);
                loop {
                    let target = s.selected_cell();
                    if s.handle(click(target), &g, 12_345, &mut rounds) == Some(Screen::Victory) {
                        break;
                    }
                }
            }
            Screen::Quit => {
                s.handle(Input::Quit, &g, 0, &mut rounds);
            }
        }
        assert_eq!(s.screen(), screen);
        s
    }

    fn render(session: &Session, rec: &mut Recorder, now: u64) -> Result<()> {
        frame(rec, session, &backdrops(), &grid(), now)
    }

    #[test]
    fn intro_shows_the_intro_image() {
        let mut rec = Recorder::default();
        render(&session_on(Screen::Intro), &mut rec, 0).unwrap();
        assert_eq!(
            rec.ops,
            vec![
                Op::Clear(BACKGROUND),
                Op::Blit(Image::Backdrop("intro"), 0, 0),
                Op::Present
            ]
        );
    }

    #[test]
    fn playing_paints_grid_odd_cell_borders_and_status() {
        let s = session_on(Screen::Playing);
        let mut rec = Recorder::default();
        render(&s, &mut rec, 7_250).unwrap();

        let fills: Vec<_> = rec.ops.iter().filter(|op| matches!(op, Op::Fill(..))).collect();
        assert_eq!(fills.len(), CELL_COUNT + 1);
        for (i, rect) in grid().cells() {
            assert_eq!(fills[i], &Op::Fill(rect, DEFAULT_BASE_COLOR));
        }
        let odd = shade(DEFAULT_BASE_COLOR, INITIAL_SHADE_DELTA);
        assert_eq!(fills[CELL_COUNT], &Op::Fill(grid().cell_rect(0), odd));
        assert_eq!(odd, Rgba::new(0, 127, 255, 255));

        let strokes = rec
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Stroke(_, c) if *c == CELL_BORDER))
            .count();
        assert_eq!(strokes, CELL_COUNT);

        let y = SCREEN_HEIGHT as i32;
        assert!(rec.ops.contains(&Op::Blit(Image::Text("Time: 7".into()), 0, y)));
        assert!(rec.ops.contains(&Op::Blit(Image::Text("Score: 0".into()), SCORE_TEXT_X, y)));
        assert_eq!(rec.ops.last(), Some(&Op::Present));
    }

    #[test]
    fn playing_without_text_still_presents_the_grid() {
        let s = session_on(Screen::Playing);
        let mut rec = Recorder {
            fail_text: true,
            ..Default::default()
        };
        render(&s, &mut rec, 0).unwrap();
        assert!(!rec.ops.iter().any(|op| matches!(op, Op::Blit(..))));
        let fills = rec.ops.iter().filter(|op| matches!(op, Op::Fill(..))).count();
        assert_eq!(fills, CELL_COUNT + 1);
        assert_eq!(rec.ops.last(), Some(&Op::Present));
    }

    #[test]
    fn failed_fill_aborts_the_frame() {
        let s = session_on(Screen::Playing);
        let mut rec = Recorder {
            fail_fill: true,
            ..Default::default()
        };
        assert!(matches!(render(&s, &mut rec, 0), Err(BackendError::Draw(_))));
        assert!(!rec.ops.contains(&Op::Present));
    }

    #[test]
    fn game_over_shows_image_and_final_score() {
        let s = session_on(Screen::GameOver);
        let mut rec = Recorder::default();
        render(&s, &mut rec, 0).unwrap();
        assert_eq!(
            rec.ops,
            vec![
                Op::Clear(BACKGROUND),
                Op::Blit(Image::Backdrop("game over"), 0, 0),
                Op::Blit(Image::Text("Your final score: 1".into()), 0, FINAL_SCORE_Y),
                Op::Present
            ]
        );
    }

    #[test]
    fn victory_centers_both_lines() {
        let s = session_on(Screen::Victory);
        let mut rec = Recorder::default();
        render(&s, &mut rec, 0).unwrap();

        let won = "You won in: 12 seconds!";
        let prompt = "Click anywhere to play again!";
        let mid = SCREEN_HEIGHT as i32 / 2;
        assert_eq!(
            rec.ops,
            vec![
                Op::Clear(BACKGROUND),
                Op::Blit(Image::Text(won.into()), centered(won.len() as u32 * 10), mid),
                Op::Blit(Image::Text(prompt.into()), centered(prompt.len() as u32 * 10), mid + 40),
                Op::Present
            ]
        );
    }

    #[test]
    fn quit_draws_nothing() {
        let mut rec = Recorder::default();
        render(&session_on(Screen::Quit), &mut rec, 0).unwrap();
        assert!(rec.ops.is_empty());
    }
}
