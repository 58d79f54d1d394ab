use crate::config::{DEFAULT_BASE_COLOR, INITIAL_SHADE_DELTA, MAX_LEVEL};
use crate::grid::Grid;
use crate::round::{Round, RoundGenerator};
use backend::math::Rgba;
use backend::system::IoEvents;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Intro,
    Playing,
    GameOver,
    Victory,
    Quit,
}

impl Screen {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Quit)
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::Intro
    }
}

/// Input the state machine reacts to; everything else is filtered out by the backend.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Quit,
    /// Pointer released at window coordinates.
    Click { x: i32, y: i32 },
}

impl From<IoEvents> for Input {
    fn from(event: IoEvents) -> Self {
        match event {
            IoEvents::Quit => Input::Quit,
            IoEvents::MouseButtonUp(button) => {
                let (x, y) = button.position();
                Input::Click { x, y }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    screen: Screen,
    score: u32,
    level: u32,
    selected_cell: usize,
    base_color: Rgba,
    shade_delta: u8,
    start_millis: u64,
    win_time_secs: u64,
}

impl Session {
    pub fn new(now_millis: u64) -> Self {
        Self {
            screen: Screen::default(),
            score: 0,
            level: 0,
            selected_cell: 0,
            base_color: DEFAULT_BASE_COLOR,
            shade_delta: INITIAL_SHADE_DELTA,
            start_millis: now_millis,
            win_time_secs: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn selected_cell(&self) -> usize {
        self.selected_cell
    }

    pub fn base_color(&self) -> Rgba {
        self.base_color
    }

    pub fn shade_delta(&self) -> u8 {
        self.shade_delta
    }

    pub fn win_time_secs(&self) -> u64 {
        self.win_time_secs
    }

    /// Whole seconds since the session (re)started.
    pub fn elapsed_secs(&self, now_millis: u64) -> u64 {
        now_millis.saturating_sub(self.start_millis) / 1000
    }

    /// Applies a frame's worth of events in queue order, stopping at Quit.
    pub fn drain<R: Rng>(
        &mut self,
        events: &[IoEvents],
        grid: &Grid,
        now_millis: u64,
        rounds: &mut RoundGenerator<R>,
    ) {
        for &event in events {
            if let Some(screen) = self.handle(event.into(), grid, now_millis, rounds) {
                log::debug!(
                    "now on {screen:?} (level {}, score {})",
                    self.level(),
                    self.score()
                );
            }
            if self.screen.is_finished() {
                break;
            }
        }
    }

    /// Applies one input. Returns the new screen if the input caused a transition.
    pub fn handle<R: Rng>(
        &mut self,
        input: Input,
        grid: &Grid,
        now_millis: u64,
        rounds: &mut RoundGenerator<R>,
    ) -> Option<Screen> {
        use Screen::*;

        if self.screen.is_finished() {
            return None;
        }

        let (x, y) = match input {
            Input::Quit => return Some(self.enter(Quit)),
            Input::Click { x, y } => (x, y),
        };
        let cell = grid.cell_at(x, y)?;

        match self.screen {
            Intro => Some(self.enter(Playing)),
            Playing if cell == self.selected_cell => {
                let round = rounds.next_round(self.level);
                self.apply(round);
                if self.level < MAX_LEVEL {
                    self.level += 1;
                    log::info!("Level {} Score: {}", self.level, self.score);
                    None
                } else {
                    self.win_time_secs = self.elapsed_secs(now_millis);
                    log::info!("won in {} seconds, score {}", self.win_time_secs, self.score);
                    Some(self.enter(Victory))
                }
            }
            Playing => {
                log::info!(
                    "missed: clicked cell {cell}, odd cell was {}",
                    self.selected_cell
                );
                Some(self.enter(GameOver))
            }
            GameOver | Victory => {
                self.reset(now_millis);
                Some(self.enter(Intro))
            }
            Quit => None,
        }
    }

    fn apply(&mut self, round: Round) {
        self.base_color = round.base_color;
        self.selected_cell = round.selected_cell;
        self.shade_delta = round.shade_delta;
        self.score += 1;
    }

    fn reset(&mut self, now_millis: u64) {
        *self = Self::new(now_millis);
    }

    fn enter(&mut self, screen: Screen) -> Screen {
        self.screen = screen;
        screen
    }
}
