use crate::config::{CELL_COUNT, DIFFICULTY_BASE, SHADE_DELTA_FLOOR};
use backend::math::Rgba;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Colors and target for the round that follows a successful click.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Round {
    pub base_color: Rgba,
    pub selected_cell: usize,
    pub shade_delta: u8,
}

/// Shade delta for a round generated while the player is at `level`.
pub fn shade_delta(level: u32) -> u8 {
    let level = i64::from(level);
    let delta = (i64::from(DIFFICULTY_BASE) - level).max(i64::from(SHADE_DELTA_FLOOR));
    delta.min(i64::from(u8::MAX)) as u8
}

/// The odd cell's color: `delta` comes off the strongest of r, g, b, with ties
/// going to r, then g. Alpha is never touched.
///
/// A channel too dark to lose `delta` gains it instead, so for any non-zero
/// delta the odd cell never matches the base color.
pub fn shade(base: Rgba, delta: u8) -> Rgba {
    let mut shaded = base;
    let strongest = (0..3)
        .reduce(|best, ch| if base[ch] > base[best] { ch } else { best })
        .unwrap_or(0);
    let channel = base[strongest];
    shaded[strongest] = match channel.checked_sub(delta) {
        Some(darker) => darker,
        None => channel.saturating_add(delta),
    };
    shaded
}

pub struct RoundGenerator<R = SmallRng> {
    rng: R,
}

impl RoundGenerator<SmallRng> {
    /// Seeds once from the wall clock. Not reproducible and not meant to be.
    pub fn from_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        log::debug!("round generator seed {seed}");
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RoundGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn next_round(&mut self, level: u32) -> Round {
        let base_color = Rgba::new(self.rng.gen(), self.rng.gen(), self.rng.gen(), self.rng.gen());
        let selected_cell = self.rng.gen_range(0..CELL_COUNT);
        Round {
            base_color,
            selected_cell,
            shade_delta: shade_delta(level),
        }
    }
}
