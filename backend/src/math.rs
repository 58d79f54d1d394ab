use std::ops::{Index, IndexMut};

/// 8-bit per channel color. Channels index as 0 = r, 1 = g, 2 = b, 3 = a.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(0xFF, 0xFF, 0xFF, 0xFF);
    pub const BLACK: Rgba = Rgba::new(0x00, 0x00, 0x00, 0xFF);

    #[inline(always)]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Index<usize> for Rgba {
    type Output = u8;
    #[inline(always)]
    fn index(&self, i: usize) -> &u8 {
        match i {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            3 => &self.a,
            _ => panic!("color channel index out of range: {i}"),
        }
    }
}

impl IndexMut<usize> for Rgba {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut u8 {
        match i {
            0 => &mut self.r,
            1 => &mut self.g,
            2 => &mut self.b,
            3 => &mut self.a,
            _ => panic!("color channel index out of range: {i}"),
        }
    }
}

impl From<Rgba> for sdl2::pixels::Color {
    fn from(c: Rgba) -> Self {
        sdl2::pixels::Color::RGBA(c.r, c.g, c.b, c.a)
    }
}

/// Axis-aligned rectangle in window pixels, origin top-left.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Half-open containment: the right and bottom edges belong to the neighbour.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x
            && y >= self.y
            && i64::from(x) < i64::from(self.x) + i64::from(self.w)
            && i64::from(y) < i64::from(self.y) + i64::from(self.h)
    }
}

impl From<Rect> for sdl2::rect::Rect {
    fn from(r: Rect) -> Self {
        sdl2::rect::Rect::new(r.x, r.y, r.w, r.h)
    }
}
