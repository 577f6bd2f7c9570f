//! Screen that draws nothing.
//!
//! Lets the core run without a terminal: every call is counted and traced
//! through `log`, which is enough for scripted runs and smoke tests.

use log::trace;

use crate::render::{Color, Screen};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DrawStats {
    pub images: usize,
    pub texts: usize,
    pub rects: usize,
}

pub struct HeadlessScreen {
    w: i32,
    h: i32,
    offset: (i32, i32),
    pub stats: DrawStats,
}

impl HeadlessScreen {
    pub fn new(w: i32, h: i32) -> Self {
        Self {
            w,
            h,
            offset: (0, 0),
            stats: DrawStats::default(),
        }
    }

    pub fn offset(&self) -> (i32, i32) {
        self.offset
    }
}

impl Screen for HeadlessScreen {
    fn size(&self) -> (i32, i32) {
        (self.w, self.h)
    }

    fn set_offset(&mut self, dx: i32, dy: i32) {
        self.offset = (dx, dy);
    }

    fn draw_image(&mut self, x: i32, y: i32, tex_key: &str) {
        self.stats.images += 1;
        trace!(
            "image {} at ({}, {})",
            tex_key,
            x + self.offset.0,
            y + self.offset.1
        );
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, fg: Color, _bg: Color) {
        self.stats.texts += 1;
        trace!(
            "text {:?} at ({}, {}) in {:?}",
            text,
            x + self.offset.0,
            y + self.offset.1,
            fg
        );
    }

    fn fill_rect(&mut self, _x: i32, _y: i32, _w: i32, _h: i32, _color: Color) {
        self.stats.rects += 1;
    }
}
