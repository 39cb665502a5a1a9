//! Window placement and sizing.
use super::DragMode;
use serde::{Deserialize, Serialize};

/// Window position and size. x,y from top left of the root window.
///
/// Width and height are never below 1; every constructor clamps them, deserializing included.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Copy)]
#[serde(from = "RawRect")]
pub struct Rect {
    x: i32,
    y: i32,
    w: u32,
    h: u32,
}

/// Unchecked wire form of `Rect`.
#[derive(Deserialize)]
struct RawRect {
    x: i32,
    y: i32,
    w: u32,
    h: u32,
}

impl From<RawRect> for Rect {
    fn from(raw: RawRect) -> Self {
        Self::new(raw.x, raw.y, raw.w, raw.h)
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            w: 1,
            h: 1,
        }
    }
}

impl Rect {
    #[must_use]
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self {
            x,
            y,
            w: w.max(1),
            h: h.max(1),
        }
    }

    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }
    #[must_use]
    pub const fn w(&self) -> u32 {
        self.w
    }
    #[must_use]
    pub const fn h(&self) -> u32 {
        self.h
    }

    /// Returns the rect produced by dragging `self` by `(dx, dy)`.
    ///
    /// `Move` shifts the position and keeps the size. `Resize` keeps the position and grows or
    /// shrinks the size, never below 1 in either dimension.
    #[must_use]
    pub fn apply_delta(self, mode: DragMode, dx: i32, dy: i32) -> Self {
        match mode {
            DragMode::Move => Self {
                x: self.x.saturating_add(dx),
                y: self.y.saturating_add(dy),
                ..self
            },
            DragMode::Resize => Self {
                w: grow(self.w, dx),
                h: grow(self.h, dy),
                ..self
            },
        }
    }
}

fn grow(size: u32, delta: i32) -> u32 {
    let grown = (i64::from(size) + i64::from(delta)).max(1);
    u32::try_from(grown).unwrap_or(u32::MAX)
}
