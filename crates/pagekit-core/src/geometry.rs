//! Pixel geometry primitives shared across the workspace.
//!
//! Coordinates are integral CSS pixels relative to the canvas origin.
//! Positions are signed (a block may be dragged partially off-canvas);
//! sizes are unsigned.

use serde::{Deserialize, Serialize};

/// Position of a block on the canvas, in pixels from the canvas origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub left: i32,
    pub top: i32,
}

impl Position {
    /// Creates a new position.
    pub fn new(left: i32, top: i32) -> Self {
        Self { left, top }
    }

    /// Returns this position offset by the given deltas.
    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
        }
    }
}

/// Explicit block dimensions in pixels.
///
/// A block without a `Size` renders at its intrinsic dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Creates a new size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translated_moves_both_axes() {
        let p = Position::new(10, -5).translated(-20, 15);
        assert_eq!(p, Position::new(-10, 10));
    }
}
