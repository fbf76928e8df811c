//! Decorative block layout
//!
//! Blocks are drawn only; the ball never collides with them.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in playfield pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Static block rectangles, row-major
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockLayout {
    blocks: Vec<Rect>,
}

impl BlockLayout {
    /// Lay out one cell per occupied grid entry
    ///
    /// Cell width spreads the first row's columns across the playfield.
    pub fn new<R: AsRef<[u8]>>(playfield_width: f32, row_height: f32, grid: &[R]) -> Self {
        let columns = grid.first().map_or(0, |row| row.as_ref().len());
        if columns == 0 {
            return Self::default();
        }
        let cell_width = playfield_width / columns as f32;

        let blocks = grid
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells
                    .as_ref()
                    .iter()
                    .enumerate()
                    .filter(|(_, occupied)| **occupied != 0)
                    .map(move |(col, _)| Rect {
                        x: cell_width * col as f32,
                        y: row_height * row as f32,
                        width: cell_width,
                        height: row_height,
                    })
            })
            .collect();

        Self { blocks }
    }

    pub fn blocks(&self) -> &[Rect] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BLOCK_GRID, BLOCK_HEIGHT};

    #[test]
    fn test_default_grid() {
        let layout = BlockLayout::new(300.0, BLOCK_HEIGHT, &BLOCK_GRID);
        assert_eq!(layout.len(), 24);

        let first = layout.blocks()[0];
        assert_eq!(first, Rect { x: 0.0, y: 40.0, width: 50.0, height: 20.0 });

        let last = layout.blocks()[23];
        assert_eq!(last, Rect { x: 250.0, y: 100.0, width: 50.0, height: 20.0 });
    }

    #[test]
    fn test_row_major_order() {
        let grid = [[1u8, 0, 1], [0, 1, 0]];
        let layout = BlockLayout::new(90.0, 10.0, &grid);
        let origins: Vec<(f32, f32)> = layout.blocks().iter().map(|b| (b.x, b.y)).collect();
        assert_eq!(origins, vec![(0.0, 0.0), (60.0, 0.0), (30.0, 10.0)]);
    }

    #[test]
    fn test_empty_grid() {
        let grid: [[u8; 0]; 0] = [];
        assert!(BlockLayout::new(300.0, 20.0, &grid).is_empty());
    }
}
