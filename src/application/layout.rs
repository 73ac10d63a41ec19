use crate::domain::Coord;

/// BoardLayout maps between screen pixels and board coordinates.
/// Recomputed every frame so the board follows window resizes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_size: f32,
}

impl BoardLayout {
    pub const MARGIN: f32 = 20.0;
    pub const MAX_CELL_SIZE: f32 = 96.0;
    pub const MIN_CELL_SIZE: f32 = 4.0;

    /// Largest square cells that fit a `rows` x `cols` board in the area,
    /// centered
    pub fn fit(area_width: f32, area_height: f32, rows: usize, cols: usize) -> Self {
        let usable_w = (area_width - 2.0 * Self::MARGIN).max(0.0);
        let usable_h = (area_height - 2.0 * Self::MARGIN).max(0.0);

        let cell_size = (usable_w / cols.max(1) as f32)
            .min(usable_h / rows.max(1) as f32)
            .clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE);

        let board_w = cell_size * cols as f32;
        let board_h = cell_size * rows as f32;

        Self {
            origin_x: (area_width - board_w) / 2.0,
            origin_y: (area_height - board_h) / 2.0,
            cell_size,
        }
    }

    /// Board coordinate under a screen position. May be off the board.
    pub fn screen_to_coord(&self, screen_x: f32, screen_y: f32) -> Coord {
        let col = ((screen_x - self.origin_x) / self.cell_size).floor() as i32;
        let row = ((screen_y - self.origin_y) / self.cell_size).floor() as i32;
        Coord::new(row, col)
    }

    /// Top-left screen position of a cell
    pub fn coord_to_screen(&self, coord: Coord) -> (f32, f32) {
        (
            self.origin_x + coord.col as f32 * self.cell_size,
            self.origin_y + coord.row as f32 * self.cell_size,
        )
    }
}
