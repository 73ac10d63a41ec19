use macroquad::prelude::*;

/// One light on the board as drawn on screen.
///
/// Holds no game state: it is rebuilt from the grid every frame and only
/// knows whether it is lit. A click is reported through the notifier passed
/// to [`Cell::handle_click`]; the caller decides what that means.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    x: f32,
    y: f32,
    size: f32,
    is_lit: bool,
}

impl Cell {
    pub const fn new(x: f32, y: f32, size: f32, is_lit: bool) -> Self {
        Self { x, y, size, is_lit }
    }

    pub fn contains(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 < self.x + self.size
            && mouse_pos.1 >= self.y
            && mouse_pos.1 < self.y + self.size
    }

    /// Call `toggle_requested` once if this press landed on the cell.
    /// Returns whether it did.
    pub fn handle_click(
        &self,
        mouse_pos: (f32, f32),
        pressed: bool,
        toggle_requested: impl FnOnce(),
    ) -> bool {
        let hit = pressed && self.contains(mouse_pos);
        if hit {
            toggle_requested();
        }
        hit
    }

    pub fn draw(&self, mouse_pos: (f32, f32), highlighted: bool) {
        let inset = (self.size * 0.06).max(1.0);
        let (x, y, size) = (self.x + inset, self.y + inset, self.size - 2.0 * inset);

        let fill = match (self.is_lit, self.contains(mouse_pos)) {
            (true, false) => Color::from_rgba(255, 200, 60, 255),
            (true, true) => Color::from_rgba(255, 220, 120, 255),
            (false, false) => Color::from_rgba(35, 35, 45, 255),
            (false, true) => Color::from_rgba(55, 55, 70, 255),
        };
        draw_rectangle(x, y, size, size, fill);

        let border = if highlighted {
            Color::from_rgba(0, 255, 150, 255)
        } else {
            Color::from_rgba(70, 70, 80, 255)
        };
        let thickness = if highlighted { 4.0 } else { 1.5 };
        draw_rectangle_lines(x, y, size, size, thickness, border);
    }
}
