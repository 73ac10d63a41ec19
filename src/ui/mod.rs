mod button;
mod cell;

pub use button::Button;
pub use cell::Cell;

use macroquad::prelude::{screen_height, screen_width};

use crate::application::{BoardLayout, ControlAction, Session};
use crate::domain::{Coord, Grid};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
const BUTTON_TOP: f32 = 20.0;
const BUTTON_SPACING: f32 = 50.0;

/// X position where the control panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

pub fn board_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

pub fn board_area_height() -> f32 {
    screen_height()
}

/// Layout for the current window size
pub fn current_layout(grid: &Grid) -> BoardLayout {
    let (rows, cols) = grid.dimensions();
    BoardLayout::fit(board_area_width(), board_area_height(), rows, cols)
}

fn cell_for(layout: &BoardLayout, coord: Coord, lit: bool) -> Cell {
    let (x, y) = layout.coord_to_screen(coord);
    Cell::new(x, y, layout.cell_size, lit)
}

/// One presentation cell per grid position
pub fn board_cells<'a>(
    grid: &'a Grid,
    layout: &'a BoardLayout,
) -> impl Iterator<Item = (Coord, Cell)> + 'a {
    grid.iter_cells().map(move |(coord, lit)| (coord, cell_for(layout, coord, lit)))
}

/// Presentation cell at `coord`, if it is on the board
pub fn cell_at(grid: &Grid, layout: &BoardLayout, coord: Coord) -> Option<Cell> {
    grid.get(coord).map(|lit| cell_for(layout, coord, lit))
}

/// Control panel buttons, labelled from the session's current selections
pub fn create_buttons(px: f32, session: &Session) -> Vec<Button> {
    let size = session.board_size();
    let labels = [
        ("New Game".to_string(), ControlAction::NewGame),
        (format!("Size: {size}x{size}"), ControlAction::CycleSize),
        (format!("Setup: {}", session.policy().name()), ControlAction::CycleSetup),
        ("Hint".to_string(), ControlAction::Hint),
    ];

    labels
        .into_iter()
        .enumerate()
        .map(|(i, (label, action))| {
            let y = BUTTON_TOP + i as f32 * BUTTON_SPACING;
            Button::new(px, y, PANEL_WIDTH, BUTTON_HEIGHT, label, action)
        })
        .collect()
}
