use macroquad::prelude::*;

use crate::application::{BoardLayout, Session};
use crate::domain::{Coord, Grid};
use crate::ui::{Button, PANEL_WIDTH, board_area_height, board_area_width, board_cells, panel_x};

/// Draw every light of the board, outlining the hinted cell if any
pub fn draw_board(grid: &Grid, layout: &BoardLayout, hint: Option<Coord>, mouse_pos: (f32, f32)) {
    board_cells(grid, layout)
        .for_each(|(coord, cell)| cell.draw(mouse_pos, hint == Some(coord)));
}

/// Shown in place of the board once every light is off
pub fn draw_win_banner(moves: u32) {
    let (w, h) = (board_area_width(), board_area_height());

    let title = "You have won!";
    let size = measure_text(title, None, 48, 1.0);
    draw_text(title, (w - size.width) / 2.0, h / 2.0, 48.0, Color::from_rgba(0, 255, 150, 255));

    let detail = format!("Cleared in {moves} moves - press N for a new game");
    let size = measure_text(&detail, None, 20, 1.0);
    draw_text(&detail, (w - size.width) / 2.0, h / 2.0 + 40.0, 20.0, GRAY);
}

/// Draw the control panel with buttons and game info
pub fn draw_controls(session: &Session, buttons: &[Button], mouse_pos: (f32, f32)) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let game = &session.game;
    let (rows, cols) = game.grid().dimensions();
    let status = if game.has_won() { "Solved" } else { "Playing" };
    let status_color = if game.has_won() {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    let labels = [
        ("Controls:", 240.0, 14.0, WHITE),
        ("LMB: Toggle light", 255.0, 12.0, GRAY),
        ("N: New game", 268.0, 12.0, GRAY),
        ("S: Size  G: Setup", 281.0, 12.0, GRAY),
        ("H: Hint", 294.0, 12.0, GRAY),
    ];
    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    let info = [
        (format!("Board: {rows}x{cols}"), 335.0, 14.0, Color::from_rgba(150, 150, 150, 255)),
        (
            format!("Lights on: {}", game.grid().lit_count()),
            355.0,
            14.0,
            Color::from_rgba(255, 200, 60, 255),
        ),
        (format!("Moves: {}", game.moves()), 375.0, 14.0, Color::from_rgba(180, 180, 180, 255)),
        (format!("Status: {status}"), 400.0, 16.0, status_color),
    ];
    info.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });
}
