use log::debug;
use macroquad::prelude::*;

use crate::application::{BoardLayout, ControlAction, Session};
use crate::domain::Coord;
use crate::ui::{Button, cell_at};

/// Forward a left click on the board to the game.
/// Returns the coordinate that was activated, if any.
pub fn process_board_click(
    session: &mut Session,
    layout: &BoardLayout,
    mouse_pos: (f32, f32),
    pressed: bool,
) -> Option<Coord> {
    // board is hidden once won
    if !pressed || session.game.has_won() {
        return None;
    }

    let under_mouse = layout.screen_to_coord(mouse_pos.0, mouse_pos.1);
    let cell = cell_at(session.game.grid(), layout, under_mouse)?;

    let mut requested = None;
    cell.handle_click(mouse_pos, pressed, || requested = Some(under_mouse));

    let coord = requested?;
    session.activate(coord).ok()?;
    Some(coord)
}

/// Keyboard shortcut for a control action
pub fn action_for_key(key: KeyCode) -> Option<ControlAction> {
    match key {
        KeyCode::N => Some(ControlAction::NewGame),
        KeyCode::S => Some(ControlAction::CycleSize),
        KeyCode::G => Some(ControlAction::CycleSetup),
        KeyCode::H => Some(ControlAction::Hint),
        _ => None,
    }
}

/// Control action for a key pressed this frame
pub fn process_keyboard_input() -> Option<ControlAction> {
    [KeyCode::N, KeyCode::S, KeyCode::G, KeyCode::H]
        .into_iter()
        .find(|&key| is_key_pressed(key))
        .and_then(action_for_key)
}

/// Control action for a button clicked this frame
pub fn process_button_clicks(
    buttons: &[Button],
    mouse_pos: (f32, f32),
    pressed: bool,
) -> Option<ControlAction> {
    let action = buttons.iter().find_map(|btn| btn.clicked(mouse_pos, pressed));
    if let Some(action) = action {
        debug!("Button pressed: {action:?}");
    }
    action
}
