use log::{error, info};
use macroquad::prelude::*;
use lights_out::{
    Session,
    ui::{self, board_area_width},
    rendering, input,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Lights Out".to_owned(),
        window_width: 800,
        window_height: 600,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(err) = simple_logger::init_with_level(log::Level::Info) {
        eprintln!("Logger unavailable: {err}");
    }
    info!("Starting Lights Out v{}", env!("CARGO_PKG_VERSION"));

    let mut session = match Session::new() {
        Ok(session) => session,
        Err(err) => {
            error!("Could not start game: {err}");
            return;
        }
    };

    loop {
        let mouse_pos = mouse_position();
        let pressed = is_mouse_button_pressed(MouseButton::Left);

        let buttons = ui::create_buttons(ui::panel_x(), &session);
        let action = input::process_button_clicks(&buttons, mouse_pos, pressed)
            .or_else(input::process_keyboard_input);
        if let Some(action) = action {
            if let Err(err) = session.apply(action) {
                error!("{action:?} failed: {err}");
            }
        }

        let layout = ui::current_layout(session.game.grid());
        if mouse_pos.0 < board_area_width() {
            input::process_board_click(&mut session, &layout, mouse_pos, pressed);
        }

        clear_background(BLACK);
        if session.game.has_won() {
            rendering::draw_win_banner(session.game.moves());
        } else {
            rendering::draw_board(session.game.grid(), &layout, session.hint, mouse_pos);
        }
        // rebuild so labels reflect this frame's action
        let buttons = ui::create_buttons(ui::panel_x(), &session);
        rendering::draw_controls(&session, &buttons, mouse_pos);

        next_frame().await;
    }
}
