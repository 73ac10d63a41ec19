mod game;
mod layout;
mod session;

pub use game::Game;
pub use layout::BoardLayout;
pub use session::{BOARD_SIZES, ControlAction, Session};
