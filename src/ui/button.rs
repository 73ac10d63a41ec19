use macroquad::prelude::*;

use crate::application::ControlAction;

/// Control panel button bound to a [`ControlAction`]
#[derive(Clone, Debug)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: String,
    action: ControlAction,
}

impl Button {
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        label: impl Into<String>,
        action: ControlAction,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            label: label.into(),
            action,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// The bound action if `pressed` landed on this button
    pub fn clicked(&self, mouse_pos: (f32, f32), pressed: bool) -> Option<ControlAction> {
        (pressed && self.is_hovered(mouse_pos)).then_some(self.action)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.is_hovered(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let text_size = measure_text(&self.label, None, 20, 1.0);
        draw_text(
            &self.label,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clicked_returns_action() {
        let button = Button::new(100.0, 50.0, 180.0, 40.0, "New Game", ControlAction::NewGame);
        assert_eq!(button.clicked((150.0, 70.0), true), Some(ControlAction::NewGame));
        assert_eq!(button.clicked((150.0, 70.0), false), None);
        assert_eq!(button.clicked((50.0, 70.0), true), None);
    }
}
