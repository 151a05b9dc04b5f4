use crate::application::Command;
use macroquad::prelude::*;

/// Panel button that issues a fixed command when clicked
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    command: Command,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        text: impl Into<String>,
        command: Command,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            command,
            color: Color::from_rgba(70, 130, 180, 255),
            hover_color: Color::from_rgba(100, 149, 237, 255),
        }
    }

    /// Bottom edge, for laying out whatever follows the buttons
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if mouse is hovering over button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Draw button with hover effect; `active` marks the current selection
    pub fn draw(&self, mouse_pos: (f32, f32), active: bool) {
        let color = if self.is_hovered(mouse_pos) || active {
            self.hover_color
        } else {
            self.color
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let text_size = measure_text(&self.text, None, 18, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            18.0,
            WHITE,
        );
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    /// The bound command, if the button was clicked this frame
    pub fn clicked(&self, mouse_pos: (f32, f32)) -> Option<Command> {
        (self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left))
            .then(|| self.command.clone())
    }
}
