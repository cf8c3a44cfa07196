use macroquad::prelude::*;

/// Panel button; the label may change from frame to frame (e.g. Play vs Pause)
#[derive(Clone)]
pub struct Button {
    rect: Rect,
    label: String,
}

const FILL: Color = Color::new(0.96, 0.96, 0.86, 1.0); // beige
const HOVER_FILL: Color = Color::new(0.85, 0.85, 0.75, 1.0);
const INK: Color = BLACK;

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            label: label.into(),
        }
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let fill = if self.is_hovered(mouse_pos) { HOVER_FILL } else { FILL };
        let Rect { x, y, w, h } = self.rect;

        draw_rectangle(x, y, w, h, fill);
        draw_rectangle_lines(x, y, w, h, 2.0, INK);

        let text_size = measure_text(&self.label, None, 20, 1.0);
        draw_text(
            &self.label,
            x + (w - text_size.width) / 2.0,
            y + (h + text_size.height) / 2.0,
            20.0,
            INK,
        );
    }

    /// Clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
