//! Draw command list consumed by the host renderer.
//!
//! The simulation never touches pixels. Each `render()` produces a [`Frame`]:
//! an ordered list of commands the host replays against its own surface,
//! sprite and font machinery. Commands are plain data, so a frame can be
//! compared, logged, or dumped as JSON.

use glam::Vec2;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const LIGHT_GRAY: Color = Color::rgb(211, 211, 211);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    TopLeft,
    Center,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear,
    Fill {
        color: Color,
    },
    /// Image drawn with its top-left corner at `origin`.
    Tile {
        image: String,
        origin: Vec2,
    },
    /// Image drawn centered on `position`.
    Sprite {
        image: String,
        position: Vec2,
    },
    Text {
        text: String,
        position: Vec2,
        anchor: TextAnchor,
        size: f32,
        color: Color,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    pub fn fill(&mut self, color: Color) {
        self.commands.push(DrawCommand::Fill { color });
    }

    pub fn tile(&mut self, image: &str, origin: Vec2) {
        self.commands.push(DrawCommand::Tile {
            image: image.to_string(),
            origin,
        });
    }

    pub fn sprite(&mut self, image: &str, position: Vec2) {
        self.commands.push(DrawCommand::Sprite {
            image: image.to_string(),
            position,
        });
    }

    pub fn text(
        &mut self,
        text: impl Into<String>,
        position: Vec2,
        anchor: TextAnchor,
        size: f32,
        color: Color,
    ) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            position,
            anchor,
            size,
            color,
        });
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn sprite_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_keep_push_order() {
        let mut frame = Frame::new();
        frame.clear();
        frame.fill(Color::BLACK);
        frame.sprite("hero_idle_1", Vec2::new(24.0, 24.0));
        frame.text("HP: 3", Vec2::new(10.0, 10.0), TextAnchor::TopLeft, 30.0, Color::WHITE);

        assert_eq!(frame.commands.len(), 4);
        assert_eq!(frame.commands[0], DrawCommand::Clear);
        assert_eq!(frame.sprite_count(), 1);
        assert_eq!(frame.texts().collect::<Vec<_>>(), vec!["HP: 3"]);
    }

    #[test]
    fn serializes_with_kind_tag() {
        let mut frame = Frame::new();
        frame.fill(Color::rgb(25, 25, 30));
        let json = serde_json::to_string(&frame).expect("frame should serialize");
        assert!(json.contains(r#""kind":"fill""#));
        assert!(json.contains(r#""r":25"#));
    }
}
