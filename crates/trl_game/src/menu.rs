use glam::Vec2;
use trl_core::bounds::Aabb;
use trl_core::render::{Color, Frame, TextAnchor};

use crate::config::assets;

pub const BUTTON_SIZE: Vec2 = Vec2::new(200.0, 48.0);
const BUTTON_SPACING: f32 = 60.0;
const BUTTON_FONT_SIZE: f32 = 28.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    StartGame,
    ToggleMusic,
    Exit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub center: Vec2,
    pub label: &'static str,
    pub action: MenuAction,
}

impl Button {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.center, BUTTON_SIZE.x, BUTTON_SIZE.y)
    }

    pub fn draw(&self, frame: &mut Frame) {
        frame.sprite(assets::BUTTON, self.center);
        frame.text(
            self.label,
            self.center,
            TextAnchor::Center,
            BUTTON_FONT_SIZE,
            Color::WHITE,
        );
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub buttons: Vec<Button>,
}

impl Menu {
    /// Three buttons stacked around the middle of a `surface`-sized screen.
    pub fn new(surface: Vec2) -> Self {
        let cx = (surface.x as i32 / 2) as f32;
        let cy = (surface.y as i32 / 2) as f32;
        let entries = [
            ("Start Game", MenuAction::StartGame),
            ("Music On/Off", MenuAction::ToggleMusic),
            ("Exit", MenuAction::Exit),
        ];
        let buttons = entries
            .into_iter()
            .enumerate()
            .map(|(i, (label, action))| Button {
                center: Vec2::new(cx, cy + (i as f32 - 1.0) * BUTTON_SPACING),
                label,
                action,
            })
            .collect();
        Self { buttons }
    }

    /// Action of the first button under `point`.
    pub fn hit_test(&self, point: Vec2) -> Option<MenuAction> {
        self.buttons
            .iter()
            .find(|b| b.bounds().contains_point(point))
            .map(|b| b.action)
    }

    pub fn button(&self, action: MenuAction) -> Option<&Button> {
        self.buttons.iter().find(|b| b.action == action)
    }

    pub fn draw(&self, frame: &mut Frame) {
        for button in &self.buttons {
            button.draw(frame);
        }
    }
}
