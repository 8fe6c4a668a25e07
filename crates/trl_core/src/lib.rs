pub mod animation;
pub mod audio;
pub mod bounds;
pub mod grid;
pub mod input;
pub mod motion;
pub mod render;
pub mod time;
