pub mod app;
pub mod components;
pub mod compose;
pub mod events;
pub mod selection;
pub mod theme;
pub mod ui;

pub use app::{App, AppMode};
