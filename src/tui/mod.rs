// src/tui/mod.rs — Interactive chat screen

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::run_chat;
