// src/tui/widgets/mod.rs — Chat screen widgets

pub mod analytics;
pub mod transcript;
