// src/ui/mod.rs — Pure view-model layer: testable without a terminal

pub mod analytics;
pub mod markdown;
pub mod transcript;
