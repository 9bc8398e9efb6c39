// src/lib.rs — Library root for tutor

pub mod cli;
pub mod client;
pub mod infra;
pub mod tui;
pub mod ui;
