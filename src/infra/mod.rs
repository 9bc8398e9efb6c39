// src/infra/mod.rs — Infrastructure: config, errors, logging, paths, identity

pub mod config;
pub mod errors;
pub mod identity;
pub mod logger;
pub mod paths;
