// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod directory;
pub mod engine;
pub mod error;
pub mod gui;
pub mod progress;
pub mod scrape;
pub mod specs;
pub mod table;
pub mod view;

pub use error::{Error, Result};
