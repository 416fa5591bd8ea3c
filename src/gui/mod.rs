// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod logo;
pub mod pages;
pub mod progress;

pub use app::run;
