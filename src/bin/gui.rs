// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use hoop_metrics::{
    config::{consts::SETTINGS_FILE, settings},
    gui, log,
};

fn main() {
    let opts = match settings::load(Path::new(SETTINGS_FILE)) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Settings error: {}", e);
            std::process::exit(2);
        }
    };
    log::init(&opts.log_file);

    if let Err(e) = gui::run(opts) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
