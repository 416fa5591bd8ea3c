// src/gui/logo.rs
//
// PNG logos → egui textures. Assets are optional: a missing or unreadable
// file is logged and the image is simply not drawn.

use std::path::Path;

use eframe::egui::{self, load::SizedTexture, ColorImage, TextureHandle, TextureOptions, Vec2};

use crate::error::{Error, Result};

pub fn load(ctx: &egui::Context, path: &Path) -> Result<TextureHandle> {
    let img = image::open(path)
        .map_err(|source| Error::Image { path: path.to_path_buf(), source })?
        .to_rgba8();
    let size = [img.width() as usize, img.height() as usize];
    let pixels = ColorImage::from_rgba_unmultiplied(size, img.as_raw());
    Ok(ctx.load_texture(path.display().to_string(), pixels, TextureOptions::LINEAR))
}

pub fn try_load(ctx: &egui::Context, path: &Path) -> Option<TextureHandle> {
    match load(ctx, path) {
        Ok(tex) => {
            logd!("Logo: Loaded {}", path.display());
            Some(tex)
        }
        Err(e) => {
            logd!("Logo: Skipped ({e})");
            None
        }
    }
}

pub fn show(ui: &mut egui::Ui, logo: Option<&TextureHandle>, size: Vec2) {
    if let Some(tex) = logo {
        ui.add(egui::Image::new(SizedTexture::new(tex.id(), size)));
    }
}
