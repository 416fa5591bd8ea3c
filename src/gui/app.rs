// src/gui/app.rs
use std::{error::Error, mem};

use eframe::egui::{self, TextureHandle};

use crate::{
    config::{
        consts::{WINDOW_H, WINDOW_W},
        AppOptions,
    },
    directory::Team,
    scrape,
    view::ViewState,
};

use super::{
    components::{header_bar, tabs},
    logo,
    pages::{self, directory},
    progress::GuiProgress,
};

const TITLE: &str = "NBA Team Statistics";

pub fn run(opts: AppOptions) -> Result<(), Box<dyn Error>> {
    let native = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size([WINDOW_W, WINDOW_H])
            .with_fullscreen(opts.display.fullscreen),
        ..Default::default()
    };
    eframe::run_native(
        TITLE,
        native,
        Box::new(|cc| Ok(Box::new(App::new(&cc.egui_ctx, opts)))),
    )?;
    Ok(())
}

/// Transitions requested while drawing; applied once the frame's panels are done.
enum Action {
    Open(&'static Team),
    Back,
}

pub struct App {
    opts: AppOptions,
    view: ViewState,
    status: String,
    league_logo: Option<TextureHandle>,
    team_logo: Option<TextureHandle>,
}

impl App {
    pub fn new(ctx: &egui::Context, opts: AppOptions) -> Self {
        ctx.set_visuals(egui::Visuals::dark());
        let league_logo = logo::try_load(ctx, &opts.display.league_logo);
        logf!("Init: base_url={} logos={}", opts.scrape.base_url, opts.display.logo_dir.display());
        Self {
            opts,
            view: ViewState::default(),
            status: s!("Select a team"),
            league_logo,
            team_logo: None,
        }
    }

    /// Blocks the UI thread for the nine fetches. On failure the directory
    /// stays up and the error goes to the status line.
    fn open_team(&mut self, ctx: &egui::Context, team: &'static Team) {
        logf!("UI: Team clicked {}", team.name);
        let loaded = {
            let mut progress = GuiProgress::new(&mut self.status);
            scrape::load_live(&self.opts.scrape, team.slug, Some(&mut progress))
        };
        match loaded {
            Ok(data) => {
                let path = self.opts.display.team_logo(team.nickname());
                self.team_logo = logo::try_load(ctx, &path);
                self.view = ViewState::open(team, data);
                self.status = format!("Selected: {}", team.name);
            }
            Err(e) => {
                loge!("UI: Could not open {}: {e}", team.name);
                self.status = format!("Error: {e}");
            }
        }
    }

    fn back(&mut self) {
        self.view = mem::take(&mut self.view).back();
        self.team_logo = None;
        self.status = s!("Select a team");
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status.as_str());
        });

        let mut action = None;
        match &mut self.view {
            ViewState::Directory => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    if let Some(team) = directory::draw(ui, self.league_logo.as_ref()) {
                        action = Some(Action::Open(team));
                    }
                });
            }
            ViewState::Team(view) => {
                egui::TopBottomPanel::top("team_header").show(ctx, |ui| {
                    if header_bar::draw(ui, view.team, self.team_logo.as_ref()) {
                        action = Some(Action::Back);
                    }
                    ui.separator();
                    tabs::draw(ui, view);
                });
                egui::CentralPanel::default().show(ctx, |ui| {
                    if let Some(page) = pages::page_for(view.tab) {
                        page.draw(ui, view);
                    }
                });
            }
        }

        match action {
            Some(Action::Open(team)) => self.open_team(ctx, team),
            Some(Action::Back) => self.back(),
            None => {}
        }
    }
}
