use std::path::Path;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{dashboard, panels};

/// Fixed relative path tried at startup. File → Open… can load a replacement
/// at any time.
pub const DEFAULT_DATA_PATH: &str = "ds_company_preferences.csv";

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct HireboardApp {
    pub state: AppState,
}

impl Default for HireboardApp {
    fn default() -> Self {
        let mut state = AppState::default();
        state.load_path(Path::new(DEFAULT_DATA_PATH));
        Self { state }
    }
}

impl eframe::App for HireboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: dashboard ----
        egui::CentralPanel::default().show(ctx, |ui| {
            dashboard::central_panel(ui, &self.state);
        });
    }
}
