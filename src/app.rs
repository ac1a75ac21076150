use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct WindroseApp {
    pub state: AppState,
}

impl WindroseApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for WindroseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: date range ----
        egui::SidePanel::left("range_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: polar scatter ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::wind_polar_plot(ui, &self.state);
        });
    }
}
