use eframe::egui;

use crate::state::AppState;
use crate::ui::{compare, panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RacquetScoutApp {
    pub state: AppState,
}

impl RacquetScoutApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl Default for RacquetScoutApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for RacquetScoutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: preference controls ----
        egui::SidePanel::left("controls_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::controls_panel(ui, &mut self.state);
            });

        // ---- Right side panel: picks / selections / brands ----
        egui::SidePanel::right("sidebar_panel")
            .default_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::sidebar_panel(ui, &mut self.state);
            });

        // ---- Central panel: scatter plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::scatter_plot(ui, &mut self.state);
        });

        // ---- Comparison overlay ----
        compare::comparison_overlay(ctx, &mut self.state);
    }
}
