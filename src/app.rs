use eframe::egui;

use crate::data::model::CompanyDataset;
use crate::state::{AppState, View};
use crate::ui::{deep_dive, gems, matrix, overview, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct InsightHubApp {
    pub state: AppState,
}

impl InsightHubApp {
    pub fn new(dataset: CompanyDataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for InsightHubApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: navigation + industry selector ----
        egui::SidePanel::left("nav_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: the active view ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.view {
            View::ExecutiveOverview => overview::show(ui, &self.state),
            View::IndustryDeepDive => deep_dive::show(ui, &self.state),
            View::HiddenGems => gems::show(ui, &self.state),
            View::DecisionMatrix => matrix::show(ui),
        });
    }
}
