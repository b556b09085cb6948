use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::{AppState, View};

// ---------------------------------------------------------------------------
// Left side panel – navigation + industry selector
// ---------------------------------------------------------------------------

/// Render the left navigation panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading("Insight Hub");
    ui.separator();

    ui.strong("Navigation");
    for view in View::ALL {
        ui.selectable_value(&mut state.view, view, view.label());
    }
    ui.separator();

    // The industry selector belongs to the deep-dive view only.
    if state.view == View::IndustryDeepDive {
        industry_selector(ui, state);
        ui.separator();
    }

    ui.label(format!("Analyzing {} companies", state.dataset.len()));
}

/// Multi-select over the distinct industries, with All/None shortcuts.
fn industry_selector(ui: &mut Ui, state: &mut AppState) {
    let industries = state.dataset.industries.clone();
    let n_selected = state.selected_industries.len();
    let n_total = industries.len();
    let header_text = format!("Industries  ({n_selected}/{n_total})");

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt("industry_selector")
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_industries();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_industries();
                }
            });

            ScrollArea::vertical()
                .max_height(300.0)
                .auto_shrink([false, true])
                .show(ui, |ui: &mut Ui| {
                    for industry in &industries {
                        let is_selected = state.selected_industries.contains(industry);
                        let text = RichText::new(industry)
                            .color(state.industry_colors.color_for(industry));

                        let mut checked = is_selected;
                        if ui.checkbox(&mut checked, text).changed() {
                            state.toggle_industry(industry);
                        }
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} companies, {} industries",
            state.dataset.len(),
            state.dataset.industries.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Load a replacement dataset. Unlike the startup load, a failure here is
/// non-fatal: the current dataset stays and the error shows in the top bar.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open company data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} companies across {} industries",
                    dataset.len(),
                    dataset.industries.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
