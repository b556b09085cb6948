use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::analysis::{self, GEM_MAX_REVIEWS, GEM_MIN_RATING};
use crate::state::AppState;
use crate::ui::widgets::ACCENT;

// ---------------------------------------------------------------------------
// Hidden Gems view
// ---------------------------------------------------------------------------

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.heading("Hidden Gems");
    ui.label(format!(
        "High-performing companies (Rating ≥ {GEM_MIN_RATING}) that are not yet \
         mainstream (< {GEM_MAX_REVIEWS} reviews)."
    ));
    ui.add_space(8.0);

    let gems = analysis::hidden_gems(&state.dataset);
    ui.label(format!(
        "Found {} companies that match 'Hidden Gem' criteria.",
        gems.len()
    ));
    ui.add_space(8.0);

    gems_table(ui, state, &gems);

    ui.add_space(12.0);
    insight_card(ui);
}

/// Matching companies, rating-descending, projected to five columns.
fn gems_table(ui: &mut Ui, state: &AppState, gems: &[usize]) {
    TableBuilder::new(ui)
        .striped(true)
        .max_scroll_height(360.0)
        .column(Column::remainder().at_least(180.0))
        .column(Column::auto().at_least(140.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::remainder().at_least(120.0))
        .header(22.0, |mut header| {
            for title in ["Name", "Industry", "Rating", "Reviews", "HQ"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for &idx in gems {
                let rec = &state.dataset.records[idx];
                body.row(20.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.label(&rec.name);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(&rec.industry);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{:.1}", rec.ratings));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(rec.reviews.to_string());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(&rec.hq);
                    });
                });
            }
        });
}

/// Canned insight, not derived from the table.
fn insight_card(ui: &mut Ui) {
    egui::Frame::group(ui.style())
        .fill(ACCENT.gamma_multiply(0.08))
        .stroke(egui::Stroke::new(1.0, ACCENT.gamma_multiply(0.4)))
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.strong("💡 Hidden Pattern");
            ui.label(
                "Many 'Hidden Gems' are specialized product companies or consulting \
                 firms in niche tech stacks. Despite low total review volume, they \
                 maintain a consistently high satisfaction score, often outperforming \
                 giants like TCS or Accenture in direct ratings.",
            );
        });
}
