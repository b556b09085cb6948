use eframe::egui::{RichText, Ui};
use egui_plot::{Legend, Plot, Points};

use crate::data::analysis;
use crate::state::AppState;
use crate::ui::widgets;

// ---------------------------------------------------------------------------
// Industry Deep-Dive view
// ---------------------------------------------------------------------------

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.heading("Industry Comparative Analysis");
    ui.add_space(8.0);

    if state.selected_industries.is_empty() {
        // No selection, no aggregation.
        ui.label("Select at least one industry in the side panel to compare.");
        return;
    }

    let subset = analysis::filter_by_industries(&state.dataset, &state.selected_industries);

    scaling_vs_rating(ui, state, &subset);
    ui.add_space(12.0);
    job_market_heat(ui, state);
}

/// Scatter of reach vs rating for the selected industries. Reach is plotted
/// on a log10 scale; point size tracks review volume.
fn scaling_vs_rating(ui: &mut Ui, state: &AppState, subset: &[usize]) {
    ui.strong("Scaling vs Employee Satisfaction");

    Plot::new("scaling_vs_rating")
        .legend(Legend::default())
        .x_axis_label("Locations (log scale)")
        .y_axis_label("Rating")
        .x_axis_formatter(|mark, _range| format!("{:.0}", 10f64.powf(mark.value)))
        .height(340.0)
        .show(ui, |plot_ui| {
            for &idx in subset {
                let rec = &state.dataset.records[idx];
                // +1 keeps companies with zero extra locations on the chart.
                let x = ((rec.more_locations + 1) as f64).log10();
                let radius = (2.0 + (rec.reviews as f64).sqrt() * 0.08).min(12.0) as f32;

                plot_ui.points(
                    Points::new(vec![[x, rec.ratings]])
                        .name(&rec.industry)
                        .color(state.industry_colors.color_for(&rec.industry))
                        .filled(true)
                        .radius(radius),
                );
            }
        });
}

/// Mean open-job count per selected industry, as shares of the total.
fn job_market_heat(ui: &mut Ui, state: &AppState) {
    ui.strong("Current Job Market Heat (by Category)");

    let jobs = analysis::mean_jobs_by_industry(&state.dataset, &state.selected_industries);
    if jobs.is_empty() {
        ui.label("No companies in the selected industries.");
        return;
    }
    let Some(shares) = analysis::job_shares(&jobs) else {
        ui.label("No open jobs in the selected industries.");
        return;
    };

    ui.horizontal(|ui: &mut Ui| {
        let slices: Vec<_> = jobs
            .iter()
            .map(|(industry, mean)| (*mean, state.industry_colors.color_for(industry)))
            .collect();
        widgets::donut_chart(ui, &slices, 220.0);

        ui.vertical(|ui: &mut Ui| {
            for ((industry, mean), share) in jobs.iter().zip(&shares) {
                ui.label(
                    RichText::new(format!("{industry}: {mean:.0} open jobs ({share:.1}%)"))
                        .color(state.industry_colors.color_for(industry)),
                );
            }
        });
    });
}
