use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Plot};

use crate::data::analysis::{self, TOP_INDUSTRIES};
use crate::state::AppState;
use crate::ui::widgets::{self, ACCENT};

// ---------------------------------------------------------------------------
// Executive Overview view
// ---------------------------------------------------------------------------

pub fn show(ui: &mut Ui, state: &AppState) {
    let dataset = &state.dataset;

    ui.heading("Workforce Sentiment & Scaling");
    ui.label("A bird's eye view of the enterprise landscape.");
    ui.add_space(8.0);

    // ---- KPI row ----
    let stats = analysis::overview_stats(dataset);
    ui.columns(4, |cols: &mut [Ui]| {
        widgets::metric_card(&mut cols[0], "Total Companies", &stats.total_display());
        widgets::metric_card(&mut cols[1], "Avg. Rating", &stats.rating_display());
        widgets::metric_card(&mut cols[2], "Total Reviews", &stats.reviews_display());
        widgets::metric_card(&mut cols[3], "Avg. Reach", &stats.reach_display());
    });

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);

    // ---- Charts row ----
    ui.columns(2, |cols: &mut [Ui]| {
        ratings_distribution(&mut cols[0], state);
        top_industries_chart(&mut cols[1], state);
    });
}

/// Frequency histogram of `ratings`, 20 bins over the observed range.
fn ratings_distribution(ui: &mut Ui, state: &AppState) {
    ui.strong("Industry Sentiment Distribution");

    let hist = analysis::ratings_histogram(&state.dataset);
    let bars: Vec<Bar> = hist
        .counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            Bar::new(hist.bin_center(i), count as f64).width(hist.bin_width * 0.9)
        })
        .collect();

    Plot::new("ratings_histogram")
        .x_axis_label("Rating")
        .y_axis_label("Companies")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .height(320.0)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Companies").color(ACCENT));
        });
}

/// Horizontal bar chart of the 8 most frequent industries, largest on top.
fn top_industries_chart(ui: &mut Ui, state: &AppState) {
    ui.strong("Top Industries by Presence");

    let top = analysis::top_industries(&state.dataset, TOP_INDUSTRIES);
    // Bars grow upward by argument, so reverse to put the biggest on top.
    let labels: Vec<String> = top.iter().rev().map(|(name, _)| name.clone()).collect();
    let bars: Vec<Bar> = top
        .iter()
        .rev()
        .enumerate()
        .map(|(i, (_, count))| Bar::new(i as f64, *count as f64).width(0.6))
        .collect();

    Plot::new("top_industries")
        .x_axis_label("Companies")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .height(320.0)
        .y_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if i >= 0.0 && (mark.value - i).abs() < 0.01 {
                labels.get(i as usize).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal().color(ACCENT));
        });
}
