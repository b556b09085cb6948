use eframe::egui::{self, Color32, Mesh, RichText, Sense, Ui, Vec2};

/// Accent colour shared by the dashboard charts.
pub const ACCENT: Color32 = Color32::from_rgb(75, 145, 241);

// ---------------------------------------------------------------------------
// Metric card
// ---------------------------------------------------------------------------

/// A KPI card: small muted label above a large value.
pub fn metric_card(ui: &mut Ui, label: &str, value: &str) {
    egui::Frame::group(ui.style())
        .fill(ui.visuals().faint_bg_color)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(label).small().weak());
            ui.label(RichText::new(value).size(22.0).strong());
        });
}

// ---------------------------------------------------------------------------
// Donut chart
// ---------------------------------------------------------------------------

/// Draw a donut chart of the given `(value, colour)` slices, proportional to
/// value. Slices are drawn clockwise from 12 o'clock as triangle strips
/// between the inner and outer radius; nothing is drawn if the total is zero.
pub fn donut_chart(ui: &mut Ui, slices: &[(f64, Color32)], diameter: f32) {
    let total: f64 = slices.iter().map(|(v, _)| v).sum();
    if total <= 0.0 {
        return;
    }

    let (response, painter) = ui.allocate_painter(Vec2::splat(diameter), Sense::hover());
    let center = response.rect.center();
    let outer = diameter * 0.5;
    let inner = outer * 0.4;

    let mut start = -std::f32::consts::FRAC_PI_2;
    for (value, color) in slices {
        let sweep = (value / total) as f32 * std::f32::consts::TAU;
        // ~3° per segment keeps arcs smooth at this size.
        let steps = ((sweep / 0.05).ceil() as usize).max(2);

        let mut mesh = Mesh::default();
        for step in 0..=steps {
            let angle = start + sweep * step as f32 / steps as f32;
            let dir = Vec2::angled(angle);
            mesh.colored_vertex(center + dir * inner, *color);
            mesh.colored_vertex(center + dir * outer, *color);
        }
        for step in 0..steps {
            let base = (step * 2) as u32;
            mesh.add_triangle(base, base + 1, base + 2);
            mesh.add_triangle(base + 1, base + 3, base + 2);
        }
        painter.add(mesh);

        start += sweep;
    }
}
