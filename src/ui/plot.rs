use eframe::egui::{self, Align2, Color32, FontId, Sense, Stroke, Ui, Vec2};
use egui_plot::{Bar, BarChart, Plot, Points};

use crate::color::ColorMap;
use crate::data::summary::DashboardSummary;

// ---------------------------------------------------------------------------
// Primary-skill pie chart (painter-drawn)
// ---------------------------------------------------------------------------

/// Render the skill-distribution pie with percentage labels. The caller is
/// responsible for the empty-set placeholder.
pub fn skill_pie(ui: &mut Ui, summary: &DashboardSummary, colors: &ColorMap) {
    let counts = &summary.skill_counts;
    let total: usize = counts.iter().map(|(_, n)| *n).sum();
    if total == 0 {
        return;
    }

    let size = ui.available_width().min(220.0);
    let (response, painter) = ui.allocate_painter(Vec2::new(size, size), Sense::hover());
    let center = response.rect.center();
    let radius = size * 0.45;

    let mut angle = -std::f64::consts::FRAC_PI_2; // start at 12 o'clock
    for (label, n) in counts {
        let frac = *n as f64 / total as f64;
        let sweep = std::f64::consts::TAU * frac;
        let color = colors.color_for(label);

        // Wedges wider than a quarter turn are split so every polygon handed
        // to the tessellator stays convex.
        let mut remaining = sweep;
        let mut start = angle;
        while remaining > 1e-6 {
            let step = remaining.min(std::f64::consts::FRAC_PI_2);
            let arc_points = 12;
            let mut points = Vec::with_capacity(arc_points + 2);
            points.push(center);
            for s in 0..=arc_points {
                let a = start + step * s as f64 / arc_points as f64;
                points.push(center + Vec2::new(a.cos() as f32, a.sin() as f32) * radius);
            }
            painter.add(egui::Shape::convex_polygon(points, color, Stroke::NONE));
            start += step;
            remaining -= step;
        }

        let mid = angle + sweep / 2.0;
        let label_pos = center + Vec2::new(mid.cos() as f32, mid.sin() as f32) * (radius * 0.62);
        painter.text(
            label_pos,
            Align2::CENTER_CENTER,
            format!("{:.1}%", frac * 100.0),
            FontId::proportional(11.0),
            Color32::WHITE,
        );

        angle += sweep;
    }
}

/// Colour-swatch legend below the pie.
pub fn skill_legend(ui: &mut Ui, summary: &DashboardSummary, colors: &ColorMap) {
    for (label, n) in &summary.skill_counts {
        ui.horizontal(|ui: &mut Ui| {
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
            ui.painter().rect_filled(rect, 2.0, colors.color_for(label));
            ui.label(format!("{label} ({n})"));
        });
    }
}

// ---------------------------------------------------------------------------
// Rating-category bar chart
// ---------------------------------------------------------------------------

/// Render the rating-bucket distribution as a bar chart, or its placeholder
/// when no filtered row carries a rating category.
pub fn rating_bars(ui: &mut Ui, summary: &DashboardSummary) {
    if !summary.has_rating_data() {
        ui.label("No rating data");
        return;
    }

    let bars: Vec<Bar> = summary
        .rating_counts
        .iter()
        .enumerate()
        .map(|(i, (_, n))| Bar::new(i as f64, *n as f64).width(0.6))
        .collect();
    let chart = BarChart::new(bars).color(Color32::LIGHT_BLUE);

    let labels: Vec<String> = summary
        .rating_counts
        .iter()
        .map(|(cat, _)| cat.to_string())
        .collect();

    Plot::new("rating_bars")
        .x_axis_label("Rating Range")
        .y_axis_label("Companies")
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() < 0.01 && i >= 0.0 && (i as usize) < labels.len() {
                labels[i as usize].clone()
            } else {
                String::new()
            }
        })
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .height(220.0)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

// ---------------------------------------------------------------------------
// Rating vs package scatter
// ---------------------------------------------------------------------------

/// Render the (rating, package) scatter for rows where both are present.
pub fn rating_package_scatter(ui: &mut Ui, summary: &DashboardSummary) {
    if summary.rating_package_pairs.is_empty() {
        ui.label("No data");
        return;
    }

    let points = Points::new(summary.rating_package_pairs.clone())
        .radius(3.0)
        .color(Color32::LIGHT_BLUE);

    Plot::new("rating_package_scatter")
        .x_axis_label("Rating")
        .y_axis_label("Package (LPA)")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .height(220.0)
        .show(ui, |plot_ui| {
            plot_ui.points(points);
        });
}
