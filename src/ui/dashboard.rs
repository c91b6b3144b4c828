use eframe::egui::{Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::summary::DashboardSummary;
use crate::state::AppState;
use crate::ui::plot;

/// Marker shown in place of a metric when no value is available.
const NO_DATA: &str = "N/A";

// ---------------------------------------------------------------------------
// Central panel – metrics, charts, table, insights
// ---------------------------------------------------------------------------

/// Render the dashboard body. With no dataset loaded nothing renders beyond
/// the load failure (or the open-a-file hint).
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| match &state.status_message {
            Some(msg) => {
                ui.heading(RichText::new(msg).color(Color32::RED));
            }
            None => {
                ui.heading("Open a company data file  (File → Open…)");
            }
        });
        return;
    }

    let summary = &state.summary;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("NCR Data Scientist Company Job Market");
            ui.add_space(8.0);

            ui.strong("Company Metrics Overview");
            metrics_row(ui, summary);
            ui.separator();

            ui.strong("Visual Insights");
            ui.columns(2, |cols| {
                cols[0].label("Primary Skill Distribution");
                if summary.company_count == 0 {
                    cols[0].label("No data");
                } else if let Some(colors) = &state.skill_colors {
                    plot::skill_pie(&mut cols[0], summary, colors);
                    plot::skill_legend(&mut cols[0], summary, colors);
                }

                cols[1].label("Company Rating Distribution");
                plot::rating_bars(&mut cols[1], summary);
            });
            ui.separator();

            ui.strong("Package vs Rating & Top Companies");
            ui.columns(2, |cols| {
                cols[0].label("Package vs Rating");
                plot::rating_package_scatter(&mut cols[0], summary);

                cols[1].label("Top 10 Companies by Package");
                top_companies_table(&mut cols[1], summary);
            });
            ui.separator();

            insights_block(ui);

            if summary.company_count == 0 {
                ui.add_space(8.0);
                ui.colored_label(
                    Color32::YELLOW,
                    "⚠ No companies match the selected filters",
                );
            }
        });
}

/// Four metric tiles: company count plus the package statistics. The three
/// package tiles fall back to the "no data" marker when absent.
fn metrics_row(ui: &mut Ui, summary: &DashboardSummary) {
    let fmt = |v: Option<f64>| {
        v.map(|v| format!("{v:.1}"))
            .unwrap_or_else(|| NO_DATA.to_string())
    };
    let stats = summary.package_stats;
    let tiles = [
        ("Total Companies", summary.company_count.to_string()),
        ("Avg Package (LPA)", fmt(stats.map(|s| s.mean))),
        ("Max Package (LPA)", fmt(stats.map(|s| s.max))),
        ("Min Package (LPA)", fmt(stats.map(|s| s.min))),
    ];

    ui.columns(4, |cols| {
        for (col, (label, value)) in cols.iter_mut().zip(tiles) {
            col.label(label);
            col.heading(value);
        }
    });
}

/// The ranked table: top 10 filtered rows by package value.
fn top_companies_table(ui: &mut Ui, summary: &DashboardSummary) {
    if summary.top_companies.is_empty() {
        ui.label("No data");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder().at_least(120.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(100.0))
        .column(Column::auto().at_least(60.0))
        .header(20.0, |mut header| {
            for title in ["Company", "Location", "Package (LPA)", "Rating"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for row in &summary.top_companies {
                body.row(18.0, |mut table_row| {
                    table_row.col(|ui| {
                        ui.label(&row.company_name);
                    });
                    table_row.col(|ui| {
                        ui.label(&row.location);
                    });
                    table_row.col(|ui| {
                        ui.label(&row.package_text);
                    });
                    table_row.col(|ui| {
                        ui.label(
                            row.rating
                                .map(|r| format!("{r:.1}"))
                                .unwrap_or_else(|| NO_DATA.to_string()),
                        );
                    });
                });
            }
        });
}

/// Static informational block, unchanged across filter selections.
fn insights_block(ui: &mut Ui) {
    ui.strong("Key Insights");
    for line in [
        "Hybrid work mode dominates NCR companies",
        "Higher package does not always mean higher rating",
        "Machine Learning is the most common primary skill",
        "Gurgaon & Noida show higher paying opportunities",
    ] {
        ui.label(format!("• {line}"));
    }
}
