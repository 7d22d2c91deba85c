use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints, Points};

use crate::data::stats;
use crate::state::AppState;
use crate::ui::format_usd_cents;

// ---------------------------------------------------------------------------
// Charts tab: histograms, regression scatter, ratio calculator
// ---------------------------------------------------------------------------

// The original dashboard's chart colours.
const HOT_PINK: Color32 = Color32::from_rgb(0xff, 0x69, 0xb4);
const BLUE_VIOLET: Color32 = Color32::from_rgb(0x8a, 0x2b, 0xe2);

pub fn charts_tab(ui: &mut Ui, state: &mut AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let beds: Vec<f64> = state
                .visible_indices
                .iter()
                .map(|&i| state.dataset.listings[i].beds as f64)
                .collect();
            histogram_section(
                ui,
                "Distribution of Bedrooms",
                "beds_histogram",
                "Bedrooms",
                &beds,
                HOT_PINK,
            );

            let baths: Vec<f64> = state
                .visible_indices
                .iter()
                .map(|&i| state.dataset.listings[i].baths)
                .collect();
            histogram_section(
                ui,
                "Distribution of Bathrooms",
                "baths_histogram",
                "Bathrooms",
                &baths,
                BLUE_VIOLET,
            );

            regression_section(ui, state);
            ui.separator();
            ratio_section(ui, state);
        });
}

// ---------------------------------------------------------------------------
// Histograms over the filtered view
// ---------------------------------------------------------------------------

fn histogram_section(
    ui: &mut Ui,
    title: &str,
    plot_id: &str,
    x_label: &str,
    values: &[f64],
    color: Color32,
) {
    ui.heading(title);
    let Some(hist) = stats::discrete_histogram(values) else {
        ui.label("No listings available for this chart.");
        ui.add_space(8.0);
        return;
    };

    let bars: Vec<Bar> = hist
        .bins()
        .map(|(bin, count)| Bar::new(bin as f64, count as f64).width(0.9))
        .collect();

    Plot::new(plot_id)
        .height(200.0)
        .x_axis_label(x_label)
        .y_axis_label("Listings")
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(color));
        });
    ui.add_space(8.0);
}

// ---------------------------------------------------------------------------
// Price vs. bedrooms with a least-squares line, Tukey outliers excluded
// ---------------------------------------------------------------------------

fn regression_section(ui: &mut Ui, state: &AppState) {
    ui.heading("Price vs. Bedrooms (outliers removed)");

    // The whole dataset, not the filtered view, mirrors how the trend is
    // meant to read: the market, not the current search.
    let prices: Vec<f64> = state.dataset.listings.iter().map(|l| l.price).collect();
    let Some((low_fence, high_fence)) = stats::iqr_bounds(&prices) else {
        ui.label("No data available for the regression chart.");
        return;
    };

    let points_data: Vec<(f64, f64)> = state
        .dataset
        .listings
        .iter()
        .filter(|l| l.price >= low_fence && l.price <= high_fence)
        .map(|l| (l.beds as f64, l.price))
        .collect();
    if points_data.is_empty() {
        ui.label("No data available for the regression chart.");
        return;
    }

    let fit = stats::linear_fit(&points_data);

    Plot::new("price_vs_beds")
        .height(240.0)
        .x_axis_label("Bedrooms")
        .y_axis_label("Price ($)")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            let scatter: PlotPoints = points_data.iter().map(|&(x, y)| [x, y]).collect();
            plot_ui.points(
                Points::new(scatter)
                    .name("Listings")
                    .color(HOT_PINK)
                    .radius(2.5),
            );

            if let Some(fit) = fit {
                let x_min = points_data.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
                let x_max = points_data
                    .iter()
                    .map(|p| p.0)
                    .fold(f64::NEG_INFINITY, f64::max);
                let line: PlotPoints =
                    vec![[x_min, fit.y_at(x_min)], [x_max, fit.y_at(x_max)]].into();
                plot_ui.line(
                    Line::new(line)
                        .name("Least-squares fit")
                        .color(BLUE_VIOLET)
                        .width(2.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Price ratio calculator
// ---------------------------------------------------------------------------

fn ratio_section(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Price Ratio Calculator");
    ui.label("Average price per bedroom and per bathroom across the whole dataset,");
    ui.label("restricted to a minimum bedroom count and a maximum price.");

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Min bedrooms:");
        ui.add(egui::DragValue::new(&mut state.ratio_min_beds).range(0..=50));
        ui.label("Max price:");
        ui.add(
            egui::DragValue::new(&mut state.ratio_max_price)
                .range(0.0..=f64::MAX)
                .speed(10_000)
                .prefix("$"),
        );
        if ui.button("Calculate ratios").clicked() {
            state.compute_ratios();
        }
    });

    let Some((result, count)) = &state.ratio_result else {
        return;
    };

    if *count == 0 {
        ui.label(RichText::new("No listings found with those filters.").color(Color32::YELLOW));
        return;
    }

    ui.label(format!("Listings matched: {count}"));
    ratio_line(ui, "Avg price per bedroom", result.avg_price_per_bedroom);
    ratio_line(ui, "Avg price per bathroom", result.avg_price_per_bathroom);
}

fn ratio_line(ui: &mut Ui, label: &str, value: Option<f64>) {
    match value {
        Some(v) => {
            ui.label(format!("{label}: {}", format_usd_cents(v)));
        }
        None => {
            // Zero total beds (or baths) in the matched subset.
            ui.label(format!("{label}: n/a"));
        }
    }
}
