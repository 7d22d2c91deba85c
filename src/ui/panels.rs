use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::format_usd;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar: dataset counts, the active filter summary,
/// and any validation message.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Brownstone");
        ui.separator();

        ui.label(format!(
            "{} listings loaded, {} match filters",
            state.dataset.len(),
            state.visible_indices.len()
        ));
        ui.separator();

        let (beds_min, beds_max) = state.filters.beds;
        let (baths_min, baths_max) = state.filters.baths;
        let (price_min, price_max) = state.filters.price;
        ui.label(format!(
            "Bedrooms {beds_min}\u{2013}{beds_max} | Bathrooms {baths_min:.1}\u{2013}{baths_max:.1} | Price {}\u{2013}{}",
            format_usd(price_min),
            format_usd(price_max),
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Filters");
        if ui.small_button("Reset all").clicked() {
            state.reset_filters();
        }
    });
    ui.separator();

    // Clone the category lists so the loops below can mutate state.
    let boroughs = state.dataset.boroughs.clone();
    let brokers = state.dataset.brokers.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Bedrooms ----
            ui.strong("Bedrooms");
            let (beds_lo, beds_hi) = state.dataset.beds_bounds;
            ui.horizontal(|ui: &mut Ui| {
                ui.add(
                    egui::DragValue::new(&mut state.filters.beds.0)
                        .range(beds_lo..=beds_hi)
                        .prefix("min "),
                );
                ui.add(
                    egui::DragValue::new(&mut state.filters.beds.1)
                        .range(beds_lo..=beds_hi)
                        .prefix("max "),
                );
            });
            ui.separator();

            // ---- Bathrooms ----
            ui.strong("Bathrooms");
            let (baths_lo, baths_hi) = state.dataset.baths_bounds;
            ui.horizontal(|ui: &mut Ui| {
                ui.add(
                    egui::DragValue::new(&mut state.filters.baths.0)
                        .range(baths_lo..=baths_hi)
                        .speed(0.5)
                        .prefix("min "),
                );
                ui.add(
                    egui::DragValue::new(&mut state.filters.baths.1)
                        .range(baths_lo..=baths_hi)
                        .speed(0.5)
                        .prefix("max "),
                );
            });
            ui.separator();

            // ---- Price ----
            // Both ends clamp to the dataset bounds, but min may still be
            // dragged above max: that is the validated empty-result case.
            ui.strong("Price");
            let (price_lo, price_hi) = state.dataset.price_bounds;
            ui.horizontal(|ui: &mut Ui| {
                ui.add(
                    egui::DragValue::new(&mut state.filters.price.0)
                        .range(price_lo..=price_hi)
                        .speed(10_000)
                        .prefix("min $"),
                );
                ui.add(
                    egui::DragValue::new(&mut state.filters.price.1)
                        .range(price_lo..=price_hi)
                        .speed(10_000)
                        .prefix("max $"),
                );
            });
            ui.separator();

            // ---- Borough ----
            category_section(
                ui,
                "Borough",
                &boroughs,
                state,
                |state| &state.filters.boroughs,
                AppState::toggle_borough,
                AppState::select_all_boroughs,
                AppState::select_no_boroughs,
            );

            // ---- Broker ----
            category_section(
                ui,
                "Broker",
                &brokers,
                state,
                |state| &state.filters.brokers,
                AppState::toggle_broker,
                AppState::select_all_brokers,
                AppState::select_no_brokers,
            );
        });

    // Recompute visible indices after any widget change.
    state.refilter();
}

/// One collapsible multi-select. An empty selection means "no filter",
/// which the hint line spells out.
#[allow(clippy::too_many_arguments)]
fn category_section(
    ui: &mut Ui,
    label: &str,
    values: &[String],
    state: &mut AppState,
    selected: fn(&AppState) -> &std::collections::BTreeSet<String>,
    toggle: fn(&mut AppState, &str),
    select_all: fn(&mut AppState),
    select_none: fn(&mut AppState),
) {
    let header = format!("{label}  ({}/{})", selected(state).len(), values.len());

    egui::CollapsingHeader::new(RichText::new(header).strong())
        .id_salt(label)
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.weak("Leave empty to show all.");
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    select_all(state);
                }
                if ui.small_button("None").clicked() {
                    select_none(state);
                }
            });

            for value in values {
                let mut checked = selected(state).contains(value);
                if ui.checkbox(&mut checked, value).changed() {
                    toggle(state, value);
                }
            }
        });
}
