use eframe::egui::{self, Ui};
use egui_plot::{Legend, Plot, PlotPoint, PlotPoints, Points};

use crate::state::AppState;
use crate::ui::format_usd;

// ---------------------------------------------------------------------------
// Map tab: lon/lat scatter of the filtered view, coloured by borough
// ---------------------------------------------------------------------------

/// Screen-space pick radius for the hover card, squared (8 px).
const PICK_RADIUS_SQ: f32 = 64.0;

pub fn map_tab(ui: &mut Ui, state: &AppState) {
    if state.visible_indices.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No listings match the current filters.");
        });
        return;
    }

    ui.label("Hover a point for address, broker, and price.");

    let response = Plot::new("listings_map")
        .data_aspect(1.0)
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            for borough in &state.dataset.boroughs {
                let coords: PlotPoints = state
                    .visible_indices
                    .iter()
                    .map(|&i| &state.dataset.listings[i])
                    .filter(|listing| &listing.sublocality == borough)
                    .map(|listing| [listing.longitude, listing.latitude])
                    .collect();

                plot_ui.points(
                    Points::new(coords)
                        .name(borough)
                        .color(state.borough_colors.color_for(borough))
                        .radius(3.0),
                );
            }

            hovered_listing(plot_ui, state)
        });

    if let Some(idx) = response.inner {
        let listing = &state.dataset.listings[idx];
        egui::show_tooltip_at_pointer(
            ui.ctx(),
            response.response.layer_id,
            egui::Id::new("listing_hover_card"),
            |ui: &mut Ui| {
                ui.strong(&listing.address);
                ui.label(format!(
                    "Broker: {}",
                    listing.broker.as_deref().unwrap_or("(none)")
                ));
                ui.label(format!("Price: {}", format_usd(listing.price)));
            },
        );
    }
}

/// The visible listing closest to the pointer, if any is within picking
/// distance in screen space.
fn hovered_listing(plot_ui: &egui_plot::PlotUi, state: &AppState) -> Option<usize> {
    let pointer = plot_ui.pointer_coordinate()?;
    let pointer_px = plot_ui.screen_from_plot(pointer);

    state
        .visible_indices
        .iter()
        .copied()
        .filter_map(|i| {
            let listing = &state.dataset.listings[i];
            let px = plot_ui.screen_from_plot(PlotPoint::new(listing.longitude, listing.latitude));
            let dist_sq = (px - pointer_px).length_sq();
            (dist_sq <= PICK_RADIUS_SQ).then_some((i, dist_sq))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}
