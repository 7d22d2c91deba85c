use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::formula;
use crate::data::rank::{self, SortColumn, SortOrder};
use crate::state::AppState;
use crate::ui::format_usd;

// ---------------------------------------------------------------------------
// Listings tab: filtered table, top-5 ranking, formula calculator
// ---------------------------------------------------------------------------

pub fn listings_tab(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filtered Listings");
    ui.label(format!("Listings found: {}", state.visible_indices.len()));
    ui.add_space(4.0);

    listings_table(ui, state);
    ui.separator();
    top_listings_section(ui, state);
    ui.separator();
    formula_section(ui, state);
}

fn listings_table(ui: &mut Ui, state: &AppState) {
    if state.visible_indices.is_empty() {
        ui.label("No listings match the current filters.");
        return;
    }

    TableBuilder::new(ui)
        .id_salt("listings_table")
        .striped(true)
        .max_scroll_height(280.0)
        .column(Column::auto().at_least(150.0)) // TYPE
        .column(Column::auto().at_least(90.0)) // PRICE
        .column(Column::auto()) // BEDS
        .column(Column::auto()) // BATH
        .column(Column::remainder()) // ADDRESS
        .column(Column::remainder()) // STATE
        .header(18.0, |mut header| {
            for title in ["TYPE", "PRICE", "BEDS", "BATH", "ADDRESS", "STATE"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            // Lazy rows: only what scrolls into view gets laid out.
            body.rows(18.0, state.visible_indices.len(), |mut row| {
                let listing = &state.dataset.listings[state.visible_indices[row.index()]];
                row.col(|ui| {
                    ui.label(&listing.property_type);
                });
                row.col(|ui| {
                    ui.label(format_usd(listing.price));
                });
                row.col(|ui| {
                    ui.label(listing.beds.to_string());
                });
                row.col(|ui| {
                    ui.label(format!("{:.1}", listing.baths));
                });
                row.col(|ui| {
                    ui.label(&listing.address);
                });
                row.col(|ui| {
                    ui.label(&listing.state);
                });
            });
        });
}

// ---------------------------------------------------------------------------
// Top-5 ranking
// ---------------------------------------------------------------------------

fn top_listings_section(ui: &mut Ui, state: &mut AppState) {
    ui.heading(format!("Top {} Listings by a Column", rank::TOP_N));

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Sort by");
        egui::ComboBox::from_id_salt("top_sort_column")
            .selected_text(state.sort_column.label())
            .show_ui(ui, |ui: &mut Ui| {
                for column in SortColumn::ALL {
                    ui.selectable_value(&mut state.sort_column, column, column.label());
                }
            });
        egui::ComboBox::from_id_salt("top_sort_order")
            .selected_text(state.sort_order.label())
            .show_ui(ui, |ui: &mut Ui| {
                for order in SortOrder::ALL {
                    ui.selectable_value(&mut state.sort_order, order, order.label());
                }
            });
    });

    let top = rank::top_n(
        &state.dataset,
        &state.visible_indices,
        state.sort_column,
        state.sort_order,
        rank::TOP_N,
    );
    if top.is_empty() {
        ui.label("No listings to rank.");
        return;
    }

    TableBuilder::new(ui)
        .id_salt("top_listings_table")
        .striped(true)
        .max_scroll_height(140.0)
        .column(Column::auto().at_least(150.0)) // TYPE
        .column(Column::auto().at_least(90.0)) // PRICE
        .column(Column::auto()) // BEDS
        .column(Column::auto()) // BATH
        .column(Column::auto()) // PROPERTYSQFT
        .column(Column::remainder()) // ADDRESS
        .header(18.0, |mut header| {
            for title in ["TYPE", "PRICE", "BEDS", "BATH", "PROPERTYSQFT", "ADDRESS"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for &idx in &top {
                let listing = &state.dataset.listings[idx];
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&listing.property_type);
                    });
                    row.col(|ui| {
                        ui.label(format_usd(listing.price));
                    });
                    row.col(|ui| {
                        ui.label(listing.beds.to_string());
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.1}", listing.baths));
                    });
                    row.col(|ui| {
                        let text = match listing.sqft {
                            Some(sqft) => format!("{sqft:.0}"),
                            None => "-".to_string(),
                        };
                        ui.label(text);
                    });
                    row.col(|ui| {
                        ui.label(&listing.address);
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Formula calculator
// ---------------------------------------------------------------------------

fn formula_section(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Custom Formula Calculator");

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Formula:");
        ui.add(
            egui::TextEdit::singleline(&mut state.formula_input)
                .hint_text("e.g. PRICE / BEDS")
                .desired_width(280.0),
        );
    });

    let input = state.formula_input.trim();
    if input.is_empty() {
        return;
    }

    // Re-evaluated every frame over the current view; cheap and always fresh.
    match formula::evaluate(&state.dataset, &state.visible_indices, input) {
        Err(err) => {
            ui.label(RichText::new(format!("Error in formula: {err}")).color(Color32::RED));
        }
        Ok(values) => {
            TableBuilder::new(ui)
                .id_salt("formula_table")
                .striped(true)
                .max_scroll_height(180.0)
                .column(Column::remainder()) // ADDRESS
                .column(Column::auto().at_least(110.0)) // RESULT
                .header(18.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("ADDRESS");
                    });
                    header.col(|ui| {
                        ui.strong("RESULT");
                    });
                })
                .body(|body| {
                    body.rows(18.0, values.len(), |mut row| {
                        let i = row.index();
                        let listing = &state.dataset.listings[state.visible_indices[i]];
                        let value = values[i];
                        row.col(|ui| {
                            ui.label(&listing.address);
                        });
                        row.col(|ui| {
                            let text = if value.is_nan() {
                                "NaN".to_string()
                            } else {
                                format!("{value:.2}")
                            };
                            ui.label(text);
                        });
                    });
                });
        }
    }
}
