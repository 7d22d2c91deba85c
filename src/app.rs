use eframe::egui;

use crate::data::model::ListingDataset;
use crate::state::{AppState, Tab};
use crate::ui::{charts, map, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BrownstoneApp {
    pub state: AppState,
}

impl BrownstoneApp {
    pub fn new(dataset: ListingDataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for BrownstoneApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: tabbed views ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                for tab in Tab::ALL {
                    if ui.selectable_label(self.state.tab == tab, tab.label()).clicked() {
                        self.state.tab = tab;
                    }
                }
            });
            ui.separator();

            match self.state.tab {
                Tab::Listings => table::listings_tab(ui, &mut self.state),
                Tab::Map => map::map_tab(ui, &self.state),
                Tab::Charts => charts::charts_tab(ui, &mut self.state),
            }
        });
    }
}
