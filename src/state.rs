use crate::color::BoroughColors;
use crate::data::filter::{filtered_indices, FilterState};
use crate::data::model::ListingDataset;
use crate::data::rank::{SortColumn, SortOrder};
use crate::data::ratio::{price_ratios, RatioResult};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Central-panel tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Listings,
    Map,
    Charts,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Listings, Tab::Map, Tab::Charts];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Listings => "Listings",
            Tab::Map => "Map",
            Tab::Charts => "Charts",
        }
    }
}

/// The full UI state, independent of rendering.
///
/// The dataset is loaded once before the app starts and never changes;
/// everything else is derived from it plus the user's widget inputs.
pub struct AppState {
    /// The immutable loaded dataset.
    pub dataset: ListingDataset,

    /// Current filter selections.
    pub filters: FilterState,

    /// Indices of listings passing the current filters (recomputed on change).
    pub visible_indices: Vec<usize>,

    /// Borough colours for the map and its legend.
    pub borough_colors: BoroughColors,

    /// Active central tab.
    pub tab: Tab,

    /// Validation message shown in the top bar (red).
    pub status_message: Option<String>,

    // -- Top-listings controls --
    pub sort_column: SortColumn,
    pub sort_order: SortOrder,

    // -- Formula calculator --
    pub formula_input: String,

    // -- Ratio calculator --
    pub ratio_min_beds: u32,
    pub ratio_max_price: f64,
    /// Last computed ratios; survives until the next button press.
    pub ratio_result: Option<(RatioResult, usize)>,
}

impl AppState {
    pub fn new(dataset: ListingDataset) -> Self {
        let filters = FilterState::covering(&dataset);
        let visible_indices = (0..dataset.len()).collect();
        let borough_colors = BoroughColors::new(&dataset.boroughs);

        AppState {
            filters,
            visible_indices,
            borough_colors,
            tab: Tab::Listings,
            status_message: None,
            sort_column: SortColumn::Price,
            sort_order: SortOrder::Largest,
            formula_input: String::new(),
            ratio_min_beds: 2,
            ratio_max_price: 500_000.0,
            ratio_result: None,
            dataset,
        }
    }

    /// Recompute `visible_indices` after any filter change.
    pub fn refilter(&mut self) {
        self.status_message = self
            .filters
            .price_range_inverted()
            .then(|| "Minimum price cannot be greater than maximum price.".to_string());
        self.visible_indices = filtered_indices(&self.dataset, &self.filters);
        log::debug!(
            "refilter: {} of {} listings visible",
            self.visible_indices.len(),
            self.dataset.len()
        );
    }

    /// Reset every filter to the widest state.
    pub fn reset_filters(&mut self) {
        self.filters = FilterState::covering(&self.dataset);
        self.refilter();
    }

    /// Toggle one borough in the selection set.
    pub fn toggle_borough(&mut self, borough: &str) {
        if !self.filters.boroughs.remove(borough) {
            self.filters.boroughs.insert(borough.to_string());
        }
        self.refilter();
    }

    /// Toggle one broker in the selection set.
    pub fn toggle_broker(&mut self, broker: &str) {
        if !self.filters.brokers.remove(broker) {
            self.filters.brokers.insert(broker.to_string());
        }
        self.refilter();
    }

    /// Select every borough. Equivalent to no filter, but the checkboxes
    /// all light up, which is what users expect from an "All" button.
    pub fn select_all_boroughs(&mut self) {
        self.filters.boroughs = self.dataset.boroughs.iter().cloned().collect();
        self.refilter();
    }

    /// Clear the borough selection (empty set = show all).
    pub fn select_no_boroughs(&mut self) {
        self.filters.boroughs.clear();
        self.refilter();
    }

    pub fn select_all_brokers(&mut self) {
        self.filters.brokers = self.dataset.brokers.iter().cloned().collect();
        self.refilter();
    }

    pub fn select_no_brokers(&mut self) {
        self.filters.brokers.clear();
        self.refilter();
    }

    /// Run the ratio calculator with the current inputs.
    pub fn compute_ratios(&mut self) {
        let (result, count) = price_ratios(&self.dataset, self.ratio_min_beds, self.ratio_max_price);
        log::debug!(
            "ratios: min_beds={} max_price={} matched={count}",
            self.ratio_min_beds,
            self.ratio_max_price
        );
        self.ratio_result = Some((result, count));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Listing;

    fn make_listing(beds: u32, price: f64, borough: &str) -> Listing {
        Listing {
            broker: Some("Compass".to_string()),
            property_type: "House for sale".to_string(),
            price,
            beds,
            baths: 1.0,
            sqft: None,
            address: "1 Main St".to_string(),
            state: "New York, NY 10001".to_string(),
            sublocality: borough.to_string(),
            latitude: 40.7,
            longitude: -74.0,
        }
    }

    fn state() -> AppState {
        AppState::new(ListingDataset::from_listings(vec![
            make_listing(1, 100_000.0, "Queens"),
            make_listing(3, 900_000.0, "Brooklyn"),
        ]))
    }

    #[test]
    fn starts_with_everything_visible() {
        let state = state();
        assert_eq!(state.visible_indices, vec![0, 1]);
        assert_eq!(state.status_message, None);
    }

    #[test]
    fn inverted_price_range_sets_message_and_empties_view() {
        let mut state = state();
        state.filters.price = (500_000.0, 100_000.0);
        state.refilter();
        assert!(state.visible_indices.is_empty());
        assert!(state.status_message.is_some());

        state.reset_filters();
        assert_eq!(state.visible_indices, vec![0, 1]);
        assert_eq!(state.status_message, None);
    }

    #[test]
    fn toggling_a_borough_filters_and_toggles_back() {
        let mut state = state();
        state.toggle_borough("Queens");
        assert_eq!(state.visible_indices, vec![0]);
        state.toggle_borough("Queens");
        assert_eq!(state.visible_indices, vec![0, 1]);
    }

    #[test]
    fn select_none_shows_everything() {
        let mut state = state();
        state.select_all_boroughs();
        assert_eq!(state.visible_indices, vec![0, 1]);
        state.select_no_boroughs();
        assert_eq!(state.visible_indices, vec![0, 1]);
    }

    #[test]
    fn compute_ratios_caches_the_result() {
        let mut state = state();
        assert!(state.ratio_result.is_none());
        state.ratio_min_beds = 0;
        state.ratio_max_price = f64::INFINITY;
        state.compute_ratios();
        let (_, count) = state.ratio_result.unwrap();
        assert_eq!(count, 2);
    }
}
