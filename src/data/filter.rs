use std::collections::BTreeSet;

use super::model::{Listing, ListingDataset};

// ---------------------------------------------------------------------------
// FilterState – the user's complete predicate set
// ---------------------------------------------------------------------------

/// Everything the user has dialled in on the filter panel.
///
/// Ranges are inclusive on both ends. An empty borough or broker set means
/// "no filter" for that category (the multi-selects say so in the UI), so a
/// fresh [`FilterState::covering`] state shows the whole dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub beds: (u32, u32),
    pub baths: (f64, f64),
    pub price: (f64, f64),
    pub boroughs: BTreeSet<String>,
    pub brokers: BTreeSet<String>,
}

impl FilterState {
    /// The widest filter for a dataset: ranges at the dataset bounds,
    /// no category selections.
    pub fn covering(dataset: &ListingDataset) -> Self {
        FilterState {
            beds: dataset.beds_bounds,
            baths: dataset.baths_bounds,
            price: dataset.price_bounds,
            boroughs: BTreeSet::new(),
            brokers: BTreeSet::new(),
        }
    }

    /// True when the user typed a minimum price above the maximum.
    /// The filter degrades to an empty view instead of failing.
    pub fn price_range_inverted(&self) -> bool {
        self.price.0 > self.price.1
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return indices of listings that pass all active filters, in file order.
pub fn filtered_indices(dataset: &ListingDataset, filters: &FilterState) -> Vec<usize> {
    // Inverted price range: deliberate degenerate case, not an error.
    if filters.price_range_inverted() {
        return Vec::new();
    }

    dataset
        .listings
        .iter()
        .enumerate()
        .filter(|(_, listing)| passes(listing, filters))
        .map(|(i, _)| i)
        .collect()
}

fn passes(listing: &Listing, filters: &FilterState) -> bool {
    let (beds_min, beds_max) = filters.beds;
    let (baths_min, baths_max) = filters.baths;
    let (price_min, price_max) = filters.price;

    listing.beds >= beds_min
        && listing.beds <= beds_max
        && listing.baths >= baths_min
        && listing.baths <= baths_max
        && listing.price >= price_min
        && listing.price <= price_max
        && (filters.boroughs.is_empty() || filters.boroughs.contains(&listing.sublocality))
        // A listing without a broker never matches an explicit broker selection.
        && (filters.brokers.is_empty()
            || listing
                .broker
                .as_ref()
                .is_some_and(|b| filters.brokers.contains(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_listing(
        beds: u32,
        baths: f64,
        price: f64,
        borough: &str,
        broker: Option<&str>,
    ) -> Listing {
        Listing {
            broker: broker.map(String::from),
            property_type: "House for sale".to_string(),
            price,
            beds,
            baths,
            sqft: Some(1_000.0),
            address: "1 Main St".to_string(),
            state: "New York, NY 10001".to_string(),
            sublocality: borough.to_string(),
            latitude: 40.7,
            longitude: -74.0,
        }
    }

    fn dataset() -> ListingDataset {
        ListingDataset::from_listings(vec![
            make_listing(2, 1.0, 100_000.0, "Queens", Some("Compass")),
            make_listing(3, 2.0, 300_000.0, "Brooklyn", Some("Elegran")),
            make_listing(5, 3.5, 2_000_000.0, "Manhattan", None),
            make_listing(1, 1.0, 250_000.0, "Queens", Some("Compass")),
        ])
    }

    #[test]
    fn covering_state_passes_every_row() {
        let ds = dataset();
        let filters = FilterState::covering(&ds);
        assert_eq!(filtered_indices(&ds, &filters), vec![0, 1, 2, 3]);
    }

    #[test]
    fn included_rows_satisfy_all_predicates_and_excluded_violate_one() {
        let ds = dataset();
        let mut filters = FilterState::covering(&ds);
        filters.beds = (2, 3);
        filters.baths = (1.0, 2.0);
        filters.price = (0.0, 1_000_000.0);

        let included = filtered_indices(&ds, &filters);
        assert_eq!(included, vec![0, 1]);

        for (i, listing) in ds.listings.iter().enumerate() {
            if included.contains(&i) {
                assert!(passes(listing, &filters));
            } else {
                assert!(!passes(listing, &filters));
            }
        }
    }

    #[test]
    fn range_ends_are_inclusive() {
        let ds = dataset();
        let mut filters = FilterState::covering(&ds);
        filters.price = (100_000.0, 300_000.0);
        // Rows priced exactly at both ends stay in.
        assert_eq!(filtered_indices(&ds, &filters), vec![0, 1, 3]);
    }

    #[test]
    fn inverted_price_range_yields_empty_view() {
        let ds = dataset();
        let mut filters = FilterState::covering(&ds);
        filters.price = (500_000.0, 100_000.0);
        assert!(filters.price_range_inverted());
        assert!(filtered_indices(&ds, &filters).is_empty());
    }

    #[test]
    fn empty_selection_sets_mean_no_filter() {
        let ds = dataset();
        let filters = FilterState::covering(&ds);
        assert!(filters.boroughs.is_empty() && filters.brokers.is_empty());
        assert_eq!(filtered_indices(&ds, &filters).len(), ds.len());
    }

    #[test]
    fn borough_selection_filters_rows() {
        let ds = dataset();
        let mut filters = FilterState::covering(&ds);
        filters.boroughs.insert("Queens".to_string());
        assert_eq!(filtered_indices(&ds, &filters), vec![0, 3]);
    }

    #[test]
    fn brokerless_listing_never_matches_a_broker_selection() {
        let ds = dataset();
        let mut filters = FilterState::covering(&ds);
        filters.brokers.insert("Compass".to_string());
        // Row 2 has no broker and must drop out.
        assert_eq!(filtered_indices(&ds, &filters), vec![0, 3]);
    }
}
