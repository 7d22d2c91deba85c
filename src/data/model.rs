use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Listing – one row of the source CSV
// ---------------------------------------------------------------------------

/// A single house listing (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    /// Listing broker; the source data leaves this blank for some rows.
    pub broker: Option<String>,
    /// Listing category, e.g. "Condo for sale".
    pub property_type: String,
    pub price: f64,
    pub beds: u32,
    /// Fractional bathrooms are real ("2.5 bath").
    pub baths: f64,
    /// Square footage; missing for a fair share of the rows.
    pub sqft: Option<f64>,
    pub address: String,
    pub state: String,
    /// Borough / neighbourhood used for geographic filtering.
    pub sublocality: String,
    pub latitude: f64,
    pub longitude: f64,
}

// ---------------------------------------------------------------------------
// NumericColumn – the columns formulas can reference
// ---------------------------------------------------------------------------

/// Numeric columns of a [`Listing`], addressable by their CSV header name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericColumn {
    Price,
    Beds,
    Baths,
    Sqft,
    Latitude,
    Longitude,
}

impl NumericColumn {
    pub const ALL: [NumericColumn; 6] = [
        NumericColumn::Price,
        NumericColumn::Beds,
        NumericColumn::Baths,
        NumericColumn::Sqft,
        NumericColumn::Latitude,
        NumericColumn::Longitude,
    ];

    /// The CSV header spelling of this column.
    pub fn name(&self) -> &'static str {
        match self {
            NumericColumn::Price => "PRICE",
            NumericColumn::Beds => "BEDS",
            NumericColumn::Baths => "BATH",
            NumericColumn::Sqft => "PROPERTYSQFT",
            NumericColumn::Latitude => "LATITUDE",
            NumericColumn::Longitude => "LONGITUDE",
        }
    }

    /// Look a column up by name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|col| col.name().eq_ignore_ascii_case(name))
    }

    /// The column's value for one listing. `None` only for missing sqft.
    pub fn value(&self, listing: &Listing) -> Option<f64> {
        match self {
            NumericColumn::Price => Some(listing.price),
            NumericColumn::Beds => Some(listing.beds as f64),
            NumericColumn::Baths => Some(listing.baths),
            NumericColumn::Sqft => listing.sqft,
            NumericColumn::Latitude => Some(listing.latitude),
            NumericColumn::Longitude => Some(listing.longitude),
        }
    }
}

// ---------------------------------------------------------------------------
// ListingDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full loaded table with pre-computed category and range indexes.
///
/// Built once at startup and never mutated; filter widgets seed their
/// bounds from the `*_bounds` fields the same way the source sliders seed
/// theirs from the column min/max.
#[derive(Debug, Clone)]
pub struct ListingDataset {
    /// All listings in file order.
    pub listings: Vec<Listing>,
    /// Sorted unique boroughs (sublocality values).
    pub boroughs: Vec<String>,
    /// Sorted unique broker titles; rows without a broker contribute nothing.
    pub brokers: Vec<String>,
    /// Inclusive (min, max) over the whole dataset.
    pub beds_bounds: (u32, u32),
    pub baths_bounds: (f64, f64),
    pub price_bounds: (f64, f64),
}

impl ListingDataset {
    /// Build the indexes from loaded listings.
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        let mut boroughs: BTreeSet<&str> = BTreeSet::new();
        let mut brokers: BTreeSet<&str> = BTreeSet::new();

        let mut beds_bounds = (u32::MAX, u32::MIN);
        let mut baths_bounds = (f64::INFINITY, f64::NEG_INFINITY);
        let mut price_bounds = (f64::INFINITY, f64::NEG_INFINITY);

        for listing in &listings {
            boroughs.insert(&listing.sublocality);
            if let Some(broker) = &listing.broker {
                brokers.insert(broker);
            }
            beds_bounds.0 = beds_bounds.0.min(listing.beds);
            beds_bounds.1 = beds_bounds.1.max(listing.beds);
            baths_bounds.0 = baths_bounds.0.min(listing.baths);
            baths_bounds.1 = baths_bounds.1.max(listing.baths);
            price_bounds.0 = price_bounds.0.min(listing.price);
            price_bounds.1 = price_bounds.1.max(listing.price);
        }

        if listings.is_empty() {
            beds_bounds = (0, 0);
            baths_bounds = (0.0, 0.0);
            price_bounds = (0.0, 0.0);
        }

        ListingDataset {
            boroughs: boroughs.into_iter().map(String::from).collect(),
            brokers: brokers.into_iter().map(String::from).collect(),
            beds_bounds,
            baths_bounds,
            price_bounds,
            listings,
        }
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_listing(borough: &str, broker: Option<&str>, price: f64, beds: u32) -> Listing {
        Listing {
            broker: broker.map(String::from),
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

    #[test]
    fn indexes_are_sorted_and_deduplicated() {
        let ds = ListingDataset::from_listings(vec![
            make_listing("Queens", Some("Compass"), 500_000.0, 2),
            make_listing("Brooklyn", None, 750_000.0, 3),
            make_listing("Queens", Some("Brown Harris"), 320_000.0, 1),
        ]);
        assert_eq!(ds.boroughs, vec!["Brooklyn", "Queens"]);
        assert_eq!(ds.brokers, vec!["Brown Harris", "Compass"]);
        assert_eq!(ds.beds_bounds, (1, 3));
        assert_eq!(ds.price_bounds, (320_000.0, 750_000.0));
    }

    #[test]
    fn empty_dataset_has_zeroed_bounds() {
        let ds = ListingDataset::from_listings(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.beds_bounds, (0, 0));
        assert_eq!(ds.price_bounds, (0.0, 0.0));
    }

    #[test]
    fn column_lookup_is_case_insensitive() {
        assert_eq!(NumericColumn::from_name("price"), Some(NumericColumn::Price));
        assert_eq!(NumericColumn::from_name("Bath"), Some(NumericColumn::Baths));
        assert_eq!(NumericColumn::from_name("ZZZ"), None);
    }

    #[test]
    fn sqft_is_the_only_missing_column() {
        let listing = make_listing("Bronx", None, 100.0, 2);
        assert_eq!(NumericColumn::Sqft.value(&listing), None);
        for col in NumericColumn::ALL {
            if col != NumericColumn::Sqft {
                assert!(col.value(&listing).is_some(), "{} missing", col.name());
            }
        }
    }
}
