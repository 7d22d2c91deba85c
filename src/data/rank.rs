use std::cmp::Ordering;

use super::model::{Listing, ListingDataset, NumericColumn};

// ---------------------------------------------------------------------------
// Top-N ranking over a filtered view
// ---------------------------------------------------------------------------

/// How many rows the "top listings" table shows.
pub const TOP_N: usize = 5;

/// Columns the top-listings table can sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Price,
    Beds,
    Baths,
    Sqft,
}

impl SortColumn {
    pub const ALL: [SortColumn; 4] = [
        SortColumn::Price,
        SortColumn::Beds,
        SortColumn::Baths,
        SortColumn::Sqft,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Price => NumericColumn::Price.name(),
            SortColumn::Beds => NumericColumn::Beds.name(),
            SortColumn::Baths => NumericColumn::Baths.name(),
            SortColumn::Sqft => NumericColumn::Sqft.name(),
        }
    }

    fn key(&self, listing: &Listing) -> Option<f64> {
        match self {
            SortColumn::Price => Some(listing.price),
            SortColumn::Beds => Some(listing.beds as f64),
            SortColumn::Baths => Some(listing.baths),
            SortColumn::Sqft => listing.sqft,
        }
    }
}

/// Sort direction for the top-listings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Largest,
    Smallest,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Largest, SortOrder::Smallest];

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Largest => "Largest",
            SortOrder::Smallest => "Smallest",
        }
    }
}

/// Rank a filtered view by one column and keep the first `n` rows.
///
/// The sort is stable, so ties keep their file order. Listings with no
/// value in the sort column (missing sqft) rank after all listings with
/// one, in either direction.
pub fn top_n(
    dataset: &ListingDataset,
    view: &[usize],
    column: SortColumn,
    order: SortOrder,
    n: usize,
) -> Vec<usize> {
    let mut ranked: Vec<usize> = view.to_vec();
    ranked.sort_by(|&a, &b| {
        let ka = column.key(&dataset.listings[a]);
        let kb = column.key(&dataset.listings[b]);
        match (ka, kb) {
            (Some(x), Some(y)) => {
                let cmp = x.total_cmp(&y);
                match order {
                    SortOrder::Smallest => cmp,
                    SortOrder::Largest => cmp.reverse(),
                }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
    ranked.truncate(n);
    ranked
}
