use super::model::ListingDataset;

// ---------------------------------------------------------------------------
// Aggregate price ratios
// ---------------------------------------------------------------------------

/// Sum-based average price per bedroom / bathroom over a doubly-filtered
/// subset of the whole dataset.
///
/// A field is `None` when the subset is empty, or when that field's
/// denominator (total beds or total baths) is zero while the subset is
/// not — one degenerate denominator doesn't suppress the other metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioResult {
    pub avg_price_per_bedroom: Option<f64>,
    pub avg_price_per_bathroom: Option<f64>,
}

/// Compute price ratios over listings with `beds >= min_beds` and
/// `price <= max_price`, returning the result and the matched-row count.
///
/// Always runs over the full dataset, not the filtered view. Ratios are
/// rounded to cents.
pub fn price_ratios(
    dataset: &ListingDataset,
    min_beds: u32,
    max_price: f64,
) -> (RatioResult, usize) {
    let mut count = 0usize;
    let mut price_sum = 0.0;
    let mut beds_sum = 0.0;
    let mut baths_sum = 0.0;

    for listing in &dataset.listings {
        if listing.beds >= min_beds && listing.price <= max_price {
            count += 1;
            price_sum += listing.price;
            beds_sum += listing.beds as f64;
            baths_sum += listing.baths;
        }
    }

    if count == 0 {
        return (
            RatioResult {
                avg_price_per_bedroom: None,
                avg_price_per_bathroom: None,
            },
            0,
        );
    }

    let result = RatioResult {
        avg_price_per_bedroom: (beds_sum > 0.0).then(|| round_cents(price_sum / beds_sum)),
        avg_price_per_bathroom: (baths_sum > 0.0).then(|| round_cents(price_sum / baths_sum)),
    };
    (result, count)
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Listing;

    fn make_listing(beds: u32, baths: f64, price: f64) -> Listing {
        Listing {
            broker: None,
            property_type: "House for sale".to_string(),
            price,
            beds,
            baths,
            sqft: None,
            address: "1 Main St".to_string(),
            state: "New York, NY 10001".to_string(),
            sublocality: "Queens".to_string(),
            latitude: 40.7,
            longitude: -74.0,
        }
    }

    #[test]
    fn worked_example_matches_hand_computation() {
        let ds = ListingDataset::from_listings(vec![
            make_listing(2, 1.0, 100_000.0),
            make_listing(3, 2.0, 300_000.0),
        ]);
        let (result, count) = price_ratios(&ds, 2, 300_000.0);
        assert_eq!(count, 2);
        // 400_000 / 5 beds and 400_000 / 3 baths.
        assert_eq!(result.avg_price_per_bedroom, Some(80_000.0));
        assert_eq!(result.avg_price_per_bathroom, Some(133_333.33));
    }

    #[test]
    fn unconstrained_inputs_match_the_whole_dataset() {
        let ds = ListingDataset::from_listings(vec![
            make_listing(2, 1.0, 100_000.0),
            make_listing(0, 1.0, 900_000.0),
            make_listing(5, 3.0, 4_000_000.0),
        ]);
        let (_, count) = price_ratios(&ds, 0, f64::INFINITY);
        assert_eq!(count, ds.len());
    }

    #[test]
    fn empty_subset_yields_nulls_and_zero_count() {
        let ds = ListingDataset::from_listings(vec![make_listing(1, 1.0, 500_000.0)]);
        let (result, count) = price_ratios(&ds, 4, 100_000.0);
        assert_eq!(count, 0);
        assert_eq!(result.avg_price_per_bedroom, None);
        assert_eq!(result.avg_price_per_bathroom, None);
    }

    #[test]
    fn zero_bed_sum_nulls_only_the_bedroom_ratio() {
        // Studios: zero beds but real baths.
        let ds = ListingDataset::from_listings(vec![
            make_listing(0, 1.0, 200_000.0),
            make_listing(0, 1.0, 400_000.0),
        ]);
        let (result, count) = price_ratios(&ds, 0, f64::INFINITY);
        assert_eq!(count, 2);
        assert_eq!(result.avg_price_per_bedroom, None);
        assert_eq!(result.avg_price_per_bathroom, Some(300_000.0));
    }

    #[test]
    fn ratios_round_to_cents() {
        let ds = ListingDataset::from_listings(vec![make_listing(3, 3.0, 100_000.0)]);
        let (result, _) = price_ratios(&ds, 0, f64::INFINITY);
        assert_eq!(result.avg_price_per_bedroom, Some(33_333.33));
    }
}
