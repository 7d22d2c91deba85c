use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use super::model::{Listing, ListingDataset};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Columns the listings CSV must carry (any order, extra columns ignored).
const REQUIRED_COLUMNS: &[&str] = &[
    "BROKERTITLE",
    "TYPE",
    "PRICE",
    "BEDS",
    "BATH",
    "PROPERTYSQFT",
    "ADDRESS",
    "STATE",
    "SUBLOCALITY",
    "LATITUDE",
    "LONGITUDE",
];

/// Load the listings dataset from a CSV file.
///
/// This runs once at startup and any failure is fatal: a missing file,
/// a missing column, or a row that doesn't parse all abort the launch.
pub fn load_csv(path: &Path) -> Result<ListingDataset> {
    let reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening listings CSV {}", path.display()))?;
    read_listings(reader)
}

/// Parse listings out of an open CSV reader.
fn read_listings<R: Read>(mut reader: csv::Reader<R>) -> Result<ListingDataset> {
    let headers = reader.headers().context("reading CSV headers")?.clone();

    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *col) {
            bail!("listings CSV missing '{col}' column");
        }
    }

    let mut listings = Vec::new();
    for (row_no, result) in reader.deserialize::<RawListing>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        listings.push(raw.into_listing());
    }

    Ok(ListingDataset::from_listings(listings))
}

// ---------------------------------------------------------------------------
// Raw CSV record
// ---------------------------------------------------------------------------

/// One CSV row as serde sees it; blank BROKERTITLE / PROPERTYSQFT fields
/// deserialize to `None`.
#[derive(Debug, Deserialize)]
struct RawListing {
    #[serde(rename = "BROKERTITLE")]
    broker: Option<String>,
    #[serde(rename = "TYPE")]
    property_type: String,
    #[serde(rename = "PRICE")]
    price: f64,
    #[serde(rename = "BEDS")]
    beds: u32,
    #[serde(rename = "BATH")]
    baths: f64,
    #[serde(rename = "PROPERTYSQFT")]
    sqft: Option<f64>,
    #[serde(rename = "ADDRESS")]
    address: String,
    #[serde(rename = "STATE")]
    state: String,
    #[serde(rename = "SUBLOCALITY")]
    sublocality: String,
    #[serde(rename = "LATITUDE")]
    latitude: f64,
    #[serde(rename = "LONGITUDE")]
    longitude: f64,
}

impl RawListing {
    fn into_listing(self) -> Listing {
        Listing {
            // A whitespace-only broker cell means "no broker" too.
            broker: self.broker.filter(|b| !b.trim().is_empty()),
            property_type: self.property_type,
            price: self.price,
            beds: self.beds,
            baths: self.baths,
            sqft: self.sqft,
            address: self.address,
            state: self.state,
            sublocality: self.sublocality,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}
