//! Writes a deterministic synthetic `NY-House-Dataset.csv` so the dashboard
//! can be exercised without the real export.

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Borough name, map centre, and a price level multiplier.
const BOROUGHS: &[(&str, f64, f64, f64)] = &[
    ("Manhattan", 40.776, -73.971, 2.6),
    ("Brooklyn", 40.650, -73.950, 1.4),
    ("Queens", 40.728, -73.794, 1.0),
    ("Bronx", 40.846, -73.878, 0.8),
    ("Staten Island", 40.579, -74.151, 0.9),
];

const BROKERS: &[&str] = &[
    "Brokered by COMPASS",
    "Brokered by Douglas Elliman",
    "Brokered by Corcoran East Side",
    "Brokered by Brown Harris Stevens",
    "Brokered by Keller Williams NYC",
    "Brokered by RE/MAX Edge",
    "Brokered by Sotheby's International Realty",
    "Brokered by EXP Realty",
];

const PROPERTY_TYPES: &[&str] = &[
    "Condo for sale",
    "House for sale",
    "Co-op for sale",
    "Townhouse for sale",
    "Multi-family home for sale",
];

const STREETS: &[&str] = &[
    "Madison Ave",
    "Ocean Pkwy",
    "Steinway St",
    "Grand Concourse",
    "Victory Blvd",
    "Bedford Ave",
    "Astoria Blvd",
    "Riverside Dr",
];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let output_path = "NY-House-Dataset.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer.write_record([
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
    ])?;

    let rows = 400;
    for i in 0..rows {
        let &(borough, lat_centre, lon_centre, price_level) = rng.pick(BOROUGHS);

        // Studios exist: beds may be 0.
        let beds = (rng.next_u64() % 7) as u32;
        let baths = 1.0 + (rng.next_u64() % 6) as f64 * 0.5;

        let base = 280_000.0 + 190_000.0 * beds as f64;
        let price = (rng.gauss(base * price_level, base * 0.2).max(90_000.0) / 1_000.0).round()
            * 1_000.0;

        // Roughly one row in eight has no recorded square footage.
        let sqft = if rng.next_u64() % 8 == 0 {
            String::new()
        } else {
            format!("{:.0}", rng.gauss(450.0 + 380.0 * beds as f64, 120.0).max(250.0))
        };

        // And roughly one in ten has no broker.
        let broker: &str = if rng.next_u64() % 10 == 0 {
            ""
        } else {
            *rng.pick(BROKERS)
        };

        let street_no = 1 + (rng.next_u64() % 9800);
        let street = *rng.pick(STREETS);
        let latitude = rng.gauss(lat_centre, 0.02);
        let longitude = rng.gauss(lon_centre, 0.02);

        let record = [
            broker.to_string(),
            (*rng.pick(PROPERTY_TYPES)).to_string(),
            format!("{price:.0}"),
            beds.to_string(),
            format!("{baths:.1}"),
            sqft,
            format!("{street_no} {street} #{}", i % 40 + 1),
            format!("New York, NY 10{:03}", i % 300),
            borough.to_string(),
            format!("{latitude:.6}"),
            format!("{longitude:.6}"),
        ];
        writer.write_record(&record)?;
    }

    writer.flush().context("flushing CSV")?;
    println!("Wrote {rows} synthetic listings to {output_path}");
    Ok(())
}
