use std::sync::Arc;

use arrow::array::{Float64Array, StringArray, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

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

    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo)
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Field order matches the CSV schema; `csv` derives the header row from it.
#[derive(serde::Serialize)]
struct Company {
    name: String,
    industry: String,
    ratings: f64,
    reviews: u64,
    more_locations: u64,
    jobs: u64,
    hq: String,
}

/// Per-industry rating mean and review-volume ceiling, loosely shaped like
/// the real dataset.
const INDUSTRIES: [(&str, f64, u64); 8] = [
    ("IT Services & Consulting", 3.9, 80_000),
    ("Internet", 4.0, 30_000),
    ("Financial Services", 3.8, 20_000),
    ("FMCG", 4.1, 15_000),
    ("Pharma", 3.9, 12_000),
    ("Retail", 3.7, 25_000),
    ("Engineering & Construction", 3.8, 10_000),
    ("Education & Training", 4.2, 8_000),
];

const CITIES: [&str; 8] = [
    "Bangalore",
    "Mumbai",
    "Delhi",
    "Hyderabad",
    "Pune",
    "Chennai",
    "Gurgaon",
    "Noida",
];

const NAME_HEADS: [&str; 10] = [
    "Apex", "Nimbus", "Quanta", "Vertex", "Orion", "Zenith", "Cobalt", "Stellar", "Lumen",
    "Aster",
];
const NAME_TAILS: [&str; 8] = [
    "Systems", "Solutions", "Labs", "Technologies", "Industries", "Consulting", "Group",
    "Enterprises",
];

fn generate_companies(count: usize, rng: &mut SimpleRng) -> Vec<Company> {
    let mut companies = Vec::with_capacity(count);

    for i in 0..count {
        let (industry, rating_mean, review_cap) =
            INDUSTRIES[(rng.next_u64() % INDUSTRIES.len() as u64) as usize];
        let ratings = (rng.gauss(rating_mean, 0.35).clamp(1.0, 5.0) * 10.0).round() / 10.0;
        // Heavy tail: most companies are small, a few are giants.
        let reviews = ((rng.next_f64().powi(3) * review_cap as f64) as u64).max(10);
        let more_locations = rng.range(0, 1 + reviews / 50 + 5);
        let jobs = rng.range(0, 5 + reviews / 20);

        companies.push(Company {
            name: format!(
                "{} {} {}",
                NAME_HEADS[(rng.next_u64() % NAME_HEADS.len() as u64) as usize],
                NAME_TAILS[(rng.next_u64() % NAME_TAILS.len() as u64) as usize],
                i
            ),
            industry: industry.to_string(),
            ratings,
            reviews,
            more_locations,
            jobs,
            hq: CITIES[(rng.next_u64() % CITIES.len() as u64) as usize].to_string(),
        });
    }

    companies
}

fn write_csv(path: &str, companies: &[Company]) {
    let mut writer = csv::Writer::from_path(path).expect("Failed to create CSV file");
    for c in companies {
        writer.serialize(c).expect("Failed to write CSV row");
    }
    writer.flush().expect("Failed to flush CSV");
}

fn write_parquet(path: &str, companies: &[Company]) {
    let name_array =
        StringArray::from(companies.iter().map(|c| c.name.as_str()).collect::<Vec<_>>());
    let industry_array = StringArray::from(
        companies.iter().map(|c| c.industry.as_str()).collect::<Vec<_>>(),
    );
    let ratings_array =
        Float64Array::from(companies.iter().map(|c| c.ratings).collect::<Vec<_>>());
    let reviews_array =
        UInt64Array::from(companies.iter().map(|c| c.reviews).collect::<Vec<_>>());
    let locations_array =
        UInt64Array::from(companies.iter().map(|c| c.more_locations).collect::<Vec<_>>());
    let jobs_array = UInt64Array::from(companies.iter().map(|c| c.jobs).collect::<Vec<_>>());
    let hq_array = StringArray::from(companies.iter().map(|c| c.hq.as_str()).collect::<Vec<_>>());

    let schema = Arc::new(Schema::new(vec![
        Field::new("name", DataType::Utf8, false),
        Field::new("industry", DataType::Utf8, false),
        Field::new("ratings", DataType::Float64, false),
        Field::new("reviews", DataType::UInt64, false),
        Field::new("more_locations", DataType::UInt64, false),
        Field::new("jobs", DataType::UInt64, false),
        Field::new("hq", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(name_array),
            Arc::new(industry_array),
            Arc::new(ratings_array),
            Arc::new(reviews_array),
            Arc::new(locations_array),
            Arc::new(jobs_array),
            Arc::new(hq_array),
        ],
    )
    .expect("Failed to create RecordBatch");

    let file = std::fs::File::create(path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let companies = generate_companies(10_000, &mut rng);

    std::fs::create_dir_all("data").expect("Failed to create data directory");
    write_csv("data/companies.csv", &companies);
    write_parquet("data/companies.parquet", &companies);

    println!(
        "Wrote {} companies to data/companies.csv and data/companies.parquet",
        companies.len()
    );
}
