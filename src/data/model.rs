// ---------------------------------------------------------------------------
// CompanyRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single company (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyRecord {
    /// Company name (identifier).
    pub name: String,
    /// Industry category.
    pub industry: String,
    /// Average employee rating, expected range ~1.0–5.0.
    pub ratings: f64,
    /// Total review count.
    pub reviews: u64,
    /// Count of additional locations/offices.
    pub more_locations: u64,
    /// Open job count.
    pub jobs: u64,
    /// Headquarters location.
    pub hq: String,
}

/// Column names every loader must find in its input, in schema order.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "name",
    "industry",
    "ratings",
    "reviews",
    "more_locations",
    "jobs",
    "hq",
];

// ---------------------------------------------------------------------------
// CompanyDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with a pre-computed industry index.
///
/// `industries` keeps distinct industry names in order of first appearance;
/// that order is the tie-break whenever industries are ranked by frequency.
#[derive(Debug, Clone, Default)]
pub struct CompanyDataset {
    /// All companies (rows), in file order.
    pub records: Vec<CompanyRecord>,
    /// Distinct industries, first-appearance order.
    pub industries: Vec<String>,
    /// Occurrence count per industry, parallel to `industries`.
    pub industry_counts: Vec<usize>,
}

impl CompanyDataset {
    /// Build the industry index from the loaded rows.
    pub fn from_records(records: Vec<CompanyRecord>) -> Self {
        let mut industries: Vec<String> = Vec::new();
        let mut industry_counts: Vec<usize> = Vec::new();

        for rec in &records {
            match industries.iter().position(|i| *i == rec.industry) {
                Some(idx) => industry_counts[idx] += 1,
                None => {
                    industries.push(rec.industry.clone());
                    industry_counts.push(1);
                }
            }
        }

        CompanyDataset {
            records,
            industries,
            industry_counts,
        }
    }

    /// Number of companies.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Occurrence count for one industry, 0 if absent.
    pub fn industry_count(&self, industry: &str) -> usize {
        self.industries
            .iter()
            .position(|i| i == industry)
            .map_or(0, |idx| self.industry_counts[idx])
    }
}
