use std::collections::BTreeSet;

use super::model::{CompanyDataset, CompanyRecord};

// ---------------------------------------------------------------------------
// Executive overview
// ---------------------------------------------------------------------------

/// Number of bins in the ratings histogram.
pub const RATING_BINS: usize = 20;

/// How many industries the overview ranks by presence.
pub const TOP_INDUSTRIES: usize = 8;

/// How many industries the deep-dive selects by default.
pub const DEFAULT_SELECTION: usize = 5;

/// Headline figures for the Executive Overview view.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewStats {
    pub total_companies: usize,
    pub mean_rating: f64,
    pub total_reviews: u64,
    /// Mean of `more_locations`, truncated to an integer.
    pub mean_locations: u64,
}

impl OverviewStats {
    /// `"10,234"` – company count with thousands separators.
    pub fn total_display(&self) -> String {
        group_thousands(self.total_companies)
    }

    /// `"4.27 ★"` – mean rating rounded to 2 decimals.
    pub fn rating_display(&self) -> String {
        format!("{:.2} ★", self.mean_rating)
    }

    /// `"1.3M"` – review total in millions, 1 decimal.
    pub fn reviews_display(&self) -> String {
        format!("{:.1}M", self.total_reviews as f64 / 1e6)
    }

    /// `"12 Locations"` – truncated mean reach.
    pub fn reach_display(&self) -> String {
        format!("{} Locations", self.mean_locations)
    }
}

/// Group digits in threes: `1234567` → `"1,234,567"`.
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Compute the overview KPIs. An empty table yields all-zero stats.
pub fn overview_stats(dataset: &CompanyDataset) -> OverviewStats {
    let n = dataset.len();
    if n == 0 {
        return OverviewStats {
            total_companies: 0,
            mean_rating: 0.0,
            total_reviews: 0,
            mean_locations: 0,
        };
    }

    let rating_sum: f64 = dataset.records.iter().map(|r| r.ratings).sum();
    let total_reviews: u64 = dataset.records.iter().map(|r| r.reviews).sum();
    let location_sum: u64 = dataset.records.iter().map(|r| r.more_locations).sum();

    OverviewStats {
        total_companies: n,
        mean_rating: rating_sum / n as f64,
        total_reviews,
        // Truncated, not rounded.
        mean_locations: (location_sum as f64 / n as f64) as u64,
    }
}

/// Fixed-width histogram of the `ratings` column over the observed range.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingsHistogram {
    /// Lower edge of the first bin.
    pub min: f64,
    pub bin_width: f64,
    pub counts: Vec<usize>,
}

impl RatingsHistogram {
    /// Mid-point of bin `i`, where bars are drawn.
    pub fn bin_center(&self, i: usize) -> f64 {
        self.min + (i as f64 + 0.5) * self.bin_width
    }
}

/// Bin the ratings into [`RATING_BINS`] fixed-width bins spanning the
/// observed range. Empty table → no bins. A degenerate range (all ratings
/// equal) collapses to a single unit-width bin holding every row.
pub fn ratings_histogram(dataset: &CompanyDataset) -> RatingsHistogram {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for rec in &dataset.records {
        min = min.min(rec.ratings);
        max = max.max(rec.ratings);
    }

    if dataset.is_empty() {
        return RatingsHistogram {
            min: 0.0,
            bin_width: 1.0,
            counts: Vec::new(),
        };
    }

    let span = max - min;
    if span <= 0.0 {
        return RatingsHistogram {
            min: min - 0.5,
            bin_width: 1.0,
            counts: vec![dataset.len()],
        };
    }

    let bin_width = span / RATING_BINS as f64;
    let mut counts = vec![0usize; RATING_BINS];
    for rec in &dataset.records {
        let bin = ((rec.ratings - min) / bin_width) as usize;
        // The maximum rating lands exactly on the upper edge.
        counts[bin.min(RATING_BINS - 1)] += 1;
    }

    RatingsHistogram {
        min,
        bin_width,
        counts,
    }
}

/// The `n` most frequent industries with their counts, descending by count.
/// Ties break by first appearance in the dataset.
pub fn top_industries(dataset: &CompanyDataset, n: usize) -> Vec<(String, usize)> {
    let mut ranked: Vec<(String, usize)> = dataset
        .industries
        .iter()
        .cloned()
        .zip(dataset.industry_counts.iter().copied())
        .collect();
    // Stable sort keeps first-appearance order within equal counts.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}

// ---------------------------------------------------------------------------
// Industry deep-dive
// ---------------------------------------------------------------------------

/// Default deep-dive selection: the [`DEFAULT_SELECTION`] most frequent
/// industries.
pub fn default_industry_selection(dataset: &CompanyDataset) -> BTreeSet<String> {
    top_industries(dataset, DEFAULT_SELECTION)
        .into_iter()
        .map(|(industry, _)| industry)
        .collect()
}

/// Indices of rows whose industry is in the selection, in row order.
/// An empty selection matches nothing.
pub fn filter_by_industries(
    dataset: &CompanyDataset,
    selection: &BTreeSet<String>,
) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| selection.contains(&rec.industry))
        .map(|(i, _)| i)
        .collect()
}

/// Mean open-job count per selected industry, in dataset first-appearance
/// order. Industries with no surviving rows are omitted, not zero-filled.
pub fn mean_jobs_by_industry(
    dataset: &CompanyDataset,
    selection: &BTreeSet<String>,
) -> Vec<(String, f64)> {
    let mut result = Vec::new();

    for industry in &dataset.industries {
        if !selection.contains(industry) {
            continue;
        }
        let mut sum = 0u64;
        let mut count = 0usize;
        for rec in &dataset.records {
            if rec.industry == *industry {
                sum += rec.jobs;
                count += 1;
            }
        }
        if count > 0 {
            result.push((industry.clone(), sum as f64 / count as f64));
        }
    }

    result
}

/// Percentage share of each per-industry mean against their total. `None`
/// when every mean is zero, so callers can render an empty state instead of
/// NaN shares.
pub fn job_shares(jobs: &[(String, f64)]) -> Option<Vec<f64>> {
    let total: f64 = jobs.iter().map(|(_, mean)| mean).sum();
    if total <= 0.0 {
        return None;
    }
    Some(jobs.iter().map(|(_, mean)| 100.0 * mean / total).collect())
}

// ---------------------------------------------------------------------------
// Hidden gems
// ---------------------------------------------------------------------------

/// Rating floor for a hidden gem.
pub const GEM_MIN_RATING: f64 = 4.2;
/// Review-count band for a hidden gem (exclusive on both ends).
pub const GEM_MIN_REVIEWS: u64 = 50;
pub const GEM_MAX_REVIEWS: u64 = 1000;

/// Whether a company is a hidden gem: highly rated but not yet mainstream.
pub fn is_hidden_gem(rec: &CompanyRecord) -> bool {
    rec.ratings >= GEM_MIN_RATING
        && rec.reviews < GEM_MAX_REVIEWS
        && rec.reviews > GEM_MIN_REVIEWS
}

/// Indices of hidden gems, sorted by rating descending. Equal ratings keep
/// their original row order (stable sort).
pub fn hidden_gems(dataset: &CompanyDataset) -> Vec<usize> {
    let mut gems: Vec<usize> = dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| is_hidden_gem(rec))
        .map(|(i, _)| i)
        .collect();

    gems.sort_by(|&a, &b| {
        dataset.records[b]
            .ratings
            .total_cmp(&dataset.records[a].ratings)
    });
    gems
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CompanyRecord;

    fn company(
        name: &str,
        industry: &str,
        ratings: f64,
        reviews: u64,
        more_locations: u64,
        jobs: u64,
    ) -> CompanyRecord {
        CompanyRecord {
            name: name.to_string(),
            industry: industry.to_string(),
            ratings,
            reviews,
            more_locations,
            jobs,
            hq: "Delhi".to_string(),
        }
    }

    fn sample() -> CompanyDataset {
        CompanyDataset::from_records(vec![
            company("a", "IT", 4.5, 200, 3, 10),
            company("b", "IT", 4.0, 2000, 40, 30),
            company("c", "Retail", 4.3, 80, 7, 5),
            company("d", "Banking", 3.1, 5000, 120, 2),
        ])
    }

    #[test]
    fn overview_mean_rating_rounds_to_two_decimals() {
        let stats = overview_stats(&sample());
        // (4.5 + 4.0 + 4.3 + 3.1) / 4 = 3.975
        assert!((stats.mean_rating - 3.975).abs() < 1e-9);
        assert_eq!(stats.total_companies, 4);

        let ds = CompanyDataset::from_records(vec![
            company("a", "IT", 4.5, 10, 1, 0),
            company("b", "IT", 4.0, 10, 1, 0),
            company("c", "IT", 4.3, 10, 1, 0),
        ]);
        // 12.8 / 3 = 4.2666… → rounds up at the second decimal
        assert_eq!(overview_stats(&ds).rating_display(), "4.27 ★");
    }

    #[test]
    fn overview_reviews_in_millions_single_row() {
        let ds = CompanyDataset::from_records(vec![company("a", "IT", 4.0, 2_600_000, 1, 0)]);
        let stats = overview_stats(&ds);
        assert_eq!(stats.reviews_display(), "2.6M");

        let tiny = overview_stats(&sample());
        assert_eq!(tiny.reviews_display(), "0.0M");
    }

    #[test]
    fn overview_reach_is_truncated_mean() {
        let ds = CompanyDataset::from_records(vec![
            company("a", "IT", 4.0, 10, 1, 0),
            company("b", "IT", 4.0, 10, 1, 0),
            company("c", "IT", 4.0, 10, 1, 0),
        ]);
        assert_eq!(overview_stats(&ds).mean_locations, 1);

        // 3 + 3 + 4 = 10, mean 3.33 → truncates to 3
        let ds = CompanyDataset::from_records(vec![
            company("a", "IT", 4.0, 10, 3, 0),
            company("b", "IT", 4.0, 10, 3, 0),
            company("c", "IT", 4.0, 10, 4, 0),
        ]);
        assert_eq!(overview_stats(&ds).mean_locations, 3);
        assert_eq!(overview_stats(&ds).reach_display(), "3 Locations");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn overview_empty_table_is_all_zero() {
        let stats = overview_stats(&CompanyDataset::default());
        assert_eq!(stats.total_companies, 0);
        assert_eq!(stats.rating_display(), "0.00 ★");
    }

    #[test]
    fn histogram_counts_sum_to_row_count() {
        let hist = ratings_histogram(&sample());
        assert_eq!(hist.counts.len(), RATING_BINS);
        assert_eq!(hist.counts.iter().sum::<usize>(), 4);
        // Max rating (4.5) lands in the last bin, min (3.1) in the first.
        assert_eq!(hist.counts[0], 1);
        assert_eq!(hist.counts[RATING_BINS - 1], 1);
    }

    #[test]
    fn histogram_degenerate_and_empty_inputs() {
        let flat = CompanyDataset::from_records(vec![
            company("a", "IT", 4.0, 10, 1, 0),
            company("b", "IT", 4.0, 10, 1, 0),
        ]);
        let hist = ratings_histogram(&flat);
        assert_eq!(hist.counts, vec![2]);

        let empty = ratings_histogram(&CompanyDataset::default());
        assert!(empty.counts.is_empty());
    }

    #[test]
    fn top_industries_sorted_descending_with_stable_ties() {
        let ds = CompanyDataset::from_records(vec![
            company("a", "Retail", 4.0, 10, 1, 0),
            company("b", "IT", 4.0, 10, 1, 0),
            company("c", "IT", 4.0, 10, 1, 0),
            company("d", "Banking", 4.0, 10, 1, 0),
            company("e", "FMCG", 4.0, 10, 1, 0),
            company("f", "FMCG", 4.0, 10, 1, 0),
        ]);
        let top = top_industries(&ds, TOP_INDUSTRIES);
        // min(8, distinct) entries
        assert_eq!(top.len(), 4);
        // IT and FMCG tie at 2; IT appeared first.
        assert_eq!(top[0], ("IT".to_string(), 2));
        assert_eq!(top[1], ("FMCG".to_string(), 2));
        // Retail and Banking tie at 1; Retail appeared first.
        assert_eq!(top[2], ("Retail".to_string(), 1));
        assert_eq!(top[3], ("Banking".to_string(), 1));

        let total: usize = top.iter().map(|(_, c)| c).sum();
        assert!(total <= ds.len());
    }

    #[test]
    fn default_selection_takes_five_most_frequent() {
        let mut records = Vec::new();
        for (industry, n) in [("A", 6), ("B", 5), ("C", 4), ("D", 3), ("E", 2), ("F", 1)] {
            for i in 0..n {
                records.push(company(&format!("{industry}{i}"), industry, 4.0, 10, 1, 0));
            }
        }
        let ds = CompanyDataset::from_records(records);
        let selection = default_industry_selection(&ds);
        assert_eq!(selection.len(), 5);
        assert!(!selection.contains("F"));
    }

    #[test]
    fn empty_selection_filters_everything() {
        let ds = sample();
        let selection = BTreeSet::new();
        assert!(filter_by_industries(&ds, &selection).is_empty());
        assert!(mean_jobs_by_industry(&ds, &selection).is_empty());
    }

    #[test]
    fn jobs_aggregate_omits_industries_without_rows() {
        let ds = CompanyDataset::from_records(vec![
            company("a", "IT", 4.0, 10, 1, 10),
            company("b", "IT", 4.0, 10, 1, 30),
        ]);
        let selection: BTreeSet<String> =
            ["IT".to_string(), "Retail".to_string()].into_iter().collect();
        let jobs = mean_jobs_by_industry(&ds, &selection);
        assert_eq!(jobs, vec![("IT".to_string(), 20.0)]);
    }

    #[test]
    fn jobs_aggregate_means_per_selected_industry() {
        let ds = sample();
        let selection: BTreeSet<String> =
            ["IT".to_string(), "Banking".to_string()].into_iter().collect();
        let jobs = mean_jobs_by_industry(&ds, &selection);
        assert_eq!(
            jobs,
            vec![("IT".to_string(), 20.0), ("Banking".to_string(), 2.0)]
        );
    }

    #[test]
    fn job_shares_sum_to_one_hundred() {
        let jobs = vec![("IT".to_string(), 30.0), ("Retail".to_string(), 10.0)];
        let shares = job_shares(&jobs).unwrap();
        assert_eq!(shares, vec![75.0, 25.0]);
        assert!((shares.iter().sum::<f64>() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn job_shares_all_zero_means_yield_none() {
        let jobs = vec![("IT".to_string(), 0.0), ("Retail".to_string(), 0.0)];
        assert!(job_shares(&jobs).is_none());
        assert!(job_shares(&[]).is_none());
    }

    #[test]
    fn hidden_gems_scenario_from_mixed_table() {
        let ds = CompanyDataset::from_records(vec![
            company("row1", "IT", 4.5, 200, 1, 0),
            company("row2", "IT", 4.0, 2000, 1, 0),
            company("row3", "Retail", 4.3, 80, 1, 0),
        ]);
        let gems = hidden_gems(&ds);
        // row2 excluded: reviews >= 1000 (and rating below the floor).
        assert_eq!(gems, vec![0, 2]);
        assert_eq!(ds.records[gems[0]].name, "row1");
        assert_eq!(ds.records[gems[1]].name, "row3");
    }

    #[test]
    fn hidden_gems_bounds_hold_for_every_row() {
        let ds = CompanyDataset::from_records(vec![
            company("in-band", "IT", 4.2, 51, 1, 0),
            company("too-few-reviews", "IT", 4.9, 50, 1, 0),
            company("too-many-reviews", "IT", 4.9, 1000, 1, 0),
            company("low-rating", "IT", 4.19, 500, 1, 0),
        ]);
        let gems = hidden_gems(&ds);
        for &i in &gems {
            let rec = &ds.records[i];
            assert!(rec.ratings >= GEM_MIN_RATING);
            assert!(rec.reviews > GEM_MIN_REVIEWS && rec.reviews < GEM_MAX_REVIEWS);
        }
        for (i, rec) in ds.records.iter().enumerate() {
            if !gems.contains(&i) {
                assert!(!is_hidden_gem(rec), "{} wrongly excluded", rec.name);
            }
        }
        assert_eq!(gems, vec![0]);
    }

    #[test]
    fn hidden_gems_sorted_descending_stable() {
        let ds = CompanyDataset::from_records(vec![
            company("a", "IT", 4.3, 100, 1, 0),
            company("b", "IT", 4.8, 100, 1, 0),
            company("c", "IT", 4.3, 100, 1, 0),
        ]);
        let gems = hidden_gems(&ds);
        assert_eq!(gems, vec![1, 0, 2]);
        for pair in gems.windows(2) {
            assert!(ds.records[pair[0]].ratings >= ds.records[pair[1]].ratings);
        }
    }

    #[test]
    fn hidden_gems_filter_is_idempotent() {
        let ds = sample();
        let gems = hidden_gems(&ds);
        let subset =
            CompanyDataset::from_records(gems.iter().map(|&i| ds.records[i].clone()).collect());
        let again = hidden_gems(&subset);
        assert_eq!(again.len(), gems.len());
        for (j, &i) in gems.iter().enumerate() {
            assert_eq!(subset.records[again[j]], ds.records[i]);
        }
    }
}
