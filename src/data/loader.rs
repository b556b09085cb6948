use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, AsArray, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array,
    StringArray, UInt32Array, UInt64Array,
};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{CompanyDataset, CompanyRecord, REQUIRED_COLUMNS};

/// Relative path of the dataset loaded at startup.
pub const DEFAULT_DATASET_PATH: &str = "data/companies.csv";

/// Load-time failure kinds that callers may want to tell apart.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),
}

// ---------------------------------------------------------------------------
// Memoized default dataset
// ---------------------------------------------------------------------------

static DEFAULT_DATASET: OnceLock<CompanyDataset> = OnceLock::new();

/// Load the default dataset, reading [`DEFAULT_DATASET_PATH`] at most once
/// per process. Later calls return the cached table without touching the
/// filesystem. The render loop is single-threaded, so the first call decides.
pub fn load_default() -> Result<&'static CompanyDataset> {
    if let Some(ds) = DEFAULT_DATASET.get() {
        return Ok(ds);
    }
    let dataset = load_file(Path::new(DEFAULT_DATASET_PATH))?;
    Ok(DEFAULT_DATASET.get_or_init(|| dataset))
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a company dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the seven schema columns (primary format)
/// * `.json`    – `[{ "name": ..., "industry": ..., ... }, ...]`
/// * `.parquet` – scalar columns matching the schema
pub fn load_file(path: &Path) -> Result<CompanyDataset> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()).into());
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(LoadError::UnsupportedFormat(other.to_string()).into()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names; one company per row. Integer
/// columns tolerate a float rendering (`"2000.0"`) since cleaned exports
/// often write counts that way.
fn load_csv(path: &Path) -> Result<CompanyDataset> {
    let reader = csv::Reader::from_path(path).context("opening CSV")?;
    read_csv(reader)
}

fn read_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<CompanyDataset> {
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut col_idx = [0usize; REQUIRED_COLUMNS.len()];
    for (slot, col) in col_idx.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h == col)
            .with_context(|| format!("CSV missing '{col}' column"))?;
    }
    let [name_i, industry_i, ratings_i, reviews_i, locations_i, jobs_i, hq_i] = col_idx;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let field = |idx: usize| record.get(idx).unwrap_or("").trim();

        records.push(CompanyRecord {
            name: field(name_i).to_string(),
            industry: field(industry_i).to_string(),
            ratings: parse_rating(field(ratings_i))
                .with_context(|| format!("CSV row {row_no}: 'ratings'"))?,
            reviews: parse_count(field(reviews_i))
                .with_context(|| format!("CSV row {row_no}: 'reviews'"))?,
            more_locations: parse_count(field(locations_i))
                .with_context(|| format!("CSV row {row_no}: 'more_locations'"))?,
            jobs: parse_count(field(jobs_i))
                .with_context(|| format!("CSV row {row_no}: 'jobs'"))?,
            hq: field(hq_i).to_string(),
        });
    }

    Ok(CompanyDataset::from_records(records))
}

fn parse_rating(s: &str) -> Result<f64> {
    s.parse::<f64>()
        .with_context(|| format!("'{s}' is not a number"))
}

/// Parse a non-negative count, accepting both `"2000"` and `"2000.0"`.
fn parse_count(s: &str) -> Result<u64> {
    if let Ok(n) = s.parse::<u64>() {
        return Ok(n);
    }
    let f = s
        .parse::<f64>()
        .with_context(|| format!("'{s}' is not a count"))?;
    if f < 0.0 {
        bail!("'{s}' is negative");
    }
    Ok(f.round() as u64)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "name": "Acme",
///     "industry": "IT Services",
///     "ratings": 4.1,
///     "reviews": 820,
///     "more_locations": 12,
///     "jobs": 44,
///     "hq": "Bangalore"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<CompanyDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json_records(&text)
}

fn parse_json_records(text: &str) -> Result<CompanyDataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;

    let rows = root.as_array().context("Expected top-level JSON array")?;

    let mut records = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let obj: &serde_json::Map<String, JsonValue> = row
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        records.push(CompanyRecord {
            name: json_string(obj, "name", i)?,
            industry: json_string(obj, "industry", i)?,
            ratings: json_f64(obj, "ratings", i)?,
            reviews: json_count(obj, "reviews", i)?,
            more_locations: json_count(obj, "more_locations", i)?,
            jobs: json_count(obj, "jobs", i)?,
            hq: json_string(obj, "hq", i)?,
        });
    }

    Ok(CompanyDataset::from_records(records))
}

fn json_field<'a>(
    obj: &'a serde_json::Map<String, JsonValue>,
    key: &str,
    row: usize,
) -> Result<&'a JsonValue> {
    obj.get(key)
        .with_context(|| format!("Row {row}: missing '{key}'"))
}

fn json_string(obj: &serde_json::Map<String, JsonValue>, key: &str, row: usize) -> Result<String> {
    let val = json_field(obj, key, row)?;
    val.as_str()
        .map(str::to_string)
        .with_context(|| format!("Row {row}, '{key}': not a string"))
}

fn json_f64(obj: &serde_json::Map<String, JsonValue>, key: &str, row: usize) -> Result<f64> {
    let val = json_field(obj, key, row)?;
    val.as_f64()
        .with_context(|| format!("Row {row}, '{key}': not a number"))
}

fn json_count(obj: &serde_json::Map<String, JsonValue>, key: &str, row: usize) -> Result<u64> {
    let f = json_f64(obj, key, row)?;
    if f < 0.0 {
        bail!("Row {row}, '{key}': negative count");
    }
    Ok(f.round() as u64)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file containing company data.
///
/// Expected schema: the seven scalar columns of [`REQUIRED_COLUMNS`] with
/// string, integer, or float types. Works with files written by both
/// **Pandas** (`df.to_parquet()`) and **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<CompanyDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let mut columns: BTreeMap<&str, &Arc<dyn Array>> = BTreeMap::new();
        for col in REQUIRED_COLUMNS {
            let idx = schema
                .index_of(col)
                .map_err(|_| anyhow::anyhow!("Parquet file missing '{col}' column"))?;
            columns.insert(col, batch.column(idx));
        }

        for row in 0..batch.num_rows() {
            records.push(CompanyRecord {
                name: scalar_string(columns["name"], row)
                    .with_context(|| format!("Row {row}: 'name'"))?,
                industry: scalar_string(columns["industry"], row)
                    .with_context(|| format!("Row {row}: 'industry'"))?,
                ratings: scalar_f64(columns["ratings"], row)
                    .with_context(|| format!("Row {row}: 'ratings'"))?,
                reviews: scalar_count(columns["reviews"], row)
                    .with_context(|| format!("Row {row}: 'reviews'"))?,
                more_locations: scalar_count(columns["more_locations"], row)
                    .with_context(|| format!("Row {row}: 'more_locations'"))?,
                jobs: scalar_count(columns["jobs"], row)
                    .with_context(|| format!("Row {row}: 'jobs'"))?,
                hq: scalar_string(columns["hq"], row)
                    .with_context(|| format!("Row {row}: 'hq'"))?,
            });
        }
    }

    Ok(CompanyDataset::from_records(records))
}

// -- Parquet / Arrow helpers --

/// Extract a string from a Utf8 or LargeUtf8 column at a given row.
fn scalar_string(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value");
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok(arr.value(row).to_string())
        }
        DataType::LargeUtf8 => {
            let arr = col.as_string::<i64>();
            Ok(arr.value(row).to_string())
        }
        DataType::Boolean => {
            let arr = col
                .as_any()
                .downcast_ref::<BooleanArray>()
                .context("expected BooleanArray")?;
            Ok(arr.value(row).to_string())
        }
        other => bail!("expected string column, got {other:?}"),
    }
}

/// Extract an `f64` from any numeric column at a given row.
fn scalar_f64(col: &Arc<dyn Array>, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value");
    }
    macro_rules! take {
        ($arr:ty) => {
            col.as_any()
                .downcast_ref::<$arr>()
                .map(|a| a.value(row) as f64)
        };
    }
    let value = match col.data_type() {
        DataType::Float64 => take!(Float64Array),
        DataType::Float32 => take!(Float32Array),
        DataType::Int64 => take!(Int64Array),
        DataType::Int32 => take!(Int32Array),
        DataType::UInt64 => take!(UInt64Array),
        DataType::UInt32 => take!(UInt32Array),
        other => bail!("expected numeric column, got {other:?}"),
    };
    value.context("column type mismatch")
}

/// Extract a non-negative count from a numeric column at a given row.
fn scalar_count(col: &Arc<dyn Array>, row: usize) -> Result<u64> {
    let f = scalar_f64(col, row)?;
    if f < 0.0 {
        bail!("negative count {f}");
    }
    Ok(f.round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
name,industry,ratings,reviews,more_locations,jobs,hq
Acme Systems,IT Services,4.1,820,12,44,Bangalore
Nimbus Retail,Retail,3.8,2000.0,150,12,Mumbai
Quanta Labs,IT Services,4.6,90,2,8,Pune
";

    #[test]
    fn csv_parses_all_columns() {
        let reader = csv::Reader::from_reader(SAMPLE_CSV.as_bytes());
        let ds = read_csv(reader).unwrap();
        assert_eq!(ds.len(), 3);

        let first = &ds.records[0];
        assert_eq!(first.name, "Acme Systems");
        assert_eq!(first.industry, "IT Services");
        assert_eq!(first.ratings, 4.1);
        assert_eq!(first.reviews, 820);
        assert_eq!(first.more_locations, 12);
        assert_eq!(first.jobs, 44);
        assert_eq!(first.hq, "Bangalore");

        // Float-formatted count tolerated.
        assert_eq!(ds.records[1].reviews, 2000);
    }

    #[test]
    fn csv_missing_column_fails_with_column_name() {
        let csv = "name,industry,ratings\nAcme,IT,4.0\n";
        let reader = csv::Reader::from_reader(csv.as_bytes());
        let err = read_csv(reader).unwrap_err();
        assert!(err.to_string().contains("reviews"), "got: {err}");
    }

    #[test]
    fn csv_bad_number_reports_row_and_column() {
        let csv = "\
name,industry,ratings,reviews,more_locations,jobs,hq
Acme,IT,high,820,12,44,Bangalore
";
        let reader = csv::Reader::from_reader(csv.as_bytes());
        let err = read_csv(reader).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("row 0") && msg.contains("ratings"), "got: {msg}");
    }

    #[test]
    fn json_records_parse() {
        let text = r#"[
            {"name": "Acme", "industry": "IT", "ratings": 4.2,
             "reviews": 100, "more_locations": 3, "jobs": 7, "hq": "Pune"}
        ]"#;
        let ds = parse_json_records(text).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].reviews, 100);
        assert_eq!(ds.records[0].ratings, 4.2);
    }

    #[test]
    fn json_missing_field_fails() {
        let text = r#"[{"name": "Acme", "industry": "IT"}]"#;
        let err = parse_json_records(text).unwrap_err();
        assert!(format!("{err:#}").contains("ratings"));
    }

    #[test]
    fn default_dataset_is_loaded_once() {
        let first = load_default().unwrap();
        let second = load_default().unwrap();
        // Both calls hand out the same cached allocation.
        assert!(std::ptr::eq(first, second));
        assert!(!first.is_empty());
    }

    #[test]
    fn unknown_extension_is_unsupported() {
        let err = load_file(Path::new("src/data/loader.rs")).unwrap_err();
        assert!(err.downcast_ref::<LoadError>().is_some());
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let err = load_file(Path::new("no/such/file.csv")).unwrap_err();
        match err.downcast_ref::<LoadError>() {
            Some(LoadError::FileNotFound(p)) => assert!(p.ends_with("file.csv")),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }
}
