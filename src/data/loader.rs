use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Array, Float32Array, Float64Array, Int32Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{CompanyDataset, CompanyRecord, parse_rating};

// ---------------------------------------------------------------------------
// Expected columns
// ---------------------------------------------------------------------------

/// Required column labels, matched after trimming header whitespace.
pub const COL_COMPANY: &str = "COMPANY NAME";
pub const COL_LOCATION: &str = "LOCATION";
pub const COL_WORK_MODE: &str = "WORK MODE";
pub const COL_ROLE: &str = "ROLE";
pub const COL_SKILL: &str = "PRIMARY SKILL";
pub const COL_RATING: &str = "RATING";
pub const COL_PACKAGE: &str = "PACKAGE(LPA)";

pub const REQUIRED_COLUMNS: [&str; 7] = [
    COL_COMPANY,
    COL_LOCATION,
    COL_WORK_MODE,
    COL_ROLE,
    COL_SKILL,
    COL_RATING,
    COL_PACKAGE,
];

/// Fatal load failures. Malformed individual cells never raise these; they
/// degrade to missing values instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("missing required column '{0}' (after header trim)")]
    MissingColumn(&'static str),
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the company table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the required column labels (primary format)
/// * `.json`    – `[{ "COMPANY NAME": ..., "RATING": ..., ... }, ...]`
/// * `.parquet` – flat columns named like the CSV headers
pub fn load_file(path: &Path) -> Result<CompanyDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string()).into()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<CompanyDataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let idx = column_indices(&headers)?;

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let cell = |i: usize| record.get(i).unwrap_or("").to_string();

        records.push(CompanyRecord::from_cells(
            cell(idx[0]),
            cell(idx[1]),
            cell(idx[2]),
            cell(idx[3]),
            record.get(idx[4]).unwrap_or(""),
            parse_rating(record.get(idx[5]).unwrap_or("")),
            cell(idx[6]),
        ));
    }

    Ok(CompanyDataset::from_records(records))
}

/// Resolve the positions of [`REQUIRED_COLUMNS`] in a trimmed header row.
fn column_indices(headers: &[String]) -> Result<[usize; 7]> {
    let mut idx = [0usize; 7];
    for (slot, col) in idx.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h == col)
            .ok_or(LoadError::MissingColumn(col))?;
    }
    Ok(idx)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "COMPANY NAME": "Acme Analytics",
///     "LOCATION": "Gurgaon",
///     "WORK MODE": "Hybrid",
///     "ROLE": "Data Scientist",
///     "PRIMARY SKILL": "ML",
///     "RATING": "4.6",
///     "PACKAGE(LPA)": "15 LPA"
///   },
///   ...
/// ]
/// ```
///
/// `RATING` may also be a JSON number. Object keys are trimmed before
/// matching, mirroring the CSV header treatment.
fn load_json(path: &Path) -> Result<CompanyDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let rows = root.as_array().context("Expected top-level JSON array")?;

    // Validate required keys against the first row; an empty array is a
    // valid (empty) table.
    if let Some(first) = rows.first() {
        let obj = first.as_object().context("Row 0 is not a JSON object")?;
        for col in REQUIRED_COLUMNS {
            if !obj.keys().any(|k| k.trim() == col) {
                return Err(LoadError::MissingColumn(col).into());
            }
        }
    }

    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let field = |col: &str| -> String {
            obj.iter()
                .find(|(k, _)| k.trim() == col)
                .map(|(_, v)| json_cell_text(v))
                .unwrap_or_default()
        };

        let rating = obj
            .iter()
            .find(|(k, _)| k.trim() == COL_RATING)
            .and_then(|(_, v)| match v {
                JsonValue::Number(n) => n.as_f64(),
                JsonValue::String(s) => parse_rating(s),
                _ => None,
            });

        records.push(CompanyRecord::from_cells(
            field(COL_COMPANY),
            field(COL_LOCATION),
            field(COL_WORK_MODE),
            field(COL_ROLE),
            &field(COL_SKILL),
            rating,
            field(COL_PACKAGE),
        ));
    }

    Ok(CompanyDataset::from_records(records))
}

fn json_cell_text(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.clone(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet rendition of the company table.
///
/// Column names are trimmed before matching. Text columns are expected to be
/// Utf8; `RATING` may be Utf8, Float or Int (files written by Pandas commonly
/// carry it as either).
fn load_parquet(path: &Path) -> Result<CompanyDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let names: Vec<String> = schema
            .fields()
            .iter()
            .map(|f| f.name().trim().to_string())
            .collect();
        let idx = column_indices(&names)?;

        for row in 0..batch.num_rows() {
            let cell = |i: usize| cell_text(batch.column(i), row);

            let rating = match cell_f64(batch.column(idx[5]), row) {
                Some(v) => Some(v),
                None => parse_rating(&cell(idx[5])),
            };

            records.push(CompanyRecord::from_cells(
                cell(idx[0]),
                cell(idx[1]),
                cell(idx[2]),
                cell(idx[3]),
                &cell(idx[4]),
                rating,
                cell(idx[6]),
            ));
        }
    }

    Ok(CompanyDataset::from_records(records))
}

// -- Arrow helpers --

/// Render a cell as text; nulls and unexpected types become empty strings so
/// the per-cell recovery rules apply downstream.
fn cell_text(col: &Arc<dyn Array>, row: usize) -> String {
    if col.is_null(row) {
        return String::new();
    }
    match col.data_type() {
        DataType::Utf8 => col
            .as_any()
            .downcast_ref::<StringArray>()
            .map(|a| a.value(row).to_string())
            .unwrap_or_default(),
        DataType::Float64 => col
            .as_any()
            .downcast_ref::<Float64Array>()
            .map(|a| a.value(row).to_string())
            .unwrap_or_default(),
        DataType::Float32 => col
            .as_any()
            .downcast_ref::<Float32Array>()
            .map(|a| a.value(row).to_string())
            .unwrap_or_default(),
        DataType::Int64 => col
            .as_any()
            .downcast_ref::<Int64Array>()
            .map(|a| a.value(row).to_string())
            .unwrap_or_default(),
        DataType::Int32 => col
            .as_any()
            .downcast_ref::<Int32Array>()
            .map(|a| a.value(row).to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Read a cell as a number when the column is numeric.
fn cell_f64(col: &Arc<dyn Array>, row: usize) -> Option<f64> {
    if col.is_null(row) {
        return None;
    }
    match col.data_type() {
        DataType::Float64 => col
            .as_any()
            .downcast_ref::<Float64Array>()
            .map(|a| a.value(row)),
        DataType::Float32 => col
            .as_any()
            .downcast_ref::<Float32Array>()
            .map(|a| a.value(row) as f64),
        DataType::Int64 => col
            .as_any()
            .downcast_ref::<Int64Array>()
            .map(|a| a.value(row) as f64),
        DataType::Int32 => col
            .as_any()
            .downcast_ref::<Int32Array>()
            .map(|a| a.value(row) as f64),
        _ => None,
    }
}
