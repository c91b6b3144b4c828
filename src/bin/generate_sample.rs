use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// One sample row: (company, location, work mode, role, primary skill,
/// rating, package). Ratings and packages are kept as text on purpose; a few
/// cells are deliberately messy to exercise the cleaning rules.
const ROWS: [(&str, &str, &str, &str, &str, &str, &str); 24] = [
    ("Quantellia Labs", "Gurgaon", "Hybrid", "Data Scientist", "ML", "4.6", "22 LPA"),
    ("Nimbus Analytics", "Noida", "Remote", "Data Scientist", "machine learning", "4.2", "₹18.5 LPA"),
    ("DataNest", "Delhi", "Onsite", "Data Analyst", "SQL", "3.9", "8 LPA"),
    ("Graphyne AI", "Gurgaon", "Hybrid", "ML Engineer", "Deep Learning", "4.5", "24 LPA"),
    ("Veridian Tech", "Noida", "Hybrid", "Data Scientist", " ml ", "4.1", "15 LPA"),
    ("Cobalt Systems", "Delhi", "Remote", "Data Analyst", "Python", "3.6", "7.5 LPA"),
    ("Aster Insights", "Gurgaon", "Onsite", "Data Scientist", "NLP", "4.8", "28 LPA"),
    ("Helios Data", "Faridabad", "Hybrid", "Data Analyst", "SQL", "3.4", "6 LPA"),
    ("Parallax Metrics", "Noida", "Remote", "ML Engineer", "Ml", "4.3", "19 LPA"),
    ("Brightwave", "Gurgaon", "Hybrid", "Data Scientist", "Machine Learning", "4.4", "20 LPA"),
    ("Orchid Analytics", "Delhi", "Hybrid", "Data Scientist", "Python", "4.0", "12.5 LPA"),
    ("Kestrel AI", "Gurgaon", "Remote", "ML Engineer", "Deep Learning", "4.7", "26 LPA"),
    ("Summit Data Co", "Noida", "Onsite", "Data Analyst", "Excel", "3.2", "5.5 LPA"),
    ("Lumen Insights", "Delhi", "Remote", "Data Scientist", "ML", "n/a", "14 LPA"),
    ("Cirrus Labs", "Gurgaon", "Hybrid", "Data Scientist", "NLP", "4.2", "8-10 LPA"),
    ("Northstar Analytics", "Noida", "Hybrid", "Data Scientist", "ml", "4.9", "30 LPA"),
    ("Vertex Computing", "Faridabad", "Onsite", "ML Engineer", "Python", "3.8", "11 LPA"),
    ("Ember Data", "Delhi", "Hybrid", "Data Analyst", "SQL", "3.7", "Not disclosed"),
    ("Atlas Metrics", "Gurgaon", "Remote", "Data Scientist", "machine learning", "4.3", "21 LPA"),
    ("Sable Systems", "Noida", "Hybrid", "Data Analyst", "Python", "4.0", "9 LPA"),
    ("Halcyon AI", "Gurgaon", "Hybrid", "ML Engineer", "ML", "4.5", "25 LPA"),
    ("Juniper Insights", "Delhi", "Onsite", "Data Scientist", "NLP", "4.1", "16 LPA"),
    ("Corvid Analytics", "Noida", "Remote", "Data Scientist", "Deep Learning", "", "17 LPA"),
    ("Meridian Data", "Faridabad", "Hybrid", "Data Analyst", "Excel", "3.5", "₹6.5 LPA"),
];

/// Header labels as they would come out of the source spreadsheet; one
/// carries stray whitespace that the loader is expected to trim away.
const HEADERS: [&str; 7] = [
    "COMPANY NAME",
    "LOCATION",
    "WORK MODE",
    "ROLE",
    " PRIMARY SKILL ",
    "RATING",
    "PACKAGE(LPA)",
];

fn write_csv(path: &str) {
    let mut writer = csv::Writer::from_path(path).expect("Failed to create CSV file");
    writer.write_record(HEADERS).expect("Failed to write CSV header");
    for (name, loc, mode, role, skill, rating, package) in ROWS {
        writer
            .write_record([name, loc, mode, role, skill, rating, package])
            .expect("Failed to write CSV row");
    }
    writer.flush().expect("Failed to flush CSV");
}

/// Build one Utf8 column by projecting a field out of every sample row.
fn column(pick: fn(&(&str, &str, &str, &str, &str, &str, &str)) -> &str) -> ArrayRef {
    Arc::new(StringArray::from(
        ROWS.iter().map(pick).collect::<Vec<_>>(),
    ))
}

fn write_parquet(path: &str) {
    let schema = Arc::new(Schema::new(
        HEADERS
            .iter()
            .map(|h| Field::new(*h, DataType::Utf8, false))
            .collect::<Vec<_>>(),
    ));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            column(|r| r.0),
            column(|r| r.1),
            column(|r| r.2),
            column(|r| r.3),
            column(|r| r.4),
            column(|r| r.5),
            column(|r| r.6),
        ],
    )
    .expect("Failed to create RecordBatch");

    let file = std::fs::File::create(path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");
}

fn main() {
    write_csv("ds_company_preferences.csv");
    write_parquet("ds_company_preferences.parquet");
    println!(
        "Wrote {} companies to ds_company_preferences.csv / .parquet",
        ROWS.len()
    );
}
