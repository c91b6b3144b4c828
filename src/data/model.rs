use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// RatingCategory – ordinal bucket derived from the company rating
// ---------------------------------------------------------------------------

/// Display bucket for a company rating, derived once at load time.
///
/// Bins are half-open on the left: (0, 3.9], (3.9, 4.4], (4.4, 5.0].
/// Ratings outside (0, 5.0] fall into no bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RatingCategory {
    Below40,
    Mid40To44,
    Top45AndAbove,
}

impl RatingCategory {
    /// All buckets in ascending rating order.
    pub const ALL: [RatingCategory; 3] = [
        RatingCategory::Below40,
        RatingCategory::Mid40To44,
        RatingCategory::Top45AndAbove,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RatingCategory::Below40 => "Below 4.0",
            RatingCategory::Mid40To44 => "4.0 - 4.4",
            RatingCategory::Top45AndAbove => "4.5 and above",
        }
    }

    /// Bucket a rating. Exact boundary values belong to the lower bucket:
    /// 3.9 → `Below40`, 4.4 → `Mid40To44`, 5.0 → `Top45AndAbove`.
    pub fn from_rating(rating: f64) -> Option<RatingCategory> {
        if !(rating > 0.0 && rating <= 5.0) {
            return None;
        }
        if rating <= 3.9 {
            Some(RatingCategory::Below40)
        } else if rating <= 4.4 {
            Some(RatingCategory::Mid40To44)
        } else {
            Some(RatingCategory::Top45AndAbove)
        }
    }
}

impl fmt::Display for RatingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Dimension – the three filterable categorical axes
// ---------------------------------------------------------------------------

/// A filterable categorical column of the company table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    Location,
    WorkMode,
    Role,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Location, Dimension::WorkMode, Dimension::Role];

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Location => "Location",
            Dimension::WorkMode => "Work Mode",
            Dimension::Role => "Role",
        }
    }
}

// ---------------------------------------------------------------------------
// Domain derivations
// ---------------------------------------------------------------------------

/// Synonym fold table applied after lowercasing and trimming. The identity
/// entry documents that the canonical label maps to itself; any value not in
/// the table passes through unchanged.
const SKILL_SYNONYMS: [(&str, &str); 2] = [
    ("ml", "machine learning"),
    ("machine learning", "machine learning"),
];

/// Normalize a raw primary-skill cell: lowercase, trim, fold synonyms.
/// Idempotent: normalizing an already-normalized value is a no-op.
pub fn normalize_skill(raw: &str) -> String {
    let folded = raw.trim().to_lowercase();
    for (from, to) in SKILL_SYNONYMS {
        if folded == from {
            return to.to_string();
        }
    }
    folded
}

/// Per-cell rating coercion: text → f64, unparseable → missing.
pub fn parse_rating(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

/// Extract the first numeric token of a free-text cell: a contiguous run of
/// digits, optionally followed by a decimal point and more digits. The scan is
/// left-to-right and stops at the first match; no unit conversion.
///
/// "₹12.5 LPA" → 12.5, "8-10 LPA" → 8.0, "Not disclosed" → None.
pub fn leading_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let start = bytes.iter().position(|b| b.is_ascii_digit())?;
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    // A decimal point only counts when digits follow it.
    if end + 1 < bytes.len() && bytes[end] == b'.' && bytes[end + 1].is_ascii_digit() {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    text[start..end].parse::<f64>().ok()
}

// ---------------------------------------------------------------------------
// CompanyRecord – one row of the company table
// ---------------------------------------------------------------------------

/// A single company record (one row of the source spreadsheet) with its two
/// derived columns computed at construction and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CompanyRecord {
    pub company_name: String,
    pub location: String,
    pub work_mode: String,
    pub role: String,
    /// Normalized skill label (see [`normalize_skill`]).
    pub primary_skill: String,
    pub rating: Option<f64>,
    pub rating_category: Option<RatingCategory>,
    /// Original compensation text, kept for display.
    pub package_text: String,
    /// Leading numeric token of `package_text` (see [`leading_number`]).
    pub package_value: Option<f64>,
}

impl CompanyRecord {
    /// Build a record from raw cells, applying the normalization and
    /// derivation rules.
    pub fn from_cells(
        company_name: String,
        location: String,
        work_mode: String,
        role: String,
        raw_skill: &str,
        rating: Option<f64>,
        package_text: String,
    ) -> Self {
        let rating_category = rating.and_then(RatingCategory::from_rating);
        let package_value = leading_number(&package_text);
        CompanyRecord {
            company_name,
            location,
            work_mode,
            role,
            primary_skill: normalize_skill(raw_skill),
            rating,
            rating_category,
            package_text,
            package_value,
        }
    }

    /// Value of a filterable dimension for this record.
    pub fn dimension_value(&self, dim: Dimension) -> &str {
        match dim {
            Dimension::Location => &self.location,
            Dimension::WorkMode => &self.work_mode,
            Dimension::Role => &self.role,
        }
    }
}

// ---------------------------------------------------------------------------
// CompanyDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full cleaned table with pre-computed distinct-value indices. Read-only
/// after load.
#[derive(Debug, Clone, Default)]
pub struct CompanyDataset {
    /// All records (rows) in file order.
    pub records: Vec<CompanyRecord>,
    /// Sorted distinct values per filterable dimension.
    pub locations: BTreeSet<String>,
    pub work_modes: BTreeSet<String>,
    pub roles: BTreeSet<String>,
    /// Sorted distinct normalized skills (for stable chart colors).
    pub skills: BTreeSet<String>,
}

impl CompanyDataset {
    /// Build the distinct-value indices from the loaded records.
    pub fn from_records(records: Vec<CompanyRecord>) -> Self {
        let mut dataset = CompanyDataset {
            records,
            ..CompanyDataset::default()
        };
        for rec in &dataset.records {
            dataset.locations.insert(rec.location.clone());
            dataset.work_modes.insert(rec.work_mode.clone());
            dataset.roles.insert(rec.role.clone());
            dataset.skills.insert(rec.primary_skill.clone());
        }
        dataset
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted distinct values observed for a dimension.
    pub fn distinct_values(&self, dim: Dimension) -> &BTreeSet<String> {
        match dim {
            Dimension::Location => &self.locations,
            Dimension::WorkMode => &self.work_modes,
            Dimension::Role => &self.roles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_buckets_follow_fixed_bins() {
        assert_eq!(RatingCategory::from_rating(3.9), Some(RatingCategory::Below40));
        assert_eq!(RatingCategory::from_rating(4.0), Some(RatingCategory::Mid40To44));
        assert_eq!(RatingCategory::from_rating(4.4), Some(RatingCategory::Mid40To44));
        assert_eq!(RatingCategory::from_rating(4.5), Some(RatingCategory::Top45AndAbove));
        assert_eq!(RatingCategory::from_rating(5.0), Some(RatingCategory::Top45AndAbove));
        assert_eq!(RatingCategory::from_rating(0.1), Some(RatingCategory::Below40));
    }

    #[test]
    fn rating_buckets_reject_out_of_range() {
        assert_eq!(RatingCategory::from_rating(0.0), None);
        assert_eq!(RatingCategory::from_rating(-1.0), None);
        assert_eq!(RatingCategory::from_rating(5.1), None);
        assert_eq!(RatingCategory::from_rating(f64::NAN), None);
    }

    #[test]
    fn skill_normalization_folds_the_ml_synonym() {
        assert_eq!(normalize_skill("ML"), "machine learning");
        assert_eq!(normalize_skill(" ml "), "machine learning");
        assert_eq!(normalize_skill("Ml"), "machine learning");
        assert_eq!(normalize_skill("machine learning"), "machine learning");
    }

    #[test]
    fn skill_normalization_passes_other_values_through() {
        assert_eq!(normalize_skill("  Deep Learning "), "deep learning");
        // "ai" is deliberately not in the fold table.
        assert_eq!(normalize_skill("AI"), "ai");
    }

    #[test]
    fn skill_normalization_is_idempotent() {
        for raw in ["ML", " Python ", "machine learning", "NLP"] {
            let once = normalize_skill(raw);
            assert_eq!(normalize_skill(&once), once);
        }
    }

    #[test]
    fn leading_number_takes_the_first_token_only() {
        assert_eq!(leading_number("₹12.5 LPA"), Some(12.5));
        assert_eq!(leading_number("8-10 LPA"), Some(8.0));
        assert_eq!(leading_number("15 LPA"), Some(15.0));
        assert_eq!(leading_number("Not disclosed"), None);
        assert_eq!(leading_number(""), None);
    }

    #[test]
    fn leading_number_requires_digits_after_the_decimal_point() {
        assert_eq!(leading_number("12. LPA"), Some(12.0));
        assert_eq!(leading_number("7.25-8 LPA"), Some(7.25));
    }

    #[test]
    fn record_derivations_stay_consistent() {
        let rec = CompanyRecord::from_cells(
            "Acme".into(),
            "Gurgaon".into(),
            "Hybrid".into(),
            "DS".into(),
            " ML ",
            Some(4.6),
            "₹15 LPA".into(),
        );
        assert_eq!(rec.primary_skill, "machine learning");
        assert_eq!(rec.rating_category, Some(RatingCategory::Top45AndAbove));
        assert_eq!(rec.package_value, Some(15.0));
        assert_eq!(rec.package_text, "₹15 LPA");
    }

    #[test]
    fn dataset_indexes_distinct_values() {
        let dataset = CompanyDataset::from_records(vec![
            CompanyRecord::from_cells(
                "A".into(), "Noida".into(), "Remote".into(), "DS".into(), "ml", None, "10 LPA".into(),
            ),
            CompanyRecord::from_cells(
                "B".into(), "Gurgaon".into(), "Remote".into(), "MLE".into(), "nlp", None, "12 LPA".into(),
            ),
        ]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.distinct_values(Dimension::Location).len(), 2);
        assert_eq!(dataset.distinct_values(Dimension::WorkMode).len(), 1);
        assert_eq!(dataset.skills.len(), 2);
    }
}
