use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::model::{CompanyDataset, RatingCategory};

// ---------------------------------------------------------------------------
// Derived outputs for the dashboard widgets
// ---------------------------------------------------------------------------

/// Mean/max/min over the package values present in the filtered set.
/// Absent entirely when no filtered row carries a package value, so the UI
/// renders its "no data" marker instead of a NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackageStats {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
}

/// One row of the top-10-by-package table, projected for display.
#[derive(Debug, Clone, PartialEq)]
pub struct TopCompany {
    pub company_name: String,
    pub location: String,
    pub package_text: String,
    pub rating: Option<f64>,
}

/// Everything the dashboard widgets need, recomputed in full from
/// (dataset, filtered indices) on every selection change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSummary {
    /// Number of rows in the filtered set.
    pub company_count: usize,
    /// Package metrics; `None` when no filtered row has a package value.
    pub package_stats: Option<PackageStats>,
    /// Count per distinct skill, descending by count then by label.
    pub skill_counts: Vec<(String, usize)>,
    /// Count per rating bucket in ascending bucket order. Empty when the
    /// filtered set is empty; zero counts are kept otherwise.
    pub rating_counts: Vec<(RatingCategory, usize)>,
    /// Filtered rows ranked by package value descending, top 10.
    pub top_companies: Vec<TopCompany>,
    /// (rating, package) pairs for rows where both are present.
    pub rating_package_pairs: Vec<[f64; 2]>,
}

impl DashboardSummary {
    /// Whether any rating bucket has a non-zero count.
    pub fn has_rating_data(&self) -> bool {
        self.rating_counts.iter().any(|(_, n)| *n > 0)
    }
}

/// Compute all dashboard outputs for the given filtered indices.
///
/// Pure function of its inputs; an empty `indices` slice produces the
/// explicit empty forms of every output.
pub fn summarize(dataset: &CompanyDataset, indices: &[usize]) -> DashboardSummary {
    let rows: Vec<_> = indices.iter().map(|&i| &dataset.records[i]).collect();

    // -- Package metrics --
    let packages: Vec<f64> = rows.iter().filter_map(|r| r.package_value).collect();
    let package_stats = if packages.is_empty() {
        None
    } else {
        let sum: f64 = packages.iter().sum();
        let max = packages.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let min = packages.iter().cloned().fold(f64::INFINITY, f64::min);
        Some(PackageStats {
            mean: sum / packages.len() as f64,
            max,
            min,
        })
    };

    // -- Skill distribution --
    let mut by_skill: BTreeMap<&str, usize> = BTreeMap::new();
    for row in &rows {
        *by_skill.entry(row.primary_skill.as_str()).or_default() += 1;
    }
    let mut skill_counts: Vec<(String, usize)> = by_skill
        .into_iter()
        .map(|(skill, n)| (skill.to_string(), n))
        .collect();
    skill_counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    // -- Rating-bucket distribution --
    let rating_counts = if rows.is_empty() {
        Vec::new()
    } else {
        RatingCategory::ALL
            .into_iter()
            .map(|cat| {
                let n = rows
                    .iter()
                    .filter(|r| r.rating_category == Some(cat))
                    .count();
                (cat, n)
            })
            .collect()
    };

    // -- Top 10 by package --
    // Stable sort keeps the original row order among equal package values;
    // rows without a value rank after every valued row.
    let mut ranked = rows.clone();
    ranked.sort_by(|a, b| match (a.package_value, b.package_value) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    let top_companies = ranked
        .iter()
        .take(10)
        .map(|r| TopCompany {
            company_name: r.company_name.clone(),
            location: r.location.clone(),
            package_text: r.package_text.clone(),
            rating: r.rating,
        })
        .collect();

    // -- Rating vs package pairing --
    let rating_package_pairs = rows
        .iter()
        .filter_map(|r| match (r.rating, r.package_value) {
            (Some(rating), Some(package)) => Some([rating, package]),
            _ => None,
        })
        .collect();

    DashboardSummary {
        company_count: rows.len(),
        package_stats,
        skill_counts,
        rating_counts,
        top_companies,
        rating_package_pairs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{FilterState, filtered_indices};
    use crate::data::model::CompanyRecord;

    fn record(name: &str, loc: &str, mode: &str, role: &str, skill: &str, rating: Option<f64>, pkg: &str) -> CompanyRecord {
        CompanyRecord::from_cells(
            name.into(),
            loc.into(),
            mode.into(),
            role.into(),
            skill,
            rating,
            pkg.into(),
        )
    }

    fn all_indices(dataset: &CompanyDataset) -> Vec<usize> {
        (0..dataset.len()).collect()
    }

    #[test]
    fn end_to_end_two_row_scenario() {
        let ds = CompanyDataset::from_records(vec![
            record("G Corp", "Gurgaon", "Hybrid", "DS", "ML", Some(4.6), "15 LPA"),
            record("N Corp", "Noida", "Remote", "DS", "machine learning", Some(4.2), "12 LPA"),
        ]);
        let indices = filtered_indices(&ds, &FilterState::select_all(&ds));
        let summary = summarize(&ds, &indices);

        assert_eq!(summary.company_count, 2);
        let stats = summary.package_stats.expect("packages present");
        assert_eq!(stats.mean, 13.5);
        assert_eq!(stats.max, 15.0);
        assert_eq!(stats.min, 12.0);

        assert_eq!(summary.skill_counts, vec![("machine learning".to_string(), 2)]);
        assert_eq!(
            summary.rating_counts,
            vec![
                (RatingCategory::Below40, 0),
                (RatingCategory::Mid40To44, 1),
                (RatingCategory::Top45AndAbove, 1),
            ]
        );
        let top: Vec<&str> = summary
            .top_companies
            .iter()
            .map(|t| t.company_name.as_str())
            .collect();
        assert_eq!(top, vec!["G Corp", "N Corp"]);
        assert_eq!(summary.rating_package_pairs, vec![[4.6, 15.0], [4.2, 12.0]]);
    }

    #[test]
    fn empty_filtered_set_degrades_gracefully() {
        let ds = CompanyDataset::from_records(vec![record(
            "A", "Gurgaon", "Hybrid", "DS", "ml", Some(4.0), "10 LPA",
        )]);
        let summary = summarize(&ds, &[]);
        assert_eq!(summary.company_count, 0);
        assert!(summary.package_stats.is_none());
        assert!(summary.skill_counts.is_empty());
        assert!(summary.rating_counts.is_empty());
        assert!(summary.top_companies.is_empty());
        assert!(summary.rating_package_pairs.is_empty());
    }

    #[test]
    fn stats_absent_when_no_package_values_present() {
        let ds = CompanyDataset::from_records(vec![
            record("A", "Gurgaon", "Hybrid", "DS", "ml", Some(4.0), "Not disclosed"),
            record("B", "Noida", "Remote", "DS", "ml", Some(3.5), "TBD"),
        ]);
        let summary = summarize(&ds, &all_indices(&ds));
        assert_eq!(summary.company_count, 2);
        assert!(summary.package_stats.is_none());
    }

    #[test]
    fn top_ranking_is_stable_under_ties_and_puts_missing_last() {
        let ds = CompanyDataset::from_records(vec![
            record("First Tie", "Gurgaon", "Hybrid", "DS", "ml", None, "10 LPA"),
            record("No Package", "Noida", "Remote", "DS", "ml", None, "Not disclosed"),
            record("Second Tie", "Delhi", "Onsite", "DS", "ml", None, "10 LPA"),
            record("Top", "Gurgaon", "Hybrid", "DS", "ml", None, "18 LPA"),
        ]);
        let summary = summarize(&ds, &all_indices(&ds));
        let names: Vec<&str> = summary
            .top_companies
            .iter()
            .map(|t| t.company_name.as_str())
            .collect();
        assert_eq!(names, vec!["Top", "First Tie", "Second Tie", "No Package"]);
    }

    #[test]
    fn top_ranking_truncates_to_ten() {
        let records: Vec<CompanyRecord> = (0..15)
            .map(|i| {
                record(
                    &format!("C{i}"),
                    "Gurgaon",
                    "Hybrid",
                    "DS",
                    "ml",
                    None,
                    &format!("{} LPA", 30 - i),
                )
            })
            .collect();
        let ds = CompanyDataset::from_records(records);
        let summary = summarize(&ds, &all_indices(&ds));
        assert_eq!(summary.top_companies.len(), 10);
        assert_eq!(summary.top_companies[0].company_name, "C0");
        assert_eq!(summary.top_companies[9].company_name, "C9");
    }

    #[test]
    fn scatter_pairs_require_both_values() {
        let ds = CompanyDataset::from_records(vec![
            record("A", "Gurgaon", "Hybrid", "DS", "ml", Some(4.1), "10 LPA"),
            record("B", "Noida", "Remote", "DS", "ml", None, "12 LPA"),
            record("C", "Delhi", "Onsite", "DS", "ml", Some(3.8), "Not disclosed"),
        ]);
        let summary = summarize(&ds, &all_indices(&ds));
        assert_eq!(summary.rating_package_pairs, vec![[4.1, 10.0]]);
    }

    #[test]
    fn skill_counts_sort_descending_then_alphabetically() {
        let ds = CompanyDataset::from_records(vec![
            record("A", "Gurgaon", "Hybrid", "DS", "python", None, "10 LPA"),
            record("B", "Noida", "Remote", "DS", "ml", None, "12 LPA"),
            record("C", "Delhi", "Onsite", "DS", "ML", None, "8 LPA"),
            record("D", "Delhi", "Onsite", "DS", "nlp", None, "9 LPA"),
        ]);
        let summary = summarize(&ds, &all_indices(&ds));
        assert_eq!(
            summary.skill_counts,
            vec![
                ("machine learning".to_string(), 2),
                ("nlp".to_string(), 1),
                ("python".to_string(), 1),
            ]
        );
    }

    #[test]
    fn uncategorized_ratings_keep_zero_counts_on_a_non_empty_set() {
        let ds = CompanyDataset::from_records(vec![record(
            "A", "Gurgaon", "Hybrid", "DS", "ml", None, "10 LPA",
        )]);
        let summary = summarize(&ds, &all_indices(&ds));
        assert_eq!(summary.rating_counts.len(), 3);
        assert!(!summary.has_rating_data());
    }
}
