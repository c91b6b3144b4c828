use std::collections::BTreeSet;

use super::model::{CompanyDataset, Dimension};

// ---------------------------------------------------------------------------
// Filter predicate: which values are selected per dimension
// ---------------------------------------------------------------------------

/// Per-dimension selection state. Each set holds the values currently
/// selected for that dimension; the default after load is "everything
/// observed", i.e. no exclusion. An empty set hides every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub locations: BTreeSet<String>,
    pub work_modes: BTreeSet<String>,
    pub roles: BTreeSet<String>,
}

impl FilterState {
    /// Initialise a [`FilterState`] with all observed values selected
    /// (i.e., show everything).
    pub fn select_all(dataset: &CompanyDataset) -> Self {
        FilterState {
            locations: dataset.locations.clone(),
            work_modes: dataset.work_modes.clone(),
            roles: dataset.roles.clone(),
        }
    }

    pub fn selected(&self, dim: Dimension) -> &BTreeSet<String> {
        match dim {
            Dimension::Location => &self.locations,
            Dimension::WorkMode => &self.work_modes,
            Dimension::Role => &self.roles,
        }
    }

    pub fn selected_mut(&mut self, dim: Dimension) -> &mut BTreeSet<String> {
        match dim {
            Dimension::Location => &mut self.locations,
            Dimension::WorkMode => &mut self.work_modes,
            Dimension::Role => &mut self.roles,
        }
    }
}

/// Return indices of records that pass all three dimension filters.
///
/// A record is included iff its location, work mode, and role are each
/// members of the corresponding selected set (logical AND). An empty set on
/// any dimension therefore yields zero rows.
pub fn filtered_indices(dataset: &CompanyDataset, filters: &FilterState) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            Dimension::ALL
                .iter()
                .all(|&dim| filters.selected(dim).contains(rec.dimension_value(dim)))
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CompanyRecord;

    fn record(loc: &str, mode: &str, role: &str) -> CompanyRecord {
        CompanyRecord::from_cells(
            "X".into(),
            loc.into(),
            mode.into(),
            role.into(),
            "ml",
            Some(4.0),
            "10 LPA".into(),
        )
    }

    fn dataset() -> CompanyDataset {
        CompanyDataset::from_records(vec![
            record("Gurgaon", "Hybrid", "DS"),
            record("Noida", "Remote", "DS"),
            record("Delhi", "Onsite", "MLE"),
        ])
    }

    #[test]
    fn default_selection_passes_every_row() {
        let ds = dataset();
        let filters = FilterState::select_all(&ds);
        assert_eq!(filtered_indices(&ds, &filters), vec![0, 1, 2]);
    }

    #[test]
    fn filtering_is_a_conjunction_across_dimensions() {
        let ds = dataset();
        let mut filters = FilterState::select_all(&ds);
        filters.locations = ["Gurgaon".to_string(), "Noida".to_string()].into();
        filters.roles = ["DS".to_string()].into();
        assert_eq!(filtered_indices(&ds, &filters), vec![0, 1]);

        filters.work_modes = ["Remote".to_string()].into();
        assert_eq!(filtered_indices(&ds, &filters), vec![1]);
    }

    #[test]
    fn widening_a_dimension_never_shrinks_the_result() {
        let ds = dataset();
        let mut narrowed = FilterState::select_all(&ds);
        narrowed.locations = ["Noida".to_string()].into();
        let narrow_count = filtered_indices(&ds, &narrowed).len();

        let mut widened = narrowed.clone();
        widened.locations = ds.locations.clone();
        assert!(filtered_indices(&ds, &widened).len() >= narrow_count);
    }

    #[test]
    fn empty_selection_hides_everything() {
        let ds = dataset();
        let mut filters = FilterState::select_all(&ds);
        filters.work_modes.clear();
        assert!(filtered_indices(&ds, &filters).is_empty());
    }

    #[test]
    fn disjoint_selection_yields_nothing() {
        let ds = dataset();
        let mut filters = FilterState::select_all(&ds);
        // No row is both in Gurgaon and Remote.
        filters.locations = ["Gurgaon".to_string()].into();
        filters.work_modes = ["Remote".to_string()].into();
        assert!(filtered_indices(&ds, &filters).is_empty());
    }
}
