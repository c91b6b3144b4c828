use std::path::Path;

use crate::color::ColorMap;
use crate::data::filter::{FilterState, filtered_indices};
use crate::data::model::{CompanyDataset, Dimension};
use crate::data::summary::{DashboardSummary, summarize};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file loads successfully).
    pub dataset: Option<CompanyDataset>,

    /// Per-dimension filter selections.
    pub filters: FilterState,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Aggregates for the current filtered set (cached).
    pub summary: DashboardSummary,

    /// Stable colours for the skill chart, built from the full dataset.
    pub skill_colors: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            filters: FilterState::default(),
            visible_indices: Vec::new(),
            summary: DashboardSummary::default(),
            skill_colors: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset, initialise filters and chart colours.
    pub fn set_dataset(&mut self, dataset: CompanyDataset) {
        self.filters = FilterState::select_all(&dataset);
        self.visible_indices = (0..dataset.len()).collect();
        self.summary = summarize(&dataset, &self.visible_indices);
        self.skill_colors = Some(ColorMap::new(&dataset.skills));
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Load a dataset file, replacing the current one on success. On failure
    /// the error becomes the status message and the old dataset is kept.
    pub fn load_path(&mut self, path: &Path) {
        match crate::data::loader::load_file(path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} companies from {} ({} locations, {} roles)",
                    dataset.len(),
                    path.display(),
                    dataset.locations.len(),
                    dataset.roles.len()
                );
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Recompute the filtered set and every aggregate after a filter change.
    /// Full recompute, no incremental update.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.filters);
            self.summary = summarize(ds, &self.visible_indices);
        }
    }

    /// Toggle a single value in a dimension's filter.
    pub fn toggle_filter_value(&mut self, dim: Dimension, value: &str) {
        let selected = self.filters.selected_mut(dim);
        if selected.contains(value) {
            selected.remove(value);
        } else {
            selected.insert(value.to_string());
        }
        self.refilter();
    }

    /// Select all observed values in a dimension.
    pub fn select_all(&mut self, dim: Dimension) {
        if let Some(ds) = &self.dataset {
            *self.filters.selected_mut(dim) = ds.distinct_values(dim).clone();
            self.refilter();
        }
    }

    /// Deselect all values in a dimension.
    pub fn select_none(&mut self, dim: Dimension) {
        self.filters.selected_mut(dim).clear();
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CompanyRecord;

    fn dataset() -> CompanyDataset {
        CompanyDataset::from_records(vec![
            CompanyRecord::from_cells(
                "A".into(), "Gurgaon".into(), "Hybrid".into(), "DS".into(), "ml", Some(4.6), "15 LPA".into(),
            ),
            CompanyRecord::from_cells(
                "B".into(), "Noida".into(), "Remote".into(), "DS".into(), "ml", Some(4.2), "12 LPA".into(),
            ),
        ])
    }

    #[test]
    fn set_dataset_seeds_filters_with_everything_selected() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        assert_eq!(state.visible_indices, vec![0, 1]);
        assert_eq!(state.summary.company_count, 2);
        assert_eq!(state.filters.locations.len(), 2);
    }

    #[test]
    fn toggling_a_value_recomputes_the_summary() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.toggle_filter_value(Dimension::Location, "Noida");
        assert_eq!(state.visible_indices, vec![0]);
        assert_eq!(state.summary.company_count, 1);

        state.toggle_filter_value(Dimension::Location, "Noida");
        assert_eq!(state.summary.company_count, 2);
    }

    #[test]
    fn select_none_empties_the_dashboard() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.select_none(Dimension::Role);
        assert!(state.visible_indices.is_empty());
        assert_eq!(state.summary.company_count, 0);
        assert!(state.summary.package_stats.is_none());

        state.select_all(Dimension::Role);
        assert_eq!(state.summary.company_count, 2);
    }
}
