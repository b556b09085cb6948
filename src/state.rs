use std::collections::BTreeSet;

use crate::color::IndustryColors;
use crate::data::analysis::default_industry_selection;
use crate::data::model::CompanyDataset;

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

/// The four mutually exclusive dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    ExecutiveOverview,
    IndustryDeepDive,
    HiddenGems,
    DecisionMatrix,
}

impl View {
    pub const ALL: [View; 4] = [
        View::ExecutiveOverview,
        View::IndustryDeepDive,
        View::HiddenGems,
        View::DecisionMatrix,
    ];

    /// Sidebar label, matching the navigation labels of the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            View::ExecutiveOverview => "Executive Overview",
            View::IndustryDeepDive => "Industry Deep-Dive",
            View::HiddenGems => "Hidden Gems",
            View::DecisionMatrix => "Decision Matrix",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. The dataset is immutable
/// after load; every view recomputes its aggregates from it on each render.
pub struct AppState {
    /// Loaded dataset.
    pub dataset: CompanyDataset,

    /// Active navigation view.
    pub view: View,

    /// Industries selected in the deep-dive view.
    pub selected_industries: BTreeSet<String>,

    /// Colour per industry, stable across renders.
    pub industry_colors: IndustryColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest a dataset, seed the default industry selection and colours.
    pub fn new(dataset: CompanyDataset) -> Self {
        let selected_industries = default_industry_selection(&dataset);
        let industry_colors = IndustryColors::new(&dataset.industries);
        Self {
            dataset,
            view: View::default(),
            selected_industries,
            industry_colors,
            status_message: None,
        }
    }

    /// Replace the dataset (File → Open…), resetting selection and colours.
    pub fn set_dataset(&mut self, dataset: CompanyDataset) {
        self.selected_industries = default_industry_selection(&dataset);
        self.industry_colors = IndustryColors::new(&dataset.industries);
        self.dataset = dataset;
        self.status_message = None;
    }

    /// Toggle one industry in the deep-dive selection.
    pub fn toggle_industry(&mut self, industry: &str) {
        if !self.selected_industries.remove(industry) {
            self.selected_industries.insert(industry.to_string());
        }
    }

    /// Select every industry.
    pub fn select_all_industries(&mut self) {
        self.selected_industries = self.dataset.industries.iter().cloned().collect();
    }

    /// Clear the selection (the deep-dive view then renders its empty state).
    pub fn select_no_industries(&mut self) {
        self.selected_industries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CompanyRecord;

    fn dataset() -> CompanyDataset {
        let record = |industry: &str| CompanyRecord {
            name: industry.to_string(),
            industry: industry.to_string(),
            ratings: 4.0,
            reviews: 100,
            more_locations: 1,
            jobs: 5,
            hq: "Chennai".to_string(),
        };
        CompanyDataset::from_records(vec![
            record("IT"),
            record("IT"),
            record("Retail"),
        ])
    }

    #[test]
    fn new_state_selects_top_industries() {
        let state = AppState::new(dataset());
        assert!(state.selected_industries.contains("IT"));
        assert!(state.selected_industries.contains("Retail"));
        assert_eq!(state.view, View::ExecutiveOverview);
    }

    #[test]
    fn toggle_flips_membership() {
        let mut state = AppState::new(dataset());
        state.toggle_industry("IT");
        assert!(!state.selected_industries.contains("IT"));
        state.toggle_industry("IT");
        assert!(state.selected_industries.contains("IT"));
    }

    #[test]
    fn select_none_then_all_round_trips() {
        let mut state = AppState::new(dataset());
        state.select_no_industries();
        assert!(state.selected_industries.is_empty());
        state.select_all_industries();
        assert_eq!(state.selected_industries.len(), 2);
    }
}
