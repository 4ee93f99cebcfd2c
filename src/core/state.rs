//! Page state and the reducer that drives it

use super::filter::{Facet, FilterSelection, SearchQuery, filter_funds};
use super::fund::FundRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// Initial fetch resolved. A failed fetch arrives here as an empty list.
    FundsLoaded(Vec<FundRecord>),
    SearchChanged(String),
    FacetToggled { facet: Facet, option: String },
    FiltersCleared,
    /// Sidebar header clicked; at most one section is expanded.
    SectionToggled(Facet),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub funds: Vec<FundRecord>,
    pub search_term: String,
    pub filters: FilterSelection,
    pub load_state: LoadState,
    pub expanded: Option<Facet>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            funds: Vec::new(),
            search_term: String::new(),
            filters: FilterSelection::new(),
            load_state: LoadState::Loading,
            expanded: Some(Facet::Shariah),
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(mut self, event: ViewEvent) -> Self {
        match event {
            ViewEvent::FundsLoaded(funds) => {
                self.funds = funds;
                self.load_state = LoadState::Ready;
            }
            ViewEvent::SearchChanged(text) => {
                self.search_term = text;
            }
            ViewEvent::FacetToggled { facet, option } => {
                self.filters.toggle(facet, &option);
            }
            ViewEvent::FiltersCleared => {
                self.filters.clear();
            }
            ViewEvent::SectionToggled(facet) => {
                self.expanded = if self.expanded == Some(facet) {
                    None
                } else {
                    Some(facet)
                };
            }
        }
        self
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    /// Funds to render for the current search and filters.
    pub fn visible(&self) -> Vec<&FundRecord> {
        let search = SearchQuery::new(&self.search_term);
        filter_funds(&self.funds, &search, &self.filters)
    }

    /// `(visible, total)` as shown in the "Showing N of M" line.
    pub fn counts(&self) -> (usize, usize) {
        (self.visible().len(), self.funds.len())
    }

    pub fn find(&self, id: i64) -> Option<&FundRecord> {
        self.funds.iter().find(|f| f.id == id)
    }
}
