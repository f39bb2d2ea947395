use crate::models::district::{DistrictSummary, filter_districts};
use std::rc::Rc;
use yew::prelude::*;

/// State of the district list screen.
#[derive(Clone, PartialEq, Debug)]
pub struct ListState {
    pub catalog: Rc<Vec<DistrictSummary>>,
    pub search_term: String,
    pub loading: bool,
    /// Transport failure message, shown as a notification until dismissed
    pub error: Option<String>,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            catalog: Rc::new(Vec::new()),
            search_term: String::new(),
            loading: true,
            error: None,
        }
    }
}

impl ListState {
    /// Catalog entries matching the current search term
    pub fn visible(&self) -> Vec<&DistrictSummary> {
        filter_districts(&self.catalog, &self.search_term)
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum ListAction {
    /// Catalog fetched with `success: true`
    Loaded(Vec<DistrictSummary>),
    /// Response arrived with `success: false`
    Unsuccessful,
    /// Transport or HTTP failure
    Failed(String),
    Search(String),
    DismissError,
}

impl Reducible for ListState {
    type Action = ListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ListAction::Loaded(districts) => {
                next.catalog = Rc::new(districts);
                next.loading = false;
            }
            ListAction::Unsuccessful => {
                next.loading = false;
            }
            ListAction::Failed(message) => {
                next.catalog = Rc::new(Vec::new());
                next.error = Some(message);
                next.loading = false;
            }
            ListAction::Search(term) => {
                next.search_term = term;
            }
            ListAction::DismissError => {
                next.error = None;
            }
        }
        Rc::new(next)
    }
}
