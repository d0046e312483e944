use crate::dataset::Dataset;
use crate::detail::{ClickTarget, Modal};
use crate::layout::Block;
use crate::matcher::{match_query, normalize, suggest, Suggestion};
use crate::view::{GridView, ViewState};

/// One user's interaction with the table: search box, suggestions, block
/// buttons and the element dialog, over an injected dataset.
#[derive(Debug, Clone)]
pub struct Viewer {
    dataset: Dataset,
    input: String,
    suggestions: Vec<Suggestion>,
    view: ViewState,
    modal: Modal,
}

#[derive(Debug, Clone)]
pub struct Snapshot {
    pub input: String,
    pub grid: GridView,
    pub suggestions: Vec<Suggestion>,
    pub modal: Modal,
}

impl Viewer {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            input: String::new(),
            suggestions: Vec::new(),
            view: ViewState::default(),
            modal: Modal::default(),
        }
    }

    /// Starts with the load failure shown in the results area.
    pub fn with_load_error(dataset: Dataset, message: &str) -> Self {
        let mut viewer = Self::new(dataset);
        viewer.view.show_error(message);
        viewer
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// A keystroke in the search box.
    pub fn input(&mut self, text: &str) {
        self.input = text.to_string();
        if normalize(text).is_empty() {
            self.suggestions.clear();
            self.view.clear_search();
            return;
        }
        self.suggestions = suggest(text, &self.dataset);
        self.search(&normalize(text));
    }

    /// Enter in the search box.
    pub fn submit(&mut self) {
        self.suggestions.clear();
        let query = normalize(&self.input);
        self.search(&query);
    }

    /// Enter after typing `text` in one go.
    pub fn submit_text(&mut self, text: &str) {
        self.input = text.to_string();
        self.submit();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.suggestions.clear();
        self.view.clear_search();
    }

    pub fn pick_suggestion(&mut self, symbol: &str) {
        let Some(name) = self.dataset.find(symbol).map(|r| r.name.clone()) else {
            log::warn!("suggestion {symbol} is not in the dataset");
            return;
        };
        self.suggestions.clear();
        self.search(&name);
        self.input = name;
    }

    pub fn highlight_block(&mut self, block: Option<Block>) {
        self.view.set_block(block);
    }

    /// A click on a grid cell, result card or any other element link.
    pub fn select(&mut self, symbol: &str) {
        let record = self.dataset.find(symbol);
        if record.is_none() {
            log::warn!("element {symbol} not found");
        }
        self.modal.open(record);
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
    }

    pub fn click_modal(&mut self, target: ClickTarget) {
        self.modal.click(target);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            input: self.input.clone(),
            grid: self.view.render(&self.dataset),
            suggestions: self.suggestions.clone(),
            modal: self.modal.clone(),
        }
    }

    /// Typed and submitted text arrives lowercased; a picked suggestion
    /// keeps the element name as written.
    fn search(&mut self, query: &str) {
        let result = match_query(query, &self.dataset);
        log::debug!("search {query:?} -> {result:?}");
        self.view.apply(query, result, &self.dataset);
    }
}
