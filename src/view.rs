
use crate::dataset::Dataset;
use crate::element::ElementRecord;
use crate::layout::{block_of, position_of, Block, GridPosition};
use crate::matcher::MatchResult;

pub const NOT_FOUND_MESSAGE: &str = "Element or category not found.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Highlight {
    #[default]
    None,
    Single(String),
    Category(Vec<String>),
}

impl Highlight {
    pub fn contains(&self, symbol: &str) -> bool {
        match self {
            Highlight::None => false,
            Highlight::Single(s) => s.eq_ignore_ascii_case(symbol),
            Highlight::Category(list) => list.iter().any(|s| s.eq_ignore_ascii_case(symbol)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub symbol: String,
    pub name: String,
    pub atomic_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultsPanel {
    #[default]
    Empty,
    Info(String),
    NoResults(String),
    Error(String),
    Cards(Vec<ResultCard>),
}

/// Everything the search and block controls have done to the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    highlight: Highlight,
    scroll_to: Option<String>,
    block: Option<Block>,
    panel: ResultsPanel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub symbol: String,
    pub name: String,
    pub atomic_number: String,
    pub position: GridPosition,
    pub block: Option<Block>,
    pub classes: Vec<&'static str>,
}

impl CellView {
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    pub cells: Vec<CellView>,
    pub panel: ResultsPanel,
    pub scroll_to: Option<String>,
    pub block: Option<Block>,
}

impl ViewState {
    pub fn highlight(&self) -> &Highlight {
        &self.highlight
    }

    pub fn block(&self) -> Option<Block> {
        self.block
    }

    pub fn panel(&self) -> &ResultsPanel {
        &self.panel
    }

    pub fn apply(&mut self, query: &str, result: MatchResult, dataset: &Dataset) {
        let query = query.trim();
        self.scroll_to = None;
        match result {
            MatchResult::Empty => {
                self.highlight = Highlight::None;
                self.panel = ResultsPanel::Empty;
            }
            MatchResult::NoMatch => {
                self.highlight = Highlight::None;
                self.panel = ResultsPanel::NoResults(NOT_FOUND_MESSAGE.to_string());
            }
            MatchResult::CategoryHighlight { symbols, .. } => {
                if symbols.is_empty() {
                    self.highlight = Highlight::None;
                    self.panel =
                        ResultsPanel::NoResults(format!("No elements found for '{query}'."));
                } else {
                    self.highlight = Highlight::Category(symbols);
                    self.panel = ResultsPanel::Info(format!(
                        "Highlighted all elements in the '{query}' category."
                    ));
                }
            }
            MatchResult::SingleMatch { symbol } => {
                let name = dataset
                    .find(&symbol)
                    .map(|r| r.name.clone())
                    .unwrap_or_else(|| symbol.clone());
                self.panel = ResultsPanel::Info(format!("Element '{name}' highlighted."));
                self.scroll_to = Some(symbol.clone());
                self.highlight = Highlight::Single(symbol);
            }
            MatchResult::MultipleMatches { symbols } => {
                self.highlight = Highlight::None;
                let cards = symbols
                    .iter()
                    .filter_map(|s| dataset.find(s))
                    .map(|r| ResultCard {
                        symbol: r.symbol.clone(),
                        name: r.name.clone(),
                        atomic_number: r.atomic_number_text(),
                    })
                    .collect();
                self.panel = ResultsPanel::Cards(cards);
            }
        }
    }

    /// `None` is the reset button. Leaves the search highlight alone.
    pub fn set_block(&mut self, block: Option<Block>) {
        self.block = block;
    }

    pub fn clear_search(&mut self) {
        self.highlight = Highlight::None;
        self.scroll_to = None;
        self.panel = ResultsPanel::Empty;
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.panel = ResultsPanel::Error(message.into());
    }

    pub fn render(&self, dataset: &Dataset) -> GridView {
        let cells = dataset
            .iter()
            .filter_map(|record| self.render_cell(record))
            .collect();
        GridView {
            cells,
            panel: self.panel.clone(),
            scroll_to: self.scroll_to.clone(),
            block: self.block,
        }
    }

    fn render_cell(&self, record: &ElementRecord) -> Option<CellView> {
        let position = position_of(&record.symbol)?;
        let block = record.block.or_else(|| block_of(&record.symbol));

        let mut classes = vec!["element"];
        if let Some(b) = block {
            classes.push(b.css_class());
        }
        if let Some(filter) = self.block {
            if block == Some(filter) {
                classes.push(filter.active_class());
            } else {
                classes.push("dim-element");
            }
        }
        if self.highlight.contains(&record.symbol) {
            classes.push("highlighted");
        }

        Some(CellView {
            symbol: record.symbol.clone(),
            name: record.name.clone(),
            atomic_number: record.atomic_number_text(),
            position,
            block,
            classes,
        })
    }
}
