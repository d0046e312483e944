use askama::Html as HtmlEscaper;
use askama::{MarkupDisplay, Template};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Serialize;
use std::fmt::Write as _;

use crate::detail::{DetailSlots, Field, Modal};
use crate::layout::Block;
use crate::matcher::Suggestion;
use crate::session::Snapshot;
use crate::view::{GridView, ResultsPanel};

pub fn escape(text: &str) -> String {
    MarkupDisplay::new_unsafe(text, HtmlEscaper).to_string()
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

fn display(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}

/// Search and block state carried by every link, so the page also works
/// with scripts disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub query: String,
    pub block: Option<Block>,
}

impl PageLinks {
    pub fn href(&self, open: Option<&str>) -> String {
        let mut params = Vec::new();
        let q = self.query.trim();
        if !q.is_empty() {
            params.push(format!("q={}", encode(q)));
        }
        if let Some(b) = self.block {
            params.push(format!("block={}", b.as_str()));
        }
        if let Some(symbol) = open {
            params.push(format!("open={}", encode(symbol)));
        }
        if params.is_empty() {
            "/".to_string()
        } else {
            format!("/?{}", params.join("&"))
        }
    }

    pub fn with_block(&self, block: Option<Block>) -> Self {
        Self {
            query: self.query.clone(),
            block,
        }
    }

    pub fn with_query(&self, query: &str) -> Self {
        Self {
            query: query.to_string(),
            block: self.block,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CellClasses {
    pub symbol: String,
    pub classes: String,
}

/// What the page script swaps into the document after each interaction.
#[derive(Debug, Clone, Serialize)]
pub struct Fragments {
    pub cells: Vec<CellClasses>,
    pub results_html: String,
    pub suggestions_html: String,
    pub modal_html: String,
    pub modal_open: bool,
    pub scroll_to: Option<String>,
    pub block: Option<Block>,
}

pub fn fragments(snapshot: &Snapshot, links: &PageLinks) -> Fragments {
    Fragments {
        cells: snapshot
            .grid
            .cells
            .iter()
            .map(|c| CellClasses {
                symbol: c.symbol.clone(),
                classes: c.class_attr(),
            })
            .collect(),
        results_html: render_results(&snapshot.grid.panel, links),
        suggestions_html: render_suggestions(&snapshot.suggestions, links),
        modal_html: render_modal(&snapshot.modal, links),
        modal_open: snapshot.modal.is_open(),
        scroll_to: snapshot.grid.scroll_to.clone(),
        block: snapshot.grid.block,
    }
}

pub fn render_grid(grid: &GridView, links: &PageLinks) -> String {
    let mut out = String::new();
    for cell in &grid.cells {
        let symbol = escape(&cell.symbol);
        let _ = write!(
            out,
            r#"<div class="{classes}" data-symbol="{symbol}" style="grid-row: {row}; grid-column: {col};"><a href="{href}" data-open="{symbol}" title="{name}"><span class="atomic-number">{number}</span><span class="symbol">{symbol}</span><span class="name">{name}</span></a></div>"#,
            classes = cell.class_attr(),
            row = cell.position.row + 1,
            col = cell.position.col + 1,
            href = escape(&links.href(Some(&cell.symbol))),
            name = escape(&cell.name),
            number = escape(&cell.atomic_number),
        );
    }
    out
}

pub fn render_results(panel: &ResultsPanel, links: &PageLinks) -> String {
    match panel {
        ResultsPanel::Empty => String::new(),
        ResultsPanel::Info(text) => format!(r#"<p class="search-info">{}</p>"#, escape(text)),
        ResultsPanel::NoResults(text) => format!(r#"<p class="no-results">{}</p>"#, escape(text)),
        ResultsPanel::Error(text) => format!(r#"<p class="error">{}</p>"#, escape(text)),
        ResultsPanel::Cards(cards) => {
            let mut out = String::new();
            for card in cards {
                let symbol = escape(&card.symbol);
                let _ = write!(
                    out,
                    r#"<a class="element-card" href="{href}" data-open="{symbol}"><div class="element-symbol">{symbol}</div><div class="element-name">{name}</div><div class="element-atomic-number">{number}</div></a>"#,
                    href = escape(&links.href(Some(&card.symbol))),
                    name = escape(&card.name),
                    number = escape(&card.atomic_number),
                );
            }
            out
        }
    }
}

pub fn render_suggestions(suggestions: &[Suggestion], links: &PageLinks) -> String {
    let mut out = String::new();
    for s in suggestions {
        let _ = write!(
            out,
            r#"<a class="suggestion-item" href="{href}" data-pick="{name}">{label}</a>"#,
            href = escape(&links.with_query(&s.name).href(None)),
            name = escape(&s.name),
            label = escape(&s.label),
        );
    }
    out
}

fn field_row(id: &str, label: &str, field: &Field) -> String {
    format!(
        r#"<p id="{id}-row" style="display: {display};"><strong>{label}:</strong> <span id="{id}">{text}</span></p>"#,
        display = display(field.visible),
        text = escape(&field.text),
    )
}

fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect()
}

pub fn render_modal(modal: &Modal, links: &PageLinks) -> String {
    let slots = modal.slots();
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<div id="elementModal" class="modal" style="display: {display};"><div class="modal-content">"#,
        display = if modal.is_open() { "flex" } else { "none" },
    );
    let _ = write!(
        out,
        r#"<a class="close-button" href="{close}" data-close="1">&times;</a><h2 id="modal-symbol"><sup class="atomic-num-symbol">{number}</sup>{symbol}<sub class="atomic-mass-symbol">{mass}</sub></h2><h3 id="modal-name">{name}</h3>"#,
        close = escape(&links.href(None)),
        number = escape(&slots.atomic_number),
        symbol = escape(&slots.symbol),
        mass = escape(&slots.atomic_mass),
        name = escape(&slots.name),
    );
    let _ = write!(
        out,
        r#"<p><strong>Group:</strong> <span id="modal-group">{group}</span></p><p><strong>Category:</strong> <span id="modal-category">{category}</span></p><p><strong>Discovered by:</strong> <span id="modal-discovered">{by}</span></p><p><strong>Discovery year:</strong> <span id="modal-discovery-year">{year}</span></p>"#,
        group = escape(&slots.group),
        category = escape(&slots.category),
        by = escape(&slots.discovered_by),
        year = escape(&slots.discovery_year),
    );
    out.push_str(&field_row("modal-density", "Density", &slots.density));
    out.push_str(&field_row("modal-melting-point", "Melting point", &slots.melting_point));
    out.push_str(&field_row("modal-boiling-point", "Boiling point", &slots.boiling_point));
    out.push_str(&field_row("modal-appearance", "Appearance", &slots.appearance));

    let _ = write!(
        out,
        r#"<h4 id="modal-isotopes-heading" style="display: {}">Isotopes</h4><div id="modal-isotopes-cards-container">"#,
        display(slots.isotopes.visible),
    );
    for card in &slots.isotopes.items {
        let _ = write!(out, r#"<div class="isotope-card"><h4>{}</h4>"#, escape(&card.label));
        if let Some(abundance) = &card.abundance {
            let _ = write!(out, "<p><strong>Abundance:</strong> {}</p>", escape(abundance));
        }
        if let Some(half_life) = &card.half_life {
            let _ = write!(out, "<p><strong>Half-life:</strong> {}</p>", escape(half_life));
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");

    let _ = write!(
        out,
        r#"<div id="modal-key-properties-section" style="display: {}"><h4>Key properties</h4><ul id="modal-key-properties-list">{}</ul></div>"#,
        display(slots.key_properties.visible),
        list_items(&slots.key_properties.items),
    );
    let _ = write!(
        out,
        r#"<div id="modal-uses-section" style="display: {}"><h4>Uses</h4><ul id="modal-uses-list">{}</ul></div>"#,
        display(slots.uses.visible),
        list_items(&slots.uses.items),
    );
    let _ = write!(
        out,
        r#"<div id="modal-compounds-section" style="display: {}"><h4>Compounds</h4><ul id="modal-compounds-list">{}</ul></div>"#,
        display(slots.compounds.visible),
        compound_items(slots),
    );
    if let Some(link) = &slots.detail_link {
        let _ = write!(
            out,
            r#"<a id="modal-detail-link" class="detail-link-btn" href="/{}">{}</a>"#,
            escape(&link.href),
            escape(&link.text),
        );
    }
    out.push_str("</div></div>");
    out
}

fn compound_items(slots: &DetailSlots) -> String {
    let mut out = String::new();
    for c in &slots.compounds.items {
        let _ = write!(out, "<li><strong>{}</strong>", escape(&c.name));
        if let Some(formula) = &c.formula {
            let _ = write!(out, r#" <span class="formula">{}</span>"#, escape(formula));
        }
        if let Some(properties) = &c.properties {
            let _ = write!(out, " &ndash; {}", escape(properties));
        }
        out.push_str("</li>");
    }
    out
}

fn render_block_buttons(links: &PageLinks) -> String {
    let mut out = String::new();
    for block in Block::ALL {
        let _ = write!(
            out,
            r#"<a id="{id}-block-btn" class="block-btn" href="{href}" data-block="{id}">{block}</a>"#,
            id = block.as_str(),
            href = escape(&links.with_block(Some(block)).href(None)),
        );
    }
    let _ = write!(
        out,
        r#"<a id="reset-btn" class="block-btn" href="{}" data-block="">Reset</a>"#,
        escape(&links.with_block(None).href(None)),
    );
    out
}

#[derive(Template)]
#[template(
    source = r##"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Periodic Table</title>
    <link rel="stylesheet" href="/static/style.css" />
  </head>
  <body>
    <main>
      <div class="brand">Periodic Table</div>
      <form id="searchContainer" action="/" method="get">
        <input id="searchInput" name="q" type="text" value="{{ search_value }}" autocomplete="off" placeholder="Search by name, symbol or category" />
        <input id="blockInput" name="block" type="hidden" value="{{ block_value }}" />
        <button type="submit">Search</button>
        <a id="clearBtn" href="{{ clear_href }}">Clear</a>
        <div id="suggestionsContainer">{{ suggestions|safe }}</div>
      </form>
      <div class="blocks">{{ block_buttons|safe }}</div>
      <div id="resultsContainer">{{ results|safe }}</div>
      <div id="periodicTable">{{ grid|safe }}</div>
    </main>
    <div id="modalHost">{{ modal|safe }}</div>
    <script id="viewState" type="application/json">{{ state|safe }}</script>
    <script>
      const initial = JSON.parse(document.getElementById("viewState").textContent);
      const state = { q: initial.q || "", block: initial.block || "" };
      const searchInput = document.getElementById("searchInput");
      const blockInput = document.getElementById("blockInput");
      const suggestionsContainer = document.getElementById("suggestionsContainer");
      const resultsContainer = document.getElementById("resultsContainer");
      const modalHost = document.getElementById("modalHost");
      const clearBtn = document.getElementById("clearBtn");
      let ticket = 0;

      async function refresh(extra = {}) {
        const params = new URLSearchParams();
        if (state.q) params.set("q", state.q);
        if (state.block) params.set("block", state.block);
        for (const [key, value] of Object.entries(extra)) params.set(key, value);
        const mine = ++ticket;
        try {
          const res = await fetch(`/api/view?${params}`);
          if (!res.ok) throw new Error(`HTTP error! status: ${res.status}`);
          const data = await res.json();
          if (mine === ticket) apply(data);
        } catch (err) {
          console.error("Could not refresh view:", err);
        }
      }

      function apply(data) {
        for (const cell of data.cells) {
          const el = document.querySelector(`.element[data-symbol="${cell.symbol}"]`);
          if (el) el.className = cell.classes;
        }
        resultsContainer.innerHTML = data.results_html;
        suggestionsContainer.innerHTML = data.suggestions_html;
        modalHost.innerHTML = data.modal_html;
        if (data.scroll_to) {
          const target = document.querySelector(`.element[data-symbol="${data.scroll_to}"]`);
          if (target) target.scrollIntoView({ behavior: "smooth", block: "center" });
        }
      }

      searchInput.addEventListener("input", () => {
        state.q = searchInput.value;
        refresh({ live: "true" });
      });

      searchInput.addEventListener("keydown", (event) => {
        if (event.key === "Enter") {
          event.preventDefault();
          state.q = searchInput.value;
          refresh();
        }
      });

      clearBtn.addEventListener("click", (event) => {
        event.preventDefault();
        searchInput.value = "";
        state.q = "";
        refresh();
      });

      document.addEventListener("click", (event) => {
        const blockBtn = event.target.closest("[data-block]");
        if (blockBtn) {
          event.preventDefault();
          state.block = blockBtn.dataset.block;
          blockInput.value = state.block;
          refresh();
          return;
        }
        const pick = event.target.closest("[data-pick]");
        if (pick) {
          event.preventDefault();
          searchInput.value = pick.dataset.pick;
          state.q = pick.dataset.pick;
          refresh();
          return;
        }
        const open = event.target.closest("[data-open]");
        if (open) {
          event.preventDefault();
          refresh({ open: open.dataset.open });
          return;
        }
        const modal = document.getElementById("elementModal");
        if (event.target.closest("[data-close]") || event.target === modal) {
          event.preventDefault();
          if (modal) modal.style.display = "none";
        }
      });
    </script>
  </body>
</html>
"##,
    ext = "html"
)]
struct IndexTemplate<'a> {
    search_value: &'a str,
    block_value: &'a str,
    clear_href: String,
    block_buttons: String,
    suggestions: String,
    results: String,
    grid: String,
    modal: String,
    state: String,
}

pub fn render_index(snapshot: &Snapshot, links: &PageLinks) -> askama::Result<String> {
    let state = serde_json::json!({
        "q": links.query,
        "block": links.block.map(Block::as_str).unwrap_or(""),
    })
    .to_string()
    .replace("</", "<\\/");

    IndexTemplate {
        search_value: &snapshot.input,
        block_value: links.block.map(Block::as_str).unwrap_or(""),
        clear_href: links.with_query("").href(None),
        block_buttons: render_block_buttons(links),
        suggestions: render_suggestions(&snapshot.suggestions, links),
        results: render_results(&snapshot.grid.panel, links),
        grid: render_grid(&snapshot.grid, links),
        modal: render_modal(&snapshot.modal, links),
        state,
    }
    .render()
}

#[derive(Template)]
#[template(
    source = r##"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{{ title }}</title>
    <link rel="stylesheet" href="/static/style.css" />
  </head>
  <body>
    <main>
      <a class="block-btn" href="/">Back to the table</a>
      <header>
        <div id="element-symbol" class="element-symbol">{{ symbol }}</div>
        <h1 id="element-name">{{ name }}</h1>
      </header>
      <section>
        <h2>Interesting facts</h2>
        <ul id="facts-list">{{ facts|safe }}</ul>
      </section>
      <section>
        <h2>Common uses</h2>
        <ul id="uses-list">{{ uses|safe }}</ul>
      </section>
      <section id="compounds-section" style="display: {{ compounds_display }}">
        <h2>Compounds</h2>
        <ul id="compounds-list">{{ compounds|safe }}</ul>
      </section>
    </main>
  </body>
</html>
"##,
    ext = "html"
)]
struct DetailsTemplate<'a> {
    title: String,
    symbol: &'a str,
    name: &'a str,
    facts: String,
    uses: String,
    compounds_display: &'static str,
    compounds: String,
}

/// The standalone page. Unpopulated slots render an empty page.
pub fn render_details_page(slots: &DetailSlots) -> askama::Result<String> {
    let title = if slots.is_populated() {
        format!("{} ({}) - Details", slots.name, slots.symbol)
    } else {
        "Element Details".to_string()
    };
    DetailsTemplate {
        title,
        symbol: &slots.symbol,
        name: &slots.name,
        facts: list_items(&slots.interesting_facts.items),
        uses: list_items(&slots.common_uses.items),
        compounds_display: display(slots.compounds.visible),
        compounds: compound_items(slots),
    }
    .render()
}

const STYLE: &str = r##"
      html, body { margin: 0; padding: 0; background: #0b0c10; color: #e6e6e6; font-family: "Space Grotesk", "Segoe UI", sans-serif; }
      a { color: inherit; text-decoration: none; }
      main { padding: 16px; }
      .brand { font-size: 18px; font-weight: 600; letter-spacing: 0.02em; margin-bottom: 12px; }
      #searchContainer { position: relative; display: flex; gap: 6px; align-items: center; flex-wrap: wrap; }
      input, button, .block-btn, #clearBtn { background: #11151b; color: #e6e6e6; border: 1px solid #2a2f36; border-radius: 6px; padding: 6px 10px; font-size: 12px; }
      #searchInput { width: 280px; }
      #suggestionsContainer { position: absolute; top: 100%; left: 0; width: 300px; z-index: 5; }
      .suggestion-item { display: block; background: #0f1218; border: 1px solid #2a2f36; padding: 6px 8px; font-size: 12px; }
      .suggestion-item:hover { border-color: #3c6a9e; }
      .blocks { margin: 10px 0; display: flex; gap: 6px; }
      #resultsContainer { margin: 10px 0; min-height: 20px; display: flex; flex-wrap: wrap; gap: 6px; font-size: 12px; }
      .element-card { border: 1px solid #2a2f36; border-radius: 8px; padding: 6px 10px; text-align: center; cursor: pointer; }
      .element-symbol { font-size: 18px; font-weight: 600; }
      .no-results, .error { color: #ff8a80; }
      #periodicTable { display: grid; grid-template-columns: repeat(18, minmax(0, 1fr)); grid-auto-rows: 56px; gap: 4px; }
      .element { border: 1px solid #2a2f36; border-radius: 6px; background: #11151b; font-size: 11px; transition: opacity 0.2s; }
      .element a { display: flex; flex-direction: column; align-items: center; justify-content: center; height: 100%; }
      .element .symbol { font-size: 15px; font-weight: 600; }
      .element .name { font-size: 9px; color: #9aa3ad; }
      .element .atomic-number { font-size: 9px; color: #7f8895; }
      .s_group_active { background: #3a2330; }
      .p_group_active { background: #23363a; }
      .d_group_active { background: #2c2a3f; }
      .f_group_active { background: #33361f; }
      .dim-element { opacity: 0.25; }
      .highlighted { border: 2px solid red; }
      .modal { position: fixed; inset: 0; background: rgba(0,0,0,0.6); align-items: center; justify-content: center; z-index: 10; }
      .modal-content { background: #0f141b; border: 1px solid #2a2f36; border-radius: 10px; padding: 18px; width: min(560px, 92vw); max-height: 86vh; overflow: auto; position: relative; }
      .close-button { position: absolute; top: 8px; right: 12px; font-size: 22px; }
      .isotope-card { display: inline-block; border: 1px solid #2a2f36; border-radius: 8px; padding: 6px 10px; margin: 4px; font-size: 12px; }
      .detail-link-btn { display: inline-block; margin-top: 12px; border: 1px solid #3c6a9e; border-radius: 6px; padding: 6px 10px; }
"##;



pub fn stylesheet() -> &'static str {
    STYLE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::tests::sample;
    use crate::session::Viewer;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Fe" & 'Cu'</b>"#),
            "&lt;b&gt;&quot;Fe&quot; &amp; &#x27;Cu&#x27;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_links_carry_state() {
        let links = PageLinks {
            query: " noble gases ".into(),
            block: Some(Block::P),
        };
        assert_eq!(links.href(None), "/?q=noble%20gases&block=p");
        assert_eq!(links.href(Some("He")), "/?q=noble%20gases&block=p&open=He");
        assert_eq!(links.with_block(None).with_query("").href(None), "/");
    }

    #[test]
    fn test_index_reflects_search() {
        let mut viewer = Viewer::new(sample());
        viewer.input("fe");
        viewer.submit();
        let links = PageLinks::default().with_query("fe");
        let page = render_index(&viewer.snapshot(), &links).unwrap();
        assert!(page.contains(r#"<div class="element d_group highlighted" data-symbol="Fe""#));
        assert!(page.contains(&escape("Element 'Iron' highlighted.")));
        assert!(page.contains(r#"value="fe""#));
        assert!(page.contains(r#"id="elementModal" class="modal" style="display: none;""#));
        assert!(!page.contains("__GRID__"));
    }

    #[test]
    fn test_cards_and_suggestions() {
        let mut viewer = Viewer::new(sample());
        viewer.input("ne");
        viewer.input("n");
        let snap = viewer.snapshot();
        let frags = fragments(&snap, &PageLinks::default().with_query("n"));
        assert!(frags.results_html.contains(r#"data-open="Ne""#));
        assert!(frags.results_html.contains(r#"<div class="element-name">Sodium</div>"#));
        assert!(frags.suggestions_html.is_empty());
        assert!(!frags.modal_open);

        viewer.input("so");
        let frags = fragments(&viewer.snapshot(), &PageLinks::default());
        assert!(frags
            .suggestions_html
            .contains(r#"href="/?q=Sodium" data-pick="Sodium">Sodium (Na)</a>"#));
    }

    #[test]
    fn test_modal_rows_follow_fields() {
        let data = crate::dataset::Dataset::from_json(
            br#"[{"symbol": "Fe", "name": "Iron", "atomicNumber": 26, "density": 7.874,
                 "isotopes": [{"isotope": "Fe-56", "abundance": "91.75%"}]}]"#,
        )
        .unwrap();
        let mut viewer = Viewer::new(data);
        viewer.select("Fe");
        let html = render_modal(viewer.modal(), &PageLinks::default());
        assert!(html.contains(r#"style="display: flex;""#));
        assert!(html.contains(r#"<p id="modal-density-row" style="display: block;"><strong>Density:</strong> <span id="modal-density">7.874 g/cm³</span></p>"#));
        assert!(html.contains(r#"<p id="modal-boiling-point-row" style="display: none;">"#));
        assert!(html.contains(r#"<div class="isotope-card"><h4>Fe-56</h4><p><strong>Abundance:</strong> 91.75%</p></div>"#));
        assert!(html.contains(r#"<div id="modal-uses-section" style="display: none">"#));
        assert!(html.contains(r#"href="/element-details?symbol=Fe">View more about Iron</a>"#));
    }

    #[test]
    fn test_details_page() {
        let record = serde_json::from_str(
            r#"{"symbol": "Au", "name": "Gold", "common_uses": ["Jewellery", "Electronics"]}"#,
        )
        .unwrap();
        let page = render_details_page(&DetailSlots::for_record(&record)).unwrap();
        assert!(page.contains("<title>Gold (Au) - Details</title>"));
        assert!(page.contains("<li>No interesting facts available.</li>"));
        assert!(page.contains("<li>Jewellery</li><li>Electronics</li>"));

        let empty = render_details_page(&DetailSlots::default()).unwrap();
        assert!(empty.contains("<title>Element Details</title>"));
        assert!(empty.contains(r#"<ul id="facts-list"></ul>"#));
    }

    #[test]
    fn test_search_value_is_not_reinterpolated() {
        let query = "{{ grid }} __STATE__ x autofocus onfocus=alert(1) <b>";
        let mut viewer = Viewer::new(sample());
        viewer.submit_text(query);
        let page = render_index(&viewer.snapshot(), &PageLinks::default().with_query(query)).unwrap();
        let line = page
            .lines()
            .find(|l| l.contains(r#"id="searchInput""#))
            .unwrap();
        assert!(line.contains(&format!(r#"value="{}""#, escape(query))));
        assert!(!line.contains(r#"value="{"#));
        assert!(!line.contains("<b>"));
        assert!(page.contains(r#""q":"{{ grid }} __STATE__ x autofocus onfocus=alert(1) <b>""#));
    }

    #[test]
    fn test_details_page_escapes_record_text() {
        let record = serde_json::from_str(
            r#"{"symbol": "Xx", "name": "<script>x</script>", "interesting_facts": ["a < b"]}"#,
        )
        .unwrap();
        let page = render_details_page(&DetailSlots::for_record(&record)).unwrap();
        assert!(!page.contains("<script>x</script>"));
        assert!(page.contains("<li>a &lt; b</li>"));
    }
}
