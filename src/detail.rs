use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::element::{present, present_str, ElementRecord};

pub const PLACEHOLDER: &str = "N/A";
pub const NOT_FOUND_TITLE: &str = "Element Not Found";
pub const NO_FACTS: &str = "No interesting facts available.";
pub const NO_COMMON_USES: &str = "No common uses available.";
pub const DETAIL_PAGE: &str = "element-details";

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\((\d{4})\)").expect("valid regex"));
static YEAR_STRIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\(\d{4}\)\s*").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Discovery {
    pub discoverer: String,
    pub year: String,
}

/// Splits `"Marie Curie (1898)"` into discoverer and year.
pub fn parse_discovery(raw: Option<&str>) -> Discovery {
    let Some(raw) = present_str(raw) else {
        return Discovery {
            discoverer: PLACEHOLDER.to_string(),
            year: PLACEHOLDER.to_string(),
        };
    };
    match YEAR_RE.captures(&raw).and_then(|c| c.get(1)) {
        Some(year) => Discovery {
            discoverer: YEAR_STRIP_RE.replace(&raw, " ").trim().to_string(),
            year: year.as_str().to_string(),
        },
        None => Discovery {
            discoverer: raw,
            year: PLACEHOLDER.to_string(),
        },
    }
}

/// A value slot whose container row is hidden when the value is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub text: String,
    pub visible: bool,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            text: PLACEHOLDER.to_string(),
            visible: false,
        }
    }
}

impl Field {
    fn set(&mut self, value: Option<String>, unit: &str) {
        match value {
            Some(v) => {
                self.text = format!("{v}{unit}");
                self.visible = true;
            }
            None => *self = Field::default(),
        }
    }
}

/// An ordered list slot with a heading that can be hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section<T> {
    pub visible: bool,
    pub items: Vec<T>,
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Self {
            visible: false,
            items: Vec::new(),
        }
    }
}

impl<T> Section<T> {
    /// Replaces the items; an empty list hides the section.
    fn fill(&mut self, items: impl IntoIterator<Item = T>) {
        self.items.clear();
        self.items.extend(items);
        self.visible = !self.items.is_empty();
    }
}

impl Section<String> {
    /// Replaces the items; an empty list shows a single placeholder item.
    fn fill_or(&mut self, items: &[String], placeholder: &str) {
        self.fill(items.iter().cloned());
        if self.items.is_empty() {
            self.items.push(placeholder.to_string());
        }
        self.visible = true;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IsotopeCard {
    pub label: String,
    pub abundance: Option<String>,
    pub half_life: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompoundItem {
    pub name: String,
    pub formula: Option<String>,
    pub properties: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetailLink {
    pub href: String,
    pub text: String,
}

/// The slots of the modal and of the standalone details page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetailSlots {
    pub symbol: String,
    pub name: String,
    pub atomic_number: String,
    pub atomic_mass: String,
    pub group: String,
    pub category: String,
    pub discovered_by: String,
    pub discovery_year: String,
    pub density: Field,
    pub melting_point: Field,
    pub boiling_point: Field,
    pub appearance: Field,
    pub isotopes: Section<IsotopeCard>,
    pub key_properties: Section<String>,
    pub uses: Section<String>,
    pub compounds: Section<CompoundItem>,
    pub interesting_facts: Section<String>,
    pub common_uses: Section<String>,
    pub detail_link: Option<DetailLink>,
}

impl DetailSlots {
    pub fn for_record(record: &ElementRecord) -> Self {
        let mut slots = Self::default();
        slots.populate(record);
        slots
    }

    pub fn not_found() -> Self {
        let mut slots = Self::default();
        slots.show_not_found();
        slots
    }

    pub fn is_populated(&self) -> bool {
        !self.symbol.is_empty()
    }

    pub fn populate(&mut self, record: &ElementRecord) {
        self.symbol = record.symbol.clone();
        self.name = record.name.clone();
        self.atomic_number = record.atomic_number_text();
        self.atomic_mass = present(record.atomic_mass.as_ref()).unwrap_or_default();
        self.group = or_placeholder(present(record.group.as_ref()));
        self.category = or_placeholder(present_str(record.category.as_deref()));

        let discovery = parse_discovery(record.discovered_by.as_deref());
        self.discovered_by = discovery.discoverer;
        self.discovery_year = discovery.year;

        self.density.set(present(record.density.as_ref()), " g/cm³");
        self.melting_point.set(present(record.melting_point.as_ref()), " °C");
        self.boiling_point.set(present(record.boiling_point.as_ref()), " °C");
        self.appearance.set(present_str(record.appearance.as_deref()), "");

        self.isotopes.fill(record.isotopes.iter().map(|iso| IsotopeCard {
            label: present_str(iso.isotope.as_deref()).unwrap_or_else(|| "Isotope".to_string()),
            abundance: present(iso.abundance.as_ref()),
            half_life: present(iso.half_life.as_ref()),
        }));
        self.key_properties
            .fill(record.key_properties.iter().map(|p| p.display_text()));
        self.uses.fill(record.uses.iter().cloned());
        self.compounds.fill(record.compounds.iter().map(|c| CompoundItem {
            name: present_str(c.name.as_deref()).unwrap_or_else(|| "Compound".to_string()),
            formula: present_str(c.formula.as_deref()),
            properties: present_str(c.properties.as_deref()),
        }));
        self.interesting_facts.fill_or(&record.interesting_facts, NO_FACTS);
        self.common_uses.fill_or(&record.common_uses, NO_COMMON_USES);

        self.detail_link = Some(DetailLink {
            href: detail_href(&record.symbol),
            text: format!("View more about {}", record.name),
        });
    }

    pub fn show_not_found(&mut self) {
        *self = Self::default();
        self.name = NOT_FOUND_TITLE.to_string();
    }
}

pub fn detail_href(symbol: &str) -> String {
    format!("{DETAIL_PAGE}?symbol={symbol}")
}

fn or_placeholder(value: Option<String>) -> String {
    value.unwrap_or_else(|| PLACEHOLDER.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open,
}

/// Where a click inside the modal overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    Content,
}

/// The element dialog. Its slots persist across open/close; opening again
/// re-populates them in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    state: ModalState,
    slots: DetailSlots,
}

impl Default for Modal {
    fn default() -> Self {
        Self {
            state: ModalState::Closed,
            slots: DetailSlots::default(),
        }
    }
}

impl Modal {
    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    pub fn slots(&self) -> &DetailSlots {
        &self.slots
    }

    pub fn open(&mut self, record: Option<&ElementRecord>) {
        match record {
            Some(r) => self.slots.populate(r),
            None => self.slots.show_not_found(),
        }
        self.state = ModalState::Open;
    }

    pub fn close(&mut self) {
        self.state = ModalState::Closed;
    }

    pub fn click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Backdrop {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> ElementRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_discovery_year_extraction() {
        assert_eq!(
            parse_discovery(Some("Marie Curie (1898)")),
            Discovery { discoverer: "Marie Curie".into(), year: "1898".into() }
        );
        assert_eq!(
            parse_discovery(Some("Henry Cavendish (1766) in London")),
            Discovery { discoverer: "Henry Cavendish in London".into(), year: "1766".into() }
        );
        assert_eq!(
            parse_discovery(Some("Ancient")),
            Discovery { discoverer: "Ancient".into(), year: "N/A".into() }
        );
        assert_eq!(
            parse_discovery(Some("Someone (c. 800)")),
            Discovery { discoverer: "Someone (c. 800)".into(), year: "N/A".into() }
        );
        assert_eq!(
            parse_discovery(None),
            Discovery { discoverer: "N/A".into(), year: "N/A".into() }
        );
    }

    #[test]
    fn test_optional_fields_hide_rows() {
        let slots = DetailSlots::for_record(&record(
            r#"{"symbol": "Fe", "name": "Iron", "atomicNumber": 26, "density": 7.874, "meltingPoint": 1538}"#,
        ));
        assert_eq!(slots.density, Field { text: "7.874 g/cm³".into(), visible: true });
        assert_eq!(slots.melting_point.text, "1538 °C");
        assert_eq!(slots.boiling_point, Field { text: "N/A".into(), visible: false });
        assert!(!slots.appearance.visible);
        assert_eq!(slots.group, "N/A");
        assert_eq!(slots.category, "N/A");
        assert_eq!(slots.atomic_mass, "");
        assert_eq!(
            slots.detail_link,
            Some(DetailLink {
                href: "element-details?symbol=Fe".into(),
                text: "View more about Iron".into(),
            })
        );
    }

    #[test]
    fn test_isotope_cards_in_order() {
        let slots = DetailSlots::for_record(&record(
            r#"{"symbol": "C", "name": "Carbon", "isotopes": [
                {"isotope": "C-12", "abundance": "98.9%"},
                {"isotope": "C-14", "halfLife": "5730 years"}
            ]}"#,
        ));
        assert!(slots.isotopes.visible);
        assert_eq!(slots.isotopes.items.len(), 2);
        assert_eq!(slots.isotopes.items[0].label, "C-12");
        assert_eq!(slots.isotopes.items[0].abundance.as_deref(), Some("98.9%"));
        assert_eq!(slots.isotopes.items[0].half_life, None);
        assert_eq!(slots.isotopes.items[1].half_life.as_deref(), Some("5730 years"));
    }

    #[test]
    fn test_no_isotopes_hides_heading() {
        let slots = DetailSlots::for_record(&record(r#"{"symbol": "Og", "name": "Oganesson"}"#));
        assert!(!slots.isotopes.visible);
        assert!(slots.isotopes.items.is_empty());
        assert!(!slots.uses.visible);
        assert!(!slots.key_properties.visible);
        assert_eq!(slots.interesting_facts.items, vec![NO_FACTS.to_string()]);
        assert_eq!(slots.common_uses.items, vec![NO_COMMON_USES.to_string()]);
    }

    #[test]
    fn test_repopulate_clears_previous_lists() {
        let mut slots = DetailSlots::default();
        slots.populate(&record(
            r#"{"symbol": "U", "name": "Uranium", "density": 19.1,
                "isotopes": [{"isotope": "U-235"}, {"isotope": "U-238"}],
                "uses": ["Nuclear fuel"], "interesting_facts": ["Named after Uranus"],
                "compounds": [{"name": "Uranium hexafluoride", "formula": "UF_6"}]}"#,
        ));
        assert_eq!(slots.isotopes.items.len(), 2);
        assert_eq!(slots.compounds.items[0].formula.as_deref(), Some("UF_6"));

        slots.populate(&record(r#"{"symbol": "Ar", "name": "Argon"}"#));
        assert!(slots.isotopes.items.is_empty());
        assert!(slots.uses.items.is_empty());
        assert!(slots.compounds.items.is_empty());
        assert!(!slots.density.visible);
        assert_eq!(slots.interesting_facts.items, vec![NO_FACTS.to_string()]);
    }

    #[test]
    fn test_not_found_resets_slots() {
        let mut slots = DetailSlots::for_record(&record(r#"{"symbol": "Fe", "name": "Iron"}"#));
        slots.show_not_found();
        assert_eq!(slots.name, NOT_FOUND_TITLE);
        assert!(!slots.is_populated());
        assert_eq!(slots.detail_link, None);
    }

    #[test]
    fn test_modal_transitions() {
        let fe = record(r#"{"symbol": "Fe", "name": "Iron"}"#);
        let cu = record(r#"{"symbol": "Cu", "name": "Copper"}"#);
        let mut modal = Modal::default();
        assert_eq!(modal.state(), ModalState::Closed);

        modal.open(Some(&fe));
        assert!(modal.is_open());
        modal.click(ClickTarget::Content);
        assert!(modal.is_open());

        modal.open(Some(&cu));
        assert!(modal.is_open());
        assert_eq!(modal.slots().name, "Copper");

        modal.click(ClickTarget::Backdrop);
        assert_eq!(modal.state(), ModalState::Closed);

        modal.open(None);
        assert!(modal.is_open());
        assert_eq!(modal.slots().name, NOT_FOUND_TITLE);
        modal.close();
        assert!(!modal.is_open());
    }
}
