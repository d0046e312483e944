use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Alias (already lowercased) to the canonical substring matched against
/// each record's `category`.
pub static CATEGORY_SYNONYMS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("metals", "metal"),
        ("metal", "metal"),
        ("gases", "gas"),
        ("gas", "gas"),
        ("lanthanide", "lanthanide"),
        ("lanthanides", "lanthanide"),
        ("actinide", "actinide"),
        ("actinides", "actinide"),
        ("alkali metal", "alkali metal"),
        ("alkali metals", "alkali metal"),
        ("alkalimetal", "alkali metal"),
        ("alkalimetals", "alkali metal"),
        ("alkaline earth metal", "alkaline earth metal"),
        ("alkaline earth metals", "alkaline earth metal"),
        ("alkalineearthmetal", "alkaline earth metal"),
        ("alkalineearthmetals", "alkaline earth metal"),
        ("transitionmetal", "transition metal"),
        ("transitionmetals", "transition metal"),
        ("posttransitionmetal", "post-transition metal"),
        ("posttransitionmetals", "post-transition metal"),
        ("transition metal", "transition metal"),
        ("transition metals", "transition metal"),
        ("post-transition metal", "post-transition metal"),
        ("post-transition metals", "post-transition metal"),
        ("noble gas", "noble gas"),
        ("noble gases", "noble gas"),
        ("noblegas", "noble gas"),
        ("metalloid", "metalloid"),
        ("metalloids", "metalloid"),
        ("halogen", "halogen"),
        ("halogens", "halogen"),
        ("nonmetals", "nonmetal"),
        ("nonmetal", "nonmetal"),
    ])
});

/// Resolves a normalized (trimmed, lowercased) query to a canonical category.
///
/// The compacted form (no whitespace, one trailing `s` dropped) is tried
/// first, then the query as typed.
pub fn canonical_category(normalized: &str) -> Option<&'static str> {
    let compact: String = normalized.chars().filter(|c| !c.is_whitespace()).collect();
    let compact = compact.strip_suffix('s').unwrap_or(&compact);
    CATEGORY_SYNONYMS
        .get(compact)
        .or_else(|| CATEGORY_SYNONYMS.get(normalized))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_and_spacing_variants() {
        assert_eq!(canonical_category("halogens"), Some("halogen"));
        assert_eq!(canonical_category("alkali metals"), Some("alkali metal"));
        assert_eq!(canonical_category("alkalimetal"), Some("alkali metal"));
        assert_eq!(canonical_category("alkaline earth metals"), Some("alkaline earth metal"));
        assert_eq!(canonical_category("transition  metals"), Some("transition metal"));
        assert_eq!(canonical_category("post-transition metals"), Some("post-transition metal"));
        assert_eq!(canonical_category("noble gases"), Some("noble gas"));
        assert_eq!(canonical_category("noble gas"), Some("noble gas"));
        assert_eq!(canonical_category("gases"), Some("gas"));
    }

    #[test]
    fn test_symbols_and_names_are_not_categories() {
        assert_eq!(canonical_category("he"), None);
        assert_eq!(canonical_category("as"), None);
        assert_eq!(canonical_category("ga"), None);
        assert_eq!(canonical_category("iron"), None);
        assert_eq!(canonical_category(""), None);
    }
}
