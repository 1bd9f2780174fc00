use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches atomic propositions such as `y < 2`, `z > 1` or `x >= 0.3`.
/// Identifiers and digits are ASCII only.
static ATOMIC_PROP: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?-u)\w+\s*[<>]=?\s*[\d.]+").unwrap());

/// Extracts real-valued atomic propositions from an STL formula.
///
/// Propositions are returned verbatim, in the order they appear in the formula.
/// Duplicates are kept.
pub fn extract_atomic_props(formula: &str) -> Vec<String> {
    let props: Vec<String> = ATOMIC_PROP.find_iter(formula).map(|m| m.as_str().to_string()).collect();
    debug!("Extracted {} atomic propositions from {:?}", props.len(), formula);
    props
}
