use std::collections::btree_map::Iter;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};

use log::{debug, warn};
use regex::{NoExpand, Regex};
use strum::{Display as StrumDisplay, EnumString};

/// How fresh Boolean names are assigned to atomic propositions.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, EnumString, StrumDisplay)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NamingScheme {
    /// The proposition at (0-based) position `i` of the extracted list is named `p{i+1}`.
    /// A repeated proposition keeps the name of its last occurrence.
    #[default]
    Appearance,
    /// Distinct propositions are named `p1, p2, ...` in lexicographic order.
    Sorted,
}

/// Mapping from proposition text to its Boolean name, ordered by proposition text.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PropMap {
    names: BTreeMap<String, String>,
}

impl PropMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build<S: AsRef<str>>(props: &[S], scheme: NamingScheme) -> Self {
        let mut map = Self::new();
        match scheme {
            NamingScheme::Appearance => {
                for (i, prop) in props.iter().enumerate() {
                    map.insert(prop.as_ref(), format!("p{}", i + 1));
                }
            }
            NamingScheme::Sorted => {
                let distinct: BTreeSet<&str> = props.iter().map(|p| p.as_ref()).collect();
                for (i, prop) in distinct.into_iter().enumerate() {
                    map.insert(prop, format!("p{}", i + 1));
                }
            }
        }
        debug!("Built {} proposition names using '{}' scheme", map.len(), scheme);
        map
    }

    pub fn insert(&mut self, prop: impl Into<String>, name: impl Into<String>) {
        self.names.insert(prop.into(), name.into());
    }

    /// Looks up the Boolean name of a proposition.
    pub fn get(&self, prop: &str) -> Option<&str> {
        self.names.get(prop).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, String> {
        self.names.iter()
    }
}

impl<'a> IntoIterator for &'a PropMap {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for PropMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (prop, name) in self.iter() {
            map.entry(&format_args!("{}", prop), &format_args!("{}", name));
        }
        map.finish()
    }
}

/// Replaces every whole-word occurrence of each proposition with its Boolean name.
///
/// Entries are applied in map order. Proposition text is matched literally:
/// the `.` in `x >= 0.3` does not match an arbitrary character. Word boundaries are ASCII.
pub fn rename_atomic_props(formula: &str, map: &PropMap) -> String {
    let mut result = formula.to_string();
    for (prop, name) in map.iter() {
        let pattern = format!(r"(?-u:\b){}(?-u:\b)", regex::escape(prop));
        let re = match Regex::new(&pattern) {
            Ok(re) => re,
            Err(e) => {
                warn!("Skipping proposition {:?}: {}", prop, e);
                continue;
            }
        };
        result = re.replace_all(&result, NoExpand(name)).into_owned();
    }
    debug!("Renamed {:?} into {:?}", formula, result);
    result
}
