use crate::annotate::{Segments, annotate};
use crate::definition::TooltipDefinition;
use ahash::AHashMap;

/// Case-insensitive dictionary of terms and their explanations.
///
/// Keys are stored lowercased. When a term is defined more than once
/// (in any casing), the last definition wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TooltipIndex {
    entries: AHashMap<String, String>,
}

impl TooltipIndex {
    pub fn new<I>(definitions: I) -> Self
    where
        I: IntoIterator<Item = TooltipDefinition>,
    {
        let mut entries = AHashMap::new();
        for def in definitions {
            entries.insert(def.term.to_lowercase(), def.explanation);
        }
        Self { entries }
    }

    /// Looks up the explanation for `term`, ignoring case.
    pub fn explain(&self, term: &str) -> Option<&str> {
        self.entries.get(&term.to_lowercase()).map(String::as_str)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.explain(term).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(lowercased term, explanation)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Splits `text` into plain and annotated segments. See [`annotate`].
    pub fn annotate<'a>(&'a self, text: &'a str) -> Segments<'a> {
        annotate(text, self)
    }
}
