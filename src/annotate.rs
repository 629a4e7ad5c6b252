//! Inline term annotation.
//!
//! Free text is split into maximal runs of word characters and maximal runs of
//! everything else. Each word run is looked up (case-insensitively) in a
//! [`TooltipIndex`]; a hit yields a [`Segment::Term`] carrying the explanation.
//! Concatenating the text of all segments always reproduces the input exactly.

use crate::graph::TooltipIndex;
use itertools::Itertools;
use std::fmt;
use std::iter::FusedIterator;

/// A piece of annotated text, borrowing from the input and the tooltip index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Term { text: &'a str, explanation: &'a str },
}

impl<'a> Segment<'a> {
    /// The raw input text covered by this segment.
    pub fn text(&self) -> &'a str {
        match *self {
            Segment::Plain(text) | Segment::Term { text, .. } => text,
        }
    }

    pub fn explanation(&self) -> Option<&'a str> {
        match *self {
            Segment::Plain(_) => None,
            Segment::Term { explanation, .. } => Some(explanation),
        }
    }

    pub fn is_annotated(&self) -> bool {
        matches!(self, Segment::Term { .. })
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Annotates `text` against `tooltips`.
///
/// The returned iterator is lazy and carries no state beyond its position in
/// `text`; calling `annotate` again (or cloning the iterator) starts over.
pub fn annotate<'a>(text: &'a str, tooltips: &'a TooltipIndex) -> Segments<'a> {
    Segments {
        rest: text,
        tooltips,
    }
}

/// Iterator over the [`Segment`]s of a text. Created by [`annotate`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
    tooltips: &'a TooltipIndex,
}

impl<'a> Segments<'a> {
    /// The distinct `(term as written, explanation)` pairs in order of first
    /// appearance. Terms that differ only in case are reported once.
    pub fn terms(self) -> Vec<(&'a str, &'a str)> {
        self.filter_map(|segment| match segment {
            Segment::Term { text, explanation } => Some((text, explanation)),
            Segment::Plain(_) => None,
        })
        .unique_by(|(text, _)| text.to_lowercase())
        .collect()
    }

    /// Renders the segments back into a string, letting `decorate` wrap every
    /// annotated term.
    pub fn render_with<F>(self, mut decorate: F) -> String
    where
        F: FnMut(&'a str, &'a str) -> String,
    {
        self.map(|segment| match segment {
            Segment::Plain(text) => text.to_string(),
            Segment::Term { text, explanation } => decorate(text, explanation),
        })
        .join("")
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest: &'a str = self.rest;
        let tooltips: &'a TooltipIndex = self.tooltips;

        let first = rest.chars().next()?;
        let in_word = is_word_char(first);
        let end = rest
            .char_indices()
            .find(|&(_, c)| is_word_char(c) != in_word)
            .map_or(rest.len(), |(i, _)| i);

        let (run, tail) = rest.split_at(end);
        self.rest = tail;

        if in_word {
            if let Some(explanation) = tooltips.explain(run) {
                return Some(Segment::Term {
                    text: run,
                    explanation,
                });
            }
        }
        Some(Segment::Plain(run))
    }
}

impl FusedIterator for Segments<'_> {}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::TooltipDefinition;

    fn index(terms: &[(&str, &str)]) -> TooltipIndex {
        TooltipIndex::new(terms.iter().map(|(term, explanation)| TooltipDefinition {
            term: term.to_string(),
            explanation: explanation.to_string(),
        }))
    }

    #[test]
    fn splits_into_word_and_non_word_runs() {
        let tooltips = index(&[]);
        let parts: Vec<_> = annotate("Hallo, wereld!  ok", &tooltips)
            .map(|s| s.text())
            .collect();
        assert_eq!(parts, vec!["Hallo", ", ", "wereld", "!  ", "ok"]);
    }

    #[test]
    fn non_ascii_letters_belong_to_the_word() {
        let tooltips = index(&[("coop", "Vereniging")]);
        assert!(!annotate("coöperatie", &tooltips).any(|s| s.is_annotated()));
        let parts: Vec<_> = annotate("coöperatie", &tooltips).collect();
        assert_eq!(parts, vec![Segment::Plain("coöperatie")]);
    }

    #[test]
    fn empty_text_yields_nothing() {
        let tooltips = index(&[("vve", "Vereniging van Eigenaars")]);
        assert_eq!(annotate("", &tooltips).count(), 0);
    }

    #[test]
    fn terms_are_deduplicated_case_insensitively() {
        let tooltips = index(&[("vve", "Vereniging van Eigenaars")]);
        let terms = annotate("De VvE en de vve.", &tooltips).terms();
        assert_eq!(terms, vec![("VvE", "Vereniging van Eigenaars")]);
    }
}
