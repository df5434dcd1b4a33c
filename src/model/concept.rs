//! Derived concept records folded out of the triple store.

use std::collections::{BTreeMap, HashMap};

/// Sentinel language bucket for literals with no language tag. Excluded
/// from `available_languages`; its labels apply to every content language.
pub const NO_LANGUAGE: &str = "none";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConceptKind {
    Concept,
    ConceptScheme,
}

/// Labels for one language. `alt` and `hidden` are insertion-ordered,
/// deduplicated sets; the first prefLabel seen for a language wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    pub pref: Option<String>,
    pub alt: Vec<String>,
    pub hidden: Vec<String>,
}

impl LabelSet {
    pub fn set_pref(&mut self, text: &str) {
        if self.pref.is_none() {
            self.pref = Some(text.to_string());
        }
    }

    pub fn add_alt(&mut self, text: &str) {
        if !self.alt.iter().any(|t| t == text) {
            self.alt.push(text.to_string());
        }
    }

    pub fn add_hidden(&mut self, text: &str) {
        if !self.hidden.iter().any(|t| t == text) {
            self.hidden.push(text.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pref.is_none() && self.alt.is_empty() && self.hidden.is_empty()
    }
}

/// A SKOS concept or concept scheme, keyed by its URI. Created during
/// extraction and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concept {
    pub id: String,
    pub uri: String,
    pub kind: ConceptKind,
    /// Language tag (or [`NO_LANGUAGE`]) -> labels in that language.
    pub labels: BTreeMap<String, LabelSet>,
    /// First `skos:definition` literal per language.
    pub definitions: BTreeMap<String, String>,
    /// `skos:scopeNote` literals per language, insertion-ordered.
    pub scope_notes: BTreeMap<String, Vec<String>>,
    /// `dc:`/`dcterms:` titles per language (concept schemes only).
    pub titles: BTreeMap<String, String>,
    /// `dc:`/`dcterms:` descriptions per language (concept schemes only).
    pub descriptions: BTreeMap<String, String>,
    pub notation: Option<String>,
    /// Resolved concept ids, insertion-ordered, deduplicated. Only
    /// explicitly asserted relations -- no symmetric closure.
    pub broader: Vec<String>,
    pub narrower: Vec<String>,
    pub related: Vec<String>,
    pub in_scheme: Vec<String>,
}

impl Concept {
    pub fn new(id: String, uri: String, kind: ConceptKind) -> Self {
        Self {
            id,
            uri,
            kind,
            labels: BTreeMap::new(),
            definitions: BTreeMap::new(),
            scope_notes: BTreeMap::new(),
            titles: BTreeMap::new(),
            descriptions: BTreeMap::new(),
            notation: None,
            broader: Vec::new(),
            narrower: Vec::new(),
            related: Vec::new(),
            in_scheme: Vec::new(),
        }
    }

    /// Display label with fallback: requested language, then untagged, then
    /// the first language carrying a prefLabel.
    pub fn pref_label_for(&self, lang: &str) -> Option<&str> {
        if let Some(set) = self.labels.get(lang) {
            if let Some(pref) = &set.pref {
                return Some(pref);
            }
        }
        if let Some(set) = self.labels.get(NO_LANGUAGE) {
            if let Some(pref) = &set.pref {
                return Some(pref);
            }
        }
        self.labels.values().find_map(|set| set.pref.as_deref())
    }
}

/// Concepts in extraction order with O(1) lookup by id.
///
/// Frozen once the extractor returns it; the index builders and the emitter
/// only read.
#[derive(Debug, Default)]
pub struct ConceptSet {
    items: Vec<Concept>,
    by_id: HashMap<String, usize>,
}

impl ConceptSet {
    pub fn push(&mut self, concept: Concept) {
        self.by_id.insert(concept.id.clone(), self.items.len());
        self.items.push(concept);
    }

    pub fn get(&self, id: &str) -> Option<&Concept> {
        self.by_id.get(id).map(|&i| &self.items[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Concepts in extraction order.
    pub fn iter(&self) -> impl Iterator<Item = &Concept> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
