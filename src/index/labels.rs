//! Per-language search index: normalized label text to concept ids.

use std::collections::BTreeMap;

use crate::model::concept::{ConceptSet, NO_LANGUAGE};

/// Normalized label text -> concept ids in extraction order. Serialized
/// as-is into `labels_to_concept_{lang}.json`; BTreeMap keys keep the
/// document byte-stable across runs.
pub type LabelIndex = BTreeMap<String, Vec<String>>;

/// Lowercase, trim, and collapse internal whitespace. Diacritics are
/// preserved.
pub fn normalize_label(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        for c in word.chars() {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Build the label index for one content language.
///
/// Every prefLabel, altLabel, and hiddenLabel in `lang` contributes one
/// entry, as do labels with no language tag, which apply to every language.
/// Ids sharing a normalized text keep extraction order; distinct concepts
/// with identical labels both stay discoverable.
pub fn build_label_index(concepts: &ConceptSet, lang: &str) -> LabelIndex {
    let mut index = LabelIndex::new();
    for concept in concepts.iter() {
        for bucket in [lang, NO_LANGUAGE] {
            let Some(set) = concept.labels.get(bucket) else {
                continue;
            };
            if let Some(pref) = &set.pref {
                insert(&mut index, pref, &concept.id);
            }
            for alt in &set.alt {
                insert(&mut index, alt, &concept.id);
            }
            for hidden in &set.hidden {
                insert(&mut index, hidden, &concept.id);
            }
        }
    }
    index
}

fn insert(index: &mut LabelIndex, text: &str, id: &str) {
    let normalized = normalize_label(text);
    if normalized.is_empty() {
        return;
    }
    let entry = index.entry(normalized).or_default();
    if !entry.iter().any(|existing| existing == id) {
        entry.push(id.to_string());
    }
}
