//! Vocabulary-level metadata assembled after extraction.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::model::concept::{Concept, ConceptSet, NO_LANGUAGE};
use crate::model::namespace::NamespaceTable;

const DEFAULT_TITLE: &str = "SKOS Thesaurus";

/// The `thesaurus_metadata.json` document. Built once; immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataRecord {
    pub title: String,
    pub description: String,
    pub base_uri: String,
    pub available_languages: Vec<String>,
    pub ui_languages: Vec<String>,
}

/// Languages with at least one label across the concept set, sorted
/// lexicographically. The untagged sentinel is never a content language.
pub fn available_languages(concepts: &ConceptSet) -> Vec<String> {
    let mut langs = BTreeSet::new();
    for concept in concepts.iter() {
        for (lang, set) in &concept.labels {
            if lang != NO_LANGUAGE && !set.is_empty() {
                langs.insert(lang.clone());
            }
        }
    }
    langs.into_iter().collect()
}

/// UI languages offered by the assets directory: one
/// `ui_translations_{lang}.json` bundle per language, sorted. Missing or
/// unreadable directories yield no UI languages.
pub fn ui_languages(assets_dir: Option<&Path>) -> Vec<String> {
    let Some(dir) = assets_dir else {
        return Vec::new();
    };
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut langs = BTreeSet::new();
    for entry in entries.flatten() {
        let name = entry.file_name();
        if let Some(lang) = name.to_str().and_then(bundle_language) {
            langs.insert(lang.to_string());
        }
    }
    langs.into_iter().collect()
}

/// `ui_translations_{lang}.json` -> `lang`.
pub fn bundle_language(file_name: &str) -> Option<&str> {
    file_name
        .strip_prefix("ui_translations_")?
        .strip_suffix(".json")
        .filter(|lang| !lang.is_empty())
}

/// Assemble the metadata record. Title and description pass through from
/// the CLI unchanged; when absent they fall back to the first extracted
/// scheme's `dc:`/`dcterms:` fields, then to fixed defaults.
pub fn build_metadata(
    title: Option<&str>,
    description: Option<&str>,
    namespaces: &NamespaceTable,
    schemes: &ConceptSet,
    available_languages: Vec<String>,
    ui_languages: Vec<String>,
) -> MetadataRecord {
    MetadataRecord {
        title: title
            .map(str::to_string)
            .or_else(|| scheme_field(schemes, |scheme| &scheme.titles))
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        description: description
            .map(str::to_string)
            .or_else(|| scheme_field(schemes, |scheme| &scheme.descriptions))
            .unwrap_or_default(),
        base_uri: namespaces.base_uri().to_string(),
        available_languages,
        ui_languages,
    }
}

fn scheme_field<F>(schemes: &ConceptSet, field: F) -> Option<String>
where
    F: Fn(&Concept) -> &BTreeMap<String, String>,
{
    let scheme = schemes.iter().next()?;
    let map = field(scheme);
    map.get("en")
        .or_else(|| map.get(NO_LANGUAGE))
        .or_else(|| map.values().next())
        .cloned()
}
