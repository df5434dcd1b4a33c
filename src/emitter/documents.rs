//! The JSON documents the client application loads.
//!
//! One `concepts_{lang}.json` and one `labels_to_concept_{lang}.json` per
//! content language, plus a single `thesaurus_metadata.json`. Documents are
//! a pure function of the frozen in-memory structures: fresh generation,
//! full overwrite, byte-identical across runs for unchanged input.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use super::{write_file, WriteReport};
use crate::index::labels::build_label_index;
use crate::index::metadata::MetadataRecord;
use crate::model::concept::{Concept, ConceptSet, NO_LANGUAGE};

/// One concept as it appears in `concepts_{lang}.json`: flat and shallow,
/// relations as id arrays, only the requested language's fields. Hidden
/// labels are searchable but never emitted.
#[derive(Debug, Serialize)]
pub struct ConceptDoc<'a> {
    #[serde(rename = "prefLabel", skip_serializing_if = "Option::is_none")]
    pref_label: Option<&'a str>,
    #[serde(rename = "altLabels")]
    alt_labels: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    definition: Option<&'a str>,
    #[serde(rename = "scopeNotes")]
    scope_notes: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notation: Option<&'a str>,
    broader: &'a [String],
    narrower: &'a [String],
    related: &'a [String],
    #[serde(rename = "inScheme")]
    in_scheme: &'a [String],
}

fn doc_for<'a>(concept: &'a Concept, lang: &str) -> ConceptDoc<'a> {
    let mut alt_labels: Vec<&'a str> = Vec::new();
    let mut scope_notes: Vec<&'a str> = Vec::new();
    // Untagged labels and notes apply to every language.
    for bucket in [lang, NO_LANGUAGE] {
        if let Some(set) = concept.labels.get(bucket) {
            for alt in &set.alt {
                if !alt_labels.contains(&alt.as_str()) {
                    alt_labels.push(alt);
                }
            }
        }
        if let Some(notes) = concept.scope_notes.get(bucket) {
            for note in notes {
                if !scope_notes.contains(&note.as_str()) {
                    scope_notes.push(note);
                }
            }
        }
    }

    ConceptDoc {
        pref_label: concept.pref_label_for(lang),
        alt_labels,
        definition: concept
            .definitions
            .get(lang)
            .or_else(|| concept.definitions.get(NO_LANGUAGE))
            .map(String::as_str),
        scope_notes,
        notation: concept.notation.as_deref(),
        broader: &concept.broader,
        narrower: &concept.narrower,
        related: &concept.related,
        in_scheme: &concept.in_scheme,
    }
}

/// Write `concepts_{lang}.json` and `labels_to_concept_{lang}.json` for one
/// content language. Every concept appears in every language document so
/// relation ids always resolve client-side.
pub fn write_language_documents(
    concepts: &ConceptSet,
    lang: &str,
    out_dir: &Path,
    report: &mut WriteReport,
) {
    let docs: BTreeMap<&str, ConceptDoc> = concepts
        .iter()
        .map(|concept| (concept.id.as_str(), doc_for(concept, lang)))
        .collect();
    write_json(&out_dir.join(format!("concepts_{lang}.json")), &docs, report);

    let index = build_label_index(concepts, lang);
    write_json(
        &out_dir.join(format!("labels_to_concept_{lang}.json")),
        &index,
        report,
    );
}

/// Write the language-independent `thesaurus_metadata.json`.
pub fn write_metadata(metadata: &MetadataRecord, out_dir: &Path, report: &mut WriteReport) {
    write_json(&out_dir.join("thesaurus_metadata.json"), metadata, report);
}

fn write_json<T: Serialize>(path: &Path, value: &T, report: &mut WriteReport) {
    let result = serde_json::to_vec_pretty(value)
        .map_err(std::io::Error::other)
        .and_then(|mut bytes| {
            bytes.push(b'\n');
            write_file(path, &bytes)
        });
    report.record(path.to_path_buf(), result);
}
