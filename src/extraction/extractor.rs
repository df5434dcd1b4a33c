//! Concept extraction engine: folds the triple store into concept records.
//!
//! The [`ConceptExtractor`] runs two passes over a [`TripleStore`]. The
//! first scans `rdf:type` triples for subjects typed as `skos:Concept` or
//! `skos:ConceptScheme` and mints an id for each; the second folds every
//! triple of each typed subject into its record by predicate. Relation
//! objects resolve through the pass-one URI-to-id map -- a target never
//! typed as a concept drops the relation and increments the dangling
//! diagnostic instead.

use std::collections::{HashMap, HashSet};

use crate::model::concept::{Concept, ConceptKind, ConceptSet, NO_LANGUAGE};
use crate::model::graph::{Term, Triple, TripleStore};
use crate::model::namespace::NamespaceTable;
use crate::model::vocab::{dc, dcterms, skos, standard};

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

/// A relation triple whose target was never extracted as a concept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingRelation {
    pub concept_id: String,
    pub predicate: String,
    pub target_uri: String,
}

/// Non-fatal findings surfaced after extraction. Degraded data is reported
/// here instead of aborting the run.
#[derive(Debug, Default)]
pub struct ExtractionDiagnostics {
    /// Subjects carrying SKOS predicates but never typed as Concept or
    /// ConceptScheme.
    pub untyped_subjects: Vec<String>,
    /// Relations dropped because their target is not an extracted concept.
    pub dangling_relations: Vec<DanglingRelation>,
}

impl ExtractionDiagnostics {
    pub fn dangling_count(&self) -> usize {
        self.untyped_subjects.len() + self.dangling_relations.len()
    }

    pub fn is_clean(&self) -> bool {
        self.untyped_subjects.is_empty() && self.dangling_relations.is_empty()
    }
}

/// Everything the extractor derives from one store.
#[derive(Debug)]
pub struct Extraction {
    pub concepts: ConceptSet,
    pub schemes: ConceptSet,
    pub diagnostics: ExtractionDiagnostics,
}

// ---------------------------------------------------------------------------
// ConceptExtractor
// ---------------------------------------------------------------------------

/// Walks a frozen [`TripleStore`] and builds the concept and scheme sets.
pub struct ConceptExtractor<'a> {
    store: &'a TripleStore,
    namespaces: &'a NamespaceTable,
}

impl<'a> ConceptExtractor<'a> {
    pub fn new(store: &'a TripleStore, namespaces: &'a NamespaceTable) -> Self {
        Self { store, namespaces }
    }

    /// Run the full extraction. Best-effort: malformed or unexpected
    /// triples are skipped, dangling references are collected in the
    /// diagnostics.
    pub fn extract(&self) -> Extraction {
        let mut diagnostics = ExtractionDiagnostics::default();

        // Pass 1: typed subjects in store order, one id each.
        let mut order: Vec<(&str, ConceptKind)> = Vec::new();
        let mut concept_ids: HashMap<&str, String> = HashMap::new();
        let mut scheme_ids: HashMap<&str, String> = HashMap::new();
        let mut used_ids: HashSet<String> = HashSet::new();

        for subject in self.store.subjects() {
            let Some(kind) = self.typed_kind(subject) else {
                continue;
            };
            let id = self.mint_id(subject, &mut used_ids);
            match kind {
                ConceptKind::Concept => concept_ids.insert(subject, id),
                ConceptKind::ConceptScheme => scheme_ids.insert(subject, id),
            };
            order.push((subject, kind));
        }

        // Pass 2: fold each typed subject's triples into its record.
        let mut concepts = ConceptSet::default();
        let mut schemes = ConceptSet::default();
        for (uri, kind) in order {
            let id = match kind {
                ConceptKind::Concept => &concept_ids[uri],
                ConceptKind::ConceptScheme => &scheme_ids[uri],
            };
            let mut record = Concept::new(id.clone(), uri.to_string(), kind);
            for triple in self.store.triples_of(uri) {
                fold(
                    &mut record,
                    triple,
                    &concept_ids,
                    &scheme_ids,
                    &mut diagnostics,
                );
            }
            match kind {
                ConceptKind::Concept => concepts.push(record),
                ConceptKind::ConceptScheme => schemes.push(record),
            }
        }

        // Subjects that use SKOS predicates without ever being typed.
        for subject in self.store.subjects() {
            if concept_ids.contains_key(subject) || scheme_ids.contains_key(subject) {
                continue;
            }
            if self
                .store
                .triples_of(subject)
                .iter()
                .any(|t| t.predicate.starts_with(skos::NS))
            {
                diagnostics.untyped_subjects.push(subject.to_string());
            }
        }

        Extraction {
            concepts,
            schemes,
            diagnostics,
        }
    }

    fn typed_kind(&self, subject: &str) -> Option<ConceptKind> {
        for triple in self.store.triples_of(subject) {
            if triple.predicate != standard::RDF_TYPE {
                continue;
            }
            if let Term::UriRef(class) = &triple.object {
                match class.as_str() {
                    skos::CONCEPT => return Some(ConceptKind::Concept),
                    skos::CONCEPT_SCHEME => return Some(ConceptKind::ConceptScheme),
                    _ => {}
                }
            }
        }
        None
    }

    fn mint_id(&self, uri: &str, used: &mut HashSet<String>) -> String {
        let id = self.namespaces.concept_id(uri);
        if used.insert(id.clone()) {
            return id;
        }
        // Two subjects abbreviated to the same id: the later one keeps its
        // full URI so both stay addressable.
        let full = self.namespaces.full_id(uri);
        used.insert(full.clone());
        full
    }
}

// ---------------------------------------------------------------------------
// Predicate folding
// ---------------------------------------------------------------------------

fn fold(
    record: &mut Concept,
    triple: &Triple,
    concept_ids: &HashMap<&str, String>,
    scheme_ids: &HashMap<&str, String>,
    diagnostics: &mut ExtractionDiagnostics,
) {
    match triple.predicate.as_str() {
        skos::PREF_LABEL => {
            if let Term::Literal { text, lang } = &triple.object {
                record.labels.entry(lang_key(lang)).or_default().set_pref(text);
            }
        }
        skos::ALT_LABEL => {
            if let Term::Literal { text, lang } = &triple.object {
                record.labels.entry(lang_key(lang)).or_default().add_alt(text);
            }
        }
        skos::HIDDEN_LABEL => {
            if let Term::Literal { text, lang } = &triple.object {
                record
                    .labels
                    .entry(lang_key(lang))
                    .or_default()
                    .add_hidden(text);
            }
        }
        skos::DEFINITION => {
            if let Term::Literal { text, lang } = &triple.object {
                record
                    .definitions
                    .entry(lang_key(lang))
                    .or_insert_with(|| text.clone());
            }
        }
        skos::SCOPE_NOTE => {
            if let Term::Literal { text, lang } = &triple.object {
                let notes = record.scope_notes.entry(lang_key(lang)).or_default();
                if !notes.iter().any(|n| n == text) {
                    notes.push(text.clone());
                }
            }
        }
        skos::NOTATION => {
            if let Term::Literal { text, .. } = &triple.object {
                if record.notation.is_none() {
                    record.notation = Some(text.clone());
                }
            }
        }
        skos::BROADER => resolve_relation(
            &mut record.broader,
            &record.id,
            triple,
            concept_ids,
            diagnostics,
        ),
        skos::NARROWER => resolve_relation(
            &mut record.narrower,
            &record.id,
            triple,
            concept_ids,
            diagnostics,
        ),
        skos::RELATED => resolve_relation(
            &mut record.related,
            &record.id,
            triple,
            concept_ids,
            diagnostics,
        ),
        skos::IN_SCHEME | skos::TOP_CONCEPT_OF => resolve_relation(
            &mut record.in_scheme,
            &record.id,
            triple,
            scheme_ids,
            diagnostics,
        ),
        dc::TITLE | dcterms::TITLE => {
            if record.kind == ConceptKind::ConceptScheme {
                if let Term::Literal { text, lang } = &triple.object {
                    record
                        .titles
                        .entry(lang_key(lang))
                        .or_insert_with(|| text.clone());
                }
            }
        }
        dc::DESCRIPTION | dcterms::DESCRIPTION => {
            if record.kind == ConceptKind::ConceptScheme {
                if let Term::Literal { text, lang } = &triple.object {
                    record
                        .descriptions
                        .entry(lang_key(lang))
                        .or_insert_with(|| text.clone());
                }
            }
        }
        _ => {}
    }
}

/// Resolve a relation object against the ids minted in pass one. Unknown
/// targets are dropped and counted; known targets append once.
fn resolve_relation(
    list: &mut Vec<String>,
    concept_id: &str,
    triple: &Triple,
    ids: &HashMap<&str, String>,
    diagnostics: &mut ExtractionDiagnostics,
) {
    let Term::UriRef(target) = &triple.object else {
        return;
    };
    match ids.get(target.as_str()) {
        Some(id) => {
            if !list.iter().any(|existing| existing == id) {
                list.push(id.clone());
            }
        }
        None => diagnostics.dangling_relations.push(DanglingRelation {
            concept_id: concept_id.to_string(),
            predicate: triple.predicate.clone(),
            target_uri: target.clone(),
        }),
    }
}

/// Bucket key for a literal: lowercased language tag, or the untagged
/// sentinel.
fn lang_key(lang: &Option<String>) -> String {
    match lang {
        Some(tag) => tag.to_ascii_lowercase(),
        None => NO_LANGUAGE.to_string(),
    }
}
