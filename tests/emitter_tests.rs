//! End-to-end document emission into temporary directories.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use skos2json::emitter::{documents, site, WriteReport};
use skos2json::extraction::extractor::ConceptExtractor;
use skos2json::extraction::loader;
use skos2json::index::metadata;
use skos2json::model::namespace::NamespaceTable;

// ---------------------------------------------------------------------------
// Helpers: run the pipeline into a directory
// ---------------------------------------------------------------------------

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/vocabulary.ttl")
}

fn generate_into(out_dir: &Path) -> WriteReport {
    let store = loader::load_file(&fixture_path(), None).expect("Failed to load fixture");
    let namespaces = NamespaceTable::detect(&store);
    let extraction = ConceptExtractor::new(&store, &namespaces).extract();

    let available = metadata::available_languages(&extraction.concepts);
    let meta = metadata::build_metadata(
        None,
        None,
        &namespaces,
        &extraction.schemes,
        available.clone(),
        Vec::new(),
    );

    let mut report = WriteReport::default();
    for lang in &available {
        documents::write_language_documents(&extraction.concepts, lang, out_dir, &mut report);
    }
    documents::write_metadata(&meta, out_dir, &mut report);
    report
}

fn read_json(path: &Path) -> Value {
    let text = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    serde_json::from_str(&text)
        .unwrap_or_else(|e| panic!("Invalid JSON in {}: {e}", path.display()))
}

// ===========================================================================
// Tests: document set
// ===========================================================================

#[test]
fn expected_documents_written() {
    let dir = tempfile::tempdir().expect("tempdir");
    let report = generate_into(dir.path());
    assert!(report.is_ok(), "No write should fail: {:?}", report.failed);

    for name in [
        "concepts_en.json",
        "concepts_it.json",
        "labels_to_concept_en.json",
        "labels_to_concept_it.json",
        "thesaurus_metadata.json",
    ] {
        assert!(dir.path().join(name).exists(), "Missing document {name}");
    }
    assert_eq!(report.written.len(), 5);
}

#[test]
fn backend_record_shape() {
    let dir = tempfile::tempdir().expect("tempdir");
    generate_into(dir.path());

    let concepts = read_json(&dir.path().join("concepts_en.json"));
    let backend = &concepts["backend"];

    assert_eq!(backend["prefLabel"], "Backend");
    assert_eq!(backend["broader"], serde_json::json!(["software"]));
    assert_eq!(backend["related"], serde_json::json!(["database"]));
    assert_eq!(backend["inScheme"], serde_json::json!(["scheme"]));
    assert_eq!(backend["notation"], "001.2");
    assert_eq!(
        backend["definition"],
        "The data access layer of an application"
    );
    let alts = backend["altLabels"].as_array().expect("altLabels array");
    assert!(alts.contains(&Value::from("Server side")));
    assert!(alts.contains(&Value::from("API")));
}

#[test]
fn hidden_labels_never_emitted() {
    let dir = tempfile::tempdir().expect("tempdir");
    generate_into(dir.path());

    let text = fs::read_to_string(dir.path().join("concepts_en.json")).expect("read");
    assert!(
        !text.contains("bakend"),
        "Hidden labels must stay out of concept documents"
    );
}

#[test]
fn italian_document_filters_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    generate_into(dir.path());

    let concepts = read_json(&dir.path().join("concepts_it.json"));
    let backend = &concepts["backend"];
    assert_eq!(backend["prefLabel"], "Back-end");
    // English-only definition is absent; the untagged altLabel carries over.
    assert!(backend.get("definition").is_none());
    assert_eq!(backend["altLabels"], serde_json::json!(["API"]));

    // software has no Italian label but stays referenceable by id, with a
    // display-label fallback.
    let software = &concepts["software"];
    assert_eq!(software["prefLabel"], "Software");
    assert_eq!(software["narrower"], serde_json::json!(["backend"]));
}

#[test]
fn italian_index_excludes_english_only_labels() {
    let dir = tempfile::tempdir().expect("tempdir");
    generate_into(dir.path());

    let index = read_json(&dir.path().join("labels_to_concept_it.json"));
    let map = index.as_object().expect("index object");
    assert!(map.contains_key("api"));
    assert!(!map.contains_key("software"));
    assert_eq!(index["back-end"], serde_json::json!(["backend"]));
}

#[test]
fn english_index_maps_normalized_labels_to_ids() {
    let dir = tempfile::tempdir().expect("tempdir");
    generate_into(dir.path());

    let index = read_json(&dir.path().join("labels_to_concept_en.json"));
    assert_eq!(index["backend"], serde_json::json!(["backend"]));
    assert_eq!(index["software"], serde_json::json!(["software"]));
}

#[test]
fn no_dangling_ids_in_any_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    generate_into(dir.path());

    for lang in ["en", "it"] {
        let concepts = read_json(&dir.path().join(format!("concepts_{lang}.json")));
        let map = concepts.as_object().expect("concepts object");
        for (id, record) in map {
            for field in ["broader", "narrower", "related"] {
                for target in record[field].as_array().expect("relation array") {
                    let target = target.as_str().expect("relation id");
                    assert!(
                        map.contains_key(target),
                        "{id}.{field} points at unknown id {target} in {lang}"
                    );
                }
            }
        }
    }
}

#[test]
fn metadata_matches_emitted_documents() {
    let dir = tempfile::tempdir().expect("tempdir");
    generate_into(dir.path());

    let meta = read_json(&dir.path().join("thesaurus_metadata.json"));
    assert_eq!(meta["title"], "Software Engineering Thesaurus");
    assert_eq!(meta["base_uri"], "http://example.org/thesaurus/");
    assert_eq!(meta["available_languages"], serde_json::json!(["en", "it"]));

    for lang in meta["available_languages"].as_array().expect("langs") {
        let lang = lang.as_str().expect("lang");
        let doc = read_json(&dir.path().join(format!("concepts_{lang}.json")));
        assert!(
            !doc.as_object().expect("concepts object").is_empty(),
            "concepts_{lang}.json must not be empty"
        );
    }
}

#[test]
fn reruns_are_byte_identical() {
    let first = tempfile::tempdir().expect("tempdir");
    let second = tempfile::tempdir().expect("tempdir");
    generate_into(first.path());
    generate_into(second.path());

    for name in [
        "concepts_en.json",
        "concepts_it.json",
        "labels_to_concept_en.json",
        "labels_to_concept_it.json",
        "thesaurus_metadata.json",
    ] {
        let a = fs::read(first.path().join(name)).expect("read first");
        let b = fs::read(second.path().join(name)).expect("read second");
        assert_eq!(a, b, "Document {name} differs between identical runs");
    }
}

// ===========================================================================
// Tests: write failure reporting
// ===========================================================================

#[test]
fn write_failures_collected_not_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    // The output "directory" is an existing file, so every write fails.
    let blocked = dir.path().join("blocked");
    fs::write(&blocked, "in the way").expect("write");

    let report = generate_into(&blocked.join("out"));
    assert!(!report.is_ok());
    assert_eq!(
        report.failed.len(),
        5,
        "Every document failure must be reported: {:?}",
        report.failed
    );
    assert!(report.written.is_empty());
}

// ===========================================================================
// Tests: site assets
// ===========================================================================

#[test]
fn assets_copied_and_template_rendered() {
    let assets = tempfile::tempdir().expect("tempdir");
    let out = tempfile::tempdir().expect("tempdir");
    fs::write(
        assets.path().join("index.template.html"),
        "<title>§title</title><meta content=\"§description\"><p>§§literal §other</p>",
    )
    .expect("write template");
    fs::write(assets.path().join("ui_translations_en.json"), r#"{"search": "Search"}"#)
        .expect("write bundle");
    fs::write(assets.path().join("ui_translations_de.json"), r#"{"search": "Suche"}"#)
        .expect("write bundle");
    fs::write(assets.path().join("style.css"), "body { margin: 0 }").expect("write css");
    fs::write(assets.path().join("script.js"), "void 0;").expect("write js");
    fs::write(assets.path().join("README.md"), "not an asset").expect("write readme");

    let mut report = WriteReport::default();
    site::copy_assets(
        Some(assets.path()),
        "My Thesaurus",
        "All the terms",
        out.path(),
        &mut report,
    );
    assert!(report.is_ok(), "{:?}", report.failed);

    let html = fs::read_to_string(out.path().join("index.html")).expect("read html");
    assert!(html.contains("<title>My Thesaurus</title>"));
    assert!(html.contains("content=\"All the terms\""));
    assert!(html.contains("§literal"), "§§ must escape to a literal §");
    assert!(html.contains("§other"), "Unknown placeholders pass through");

    assert!(out.path().join("ui_translations_en.json").exists());
    assert!(out.path().join("ui_translations_de.json").exists());
    assert!(out.path().join("style.css").exists());
    assert!(out.path().join("script.js").exists());
    assert!(!out.path().join("README.md").exists());

    assert_eq!(
        metadata::ui_languages(Some(assets.path())),
        vec!["de".to_string(), "en".to_string()]
    );
}

#[test]
fn invalid_ui_bundle_is_reported() {
    let assets = tempfile::tempdir().expect("tempdir");
    let out = tempfile::tempdir().expect("tempdir");
    fs::write(assets.path().join("ui_translations_fr.json"), "not json {").expect("write");

    let mut report = WriteReport::default();
    site::copy_assets(Some(assets.path()), "T", "D", out.path(), &mut report);

    assert_eq!(report.failed.len(), 1);
    assert!(!out.path().join("ui_translations_fr.json").exists());
}

#[test]
fn missing_assets_dir_is_a_noop() {
    let out = tempfile::tempdir().expect("tempdir");
    let mut report = WriteReport::default();
    site::copy_assets(None, "T", "D", out.path(), &mut report);
    assert!(report.is_ok());
    assert!(report.written.is_empty());
}
