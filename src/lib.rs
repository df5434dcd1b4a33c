//! Convert SKOS vocabularies into denormalized, language-partitioned JSON.
//!
//! The pipeline parses an RDF serialization into a subject-grouped triple
//! store, folds the triples into concept records, derives per-language label
//! indices and vocabulary metadata, and writes one set of JSON documents per
//! content language for a static thesaurus viewer.

pub mod emitter;
pub mod extraction;
pub mod index;
pub mod model;
