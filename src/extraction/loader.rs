//! Load an RDF serialization into a [`TripleStore`].

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use oxrdf::{Subject, Term as RdfTerm, Triple as RdfTriple};
use oxrdfxml::RdfXmlParser;
use oxttl::{NTriplesParser, TurtleParser};

use crate::model::graph::{Term, Triple, TripleStore};

/// Errors that can occur during loading.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Parse(String),
    UnsupportedFormat(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "IO error: {e}"),
            LoadError::Parse(msg) => write!(f, "RDF parse error: {msg}"),
            LoadError::UnsupportedFormat(what) => {
                write!(f, "unsupported RDF format: {what}")
            }
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

/// Input serializations the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    Turtle,
    NTriples,
    RdfXml,
}

impl RdfFormat {
    /// Resolve a format from an explicit name (`--format`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "turtle" | "ttl" => Some(RdfFormat::Turtle),
            "ntriples" | "nt" => Some(RdfFormat::NTriples),
            "rdfxml" | "rdf" | "xml" => Some(RdfFormat::RdfXml),
            _ => None,
        }
    }

    /// Resolve a format from a file extension.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext.to_lowercase().as_str() {
            "ttl" | "turtle" => Some(RdfFormat::Turtle),
            "nt" | "ntriples" => Some(RdfFormat::NTriples),
            "rdf" | "xml" | "owl" => Some(RdfFormat::RdfXml),
            _ => None,
        }
    }
}

/// Load `path` into a triple store. The format comes from the file
/// extension unless given explicitly.
///
/// Duplicate triples are stored as-is; deduplication happens during
/// extraction, by id rather than by triple.
pub fn load_file(path: &Path, format: Option<RdfFormat>) -> Result<TripleStore, LoadError> {
    let format = match format {
        Some(f) => f,
        None => RdfFormat::from_extension(path).ok_or_else(|| {
            LoadError::UnsupportedFormat(format!(
                "no known serialization for the extension of {}",
                path.display()
            ))
        })?,
    };

    let reader = BufReader::new(File::open(path)?);
    let mut store = TripleStore::new();
    match format {
        RdfFormat::Turtle => {
            for triple in TurtleParser::new().for_reader(reader) {
                insert(&mut store, triple.map_err(|e| LoadError::Parse(e.to_string()))?);
            }
        }
        RdfFormat::NTriples => {
            for triple in NTriplesParser::new().for_reader(reader) {
                insert(&mut store, triple.map_err(|e| LoadError::Parse(e.to_string()))?);
            }
        }
        RdfFormat::RdfXml => {
            for triple in RdfXmlParser::new().for_reader(reader) {
                insert(&mut store, triple.map_err(|e| LoadError::Parse(e.to_string()))?);
            }
        }
    }
    Ok(store)
}

/// Convert an oxrdf triple into the closed term model. Blank-node subjects
/// keep their `_:label` rendering so typed blank nodes remain addressable.
fn insert(store: &mut TripleStore, triple: RdfTriple) {
    let subject = match triple.subject {
        Subject::NamedNode(n) => n.into_string(),
        Subject::BlankNode(b) => b.to_string(),
    };
    let predicate = triple.predicate.into_string();
    let object = match triple.object {
        RdfTerm::NamedNode(n) => Term::UriRef(n.into_string()),
        RdfTerm::BlankNode(b) => Term::UriRef(b.to_string()),
        RdfTerm::Literal(literal) => {
            let (text, _datatype, lang) = literal.destruct();
            Term::Literal { text, lang }
        }
    };
    store.insert(Triple {
        subject,
        predicate,
        object,
    });
}
