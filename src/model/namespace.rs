//! Namespace context and URL-safe concept id minting.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::graph::TripleStore;
use super::vocab::skos;

/// Characters that need percent-encoding in a concept id.
/// We keep alphanumeric, -, _, ., ~ as unreserved per RFC 3986; ids must
/// survive a `concept=` query parameter unescaped.
const ID_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'!')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Explicit namespace context for one generation run.
///
/// Holds the base URI that abbreviates subject URIs into concept ids.
/// Constructed once per run and passed through function arguments; no
/// process-wide state survives between runs.
#[derive(Debug, Clone)]
pub struct NamespaceTable {
    base_uri: String,
}

impl NamespaceTable {
    pub fn new(base_uri: &str) -> Self {
        Self {
            base_uri: base_uri.to_string(),
        }
    }

    /// Detect the base URI from the store: the longest common prefix of all
    /// subjects carrying a `skos:prefLabel`, truncated to the last `/` or
    /// `#`. Empty when no labeled subjects share a prefix -- ids then fall
    /// back to the full encoded URI.
    pub fn detect(store: &TripleStore) -> Self {
        let labeled: Vec<&str> = store
            .subjects()
            .filter(|s| {
                store
                    .triples_of(s)
                    .iter()
                    .any(|t| t.predicate == skos::PREF_LABEL)
            })
            .collect();
        Self {
            base_uri: common_base(&labeled),
        }
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Mint a stable, URL-safe id: strip the base URI and percent-encode
    /// the remainder.
    pub fn concept_id(&self, uri: &str) -> String {
        let local = match uri.strip_prefix(&self.base_uri) {
            Some(rest) if !rest.is_empty() => rest,
            _ => uri,
        };
        utf8_percent_encode(local, ID_ENCODE_SET).to_string()
    }

    /// Encode the full URI, ignoring the base. Used when two subjects would
    /// otherwise abbreviate to the same id.
    pub fn full_id(&self, uri: &str) -> String {
        utf8_percent_encode(uri, ID_ENCODE_SET).to_string()
    }
}

fn common_base(uris: &[&str]) -> String {
    let Some(first) = uris.first() else {
        return String::new();
    };
    if uris.len() == 1 {
        // Single URI: everything up to and including the last separator.
        return match first.rfind(['/', '#']) {
            Some(i) => first[..=i].to_string(),
            None => String::new(),
        };
    }

    let mut prefix: &str = first;
    for uri in &uris[1..] {
        while !prefix.is_empty() && !uri.starts_with(prefix) {
            prefix = trim_last_char(prefix);
        }
        if prefix.is_empty() {
            return String::new();
        }
    }

    if prefix.ends_with('/') || prefix.ends_with('#') {
        return prefix.to_string();
    }
    match prefix.rfind(['/', '#']) {
        Some(i) => prefix[..=i].to_string(),
        None => String::new(),
    }
}

fn trim_last_char(s: &str) -> &str {
    match s.char_indices().next_back() {
        Some((i, _)) => &s[..i],
        None => s,
    }
}
