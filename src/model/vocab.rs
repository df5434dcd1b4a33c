//! RDF vocabulary constants for SKOS extraction.
//!
//! - `skos:` prefix (http://www.w3.org/2004/02/skos/core#) -- concepts, labels, relations
//! - `dc:` / `dcterms:` prefixes -- vocabulary-level descriptive metadata

/// Standard RDF namespace URIs
pub mod standard {
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// SKOS core vocabulary (`skos:` prefix)
pub mod skos {
    pub const PREFIX: &str = "skos";
    pub const NS: &str = "http://www.w3.org/2004/02/skos/core#";

    // Classes
    pub const CONCEPT: &str = "http://www.w3.org/2004/02/skos/core#Concept";
    pub const CONCEPT_SCHEME: &str = "http://www.w3.org/2004/02/skos/core#ConceptScheme";

    // Labels
    pub const PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";
    pub const ALT_LABEL: &str = "http://www.w3.org/2004/02/skos/core#altLabel";
    pub const HIDDEN_LABEL: &str = "http://www.w3.org/2004/02/skos/core#hiddenLabel";

    // Documentation
    pub const DEFINITION: &str = "http://www.w3.org/2004/02/skos/core#definition";
    pub const SCOPE_NOTE: &str = "http://www.w3.org/2004/02/skos/core#scopeNote";
    pub const NOTATION: &str = "http://www.w3.org/2004/02/skos/core#notation";

    // Semantic relations
    pub const BROADER: &str = "http://www.w3.org/2004/02/skos/core#broader";
    pub const NARROWER: &str = "http://www.w3.org/2004/02/skos/core#narrower";
    pub const RELATED: &str = "http://www.w3.org/2004/02/skos/core#related";

    // Scheme membership
    pub const IN_SCHEME: &str = "http://www.w3.org/2004/02/skos/core#inScheme";
    pub const TOP_CONCEPT_OF: &str = "http://www.w3.org/2004/02/skos/core#topConceptOf";
}

/// Dublin Core legacy elements (`dc:` prefix)
pub mod dc {
    pub const PREFIX: &str = "dc";
    pub const NS: &str = "http://purl.org/dc/elements/1.1/";

    pub const TITLE: &str = "http://purl.org/dc/elements/1.1/title";
    pub const DESCRIPTION: &str = "http://purl.org/dc/elements/1.1/description";
}

/// Dublin Core terms (`dcterms:` prefix)
pub mod dcterms {
    pub const PREFIX: &str = "dcterms";
    pub const NS: &str = "http://purl.org/dc/terms/";

    pub const TITLE: &str = "http://purl.org/dc/terms/title";
    pub const DESCRIPTION: &str = "http://purl.org/dc/terms/description";
}
