use std::path::PathBuf;
use std::process;

use clap::Parser;

use skos2json::emitter::{documents, site, WriteReport};
use skos2json::extraction::extractor::ConceptExtractor;
use skos2json::extraction::loader::{self, RdfFormat};
use skos2json::index::metadata;
use skos2json::model::namespace::NamespaceTable;

/// Convert SKOS vocabularies to denormalized JSON for a static thesaurus viewer.
#[derive(Parser)]
#[command(name = "skos2json", version, about)]
struct Cli {
    /// Path to the input RDF file.
    input: PathBuf,

    /// Output directory [default: input path without extension].
    output: Option<PathBuf>,

    /// Input format: turtle, ntriples, rdfxml [default: detect from extension].
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<String>,

    /// Base URI for concept ids [default: auto-detected].
    #[arg(short, long, value_name = "URI")]
    base_uri: Option<String>,

    /// Thesaurus title for the metadata document.
    #[arg(long, value_name = "TEXT")]
    title: Option<String>,

    /// Thesaurus description for the metadata document.
    #[arg(long, value_name = "TEXT")]
    description: Option<String>,

    /// Directory with the site template, static files, and UI translation bundles.
    #[arg(long, value_name = "DIR")]
    assets_dir: Option<PathBuf>,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Quiet output.
    #[arg(short, long)]
    quiet: bool,
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let format = match &cli.format {
        Some(name) => Some(RdfFormat::from_name(name).ok_or_else(|| {
            format!("Unknown format: {name}. Use 'turtle', 'ntriples', or 'rdfxml'.")
        })?),
        None => None,
    };

    // Load the triple store
    if cli.verbose {
        eprintln!("Loading input from: {}", cli.input.display());
    }
    let store = loader::load_file(&cli.input, format)?;
    if cli.verbose {
        eprintln!(
            "Loaded {} triples for {} subjects",
            store.len(),
            store.subject_count()
        );
    }

    let namespaces = match &cli.base_uri {
        Some(base) => NamespaceTable::new(base),
        None => NamespaceTable::detect(&store),
    };
    if cli.verbose {
        eprintln!("Base URI: {}", namespaces.base_uri());
    }

    // Extract concepts and schemes
    let extraction = ConceptExtractor::new(&store, &namespaces).extract();
    let diagnostics = &extraction.diagnostics;
    if !diagnostics.is_clean() && !cli.quiet {
        eprintln!(
            "Warning: {} dangling references ({} untyped subjects, {} dropped relations)",
            diagnostics.dangling_count(),
            diagnostics.untyped_subjects.len(),
            diagnostics.dangling_relations.len()
        );
        if cli.verbose {
            for subject in &diagnostics.untyped_subjects {
                eprintln!("  untyped subject: {subject}");
            }
            for dangling in &diagnostics.dangling_relations {
                eprintln!(
                    "  {} -> {} via {}",
                    dangling.concept_id, dangling.target_uri, dangling.predicate
                );
            }
        }
    }

    // Derive metadata
    let available = metadata::available_languages(&extraction.concepts);
    if available.is_empty() && !cli.quiet {
        eprintln!("Warning: no language-tagged labels found; emitting metadata only");
    }
    let ui_langs = metadata::ui_languages(cli.assets_dir.as_deref());
    let meta = metadata::build_metadata(
        cli.title.as_deref(),
        cli.description.as_deref(),
        &namespaces,
        &extraction.schemes,
        available.clone(),
        ui_langs,
    );

    // Emit one document set per content language, then the shared documents
    let out_dir = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.input.with_extension(""));
    let mut report = WriteReport::default();
    for lang in &available {
        documents::write_language_documents(&extraction.concepts, lang, &out_dir, &mut report);
    }
    documents::write_metadata(&meta, &out_dir, &mut report);
    site::copy_assets(
        cli.assets_dir.as_deref(),
        &meta.title,
        &meta.description,
        &out_dir,
        &mut report,
    );

    // Print summary to stderr (unless quiet)
    if !cli.quiet {
        eprintln!(
            "Generated {} documents for {} languages ({} concepts) in {}",
            report.written.len(),
            available.len(),
            extraction.concepts.len(),
            out_dir.display()
        );
    }

    if !report.is_ok() {
        eprintln!("Failed to write {} documents:", report.failed.len());
        for (path, err) in &report.failed {
            eprintln!("  {}: {err}", path.display());
        }
        return Err("some documents could not be written".into());
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
