//! Static site assets: template rendering, UI translation bundles, and
//! passthrough files.
//!
//! The core never generates front-end content. It renders the viewer's
//! `index.template.html` (placeholders are `§`-delimited so `$`, `|`, and
//! `@` stay free for the template's JavaScript and CSS), validates that UI
//! translation bundles parse as JSON, and copies everything into the output
//! directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{write_file, WriteReport};
use crate::index::metadata::bundle_language;

const PLACEHOLDER: char = '§';
const TEMPLATE_NAME: &str = "index.template.html";

/// Copy the assets directory into the output directory, rendering the
/// template and validating translation bundles along the way. Every copy is
/// recorded in the report.
pub fn copy_assets(
    assets_dir: Option<&Path>,
    title: &str,
    description: &str,
    out_dir: &Path,
    report: &mut WriteReport,
) {
    let Some(dir) = assets_dir else {
        return;
    };
    let mut entries: Vec<PathBuf> = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect(),
        Err(e) => {
            report.failed.push((dir.to_path_buf(), e));
            return;
        }
    };
    // Sorted so `index.template.html` deterministically overrides a plain
    // `index.html` shipped alongside it.
    entries.sort();

    for path in entries {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name == TEMPLATE_NAME {
            let target = out_dir.join("index.html");
            let result = fs::read_to_string(&path).and_then(|template| {
                let html = render_template(&template, title, description);
                write_file(&target, html.as_bytes())
            });
            report.record(target, result);
        } else if bundle_language(name).is_some() {
            let target = out_dir.join(name);
            let result = fs::read_to_string(&path).and_then(|text| {
                serde_json::from_str::<serde_json::Value>(&text).map_err(|e| {
                    io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("invalid UI translation bundle: {e}"),
                    )
                })?;
                write_file(&target, text.as_bytes())
            });
            report.record(target, result);
        } else if is_static_asset(name) {
            let target = out_dir.join(name);
            let result = fs::read(&path).and_then(|bytes| write_file(&target, &bytes));
            report.record(target, result);
        }
    }
}

fn is_static_asset(name: &str) -> bool {
    name == "index.html" || name.ends_with(".css") || name.ends_with(".js")
}

/// Substitute `§name` placeholders. `§§` escapes a literal `§`; unknown
/// placeholders pass through unchanged.
fn render_template(template: &str, title: &str, description: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c != PLACEHOLDER {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&PLACEHOLDER) {
            chars.next();
            out.push(PLACEHOLDER);
            continue;
        }
        let mut name = String::new();
        while let Some(&next) = chars.peek() {
            if next.is_ascii_lowercase() || next.is_ascii_digit() || next == '_' {
                name.push(next);
                chars.next();
            } else {
                break;
            }
        }
        match name.as_str() {
            "title" => out.push_str(title),
            "description" => out.push_str(description),
            _ => {
                out.push(PLACEHOLDER);
                out.push_str(&name);
            }
        }
    }
    out
}
