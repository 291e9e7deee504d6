//! Local bibliography merge step.
//!
//! Reads the user's BibTeX export from the working directory, normalizes each
//! entry to a flat record, and appends the records to the CrossRef results
//! read back from disk. If the local file is absent the step logs a skip and
//! writes nothing.

use crate::audit::AuditLog;
use crate::config::Config;
use crate::crossref;
use crate::error::Result;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::info;

/// Merged output file name inside the output directory.
pub const OUTPUT_FILE: &str = "merged_results.json";

/// Sentinel for fields missing from a local entry.
const NOT_AVAILABLE: &str = "N/A";

/// Source tag attached to every local entry.
const SOURCE_TAG: &str = "local_bib";

/// Normalized record extracted from the local bibliography.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalEntry {
    pub title: String,
    pub author: String,
    pub year: String,
    pub doi: String,
    pub url: String,
    pub journal: String,
    pub source: String,
}

/// One raw entry from a BibTeX document.
#[derive(Debug, Default)]
pub struct BibEntry {
    pub entry_type: String,
    pub key: String,
    pub fields: HashMap<String, String>,
}

/// Run the merge step.
///
/// CrossRef records come first, unchanged; normalized local entries follow.
pub fn run(cfg: &Config, audit: &AuditLog) -> Result<()> {
    if !cfg.bib_file.exists() {
        info!(file = %cfg.bib_file.display(), "No local BibTeX file found, skipping merge");
        audit.log("No local BibTeX file found - skipping merge")?;
        return Ok(());
    }

    let bib = std::fs::read_to_string(&cfg.bib_file)?;
    let locals: Vec<LocalEntry> = parse_bib(&bib).iter().map(normalize_entry).collect();

    let crossref_path = cfg.outdir.join(crossref::OUTPUT_FILE);
    let mut merged: Vec<Value> = if crossref_path.exists() {
        serde_json::from_str(&std::fs::read_to_string(&crossref_path)?)?
    } else {
        Vec::new()
    };
    let crossref_count = merged.len();

    for entry in &locals {
        merged.push(serde_json::to_value(entry)?);
    }

    std::fs::write(
        cfg.outdir.join(OUTPUT_FILE),
        serde_json::to_string_pretty(&merged)?,
    )?;
    info!(
        crossref = crossref_count,
        local = locals.len(),
        "Wrote merged results"
    );
    Ok(())
}

/// Flatten a raw entry, defaulting every missing field to the sentinel.
/// `journal` falls back to `booktitle` before defaulting.
pub fn normalize_entry(entry: &BibEntry) -> LocalEntry {
    let field = |name: &str| {
        entry
            .fields
            .get(name)
            .cloned()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    };
    let journal = entry
        .fields
        .get("journal")
        .or_else(|| entry.fields.get("booktitle"))
        .cloned()
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    LocalEntry {
        title: field("title"),
        author: field("author"),
        year: field("year"),
        doi: field("doi"),
        url: field("url"),
        journal,
        source: SOURCE_TAG.to_string(),
    }
}

/// Parse the entries of a BibTeX document.
///
/// Field names are lowercased; values may be brace- or quote-delimited or
/// bare. Nested braces inside values are kept as text with the outer
/// delimiters stripped. `@comment`, `@preamble`, and `@string` blocks are
/// skipped.
pub fn parse_bib(input: &str) -> Vec<BibEntry> {
    let chars: Vec<char> = input.chars().collect();
    let mut entries = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '@' {
            i += 1;
            continue;
        }
        i += 1;

        let type_start = i;
        while i < chars.len() && chars[i] != '{' {
            i += 1;
        }
        let entry_type: String = chars[type_start..i]
            .iter()
            .collect::<String>()
            .trim()
            .to_lowercase();
        if i >= chars.len() {
            break;
        }
        i += 1; // consume '{'

        if matches!(entry_type.as_str(), "comment" | "preamble" | "string") {
            i = skip_block(&chars, i);
            continue;
        }

        let key_start = i;
        while i < chars.len() && chars[i] != ',' && chars[i] != '}' {
            i += 1;
        }
        let key: String = chars[key_start..i]
            .iter()
            .collect::<String>()
            .trim()
            .to_string();
        let mut entry = BibEntry {
            entry_type,
            key,
            fields: HashMap::new(),
        };
        if i < chars.len() && chars[i] == ',' {
            i += 1;
        }

        loop {
            while i < chars.len() && (chars[i].is_whitespace() || chars[i] == ',') {
                i += 1;
            }
            if i >= chars.len() || chars[i] == '}' {
                i += 1;
                break;
            }

            let name_start = i;
            while i < chars.len() && chars[i] != '=' && chars[i] != '}' {
                i += 1;
            }
            if i >= chars.len() || chars[i] == '}' {
                i += 1;
                break;
            }
            let name: String = chars[name_start..i]
                .iter()
                .collect::<String>()
                .trim()
                .to_lowercase();
            i += 1; // consume '='
            while i < chars.len() && chars[i].is_whitespace() {
                i += 1;
            }

            let (value, next) = read_value(&chars, i);
            i = next;
            if !name.is_empty() {
                entry.fields.insert(name, normalize_whitespace(&value));
            }
        }

        entries.push(entry);
    }

    entries
}

/// Read one field value starting at `i`; returns the value and the position
/// after it.
fn read_value(chars: &[char], mut i: usize) -> (String, usize) {
    if i >= chars.len() {
        return (String::new(), i);
    }
    match chars[i] {
        '{' => {
            i += 1;
            let start = i;
            let mut depth = 1usize;
            while i < chars.len() && depth > 0 {
                match chars[i] {
                    '{' => depth += 1,
                    '}' => depth -= 1,
                    _ => {}
                }
                i += 1;
            }
            let end = if depth == 0 { i - 1 } else { i };
            (chars[start..end].iter().collect(), i)
        }
        '"' => {
            i += 1;
            let start = i;
            while i < chars.len() && chars[i] != '"' {
                i += 1;
            }
            let value: String = chars[start..i].iter().collect();
            (value, (i + 1).min(chars.len()))
        }
        _ => {
            let start = i;
            while i < chars.len() && chars[i] != ',' && chars[i] != '}' {
                i += 1;
            }
            (chars[start..i].iter().collect(), i)
        }
    }
}

/// Skip past the closing brace of the block whose opening brace was consumed.
fn skip_block(chars: &[char], mut i: usize) -> usize {
    let mut depth = 1usize;
    while i < chars.len() && depth > 0 {
        match chars[i] {
            '{' => depth += 1,
            '}' => depth -= 1,
            _ => {}
        }
        i += 1;
    }
    i
}

/// Collapse runs of whitespace into single spaces.
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
