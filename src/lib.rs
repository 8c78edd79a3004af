use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// One reported match: `field` occurred somewhere within `line`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch {
    pub field: String,
    pub line: String,
}

/// Source of the document path, normally the native file dialog.
/// Kept as a trait so scanning can be driven headlessly in tests.
pub trait PdfPicker {
    fn pick_pdf(&self) -> Option<PathBuf>;
}

#[derive(Debug, Default)]
pub struct NativePdfPicker;

impl PdfPicker for NativePdfPicker {
    fn pick_pdf(&self) -> Option<PathBuf> {
        let picked = rfd::FileDialog::new()
            .set_title("Select PDF file")
            .add_filter("PDF files", &["pdf"])
            .pick_file();
        debug!("file dialog result: {:?}", picked);
        picked
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub fields: Vec<String>,
}

impl ScanConfig {
    // A missing file means defaults; a broken file is reported but not fatal.
    pub fn load(path: &Path) -> Self {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => {
                debug!("no config at {}, using defaults", path.display());
                return Self::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(config) => config,
            Err(err) => {
                warn!("ignoring unparseable config {}: {err}", path.display());
                Self::default()
            }
        }
    }
}

pub fn scan_line(line: &str, fields: &[String]) -> Vec<FieldMatch> {
    let lower = line.to_lowercase();
    let mut matches = Vec::new();
    for field in fields {
        if lower.contains(&field.to_lowercase()) {
            matches.push(FieldMatch {
                field: field.clone(),
                line: line.to_string(),
            });
        }
    }
    matches
}

pub fn scan_text(text: &str, fields: &[String]) -> Vec<FieldMatch> {
    let mut matches = Vec::new();
    for line in text.lines() {
        matches.extend(scan_line(line, fields));
    }
    matches
}

pub fn extract_page_texts(path: &Path) -> anyhow::Result<Vec<String>> {
    let bytes = fs::read(path)?;
    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)?;
    debug!("extracted {} page(s) from {}", pages.len(), path.display());
    Ok(pages)
}

pub fn scan_document(path: &Path, fields: &[String]) -> anyhow::Result<Vec<FieldMatch>> {
    let mut matches = Vec::new();
    for (page, text) in extract_page_texts(path)?.iter().enumerate() {
        // An image-only or blank page yields no text, which is not an error.
        let page_matches = scan_text(text, fields);
        debug!("page {}: {} match(es)", page + 1, page_matches.len());
        matches.extend(page_matches);
    }
    Ok(matches)
}

pub fn run(
    picker: &dyn PdfPicker,
    fields: &[String],
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match picker.pick_pdf() {
        Some(path) => {
            info!("selected {}", path.display());
            let matches = scan_document(&path, fields)?;
            info!("{} match(es) total", matches.len());
            for m in &matches {
                writeln!(out, "{}: {}", m.field, m.line)?;
            }
        }
        None => {
            debug!("dialog cancelled");
            writeln!(out, "No file selected.")?;
        }
    }
    Ok(())
}
