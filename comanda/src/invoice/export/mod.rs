//! # Invoice Export
//!
//! Writes invoices into the documents directory:
//!
//! - one invoice → `Factura_<numero>_<millis>.html`, plus `.pdf` when a fonts
//!   directory is configured
//! - all invoices → `Facturas_<dd-MM-yyyy_HHmmss>.csv`
//!
//! The UI then offers the written file to the system opener or a "save as"
//! dialog (see [`share`]).

pub mod csv;
pub mod document;
pub mod html;
pub mod pdf;
pub mod share;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::core::error::{AppError, Result};
use crate::invoice::view::FacturaView;

pub const NOTHING_TO_EXPORT: &str = "No hay facturas para exportar";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Html,
    Pdf,
    Csv,
}

impl ExportKind {
    pub fn label(self) -> &'static str {
        match self {
            ExportKind::Html => "Documento",
            ExportKind::Pdf => "PDF",
            ExportKind::Csv => "CSV",
        }
    }
}

/// A file the exporter wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub path: PathBuf,
    pub kind: ExportKind,
    /// Invoices contained (1 for documents)
    pub count: usize,
}

impl ExportedFile {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exporter {
    documents_dir: PathBuf,
    fonts_dir: Option<PathBuf>,
}

impl Exporter {
    pub fn new(documents_dir: impl Into<PathBuf>, fonts_dir: Option<PathBuf>) -> Self {
        Self {
            documents_dir: documents_dir.into(),
            fonts_dir,
        }
    }

    pub fn documents_dir(&self) -> &Path {
        &self.documents_dir
    }

    pub fn pdf_enabled(&self) -> bool {
        self.fonts_dir.is_some()
    }

    /// Export one invoice: the HTML document, then the PDF when fonts are configured.
    pub fn export_factura(&self, view: &FacturaView) -> Result<Vec<ExportedFile>> {
        self.export_factura_at(view, Local::now())
    }

    pub fn export_factura_at(&self, view: &FacturaView, now: DateTime<Local>) -> Result<Vec<ExportedFile>> {
        let stem = format!("Factura_{}_{}", view.file_numero(), now.timestamp_millis());
        let generated_at = now.format("%d/%m/%Y %H:%M:%S").to_string();
        self.ensure_dir()?;

        let html = html::render_factura_html(view, &generated_at)?;
        let html_path = self.documents_dir.join(format!("{}.html", stem));
        write_file(&html_path, html.as_bytes())?;
        let mut written = vec![ExportedFile { path: html_path, kind: ExportKind::Html, count: 1 }];

        if let Some(fonts_dir) = &self.fonts_dir {
            let bytes = pdf::render_factura_pdf(view, fonts_dir, &generated_at)?;
            let pdf_path = self.documents_dir.join(format!("{}.pdf", stem));
            write_file(&pdf_path, &bytes)?;
            written.push(ExportedFile { path: pdf_path, kind: ExportKind::Pdf, count: 1 });
        }

        tracing::info!(
            numero = %view.numero_label(),
            files = written.len(),
            dir = %self.documents_dir.display(),
            "Invoice exported"
        );
        Ok(written)
    }

    /// Export every invoice as one CSV file.
    pub fn export_csv(&self, facturas: &[FacturaView]) -> Result<ExportedFile> {
        self.export_csv_at(facturas, Local::now())
    }

    pub fn export_csv_at(&self, facturas: &[FacturaView], now: DateTime<Local>) -> Result<ExportedFile> {
        if facturas.is_empty() {
            return Err(AppError::Validation(NOTHING_TO_EXPORT.to_string()));
        }
        self.ensure_dir()?;

        let path = self.documents_dir.join(csv::csv_file_name(now));
        write_file(&path, csv::facturas_to_csv(facturas).as_bytes())?;

        tracing::info!(count = facturas.len(), path = %path.display(), "CSV exported");
        Ok(ExportedFile { path, kind: ExportKind::Csv, count: facturas.len() })
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.documents_dir)
            .map_err(|e| AppError::Export(format!("{}: {}", self.documents_dir.display(), e)))
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|e| AppError::Export(format!("{}: {}", path.display(), e)))
}
