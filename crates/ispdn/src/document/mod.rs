//! Structured documents, placeholder templating and the DOCX container.

pub mod docx;
pub mod model;
pub mod templater;

pub use docx::{render, DocxTemplate};
pub use model::{Block, Paragraph, RunFormat, StructuredDocument, Table, TableCell, TableRow, TextRun};
pub use templater::{
    fill_blank, fill_labelled_blanks, replace_placeholders, PlaceholderMap, TemplateDocument,
    TemplateParagraph,
};

use std::path::PathBuf;

/// Failures while loading, editing or encoding a document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("document template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),
    #[error("unable to read document template {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("document is not a valid DOCX container: {0}")]
    InvalidFormat(String),
    #[error("unable to encode DOCX document: {0}")]
    Encode(String),
}
