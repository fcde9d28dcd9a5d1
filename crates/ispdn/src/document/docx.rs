//! DOCX container support backed by `docx-rs`.

use docx_rs::{
    read_docx, Break, BreakType, Docx, DocumentChild, Paragraph as DocxParagraph, ParagraphChild,
    Run, RunChild, Tab, Table as DocxTable, TableCell as DocxTableCell, TableCellContent,
    TableChild, TableRow as DocxTableRow, TableRowChild, Text,
};
use std::collections::VecDeque;
use std::io::Cursor;
use std::path::Path;

use super::model::{Block, Paragraph, StructuredDocument, Table, TextRun};
use super::templater::{TemplateDocument, TemplateParagraph};
use super::DocumentError;

/// Loaded template ready for in-place editing.
pub struct DocxTemplate {
    docx: Docx,
}

impl DocxTemplate {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DocumentError> {
        let docx = read_docx(bytes).map_err(|err| DocumentError::InvalidFormat(err.to_string()))?;
        Ok(Self { docx })
    }

    /// Read a template from disk. A missing file is reported as `TemplateNotFound`.
    pub fn open(path: &Path) -> Result<Self, DocumentError> {
        let bytes = std::fs::read(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                DocumentError::TemplateNotFound(path.to_path_buf())
            } else {
                DocumentError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Self::from_bytes(&bytes)
    }

    pub fn paragraph_texts(&mut self) -> Vec<String> {
        self.template_paragraphs()
            .into_iter()
            .map(|paragraph| paragraph.flatten())
            .collect()
    }

    pub fn into_bytes(self) -> Result<Vec<u8>, DocumentError> {
        pack(self.docx)
    }
}

impl TemplateDocument for DocxTemplate {
    type Paragraph = DocxParagraph;

    fn template_paragraphs(&mut self) -> Vec<&mut DocxParagraph> {
        let mut paragraphs: Vec<&mut DocxParagraph> = Vec::new();
        for child in self.docx.document.children.iter_mut() {
            match child {
                DocumentChild::Paragraph(paragraph) => paragraphs.push(paragraph),
                DocumentChild::Table(table) => {
                    for row in table.rows.iter_mut() {
                        #[allow(irrefutable_let_patterns)]
                        let TableChild::TableRow(row) = row else {
                            continue;
                        };
                        for cell in row.cells.iter_mut() {
                            #[allow(irrefutable_let_patterns)]
                            let TableRowChild::TableCell(cell) = cell else {
                                continue;
                            };
                            for content in cell.children.iter_mut() {
                                if let TableCellContent::Paragraph(paragraph) = content {
                                    paragraphs.push(paragraph);
                                }
                            }
                        }
                    }
                }
                _ => {}
            }
        }
        paragraphs
    }
}

/// Tabs and line breaks flatten to `\t` and `\n`, so edits keep them in place.
impl TemplateParagraph for DocxParagraph {
    fn flatten(&self) -> String {
        let mut text = String::new();
        for child in &self.children {
            if let ParagraphChild::Run(run) = child {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(fragment) => text.push_str(&fragment.text),
                        RunChild::Tab(_) => text.push('\t'),
                        RunChild::Break(_) => text.push('\n'),
                        _ => {}
                    }
                }
            }
        }
        text
    }

    fn write_back(&mut self, text: String) {
        let mut tabs = VecDeque::new();
        let mut breaks = VecDeque::new();
        let mut first_run = None;
        let mut slot = None;

        for (index, child) in self.children.iter_mut().enumerate() {
            let ParagraphChild::Run(run) = child else {
                continue;
            };
            first_run.get_or_insert((index, run.children.len()));
            let mut kept = Vec::with_capacity(run.children.len());
            for run_child in std::mem::take(&mut run.children) {
                let textual = matches!(
                    run_child,
                    RunChild::Text(_) | RunChild::Tab(_) | RunChild::Break(_)
                );
                if textual && slot.is_none() {
                    slot = Some((index, kept.len()));
                }
                match run_child {
                    RunChild::Text(_) => {}
                    RunChild::Tab(tab) => tabs.push_back(tab),
                    RunChild::Break(line_break) => breaks.push_back(line_break),
                    other => kept.push(other),
                }
            }
            run.children = kept;
        }

        let content = text_children(&text, &mut tabs, &mut breaks);
        match slot.or(first_run) {
            Some((index, position)) => {
                if let ParagraphChild::Run(run) = &mut self.children[index] {
                    let position = position.min(run.children.len());
                    run.children.splice(position..position, content);
                }
            }
            None => {
                let mut run = Run::new();
                run.children = content;
                let paragraph = std::mem::take(self);
                *self = paragraph.add_run(run);
            }
        }
    }
}

/// Run children for `text`, reusing the paragraph's original tab and break
/// elements in order so their attributes survive.
fn text_children(
    text: &str,
    tabs: &mut VecDeque<Tab>,
    breaks: &mut VecDeque<Break>,
) -> Vec<RunChild> {
    let mut children = Vec::new();
    let mut segment = String::new();
    for ch in text.chars() {
        let separator = match ch {
            '\t' => RunChild::Tab(tabs.pop_front().unwrap_or_else(Tab::new)),
            '\n' => RunChild::Break(
                breaks
                    .pop_front()
                    .unwrap_or_else(|| Break::new(BreakType::TextWrapping)),
            ),
            _ => {
                segment.push(ch);
                continue;
            }
        };
        if !segment.is_empty() {
            children.push(RunChild::Text(Text::new(std::mem::take(&mut segment))));
        }
        children.push(separator);
    }
    if !segment.is_empty() {
        children.push(RunChild::Text(Text::new(segment)));
    }
    children
}

/// Encode an in-memory document as DOCX bytes.
pub fn render(document: &StructuredDocument) -> Result<Vec<u8>, DocumentError> {
    let mut docx = Docx::new();
    for block in &document.blocks {
        docx = match block {
            Block::Paragraph(paragraph) => docx.add_paragraph(docx_paragraph(paragraph)),
            Block::Table(table) => docx.add_table(docx_table(table)),
        };
    }
    pack(docx)
}

fn pack(docx: Docx) -> Result<Vec<u8>, DocumentError> {
    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|err| DocumentError::Encode(err.to_string()))?;
    Ok(cursor.into_inner())
}

fn docx_paragraph(paragraph: &Paragraph) -> DocxParagraph {
    let mut output = DocxParagraph::new();
    if let Some(style) = &paragraph.style {
        output = output.style(style);
    }
    for run in &paragraph.runs {
        output = output.add_run(docx_run(run));
    }
    output
}

fn docx_run(run: &TextRun) -> Run {
    let mut output = Run::new().add_text(run.text.as_str());
    if run.format.bold {
        output = output.bold();
    }
    if run.format.italic {
        output = output.italic();
    }
    if let Some(size) = run.format.size {
        output = output.size(size);
    }
    output
}

fn docx_table(table: &Table) -> DocxTable {
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let cells = row
                .cells
                .iter()
                .map(|cell| {
                    cell.paragraphs
                        .iter()
                        .fold(DocxTableCell::new(), |output, paragraph| {
                            output.add_paragraph(docx_paragraph(paragraph))
                        })
                })
                .collect();
            DocxTableRow::new(cells)
        })
        .collect();
    DocxTable::new(rows)
}
