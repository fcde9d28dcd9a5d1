use serde::{Deserialize, Serialize};

/// In-memory document: paragraphs and tables in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredDocument {
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub style: Option<String>,
    pub runs: Vec<TextRun>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    pub format: RunFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunFormat {
    pub bold: bool,
    pub italic: bool,
    /// Font size in half-points, as stored by word processors.
    pub size: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    pub paragraphs: Vec<Paragraph>,
}

impl StructuredDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heading(&mut self, text: impl Into<String>, level: u8) -> &mut Self {
        let style = format!("Heading{}", level.clamp(1, 9));
        self.blocks
            .push(Block::Paragraph(Paragraph::plain(text).with_style(style)));
        self
    }

    pub fn paragraph(&mut self, paragraph: Paragraph) -> &mut Self {
        self.blocks.push(Block::Paragraph(paragraph));
        self
    }

    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.paragraph(Paragraph::plain(text))
    }

    pub fn bullet(&mut self, text: impl Into<String>) -> &mut Self {
        self.paragraph(Paragraph::plain(text).with_style("ListBullet"))
    }

    pub fn table(&mut self, table: Table) -> &mut Self {
        self.blocks.push(Block::Table(table));
        self
    }

    /// Top-level paragraphs followed by table cell paragraphs, in reading order.
    pub fn paragraphs(&self) -> Vec<&Paragraph> {
        let mut paragraphs = Vec::new();
        for block in &self.blocks {
            match block {
                Block::Paragraph(paragraph) => paragraphs.push(paragraph),
                Block::Table(table) => {
                    for row in &table.rows {
                        for cell in &row.cells {
                            paragraphs.extend(cell.paragraphs.iter());
                        }
                    }
                }
            }
        }
        paragraphs
    }

    pub fn paragraphs_mut(&mut self) -> Vec<&mut Paragraph> {
        let mut paragraphs = Vec::new();
        for block in self.blocks.iter_mut() {
            match block {
                Block::Paragraph(paragraph) => paragraphs.push(paragraph),
                Block::Table(table) => {
                    for row in table.rows.iter_mut() {
                        for cell in row.cells.iter_mut() {
                            paragraphs.extend(cell.paragraphs.iter_mut());
                        }
                    }
                }
            }
        }
        paragraphs
    }
}

impl Paragraph {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            style: None,
            runs: vec![TextRun::plain(text)],
        }
    }

    pub fn from_runs(runs: Vec<TextRun>) -> Self {
        Self { style: None, runs }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Concatenated text of every run.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: RunFormat::default(),
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: RunFormat {
                bold: true,
                ..RunFormat::default()
            },
        }
    }
}

impl Table {
    /// Table whose cells each hold one plain paragraph.
    pub fn from_text_rows<I, R, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|cells| TableRow {
                    cells: cells
                        .into_iter()
                        .map(|text| TableCell {
                            paragraphs: vec![Paragraph::plain(text)],
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}
