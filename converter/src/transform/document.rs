//! Output rows and their serialization.

use crate::error::CsvResult;
use crate::parser::InputRow;

use super::definition::Definition;

/// Header row of every extended file.
pub const OUTPUT_HEADER: [&str; 10] = [
    "Name", "Material", "X", "Y", "Quantity", "X1B", "X2B", "Y1B", "Y2B", "Comment",
];

/// One row of an extended file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub name: String,
    /// Always written empty; kept so the column exists for downstream tools.
    pub material: String,
    pub x: String,
    pub y: String,
    pub quantity: String,
    pub x1b: char,
    pub x2b: char,
    pub y1b: char,
    pub y2b: char,
    pub comment: String,
}

impl OutputRow {
    /// Build an output row from an input row.
    ///
    /// Returns `None` when the definition field does not match the grammar.
    pub fn from_input(row: &InputRow) -> Option<Self> {
        let def = Definition::parse(&row.definition_name)?;
        let [x1b, x2b, y1b, y2b] = def.flags;

        Some(Self {
            name: def.name,
            material: String::new(),
            x: def.width,
            y: def.height,
            quantity: row.quantity.clone(),
            x1b,
            x2b,
            y1b,
            y2b,
            comment: def.comment,
        })
    }

    /// Fields in [`OUTPUT_HEADER`] order.
    pub fn fields(&self) -> [String; 10] {
        [
            self.name.clone(),
            self.material.clone(),
            self.x.clone(),
            self.y.clone(),
            self.quantity.clone(),
            self.x1b.to_string(),
            self.x2b.to_string(),
            self.y1b.to_string(),
            self.y2b.to_string(),
            self.comment.clone(),
        ]
    }
}

/// Header plus converted rows of one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputDocument {
    pub rows: Vec<OutputRow>,
}

impl OutputDocument {
    pub fn new(rows: Vec<OutputRow>) -> Self {
        Self { rows }
    }

    /// Serialize as comma-delimited text.
    ///
    /// Lines are joined with `\n` and the last line has no terminator.
    /// Fields are quoted only when they contain a delimiter, quote or
    /// newline.
    pub fn to_csv(&self) -> CsvResult<String> {
        let mut buf = Vec::new();
        {
            let mut writer = csv::WriterBuilder::new()
                .terminator(csv::Terminator::Any(b'\n'))
                .from_writer(&mut buf);

            writer.write_record(OUTPUT_HEADER)?;
            for row in &self.rows {
                writer.write_record(row.fields())?;
            }
            writer.flush().map_err(csv::Error::from)?;
        }

        let text = String::from_utf8_lossy(&buf);

        Ok(text.strip_suffix('\n').unwrap_or(&text).to_string())
    }
}
