//! Parsed document model
//!
//! A [`Document`] is the single intermediate form all emitters consume. It is
//! built once per transcode call and never mutated afterwards.

/// A single row of table cells
pub type Row = Vec<String>;

/// The result of one parse pass over a markdown string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Blocks in source order
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over the tables only
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(table) => Some(table),
            _ => None,
        })
    }

    /// Check whether any block is a table
    pub fn has_tables(&self) -> bool {
        self.tables().next().is_some()
    }
}

impl IntoIterator for Document {
    type Item = Block;
    type IntoIter = std::vec::IntoIter<Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

/// A classified block of markdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `#`-prefixed heading line
    Heading(Heading),

    /// Contiguous run of pipe-delimited rows
    Table(Table),

    /// Any other non-empty line, trimmed
    Paragraph(String),

    /// Empty line
    Blank,
}

impl Block {
    pub fn heading(level: usize, text: impl Into<String>) -> Self {
        Block::Heading(Heading {
            level,
            text: text.into(),
        })
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph(text.into())
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Block::Blank)
    }
}

/// Heading with level (count of leading `#`) and text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: usize,
    pub text: String,
}

/// A table whose first row is the header
///
/// Always holds at least one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Build a table from rows, returning `None` when there is no header row
    pub fn from_rows(rows: Vec<Row>) -> Option<Self> {
        if rows.is_empty() {
            None
        } else {
            Some(Self { rows })
        }
    }

    pub fn header(&self) -> &Row {
        &self.rows[0]
    }

    /// Data rows after the header
    pub fn body(&self) -> &[Row] {
        &self.rows[1..]
    }

    /// All rows, header first
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

/// A paragraph line split at its first colon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyValue<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

impl<'a> KeyValue<'a> {
    /// Split `line` at the first `:`, trimming both sides
    pub fn split(line: &'a str) -> Option<Self> {
        let (key, value) = line.split_once(':')?;
        Some(Self {
            key: key.trim(),
            value: value.trim(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_requires_header() {
        assert!(Table::from_rows(Vec::new()).is_none());

        let table = Table::from_rows(vec![vec!["a".to_string()]]).unwrap();
        assert_eq!(table.header(), &vec!["a".to_string()]);
        assert!(table.body().is_empty());
    }

    #[test]
    fn test_key_value_splits_at_first_colon() {
        let kv = KeyValue::split("time: 10:30").unwrap();
        assert_eq!(kv.key, "time");
        assert_eq!(kv.value, "10:30");
    }

    #[test]
    fn test_key_value_without_colon() {
        assert!(KeyValue::split("no separator here").is_none());
    }

    #[test]
    fn test_document_tables() {
        let table = Table::from_rows(vec![vec!["x".to_string()]]).unwrap();
        let doc = Document::new(vec![
            Block::heading(1, "Title"),
            Block::Table(table.clone()),
            Block::Blank,
        ]);
        assert!(doc.has_tables());
        assert_eq!(doc.tables().collect::<Vec<_>>(), vec![&table]);
    }
}
