//! Row-level parser for the BADC-CSV section layout
//!
//! The parser is a state machine fed one row of cells at a time:
//!
//! ```text
//! Metadata --"Data"--> ColumnHeader --(one row)--> Data --"End Data"--> Done
//! ```
//!
//! Metadata rows are routed into the document as they arrive but are not
//! validated here; validation is a separate pass.

use tracing::{debug, error};

use crate::error::{BadcError, Result};
use crate::models::{Document, Scope};

/// Section of the file the parser is currently reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    Metadata,
    ColumnHeader,
    Data,
    Done,
}

/// Incremental parser building a [`Document`]
#[derive(Debug)]
pub struct Parser {
    state: ParserState,
    document: Document,
    last_line: u64,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// The row without its trailing empty cells
fn without_trailing_blanks(cells: &[String]) -> &[String] {
    let len = cells.iter().rposition(|c| !c.is_empty()).map_or(0, |i| i + 1);
    &cells[..len]
}

impl Parser {
    pub fn new() -> Self {
        Self {
            state: ParserState::Metadata,
            document: Document::empty(),
            last_line: 0,
        }
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Feed one row read from `line` of the source
    ///
    /// A failure is logged with the offending row and returned with the row
    /// attached. The parser must not be fed again after an error.
    pub fn feed(&mut self, line: u64, cells: Vec<String>) -> Result<()> {
        self.last_line = line;
        self.process(line, &cells).map_err(|e| {
            error!(line, row = ?cells, error = %e, "Failed to parse row");
            e.at_row(line, &cells)
        })
    }

    fn process(&mut self, line: u64, cells: &[String]) -> Result<()> {
        let cells = without_trailing_blanks(cells);
        match self.state {
            ParserState::Metadata => match cells {
                [] => {}
                [marker] if marker.eq_ignore_ascii_case("data") => {
                    debug!(line, "Start of data section");
                    self.state = ParserState::ColumnHeader;
                }
                [stray] => {
                    return Err(BadcError::parse(
                        line,
                        format!("Unexpected single-cell row '{}' in metadata section", stray),
                    ));
                }
                [label, reference, values @ ..] => {
                    self.document
                        .add_metadata(label.as_str(), values, Scope::from_ref(reference));
                }
            },
            ParserState::ColumnHeader => {
                // an empty header row is a table with no columns
                for name in cells {
                    self.document.add_variable(name.as_str(), Vec::<String>::new())?;
                }
                debug!(line, columns = self.document.nvar(), "Read column header");
                self.state = ParserState::Data;
            }
            ParserState::Data => match cells {
                [] => {}
                [marker] if marker.eq_ignore_ascii_case("end data") => {
                    debug!(line, rows = self.document.len(), "End of data section");
                    self.state = ParserState::Done;
                }
                row if row.len() != self.document.nvar() => {
                    return Err(BadcError::DataShape {
                        expected: self.document.nvar(),
                        found: row.len(),
                    });
                }
                row => self.document.add_data_row(row)?,
            },
            ParserState::Done => {}
        }
        Ok(())
    }

    /// Finish parsing and hand over the document
    pub fn finish(self) -> Result<Document> {
        match self.state {
            ParserState::Done => Ok(self.document),
            ParserState::Metadata => Err(BadcError::parse(
                self.last_line,
                "Input ended before the Data marker",
            )),
            ParserState::ColumnHeader => Err(BadcError::parse(
                self.last_line,
                "Input ended before the column header row",
            )),
            ParserState::Data => Err(BadcError::parse(
                self.last_line,
                "Input ended before the End Data marker",
            )),
        }
    }
}

/// Parse an ordered sequence of rows, numbering them from 1
pub fn parse_rows<I>(rows: I) -> Result<Document>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut parser = Parser::new();
    for (i, row) in rows.into_iter().enumerate() {
        parser.feed(i as u64 + 1, row)?;
    }
    parser.finish()
}
