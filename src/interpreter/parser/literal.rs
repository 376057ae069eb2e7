use log::trace;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Accumulates one `[ ... ]` literal while it is being scanned.
///
/// Numbers arrive as text fragments: digit runs and `-` signs. A fragment
/// that follows whitespace starts a new number, so `[1 -2]` holds two
/// values while `[1-2]` holds the single malformed number `1-2`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LiteralBuilder {
    buffer:        String,
    buffer_column: usize,
    pending_space: bool,
    values:        Vec<f64>,
    rows:          usize,
    cols:          usize,
    row_length:    Option<usize>,
}

impl LiteralBuilder {
    /// Starts a literal whose first row is open.
    #[must_use]
    pub fn open() -> Self {
        Self { rows: 1,
               ..Self::default() }
    }

    /// Appends numeric text, first splitting off the previous number if
    /// whitespace was seen since.
    ///
    /// # Errors
    /// `ParseError::InvalidNumber` if the split-off number does not parse.
    pub fn push_text(&mut self, text: &str, column: usize) -> ParseResult<()> {
        if self.pending_space {
            self.flush()?;
        }
        if self.buffer.is_empty() {
            self.buffer_column = column;
        }
        self.buffer.push_str(text);
        Ok(())
    }

    /// Records whitespace; the buffered number ends before the next fragment.
    pub const fn mark_space(&mut self) {
        self.pending_space = true;
    }

    /// Ends the current row at a `;`.
    ///
    /// # Errors
    /// - `ParseError::InvalidNumber` for a malformed trailing number.
    /// - `ParseError::EmptyRow` if the row holds no values.
    /// - `ParseError::InconsistentRowSize` if its length differs from the
    ///   first row.
    pub fn end_row(&mut self, column: usize) -> ParseResult<()> {
        self.flush()?;
        self.check_row_length(column)?;
        self.cols = 0;
        self.rows += 1;
        trace!("literal: row {} opened", self.rows);
        Ok(())
    }

    /// Ends the literal at a `]` and returns `(rows, cols, values)` in
    /// row-major order.
    ///
    /// # Errors
    /// Same as [`LiteralBuilder::end_row`].
    pub fn close(mut self, column: usize) -> ParseResult<(usize, usize, Vec<f64>)> {
        self.flush()?;
        self.check_row_length(column)?;
        let cols = self.row_length.unwrap_or(self.cols);
        Ok((self.rows, cols, self.values))
    }

    fn flush(&mut self) -> ParseResult<()> {
        self.pending_space = false;
        if self.buffer.is_empty() {
            return Ok(());
        }

        let value = self.buffer
                        .parse::<f64>()
                        .map_err(|_| ParseError::InvalidNumber { text:   self.buffer.clone(),
                                                                 column: self.buffer_column, })?;
        trace!("literal: value {value} at row {}, col {}", self.rows, self.cols);
        self.values.push(value);
        self.cols += 1;
        self.buffer.clear();
        Ok(())
    }

    fn check_row_length(&mut self, column: usize) -> ParseResult<()> {
        if self.cols == 0 {
            return Err(ParseError::EmptyRow { column });
        }

        match self.row_length {
            None => {
                self.row_length = Some(self.cols);
                Ok(())
            },
            Some(expected) if expected == self.cols => Ok(()),
            Some(expected) => Err(ParseError::InconsistentRowSize { expected,
                                                                    found: self.cols,
                                                                    column }),
        }
    }
}
