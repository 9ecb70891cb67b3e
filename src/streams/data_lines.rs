use crate::utils::file_parsing::strip_comment;
use std::fs::File;
use std::io::{BufRead, BufReader, Error, Lines, Seek, SeekFrom};

/// Data rows of a text file with one record per line.
///
/// Blank lines and `%` comments are skipped. The next row is buffered so
/// `has_next` stays cheap.
pub(crate) struct DataLines {
    lines: Lines<BufReader<File>>,
    lookahead: Option<Result<(usize, String), Error>>,
    line_number: usize,
    data_start: u64,
}

impl DataLines {
    /// Starts reading at byte offset `data_start`, which must be the start
    /// of a line; `first_line_number` is the 1-based number of that line.
    pub(crate) fn new(
        mut file: File,
        data_start: u64,
        first_line_number: usize,
    ) -> Result<Self, Error> {
        file.seek(SeekFrom::Start(data_start))?;
        let mut out = Self {
            lines: BufReader::new(file).lines(),
            lookahead: None,
            line_number: first_line_number.saturating_sub(1),
            data_start,
        };
        out.advance();
        Ok(out)
    }

    fn advance(&mut self) {
        self.lookahead = loop {
            match self.lines.next() {
                None => break None,
                Some(Err(e)) => break Some(Err(e)),
                Some(Ok(line)) => {
                    self.line_number += 1;
                    let content = strip_comment(&line).trim();
                    if !content.is_empty() {
                        break Some(Ok((self.line_number, content.to_string())));
                    }
                }
            }
        };
    }

    pub(crate) fn has_next(&self) -> bool {
        self.lookahead.is_some()
    }

    /// Next non-empty row with its 1-based line number.
    pub(crate) fn next_row(&mut self) -> Option<Result<(usize, String), Error>> {
        let row = self.lookahead.take()?;
        if row.is_ok() {
            self.advance();
        }
        Some(row)
    }

    pub(crate) fn reopen(&mut self, file: File, first_line_number: usize) -> Result<(), Error> {
        *self = Self::new(file, self.data_start, first_line_number)?;
        Ok(())
    }
}
