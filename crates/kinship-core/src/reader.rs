//! Cursor over level-tagged input lines
//!
//! Every structural line starts with a decimal nesting level. The cursor holds
//! one current line at a time and never goes backwards; parsers receive it by
//! `&mut` and leave it on the first line they did not consume.

use crate::error::Result;
use std::io::BufRead;

const BOM: char = '\u{feff}';

/// One structural input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based physical line number
    pub number: usize,
    /// Value of the leading digit, `None` when the line does not start with one
    pub level: Option<u8>,
    /// Line text without its line ending
    pub text: String,
}

impl Line {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        let level = text
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .map(|d| d as u8);
        Self {
            number,
            level,
            text,
        }
    }

    /// Level-0 lines open a new record
    pub fn is_record_start(&self) -> bool {
        self.level == Some(0)
    }

    /// True if this line nests below a line at `level`
    pub fn is_deeper_than(&self, level: u8) -> bool {
        self.level.map_or(false, |l| l > level)
    }

    /// Four-character tag at column 2, if the line is long enough
    pub fn tag(&self) -> Option<&str> {
        self.text.get(2..6)
    }

    /// Text from `column` to the end of the line
    pub fn from_column(&self, column: usize) -> Option<&str> {
        self.text.get(column..)
    }

    /// Whitespace-separated fields
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }
}

/// Forward-only cursor producing one [`Line`] at a time
pub struct LineCursor<R> {
    input: R,
    current: Option<Line>,
    line_number: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> LineCursor<R> {
    /// Wrap `input` and load its first line
    pub fn new(input: R) -> Result<Self> {
        let mut cursor = Self {
            input,
            current: None,
            line_number: 0,
            buf: Vec::new(),
        };
        cursor.advance()?;
        Ok(cursor)
    }

    /// The line under the cursor, `None` at end of input
    pub fn current(&self) -> Option<&Line> {
        self.current.as_ref()
    }

    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Physical lines read so far
    pub fn lines_read(&self) -> usize {
        self.line_number
    }

    /// Move to the next non-blank line
    pub fn advance(&mut self) -> Result<()> {
        loop {
            self.buf.clear();
            if self.input.read_until(b'\n', &mut self.buf)? == 0 {
                self.current = None;
                return Ok(());
            }
            self.line_number += 1;

            let raw = String::from_utf8_lossy(&self.buf);
            let mut text = raw.trim_end_matches(['\n', '\r']);
            if self.line_number == 1 {
                text = text.trim_start_matches(BOM);
            }
            if text.trim().is_empty() {
                continue;
            }

            tracing::trace!("line {}: {}", self.line_number, text);
            self.current = Some(Line::new(self.line_number, text));
            return Ok(());
        }
    }

    /// Advance until the cursor rests on a record start or end of input
    pub fn skip_to_next_record(&mut self) -> Result<()> {
        while self.current().map_or(false, |line| !line.is_record_start()) {
            self.advance()?;
        }
        Ok(())
    }
}
