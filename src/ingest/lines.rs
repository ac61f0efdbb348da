use std::io::BufRead;

use crate::error::{LogTallyError, Result};

/// One raw input line, numbered from 1, without its line terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    pub number: usize,
    pub bytes: Vec<u8>,
}

/// Iterates the lines of a reader as raw bytes.
///
/// UTF-8 decoding is left to the caller so an undecodable line stays a
/// per-line problem. Read failures end the stream with an error.
pub struct LineReader<R> {
    reader: R,
    source: String,
    number: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R, source: impl Into<String>) -> Self {
        Self {
            reader,
            source: source.into(),
            number: 0,
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<RawLine>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut bytes = Vec::new();
        let line = self.number + 1;
        match self.reader.read_until(b'\n', &mut bytes) {
            Ok(0) => None,
            Ok(_) => {
                self.number = line;
                if bytes.last() == Some(&b'\n') {
                    bytes.pop();
                    if bytes.last() == Some(&b'\r') {
                        bytes.pop();
                    }
                }
                Some(Ok(RawLine {
                    number: line,
                    bytes,
                }))
            }
            Err(source) => Some(Err(LogTallyError::LineRead {
                input: self.source.clone(),
                line,
                source,
            })),
        }
    }
}
