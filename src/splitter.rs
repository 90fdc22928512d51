use std::io::{self, ErrorKind, Read};

use crate::consts::READ_BLOCK_SIZE;

/// Lazily splits a reader into separator-delimited statements.
///
/// The reader is consumed in fixed-size blocks and only the unfinished tail is
/// kept in memory. Whatever follows the last separator is emitted once the
/// reader is exhausted, so a stream ending on a separator produces a final
/// empty statement and an empty stream produces exactly one.
pub struct Statements<R> {
    reader: R,
    separator: Vec<u8>,
    block: Vec<u8>,
    buffer: Vec<u8>,
    // buffer offset before which no separator can start
    scan_from: usize,
    finished: bool,
}

pub fn split_statements<R: Read>(reader: R, separator: &str) -> Statements<R> {
    Statements::with_block_size(reader, separator, READ_BLOCK_SIZE)
}

impl<R: Read> Statements<R> {
    pub fn with_block_size(reader: R, separator: &str, block_size: usize) -> Self {
        Self {
            reader,
            separator: separator.as_bytes().to_vec(),
            block: vec![0; block_size.max(1)],
            buffer: Vec::new(),
            scan_from: 0,
            finished: false,
        }
    }

    fn take_statement(&mut self) -> Option<Vec<u8>> {
        // an empty separator never matches
        if self.separator.is_empty() {
            return None;
        }

        let sep_len = self.separator.len();
        match find(&self.buffer[self.scan_from..], &self.separator) {
            Some(pos) => {
                let end = self.scan_from + pos;
                let mut statement: Vec<u8> = self.buffer.drain(..end + sep_len).collect();
                statement.truncate(end);
                self.scan_from = 0;
                Some(statement)
            }
            None => {
                // a separator may still be completed by the next block
                self.scan_from = self.buffer.len().saturating_sub(sep_len - 1);
                None
            }
        }
    }
}

impl<R: Read> Iterator for Statements<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.finished {
                return None;
            }

            if let Some(statement) = self.take_statement() {
                return Some(decode(statement));
            }

            match self.reader.read(&mut self.block) {
                Ok(0) => {
                    self.finished = true;
                    let rest = std::mem::take(&mut self.buffer);
                    return Some(decode(rest));
                }
                Ok(n) => self.buffer.extend_from_slice(&self.block[..n]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn decode(bytes: Vec<u8>) -> io::Result<String> {
    String::from_utf8(bytes).map_err(|e| io::Error::new(ErrorKind::InvalidData, e))
}
