//! Sequential, forward-only traversal of ledger records.

use std::io::{ErrorKind, Read};

use tracing::{debug, warn};

use crate::config::ledger::RECORD_SIZE;
use crate::error::Result;
use crate::ledger::codec;
use crate::player::PlayerRecord;

/// Lazily yields every whole record from the start of a ledger stream.
///
/// A trailing partial record (a crash mid-append) ends the sequence the same
/// way a clean EOF does; its bytes are discarded without an error. The first
/// error or end of data fuses the iterator.
pub struct LedgerScanner<R> {
    reader: R,
    records_read: usize,
    done: bool,
}

impl<R: Read> LedgerScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            records_read: 0,
            done: false,
        }
    }

    /// Number of whole records yielded so far.
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Fills `buf` until it is full or the stream ends, returning the byte count.
    fn fill(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }
}

impl<R: Read> Iterator for LedgerScanner<R> {
    type Item = Result<PlayerRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut buf = [0u8; RECORD_SIZE];
        let filled = match self.fill(&mut buf) {
            Ok(n) => n,
            Err(e) => {
                self.done = true;
                return Some(Err(e.into()));
            }
        };

        if filled == 0 {
            debug!("Ledger scan reached EOF after {} records", self.records_read);
            self.done = true;
            return None;
        }
        if filled < RECORD_SIZE {
            warn!(
                "Discarding truncated trailing record ({} of {} bytes) after {} records",
                filled, RECORD_SIZE, self.records_read
            );
            self.done = true;
            return None;
        }

        match codec::decode(&buf) {
            Ok(record) => {
                self.records_read += 1;
                Some(Ok(record))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: Read> std::iter::FusedIterator for LedgerScanner<R> {}
