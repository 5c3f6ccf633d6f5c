//! The persistent player ledger.
//!
//! A single file of fixed 20-byte records (see [`codec`]). Records are only
//! ever appended; an existing record's trailing fields may be rewritten in
//! place but its `uid` never changes.
//!
//! Every operation opens the file, does its work and drops the handle before
//! returning. There is no file locking: two sessions sharing one ledger can
//! race (an append against a scan, or two in-place updates) and the ledger
//! assumes a single writer.

mod bytes;
pub mod codec;
mod scanner;
mod score;

pub use bytes::ByteBuffer;
pub use scanner::LedgerScanner;
pub use score::{HighScore, aggregate};

use std::fs::{File, OpenOptions};
use std::io::{BufReader, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::ledger::{DEFAULT_FILE, RECORD_SIZE, UID_SIZE};
use crate::error::{Error, OpenIntent, Result};
use crate::player::PlayerRecord;

/// Result of an in-place update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The record at `index` had its trailing fields rewritten.
    Written { index: usize },
    /// No record carries the uid; nothing was written.
    Unregistered,
}

#[derive(Debug, Clone)]
pub struct Ledger {
    path: PathBuf,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(DEFAULT_FILE)
    }
}

impl Ledger {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a scanner over the ledger, or `None` if the file can't be read.
    ///
    /// A missing file is the normal state before the first registration; any
    /// other open failure is logged and likewise treated as an empty ledger.
    pub fn scan(&self) -> Option<LedgerScanner<BufReader<File>>> {
        match File::open(&self.path) {
            Ok(file) => Some(LedgerScanner::new(BufReader::new(file))),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Ledger {:?} does not exist yet", self.path);
                None
            }
            Err(e) => {
                warn!("Failed to open ledger {:?} for reading: {}", self.path, e);
                None
            }
        }
    }

    /// Reads every whole record in file order.
    pub fn records(&self) -> Result<Vec<PlayerRecord>> {
        match self.scan() {
            Some(scanner) => scanner.collect(),
            None => Ok(Vec::new()),
        }
    }

    /// Returns the first record whose uid matches, or `None` on a miss.
    pub fn lookup(&self, uid: u32) -> Result<Option<PlayerRecord>> {
        let Some(scanner) = self.scan() else {
            return Ok(None);
        };

        for record in scanner {
            let record = record?;
            if record.uid == uid {
                debug!("Found ledger record for uid {}", uid);
                return Ok(Some(record));
            }
        }

        debug!("No ledger record for uid {}", uid);
        Ok(None)
    }

    /// Appends a complete record, creating the ledger if needed.
    ///
    /// A partial trailing record left by an interrupted append is cut off
    /// first, so the new record always starts on a record boundary.
    /// Does not check for an existing record with the same uid; callers
    /// register only after a lookup miss.
    pub fn register(&self, record: &PlayerRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&self.path)
            .map_err(|source| self.open_error(OpenIntent::Append, source))?;

        let len = file.metadata()?.len();
        let aligned = len - len % RECORD_SIZE as u64;
        if aligned != len {
            warn!(
                "Dropping {} bytes of truncated trailing record from {:?}",
                len - aligned,
                self.path
            );
            file.set_len(aligned)?;
        }

        file.seek(SeekFrom::Start(aligned))?;
        file.write_all(&codec::encode(record))?;
        info!("Registered uid {} as {:?}", record.uid, record.name.as_str());
        Ok(())
    }

    /// Rewrites credits, highscore and name of the record matching `record.uid`.
    ///
    /// The record is located by a forward scan, then its tail is overwritten
    /// with one write at `index * 20 + 4`. The uid bytes are never touched.
    pub fn update(&self, record: &PlayerRecord) -> Result<UpdateOutcome> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&self.path)
            .map_err(|source| self.open_error(OpenIntent::ReadWrite, source))?;

        let Some(index) = find_index(LedgerScanner::new(BufReader::new(&file)), record.uid)?
        else {
            debug!("Update skipped: uid {} is not registered", record.uid);
            return Ok(UpdateOutcome::Unregistered);
        };

        let offset = (index * RECORD_SIZE + UID_SIZE) as u64;
        file.seek(SeekFrom::Start(offset))?;
        file.write_all(&codec::encode_mutable(record))?;
        debug!(
            "Updated uid {} at record {} (offset {})",
            record.uid, index, offset
        );

        Ok(UpdateOutcome::Written { index })
    }

    /// Compares the ledger's best high score against `current`.
    pub fn high_score(&self, current: &PlayerRecord) -> Result<HighScore> {
        match self.scan() {
            Some(scanner) => aggregate(scanner, current),
            None => aggregate(std::iter::empty::<Result<PlayerRecord>>(), current),
        }
    }

    fn open_error(&self, intent: OpenIntent, source: std::io::Error) -> Error {
        Error::LedgerOpen {
            path: self.path.clone(),
            intent,
            source,
        }
    }
}

fn find_index<R: Read>(scanner: LedgerScanner<R>, uid: u32) -> Result<Option<usize>> {
    for (index, record) in scanner.enumerate() {
        if record?.uid == uid {
            return Ok(Some(index));
        }
    }
    Ok(None)
}
