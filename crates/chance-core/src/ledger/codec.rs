//! Fixed-width binary encoding of a single ledger record.
//!
//! Layout (little-endian):
//!
//! ```text
//! bytes 0..4    uid        u32
//! bytes 4..8    credits    i32
//! bytes 8..12   highscore  i32
//! bytes 12..20  name       7 content bytes max, zero-padded, always zero-terminated
//! ```

use crate::config::ledger::{MUTABLE_SIZE, NAME_SIZE, RECORD_SIZE, UID_SIZE};
use crate::error::{Error, Result};
use crate::ledger::ByteBuffer;
use crate::player::PlayerRecord;

/// Encodes a full 20-byte record.
pub fn encode(record: &PlayerRecord) -> [u8; RECORD_SIZE] {
    let mut bytes = [0u8; RECORD_SIZE];
    bytes[..UID_SIZE].copy_from_slice(&record.uid.to_le_bytes());
    bytes[UID_SIZE..].copy_from_slice(&encode_mutable(record));
    bytes
}

/// Encodes the fields following `uid`: credits, highscore and name.
pub fn encode_mutable(record: &PlayerRecord) -> [u8; MUTABLE_SIZE] {
    let mut bytes = [0u8; MUTABLE_SIZE];
    bytes[0..4].copy_from_slice(&record.credits.to_le_bytes());
    bytes[4..8].copy_from_slice(&record.highscore.to_le_bytes());

    // PlayerName guarantees at most NAME_SIZE - 1 bytes, the rest stays zero
    let name = record.name.as_bytes();
    let len = name.len().min(NAME_SIZE - 1);
    bytes[8..8 + len].copy_from_slice(&name[..len]);
    bytes
}

/// Decodes exactly one 20-byte record.
pub fn decode(bytes: &[u8]) -> Result<PlayerRecord> {
    if bytes.len() > RECORD_SIZE {
        return Err(Error::OversizedRecord { len: bytes.len() });
    }

    let mut buf = ByteBuffer::new(bytes);
    let uid = buf.read_u32()?;
    let credits = buf.read_i32()?;
    let highscore = buf.read_i32()?;
    let name = buf.read_zstring(NAME_SIZE)?;

    Ok(PlayerRecord::new(uid, credits, highscore, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_layout() {
        let record = PlayerRecord::new(1000, -5, 250, "katie");
        let bytes = encode(&record);

        assert_eq!(&bytes[0..4], &[0xE8, 0x03, 0x00, 0x00]);
        assert_eq!(&bytes[4..8], &[0xFB, 0xFF, 0xFF, 0xFF]);
        assert_eq!(&bytes[8..12], &[0xFA, 0x00, 0x00, 0x00]);
        assert_eq!(&bytes[12..20], b"katie\0\0\0");
    }

    #[test]
    fn test_round_trip_extremes() {
        let names = ["", "a", "abcdefg"];
        for uid in [0, u32::MAX] {
            for (credits, highscore) in [(i32::MIN, -1), (0, 0), (100, i32::MAX)] {
                for name in names {
                    let record = PlayerRecord::new(uid, credits, highscore, name);
                    assert_eq!(decode(&encode(&record)).unwrap(), record);
                }
            }
        }
    }

    #[test]
    fn test_long_name_is_truncated_and_terminated() {
        let record = PlayerRecord::new(7, 100, 100, "abcdefghij");
        let bytes = encode(&record);

        assert_eq!(bytes[RECORD_SIZE - 1], 0);
        assert_eq!(decode(&bytes).unwrap().name.as_str(), "abcdefg");
    }

    #[test]
    fn test_encode_mutable_matches_tail() {
        let record = PlayerRecord::new(3, 42, 99, "bob");
        assert_eq!(encode_mutable(&record), encode(&record)[UID_SIZE..]);
    }

    #[test]
    fn test_decode_short_record() {
        let bytes = encode(&PlayerRecord::new_account(1, "a"));
        assert!(matches!(
            decode(&bytes[..12]),
            Err(Error::ShortRecord { len: 12 })
        ));
    }

    #[test]
    fn test_decode_oversized_record() {
        let bytes = [0u8; RECORD_SIZE + 1];
        assert!(matches!(
            decode(&bytes),
            Err(Error::OversizedRecord { len: 21 })
        ));
    }

    #[test]
    fn test_decode_unterminated_name() {
        let mut bytes = encode(&PlayerRecord::new_account(1, ""));
        bytes[12..20].copy_from_slice(b"ABCDEFGH");
        assert_eq!(decode(&bytes).unwrap().name.as_str(), "ABCDEFG");
    }

    #[test]
    fn test_decode_invalid_utf8_name() {
        let mut bytes = encode(&PlayerRecord::new_account(1, ""));
        bytes[12] = 0xFF;
        assert!(matches!(decode(&bytes), Err(Error::InvalidName)));
    }
}
