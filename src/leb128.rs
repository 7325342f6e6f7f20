/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use thiserror::Error;

use crate::cursor::Cursor;
use crate::error::DecodeError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Leb128DecodeError {
    #[error("varint exceeds 64-bit width without a terminating byte")]
    NoEndFound,
}

/// Reads an unsigned LEB128 integer from `cur`.
///
/// Bytes are consumed while the high bit is set; the first byte whose high
/// bit is clear terminates the run. The accumulator is always 64 bits wide
/// regardless of the caller's target type -- bits shifted past the target
/// width are simply discarded by the caller's later truncating cast, which
/// matches how the reference decoder behaves on over-long varints.
pub fn read_unsigned(cur: &mut Cursor) -> Result<u64, DecodeError> {
    let first = cur.read_byte()?;
    read_unsigned_with_first_byte(cur, first)
}

/// Same as [`read_unsigned`], but the first byte was already consumed by the
/// caller (e.g. while peeking a map header to test for the empty-map case)
/// and is supplied here instead of being read again.
pub fn read_unsigned_with_first_byte(cur: &mut Cursor, first: u8) -> Result<u64, DecodeError> {
    let start_offset = cur.peek_offset().saturating_sub(1);
    let mut value = (first & 0x7F) as u64;
    if first & 0x80 == 0 {
        return Ok(value);
    }

    let mut shift = 7u32;
    loop {
        let b = cur.read_byte()?;
        value |= ((b & 0x7F) as u64) << shift;
        if b & 0x80 == 0 {
            return Ok(value);
        }
        shift += 7;
        if shift >= 70 {
            return Err(DecodeError::MalformedVarint {
                offset: start_offset,
                source: Leb128DecodeError::NoEndFound,
            });
        }
    }
}

/// Consumes a LEB128-terminated run of bytes without decoding its value,
/// returning the raw slice (continuation bytes and terminator included).
///
/// Struct and collection integer payloads are kept in this undecoded form;
/// zig-zag interpretation at the caller's chosen width is deferred to
/// whoever walks the value tree (see the parser module's doc comment).
pub fn consume_run<'a>(cur: &mut Cursor<'a>) -> Result<&'a [u8], DecodeError> {
    let start = cur.peek_offset();
    loop {
        let b = cur.read_byte()?;
        if b & 0x80 == 0 {
            break;
        }
        if cur.peek_offset() - start >= 10 {
            return Err(DecodeError::MalformedVarint {
                offset: start,
                source: Leb128DecodeError::NoEndFound,
            });
        }
    }
    Ok(cur.consumed_since(start))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_byte() {
        let mut cur = Cursor::new(&[0x01]);
        assert_eq!(read_unsigned(&mut cur).unwrap(), 1);
    }

    #[test]
    fn multi_byte() {
        // 300 zig-zagged is out of scope here; this is the raw unsigned form.
        let mut cur = Cursor::new(&[0xAC, 0x02]);
        assert_eq!(read_unsigned(&mut cur).unwrap(), 300);
    }

    #[test]
    fn with_pre_read_first_byte() {
        let mut cur = Cursor::new(&[0x02]);
        let first = 0xAC;
        assert_eq!(read_unsigned_with_first_byte(&mut cur, first).unwrap(), 300);
    }

    #[test]
    fn unterminated_varint_errors() {
        let data = [0xFF; 16];
        let mut cur = Cursor::new(&data);
        let err = read_unsigned(&mut cur).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedVarint { .. }));
    }
}
