/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

//! The recursive-descent value-tree parser.
//!
//! The compact protocol overloads a single byte in several places (the
//! field header's type nibble doubles as the bool value; a collection
//! header's high nibble is either an element type or the top 4 bits of a
//! short count) and mixes four numeric encodings. Rather than decode
//! integers eagerly, this parser preserves them in their undecoded
//! LEB128/fixed wire form inside [`ThriftObject::Data`] and leaves zig-zag
//! interpretation to whichever caller actually needs the value -- the same
//! contract the reference decoder this was ported from uses.

use indexmap::IndexMap;

use crate::cursor::Cursor;
use crate::error::DecodeError;
use crate::leb128;
use crate::ttype::ThriftType;
use crate::value::{
    CollectionKind, ThriftKeyedCollection, ThriftMapEntry, ThriftObject, ThriftStruct,
    ThriftUnkeyedCollection, ThriftValue,
};

/// Recursion guard default. The wire format has no depth field, so an
/// adversarial input could otherwise nest structs/collections deep enough
/// to blow the call stack; see the design notes on recursion depth.
pub const DEFAULT_MAX_DEPTH: u32 = 512;

pub struct Parser<'a> {
    cur: Cursor<'a>,
    depth: u32,
    max_depth: u32,
}

impl<'a> Parser<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Parser {
            cur: Cursor::new(data),
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(data: &'a [u8], max_depth: u32) -> Self {
        Parser {
            cur: Cursor::new(data),
            depth: 0,
            max_depth,
        }
    }

    fn enter_nested(&mut self) -> Result<(), DecodeError> {
        if self.depth >= self.max_depth {
            return Err(DecodeError::MaxDepthExceeded {
                limit: self.max_depth,
                offset: self.cur.peek_offset(),
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn exit_nested(&mut self) {
        self.depth -= 1;
    }

    pub fn parse_struct(&mut self) -> Result<ThriftStruct<'a>, DecodeError> {
        self.read_struct(None)
    }

    pub fn parse_value(&mut self, expected_type: ThriftType) -> Result<ThriftObject<'a>, DecodeError> {
        self.read_value(None, expected_type, false)
    }

    /// A struct is a sequence of field headers and values, terminated by a
    /// `stop` header byte.
    fn read_struct(&mut self, index: Option<i16>) -> Result<ThriftStruct<'a>, DecodeError> {
        self.enter_nested()?;
        let mut fields = IndexMap::new();
        let mut previous_id: i16 = 0;
        loop {
            match self.read_field_header(previous_id)? {
                None => break,
                Some((ttype, id)) => {
                    let object = self.read_value(Some(id), ttype, false)?;
                    fields.insert(
                        id,
                        ThriftValue {
                            index: id,
                            ttype,
                            object,
                        },
                    );
                    previous_id = id;
                }
            }
        }
        self.exit_nested();
        Ok(ThriftStruct { index, fields })
    }

    /// Reads one field header. Returns `None` on the `stop` sentinel,
    /// `Some((type, field_id))` otherwise.
    ///
    /// The 16-bit field-ID escape (`delta == 0`) reads two raw big-endian
    /// bytes and zig-zag decodes them directly -- the public compact
    /// protocol spec instead defines this as a zig-zag LEB128 varint. This
    /// decoder follows the reference implementation it was modeled on,
    /// which only round-trips correctly with encoders sharing the same
    /// divergence (see the design notes in this crate's root documentation).
    fn read_field_header(&mut self, previous_id: i16) -> Result<Option<(ThriftType, i16)>, DecodeError> {
        let header_offset = self.cur.peek_offset();
        let h = self.cur.read_byte()?;
        if h == 0 {
            return Ok(None);
        }

        let delta = (h >> 4) & 0x0F;
        let tcode = h & 0x0F;
        let ttype = ThriftType::from_compact_at(tcode, header_offset)?;

        let id = if delta == 0 {
            let raw = self.cur.read_u16_be()?;
            crate::zigzag::decode_i16(raw)
        } else {
            previous_id.wrapping_add(delta as i16)
        };

        Ok(Some((ttype, id)))
    }

    /// Decodes one value of `ttype`. `in_collection` controls the
    /// `void`/`bool` special case: the struct field header already conveys a
    /// bool's truth value, so no payload byte follows there, while a
    /// collection element always needs a real byte.
    fn read_value(
        &mut self,
        index: Option<i16>,
        ttype: ThriftType,
        in_collection: bool,
    ) -> Result<ThriftObject<'a>, DecodeError> {
        match ttype {
            ThriftType::Void => {
                if in_collection {
                    Ok(ThriftObject::Stop)
                } else {
                    Ok(ThriftObject::Data(&[0x01]))
                }
            }
            ThriftType::Bool => {
                if in_collection {
                    let b = self.cur.read_bytes(1)?;
                    Ok(ThriftObject::Data(b))
                } else {
                    Ok(ThriftObject::Data(&[0x00]))
                }
            }
            ThriftType::Byte => Ok(ThriftObject::Data(self.cur.read_bytes(1)?)),
            ThriftType::Double => Ok(ThriftObject::Data(self.cur.read_f64_le_bytes()?)),
            ThriftType::Int16 | ThriftType::Int32 | ThriftType::Int64 => {
                Ok(ThriftObject::Data(leb128::consume_run(&mut self.cur)?))
            }
            ThriftType::String => {
                let len_offset = self.cur.peek_offset();
                let len = leb128::read_unsigned(&mut self.cur)?;
                let len = usize::try_from(len).map_err(|_| DecodeError::InvalidLength {
                    len: len as i64,
                    offset: len_offset,
                })?;
                Ok(ThriftObject::Data(self.cur.read_bytes(len)?))
            }
            ThriftType::Struct => Ok(ThriftObject::Struct(self.read_struct(index)?)),
            ThriftType::Map => Ok(ThriftObject::KeyedCollection(self.read_map(index)?)),
            ThriftType::List => Ok(ThriftObject::UnkeyedCollection(
                self.read_list_or_set(index, CollectionKind::List)?,
            )),
            ThriftType::Set => Ok(ThriftObject::UnkeyedCollection(
                self.read_list_or_set(index, CollectionKind::Set)?,
            )),
            ThriftType::Stop => Ok(ThriftObject::Stop),
        }
    }

    /// A map header is either a single zero byte (empty map) or a LEB128
    /// count followed by a packed key/element type byte.
    fn read_map(&mut self, index: Option<i16>) -> Result<ThriftKeyedCollection<'a>, DecodeError> {
        self.enter_nested()?;
        let count_offset = self.cur.peek_offset();
        let h = self.cur.read_byte()?;
        if h == 0 {
            self.exit_nested();
            return Ok(ThriftKeyedCollection {
                index,
                count: 0,
                key_type: ThriftType::Stop,
                element_type: ThriftType::Stop,
                entries: Vec::new(),
            });
        }

        let count = leb128::read_unsigned_with_first_byte(&mut self.cur, h)?;
        let count = usize::try_from(count).map_err(|_| DecodeError::InvalidLength {
            len: count as i64,
            offset: count_offset,
        })?;

        let types_offset = self.cur.peek_offset();
        let t = self.cur.read_byte()?;
        let key_type = ThriftType::from_compact_at(t >> 4, types_offset)?;
        let element_type = ThriftType::from_compact_at(t & 0x0F, types_offset)?;

        let mut entries = Vec::new();
        for _ in 0..count {
            let key = self.read_value(None, key_type, true)?;
            let value = self.read_value(None, element_type, true)?;
            entries.push(ThriftMapEntry { key, value });
        }

        self.exit_nested();
        Ok(ThriftKeyedCollection {
            index,
            count,
            key_type,
            element_type,
            entries,
        })
    }

    /// A list/set header packs a 4-bit short count (with `15` as an escape
    /// to a trailing LEB128 count) and the element type nibble into one
    /// byte.
    fn read_list_or_set(
        &mut self,
        index: Option<i16>,
        kind: CollectionKind,
    ) -> Result<ThriftUnkeyedCollection<'a>, DecodeError> {
        self.enter_nested()?;
        let header_offset = self.cur.peek_offset();
        let h = self.cur.read_byte()?;
        let short_count = (h >> 4) & 0x0F;
        let elem_tcode = h & 0x0F;
        let element_type = ThriftType::from_compact_at(elem_tcode, header_offset)?;

        let count = if short_count < 15 {
            short_count as usize
        } else {
            let count_offset = self.cur.peek_offset();
            let v = leb128::read_unsigned(&mut self.cur)?;
            usize::try_from(v).map_err(|_| DecodeError::InvalidLength {
                len: v as i64,
                offset: count_offset,
            })?
        };

        let mut entries = Vec::new();
        for _ in 0..count {
            entries.push(self.read_value(None, element_type, true)?);
        }

        self.exit_nested();
        Ok(ThriftUnkeyedCollection {
            index,
            kind,
            count,
            element_type,
            entries,
        })
    }
}

/// Parses a top-level struct out of a complete compact-protocol message body.
pub fn parse_struct(data: &[u8]) -> Result<ThriftStruct<'_>, DecodeError> {
    log::trace!("parsing compact thrift struct from {} byte(s)", data.len());
    let result = Parser::new(data).parse_struct();
    if let Err(ref e) = result {
        log::debug!("compact thrift struct decode failed at offset {}: {e}", e.offset());
    }
    result
}

/// Parses a single value of the caller-specified type.
pub fn parse_value(data: &[u8], expected_type: ThriftType) -> Result<ThriftObject<'_>, DecodeError> {
    log::trace!(
        "parsing compact thrift value of type {expected_type:?} from {} byte(s)",
        data.len()
    );
    let result = Parser::new(data).parse_value(expected_type);
    if let Err(ref e) = result {
        log::debug!("compact thrift value decode failed at offset {}: {e}", e.offset());
    }
    result
}
