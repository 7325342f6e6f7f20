/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use crate::error::DecodeError;

/// Thrift wire types, as they appear on the compact protocol's 4-bit type
/// nibble. `BoolTrue`/`BoolFalse` are folded into `Void`/`Bool` by
/// [`ThriftType::from_compact`] -- see the parser module for why the two
/// need different treatment depending on whether they sit in a struct field
/// or a collection element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThriftType {
    Stop,
    Void,
    Bool,
    Byte,
    Double,
    Int16,
    Int32,
    Int64,
    String,
    Struct,
    Map,
    List,
    Set,
}

impl ThriftType {
    pub fn from_compact(nibble: u8) -> Result<ThriftType, u8> {
        match nibble {
            0 => Ok(ThriftType::Stop),
            1 => Ok(ThriftType::Void),
            2 => Ok(ThriftType::Bool),
            3 => Ok(ThriftType::Byte),
            4 => Ok(ThriftType::Int16),
            5 => Ok(ThriftType::Int32),
            6 => Ok(ThriftType::Int64),
            7 => Ok(ThriftType::Double),
            8 => Ok(ThriftType::String),
            9 => Ok(ThriftType::List),
            10 => Ok(ThriftType::Set),
            11 => Ok(ThriftType::Map),
            12 => Ok(ThriftType::Struct),
            _ => Err(nibble),
        }
    }

    pub fn from_compact_at(nibble: u8, offset: usize) -> Result<ThriftType, DecodeError> {
        ThriftType::from_compact(nibble).map_err(|nibble| DecodeError::InvalidFieldType {
            nibble,
            offset,
        })
    }

    pub fn to_compact(self) -> u8 {
        match self {
            ThriftType::Stop => 0,
            ThriftType::Void => 1,
            ThriftType::Bool => 2,
            ThriftType::Byte => 3,
            ThriftType::Int16 => 4,
            ThriftType::Int32 => 5,
            ThriftType::Int64 => 6,
            ThriftType::Double => 7,
            ThriftType::String => 8,
            ThriftType::List => 9,
            ThriftType::Set => 10,
            ThriftType::Map => 11,
            ThriftType::Struct => 12,
        }
    }
}
