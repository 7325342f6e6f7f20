/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use thiserror::Error;

use crate::leb128::Leb128DecodeError;

/// Error returned by the compact protocol value-tree parser.
///
/// Every variant carries the cursor offset at which the failure was
/// detected, so a caller can point back at the offending byte without the
/// parser itself doing any presentation work.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("buffer overflow at offset {offset}: requested {requested} byte(s), {remaining} remaining")]
    BufferOverflow {
        offset: usize,
        requested: usize,
        remaining: usize,
    },

    #[error("invalid compact type nibble {nibble:#x} at offset {offset}")]
    InvalidFieldType { nibble: u8, offset: usize },

    #[error("malformed varint at offset {offset}: {source}")]
    MalformedVarint {
        offset: usize,
        #[source]
        source: Leb128DecodeError,
    },

    #[error("string/binary length {len} at offset {offset} does not fit in usize")]
    InvalidLength { len: i64, offset: usize },

    #[error("max struct/collection nesting depth {limit} exceeded at offset {offset}")]
    MaxDepthExceeded { limit: u32, offset: usize },
}

impl DecodeError {
    /// Byte offset into the input at which this error was detected.
    pub fn offset(&self) -> usize {
        match self {
            DecodeError::BufferOverflow { offset, .. } => *offset,
            DecodeError::InvalidFieldType { offset, .. } => *offset,
            DecodeError::MalformedVarint { offset, .. } => *offset,
            DecodeError::InvalidLength { offset, .. } => *offset,
            DecodeError::MaxDepthExceeded { offset, .. } => *offset,
        }
    }
}

pub type DecodeResult<T> = Result<T, DecodeError>;
