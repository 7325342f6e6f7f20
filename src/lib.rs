/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

//! Read-only decoder for the Apache Thrift **compact binary protocol**.
//!
//! This crate turns a complete compact-protocol message body into a
//! generic, self-describing value tree ([`ThriftStruct`] / [`ThriftObject`])
//! that callers can walk without a schema, since the compact encoding
//! carries its own type tags. It does not bind the tree to typed
//! application structs, does not encode, and does not speak the older
//! binary (non-compact) Thrift protocol -- those are all out of scope by
//! design, see the crate-level design notes for the full rationale.
//!
//! The entry points are [`parse_struct`] for a top-level struct and
//! [`parse_value`] for a single value of a caller-known type.
//!
//! ```
//! use thrift_compact::{parse_struct, ThriftObject};
//!
//! // field id=1, type=i32 (delta=1, tcode=5), zig-zag LEB128 of 150, stop
//! let buf = [0x15, 0xAC, 0x02, 0x00];
//! let s = parse_struct(&buf).unwrap();
//! let field = &s.fields[&1];
//! assert_eq!(field.object, ThriftObject::Data(&[0xAC, 0x02][..]));
//! ```

mod cursor;
mod error;
mod leb128;
mod parser;
mod ttype;
mod value;
mod zigzag;

pub use error::{DecodeError, DecodeResult};
pub use parser::{parse_struct, parse_value, Parser, DEFAULT_MAX_DEPTH};
pub use ttype::ThriftType;
pub use value::{
    CollectionKind, ThriftKeyedCollection, ThriftMapEntry, ThriftObject, ThriftStruct,
    ThriftUnkeyedCollection, ThriftValue,
};
