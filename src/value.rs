/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use indexmap::IndexMap;

use crate::ttype::ThriftType;

/// One field entry inside a [`ThriftStruct`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThriftValue<'a> {
    pub index: i16,
    pub ttype: ThriftType,
    pub object: ThriftObject<'a>,
}

/// The generic, schema-agnostic value produced by the parser.
///
/// Terminal primitives and strings are preserved as their undecoded
/// compact-wire byte form (`Data`) -- see the parser module for the exact
/// payload shape per type. This borrows directly from the input buffer, so
/// decoding never allocates for anything but the container bookkeeping
/// (`IndexMap`/`Vec`) of structs and collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThriftObject<'a> {
    /// A collection-element position that carried no payload (compact
    /// `void`/bool-true-as-field only ever appears as a field, never as a
    /// collection element -- this variant exists for completeness on that
    /// boundary).
    Stop,
    Data(&'a [u8]),
    Struct(ThriftStruct<'a>),
    KeyedCollection(ThriftKeyedCollection<'a>),
    UnkeyedCollection(ThriftUnkeyedCollection<'a>),
}

/// A decoded struct. `index` is the field ID this struct occupied in its
/// parent, `None` for the top-level root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThriftStruct<'a> {
    pub index: Option<i16>,
    pub fields: IndexMap<i16, ThriftValue<'a>>,
}

/// A decoded map entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThriftMapEntry<'a> {
    pub key: ThriftObject<'a>,
    pub value: ThriftObject<'a>,
}

/// A decoded map. `entries.len()` always equals `count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThriftKeyedCollection<'a> {
    pub index: Option<i16>,
    pub count: usize,
    pub key_type: ThriftType,
    pub element_type: ThriftType,
    pub entries: Vec<ThriftMapEntry<'a>>,
}

/// Distinguishes a list from a set; both share the same wire encoding and
/// element decoding path, but callers need to tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    List,
    Set,
}

/// A decoded list or set. `entries.len()` always equals `count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThriftUnkeyedCollection<'a> {
    pub index: Option<i16>,
    pub kind: CollectionKind,
    pub count: usize,
    pub element_type: ThriftType,
    pub entries: Vec<ThriftObject<'a>>,
}
