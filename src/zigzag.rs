/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

//! Zig-zag signed/unsigned bijection, applied after an unsigned value has
//! already been decoded (LEB128 or, for the 16-bit field-ID escape, a raw
//! big-endian pair). Kept as free functions rather than a shared trait since
//! the three widths have no common unsigned supertype worth introducing for
//! three call sites.

#[inline]
pub fn decode_i16(n: u16) -> i16 {
    ((n >> 1) as i16) ^ -((n & 1) as i16)
}

#[inline]
pub fn decode_i32(n: u32) -> i32 {
    ((n >> 1) as i32) ^ -((n & 1) as i32)
}

#[inline]
pub fn decode_i64(n: u64) -> i64 {
    ((n >> 1) as i64) ^ -((n & 1) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_i16_round_trip() {
        assert_eq!(decode_i16(0), 0);
        assert_eq!(decode_i16(1), -1);
        assert_eq!(decode_i16(2), 1);
        assert_eq!(decode_i16(3), -2);
    }

    #[test]
    fn decode_i32_matches_spec_example() {
        // zig-zag(150) == 300
        assert_eq!(decode_i32(300), 150);
    }

    #[test]
    fn decode_i64_negative() {
        assert_eq!(decode_i64(1), -1);
        assert_eq!(decode_i64(3), -2);
    }
}
