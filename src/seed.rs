// Copyright 2012-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Abstracts over the fixed-width unsigned integers a `BitVector` can be
/// seeded from (basically unsigned primitives).
pub trait SeedValue: Copy {
    /// How many bytes it has
    fn bytes() -> usize;
    /// The `i`th byte, least significant first. `i` must be below `bytes()`.
    fn byte(self, i: usize) -> u8;
}

macro_rules! seed_value_impl {
    ($($t: ty),*) => ($(
        impl SeedValue for $t {
            #[inline]
            fn bytes() -> usize { core::mem::size_of::<$t>() }
            #[inline]
            fn byte(self, i: usize) -> u8 { (self >> (i * 8)) as u8 }
        }
    )*)
}

seed_value_impl! {
    u8,
    u16,
    u32,
    u64,
    u128,
    usize
}

#[cfg(test)]
mod tests {
    use super::SeedValue;

    #[test]
    fn test_widths() {
        assert_eq!(u8::bytes(), 1);
        assert_eq!(u16::bytes(), 2);
        assert_eq!(u32::bytes(), 4);
        assert_eq!(u64::bytes(), 8);
        assert_eq!(u128::bytes(), 16);
        assert_eq!(usize::bytes(), core::mem::size_of::<usize>());
    }

    #[test]
    fn test_bytes_are_little_endian() {
        let v: u32 = 0x1234_5678;
        assert_eq!(v.byte(0), 0x78);
        assert_eq!(v.byte(1), 0x56);
        assert_eq!(v.byte(2), 0x34);
        assert_eq!(v.byte(3), 0x12);
        assert_eq!(0xABu8.byte(0), 0xAB);
        assert_eq!((1u128 << 120).byte(15), 0x01);
    }
}
