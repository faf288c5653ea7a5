// Copyright 2012-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// (1) Make sure that the underlying vector has no excess length:
//     E. g. `nbits == 16`, `storage.len() == 3` would be excess length,
//     because the last byte isn't used at all. The bitwise operators rely on
//     it to zip two equal-length vectors byte by byte.
// (2) Make sure that the unused bits in the last byte are zeroed out.
//     `count`, `any`, `none`, `all`, equality and hashing read whole bytes
//     and rely on it for *CORRECTNESS*. Every mutator that can dirty them
//     ends in `fix_last_block`.

//! A resizable vector of bits packed eight to a byte.
//!
//! Bit `0` is the least significant bit of the first byte. Rendering with
//! `Display` prints the most significant bit first, the way an integer
//! literal reads.
//!
//! # Examples
//!
//! ```
//! use bit_vector::BitVector;
//!
//! let bv = BitVector::with_seed(8, 0b0000_1011u8);
//! assert_eq!(bv.to_string(), "00001011");
//! assert_eq!(bv.count(), 3);
//!
//! assert_eq!((&bv << 2).to_string(), "00101100");
//! assert_eq!((&bv >> 2).to_string(), "00000010");
//!
//! let mask = BitVector::with_seed(8, 0b0000_0110u8);
//! assert_eq!((&bv & &mask).to_string(), "00000010");
//! assert_eq!((&bv ^ &mask).to_string(), "00001101");
//! assert_eq!((!&bv).to_string(), "11110100");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use core::cmp;
use core::fmt::{self, Write};
use core::hash;
use core::iter::FromIterator;
use core::mem;
use core::ops::*;
use core::str::FromStr;

mod error;
mod seed;

pub use crate::error::{Error, ErrorKind};
pub use crate::seed::SeedValue;

const BITS: usize = 8;

static TRUE: bool = true;
static FALSE: bool = false;

/// The bitvector type.
///
/// # Examples
///
/// ```
/// use bit_vector::BitVector;
///
/// let mut bv = BitVector::with_bits(10);
///
/// // insert all primes less than 10
/// bv.set(2, true).unwrap();
/// bv.set(3, true).unwrap();
/// bv.set(5, true).unwrap();
/// bv.set(7, true).unwrap();
/// assert_eq!(bv.to_string(), "0010101100");
/// assert_eq!(bv.count(), 4);
///
/// // flip all values in bitvector, producing non-primes less than 10
/// bv.negate();
/// assert_eq!(bv.to_string(), "1101010011");
///
/// // reset bitvector to empty
/// bv.clear();
/// assert!(bv.is_empty());
/// ```
#[derive(Clone, Default)]
pub struct BitVector {
    /// Internal representation of the bit vector
    storage: Vec<u8>,
    /// The number of valid bits in the internal representation
    nbits: usize,
}

impl Index<usize> for BitVector {
    type Output = bool;

    #[inline]
    fn index(&self, i: usize) -> &bool {
        match self.at(i) {
            Ok(true) => &TRUE,
            Ok(false) => &FALSE,
            Err(err) => panic!("{}", err),
        }
    }
}

/// Computes how many bytes are needed to store that many bits
fn bytes_for_bits(bits: usize) -> usize {
    // `(bits + 7) / 8` would overflow when `bits` is close to `usize::MAX`.
    if bits % BITS == 0 {
        bits / BITS
    } else {
        bits / BITS + 1
    }
}

/// Computes the bitmask for the final byte of the vector
fn mask_for_bits(bits: usize) -> u8 {
    // Note especially that a perfect multiple of 8 should mask all 1s.
    !0u8 >> ((BITS - bits % BITS) % BITS)
}

impl BitVector {
    /// Applies the given operation to the bytes of self and other, and sets
    /// self to be the result. Fails without touching self if the lengths
    /// differ. This relies on the caller not to corrupt the last byte.
    #[inline]
    fn process<F>(&mut self, other: &BitVector, mut op: F) -> Result<bool, Error>
    where
        F: FnMut(u8, u8) -> u8,
    {
        if self.nbits != other.nbits {
            return Err(Error::SizeMismatch {
                left: self.nbits,
                right: other.nbits,
            });
        }
        // (1)
        debug_assert_eq!(self.storage.len(), other.storage.len());
        let mut changed_bits = 0u8;
        for (a, &b) in self.storage.iter_mut().zip(&other.storage) {
            let w = op(*a, b);
            changed_bits |= *a ^ w;
            *a = w;
        }
        Ok(changed_bits != 0)
    }

    /// An operation might screw up the unused bits in the last byte of the
    /// `BitVector`. As per (2), it's assumed to be all 0s. This method fixes it up.
    fn fix_last_block(&mut self) {
        if self.nbits % BITS > 0 {
            if let Some(last) = self.storage.last_mut() {
                *last &= mask_for_bits(self.nbits);
            }
        }
    }

    fn check_index(&self, i: usize) -> Result<(), Error> {
        if i < self.nbits {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                index: i,
                len: self.nbits,
            })
        }
    }

    /// Creates an empty `BitVector`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_vector::BitVector;
    /// let bv = BitVector::new();
    /// assert!(bv.is_empty());
    /// assert_eq!(bv.to_string(), "");
    /// ```
    pub fn new() -> Self {
        BitVector {
            storage: Vec::new(),
            nbits: 0,
        }
    }

    /// Creates a `BitVector` of `nbits` bits, all cleared.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let bv = BitVector::with_bits(12);
    /// assert_eq!(bv.len(), 12);
    /// assert!(bv.none());
    /// ```
    pub fn with_bits(nbits: usize) -> Self {
        BitVector::from_elem(nbits, false)
    }

    /// Creates a `BitVector` of `nbits` bits whose low bits are copied from
    /// `seed`, least significant byte first.
    ///
    /// Bits of `seed` at positions `nbits` and above are dropped, and bits
    /// beyond the width of `seed` start out cleared.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let bv = BitVector::with_seed(12, 0xABCDu32);
    /// assert_eq!(bv.to_string(), "101111001101");
    ///
    /// let wide = BitVector::with_seed(80, u64::MAX);
    /// assert_eq!(wide.count(), 64);
    /// ```
    pub fn with_seed<S: SeedValue>(nbits: usize, seed: S) -> Self {
        let mut bit_vec = BitVector::with_bits(nbits);
        let nbytes = cmp::min(S::bytes(), bit_vec.storage.len());
        for (i, byte) in bit_vec.storage[..nbytes].iter_mut().enumerate() {
            *byte = seed.byte(i);
        }
        bit_vec.fix_last_block();
        bit_vec
    }

    /// Creates a `BitVector` that holds `nbits` elements, setting each element
    /// to `bit`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let bv = BitVector::from_elem(10, true);
    /// assert_eq!(bv.len(), 10);
    /// assert!(bv.iter().all(|x| x));
    /// ```
    pub fn from_elem(nbits: usize, bit: bool) -> Self {
        let fill = if bit { !0u8 } else { 0u8 };
        let mut bit_vec = BitVector {
            storage: alloc::vec![fill; bytes_for_bits(nbits)],
            nbits,
        };
        bit_vec.fix_last_block();
        bit_vec
    }

    /// Creates a `BitVector` of the specified length where the value at each index
    /// is `f(index)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let bv = BitVector::from_fn(5, |i| i % 2 == 0);
    /// assert_eq!(bv.to_string(), "10101");
    /// ```
    pub fn from_fn<F>(len: usize, mut f: F) -> Self
    where
        F: FnMut(usize) -> bool,
    {
        let mut bit_vec = BitVector::with_bits(len);
        for i in 0..len {
            if f(i) {
                bit_vec.storage[i / BITS] |= 1 << (i % BITS);
            }
        }
        bit_vec
    }

    /// Exposes the raw byte storage of this `BitVector`, least significant
    /// byte first. Unused bits of the last byte are always zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let bv = !BitVector::with_bits(11);
    /// assert_eq!(bv.as_bytes(), &[0xFF, 0b0000_0111]);
    /// ```
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage
    }

    /// Retrieves the value at index `i`, or `None` if the index is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let bv = BitVector::with_seed(8, 0b0000_0010u8);
    /// assert_eq!(bv.get(0), Some(false));
    /// assert_eq!(bv.get(1), Some(true));
    /// assert_eq!(bv.get(100), None);
    ///
    /// // Can also use array indexing
    /// assert_eq!(bv[1], true);
    /// ```
    #[inline]
    pub fn get(&self, i: usize) -> Option<bool> {
        if i >= self.nbits {
            return None;
        }
        self.storage
            .get(i / BITS)
            .map(|&block| block & (1 << (i % BITS)) != 0)
    }

    /// Retrieves the value at index `i`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `i >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let bv = BitVector::with_bits(4);
    /// assert_eq!(bv.at(3), Ok(false));
    /// assert!(bv.at(4).is_err());
    /// ```
    #[inline]
    pub fn at(&self, i: usize) -> Result<bool, Error> {
        self.get(i).ok_or(Error::OutOfRange {
            index: i,
            len: self.nbits,
        })
    }

    /// Sets the value of a bit at an index `i`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `i >= self.len()`; the vector is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let mut bv = BitVector::with_bits(5);
    /// bv.set(3, true)?.set(0, true)?;
    /// assert_eq!(bv.to_string(), "01001");
    /// # Ok::<(), bit_vector::Error>(())
    /// ```
    #[inline]
    pub fn set(&mut self, i: usize, x: bool) -> Result<&mut Self, Error> {
        self.check_index(i)?;
        let flag = 1u8 << (i % BITS);
        let block = &mut self.storage[i / BITS];
        if x {
            *block |= flag;
        } else {
            *block &= !flag;
        }
        Ok(self)
    }

    /// Clears the bit at index `i`. Same as `set(i, false)`.
    #[inline]
    pub fn reset(&mut self, i: usize) -> Result<&mut Self, Error> {
        self.set(i, false)
    }

    /// Sets all bits to 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let mut bv = BitVector::with_seed(6, 0b0010_0100u8);
    /// bv.set_all();
    /// assert_eq!(bv.to_string(), "111111");
    /// assert_eq!(bv.as_bytes(), &[0b0011_1111]);
    /// ```
    #[inline]
    pub fn set_all(&mut self) -> &mut Self {
        for w in &mut self.storage {
            *w = !0;
        }
        self.fix_last_block();
        self
    }

    /// Clears all bits, keeping the length.
    #[inline]
    pub fn reset_all(&mut self) -> &mut Self {
        for w in &mut self.storage {
            *w = 0;
        }
        self
    }

    /// Flips all bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let mut bv = BitVector::with_seed(8, 0b0110_0000u8);
    /// bv.negate();
    /// assert_eq!(bv.to_string(), "10011111");
    /// ```
    #[inline]
    pub fn negate(&mut self) -> &mut Self {
        for w in &mut self.storage {
            *w = !*w;
        }
        self.fix_last_block();
        self
    }

    /// Sets `self` to the bitwise `and` of `self` and `other`. Both
    /// bitvectors must be the same length. Returns `true` if `self` changed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if the lengths differ. Neither operand
    /// is modified in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let mut a = BitVector::with_seed(8, 0b0110_0100u8);
    /// let b = BitVector::with_seed(8, 0b0101_1010u8);
    ///
    /// assert_eq!(a.try_and(&b), Ok(true));
    /// assert_eq!(a.to_string(), "01000000");
    ///
    /// assert!(a.try_and(&BitVector::with_bits(3)).is_err());
    /// ```
    #[inline]
    pub fn try_and(&mut self, other: &BitVector) -> Result<bool, Error> {
        self.process(other, |w1, w2| w1 & w2)
    }

    /// Sets `self` to the bitwise `or` of `self` and `other`. Both
    /// bitvectors must be the same length. Returns `true` if `self` changed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if the lengths differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let mut a = BitVector::with_seed(8, 0b0110_0100u8);
    /// let b = BitVector::with_seed(8, 0b0101_1010u8);
    ///
    /// assert_eq!(a.try_or(&b), Ok(true));
    /// assert_eq!(a.to_string(), "01111110");
    /// ```
    #[inline]
    pub fn try_or(&mut self, other: &BitVector) -> Result<bool, Error> {
        self.process(other, |w1, w2| w1 | w2)
    }

    /// Sets `self` to the bitwise `xor` of `self` and `other`. Both
    /// bitvectors must be the same length. Returns `true` if `self` changed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if the lengths differ.
    #[inline]
    pub fn try_xor(&mut self, other: &BitVector) -> Result<bool, Error> {
        self.process(other, |w1, w2| w1 ^ w2)
    }

    /// Shifts every bit `n` positions towards the most significant end,
    /// filling the vacated low positions with 0. Bits shifted past the end
    /// are lost; `n >= self.len()` clears the vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let mut bv = BitVector::with_seed(10, 0b11_0000_0101u16);
    /// bv.shift_left(3);
    /// assert_eq!(bv.to_string(), "0000101000");
    /// ```
    pub fn shift_left(&mut self, n: usize) -> &mut Self {
        if n == 0 {
            return self;
        }
        if n >= self.nbits {
            return self.reset_all();
        }
        let byte_shift = n / BITS;
        let bit_shift = n % BITS;
        // Walk downwards so every source byte is read before it is overwritten.
        for i in (byte_shift..self.storage.len()).rev() {
            let src = i - byte_shift;
            let mut w = self.storage[src] << bit_shift;
            if bit_shift > 0 && src > 0 {
                w |= self.storage[src - 1] >> (BITS - bit_shift);
            }
            self.storage[i] = w;
        }
        for w in &mut self.storage[..byte_shift] {
            *w = 0;
        }
        self.fix_last_block();
        self
    }

    /// Shifts every bit `n` positions towards the least significant end,
    /// filling the vacated high positions with 0; `n >= self.len()` clears
    /// the vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let mut bv = BitVector::with_seed(10, 0b11_0000_0101u16);
    /// bv.shift_right(3);
    /// assert_eq!(bv.to_string(), "0001100000");
    /// ```
    pub fn shift_right(&mut self, n: usize) -> &mut Self {
        if n == 0 {
            return self;
        }
        if n >= self.nbits {
            return self.reset_all();
        }
        let byte_shift = n / BITS;
        let bit_shift = n % BITS;
        let len = self.storage.len();
        // (2) means everything pulled in from above `nbits` is already 0.
        for i in 0..len {
            let src = i + byte_shift;
            let mut w = if src < len {
                self.storage[src] >> bit_shift
            } else {
                0
            };
            if bit_shift > 0 && src + 1 < len {
                w |= self.storage[src + 1] << (BITS - bit_shift);
            }
            self.storage[i] = w;
        }
        self
    }

    /// Returns the number of bits set to 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let bv = BitVector::with_seed(16, 0b0111_0100_1001_0010u16);
    /// assert_eq!(bv.count(), 7);
    /// ```
    #[inline]
    pub fn count(&self) -> usize {
        self.storage.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `true` if all bits are 1. An empty vector satisfies this
    /// trivially.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let mut bv = BitVector::from_elem(5, true);
    /// assert_eq!(bv.all(), true);
    ///
    /// bv.set(1, false).unwrap();
    /// assert_eq!(bv.all(), false);
    /// ```
    pub fn all(&self) -> bool {
        match self.storage.split_last() {
            None => true,
            Some((&last, rest)) => {
                rest.iter().all(|&w| w == !0) && last == mask_for_bits(self.nbits)
            }
        }
    }

    /// Returns `true` if all bits are 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let mut bv = BitVector::with_bits(10);
    /// assert_eq!(bv.none(), true);
    ///
    /// bv.set(3, true).unwrap();
    /// assert_eq!(bv.none(), false);
    /// ```
    pub fn none(&self) -> bool {
        // (2)
        self.storage.iter().all(|&w| w == 0)
    }

    /// Returns `true` if any bit is 1.
    #[inline]
    pub fn any(&self) -> bool {
        !self.none()
    }

    /// Returns an iterator over the elements of the vector in index order,
    /// least significant bit first.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let bv = BitVector::with_seed(4, 0b0001u8);
    /// let bits: Vec<bool> = bv.iter().collect();
    /// assert_eq!(bits, [true, false, false, false]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            bit_vec: self,
            next_idx: 0,
            end_idx: self.nbits,
        }
    }

    /// Resizes the vector to `new_len` bits.
    ///
    /// Bytes added by growing are filled with `value`. Unused bits of the old
    /// last byte are part of that byte, not a new one, so they come back as 0
    /// regardless of `value`. Shrinking keeps every bit below `new_len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let mut bv = BitVector::with_seed(4, 0b1011u8);
    /// bv.resize(12, true);
    /// assert_eq!(bv.to_string(), "111100001011");
    ///
    /// bv.resize(2, false);
    /// assert_eq!(bv.to_string(), "11");
    /// ```
    pub fn resize(&mut self, new_len: usize, value: bool) {
        let fill = if value { !0u8 } else { 0u8 };
        self.storage.resize(bytes_for_bits(new_len), fill);
        self.nbits = new_len;
        self.fix_last_block();
    }

    /// Shortens a `BitVector`, dropping excess elements.
    ///
    /// If `len` is greater than the vector's current length, this has no
    /// effect.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let mut bv = BitVector::with_seed(8, 0b0100_1011u8);
    /// bv.truncate(2);
    /// assert_eq!(bv.to_string(), "11");
    /// ```
    pub fn truncate(&mut self, len: usize) {
        if len < self.len() {
            self.nbits = len;
            // This fixes (1).
            self.storage.truncate(bytes_for_bits(len));
            self.fix_last_block();
        }
    }

    /// Removes the last bit from the `BitVector`, and returns it. Returns
    /// `None` if the `BitVector` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let mut bv = BitVector::with_seed(8, 0b1001_0010u8);
    /// assert_eq!(bv.pop(), Some(true));
    /// assert_eq!(bv.pop(), Some(false));
    /// assert_eq!(bv.len(), 6);
    /// ```
    pub fn pop(&mut self) -> Option<bool> {
        let i = self.nbits.checked_sub(1)?;
        let ret = self[i];
        // (2)
        self.storage[i / BITS] &= !(1 << (i % BITS));
        self.nbits = i;
        if self.nbits % BITS == 0 {
            // (1)
            self.storage.pop();
        }
        Some(ret)
    }

    /// Pushes a `bool` onto the most significant end.
    ///
    /// # Panics
    ///
    /// Panics if the new length overflows a `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let mut bv = BitVector::new();
    /// bv.push_back(true);
    /// bv.push_back(false);
    /// bv.push_back(true);
    /// assert_eq!(bv.to_string(), "101");
    /// ```
    pub fn push_back(&mut self, elem: bool) {
        let insert_pos = self.nbits;
        self.nbits = self.nbits.checked_add(1).expect("capacity overflow");
        if insert_pos % BITS == 0 {
            self.storage.push(0);
        }
        if elem {
            self.storage[insert_pos / BITS] |= 1 << (insert_pos % BITS);
        }
    }

    /// Swaps the contents of two vectors.
    #[inline]
    pub fn swap(&mut self, other: &mut BitVector) {
        mem::swap(self, other);
    }

    /// Returns the total number of bits in this vector
    #[inline]
    pub fn len(&self) -> usize {
        self.nbits
    }

    /// Returns true if there are no bits in this vector
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every bit, releasing the vector to its empty state.
    #[inline]
    pub fn clear(&mut self) {
        self.storage.clear();
        self.nbits = 0;
    }
}

impl FromIterator<bool> for BitVector {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut ret = BitVector::new();
        ret.extend(iter);
        ret
    }
}

impl Extend<bool> for BitVector {
    #[inline]
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iterable: I) {
        let iterator = iterable.into_iter();
        let (min, _) = iterator.size_hint();
        self.storage.reserve(bytes_for_bits(min));
        for element in iterator {
            self.push_back(element)
        }
    }
}

impl FromStr for BitVector {
    type Err = Error;

    /// Parses the `Display` form: `'0'`/`'1'` digits, most significant first.
    fn from_str(s: &str) -> Result<Self, Error> {
        let digits = s
            .chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(Error::InvalidDigit { position, found }),
            })
            .collect::<Result<Vec<bool>, Error>>()?;
        Ok(digits.into_iter().rev().collect())
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for bit in self.iter().rev() {
            fmt.write_char(if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "BitVector({})", self)
    }
}

impl hash::Hash for BitVector {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.nbits.hash(state);
        self.storage.hash(state);
    }
}

impl cmp::PartialEq for BitVector {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        // (2) makes byte equality the same as bit equality.
        self.nbits == other.nbits && self.storage == other.storage
    }
}

impl cmp::Eq for BitVector {}

macro_rules! bitwise_op_impl {
    ($Assign:ident, $assign_fn:ident, $Op:ident, $op_fn:ident, $try_fn:ident) => {
        /// # Panics
        ///
        /// Panics if the operands have different lengths.
        impl $Assign<&BitVector> for BitVector {
            #[inline]
            fn $assign_fn(&mut self, rhs: &BitVector) {
                if let Err(err) = self.$try_fn(rhs) {
                    panic!("{}", err);
                }
            }
        }

        impl $Assign<BitVector> for BitVector {
            #[inline]
            fn $assign_fn(&mut self, rhs: BitVector) {
                <BitVector as $Assign<&BitVector>>::$assign_fn(self, &rhs)
            }
        }

        impl $Op<&BitVector> for &BitVector {
            type Output = BitVector;

            #[inline]
            fn $op_fn(self, rhs: &BitVector) -> BitVector {
                let mut result = self.clone();
                <BitVector as $Assign<&BitVector>>::$assign_fn(&mut result, rhs);
                result
            }
        }

        impl $Op<&BitVector> for BitVector {
            type Output = BitVector;

            #[inline]
            fn $op_fn(mut self, rhs: &BitVector) -> BitVector {
                <BitVector as $Assign<&BitVector>>::$assign_fn(&mut self, rhs);
                self
            }
        }

        impl $Op<BitVector> for BitVector {
            type Output = BitVector;

            #[inline]
            fn $op_fn(mut self, rhs: BitVector) -> BitVector {
                <BitVector as $Assign<&BitVector>>::$assign_fn(&mut self, &rhs);
                self
            }
        }
    };
}

bitwise_op_impl!(BitAndAssign, bitand_assign, BitAnd, bitand, try_and);
bitwise_op_impl!(BitOrAssign, bitor_assign, BitOr, bitor, try_or);
bitwise_op_impl!(BitXorAssign, bitxor_assign, BitXor, bitxor, try_xor);

macro_rules! shift_op_impl {
    ($Assign:ident, $assign_fn:ident, $Op:ident, $op_fn:ident, $shift_fn:ident) => {
        impl $Assign<usize> for BitVector {
            #[inline]
            fn $assign_fn(&mut self, n: usize) {
                self.$shift_fn(n);
            }
        }

        impl $Op<usize> for BitVector {
            type Output = BitVector;

            #[inline]
            fn $op_fn(mut self, n: usize) -> BitVector {
                self.$shift_fn(n);
                self
            }
        }

        impl $Op<usize> for &BitVector {
            type Output = BitVector;

            #[inline]
            fn $op_fn(self, n: usize) -> BitVector {
                let mut result = self.clone();
                result.$shift_fn(n);
                result
            }
        }
    };
}

shift_op_impl!(ShlAssign, shl_assign, Shl, shl, shift_left);
shift_op_impl!(ShrAssign, shr_assign, Shr, shr, shift_right);

impl Not for BitVector {
    type Output = BitVector;

    #[inline]
    fn not(mut self) -> BitVector {
        self.negate();
        self
    }
}

impl Not for &BitVector {
    type Output = BitVector;

    #[inline]
    fn not(self) -> BitVector {
        let mut result = self.clone();
        result.negate();
        result
    }
}

/// An iterator for `BitVector`.
#[derive(Clone)]
pub struct Iter<'a> {
    bit_vec: &'a BitVector,
    next_idx: usize,
    end_idx: usize,
}

impl Iterator for Iter<'_> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<bool> {
        if self.next_idx != self.end_idx {
            let idx = self.next_idx;
            self.next_idx += 1;
            Some(self.bit_vec[idx])
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.end_idx - self.next_idx;
        (rem, Some(rem))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<bool> {
        if self.next_idx != self.end_idx {
            self.end_idx -= 1;
            Some(self.bit_vec[self.end_idx])
        } else {
            None
        }
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a BitVector {
    type Item = bool;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
