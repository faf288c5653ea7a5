// Copyright 2012-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use thiserror::Error;

/// The broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument was unacceptable, e.g. operands of different lengths.
    InvalidArgument,
    /// A bit index was outside `0..len`.
    OutOfRange,
}

/// Errors returned by the fallible `BitVector` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("bit vectors must be the same size (left has {left} bits, right has {right})")]
    SizeMismatch { left: usize, right: usize },
    #[error("bit index {index} out of range for a vector of {len} bits")]
    OutOfRange { index: usize, len: usize },
    #[error("invalid bit digit {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },
}

impl Error {
    /// Returns the category of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_vector::{BitVector, ErrorKind};
    ///
    /// let bv = BitVector::with_bits(4);
    /// assert_eq!(bv.at(4).unwrap_err().kind(), ErrorKind::OutOfRange);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::SizeMismatch { .. } | Error::InvalidDigit { .. } => ErrorKind::InvalidArgument,
            Error::OutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }
}
