// Copyright 2025 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Random selection and shuffling for in-memory sequences
//!
//! This crate provides two operations over sequences, both generic over a
//! random number generator supplied by the caller:
//!
//! *   [`IndexedPick`] and [`IteratorPick`] for sampling one uniformly
//!     random element from an indexable list or from an iterator
//! *   [`SliceShuffle`] for permuting a mutable slice in place and
//!     [`IteratorShuffle`] for producing a shuffled, independent copy of
//!     any iterator's elements
//!
//! The shuffle is the Fisher-Yates algorithm; every one of the `n!`
//! orderings of `n` elements is produced with equal probability provided
//! the generator is uniform.
//!
//! Any generator implementing [`Rng`] may be used, including `&mut`
//! references and trait objects. The crate-level functions [`pick`],
//! [`shuffled`] and [`shuffle`] are convenience forms using the
//! thread-local generator (requires `std`).
//!
//! ```
//! use rand_seq::{IndexedPick, SliceShuffle};
//!
//! let mut rng = rand::thread_rng();
//! let mut deck: Vec<u32> = (1..=52).collect();
//! deck.shuffle(&mut rng);
//! println!("top card: {:?}", deck.pick(&mut rng));
//! ```
//!
//! In order to make results reproducible across 32-64 bit architectures,
//! all `usize` indices are sampled as a `u32` where possible (also
//! providing a small performance boost in some cases).
//!
//! # Crate features
//!
//! *   `std` (default): enables the thread-local generator and the
//!     crate-level convenience functions
//! *   `alloc` (implied by `std`): enables [`IteratorShuffle::shuffled`],
//!     which allocates its result buffer
//!
//! Without either feature the crate is `no_std` and only the
//! explicit-generator trait methods are available.
//!
//! [`Rng`]: rand::Rng

#![doc(
    html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128-blk.png",
    html_favicon_url = "https://www.rust-lang.org/favicon.ico",
    html_root_url = "https://docs.rs/rand_seq/0.1.0"
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
use alloc::vec::Vec;

use rand::Rng;
#[cfg(feature = "std")]
use rand::thread_rng;

mod pick;
mod shuffle;

pub use crate::pick::{IndexedPick, IndexedPickMut, IteratorPick};
pub use crate::shuffle::{IteratorShuffle, SliceShuffle};

/// Select one uniformly random element using the thread-local generator.
///
/// Returns `None` if `iterable` yields no elements. This is the
/// convenience form of [`IteratorPick::pick`]; one generator handle is
/// constructed per call, never per element.
///
/// # Example
///
/// ```
/// let odds = [1, 3, 5, 7, 9];
/// let x = rand_seq::pick(&odds);
/// assert!(x.is_some());
/// assert!(odds.contains(x.unwrap()));
/// ```
#[cfg(feature = "std")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "std")))]
pub fn pick<I>(iterable: I) -> Option<I::Item>
where
    I: IntoIterator,
{
    iterable.into_iter().pick(&mut thread_rng())
}

/// Collect `iterable` into a shuffled `Vec` using the thread-local
/// generator.
///
/// The input is consumed; an empty input yields an empty vector. This is
/// the convenience form of [`IteratorShuffle::shuffled`].
///
/// # Example
///
/// ```
/// let hand = rand_seq::shuffled(1..=5);
/// assert_eq!(hand.len(), 5);
/// ```
#[cfg(feature = "std")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "std")))]
pub fn shuffled<I>(iterable: I) -> Vec<I::Item>
where
    I: IntoIterator,
{
    iterable.into_iter().shuffled(&mut thread_rng())
}

/// Shuffle a mutable slice in place using the thread-local generator.
///
/// This is the convenience form of [`SliceShuffle::shuffle`].
///
/// # Example
///
/// ```
/// let mut y = [1, 2, 3, 4, 5];
/// rand_seq::shuffle(&mut y);
/// ```
#[cfg(feature = "std")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "std")))]
pub fn shuffle<T>(values: &mut [T]) {
    values.shuffle(&mut thread_rng())
}

// Sample a number uniformly between 0 and `ubound` (exclusive). Uses 32-bit
// sampling where possible, primarily in order to produce the same output on
// 32-bit and 64-bit platforms. Callers must ensure `ubound > 0`.
#[inline]
pub(crate) fn gen_index<R: Rng + ?Sized>(rng: &mut R, ubound: usize) -> usize {
    if ubound <= (u32::MAX as usize) {
        rng.gen_range(0..ubound as u32) as usize
    } else {
        rng.gen_range(0..ubound)
    }
}
