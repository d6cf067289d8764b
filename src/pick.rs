// Copyright 2025 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Uniform selection of one element from a sequence

use core::ops::{Index, IndexMut};

use crate::gen_index;
use rand::Rng;

/// Extension trait on indexable lists, providing random element selection.
///
/// This trait is implemented on `[T]` slice types. Other types supporting
/// [`core::ops::Index<usize>`] may implement this (only [`Self::len`] must
/// be specified).
pub trait IndexedPick: Index<usize> {
    /// The length
    fn len(&self) -> usize;

    /// True when the length is zero
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Uniformly sample one element
    ///
    /// Returns a reference to one uniformly-sampled random element of the
    /// list, or `None` if the list is empty. An empty list is not an error;
    /// callers wanting a failure should match on the result.
    ///
    /// For slices, complexity is `O(1)` and exactly one index is drawn from
    /// the generator.
    ///
    /// # Example
    ///
    /// ```
    /// use rand_seq::IndexedPick;
    ///
    /// let choices = [1, 2, 4, 8, 16, 32];
    /// let mut rng = rand::thread_rng();
    /// println!("{:?}", choices.pick(&mut rng));
    /// assert_eq!(choices[..0].pick(&mut rng), None);
    /// ```
    fn pick<R>(&self, rng: &mut R) -> Option<&Self::Output>
    where
        R: Rng + ?Sized,
    {
        if self.is_empty() {
            None
        } else {
            Some(&self[gen_index(rng, self.len())])
        }
    }
}

/// Extension trait on mutably indexable lists, providing random element
/// selection.
///
/// This trait is implemented automatically for every type implementing
/// [`IndexedPick`] and [`core::ops::IndexMut<usize>`].
pub trait IndexedPickMut: IndexedPick + IndexMut<usize> {
    /// Uniformly sample one element (mut)
    ///
    /// Returns a mutable reference to one uniformly-sampled random element
    /// of the list, or `None` if the list is empty.
    ///
    /// For slices, complexity is `O(1)`.
    fn pick_mut<R>(&mut self, rng: &mut R) -> Option<&mut Self::Output>
    where
        R: Rng + ?Sized,
    {
        if self.is_empty() {
            None
        } else {
            let len = self.len();
            Some(&mut self[gen_index(rng, len)])
        }
    }
}

/// Extension trait on iterators, providing random element selection.
///
/// This trait is implemented for all iterators `I` where `I: Iterator +
/// Sized`. Unlike [`IndexedPick`] it consumes the sequence, so it also
/// serves one-shot producers. You must `use` this trait:
///
/// ```
/// use rand_seq::IteratorPick;
///
/// let mut rng = rand::thread_rng();
/// let faces = "😀😎😐😕😠😢";
/// println!("I am {}!", faces.chars().pick(&mut rng).unwrap());
/// ```
pub trait IteratorPick: Iterator + Sized {
    /// Uniformly sample one element
    ///
    /// Returns one uniformly-sampled random element of the iterator, or
    /// `None` only if the iterator is empty.
    ///
    /// Where [`Iterator::size_hint`] is exact and [`Iterator::nth`] is a
    /// constant-time operation this method offers `O(1)` performance and
    /// draws one index from the generator. Otherwise the whole iterator is
    /// traversed, drawing once per element. An exact but wrong size hint
    /// breaks uniformity (it is relied upon, not verified).
    fn pick<R>(mut self, rng: &mut R) -> Option<Self::Item>
    where
        R: Rng + ?Sized,
    {
        let (lower, upper) = self.size_hint();
        if upper == Some(lower) {
            return match lower {
                0 => None,
                _ => self.nth(gen_index(rng, lower)),
            };
        }

        // Reservoir sampling over an iterator of unknown length: the k-th
        // element replaces the current candidate with probability 1/k,
        // leaving every element equally likely once the input is exhausted.
        let mut result = None;
        let mut seen = 0;
        for elem in self {
            seen += 1;
            if gen_index(rng, seen) == 0 {
                result = Some(elem);
            }
        }
        result
    }
}

impl<T> IndexedPick for [T] {
    fn len(&self) -> usize {
        self.len()
    }
}

impl<IP: IndexedPick + IndexMut<usize> + ?Sized> IndexedPickMut for IP {}

impl<I> IteratorPick for I where I: Iterator + Sized {}
