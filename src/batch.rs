//! Fixed-batch sequencer.
//!
//! Splits any iterator into groups of a fixed size. What happens to a short
//! final group is chosen with [`Remainder`]. The sequencer is lazy on both
//! the input and the filler, so a filler such as `iter::repeat('X')` or
//! `pair.into_iter().cycle()` is never materialized.

use crate::error::GridCryptError;

/// End-of-input policy for a short final group.
#[derive(Debug, Clone)]
pub enum Remainder<P> {
    /// Fail with [`GridCryptError::IncompleteGroup`].
    Strict,
    /// Complete the group from the filler iterator.
    Pad(P),
    /// Discard the short group.
    Drop,
}

/// Iterator adapter produced by [`batched`], [`batched_padded`] and
/// [`batched_drop`].
///
/// Yields `Ok(group)` for every full group. After the first `Err` the
/// iterator is exhausted.
#[derive(Debug, Clone)]
pub struct Batched<I, P> {
    iter: I,
    size: usize,
    remainder: Remainder<P>,
    done: bool,
}

impl<I, P> Batched<I, P>
where
    I: Iterator,
    P: Iterator<Item = I::Item>,
{
    /// Creates a sequencer over `iter` with groups of `size`.
    ///
    /// # Errors
    /// Returns [`GridCryptError::InvalidBatchSize`] if `size` is zero.
    pub fn new(iter: I, size: usize, remainder: Remainder<P>) -> Result<Self, GridCryptError> {
        if size == 0 {
            return Err(GridCryptError::InvalidBatchSize);
        }
        Ok(Batched {
            iter,
            size,
            remainder,
            done: false,
        })
    }

    /// Returns the group size.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl<I, P> Iterator for Batched<I, P>
where
    I: Iterator,
    P: Iterator<Item = I::Item>,
{
    type Item = Result<Vec<I::Item>, GridCryptError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut group = Vec::with_capacity(self.size);
        group.extend(self.iter.by_ref().take(self.size));
        if group.len() == self.size {
            return Some(Ok(group));
        }
        self.done = true;
        if group.is_empty() {
            return None;
        }
        match &mut self.remainder {
            Remainder::Strict => Some(Err(GridCryptError::IncompleteGroup(group.len()))),
            Remainder::Drop => None,
            Remainder::Pad(filler) => {
                let left = group.len();
                group.extend(filler.by_ref().take(self.size - left));
                if group.len() == self.size {
                    Some(Ok(group))
                } else {
                    Some(Err(GridCryptError::IncompleteGroup(left)))
                }
            }
        }
    }
}

/// Groups `iter` by `size`, failing on a short final group.
///
/// # Examples
///
/// ```
/// use gridcrypt::batch::batched;
/// use gridcrypt::error::GridCryptError;
///
/// let groups: Vec<_> = batched("abcde".chars(), 2).unwrap().collect();
/// assert_eq!(groups[0], Ok(vec!['a', 'b']));
/// assert_eq!(groups[2], Err(GridCryptError::IncompleteGroup(1)));
/// ```
pub fn batched<I>(
    iter: I,
    size: usize,
) -> Result<Batched<I::IntoIter, std::iter::Empty<I::Item>>, GridCryptError>
where
    I: IntoIterator,
{
    Batched::new(iter.into_iter(), size, Remainder::Strict)
}

/// Groups `iter` by `size`, completing a short final group from `filler`.
///
/// # Examples
///
/// ```
/// use std::iter;
/// use gridcrypt::batch::batched_padded;
///
/// let groups: Result<Vec<_>, _> =
///     batched_padded("abc".chars(), 2, iter::repeat('x')).unwrap().collect();
/// assert_eq!(groups.unwrap(), vec![vec!['a', 'b'], vec!['c', 'x']]);
/// ```
pub fn batched_padded<I, P>(
    iter: I,
    size: usize,
    filler: P,
) -> Result<Batched<I::IntoIter, P::IntoIter>, GridCryptError>
where
    I: IntoIterator,
    P: IntoIterator<Item = I::Item>,
{
    Batched::new(iter.into_iter(), size, Remainder::Pad(filler.into_iter()))
}

/// Groups `iter` by `size`, silently dropping a short final group.
pub fn batched_drop<I>(
    iter: I,
    size: usize,
) -> Result<Batched<I::IntoIter, std::iter::Empty<I::Item>>, GridCryptError>
where
    I: IntoIterator,
{
    Batched::new(iter.into_iter(), size, Remainder::Drop)
}
