use std::collections::VecDeque;

use crate::{
    entropy::Entropy,
    error::{Error, Result},
    source::Source,
};

/// Consecutive duplicate draws allowed per element before [`Entropy::permutation`] gives up.
const REJECTIONS_PER_ELEMENT: usize = 100;

/// An indexable container whose elements can be read and replaced by position.
///
/// This is all [`Entropy::random_permutation`] needs, so it works with any element type and any
/// container that can report its length.
pub trait Sequence {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of the element at `index`.
    fn at(&self, index: usize) -> Self::Item;

    /// Replaces the element at `index`.
    fn set(&mut self, index: usize, value: Self::Item);
}

impl<T: Clone> Sequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn at(&self, index: usize) -> T {
        self[index].clone()
    }

    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }
}

impl<T: Clone, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn at(&self, index: usize) -> T {
        self[index].clone()
    }

    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }
}

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn at(&self, index: usize) -> T {
        self[index].clone()
    }

    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }
}

impl<T: Clone> Sequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn at(&self, index: usize) -> T {
        self[index].clone()
    }

    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }
}

impl Entropy {
    /// Returns the numbers `0..length` in random order.
    ///
    /// Indices are drawn with [`int63n`](Self::int63n) and duplicates are rejected until every
    /// index has been seen. The draw gives up after `100 * length` consecutive duplicates, which
    /// only happens with a badly skewed source.
    ///
    /// # Errors
    /// [`Error::InvalidLength`] if `length` is zero, [`Error::PermutationExhausted`] if the
    /// rejection limit is hit, or the failure of the source.
    ///
    /// # Example
    /// ```
    /// # use devrand::{Entropy, Source};
    /// let mut perm = Entropy::new().permutation(5, &Source::Fast).unwrap();
    /// perm.sort();
    /// assert_eq!(perm, [0, 1, 2, 3, 4]);
    /// ```
    pub fn permutation(&self, length: usize, source: &Source) -> Result<Vec<usize>> {
        if length == 0 {
            return Err(Error::InvalidLength);
        }
        let limit = length.saturating_mul(REJECTIONS_PER_ELEMENT);
        let mut perm = Vec::with_capacity(length);
        let mut seen = vec![false; length];
        let mut rejections = 0;
        while perm.len() < length {
            let index = self.int63n(length as i64, source)? as usize;
            if seen[index] {
                if rejections > limit {
                    return Err(Error::PermutationExhausted { length, rejections });
                }
                rejections += 1;
                continue;
            }
            rejections = 0;
            seen[index] = true;
            perm.push(index);
        }
        Ok(perm)
    }

    /// Copies `input` into `output` in random order: `output[i] = input[perm[i]]` for a fresh
    /// permutation `perm` of `input`'s indices. `input` is left untouched, and elements of
    /// `output` past `input.len()` keep their old values.
    ///
    /// # Errors
    /// [`Error::LengthMismatch`] if `output` is shorter than `input`, otherwise the errors of
    /// [`permutation`](Self::permutation).
    ///
    /// # Example
    /// ```
    /// # use devrand::{Entropy, Source};
    /// let input = vec!["a", "b", "c"];
    /// let mut output = vec![""; 3];
    /// Entropy::new().random_permutation(&input, &mut output, &Source::Secure).unwrap();
    /// output.sort();
    /// assert_eq!(output, input);
    /// ```
    pub fn random_permutation<I, O>(&self, input: &I, output: &mut O, source: &Source) -> Result<()>
    where
        I: Sequence + ?Sized,
        O: Sequence<Item = I::Item> + ?Sized,
    {
        if input.len() > output.len() {
            return Err(Error::LengthMismatch {
                input: input.len(),
                output: output.len(),
            });
        }
        let perm = self.permutation(input.len(), source)?;
        for (i, p) in perm.into_iter().enumerate() {
            output.set(i, input.at(p));
        }
        Ok(())
    }

    /// Shuffles `data` in place with the Fisher-Yates algorithm.
    ///
    /// Unlike [`permutation`](Self::permutation) this needs exactly one draw per element, so it
    /// always terminates. Slices of zero or one element are left alone without touching the
    /// source.
    pub fn shuffle<T>(&self, data: &mut [T], source: &Source) -> Result<()> {
        let mut end = data.len();
        while end > 1 {
            let other = self.int63n(end as i64, source)? as usize;
            data.swap(end - 1, other);
            end -= 1;
        }
        Ok(())
    }
}
