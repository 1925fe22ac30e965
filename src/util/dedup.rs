//! Adjacent-duplicate suppression for sorted sequences.

use std::iter::FusedIterator;

/// Lazy iterator adapter that drops an element when it equals the element
/// pulled immediately before it.
///
/// Holds a single look-back value. Once the underlying iterator reports
/// exhaustion the adapter stays exhausted, even if the inner iterator would
/// yield again.
#[derive(Debug, Clone)]
pub struct Dedup<I: Iterator> {
    iter: I,
    last: Option<I::Item>,
    exhausted: bool,
}

impl<I> Dedup<I>
where
    I: Iterator,
    I::Item: PartialEq + Clone,
{
    pub fn new(iter: I) -> Self {
        Dedup {
            iter,
            last: None,
            exhausted: false,
        }
    }
}

impl<I> Iterator for Dedup<I>
where
    I: Iterator,
    I::Item: PartialEq + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        loop {
            let Some(candidate) = self.iter.next() else {
                self.exhausted = true;
                self.last = None;
                return None;
            };

            if self.last.as_ref() == Some(&candidate) {
                continue;
            }

            self.last = Some(candidate.clone());
            return Some(candidate);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        // Every remaining element may repeat the look-back value.
        let (lower, upper) = self.iter.size_hint();
        let lower = if self.last.is_some() { 0 } else { lower.min(1) };
        (lower, upper)
    }
}

impl<I> FusedIterator for Dedup<I>
where
    I: Iterator,
    I::Item: PartialEq + Clone,
{
}

/// Extension trait adding [`Dedup`] to every iterator.
pub trait DedupExt: Iterator + Sized {
    fn dedup_adjacent(self) -> Dedup<Self>
    where
        Self::Item: PartialEq + Clone,
    {
        Dedup::new(self)
    }
}

impl<I: Iterator> DedupExt for I {}
