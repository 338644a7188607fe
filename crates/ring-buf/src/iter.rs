use std::{iter::FusedIterator, mem, slice};

use crate::RingBuf;

/// Borrowing iterator over the live elements, oldest first.
///
/// Walks logical positions and reads each one through the buffer's indexing
/// operator, which wraps for it. The element count is captured at creation:
/// a full buffer has head and tail on the same slot exactly like an empty
/// one, so exhaustion is decided by the count, never by raw index equality.
#[must_use]
pub struct Iter<'a, T, const N: usize> {
    buf: &'a RingBuf<T, N>,
    cursor: usize,
    len: usize,
}

/// Mutable counterpart of [`Iter`], chaining the two contiguous storage
/// runs so every live element is handed out exactly once.
#[must_use]
pub struct IterMut<'a, T> {
    lead: slice::IterMut<'a, T>,
    wrapped: slice::IterMut<'a, T>,
}

/// Owning iterator: takes each front element and pops its slot.
pub struct IntoIter<T, const N: usize> {
    buf: RingBuf<T, N>,
}

impl<T, const N: usize> Clone for Iter<'_, T, N> {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf,
            cursor: self.cursor,
            len: self.len,
        }
    }
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.len {
            return None;
        }
        let value = &self.buf[self.cursor];
        self.cursor += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.cursor;
        (remaining, Some(remaining))
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.lead.next().or_else(|| self.wrapped.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.lead.len() + self.wrapped.len();
        (remaining, Some(remaining))
    }
}

impl<T: Default, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.buf.is_empty() {
            return None;
        }
        let value = mem::take(self.buf.front_mut());
        self.buf.pop();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buf.len();
        (remaining, Some(remaining))
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a RingBuf<T, N> {
    type IntoIter = Iter<'a, T, N>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            buf: self,
            cursor: 0,
            len: self.len(),
        }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut RingBuf<T, N> {
    type IntoIter = IterMut<'a, T>;
    type Item = &'a mut T;

    fn into_iter(self) -> Self::IntoIter {
        let (lead, wrapped) = self.as_mut_slices();
        IterMut {
            lead: lead.iter_mut(),
            wrapped: wrapped.iter_mut(),
        }
    }
}

impl<T: Default, const N: usize> IntoIterator for RingBuf<T, N> {
    type IntoIter = IntoIter<T, N>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { buf: self }
    }
}

impl<T, const N: usize> ExactSizeIterator for Iter<'_, T, N> {
    fn len(&self) -> usize {
        self.len - self.cursor
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.lead.len() + self.wrapped.len()
    }
}

impl<T: Default, const N: usize> ExactSizeIterator for IntoIter<T, N> {
    fn len(&self) -> usize {
        self.buf.len()
    }
}

impl<T, const N: usize> FusedIterator for Iter<'_, T, N> {}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T: Default, const N: usize> FusedIterator for IntoIter<T, N> {}
