use std::{
    fmt::{self, Debug},
    ops::{Index, IndexMut},
};

pub use crate::iter::{IntoIter, Iter, IterMut};

mod iter;

/// A fixed-capacity circular buffer backed by an inline `[T; N]`.
///
/// Elements enter at the head and leave from the tail in FIFO order. The
/// buffer never allocates and never grows: pushing into a full buffer
/// silently discards the new value and popping an empty buffer is a no-op.
/// Producers that cannot tolerate loss check [`is_full`](Self::is_full)
/// before pushing.
#[derive(Clone)]
pub struct RingBuf<T, const N: usize> {
    data: [T; N],
    head: usize, // next write position
    tail: usize, // next read position (logical front)
    full: bool,  // head == tail means empty unless this is set
}

impl<T: Default, const N: usize> RingBuf<T, N> {
    /// Creates an empty buffer with every slot default-initialized.
    #[must_use]
    pub fn new() -> Self {
        const { assert!(N > 0, "capacity must be nonzero") };

        Self {
            data: std::array::from_fn(|_| T::default()),
            head: 0,
            tail: 0,
            full: false,
        }
    }

    /// Removes the logical front element, if any.
    ///
    /// The vacated slot is reset to `T::default()` immediately, which
    /// releases anything the popped element owned. The element itself is
    /// not returned; read [`front`](Self::front) first if its value is
    /// still needed.
    pub fn pop(&mut self) {
        if self.is_empty() {
            return;
        }

        self.data[self.tail] = T::default();
        self.full = false;
        self.tail += 1;
        if self.tail == N {
            self.tail = 0;
        }

        // drained to empty: normalize so the next push starts at slot 0
        if self.tail == self.head {
            self.tail = 0;
            self.head = 0;
        }
    }

    /// Drops every element and restores the freshly-constructed state.
    pub fn clear(&mut self) {
        for slot in &mut self.data {
            *slot = T::default();
        }
        self.head = 0;
        self.tail = 0;
        self.full = false;
    }
}

impl<T, const N: usize> RingBuf<T, N> {
    /// Appends `value` behind the most recent element.
    ///
    /// A full buffer discards `value` without signaling; overflow is the
    /// caller's concern.
    pub fn push(&mut self, value: T) {
        if self.full {
            return;
        }

        self.data[self.head] = value;
        self.head += 1;
        if self.head == N {
            self.head = 0;
        }
        if self.head == self.tail {
            self.full = true;
        }
    }

    /// Returns the number of live elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        if self.full {
            N
        } else if self.head < self.tail {
            N - self.tail + self.head
        } else {
            self.head - self.tail
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head == self.tail && !self.full
    }

    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.full
    }

    /// Maximum number of elements the buffer can hold.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns a reference to the oldest element.
    ///
    /// While the buffer is empty this is a default or stale slot. The
    /// reference is always valid, its contents only mean something once
    /// [`is_empty`](Self::is_empty) is false.
    #[must_use]
    pub const fn front(&self) -> &T {
        &self.data[self.tail]
    }

    pub const fn front_mut(&mut self) -> &mut T {
        &mut self.data[self.tail]
    }

    /// Returns a reference to the most recently pushed element.
    ///
    /// Same caveat as [`front`](Self::front) while the buffer is empty.
    #[must_use]
    pub const fn back(&self) -> &T {
        if self.head == 0 {
            &self.data[N - 1]
        } else {
            &self.data[self.head - 1]
        }
    }

    pub const fn back_mut(&mut self) -> &mut T {
        if self.head == 0 {
            &mut self.data[N - 1]
        } else {
            &mut self.data[self.head - 1]
        }
    }

    /// Checked logical access: `None` at or past [`len`](Self::len).
    #[must_use]
    pub const fn get(&self, index: usize) -> Option<&T> {
        if index < self.len() {
            Some(&self.data[self.storage_index(index)])
        } else {
            None
        }
    }

    pub const fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len() {
            let physical = self.storage_index(index);
            Some(&mut self.data[physical])
        } else {
            None
        }
    }

    /// Iterates the live elements from oldest to newest.
    pub fn iter(&self) -> Iter<'_, T, N> {
        <&Self as IntoIterator>::into_iter(self)
    }

    /// Mutably iterates the live elements from oldest to newest.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        <&mut Self as IntoIterator>::into_iter(self)
    }

    // Maps a logical index (0 = front) to a storage index: reduce modulo N,
    // offset from the tail, subtract N rather than reducing a second time.
    const fn storage_index(&self, logical: usize) -> usize {
        let logical = logical % N;
        let physical = self.tail + logical;
        if physical >= N { physical - N } else { physical }
    }

    // The live elements as the two contiguous storage runs, in logical
    // order: tail up to the physical end, then the wrapped run from the
    // start of storage up to the head.
    fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        if self.full || self.head < self.tail {
            let (wrapped, lead) = self.data.split_at_mut(self.tail);
            (lead, &mut wrapped[..self.head])
        } else {
            (&mut self.data[self.tail..self.head], &mut [])
        }
    }
}

impl<T: Default, const N: usize> Default for RingBuf<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Index<usize> for RingBuf<T, N> {
    type Output = T;

    /// Logical random access with index 0 at the front.
    ///
    /// The index wraps modulo `N` and is never checked against the logical
    /// length, so positions in `len()..N` reach valid but stale slots.
    /// [`RingBuf::get`] is the checked alternative.
    fn index(&self, index: usize) -> &T {
        &self.data[self.storage_index(index)]
    }
}

impl<T, const N: usize> IndexMut<usize> for RingBuf<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let physical = self.storage_index(index);
        &mut self.data[physical]
    }
}

impl<T: Debug, const N: usize> Debug for RingBuf<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Equality over the logical sequence; physical layout is irrelevant.
impl<T: PartialEq, const N: usize> PartialEq for RingBuf<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, const N: usize> Eq for RingBuf<T, N> {}
