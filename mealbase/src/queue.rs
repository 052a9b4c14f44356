//! Bounded FIFO queue over a fixed array of `N` slots.
//!
//! Layout
//! ---
//!
//! | field   | empty   | non-empty                         |
//! |---------|---------|-----------------------------------|
//! | `front` | `None`  | slot of the oldest entry          |
//! | `rear`  | `None`  | slot of the newest entry          |
//! | `size`  | `0`     | `1..=N`                           |
//!
//! Live entries sit at `front, front + 1, .., front + size - 1`, each taken
//! modulo `N`. Nothing is ever shifted, and a full queue rejects new entries
//! instead of overwriting the oldest one.

use crate::error::QueueError;

pub struct CircularQueue<T, const N: usize> {
    items: [Option<T>; N],
    front: Option<usize>,
    rear: Option<usize>,
    size: usize,
}

impl<T, const N: usize> CircularQueue<T, N> {
    pub fn new() -> Self {
        CircularQueue {
            items: std::array::from_fn(|_| None),
            front: None,
            rear: None,
            size: 0,
        }
    }

    /// Drops every entry and goes back to the freshly initialized state.
    pub fn clear(&mut self) {
        self.items.iter_mut().for_each(|slot| *slot = None);
        self.reset_indices();
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size == N
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Physical slot of the oldest entry, `None` while empty.
    pub fn front_index(&self) -> Option<usize> {
        self.front
    }

    /// Physical slot of the newest entry, `None` while empty.
    pub fn rear_index(&self) -> Option<usize> {
        self.rear
    }

    /// Appends `item` as the new tail.
    ///
    /// A full queue rejects the item and is left unchanged.
    pub fn enqueue(&mut self, item: T) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::Full);
        }
        if self.is_empty() {
            self.front = Some(0);
        }
        let rear = match self.rear {
            Some(rear) => (rear + 1) % N,
            None => 0,
        };
        self.items[rear] = Some(item);
        self.rear = Some(rear);
        self.size += 1;
        Ok(())
    }

    /// Removes and returns the oldest entry.
    ///
    /// Removing the last entry resets `front` and `rear` to the empty
    /// sentinels, so a drained queue looks exactly like a new one.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        let front = self.front.ok_or(QueueError::Empty)?;
        let item = self.items[front].take().ok_or(QueueError::Empty)?;
        self.size -= 1;

        if self.is_empty() {
            self.reset_indices();
        } else {
            self.front = Some((front + 1) % N);
        }
        Ok(item)
    }

    /// The entry the next `dequeue` would return.
    pub fn peek(&self) -> Result<&T, QueueError> {
        self.front
            .and_then(|front| self.items[front].as_ref())
            .ok_or(QueueError::Empty)
    }

    /// The most recently enqueued entry.
    pub fn back(&self) -> Option<&T> {
        self.rear.and_then(|rear| self.items[rear].as_ref())
    }

    /// Live entries, oldest first.
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter { queue: self, position: 0 }
    }

    fn reset_indices(&mut self) {
        self.front = None;
        self.rear = None;
        self.size = 0;
    }
}

impl<T, const N: usize> Default for CircularQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug, const N: usize> std::fmt::Debug for CircularQueue<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CircularQueue")
            .field("front", &self.front)
            .field("rear", &self.rear)
            .field("size", &self.size)
            .field("items", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

pub struct Iter<'a, T, const N: usize> {
    queue: &'a CircularQueue<T, N>,
    position: usize,
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // Bounded by size, so stale slots are never visited.
        if self.position >= self.queue.size {
            return None;
        }
        let front = self.queue.front?;
        let index = (front + self.position) % N;
        self.position += 1;
        self.queue.items[index].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.size.saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<T, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}

impl<'a, T, const N: usize> IntoIterator for &'a CircularQueue<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
