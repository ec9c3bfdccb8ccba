use std::iter;
use std::mem;

use crate::sequence::arena::{Arena, Node};
use crate::sequence::error::{Error, Result};

mod algorithms;
mod arena;

pub mod error;

/// The `LinkedSequence` is a doubly-linked list with positional access,
/// backed by a slot arena.
///
/// Elements are kept in head-to-tail order and addressed by zero-based
/// index. Insertion and removal at either end take *O*(1) time; positional
/// operations take *O*(*n*) time, walking from whichever end is nearer to
/// the requested index.
///
/// The sequence contains:
/// - an arena of slots holding every node, with `prev`/`next` stored as slot
///   indices (see the crate-level documentation for the memory layout);
/// - `head` and `tail` slot indices, absent when the sequence is empty;
/// - a length field `len`.
pub struct LinkedSequence<E> {
    arena: Arena<E>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

// private methods
impl<E> LinkedSequence<E> {
    /// Translate a position into the arena index of the node holding it.
    ///
    /// Walks forward from the head when `index` is in the front half,
    /// backward from the tail otherwise, so at most `len / 2` links are
    /// followed.
    ///
    /// The caller must have validated `index < self.len`.
    fn node_at(&self, index: usize) -> usize {
        debug_assert!(index < self.len, "node lookup past the tail");
        if index < self.len / 2 {
            let mut at = self.head.expect("a non-empty sequence has a head");
            for _ in 0..index {
                at = self
                    .arena
                    .node(at)
                    .next
                    .expect("nodes before the tail have a successor");
            }
            at
        } else {
            let mut at = self.tail.expect("a non-empty sequence has a tail");
            for _ in 0..self.len - 1 - index {
                at = self
                    .arena
                    .node(at)
                    .prev
                    .expect("nodes after the head have a predecessor");
            }
            at
        }
    }

    /// Walk the elements in head-to-tail order.
    ///
    /// Internal only: the public surface exposes index access, not iteration.
    pub(crate) fn values(&self) -> impl Iterator<Item = &E> + '_ {
        let mut current = self.head;
        iter::from_fn(move || {
            let index = current?;
            let node = self.arena.node(index);
            current = node.next;
            Some(&node.element)
        })
    }
}

impl<E> LinkedSequence<E> {
    /// Create an empty `LinkedSequence`.
    ///
    /// No arena storage is allocated until the first insertion.
    ///
    /// # Examples
    /// ```
    /// use linked_sequence::LinkedSequence;
    /// let seq: LinkedSequence<u32> = LinkedSequence::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Create an empty `LinkedSequence` whose arena can hold `capacity`
    /// elements without reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_sequence::LinkedSequence;
    ///
    /// let seq: LinkedSequence<u32> = LinkedSequence::with_capacity(8);
    /// assert!(seq.capacity() >= 8);
    /// assert!(seq.is_empty());
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of elements the arena can hold without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Returns `true` if the `LinkedSequence` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_sequence::LinkedSequence;
    ///
    /// let mut seq = LinkedSequence::new();
    /// assert!(seq.is_empty());
    ///
    /// seq.push_front("foo");
    /// assert!(!seq.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the length of the `LinkedSequence`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_sequence::LinkedSequence;
    ///
    /// let mut seq = LinkedSequence::new();
    ///
    /// seq.push_front(2);
    /// assert_eq!(seq.len(), 1);
    ///
    /// seq.push_front(1);
    /// assert_eq!(seq.len(), 2);
    ///
    /// seq.push_back(3);
    /// assert_eq!(seq.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `LinkedSequence`.
    ///
    /// The whole arena is reset at once, so no node, linked or stale,
    /// survives a clear. Allocated capacity is kept.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_sequence::LinkedSequence;
    ///
    /// let mut seq = LinkedSequence::new();
    ///
    /// seq.push_front(2);
    /// seq.push_front(1);
    /// assert_eq!(seq.len(), 2);
    ///
    /// seq.clear();
    /// assert_eq!(seq.len(), 0);
    /// assert_eq!(seq.front(), None);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Provides a reference to the front element, or `None` if the sequence
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_sequence::LinkedSequence;
    ///
    /// let mut seq = LinkedSequence::new();
    /// assert_eq!(seq.front(), None);
    ///
    /// seq.push_front(1);
    /// assert_eq!(seq.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&E> {
        self.head.map(|index| &self.arena.node(index).element)
    }

    /// Provides a reference to the back element, or `None` if the sequence
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_sequence::LinkedSequence;
    ///
    /// let mut seq = LinkedSequence::new();
    /// assert_eq!(seq.back(), None);
    ///
    /// seq.push_back(1);
    /// assert_eq!(seq.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&E> {
        self.tail.map(|index| &self.arena.node(index).element)
    }

    /// Adds an element first in the sequence.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_sequence::LinkedSequence;
    ///
    /// let mut seq = LinkedSequence::new();
    ///
    /// seq.push_front(2);
    /// assert_eq!(seq.front(), Some(&2));
    ///
    /// seq.push_front(1);
    /// assert_eq!(seq.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, value: E) {
        let new = self.arena.insert(Node {
            element: value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(head) => self.arena.node_mut(head).prev = Some(new),
            None => self.tail = Some(new),
        }
        self.head = Some(new);
        self.len += 1;
    }

    /// Removes the first element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the sequence is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_sequence::{Error, LinkedSequence};
    ///
    /// let mut seq = LinkedSequence::new();
    /// assert_eq!(seq.remove_front(), Err(Error::Empty));
    ///
    /// seq.push_front(1);
    /// seq.push_front(3);
    /// assert_eq!(seq.remove_front(), Ok(3));
    /// assert_eq!(seq.remove_front(), Ok(1));
    /// assert_eq!(seq.remove_front(), Err(Error::Empty));
    /// ```
    pub fn remove_front(&mut self) -> Result<E> {
        let head = self.head.ok_or(Error::Empty)?;
        let node = self.arena.remove(head);
        self.head = node.next;
        match self.head {
            Some(new_head) => self.arena.node_mut(new_head).prev = None,
            None => self.tail = None,
        }
        self.len -= 1;
        Ok(node.element)
    }

    /// Appends an element to the back of the sequence.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_sequence::LinkedSequence;
    ///
    /// let mut seq = LinkedSequence::new();
    /// seq.push_back(1);
    /// seq.push_back(3);
    /// assert_eq!(seq.back(), Some(&3));
    /// ```
    pub fn push_back(&mut self, value: E) {
        let new = self.arena.insert(Node {
            element: value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.arena.node_mut(tail).next = Some(new),
            None => self.head = Some(new),
        }
        self.tail = Some(new);
        self.len += 1;
    }

    /// Removes the last element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the sequence is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_sequence::{Error, LinkedSequence};
    ///
    /// let mut seq = LinkedSequence::new();
    /// assert_eq!(seq.remove_back(), Err(Error::Empty));
    ///
    /// seq.push_back(1);
    /// seq.push_back(3);
    /// assert_eq!(seq.remove_back(), Ok(3));
    /// ```
    pub fn remove_back(&mut self) -> Result<E> {
        let tail = self.tail.ok_or(Error::Empty)?;
        let node = self.arena.remove(tail);
        self.tail = node.prev;
        match self.tail {
            Some(new_tail) => self.arena.node_mut(new_tail).next = None,
            None => self.head = None,
        }
        self.len -= 1;
        Ok(node.element)
    }

    /// Appends an element to the back of the sequence.
    ///
    /// Convenience alias for [`push_back`].
    ///
    /// [`push_back`]: LinkedSequence::push_back
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_sequence::LinkedSequence;
    ///
    /// let mut seq = LinkedSequence::new();
    /// seq.push(1);
    /// seq.push(2);
    /// assert_eq!(seq.back(), Some(&2));
    /// ```
    #[inline]
    pub fn push(&mut self, value: E) {
        self.push_back(value);
    }

    /// Adds an element at the given index, so that `get(index)` afterwards
    /// returns it.
    ///
    /// `index` may equal the current length, in which case the element is
    /// appended at the tail. Any other element at or after `index` shifts
    /// one position toward the tail.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is greater than the current
    /// length. The sequence is left unmodified.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_sequence::LinkedSequence;
    ///
    /// let mut seq = LinkedSequence::from([1, 2, 3]);
    ///
    /// seq.insert(2, 4).unwrap();
    /// seq.insert(4, 5).unwrap(); // index == len appends
    ///
    /// assert_eq!(seq.to_string(), "[1>2>4>3>5>]");
    /// ```
    pub fn insert(&mut self, index: usize, value: E) -> Result<()> {
        if index > self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        if index == self.len {
            self.push_back(value);
            return Ok(());
        }
        let at = self.node_at(index);
        let prev = self.arena.node(at).prev;
        let new = self.arena.insert(Node {
            element: value,
            prev,
            next: Some(at),
        });
        self.arena.node_mut(at).prev = Some(new);
        match prev {
            Some(prev) => self.arena.node_mut(prev).next = Some(new),
            None => self.head = Some(new),
        }
        self.len += 1;
        Ok(())
    }

    /// Removes the element at the given index and returns it.
    ///
    /// Elements after `index` shift one position toward the head.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is not below the current
    /// length. The sequence is left unmodified.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_sequence::LinkedSequence;
    ///
    /// let mut seq = LinkedSequence::from([1, 2, 3]);
    ///
    /// assert_eq!(seq.remove_at(1), Ok(2));
    /// assert_eq!(seq.get(1), Ok(&3));
    /// assert_eq!(seq.len(), 2);
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<E> {
        if index >= self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        let at = self.node_at(index);
        let node = self.arena.remove(at);
        match node.prev {
            Some(prev) => self.arena.node_mut(prev).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.arena.node_mut(next).prev = node.prev,
            None => self.tail = node.prev,
        }
        self.len -= 1;
        Ok(node.element)
    }

    /// Provides a reference to the element at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is not below the current
    /// length.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time, walking at most
    /// `len / 2` links from the nearer end.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_sequence::{Error, LinkedSequence};
    ///
    /// let seq = LinkedSequence::from([1, 2, 3]);
    ///
    /// assert_eq!(seq.get(1), Ok(&2));
    /// assert_eq!(seq.get(3), Err(Error::OutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&E> {
        if index >= self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        let at = self.node_at(index);
        Ok(&self.arena.node(at).element)
    }

    /// Provides a mutable reference to the element at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is not below the current
    /// length.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_sequence::LinkedSequence;
    ///
    /// let mut seq = LinkedSequence::from([1, 2, 3]);
    ///
    /// *seq.get_mut(1).unwrap() = 5;
    /// assert_eq!(seq.get(1), Ok(&5));
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Result<&mut E> {
        if index >= self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        let at = self.node_at(index);
        Ok(&mut self.arena.node_mut(at).element)
    }

    /// Reverses the sequence in place.
    ///
    /// Every node swaps its two links in one linear pass, then head and tail
    /// swap. No elements move in the arena.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_sequence::LinkedSequence;
    ///
    /// let mut seq = LinkedSequence::from([1, 2, 3]);
    ///
    /// seq.reverse();
    /// assert_eq!(seq.to_string(), "[3>2>1>]");
    ///
    /// seq.reverse();
    /// assert_eq!(seq.to_string(), "[1>2>3>]");
    /// ```
    pub fn reverse(&mut self) {
        let mut current = self.head;
        while let Some(index) = current {
            let node = self.arena.node_mut(index);
            mem::swap(&mut node.prev, &mut node.next);
            // the old successor, before the swap
            current = node.prev;
        }
        mem::swap(&mut self.head, &mut self.tail);
    }
}
