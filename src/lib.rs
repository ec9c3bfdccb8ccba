//! This crate provides a doubly-linked sequence with positional access,
//! backed by a slot arena.
//!
//! The [`LinkedSequence`] allows inserting and removing elements at either end
//! in constant time, and at any index in *O*(*n*) time, where the lookup walks
//! from whichever end is nearer to the index.
//!
//! Here is a quick example showing how the sequence works.
//!
//! ```
//! use linked_sequence::LinkedSequence;
//!
//! let mut seq = LinkedSequence::new();
//!
//! seq.push_back(1);
//! seq.push_back(2);
//! seq.push_front(0);
//!
//! seq.insert(2, 10).unwrap(); // becomes [0, 1, 10, 2]
//! assert_eq!(seq.get(2), Ok(&10));
//! assert_eq!(seq.len(), 4);
//!
//! assert_eq!(seq.remove_at(1), Ok(1)); // becomes [0, 10, 2]
//!
//! seq.reverse(); // becomes [2, 10, 0]
//! assert_eq!(seq.get(0), Ok(&2));
//! ```
//!
//! # Memory Layout
//!
//! Nodes are not separate heap allocations. All of them live in one growable
//! arena of slots, and `prev`/`next` are slot indices instead of pointers:
//!
//! ```text
//!    ╔═══════════╗      slot 0           slot 1          slot 2
//!    ║   head ───╫──┐ ┌───────────┐    ┌───────────┐   ┌───────────┐
//!    ╟───────────╢  └→│ prev: ─   │ ┌─→│ prev: 0   │   │ vacant    │
//!    ║   tail ───╫──┐ │ next: 1 ──┼─┘  │ next: ─   │   │ next_free │
//!    ╟───────────╢  │ │ element E │    │ element E │   └───────────┘
//!    ║   (len)   ║  │ └───────────┘    └───────────┘         ↑
//!    ╚═══════════╝  └────────────────────────┘          free list
//!      sequence                  arena
//! ```
//!
//! "No neighbour" is an explicit `None`, never a sentinel index. Vacant slots
//! are threaded into a free list and recycled before the arena grows, so
//! removal followed by insertion does not allocate. Clearing the sequence
//! resets the whole arena at once.
//!
//! Because links are plain indices, the structure contains no reference
//! cycles and no raw pointers: ownership of every element sits in the arena,
//! and the borrow checker polices all access through the sequence itself.
//!
//! # Positional Access
//!
//! Elements are addressed by zero-based index in head-to-tail order. Lookups
//! and positional edits return a [`Result`]; an invalid index reports
//! [`Error::OutOfRange`] and removing from either end of an empty sequence
//! reports [`Error::Empty`]. Failed calls never modify the sequence.
//!
//! ```
//! use linked_sequence::{Error, LinkedSequence};
//!
//! let mut seq = LinkedSequence::from([1, 2, 3]);
//!
//! assert_eq!(seq.get(3), Err(Error::OutOfRange { index: 3, len: 3 }));
//! assert_eq!(seq.insert(3, 4), Ok(())); // index == len appends
//! assert_eq!(seq.get(3), Ok(&4));
//! ```
//!
//! # Formatting
//!
//! A sequence over displayable elements renders as `[` followed by each
//! element and a `>` separator, head to tail, followed by `]`. The empty
//! sequence renders as an empty string.
//!
//! ```
//! use linked_sequence::LinkedSequence;
//!
//! let seq = LinkedSequence::from(["a", "b"]);
//! assert_eq!(seq.to_string(), "[a>b>]");
//!
//! let empty: LinkedSequence<&str> = LinkedSequence::new();
//! assert_eq!(empty.to_string(), "");
//! ```
//!
//! [`LinkedSequence`]: crate::LinkedSequence
//! [`Result`]: crate::Result
//! [`Error::OutOfRange`]: crate::Error::OutOfRange
//! [`Error::Empty`]: crate::Error::Empty

#[doc(inline)]
pub use sequence::error::{Error, Result};
#[doc(inline)]
pub use sequence::LinkedSequence;

pub mod sequence;
