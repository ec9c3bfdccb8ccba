use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use crate::sequence::LinkedSequence;

impl<E: PartialEq> PartialEq for LinkedSequence<E> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.values().eq(other.values())
    }
}

impl<E: Eq> Eq for LinkedSequence<E> {}

impl<E: Clone> Clone for LinkedSequence<E> {
    fn clone(&self) -> Self {
        self.values().cloned().collect()
    }
}

impl<E: Hash> Hash for LinkedSequence<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self.values() {
            element.hash(state);
        }
    }
}

impl<E> Default for LinkedSequence<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Extend<E> for LinkedSequence<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<E> FromIterator<E> for LinkedSequence<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<E, const N: usize> From<[E; N]> for LinkedSequence<E> {
    fn from(values: [E; N]) -> Self {
        let mut seq = Self::with_capacity(N);
        seq.extend(values);
        seq
    }
}

impl<E: Debug> Debug for LinkedSequence<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

/// Renders `[` followed by each element and a `>` separator, head to tail,
/// followed by `]`. The empty sequence renders as an empty string, and every
/// element carries the trailing separator, e.g. `[a>b>]`.
impl<E: Display> Display for LinkedSequence<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        f.write_str("[")?;
        for element in self.values() {
            write!(f, "{}>", element)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use crate::sequence::LinkedSequence;
    use std::iter::FromIterator;

    #[test]
    fn sequence_eq_by_contents() {
        let a = LinkedSequence::from_iter(0..3);
        let b = LinkedSequence::from([0, 1, 2]);
        assert_eq!(a, b);

        let shorter = LinkedSequence::from([0, 1]);
        assert_ne!(a, shorter);

        let reordered = LinkedSequence::from([2, 1, 0]);
        assert_ne!(a, reordered);

        assert_eq!(
            LinkedSequence::<i32>::new(),
            LinkedSequence::<i32>::default()
        );
    }

    #[test]
    fn sequence_clone_is_independent() {
        let mut original = LinkedSequence::from([1, 2, 3]);
        let cloned = original.clone();
        assert_eq!(original, cloned);

        original.remove_front().unwrap();
        assert_ne!(original, cloned);
        assert_eq!(cloned.len(), 3);
    }

    #[test]
    fn sequence_from_iter_and_extend() {
        let mut seq = LinkedSequence::from_iter(0..3);
        seq.extend(3..5);
        assert_eq!(seq, LinkedSequence::from([0, 1, 2, 3, 4]));
    }

    #[test]
    fn sequence_display_format() {
        let mut seq = LinkedSequence::new();
        assert_eq!(seq.to_string(), "");

        seq.push_back("element");
        assert_eq!(seq.to_string(), "[element>]");

        seq.push_back("tail");
        seq.push_front("header");
        assert_eq!(seq.to_string(), "[header>element>tail>]");
    }

    #[test]
    fn sequence_debug_format() {
        let seq = LinkedSequence::from([1, 2, 3]);
        assert_eq!(format!("{:?}", seq), "[1, 2, 3]");
        assert_eq!(format!("{:?}", LinkedSequence::<i32>::new()), "[]");
    }
}
