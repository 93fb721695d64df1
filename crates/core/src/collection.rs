//! Random picks and shuffles over slices.
//!
//! These take the generator explicitly, so a seeded sequence fully determines
//! the result.

use crate::sequence::RandomSequence;

/// Random index into a collection of `len` elements, `None` when empty.
pub fn random_index(len: usize, sequence: &mut RandomSequence) -> Option<usize> {
    // a non-empty [0, len) cannot fail
    sequence.next_index(0, len).ok()
}

/// Random element of `items`, `None` when empty.
pub fn random_element<'a, T>(items: &'a [T], sequence: &mut RandomSequence) -> Option<&'a T> {
    random_index(items.len(), sequence).map(|i| &items[i])
}

/// Shuffles `items` in place (Fisher-Yates).
pub fn shuffle<T>(items: &mut [T], sequence: &mut RandomSequence) {
    for i in (1..items.len()).rev() {
        // j in [0, i]
        if let Some(j) = random_index(i + 1, sequence) {
            items.swap(i, j);
        }
    }
}

/// Shuffled copy of `items`.
pub fn shuffled<T: Clone>(items: &[T], sequence: &mut RandomSequence) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle(&mut out, sequence);
    out
}
