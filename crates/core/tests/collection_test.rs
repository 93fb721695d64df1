//! Tests for shuffle and random pick helpers.

use randseq_core::{RandomSequence, random_element, random_index, shuffle, shuffled};

#[test]
fn test_shuffle_pinned_seed() {
    let mut seq = RandomSequence::new(7);
    let items = ["a", "b", "c", "d", "e"];
    assert_eq!(shuffled(&items, &mut seq), vec!["a", "c", "e", "d", "b"]);
    assert_eq!(seq.seed(), 3981355051);
}

#[test]
fn test_shuffle_is_a_permutation() {
    let mut seq = RandomSequence::new(90210);
    let mut items: Vec<u32> = (0..500).collect();
    shuffle(&mut items, &mut seq);
    assert_ne!(items, (0..500).collect::<Vec<_>>());
    items.sort_unstable();
    assert_eq!(items, (0..500).collect::<Vec<_>>());
}

#[test]
fn test_shuffle_reproducible_by_seed() {
    let items: Vec<u32> = (0..64).collect();
    let a = shuffled(&items, &mut RandomSequence::new(4));
    let b = shuffled(&items, &mut RandomSequence::new(4));
    let c = shuffled(&items, &mut RandomSequence::new(5));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_shuffled_leaves_input_untouched() {
    let items = vec![1, 2, 3, 4, 5, 6];
    let _ = shuffled(&items, &mut RandomSequence::new(1));
    assert_eq!(items, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_random_element_visits_every_item() {
    let mut seq = RandomSequence::new(123);
    let items = ['x', 'y', 'z'];
    let mut seen = [false; 3];
    for _ in 0..300 {
        let item = random_element(&items, &mut seq).unwrap();
        let pos = items.iter().position(|c| c == item).unwrap();
        seen[pos] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn test_random_index_bounds() {
    let mut seq = RandomSequence::new(321);
    for len in 1..50 {
        let i = random_index(len, &mut seq).unwrap();
        assert!(i < len);
    }
}
