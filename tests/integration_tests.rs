use rangesort::comparator::ordering_to_int;
use rangesort::prelude::*;
use rangesort::{ByOrdering, Reversed};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

fn assert_sorted_by<T, C>(data: &[T], comparator: &mut C)
where
    T: std::fmt::Debug,
    C: ElementComparator<T>,
{
    for (i, pair) in data.windows(2).enumerate() {
        assert!(
            comparator.compare_elements(&pair[0], &pair[1]) <= 0,
            "Out of order at index {}: {:?} > {:?}",
            i,
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_basic_sort_hybrid() {
    let mut data = vec![5, 3, 4, 1, 2];
    sort_range(&mut NaturalOrder::new(), &mut data, 0, 4, false);
    assert_eq!(data, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_retain_order_keeps_equal_keys() {
    let mut by_first = |a: &(i32, char), b: &(i32, char)| a.0 - b.0;
    let mut data = vec![(1, 'a'), (1, 'b'), (0, 'c')];
    sort_range(&mut by_first, &mut data, 0, 2, true);
    assert_eq!(data, vec![(0, 'c'), (1, 'a'), (1, 'b')]);
}

#[test]
fn test_degenerate_ranges_are_noops() {
    let mut data = vec![3, 2, 1];
    let expected = data.clone();

    // Single element and inverted ranges.
    for retain in [false, true] {
        sort_range(&mut NaturalOrder::new(), &mut data, 1, 1, retain);
        sort_range(&mut NaturalOrder::new(), &mut data, 2, 0, retain);
        assert_eq!(data, expected);
    }

    // Empty sequence through the whole-sequence entry point.
    let mut empty: Vec<i32> = vec![];
    sort(&mut NaturalOrder::new(), &mut empty, false);
    assert!(empty.is_empty());
}

#[test]
fn test_subrange_only() {
    let mut data = vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0, 42, -1];
    sort_range(&mut NaturalOrder::new(), &mut data, 0, 9, false);
    assert_eq!(data, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 42, -1]);

    let mut data = vec![100, 5, 4, 3, 2, 1, -100];
    sort_range(&mut NaturalOrder::new(), &mut data, 1, 5, true);
    assert_eq!(data, vec![100, 1, 2, 3, 4, 5, -100]);
}

#[test]
fn test_selection_sort_boundary_sizes() {
    // Sizes around the partition threshold, in both directions.
    for len in 2..=20 {
        let mut descending: Vec<i32> = (0..len).rev().collect();
        sort(&mut NaturalOrder::new(), &mut descending, false);
        assert_eq!(descending, (0..len).collect::<Vec<_>>(), "len {}", len);

        let mut interleaved: Vec<i32> = (0..len).map(|i| (i * 7) % len).collect();
        let mut expected = interleaved.clone();
        expected.sort();
        sort(&mut NaturalOrder::new(), &mut interleaved, false);
        assert_eq!(interleaved, expected, "len {}", len);
    }
}

#[test]
fn test_hybrid_shapes() {
    let n = 2_000;
    let shapes: Vec<(&str, Vec<i32>)> = vec![
        ("sorted", (0..n).collect()),
        ("reversed", (0..n).rev().collect()),
        ("all equal", vec![7; n as usize]),
        ("organ pipe", (0..n / 2).chain((0..n / 2).rev()).collect()),
        ("sawtooth", (0..n).map(|i| i % 16).collect()),
        ("two values", (0..n).map(|i| i % 2).collect()),
    ];

    for (name, input) in shapes {
        let mut expected = input.clone();
        expected.sort();

        let mut actual = input;
        sort(&mut NaturalOrder::new(), &mut actual, false);
        assert_eq!(actual, expected, "shape: {}", name);
    }
}

#[test]
fn test_many_duplicates_large() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut data: Vec<u8> = (0..200_000).map(|_| rng.random_range(0..8)).collect();
    let mut expected = data.clone();
    expected.sort();

    sort(&mut NaturalOrder::new(), &mut data, false);
    assert_eq!(data, expected);
}

#[test]
fn test_stability_against_std() {
    let mut rng = StdRng::seed_from_u64(0x2545_f491);
    let input: Vec<(u32, usize)> = (0..2_000).map(|i| (rng.random_range(0..20), i)).collect();

    let mut expected = input.clone();
    expected.sort_by_key(|p| p.0);

    let mut actual = input;
    sort_by(&mut actual, true, |a, b| a.0.cmp(&b.0));
    assert_eq!(actual, expected);
}

#[test]
fn test_unstable_mode_still_sorts_by_key() {
    let input: Vec<(u32, usize)> = (0..5_000).map(|i| ((i as u32 * 37) % 11, i)).collect();

    let mut actual = input.clone();
    let mut by_key = ByOrdering::new(|a: &(u32, usize), b: &(u32, usize)| a.0.cmp(&b.0));
    sort(&mut by_key, &mut actual, false);

    assert_sorted_by(&actual, &mut by_key);

    let mut actual_sorted = actual.clone();
    actual_sorted.sort();
    let mut expected = input;
    expected.sort();
    assert_eq!(actual_sorted, expected);
}

#[test]
fn test_idempotence() {
    // Stable mode never moves anything in an already sorted range.
    let mut by_key = |a: &(u8, char), b: &(u8, char)| a.0 as i32 - b.0 as i32;
    let sorted_pairs: Vec<(u8, char)> =
        vec![(0, 'z'), (1, 'b'), (1, 'a'), (2, 'y'), (2, 'x'), (3, 'c')];
    let mut data = sorted_pairs.clone();
    sort(&mut by_key, &mut data, true);
    assert_eq!(data, sorted_pairs);

    // Hybrid mode under a total order.
    let sorted: Vec<i64> = (0..1_000).map(|i| i / 3).collect();
    let mut data = sorted.clone();
    sort(&mut NaturalOrder::new(), &mut data, false);
    assert_eq!(data, sorted);
    sort(&mut NaturalOrder::new(), &mut data, false);
    assert_eq!(data, sorted);
}

#[test]
fn test_hybrid_resort_with_equivalent_keys() {
    // Sorted by key, five items per key. Hybrid mode may shuffle items within a key,
    // so only key order and the set of items are guaranteed.
    let sorted: Vec<(u32, u32)> = (0..40).map(|i| (i / 5, i)).collect();
    let mut by_key = ByOrdering::new(|a: &(u32, u32), b: &(u32, u32)| a.0.cmp(&b.0));

    let mut data = sorted.clone();
    sort(&mut by_key, &mut data, false);
    assert_sorted_by(&data, &mut by_key);

    let keys: Vec<u32> = data.iter().map(|p| p.0).collect();
    let expected_keys: Vec<u32> = sorted.iter().map(|p| p.0).collect();
    assert_eq!(keys, expected_keys);

    data.sort();
    assert_eq!(data, sorted);
}

#[test]
fn test_size_two_swaps_at_most_once() {
    struct SwapCounter {
        data: [i32; 2],
        swaps: usize,
    }

    impl Sequence for SwapCounter {
        type Item = i32;

        fn len(&self) -> usize {
            2
        }

        fn get(&self, index: usize) -> &i32 {
            &self.data[index]
        }

        fn get_mut(&mut self, index: usize) -> &mut i32 {
            &mut self.data[index]
        }

        fn swap(&mut self, a: usize, b: usize) {
            self.swaps += 1;
            self.data.swap(a, b);
        }
    }

    for retain in [false, true] {
        for input in [[1, 2], [2, 1], [3, 3]] {
            let mut seq = SwapCounter {
                data: input,
                swaps: 0,
            };
            sort_range(&mut NaturalOrder::new(), &mut seq, 0, 1, retain);

            assert!(seq.swaps <= 1, "{:?} took {} swaps", input, seq.swaps);
            assert!(seq.data[0] <= seq.data[1]);
        }
    }
}

#[test]
fn test_natural_order_comparator() {
    let mut natural = NaturalOrder::new();
    assert_eq!(natural.compare_elements(&1, &2), -1);
    assert_eq!(natural.compare_elements(&2, &1), 1);
    assert_eq!(natural.compare_elements(&2, &2), 0);

    // Incomparable values are equivalent.
    assert_eq!(natural.compare_elements(&f64::NAN, &1.0), 0);

    let mut strings = vec!["pear", "apple", "fig"];
    sort(&mut NaturalOrder::new(), &mut strings, false);
    assert_eq!(strings, vec!["apple", "fig", "pear"]);
}

#[test]
fn test_natural_order_with_injected_predicate() {
    let mut by_abs = NaturalOrder::with_less(|a: &i32, b: &i32| a.abs() < b.abs());
    let mut data = vec![-5, 3, -1, 4, -2];
    sort(&mut by_abs, &mut data, true);
    assert_eq!(data, vec![-1, -2, 3, 4, -5]);

    // Only a strict partial order: -3 and 3 are neither less nor greater.
    assert_eq!(by_abs.compare_elements(&-3, &3), 0);
}

#[test]
fn test_reversed_and_ordering_adaptors() {
    let mut data: Vec<i32> = (0..50).collect();
    sort(&mut Reversed(NaturalOrder::new()), &mut data, false);
    assert_eq!(data, (0..50).rev().collect::<Vec<_>>());

    // Extreme comparator results must not overflow when reversed.
    let mut extreme = Reversed(|a: &i32, b: &i32| match a.cmp(b) {
        std::cmp::Ordering::Less => i32::MIN,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => i32::MAX,
    });
    let mut data = vec![2, 9, -4, 0];
    sort(&mut extreme, &mut data, true);
    assert_eq!(data, vec![9, 2, 0, -4]);

    assert_eq!(ordering_to_int(std::cmp::Ordering::Less), -1);
    assert_eq!(ordering_to_int(std::cmp::Ordering::Equal), 0);
    assert_eq!(ordering_to_int(std::cmp::Ordering::Greater), 1);
}

#[test]
fn test_vec_deque() {
    let mut input: VecDeque<String> = VecDeque::new();
    // Wrap around the ring buffer so the storage is split in two.
    for s in ["cherry", "banana"] {
        input.push_back(s.to_string());
    }
    for s in ["date", "apple", "fig", "elderberry"] {
        input.push_front(s.to_string());
    }

    sort(&mut NaturalOrder::new(), &mut input, false);
    assert_eq!(
        input,
        VecDeque::from(vec![
            "apple".to_string(),
            "banana".to_string(),
            "cherry".to_string(),
            "date".to_string(),
            "elderberry".to_string(),
            "fig".to_string(),
        ])
    );
}

#[test]
fn test_sort_by_strings() {
    let mut data = vec![
        "banana".to_string(),
        "apple".to_string(),
        "cherry".to_string(),
    ];
    sort_by(&mut data, false, |a, b| a.cmp(b));
    assert_eq!(data, vec!["apple", "banana", "cherry"]);
}
