//! Top-down merge sort

/// Sort a slice with a stable top-down merge sort
///
/// Each level copies both halves into temporaries and merges them back.
pub fn merge_sort<T: Ord + Clone>(items: &mut [T]) {
    if items.len() < 2 {
        return;
    }
    let mid = items.len() / 2;
    merge_sort(&mut items[..mid]);
    merge_sort(&mut items[mid..]);
    merge(items, mid);
}

/// Merge the sorted runs `items[..mid]` and `items[mid..]`
fn merge<T: Ord + Clone>(items: &mut [T], mid: usize) {
    let left = items[..mid].to_vec();
    let right = items[mid..].to_vec();

    let (mut i, mut j) = (0, 0);
    for slot in items.iter_mut() {
        // ties take from the left run to keep the sort stable
        let take_left = j == right.len() || (i < left.len() && left[i] <= right[j]);
        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}

/// Check that a slice is in non-decreasing order
#[must_use]
pub fn is_sorted<T: Ord>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sorts_small_inputs() {
        let mut empty: [i32; 0] = [];
        merge_sort(&mut empty);

        let mut one = [7];
        merge_sort(&mut one);
        assert_eq!(one, [7]);

        let mut many = [5, 3, 9, 1, 3, 0, 8];
        merge_sort(&mut many);
        assert_eq!(many, [0, 1, 3, 3, 5, 8, 9]);
    }

    /// Ordered by key only, so equal keys expose their input order
    #[derive(Clone, Debug)]
    struct Keyed(i32, char);

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }
    impl Eq for Keyed {}
    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    #[test]
    fn is_stable() {
        let mut items = vec![Keyed(2, 'a'), Keyed(1, 'b'), Keyed(2, 'c'), Keyed(1, 'd')];
        merge_sort(&mut items);
        let order: Vec<char> = items.iter().map(|k| k.1).collect();
        assert_eq!(order, vec!['b', 'd', 'a', 'c']);
    }

    proptest! {
        #[test]
        fn prop_matches_std_sort(mut items in proptest::collection::vec(0u32..10_000, 0..512)) {
            let mut expected = items.clone();
            expected.sort();
            merge_sort(&mut items);
            prop_assert!(is_sorted(&items));
            prop_assert_eq!(items, expected);
        }
    }
}
