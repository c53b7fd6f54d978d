use crate::position::Position;

/// Position of the first element that is larger than its parent when `seq`
/// is read as a binary max-heap, or `End` if the whole sequence is a heap.
pub fn is_heap_until<T: Ord>(seq: &[T]) -> Position {
    let broken = (1..seq.len()).find(|&child| seq[(child - 1) / 2] < seq[child]);
    match broken {
        Some(i) => Position::At(i),
        None => Position::End,
    }
}

pub fn is_heap<T: Ord>(seq: &[T]) -> bool {
    is_heap_until(seq).is_end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BinaryHeap;

    #[test]
    fn test_heap_with_invalid_tail() {
        let seq = [5, 4, 2, 3, 1, 200];
        let until = is_heap_until(&seq);
        assert_eq!(until, Position::At(5));
        assert_eq!(until.get(&seq), Some(&200));
    }

    #[test]
    fn test_valid_heaps() {
        assert_eq!(is_heap_until(&[9, 5, 8, 1, 2, 7]), Position::End);
        assert_eq!(is_heap_until(&[1, 1, 1]), Position::End);
        assert!(is_heap::<i32>(&[]));
        assert!(is_heap(&[42]));
    }

    #[test]
    fn test_broken_root_children() {
        assert_eq!(is_heap_until(&[1, 2]), Position::At(1));
        assert!(!is_heap(&[3, 1, 4]));
    }

    #[test]
    fn test_is_heap_until_does_not_mutate() {
        let seq = [5, 4, 2, 3, 1, 200];
        assert_eq!(is_heap_until(&seq), is_heap_until(&seq));
        assert_eq!(seq, [5, 4, 2, 3, 1, 200]);
    }

    proptest! {
        #[test]
        fn test_binary_heap_layout_is_a_heap(values in prop::collection::vec(any::<i32>(), 0..32)) {
            let heap: BinaryHeap<i32> = values.into_iter().collect();
            prop_assert!(is_heap(&heap.into_vec()));
        }

        #[test]
        fn test_prefix_before_break_is_a_heap(seq in prop::collection::vec(0i32..20, 0..16)) {
            let until = is_heap_until(&seq).resolve(seq.len());
            prop_assert!(is_heap(&seq[..until]));
        }
    }
}
