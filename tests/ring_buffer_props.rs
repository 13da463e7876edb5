use std::collections::VecDeque;

use basic_collections::{AnySequence, RingBuffer};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Unshift(i32),
    Pop,
    Shift,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::Push),
        any::<i32>().prop_map(Op::Unshift),
        Just(Op::Pop),
        Just(Op::Shift),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_sequence_matches_vecdeque(
        capacity in 0usize..12,
        ops in prop::collection::vec(op(), 1..200),
    ) {
        let mut rb = RingBuffer::new(capacity);
        let mut model: VecDeque<i32> = VecDeque::with_capacity(capacity);

        for op in ops {
            match op {
                Op::Push(v) => {
                    let result = rb.push(v);
                    if model.len() < capacity {
                        prop_assert!(result.is_ok());
                        model.push_back(v);
                    } else {
                        prop_assert_eq!(result.unwrap_err().into_inner(), v);
                    }
                }
                Op::Unshift(v) => {
                    let result = rb.unshift(v);
                    if model.len() < capacity {
                        prop_assert!(result.is_ok());
                        model.push_front(v);
                    } else {
                        prop_assert_eq!(result.unwrap_err().into_inner(), v);
                    }
                }
                Op::Pop => prop_assert_eq!(rb.pop(), model.pop_back()),
                Op::Shift => prop_assert_eq!(rb.shift(), model.pop_front()),
            }
            prop_assert_eq!(rb.len(), model.len());
            prop_assert!(rb.len() <= rb.capacity());
            prop_assert_eq!(rb.to_vec(), model.to_vec());
        }
    }

    #[test]
    fn prop_push_then_pop_reverses(values in prop::collection::vec(any::<u16>(), 0..64), extra in 0usize..8) {
        let mut rb = RingBuffer::new(values.len() + extra);
        for v in &values {
            rb.push(*v).unwrap();
        }
        prop_assert_eq!(rb.len(), values.len());

        let mut popped = Vec::new();
        while let Some(v) = rb.pop() {
            popped.push(v);
        }
        popped.reverse();
        prop_assert_eq!(popped, values);

        prop_assert_eq!(rb.pop(), None);
        prop_assert_eq!(rb.len(), 0);
    }

    #[test]
    fn prop_full_buffer_rejects_without_change(values in prop::collection::vec(any::<i8>(), 1..32)) {
        let mut rb = RingBuffer::from_vec(values.clone());
        prop_assert!(rb.is_full());
        prop_assert!(rb.push(0).is_err());
        prop_assert!(rb.unshift(0).is_err());
        prop_assert_eq!(rb.len(), values.len());
        prop_assert_eq!(rb.flush(), values);
        prop_assert!(rb.is_empty());
    }
}
