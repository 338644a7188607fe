use std::{collections::VecDeque, fmt::Debug};

use proptest::prelude::*;
use ring_buf::RingBuf;

const CAP: usize = 8;

/// One mutation of the public surface, as generated by proptest.
#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
    Set(usize, i32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i32>().prop_map(Op::Push),
        2 => Just(Op::Pop),
        1 => (any::<usize>(), any::<i32>()).prop_map(|(index, value)| Op::Set(index, value)),
    ]
}

// Checks every observer against a deque holding the expected contents.
fn assert_matches_model<T: PartialEq + Debug, const N: usize>(
    buf: &RingBuf<T, N>,
    model: &VecDeque<T>,
) {
    assert_eq!(buf.len(), model.len());
    assert_eq!(buf.is_empty(), model.is_empty());
    assert_eq!(buf.is_full(), model.len() == N);

    if let Some(front) = model.front() {
        assert_eq!(buf.front(), front);
    }
    if let Some(back) = model.back() {
        assert_eq!(buf.back(), back);
    }

    for (index, expected) in model.iter().enumerate() {
        assert_eq!(&buf[index], expected, "logical index {index} diverged");
        assert_eq!(buf.get(index), Some(expected));
    }
    assert_eq!(buf.get(model.len()), None);

    assert_eq!(buf.iter().len(), model.len());
    assert!(buf.iter().eq(model.iter()));
}

proptest! {
    // Random op sequences agree with a capacity-bounded deque at every step.
    // The deque drops pushes at capacity and ignores pops when empty, the
    // same saturation policy the buffer implements.
    #[test]
    fn test_random_ops_match_deque(ops in prop::collection::vec(op_strategy(), 0..256)) {
        let mut buf = RingBuf::<i32, CAP>::new();
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                Op::Push(value) => {
                    buf.push(value);
                    if model.len() < CAP {
                        model.push_back(value);
                    }
                }
                Op::Pop => {
                    buf.pop();
                    model.pop_front();
                }
                Op::Set(index, value) => {
                    if model.is_empty() {
                        continue;
                    }
                    let index = index % model.len();
                    buf[index] = value;
                    model[index] = value;
                }
            }

            assert_matches_model(&buf, &model);
        }
    }

    // Overflow drops the newest values: only the first CAP pushes survive.
    #[test]
    fn test_overflow_keeps_oldest(values in prop::collection::vec(any::<i32>(), 0..3 * CAP)) {
        let mut buf = RingBuf::<i32, CAP>::new();
        for &value in &values {
            buf.push(value);
        }

        let expected: Vec<i32> = values.iter().copied().take(CAP).collect();
        assert_eq!(buf.iter().copied().collect::<Vec<_>>(), expected);
        assert_eq!(buf.len(), expected.len());
        assert_eq!(buf.is_full(), values.len() >= CAP);
    }

    // Consuming iteration yields exactly what borrowing iteration saw.
    #[test]
    fn test_into_iter_matches_iter(values in prop::collection::vec(any::<i32>(), 0..2 * CAP)) {
        let mut buf = RingBuf::<i32, CAP>::new();
        for &value in &values {
            buf.push(value);
        }

        let borrowed: Vec<i32> = buf.iter().copied().collect();
        let owned: Vec<i32> = buf.into_iter().collect();
        assert_eq!(owned, borrowed);
    }
}

// Drives head and tail across the physical end thousands of times.
#[test]
fn test_long_cycling_matches_model() {
    let mut rng = fastrand::Rng::with_seed(0x00C0_FFEE);
    let mut buf = RingBuf::<u64, CAP>::new();
    let mut model = VecDeque::new();

    for tick in 0..20_000_u64 {
        if rng.bool() {
            buf.push(tick);
            if model.len() < CAP {
                model.push_back(tick);
            }
        } else {
            buf.pop();
            model.pop_front();
        }

        assert_matches_model(&buf, &model);
    }
}

// Fill, pop a few, refill: logical order survives the wrap no matter where
// the split lands.
#[test]
fn test_wraparound_order_for_every_split() {
    for popped in 1..CAP {
        let mut buf = RingBuf::<usize, CAP>::new();
        for value in 0..CAP {
            buf.push(value);
        }
        for _ in 0..popped {
            buf.pop();
        }
        for value in CAP..CAP + popped {
            buf.push(value);
        }

        assert!(buf.is_full());
        for index in 0..CAP {
            assert_eq!(buf[index], popped + index);
        }
    }
}
