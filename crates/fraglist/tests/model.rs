//! Model-based checks: a `FragmentedArray` driven by random operation
//! sequences must agree with a plain `Vec` plus a capacity counter.

use fraglist::prelude::*;
use fraglist_test_utils::{canonical_scenario, sequential, ArrayBuilder};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Grow(usize),
    Append(i32),
    Write(usize, i32),
    Read(usize),
    Clone,
    Take,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..6).prop_map(Op::Grow),
        any::<i32>().prop_map(Op::Append),
        any::<i32>().prop_map(Op::Append),
        (0usize..40, any::<i32>()).prop_map(|(i, v)| Op::Write(i, v)),
        (0usize..40).prop_map(Op::Read),
        Just(Op::Clone),
        Just(Op::Take),
    ]
}

proptest! {
    #[test]
    fn array_matches_vec_model(ops in proptest::collection::vec(op_strategy(), 1..80)) {
        let mut arr: FragmentedArray<i32> = FragmentedArray::new();
        let mut model: Vec<i32> = Vec::new();
        let mut capacity = 0usize;
        let mut fragments = 0usize;

        for op in ops {
            match op {
                Op::Grow(c) => {
                    let result = arr.grow(c);
                    if c == 0 {
                        let is_invalid = matches!(result, Err(ArrayError::InvalidArgument { .. }));
                        prop_assert!(is_invalid);
                    } else {
                        prop_assert!(result.is_ok());
                        capacity += c;
                        fragments += 1;
                    }
                }
                Op::Append(v) => {
                    let result = arr.append(v);
                    if model.len() == capacity {
                        prop_assert_eq!(result, Err(ArrayError::CapacityExceeded { capacity }));
                    } else {
                        prop_assert!(result.is_ok());
                        model.push(v);
                    }
                }
                Op::Write(i, v) => match arr.get_mut(i) {
                    Ok(slot) => {
                        prop_assert!(i < model.len());
                        *slot = v;
                        model[i] = v;
                    }
                    Err(err) => {
                        prop_assert!(i >= model.len());
                        prop_assert_eq!(err, ArrayError::OutOfRange { index: i, len: model.len() });
                    }
                },
                Op::Read(i) => match arr.get(i) {
                    Ok(&v) => prop_assert_eq!(Some(&v), model.get(i)),
                    Err(_) => prop_assert!(i >= model.len()),
                },
                Op::Clone => {
                    let copy = arr.clone();
                    prop_assert_eq!(copy.to_vec(), model.clone());
                    prop_assert_eq!(copy.fragment_capacities(), arr.fragment_capacities());
                    arr = copy;
                }
                Op::Take => {
                    let moved = arr.take();
                    prop_assert_eq!(arr.counts(), (0, 0));
                    prop_assert_eq!(arr.fragment_count(), 0);
                    arr = moved;
                }
            }

            prop_assert_eq!(arr.counts(), (model.len(), capacity - model.len()));
            prop_assert_eq!(arr.fragment_count(), fragments);
            prop_assert_eq!(
                arr.fragment_capacities().iter().sum::<usize>(),
                arr.capacity()
            );
        }

        prop_assert_eq!(arr.to_vec(), model);
    }
}

#[test]
fn canonical_scenario_through_facade() {
    let arr = canonical_scenario();
    assert_eq!(arr.counts(), (4, 1));
    assert_eq!(arr[3], 40);
    assert_eq!(arr[1], 20);
    assert_eq!(arr.locate(3).unwrap(), Location::new(FragmentId(1), 0));
}

#[test]
fn builder_layout_is_reported_in_metrics() {
    let arr = ArrayBuilder::new()
        .fragments(&[4, 16, 2])
        .values(&[1.0f32, 2.0, 3.0, 4.0, 5.0])
        .build()
        .unwrap();
    let m = arr.metrics();
    assert_eq!(m.element_type, "f32");
    assert_eq!(m.fragment_count, 3);
    assert_eq!((m.occupied, m.free), arr.counts());
    assert_eq!(m.memory_bytes, 22 * std::mem::size_of::<f32>());
    assert_eq!(m.largest_fragment, 16);
    assert_eq!(m.smallest_fragment, 2);
}

#[test]
fn sequential_fixture_survives_clone_and_take() {
    let mut original = sequential(&[3, 1, 4, 1, 5]);
    let copy = original.clone();
    let moved = original.take();
    assert_eq!(copy, moved);
    assert!(original.is_empty());
    assert!(moved.iter().copied().eq(0..14));
}
