#![cfg(test)]

use std::borrow::Borrow;
use std::cell::Cell;
use std::hash::{BuildHasher, RandomState};
use std::rc::Rc;

use super::*;
use crate::util::alloc::{DropCounter, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_empty() {
    let arr = Array::<i32>::new();
    assert_eq!(arr.size(), 0);
    assert!(arr.is_empty());
    assert_eq!(
        arr.get(0),
        Err(IndexOutOfBounds { index: 0, len: 0 }),
        "Every index should be out of bounds for an empty Array."
    );
    assert_eq!(
        Array::<i32>::with_size(0),
        arr,
        "A sized Array of 0 should equal an empty one."
    );
    assert_eq!(Array::<i32>::default(), arr);
}

#[test]
fn test_with_size_defaults() {
    let arr = Array::<i32>::with_size(5);
    assert_eq!(arr.size(), 5);
    assert_eq!(*arr, [0; 5], "All elements should be default initialized.");

    let words = Array::<String>::with_size(3);
    assert!(words.iter().all(String::is_empty));

    let large = Array::<u64>::with_size(1000);
    assert_eq!(large.size(), 1000);
    assert_eq!(large[999], 0);
}

#[test]
fn test_get_and_write() {
    let mut arr = Array::<i32>::with_size(5);
    for i in 0..arr.size() {
        *arr.get_mut(i).unwrap() = i as i32 * 10;
    }
    assert_eq!(*arr, [0, 10, 20, 30, 40]);

    arr[2] = 7;
    assert_eq!(arr.get(2), Ok(&7), "Writes through IndexMut should be visible to get.");
    assert_eq!(arr.try_get(4), Some(&40));

    if let Some(last) = arr.try_get_mut(4) {
        *last += 1;
    }
    assert_eq!(arr[4], 41);
}

#[test]
fn test_out_of_bounds() {
    let mut arr = Array::from([1, 2, 3, 4, 5]);
    let before = arr.clone();

    assert_eq!(arr.get(10), Err(IndexOutOfBounds { index: 10, len: 5 }));
    assert_eq!(arr.get(5), Err(IndexOutOfBounds { index: 5, len: 5 }));
    assert_eq!(
        arr.get_mut(5).map(|_| ()),
        Err(IndexOutOfBounds { index: 5, len: 5 })
    );
    assert_eq!(arr.try_get(5), None);
    assert!(arr.try_get_mut(usize::MAX).is_none());
    assert_eq!(arr, before, "Failed accesses shouldn't change the Array.");

    let message = assert_panics!({ arr[10] });
    assert_eq!(message, "Index 10 out of bounds for collection with 5 elements!");

    let mut empty = Array::<i32>::new();
    let message = assert_panics!({ empty[0] = 1 });
    assert_eq!(message, "Index 0 out of bounds for collection with 0 elements!");
}

#[test]
fn test_error_display() {
    let error = IndexOutOfBounds { index: 3, len: 2 };
    assert_eq!(error.to_string(), "Index 3 out of bounds for collection with 2 elements!");

    let boxed: Box<dyn std::error::Error> = Box::new(error);
    assert!(boxed.source().is_none());
}

#[test]
fn test_clone_is_deep() {
    let mut original = Array::<i32>::with_size(3);
    original[0] = 10;
    original[1] = 20;
    original[2] = 30;

    let copy = original.clone();
    original[0] = 999;

    assert_eq!(copy[0], 10, "The copy shouldn't observe writes to the original.");
    assert_eq!(original[0], 999);
    assert_eq!(copy.size(), original.size());
    assert_ne!(copy.ptr, original.ptr, "The copy should have its own allocation.");

    let mut words = Array::from([String::from("Hello"), String::from("World")]);
    let copied_words = words.clone();
    words[1].push('!');
    assert_eq!(copied_words[1], "World");
}

#[test]
fn test_assign() {
    let mut arr1 = Array::from([10, 20, 30]);
    let mut arr2 = Array::repeat_item(99, 5);

    arr2.assign(&arr1);
    assert_eq!(arr2.size(), 3, "Assignment should adopt the size of the source.");
    assert_eq!(arr2, arr1);

    arr1[0] = 777;
    assert_eq!(arr2[0], 10, "The target shouldn't observe writes to the source.");
    assert_eq!(arr1[0], 777);

    let mut arr3 = Array::new();
    arr3.clone_from(&arr1);
    assert_eq!(*arr3, [777, 20, 30]);

    arr3.assign(&Array::new());
    assert!(arr3.is_empty());
}

#[test]
fn test_assign_from_equal_value() {
    let mut arr = Array::from([1, 2, 3]);
    let same = arr.clone();

    arr.assign(&same);
    assert_eq!(*arr, [1, 2, 3]);

    let snapshot = arr.clone();
    arr.clone_from(&snapshot);
    assert_eq!(*arr, [1, 2, 3]);
    assert_eq!(arr.size(), 3);
}

#[test]
fn test_drop() {
    let counter = DropCounter::new();
    let arr = Array::from_iter_sized((0..10).map(|i| counter.track(i)));

    drop(arr);

    assert_eq!(counter.dropped(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_assign_drops_previous_contents() {
    let counter = DropCounter::new();
    let mut target = Array::from_iter_sized((0..4).map(|i| counter.track(i)));
    let source = Array::from_iter_sized((0..2).map(|i| counter.track(i)));

    target.assign(&source);
    assert_eq!(counter.dropped(), 4, "The previous 4 elements should have been dropped.");

    drop(target);
    drop(source);
    assert_eq!(counter.dropped(), 8);
}

#[test]
fn test_clone_panic_safety() {
    let counter = DropCounter::new();
    let fuse = Rc::new(Cell::new(usize::MAX));
    let source = Array::from_iter_sized((0..4).map(|i| counter.track_fused(i, &fuse)));

    fuse.set(2);
    assert_panics!({ source.clone() });
    assert_eq!(
        counter.dropped(),
        2,
        "The 2 clones made before the panic should have been dropped."
    );

    let mut target = Array::from_iter_sized((10..13).map(|i| counter.track(i)));
    fuse.set(1);
    assert_panics!({ target.assign(&source) });
    assert_eq!(counter.dropped(), 3);
    assert_eq!(
        target.iter().map(|t| t.value).collect::<Vec<_>>(),
        [10, 11, 12],
        "A failed assignment should leave the target unchanged."
    );
}

#[test]
fn test_short_iterator_panics() {
    struct Liar(std::ops::Range<i32>);

    impl Iterator for Liar {
        type Item = i32;

        fn next(&mut self) -> Option<i32> {
            self.0.next()
        }
    }

    impl ExactSizeIterator for Liar {
        fn len(&self) -> usize {
            self.0.len() + 2
        }
    }

    let message = assert_panics!({ Array::from_iter_sized(Liar(0..3)) });
    assert_eq!(message, "iterator produced 3 of its reported 5 elements");
}

#[test]
fn test_zst_support() {
    let mut arr = Array::<ZeroSizedType>::with_size(5);
    assert_eq!(
        arr[0], ZeroSizedType,
        "Indexing with no offset should work."
    );
    assert_eq!(
        arr[4], ZeroSizedType,
        "Indexing with an in-bounds offset should work."
    );
    assert_eq!(
        arr.iter().as_slice().len(),
        5,
        "Should iterate over the right number of ZST instances."
    );
    assert!(arr.get_mut(5).is_err());

    let copy = arr.clone();
    assert_eq!(copy.ptr, arr.ptr, "ZST Arrays should never allocate.");
    assert_eq!(copy.into_iter().count(), 5);
}

#[test]
fn test_equality_and_hash() {
    let arr = Array::from_iter_sized(0_usize..5);

    assert_eq!(
        arr,
        Array::from([0, 1, 2, 3, 4]),
        "Different construction methods should produce equal results."
    );
    assert_ne!(Array::from([0, 1, 2, 5, 4]), Array::from_iter_sized(0..5));

    let borrowed: &[usize] = arr.borrow();
    assert_eq!(borrowed, &[0, 1, 2, 3, 4], "Borrow equality should be upheld.");
    assert_eq!(&*arr, &[0, 1, 2, 3, 4], "Deref equality should be upheld.");

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one(Array::from_iter_sized(0_usize..5)),
        "Equal arrays should produce the same hash."
    );
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one([0_usize, 1, 2, 3, 4].as_slice()),
        "Borrow hash equality should be upheld."
    );
}

#[test]
fn test_formatting() {
    let arr = Array::from([1, 2, 3]);
    assert_eq!(format!("{arr}"), "[1, 2, 3]");
    assert_eq!(format!("{arr:?}"), "Array { contents: [1, 2, 3], size: 3 }");
    assert_eq!(format!("{}", Array::<u8>::new()), "[]");
}

#[test]
fn test_iterators() {
    let mut arr = Array::from_iter_sized(0_usize..5);
    let collected = Array::from_iter_sized(arr.iter().cloned());
    assert_eq!(arr, collected, "Collected iter should be equal.");

    for i in &mut arr {
        *i *= 2;
    }
    assert_eq!(
        *arr,
        [0_usize, 2, 4, 6, 8],
        "Array mutated by iterator should equal this slice."
    );
    assert_eq!((&arr).into_iter().sum::<usize>(), 20);

    assert_eq!(
        arr,
        Array::from_iter_sized(arr.clone()),
        "Cloned and collected array should be equal."
    );

    let mut iter = arr.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.as_slice(), &[2, 4, 6]);
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn test_into_iter_drop() {
    let counter = DropCounter::new();
    let arr = Array::from_iter_sized((0..10).map(|i| counter.track(i)));

    drop(arr.into_iter());
    assert_eq!(
        counter.dropped(),
        10,
        "Dropping an owned iterator should drop all elements."
    );

    let counter = DropCounter::new();
    let arr = Array::from_iter_sized((0..10).map(|i| counter.track(i)));
    let mut iter = arr.into_iter();
    let first = iter.next();
    let last = iter.next_back();
    assert_eq!(counter.dropped(), 0);

    drop(iter);
    assert_eq!(counter.dropped(), 8, "Only the remaining elements should be dropped.");

    drop((first, last));
    assert_eq!(counter.dropped(), 10);
}

#[test]
fn test_custom_element() {
    #[derive(Debug, Default, Clone, PartialEq)]
    struct Number(i32);

    let mut numbers = Array::<Number>::with_size(3);
    numbers[0] = Number(100);
    numbers[1] = Number(200);
    numbers[2] = Number(300);

    let shared: &Array<Number> = &numbers;
    assert_eq!(shared[1], Number(200));
    assert_eq!(shared.get(1).map(|n| n.0), Ok(200));
}

mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn with_size_is_all_default(size in 0_usize..256) {
            let arr = Array::<u32>::with_size(size);
            prop_assert_eq!(arr.size(), size);
            prop_assert!(arr.iter().all(|v| *v == 0));
        }

        #[test]
        fn write_then_read(
            values in prop::collection::vec(any::<i64>(), 1..64),
            index in any::<prop::sample::Index>(),
            value in any::<i64>(),
        ) {
            let mut arr = Array::from_iter_sized(values.iter().copied());
            let index = index.index(arr.size());

            *arr.get_mut(index).unwrap() = value;
            prop_assert_eq!(arr.get(index), Ok(&value));
        }

        #[test]
        fn clone_is_independent(
            values in prop::collection::vec(any::<i32>(), 1..64),
            index in any::<prop::sample::Index>(),
        ) {
            let mut arr = Array::from_iter_sized(values.iter().copied());
            let copy = arr.clone();
            let index = index.index(arr.size());

            prop_assert_eq!(&copy, &arr);
            arr[index] = arr[index].wrapping_add(1);
            prop_assert_eq!(&*copy, values.as_slice());
        }

        #[test]
        fn assign_adopts_source(
            target in prop::collection::vec(any::<i32>(), 0..32),
            source in prop::collection::vec(any::<i32>(), 0..32),
        ) {
            let mut target = Array::from_iter_sized(target);
            let mut source = Array::from_iter_sized(source.clone());
            let expected = source.clone();

            target.assign(&source);
            prop_assert_eq!(target.size(), source.size());
            prop_assert_eq!(&target, &expected);

            for value in &mut source {
                *value = value.wrapping_neg().wrapping_sub(1);
            }
            prop_assert_eq!(&target, &expected);
        }

        #[test]
        fn out_of_bounds_is_rejected(size in 0_usize..64, offset in 0_usize..64) {
            let mut arr = Array::<u8>::with_size(size);
            let index = size + offset;

            prop_assert_eq!(arr.get(index), Err(IndexOutOfBounds { index, len: size }));
            prop_assert!(arr.get_mut(index).is_err());
        }
    }
}
