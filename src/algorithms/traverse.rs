//! Traversal over a sequence that may be absent, with an explicit element count.
//!
//! The sequence is optional so that "no sequence" is a normal, silent case rather than an error.
//! Traversal covers the first `len` elements, stopping early if the sequence is shorter than `len`.

use std::slice;

/// Calls `op` with a shared reference to each of the first `len` elements of `seq`, in order.
///
/// Nothing is called when `seq` is [`None`] or `len` is zero.
///
/// # Examples
/// ```
/// # use generic_basics::algorithms::for_each;
/// let mut seen = Vec::new();
/// for_each(Some(&[1, 2, 3][..]), 3, |n| seen.push(*n));
/// assert_eq!(seen, [1, 2, 3]);
///
/// for_each(None::<&[i32]>, 5, |_| unreachable!());
/// ```
pub fn for_each<T, F>(seq: Option<&[T]>, len: usize, mut op: F)
where
    F: FnMut(&T),
{
    let Some(seq) = seq else { return };

    for item in seq.iter().take(len) {
        op(item);
    }
}

/// The mutable form of [`for_each`]: `op` may modify each element in place.
///
/// # Examples
/// ```
/// # use generic_basics::algorithms::for_each_mut;
/// let mut numbers = [1, 2, 3, 4, 5];
/// for_each_mut(Some(&mut numbers[..]), 5, |n| *n *= 2);
/// assert_eq!(numbers, [2, 4, 6, 8, 10]);
/// ```
pub fn for_each_mut<T, F>(seq: Option<&mut [T]>, len: usize, mut op: F)
where
    F: FnMut(&mut T),
{
    let Some(seq) = seq else { return };

    for item in seq.iter_mut().take(len) {
        op(item);
    }
}

/// Calls `op` on each of `len` elements starting at `ptr`, in order. A null `ptr` or a `len` of zero
/// calls nothing.
///
/// # Safety
/// If `ptr` is non-null and `len` is non-zero, `ptr` must be properly aligned and valid for reads
/// and writes of `len` consecutive, initialized values of `T`, with no other access to them for the
/// duration of the call.
///
/// # Examples
/// ```
/// # use generic_basics::algorithms::for_each_ptr;
/// let mut letters = ['a', 'b', 'c'];
/// // SAFETY: The pointer and length describe the whole of letters.
/// unsafe { for_each_ptr(letters.as_mut_ptr(), letters.len(), |c| *c = c.to_ascii_uppercase()) };
/// assert_eq!(letters, ['A', 'B', 'C']);
///
/// // SAFETY: A null pointer is never dereferenced.
/// unsafe { for_each_ptr(std::ptr::null_mut::<char>(), 5, |_| unreachable!()) };
/// ```
pub unsafe fn for_each_ptr<T, F>(ptr: *mut T, len: usize, op: F)
where
    F: FnMut(&mut T),
{
    if ptr.is_null() || len == 0 {
        return;
    }

    // SAFETY: ptr is non-null and the caller guarantees that it is valid for len values.
    let seq = unsafe { slice::from_raw_parts_mut(ptr, len) };
    for_each_mut(Some(seq), len, op);
}
