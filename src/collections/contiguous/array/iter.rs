use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::{self, NonNull};
use std::slice;

use super::Array;

impl<T> IntoIterator for Array<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (ptr, size) = self.into_parts();
        IntoIter {
            ptr,
            size,
            head: 0,
            tail: size,
            _phantom: PhantomData,
        }
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Array<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for owned iteration over an [`Array`]. See [`Array::into_iter`].
///
/// Values in `head..tail` are still owned by the iterator. The allocation itself (all `size`
/// slots) is released when the iterator is dropped.
pub struct IntoIter<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) head: usize,
    pub(crate) tail: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> IntoIter<T> {
    /// Returns the values that haven't been yielded yet.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: head..tail lies within the allocation and those values are initialized and not
        // yet moved out.
        unsafe {
            slice::from_raw_parts(self.ptr.add(self.head).as_ptr(), self.tail - self.head)
        }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: Values in head..tail are initialized and owned by the iterator. Everything else
        // has already been moved out.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.ptr.add(self.head).as_ptr(),
                self.tail - self.head,
            ));
        }

        // SAFETY: ptr and size come from Array::into_parts. Viewing the slots as MaybeUninit means
        // that dropping the Array only releases the allocation.
        drop(unsafe { Array::<MaybeUninit<T>>::from_parts(self.ptr.cast(), self.size) });
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.head < self.tail {
            // SAFETY: head is in bounds and points to an initialized value. Incrementing head
            // afterwards means the value is effectively moved off of the heap.
            let value = unsafe { self.ptr.add(self.head).read() };
            self.head += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.tail - self.head;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.head < self.tail {
            self.tail -= 1;
            // SAFETY: tail has just been decremented and still lies at or after head, so it points
            // to an initialized value that hasn't been moved out.
            let value = unsafe { self.ptr.add(self.tail).read() };
            Some(value)
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.tail - self.head
    }
}

// SAFETY: IntoIter owns its remaining values in the same way as Array.
unsafe impl<T: Send> Send for IntoIter<T> {}
// SAFETY: The only shared access is through as_slice, which hands out shared references.
unsafe impl<T: Sync> Sync for IntoIter<T> {}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
