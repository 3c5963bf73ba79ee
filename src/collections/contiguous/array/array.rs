use std::alloc::{self, Layout};
use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem::{self, ManuallyDrop, MaybeUninit};
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr::{self, NonNull};
use std::slice;

pub use crate::util::error::IndexOutOfBounds;
use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// A contiguous collection with a size chosen at runtime and fixed for the lifetime of its
/// allocation. Similar to a [`Box<[T]>`](Box<T>).
///
/// An Array owns exactly `size` initialized elements and nothing more: there is no spare capacity
/// and no growth. The only way to change the size is to replace the contents wholesale, either by
/// assignment ([`Array::assign`], [`Clone::clone_from`]) or by moving a new Array in.
///
/// Cloning an Array produces a deep copy with its own allocation, so mutating either Array
/// afterwards never affects the other.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
/// - `m`: The number of items in the source Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `get_mut` | `O(1)` |
/// | `size` | `O(1)` |
/// | `with_size` | `O(n)` |
/// | `clone` | `O(n)` |
/// | `assign` | `O(n+m)` |
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Creates a new Array with size 0. Nothing is allocated.
    ///
    /// # Examples
    /// ```
    /// # use generic_basics::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// assert_eq!(&*arr, &[]);
    /// ```
    pub const fn new() -> Array<T> {
        Array {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`. All values are
    /// uninitialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use generic_basics::collections::contiguous::Array;
    /// # use std::mem::MaybeUninit;
    /// let arr: Array<MaybeUninit<u8>> = Array::new_uninit(5);
    /// assert_eq!(arr.size(), 5);
    /// ```
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        let layout = Array::<MaybeUninit<T>>::make_layout(size);
        let ptr = Array::<MaybeUninit<T>>::make_ptr(layout);

        Array {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Creates an Array from an iterator that knows its exact length up front. Only one allocation
    /// is made, sized to [`ExactSizeIterator::len`].
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`], or if the iterator produces fewer items
    /// than it reported. Any items already produced are dropped before the panic unwinds further.
    /// Extra items beyond the reported length are never requested.
    ///
    /// # Examples
    /// ```
    /// # use generic_basics::collections::contiguous::Array;
    /// let arr = Array::from_iter_sized(1_u8..=3);
    /// assert_eq!(&*arr, &[1, 2, 3]);
    /// ```
    pub fn from_iter_sized<I>(iter: I) -> Array<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = iter.into_iter();
        let mut partial = PartialArray::new(iter.len());

        for item in iter.take(partial.arr.size) {
            partial.push(item);
        }

        partial.finish()
    }

    /// Returns the size of the Array.
    ///
    /// # Examples
    /// ```
    /// # use generic_basics::collections::contiguous::Array;
    /// let arr = Array::from([1, 2, 3]);
    /// assert_eq!(arr.size(), 3);
    /// ```
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the Array contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= self.size()`. The Array is left untouched.
    ///
    /// # Examples
    /// ```
    /// # use generic_basics::collections::contiguous::{Array, IndexOutOfBounds};
    /// let arr = Array::from([10, 20, 30]);
    /// assert_eq!(arr.get(1), Ok(&20));
    /// assert_eq!(arr.get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < size, so the offset is within the allocation and points to an
        // initialized T.
        Ok(unsafe { self.ptr.add(index).as_ref() })
    }

    /// Returns a mutable reference to the element at `index`. Writing through the reference changes
    /// exactly that element.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= self.size()`. The Array is left untouched.
    ///
    /// # Examples
    /// ```
    /// # use generic_basics::collections::contiguous::Array;
    /// let mut arr = Array::<i32>::with_size(3);
    /// *arr.get_mut(0).unwrap() = 10;
    /// assert_eq!(&*arr, &[10, 0, 0]);
    /// assert!(arr.get_mut(3).is_err());
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < size, so the offset is within the allocation and points to an
        // initialized T. We hold a unique borrow of self for the lifetime of the reference.
        Ok(unsafe { self.ptr.add(index).as_mut() })
    }

    /// Returns a reference to the element at `index`, or [`None`] if it is out of bounds.
    pub fn try_get(&self, index: usize) -> Option<&T> {
        self.get(index).ok()
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if it is out of bounds.
    pub fn try_get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.get_mut(index).ok()
    }

    /// Decomposes an `Array<T>` into its raw components, a [`NonNull<T>`] pointer to the contained
    /// data and a [`usize`] representing the size. The Array is not dropped.
    pub(crate) const fn into_parts(self) -> (NonNull<T>, usize) {
        let ret = (self.ptr, self.size);
        mem::forget(self);
        ret
    }

    /// Creates an `Array<T>` from its raw components.
    ///
    /// # Safety
    /// `ptr` must come from [`Array::into_parts`] (or an equivalent allocation made with
    /// [`Array::make_layout`] for `size`) and point to `size` initialized values of `T`.
    pub(crate) const unsafe fn from_parts(ptr: NonNull<T>, size: usize) -> Array<T> {
        Array {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.size {
            Ok(())
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.size,
            })
        }
    }
}

impl<T> Array<T> {
    /// A helper function to create a [`Layout`] for use during allocation, containing `size` number
    /// of elements of type `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Layout {
        Layout::array::<T>(size).map_err(|_| CapacityOverflow).throw()
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T: Default> Array<T> {
    /// Creates a new Array containing `size` default values of `T`. A size of zero is equivalent to
    /// [`Array::new`].
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use generic_basics::collections::contiguous::Array;
    /// let arr = Array::<i32>::with_size(5);
    /// assert_eq!(arr.size(), 5);
    /// assert!(arr.iter().all(|n| *n == 0));
    /// ```
    pub fn with_size(size: usize) -> Array<T> {
        Array::from_iter_sized((0..size).map(|_| T::default()))
    }
}

impl<T: Clone> Array<T> {
    /// Creates a new Array with `count` clones of `item`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use generic_basics::collections::contiguous::Array;
    /// let arr = Array::repeat_item("ab", 3);
    /// assert_eq!(&*arr, &["ab", "ab", "ab"]);
    /// ```
    pub fn repeat_item(item: T, count: usize) -> Array<T> {
        Array::from_iter_sized((0..count).map(|_| item.clone()))
    }

    /// Replaces the contents of self with a deep copy of `source`, adopting its size.
    ///
    /// The copy is completed before the old contents are dropped, so if cloning an element panics,
    /// self keeps its previous contents and the partial copy is dropped.
    ///
    /// # Examples
    /// ```
    /// # use generic_basics::collections::contiguous::Array;
    /// let mut a = Array::repeat_item(99, 5);
    /// let mut b = Array::from([10, 20, 30]);
    /// a.assign(&b);
    /// b[0] = 777;
    /// assert_eq!(a.size(), 3);
    /// assert_eq!(&*a, &[10, 20, 30]);
    /// ```
    pub fn assign(&mut self, source: &Array<T>) {
        let copy = source.clone();
        drop(mem::replace(self, copy));
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Assume that all values of an `Array<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that the Array is properly initialized. Failing to do so
    /// is undefined behavior.
    ///
    /// # Examples
    /// ```
    /// # use generic_basics::collections::contiguous::Array;
    /// # use std::mem::MaybeUninit;
    /// let mut arr = Array::new_uninit(5);
    /// for i in 0..5 {
    ///     arr[i] = MaybeUninit::new(i);
    /// }
    /// assert_eq!(&*unsafe { arr.assume_init() }, &[0, 1, 2, 3, 4]);
    /// ```
    pub unsafe fn assume_init(self) -> Array<T> {
        let (ptr, size) = self.into_parts();
        // SAFETY: MaybeUninit<T> has the same layout as T, and the caller guarantees that every
        // value is initialized.
        unsafe { Array::from_parts(ptr.cast(), size) }
    }
}

/// An Array being filled front to back. Dropping it drops only the values written so far.
struct PartialArray<T> {
    arr: Array<MaybeUninit<T>>,
    init: usize,
}

impl<T> PartialArray<T> {
    fn new(size: usize) -> PartialArray<T> {
        PartialArray {
            arr: Array::new_uninit(size),
            init: 0,
        }
    }

    fn push(&mut self, value: T) {
        self.arr[self.init].write(value);
        self.init += 1;
    }

    fn finish(self) -> Array<T> {
        assert!(
            self.init == self.arr.size,
            "iterator produced {} of its reported {} elements",
            self.init,
            self.arr.size
        );

        let this = ManuallyDrop::new(self);
        // SAFETY: this is never dropped, so ownership of the allocation moves to the read copy.
        let arr = unsafe { ptr::read(&this.arr) };
        // SAFETY: All size values have been written.
        unsafe { arr.assume_init() }
    }
}

impl<T> Drop for PartialArray<T> {
    fn drop(&mut self) {
        for slot in self.arr.iter_mut().take(self.init) {
            // SAFETY: The first init values have been written and not yet dropped.
            unsafe { slot.assume_init_drop() }
        }
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // SAFETY: The pointer is nonnull, properly aligned and refers to size initialized values
        // that are dropped exactly once here.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size));
        }

        let layout = Array::<T>::make_layout(self.size);
        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), layout)
            }
        }
    }
}

impl<T> Index<usize> for Array<T> {
    type Output = T;

    /// # Panics
    /// Panics with the [`IndexOutOfBounds`] message if `index >= self.size()`.
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).throw()
    }
}

impl<T> IndexMut<usize> for Array<T> {
    /// # Panics
    /// Panics with the [`IndexOutOfBounds`] message if `index >= self.size()`.
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).throw()
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for (size * mem::size_of::<T>()) bytes. Data is properly initialized and has a
        // length no greater than isize::MAX. Array's safe API doesn't provide access to raw
        // pointers, so the borrow checker prevents mutation throughout 'a.
        unsafe {
            slice::from_raw_parts(self.ptr.as_ptr(), self.size)
        }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, and the unique borrow of self prevents any other access
        // throughout 'a.
        unsafe {
            slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size)
        }
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Array<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Array<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Array<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: Arrays, when used safely rely on unique pointers and are therefore safe for Send when T:
// Send.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API obeys all rules of the borrow checker, so no interior mutability occurs.
// This means that Array<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        Array::from_iter_sized(self.iter().cloned())
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    /// # Examples
    /// ```
    /// # use generic_basics::collections::contiguous::Array;
    /// let arr = Array::from(["Hello", "World"]);
    /// assert_eq!(arr[1], "World");
    /// ```
    fn from(value: [T; N]) -> Self {
        Array::from_iter_sized(value)
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: Hash> Hash for Array<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let contents: &[T] = self;
        f.debug_struct("Array")
            .field("contents", &contents)
            .field("size", &self.size)
            .finish()
    }
}

impl<T: Display> Display for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, item) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}
