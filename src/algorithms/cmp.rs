use std::mem;

/// Swaps the values behind `a` and `b`, so that each holds the other's previous value.
///
/// # Examples
/// ```
/// # use generic_basics::algorithms::exchange;
/// let mut a = String::from("x");
/// let mut b = String::from("y");
/// exchange(&mut a, &mut b);
/// assert_eq!((a.as_str(), b.as_str()), ("y", "x"));
/// ```
pub fn exchange<T>(a: &mut T, b: &mut T) {
    mem::swap(a, b);
}

/// Returns the lesser of `a` and `b`.
///
/// `a` is only returned when it compares strictly less than `b`. When the two compare equal (or
/// can't be compared at all, like `NaN`), `b` is returned.
///
/// # Examples
/// ```
/// # use generic_basics::algorithms::lesser;
/// assert_eq!(*lesser(&2, &3), 2);
///
/// let (a, b) = (5, 5);
/// assert!(std::ptr::eq(lesser(&a, &b), &b));
/// ```
pub fn lesser<'a, T: PartialOrd + ?Sized>(a: &'a T, b: &'a T) -> &'a T {
    if a < b { a } else { b }
}

/// Returns the greater of `a` and `b`.
///
/// `a` is only returned when it compares strictly greater than `b`. Ties go to `b`, the same as
/// [`lesser`].
///
/// # Examples
/// ```
/// # use generic_basics::algorithms::greater;
/// assert_eq!(*greater(&2, &3), 3);
/// assert_eq!(greater("chaine1", "chaine2"), "chaine2");
/// ```
pub fn greater<'a, T: PartialOrd + ?Sized>(a: &'a T, b: &'a T) -> &'a T {
    if a > b { a } else { b }
}
