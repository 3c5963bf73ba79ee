use std::fmt::{self, Display, Formatter};
use std::ops::MulAssign;
use std::ptr;

use colored::Colorize;
use generic_basics::algorithms::{exchange, for_each, for_each_mut, for_each_ptr, greater, lesser};
use generic_basics::collections::contiguous::Array;

/// A small user-defined type that is comparable, printable and default constructible.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
struct Number(i32);

impl Number {
    fn increment(&mut self) {
        self.0 += 1;
    }
}

impl MulAssign<i32> for Number {
    fn mul_assign(&mut self, rhs: i32) {
        self.0 *= rhs;
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn banner(title: &str) {
    println!("\n{}", format!("== {title} ==").bold().cyan());
}

fn section(title: &str) {
    println!("\n{}", title.bold().yellow());
}

fn check(name: &str, success: bool) {
    if success {
        println!("{}", format!("✓ {name}").green());
    } else {
        println!("{}", format!("✗ {name}").red());
    }
}

fn show<T: Display>(label: &str, items: &[T]) {
    let joined: Vec<String> = items.iter().map(ToString::to_string).collect();
    println!("{label}: {}", joined.join(" "));
}

fn compare_demo<T: PartialOrd + Display>(mut a: T, mut b: T) {
    println!("before: a = {a}, b = {b}");
    exchange(&mut a, &mut b);
    println!("after:  a = {}, b = {}", a.to_string().green(), b.to_string().green());
    println!("lesser(a, b) = {}", lesser(&a, &b).to_string().blue());
    println!("greater(a, b) = {}", greater(&a, &b).to_string().magenta());
}

fn comparisons() {
    banner("exchange / lesser / greater");

    section("[1] ints");
    compare_demo(2, 3);
    section("[2] strings");
    compare_demo(String::from("chaine1"), String::from("chaine2"));
    section("[3] floats");
    compare_demo(42.42_f32, 21.21);
    section("[4] chars");
    compare_demo('a', 'z');
    section("[5] Number");
    compare_demo(Number(100), Number(200));

    section("[6] equal values");
    let a = 5;
    let b = 5;
    check("lesser(5, 5) returns b", ptr::eq(lesser(&a, &b), &b));
    check("greater(5, 5) returns b", ptr::eq(greater(&a, &b), &b));
}

fn traversal() {
    banner("for_each");

    section("[1] ints");
    let mut numbers = [1, 2, 3, 4, 5];
    show("original", &numbers);
    for_each_mut(Some(&mut numbers[..]), 5, |n| *n += 1);
    show("after increment", &numbers);
    for_each_mut(Some(&mut numbers[..]), 5, |n| *n *= 2);
    show("after double", &numbers);
    check("ints traversed", numbers == [4, 6, 8, 10, 12]);

    section("[2] strings");
    let mut words = ["hello", "world", "this", "is", "iter"].map(String::from);
    for_each(Some(&words[..]), words.len(), |w| print!("{} ", format!("\"{w}\"").blue()));
    println!();
    for_each_mut(Some(&mut words[..]), 5, |w| {
        if let Some(first) = w.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
    });
    show("after capitalizing", &words);

    section("[3] floats");
    let mut floats = [1.1_f32, 2.2, 3.3, 4.4];
    for_each_mut(Some(&mut floats[..]), 4, |f| *f *= 2.0);
    show("after doubling", &floats);

    section("[4] chars");
    let mut letters = ['a', 'b', 'c', 'd', 'e'];
    // SAFETY: The pointer and length describe the whole of letters.
    unsafe {
        for_each_ptr(letters.as_mut_ptr(), letters.len(), |c| *c = (*c as u8 + 1) as char);
    }
    show("after increment", &letters);

    section("[5] Number");
    let mut numbers = [Number(10), Number(20), Number(30), Number(40)];
    for_each_mut(Some(&mut numbers[..]), 4, |n| *n *= 5);
    show("after multiplying by 5", &numbers);
    for_each_mut(Some(&mut numbers[..]), 4, Number::increment);
    show("after increment", &numbers);

    section("[6] empty and absent");
    let mut calls = 0;
    for_each(Some(&[1, 2, 3][..]), 0, |_| calls += 1);
    for_each(None::<&[i32]>, 5, |_| calls += 1);
    check("length 0 and None call nothing", calls == 0);
}

fn arrays() {
    banner("Array");

    section("[1] empty Array");
    let empty = Array::<i32>::new();
    check("empty Array has size 0", empty.size() == 0);

    section("[2] sized Array");
    let arr = Array::<i32>::with_size(5);
    println!("default values: {arr}");
    check("all elements default to 0", arr.size() == 5 && arr.iter().all(|n| *n == 0));

    section("[3] access and modification");
    let mut arr = Array::<i32>::with_size(5);
    for (i, slot) in arr.iter_mut().enumerate() {
        *slot = i as i32 * 10;
    }
    println!("after modification: {}", arr.to_string().cyan());
    check("modification works", arr[0] == 0 && arr[1] == 10 && arr[4] == 40);

    section("[4] deep copy");
    let mut original = Array::from([100, 200, 300]);
    let copy = original.clone();
    original[0] = 999;
    println!("original: {}, copy: {}", original.to_string().green(), copy.to_string().blue());
    check("copy unaffected", copy[0] == 100 && original[0] == 999);

    section("[5] assignment");
    let mut arr1 = Array::from([10, 20, 30]);
    let mut arr2 = Array::repeat_item(99, 5);
    arr2.assign(&arr1);
    arr1[0] = 777;
    println!("arr1: {arr1}, arr2: {arr2}");
    check("assignment deep copies", arr2.size() == 3 && arr2[0] == 10 && arr1[0] == 777);

    section("[6] assignment from an equal value");
    let mut arr = Array::from([1, 2, 3]);
    let same = arr.clone();
    arr.clone_from(&same);
    check("contents unchanged", *arr == [1, 2, 3]);

    section("[7] out of bounds");
    let arr = Array::<i32>::with_size(5);
    match arr.get(10) {
        Ok(value) => println!("unexpected value {value}"),
        Err(error) => println!("{}", format!("error: {error}").red()),
    }
    check("get(10) fails on size 5", arr.get(10).is_err());
    check("get(0) fails on empty", empty.get(0).is_err());

    section("[8] strings");
    let mut words = Array::<String>::with_size(4);
    for (slot, word) in words.iter_mut().zip(["Hello", "World", "from", "Array"]) {
        *slot = word.to_string();
    }
    println!("{}", words.to_string().magenta());
    check("string Array works", words[0] == "Hello" && words[3] == "Array");

    section("[9] floats");
    let floats = Array::from([3.5_f32, 2.25, 1.5, 1.75]);
    println!("{floats}");
    check("float Array works", floats[0] > 3.0 && floats[0] < 4.0);

    section("[10] Number");
    let mut numbers = Array::<Number>::with_size(3);
    numbers[0] = Number(100);
    numbers[1] = Number(200);
    numbers[2] = Number(300);
    println!("{}", numbers.to_string().blue());
    check("custom type Array works", numbers[1] == Number(200));

    section("[11] shared reference access");
    let shared: &Array<Number> = &numbers;
    check("shared access works", shared.get(1).is_ok_and(|n| *n == Number(200)));

    section("[12] large Array");
    let mut large = Array::<i32>::with_size(1000);
    large[0] = 1;
    large[999] = 1000;
    check("large Array works", large.size() == 1000 && large[999] == 1000);
}

fn main() {
    comparisons();
    traversal();
    arrays();

    println!("\n{}", "✓ All demonstrations completed!".bold().green());
}
