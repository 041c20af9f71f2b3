//! The curry macro family for converting multi-argument functions to
//! curried form.
//!
//! Currying transforms a function of several arguments into a chain of
//! single-argument functions, so arguments can be supplied one at a time
//! and partial applications reused.
//!
//! The macros share the function and already-supplied arguments through
//! `std::rc::Rc`, which lets the curried closures implement `Fn` and be
//! called repeatedly, including from `compose!` and `pipe!`.

/// Converts a 2-argument function into curried form.
///
/// Given `f(a, b) -> c`, returns a closure taking `a` that returns a
/// closure taking `b`.
///
/// The function must implement [`Fn`]; argument types before the last
/// must implement [`Clone`] so partial applications stay reusable.
///
/// # Examples
///
/// ```
/// use funkit::curry2;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let curried = curry2!(add);
/// let add_five = curried(5);
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                function(
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                    arg2,
                )
            }
        }
    }};
}

/// Converts a 3-argument function into curried form.
///
/// Given `f(a, b, c) -> d`, returns nested closures taking one argument
/// at a time.
///
/// # Examples
///
/// ```
/// use funkit::curry3;
///
/// fn volume(width: f64, height: f64, depth: f64) -> f64 {
///     width * height * depth
/// }
///
/// let curried = curry3!(volume);
/// assert_eq!(curried(2.0)(3.0)(4.0), 24.0);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                let function = ::std::rc::Rc::clone(&function);
                let arg1 = ::std::rc::Rc::clone(&arg1);
                let arg2 = ::std::rc::Rc::new(arg2);
                move |arg3| {
                    function(
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                        arg3,
                    )
                }
            }
        }
    }};
}

/// Converts a 4-argument function into curried form.
///
/// # Examples
///
/// ```
/// use funkit::curry4;
///
/// fn sum4(a: i32, b: i32, c: i32, d: i32) -> i32 { a + b + c + d }
///
/// let curried = curry4!(sum4);
/// assert_eq!(curried(1)(2)(3)(4), 10);
/// ```
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                let function = ::std::rc::Rc::clone(&function);
                let arg1 = ::std::rc::Rc::clone(&arg1);
                let arg2 = ::std::rc::Rc::new(arg2);
                move |arg3| {
                    let function = ::std::rc::Rc::clone(&function);
                    let arg1 = ::std::rc::Rc::clone(&arg1);
                    let arg2 = ::std::rc::Rc::clone(&arg2);
                    let arg3 = ::std::rc::Rc::new(arg3);
                    move |arg4| {
                        function(
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg3)),
                            arg4,
                        )
                    }
                }
            }
        }
    }};
}
