//! Stack-safe recursion via trampolining.
//!
//! Rust does not guarantee tail call elimination, so a deeply recursive
//! function can overflow the stack. The [`Trampoline`] type converts
//! recursion into data: each recursive call becomes a deferred step, and
//! [`Trampoline::run`] interprets the steps in a plain loop using
//! constant stack space.
//!
//! # Examples
//!
//! ## Factorial
//!
//! ```rust
//! use funkit::control::Trampoline;
//!
//! fn factorial(n: u64) -> Trampoline<u64> {
//!     factorial_accumulate(n, 1)
//! }
//!
//! fn factorial_accumulate(n: u64, accumulator: u64) -> Trampoline<u64> {
//!     if n <= 1 {
//!         Trampoline::complete(accumulator)
//!     } else {
//!         Trampoline::defer(move || factorial_accumulate(n - 1, n * accumulator))
//!     }
//! }
//!
//! assert_eq!(factorial(20).run(), 2_432_902_008_176_640_000);
//! ```
//!
//! ## Mutual Recursion
//!
//! ```rust
//! use funkit::control::Trampoline;
//!
//! fn is_even(n: u64) -> Trampoline<bool> {
//!     if n == 0 {
//!         Trampoline::complete(true)
//!     } else {
//!         Trampoline::defer(move || is_odd(n - 1))
//!     }
//! }
//!
//! fn is_odd(n: u64) -> Trampoline<bool> {
//!     if n == 0 {
//!         Trampoline::complete(false)
//!     } else {
//!         Trampoline::defer(move || is_even(n - 1))
//!     }
//! }
//!
//! assert!(is_even(10_000).run());
//! ```

/// Internal trait for type erasure in `BindStep` continuations.
///
/// Allows continuations with different intermediate types to live in the
/// same `Trampoline` variant, so monadic composition does not need to
/// know every intermediate type at the enum level.
trait BindContinuation<A> {
    /// Executes one step of the continuation, producing the next state.
    fn step(self: Box<Self>) -> Trampoline<A>;
}

/// A wrapper hiding the internal continuation trait from the public API.
#[doc(hidden)]
pub struct ContinuationBox<A>(Box<dyn BindContinuation<A>>);

impl<A> ContinuationBox<A> {
    fn new<T: BindContinuation<A> + 'static>(continuation: T) -> Self {
        Self(Box::new(continuation))
    }

    fn step(self) -> Trampoline<A> {
        self.0.step()
    }
}

/// A data structure for stack-safe recursion.
///
/// `Trampoline<A>` represents one state of a potentially unbounded
/// self-recursive computation producing an `A`:
///
/// 1. `Final(value)` - the computation has finished; this state is
///    terminal and absorbing
/// 2. `Next(thunk)` - the computation has another step; the thunk is not
///    invoked until the runner asks for it
/// 3. `BindStep(...)` - a hidden composition state backing `flat_map`
///
/// A `Next` thunk, once invoked, must yield another `Trampoline<A>`. The
/// chain terminates when it reaches `Final`; an infinite `Next` chain
/// simply loops forever in [`run`](Trampoline::run) - the runner has no
/// timeout and does not try to detect non-termination.
///
/// # Laws
///
/// `Trampoline` forms a monad under `flat_map`:
///
/// - **Left Identity**: `Trampoline::pure(a).flat_map(f).run() == f(a).run()`
/// - **Right Identity**: `m.flat_map(Trampoline::pure).run() == m.run()`
/// - **Associativity**: `m.flat_map(f).flat_map(g).run() == m.flat_map(|x| f(x).flat_map(g)).run()`
///
/// # Examples
///
/// ```rust
/// use funkit::control::Trampoline;
///
/// assert_eq!(Trampoline::complete(42).run(), 42);
/// assert_eq!(Trampoline::defer(|| Trampoline::complete(42)).run(), 42);
/// ```
pub enum Trampoline<A> {
    /// The computation has completed with a value.
    Final(A),
    /// The computation is suspended; the thunk produces the next state.
    Next(Box<dyn FnOnce() -> Trampoline<A> + 'static>),
    /// Internal state for `flat_map` composition.
    #[doc(hidden)]
    BindStep(ContinuationBox<A>),
}

impl<A> Trampoline<A> {
    /// Creates a completed trampoline holding the final value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Trampoline;
    ///
    /// assert_eq!(Trampoline::complete(42).run(), 42);
    /// ```
    #[inline]
    pub fn complete(value: A) -> Self {
        Self::Final(value)
    }

    /// Creates a suspended trampoline that continues with the given thunk.
    ///
    /// The thunk is not evaluated until [`run`](Trampoline::run) reaches
    /// this step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Trampoline;
    ///
    /// let step = Trampoline::defer(|| Trampoline::complete(42));
    /// assert_eq!(step.run(), 42);
    /// ```
    #[inline]
    pub fn defer<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Trampoline<A> + 'static,
    {
        Self::Next(Box::new(thunk))
    }

    /// Alias for `complete`. Lifts a value into the trampoline context.
    #[inline]
    pub fn pure(value: A) -> Self {
        Self::complete(value)
    }
}

impl<A: 'static> Trampoline<A> {
    /// Runs the trampoline to completion and returns the final value.
    ///
    /// The steps are interpreted by an explicit iterative loop, never by
    /// self-recursion, so no call-stack frame accumulates regardless of
    /// how many `Next` steps precede `Final`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Trampoline;
    ///
    /// fn count_down(n: u64) -> Trampoline<u64> {
    ///     if n == 0 {
    ///         Trampoline::complete(0)
    ///     } else {
    ///         Trampoline::defer(move || count_down(n - 1))
    ///     }
    /// }
    ///
    /// assert_eq!(count_down(100_000).run(), 0);
    /// ```
    pub fn run(self) -> A {
        let mut current = self;

        loop {
            match current {
                Self::Final(value) => return value,
                Self::Next(thunk) => {
                    current = thunk();
                }
                Self::BindStep(continuation) => {
                    current = continuation.step();
                }
            }
        }
    }

    /// Applies a function to the final result of the trampoline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Trampoline;
    ///
    /// let doubled = Trampoline::complete(21).map(|x| x * 2);
    /// assert_eq!(doubled.run(), 42);
    /// ```
    pub fn map<B, F>(self, function: F) -> Trampoline<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        self.flat_map(move |value| Trampoline::complete(function(value)))
    }

    /// Applies a trampoline-returning function to the final result.
    ///
    /// This is the monadic bind. Chaining through `flat_map` stays
    /// stack-safe: composition is re-associated one step at a time inside
    /// the runner instead of nesting closures.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Trampoline;
    ///
    /// let result = Trampoline::complete(21).flat_map(|x| Trampoline::complete(x * 2));
    /// assert_eq!(result.run(), 42);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Trampoline<B>
    where
        F: FnOnce(A) -> Trampoline<B> + 'static,
        B: 'static,
    {
        Trampoline::BindStep(ContinuationBox::new(BindState {
            trampoline: self,
            function,
        }))
    }

    /// Alias for `flat_map`.
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Trampoline<B>
    where
        F: FnOnce(A) -> Trampoline<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }
}

/// Captures a trampoline plus the continuation to apply once it reaches
/// `Final`.
struct BindState<A, B, F>
where
    F: FnOnce(A) -> Trampoline<B>,
{
    trampoline: Trampoline<A>,
    function: F,
}

impl<A: 'static, B: 'static, F> BindContinuation<B> for BindState<A, B, F>
where
    F: FnOnce(A) -> Trampoline<B> + 'static,
{
    fn step(self: Box<Self>) -> Trampoline<B> {
        match self.trampoline {
            Trampoline::Final(value) => (self.function)(value),
            Trampoline::Next(thunk) => {
                let function = self.function;
                Trampoline::defer(move || thunk().flat_map(function))
            }
            Trampoline::BindStep(inner) => {
                // Re-associate: (m >>= f) >>= g == m >>= (\x -> f x >>= g)
                let function = self.function;
                inner.step().flat_map(function)
            }
        }
    }
}

impl<A: std::fmt::Debug> std::fmt::Debug for Trampoline<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Final(value) => formatter.debug_tuple("Final").field(value).finish(),
            Self::Next(_) => formatter.debug_tuple("Next").field(&"<thunk>").finish(),
            Self::BindStep(_) => formatter
                .debug_tuple("BindStep")
                .field(&"<continuation>")
                .finish(),
        }
    }
}
