//! State - a pure transition threaded through a computation.
//!
//! A `State<S, A>` wraps a function `S -> (A, S)`. Nothing happens until
//! [`State::run`] is called with an initial state; the same value run twice
//! with the same input gives the same output.
//!
//! # Execution Count
//!
//! Composition never re-invokes a transition. Running
//! `base.map(f).map(g)` calls `base`'s transition once, `f` once and `g`
//! once. Running `base.flat_map(f)` calls `base`'s transition once, `f` once
//! and the transition of the state returned by `f` once.
//!
//! # Note on Type Classes
//!
//! `State` does not implement [`Mappable`](crate::typeclass::Mappable): its
//! mapping functions are stored and may run many times, so they must be
//! `Fn + 'static`, which the trait does not require.
//!
//! # Laws
//!
//! - Left Identity: `State::pure(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(State::pure) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//! - Put Get: `State::put(s).then(State::get())` returns `s`
//! - Modify Composition: `modify(f).then(modify(g)) == modify(|s| g(f(s)))`
//!
//! # Examples
//!
//! ```rust
//! use monadix::effect::State;
//!
//! fn increment() -> State<i32, ()> {
//!     State::modify(|count| count + 1)
//! }
//!
//! let computation = increment()
//!     .then(increment())
//!     .then(increment())
//!     .then(State::get());
//!
//! assert_eq!(computation.run(0), (3, 3));
//! ```

use std::fmt;
use std::rc::Rc;

/// A computation `S -> (A, S)`.
///
/// Cloning shares the transition; it never runs it.
///
/// # Examples
///
/// ```rust
/// use monadix::effect::State;
///
/// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
/// assert_eq!(state.run(10), (20, 11));
/// assert_eq!(state.eval(10), 20);
/// assert_eq!(state.execute(10), 11);
/// ```
pub struct State<S, A>
where
    S: 'static,
    A: 'static,
{
    transition: Rc<dyn Fn(S) -> (A, S)>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a transition function.
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            transition: Rc::new(transition),
        }
    }

    /// Alias for [`State::new`].
    pub fn from_transition<F>(transition: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self::new(transition)
    }

    /// Returns `value` and leaves the state unchanged.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Returns a projection of the state and leaves it unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::effect::State;
    ///
    /// let length: State<Vec<i32>, usize> = State::gets(Vec::len);
    /// assert_eq!(length.run(vec![1, 2, 3]), (3, vec![1, 2, 3]));
    /// ```
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| {
            let value = projection(&state);
            (value, state)
        })
    }

    // =========================================================================
    // Running
    // =========================================================================

    /// Runs the transition once from `initial_state`.
    #[inline]
    pub fn run(&self, initial_state: S) -> (A, S) {
        (self.transition)(initial_state)
    }

    /// Runs once and keeps the value.
    #[inline]
    pub fn eval(&self, initial_state: S) -> A {
        self.run(initial_state).0
    }

    /// Runs once and keeps the final state.
    #[inline]
    pub fn execute(&self, initial_state: S) -> S {
        self.run(initial_state).1
    }

    // =========================================================================
    // Mapping and Chaining
    // =========================================================================

    /// Transforms the value. The state passes through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::effect::State;
    ///
    /// let doubled = State::<i32, i32>::get().map(|value| value * 2);
    /// assert_eq!(doubled.run(21), (42, 21));
    /// ```
    #[must_use]
    pub fn map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let (value, next_state) = transition(state);
            (function(value), next_state)
        })
    }

    /// Runs this transition, feeds the value to `function`, then runs the
    /// returned state on the intermediate state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadix::effect::State;
    ///
    /// let twice = State::<i32, i32>::get().flat_map(|_| State::get());
    /// assert_eq!(twice.run(7), (7, 7));
    /// ```
    #[must_use]
    pub fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let (value, intermediate_state) = transition(state);
            function(value).run(intermediate_state)
        })
    }

    /// Alias for [`State::flat_map`].
    #[must_use]
    pub fn bind<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Alias for [`State::flat_map`].
    #[must_use]
    pub fn and_then<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Runs `next` after this state, discarding this value.
    #[must_use]
    pub fn then<B>(self, next: State<S, B>) -> State<S, B>
    where
        B: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let (_, intermediate_state) = transition(state);
            next.run(intermediate_state)
        })
    }

    /// Runs both states in order and combines their values.
    #[must_use]
    pub fn map2<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let first = self.transition;
        let second = other.transition;
        State::new(move |state| {
            let (left, intermediate_state) = first(state);
            let (right, final_state) = second(intermediate_state);
            (function(left, right), final_state)
        })
    }

    /// Runs both states in order and pairs their values.
    #[must_use]
    pub fn product<B>(self, other: State<S, B>) -> State<S, (A, B)>
    where
        B: 'static,
    {
        self.map2(other, |left, right| (left, right))
    }
}

// =============================================================================
// State Primitives
// =============================================================================

impl<S> State<S, S>
where
    S: Clone + 'static,
{
    /// Returns the current state as the value.
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }
}

impl<S> State<S, ()>
where
    S: 'static,
{
    /// Replaces the state.
    pub fn put(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| ((), new_state.clone()))
    }

    /// Transforms the state.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<S, A> Clone for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            transition: Rc::clone(&self.transition),
        }
    }
}

impl<S, A> fmt::Display for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<State>")
    }
}

impl<S, A> fmt::Debug for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<State>")
    }
}
