use std::cell::Cell;
use std::rc::Rc;
use once_cell::unsync::OnceCell;
use crate::error::{Result,StreamError};

/// A deferred computation producing the rest of a stream.
pub type Thunk<T> = Box<dyn FnOnce() -> Stream<T>>;

/// Where the tail of a node is in its life.
enum Tail<T> {
  Pending(Thunk<T>),
  Running,
  Forced,
  Poisoned,
}

struct Node<T> {
  head:  T,
  state: Cell<Tail<T>>,
  tail:  OnceCell<Stream<T>>,
}

/// A lazy, memoized, possibly infinite sequence.
/// Cloning copies the handle, not the elements: all clones share
/// the same nodes, so a tail forced through one is forced for all.
pub struct Stream<T>(Option<Rc<Node<T>>>);

/// A handle to a stream that is still being defined.
/// See [`Stream::fix`].
pub struct Knot<T>(Rc<OnceCell<Stream<T>>>);


/* Construction */

impl<T> Stream<T> {

  /// The empty stream.
  pub fn empty() -> Self { Stream(None) }

  /// A stream whose tail is already known.
  pub fn prepend(head: T, tail: Stream<T>) -> Self {
    Stream(Some(Rc::new(Node {
      head:  head,
      state: Cell::new(Tail::Forced),
      tail:  OnceCell::with_value(tail),
    })))
  }

  /// Is this the empty stream.  Never forces anything.
  pub fn is_empty(&self) -> bool { self.0.is_none() }

  /// The first element, if any.
  pub fn first(&self) -> Option<&T> { self.0.as_ref().map(|n| &n.head) }

  pub fn try_first(&self) -> Result<&T> {
    self.first().ok_or(StreamError::Empty)
  }

  /// Has the tail of this stream been computed already.
  pub fn is_forced(&self) -> bool {
    match &self.0 {
      None    => false,
      Some(n) => n.tail.get().is_some()
    }
  }

  /// Are these two handles to the same node.
  pub fn ptr_eq(&self, other: &Self) -> bool {
    match (&self.0, &other.0) {
      (None, None)       => true,
      (Some(a), Some(b)) => Rc::ptr_eq(a,b),
      _                  => false
    }
  }

  /// The rest of the stream, computing it on first use.
  /// The rest of the empty stream is the empty stream.
  ///
  /// Panics if the tail is defined in terms of itself with no element
  /// in between, or if its thunk panicked before.
  pub fn rest(&self) -> Stream<T> {
    match &self.0 {
      None    => Stream::empty(),
      Some(n) => n.force().unwrap_or_else(|e| panic!("{}", e))
    }
  }

  /// Like `rest`, but reports problems instead of panicking.
  pub fn try_rest(&self) -> Result<Stream<T>> {
    match &self.0 {
      None    => Err(StreamError::Empty),
      Some(n) => n.force()
    }
  }

  /// The first element together with the (forced) rest.
  pub fn uncons(&self) -> Option<(&T, Stream<T>)> {
    let n = self.0.as_ref()?;
    Some((&n.head, self.rest()))
  }
}

impl<T: 'static> Stream<T> {

  /// A stream starting with `head` whose rest is computed by `tail`,
  /// at most once, the first time it is needed.
  pub fn cons<F>(head: T, tail: F) -> Self
    where F: FnOnce() -> Stream<T> + 'static
  {
    Stream(Some(Rc::new(Node {
      head:  head,
      state: Cell::new(Tail::Pending(Box::new(tail))),
      tail:  OnceCell::new(),
    })))
  }

  /// A stream with exactly one element.
  pub fn single(head: T) -> Self { Self::cons(head, Stream::empty) }

  /// General constructor.
  /// No head gives the empty stream (and the tail is ignored);
  /// no tail means the stream ends after `head`.
  pub fn new(head: Option<T>, tail: Option<Thunk<T>>) -> Self {
    match (head, tail) {
      (None, _)          => Stream::empty(),
      (Some(x), None)    => Self::single(x),
      (Some(x), Some(t)) => Self::cons(x, t)
    }
  }

  /// Define a stream in terms of itself.
  /// The builder receives a [`Knot`] naming the stream being built;
  /// it may only be read from thunks, which run after `fix` returns.
  ///
  /// Streams that refer to themselves form reference cycles and are never
  /// deallocated.
  pub fn fix<F>(build: F) -> Self
    where F: FnOnce(Knot<T>) -> Stream<T>
  {
    let knot = Knot(Rc::new(OnceCell::new()));
    let s    = build(knot.clone());
    knot.0.get_or_init(|| s).clone()
  }
}


/* Forcing */

/// Marks a tail as poisoned if its thunk unwinds.
struct PoisonOnUnwind<'a, T>(&'a Cell<Tail<T>>);

impl<'a, T> Drop for PoisonOnUnwind<'a, T> {
  fn drop(&mut self) {
    if std::thread::panicking() { self.0.set(Tail::Poisoned) }
  }
}

impl<T> Node<T> {
  fn force(&self) -> Result<Stream<T>> {
    if let Some(tail) = self.tail.get() { return Ok(tail.clone()) }

    match self.state.replace(Tail::Running) {
      Tail::Pending(thunk) => {
        log::trace!("forcing stream tail");
        let _guard = PoisonOnUnwind(&self.state);
        let tail   = thunk();
        self.state.set(Tail::Forced);
        Ok(self.tail.get_or_init(|| tail).clone())
      }

      Tail::Running => {
        log::debug!("cycle while forcing stream tail");
        Err(StreamError::Cycle)
      }

      Tail::Poisoned => {
        self.state.set(Tail::Poisoned);
        Err(StreamError::Poisoned)
      }

      Tail::Forced => {
        self.state.set(Tail::Forced);
        self.tail.get().cloned().ok_or(StreamError::Cycle)
      }
    }
  }
}

// Realized chains can be arbitrarily long, so unlink them with a loop.
impl<T> Drop for Node<T> {
  fn drop(&mut self) {
    let mut next = self.tail.take();
    while let Some(Stream(Some(rc))) = next {
      match Rc::try_unwrap(rc) {
        Ok(mut node) => next = node.tail.take(),
        Err(_)       => break
      }
    }
  }
}


/* Handles */

impl<T> Clone for Stream<T> {
  fn clone(&self) -> Self { Stream(self.0.clone()) }
}

impl<T> Default for Stream<T> {
  fn default() -> Self { Stream::empty() }
}

impl<T> Clone for Knot<T> {
  fn clone(&self) -> Self { Knot(self.0.clone()) }
}

impl<T> Knot<T> {

  /// The stream this knot names.
  /// Panics if used before the enclosing `fix` has returned.
  pub fn get(&self) -> Stream<T> {
    self.try_get().unwrap_or_else(|e| panic!("{}", e))
  }

  pub fn try_get(&self) -> Result<Stream<T>> {
    self.0.get().cloned().ok_or(StreamError::Unbound)
  }
}


/// Build a stream.
///   * `stream![]`            - the empty stream
///   * `stream![x]`           - a single element
///   * `stream![x => rest]`   - `x` followed by `rest`, evaluated lazily
///                              in a `move` closure
#[macro_export]
macro_rules! stream {
  () => { $crate::Stream::empty() };
  ( $head:expr ) => { $crate::Stream::single($head) };
  ( $head:expr => $tail:expr ) => {
    $crate::Stream::cons($head, move || $tail)
  };
}


#[cfg(test)]
mod tests {
  use super::*;
  use std::cell::Cell;
  use std::rc::Rc;

  #[test]
  fn test_empty() {
    let s = Stream::<u32>::empty();
    assert!(s.is_empty());
    assert_eq!(s.first(), None);
    assert!(s.rest().is_empty());
    assert_eq!(s.try_first(), Err(StreamError::Empty));
    assert_eq!(s.try_rest().err(), Some(StreamError::Empty));
    assert!(Stream::<u32>::new(None, Some(Box::new(|| stream![1u32]))).is_empty());
  }

  #[test]
  fn test_basics() {
    let s = stream![1 => stream![2]];
    assert!(!s.is_empty());
    assert_eq!(s.first(), Some(&1));
    assert!(!s.is_forced());
    assert_eq!(s.rest().first(), Some(&2));
    assert!(s.is_forced());
    assert!(s.rest().rest().is_empty());

    let one = Stream::new(Some(7), None);
    assert_eq!(one.first(), Some(&7));
    assert!(one.rest().is_empty());
  }

  #[test]
  fn test_memo() {
    let calls = Rc::new(Cell::new(0));
    let c     = calls.clone();
    let s = Stream::cons(1, move || { c.set(c.get() + 1); stream![2] });
    assert_eq!(calls.get(), 0);
    let a = s.rest();
    let b = s.clone().rest();
    assert_eq!(calls.get(), 1);
    assert!(a.ptr_eq(&b));
  }

  #[test]
  fn test_self_reference() {
    let ones = Stream::fix(|ones| stream![1 => ones.get()]);
    assert!(ones.rest().ptr_eq(&ones));
    assert_eq!(ones.rest().rest().first(), Some(&1));
  }

  #[test]
  fn test_unbound_knot() {
    let s = Stream::fix(|k: Knot<u8>| {
      assert_eq!(k.try_get().err(), Some(StreamError::Unbound));
      stream![1]
    });
    assert_eq!(s.first(), Some(&1));
  }

  #[test]
  fn test_cycle() {
    let seen = Rc::new(Cell::new(None));
    let out  = seen.clone();
    let s = Stream::fix(move |me: Knot<u8>| stream![1 => {
      match me.get().try_rest() {
        Ok(t)  => t,
        Err(e) => { out.set(Some(e)); Stream::empty() }
      }
    }]);
    assert!(s.rest().is_empty());
    assert_eq!(seen.get(), Some(StreamError::Cycle));
  }

  #[test]
  #[should_panic(expected = "depends on itself")]
  fn test_cycle_panics() {
    let s = Stream::fix(|me: Knot<u8>| stream![1 => me.get().rest()]);
    s.rest();
  }

  #[test]
  fn test_poisoned() {
    let s: Stream<u8> = stream![1 => panic!("boom")];
    let r = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| s.rest()));
    assert!(r.is_err());
    assert_eq!(s.try_rest().err(), Some(StreamError::Poisoned));
    assert!(!s.is_forced());
  }

  #[test]
  fn test_long_drop() {
    let mut s = Stream::empty();
    for i in 0 .. 1_000_000u32 { s = Stream::prepend(i, s) }
    assert_eq!(s.first(), Some(&999_999));
    drop(s);
  }
}
