use std::rc::Rc;
use crate::stream::Stream;

/// Iterates over the elements of a stream, forcing tails as it goes.
/// A tail is forced only when the element after it is requested.
#[derive(Clone)]
pub struct Iter<T> {
  current: Stream<T>,
  started: bool,
}

impl<T: Clone> Iterator for Iter<T> {
  type Item = T;
  fn next(&mut self) -> Option<Self::Item> {
    if self.started { self.current = self.current.rest() }
    let x = self.current.first()?.clone();
    self.started = true;
    Some(x)
  }
}

impl<T> Stream<T> {
  pub fn iter(&self) -> Iter<T> { Iter { current: self.clone(), started: false } }
}

impl<'a, T: Clone> IntoIterator for &'a Stream<T> {
  type Item = T;
  type IntoIter = Iter<T>;
  fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<T: Clone> IntoIterator for Stream<T> {
  type Item = T;
  type IntoIter = Iter<T>;
  fn into_iter(self) -> Self::IntoIter { Iter { current: self, started: false } }
}

/// Builds a finite stream with every tail already forced.
impl<T> FromIterator<T> for Stream<T> {
  fn from_iter<I: IntoIterator<Item = T>>(xs: I) -> Self {
    let xs: Vec<T> = xs.into_iter().collect();
    xs.into_iter().rev().fold(Stream::empty(), |s, x| Stream::prepend(x, s))
  }
}

impl<T> From<Vec<T>> for Stream<T> {
  fn from(xs: Vec<T>) -> Self { xs.into_iter().collect() }
}


/* Generators */

fn pull<T: 'static, I: Iterator<Item = T> + 'static>(mut it: I) -> Stream<T> {
  match it.next() {
    None    => Stream::empty(),
    Some(x) => Stream::cons(x, move || pull(it))
  }
}

fn unfold_rc<T, S, F>(seed: &S, step: Rc<F>) -> Stream<T>
  where T: 'static, S: 'static, F: Fn(&S) -> Option<(T, S)> + 'static
{
  match step(seed) {
    None            => Stream::empty(),
    Some((x, next)) => Stream::cons(x, move || unfold_rc(&next, step))
  }
}

fn iterate_rc<T, F>(x: T, f: Rc<F>) -> Stream<T>
  where T: Clone + 'static, F: Fn(&T) -> T + 'static
{
  let seed = x.clone();
  Stream::cons(x, move || iterate_rc(f(&seed), f))
}

impl<T: 'static> Stream<T> {

  /// Wrap an iterator.  Each element is pulled when the tail before
  /// it is forced, and remembered from then on.
  pub fn from_iter_lazy<I>(it: I) -> Self
    where I: IntoIterator<Item = T>, I::IntoIter: 'static
  {
    pull(it.into_iter())
  }

  /// Generate elements from a state until `step` returns `None`.
  pub fn unfold<S, F>(seed: S, step: F) -> Self
    where S: 'static, F: Fn(&S) -> Option<(T, S)> + 'static
  {
    unfold_rc(&seed, Rc::new(step))
  }

  /// `x`, `f(x)`, `f(f(x))`, ...
  pub fn iterate<F>(x: T, f: F) -> Self
    where T: Clone, F: Fn(&T) -> T + 'static
  {
    iterate_rc(x, Rc::new(f))
  }

  /// `x` forever.  A single node whose tail is itself.
  pub fn repeat(x: T) -> Self {
    Stream::fix(|me| Stream::cons(x, move || me.get()))
  }
}
