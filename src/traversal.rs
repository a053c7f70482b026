use std::fmt;
use std::ops::{Add,Mul};
use std::rc::Rc;
use crate::stream::Stream;

/* Inspection and consumption.
   These walk the stream with a loop, so long finite streams are fine,
   but none of them return on an infinite stream unless bounded first. */

impl<T> Stream<T> {

  /// Skip the first `n` elements.
  /// Dropping from a stream that is too short gives the empty stream.
  pub fn drop(&self, n: usize) -> Stream<T> {
    let mut s = self.clone();
    for _ in 0 .. n {
      if s.is_empty() { break }
      s = s.rest();
    }
    s
  }

  /// Call `visit` on each element, in order.
  pub fn each<F: FnMut(&T)>(&self, mut visit: F) {
    let mut s = self.clone();
    while let Some(x) = s.first() {
      visit(x);
      s = s.rest();
    }
  }

  /// Fold from the left: `combine(...combine(initial, x0)..., xn)`.
  pub fn reduce<A, F>(&self, initial: A, mut combine: F) -> A
    where F: FnMut(A, &T) -> A
  {
    let mut acc = initial;
    let mut s   = self.clone();
    while let Some(x) = s.first() {
      acc = combine(acc, x);
      s   = s.rest();
    }
    acc
  }

  /// Print each element on its own line.
  pub fn print(&self) where T: fmt::Display {
    self.each(|x| println!("{}", x))
  }
}

impl<T: Clone> Stream<T> {

  /// The element at position `n`, or `None` if the stream is shorter.
  pub fn index(&self, n: usize) -> Option<T> { self.drop(n).first().cloned() }

  /// Same as `index`.
  pub fn at(&self, n: usize) -> Option<T> { self.index(n) }

  /// All elements, in order.
  pub fn to_vec(&self) -> Vec<T> {
    self.reduce(Vec::new(), |mut xs, x| { xs.push(x.clone()); xs })
  }

  /// Add up all elements, starting from 0.
  pub fn sum(&self) -> T where T: num::Zero {
    self.reduce(T::zero(), |acc, x| acc + x.clone())
  }
}


/* Lazy transformers.
   Each of these does a constant amount of work up front and defers
   the rest to the tail of the result, except `select`, which has to
   find the first matching element before it can return. */

fn map_rc<T, U, F>(s: &Stream<T>, f: Rc<F>) -> Stream<U>
  where T: 'static, U: 'static, F: Fn(&T) -> U + 'static
{
  match s.first() {
    None    => Stream::empty(),
    Some(x) => {
      let y = f(x);
      let s = s.clone();
      Stream::cons(y, move || map_rc(&s.rest(), f))
    }
  }
}

fn select_rc<T, P>(s: &Stream<T>, p: Rc<P>) -> Stream<T>
  where T: Clone + 'static, P: Fn(&T) -> bool + 'static
{
  let mut s = s.clone();
  loop {
    let keep = match s.first() {
      None    => return Stream::empty(),
      Some(x) => p(x)
    };
    if keep { break }
    s = s.rest();
  }
  match s.first() {
    None    => Stream::empty(),
    Some(x) => {
      let x = x.clone();
      Stream::cons(x, move || select_rc(&s.rest(), p))
    }
  }
}

fn successive_pairs_rc<T, U, F>(s: &Stream<T>, f: Rc<F>) -> Stream<U>
  where T: 'static, U: 'static, F: Fn(&T, &T) -> U + 'static
{
  let (x, rest) = match s.uncons() {
    None    => return Stream::empty(),
    Some(p) => p
  };
  let z = match rest.first() {
    None    => return Stream::empty(),
    Some(y) => f(x,y)
  };
  Stream::cons(z, move || successive_pairs_rc(&rest.rest(), f))
}

impl<T: 'static> Stream<T> {

  /// Apply `f` to every element.
  pub fn map<U, F>(&self, f: F) -> Stream<U>
    where U: 'static, F: Fn(&T) -> U + 'static
  {
    map_rc(self, Rc::new(f))
  }

  /// Keep only the elements satisfying `p`.
  ///
  /// Unlike the other transformers, this searches for the first match
  /// right away, so it does not return if no element ever matches.
  pub fn select<P>(&self, p: P) -> Stream<T>
    where T: Clone, P: Fn(&T) -> bool + 'static
  {
    select_rc(self, Rc::new(p))
  }

  /// The first `n` elements.
  pub fn take(&self, n: usize) -> Stream<T> where T: Clone {
    match self.first() {
      Some(x) if n > 0 => {
        let x = x.clone();
        if n == 1 { return Stream::single(x) }
        let s = self.clone();
        Stream::cons(x, move || s.rest().take(n - 1))
      }
      _ => Stream::empty()
    }
  }

  /// Multiply every element by `factor`.
  pub fn scale(&self, factor: T) -> Stream<T>
    where T: Mul<Output=T> + Clone
  {
    self.map(move |x| x.clone() * factor.clone())
  }

  /// Running totals, starting from 0.
  pub fn partial_sums(&self) -> Stream<T> where T: num::Zero + Clone {
    self.partial_sums_from(T::zero())
  }

  /// Running totals: `initial + x0`, `initial + x0 + x1`, ...
  pub fn partial_sums_from(&self, initial: T) -> Stream<T>
    where T: Add<Output=T> + Clone
  {
    match self.first() {
      None    => Stream::empty(),
      Some(x) => {
        let total = initial + x.clone();
        let next  = total.clone();
        let s     = self.clone();
        Stream::cons(total, move || s.rest().partial_sums_from(next))
      }
    }
  }

  /// Combine non-overlapping neighbours: `f(x0,x1)`, `f(x2,x3)`, ...
  /// A trailing element without a partner is dropped.
  pub fn map_successive_pairs<U, F>(&self, f: F) -> Stream<U>
    where U: 'static, F: Fn(&T, &T) -> U + 'static
  {
    successive_pairs_rc(self, Rc::new(f))
  }
}
