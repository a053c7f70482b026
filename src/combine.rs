use std::ops::Add;
use std::rc::Rc;
use crate::stream::Stream;

fn zip_map_rc<T, U, F>(streams: Vec<Stream<T>>, f: Rc<F>) -> Stream<U>
  where T: Clone + 'static, U: 'static, F: Fn(&[T]) -> U + 'static
{
  // The first stream decides the length; a shorter later stream just
  // ends the result early.
  let heads: Option<Vec<T>> =
    streams.iter().map(|s| s.first().cloned()).collect();
  match heads {
    Some(xs) if !xs.is_empty() => {
      let y = f(&xs);
      Stream::cons(y, move || {
        zip_map_rc(streams.iter().map(Stream::rest).collect(), f)
      })
    }
    _ => Stream::empty()
  }
}

/// Walk several streams in lockstep, combining their heads with `f`.
/// The heads are passed to `f` in the same order as `streams`.
pub fn zip_map<T, U, F>(streams: &[Stream<T>], f: F) -> Stream<U>
  where T: Clone + 'static, U: 'static, F: Fn(&[T]) -> U + 'static
{
  zip_map_rc(streams.to_vec(), Rc::new(f))
}


fn zip_with_rc<A, B, C, F>(a: &Stream<A>, b: &Stream<B>, f: Rc<F>) -> Stream<C>
  where A: 'static, B: 'static, C: 'static, F: Fn(&A, &B) -> C + 'static
{
  let z = match (a.first(), b.first()) {
    (Some(x), Some(y)) => f(x,y),
    _                  => return Stream::empty()
  };
  let a = a.clone();
  let b = b.clone();
  Stream::cons(z, move || zip_with_rc(&a.rest(), &b.rest(), f))
}

/// Two streams in lockstep, possibly of different element types.
pub fn zip_with<A, B, C, F>(a: &Stream<A>, b: &Stream<B>, f: F) -> Stream<C>
  where A: 'static, B: 'static, C: 'static, F: Fn(&A, &B) -> C + 'static
{
  zip_with_rc(a, b, Rc::new(f))
}


/// Element-wise sum of all `streams`.
pub fn add<T>(streams: &[Stream<T>]) -> Stream<T>
  where T: Add<Output=T> + Clone + 'static
{
  zip_map(streams, |xs: &[T]| {
    let (x, rest) = xs.split_first().expect("zip_map passes at least one head");
    rest.iter().fold(x.clone(), |acc, y| acc + y.clone())
  })
}


/// Alternate between two streams, starting with `s1`.
/// Only the stream in first position is checked for emptiness, and the
/// two swap places at every step, so once one runs out the result
/// continues with whatever is left of the other.
pub fn interleave<T: Clone + 'static>(s1: &Stream<T>, s2: &Stream<T>) -> Stream<T> {
  match s1.first() {
    None    => s2.clone(),
    Some(x) => {
      let x  = x.clone();
      let s1 = s1.clone();
      let s2 = s2.clone();
      Stream::cons(x, move || interleave(&s2, &s1.rest()))
    }
  }
}



#[cfg(test)]
mod tests {
  use super::*;
  use crate::stream;
  use crate::range::{from,from_to};

  #[test]
  fn test_zip_map() {
    let s = zip_map(&[from(1), from(10), from(100)], |xs| xs[0] * xs[1] + xs[2]);
    assert_eq!(s.take(3).to_vec(), [110, 123, 138]);
    assert!(zip_map(&[] as &[Stream<u8>], |xs| xs.len()).is_empty());
  }

  #[test]
  fn test_zip_map_governed_by_first() {
    let short = from_to(1, 3);
    let s = zip_map(&[short.clone(), from(1)], |xs| xs[0] + xs[1]);
    assert_eq!(s.to_vec(), [2,4,6]);
    let s = zip_map(&[from(1), short], |xs| xs[0] + xs[1]);
    assert_eq!(s.to_vec(), [2,4,6]);
    let e = Stream::empty();
    assert!(zip_map(&[e, from(1)], |xs| xs[1]).is_empty());
  }

  #[test]
  fn test_zip_with() {
    let s = zip_with(&from(1), &stream!["a" => stream!["b"]], |n,c| format!("{}{}", c, n));
    assert_eq!(s.to_vec(), ["a1", "b2"]);
  }

  #[test]
  fn test_add() {
    assert_eq!(add(&[from(1), from(1)]).take(3).to_vec(), [2,4,6]);
    assert_eq!(add(&[from(1)]).take(2).to_vec(), [1,2]);
    assert_eq!(add(&[from(1), from(2), from(3)]).take(2).to_vec(), [6,9]);
  }

  #[test]
  fn test_implicit_integers() {
    let ones = Stream::repeat(1);
    assert_eq!(ones.take(10).to_vec(), [1; 10]);
    let integers = Stream::fix(|ints| {
      let ones = ones.clone();
      stream![1 => add(&[ones, ints.get()])]
    });
    assert_eq!(integers.take(10).to_vec(), [1,2,3,4,5,6,7,8,9,10]);
  }

  #[test]
  fn test_implicit_fibs() {
    let fibs = Stream::fix(|fibs: crate::Knot<u64>| {
      stream![0 => stream![1 => add(&[fibs.get().rest(), fibs.get()])]]
    });
    assert_eq!(fibs.take(10).to_vec(), [0,1,1,2,3,5,8,13,21,34]);
    assert_eq!(fibs.index(80), Some(23416728348467685));
  }

  #[test]
  fn test_interleave() {
    let s = interleave(&from_to(1, 3), &from_to(10, 11));
    assert_eq!(s.to_vec(), [1,10,2,11,3]);
    let s = interleave(&Stream::empty(), &from_to(1, 2));
    assert_eq!(s.to_vec(), [1,2]);
    let s = interleave(&from_to(1, 2), &Stream::empty());
    assert_eq!(s.to_vec(), [1,2]);
  }

  #[test]
  fn test_interleave_fair() {
    let s = interleave(&Stream::repeat(0), &Stream::repeat(1));
    assert_eq!(s.take(6).to_vec(), [0,1,0,1,0,1]);
  }
}
