use std::ops::Add;
use num::One;
use crate::stream::Stream;

/// `start`, `start + 1`, `start + 2`, ...
pub fn from<T>(start: T) -> Stream<T>
  where T: Add<Output=T> + One + Clone + 'static
{
  Stream::iterate(start, |x| x.clone() + T::one())
}

/// `low`, `low + 1`, ... `high`, inclusive.  Empty if `low > high`.
pub fn from_to<T>(low: T, high: T) -> Stream<T>
  where T: Add<Output=T> + One + PartialOrd + Clone + 'static
{
  if low > high { return Stream::empty() }
  let next = low.clone() + T::one();
  Stream::cons(low, move || from_to(next, high))
}
