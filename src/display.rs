use std::fmt;
use crate::stream::Stream;

/// How many elements `Debug` shows before giving up.
/// Self-referential streams can be fully forced and still infinite.
const DEBUG_LIMIT: usize = 32;

/// Shows only what has already been computed; never forces a tail.
impl<T: fmt::Debug> fmt::Debug for Stream<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "[")?;
    let mut s = self.clone();
    let mut shown = 0;
    while let Some(x) = s.first() {
      if shown > 0 { write!(f, ", ")? }
      if shown == DEBUG_LIMIT { return write!(f, "..]") }
      fmt::Debug::fmt(x, f)?;
      shown += 1;
      if !s.is_forced() { return write!(f, ", ..]") }
      s = s.rest();
    }
    write!(f, "]")
  }
}


/// The first few elements of a stream, for printing.
pub struct Prefix<'a, T> {
  stream: &'a Stream<T>,
  length: usize,
}

impl<T> Stream<T> {

  /// Format up to `n` elements, forcing as many tails as needed.
  pub fn prefix(&self, n: usize) -> Prefix<'_, T> {
    Prefix { stream: self, length: n }
  }
}

macro_rules! PrefixFormatter {
  ( $($trait:ident),*) => { $(
    impl<'a, T: fmt::$trait> fmt::$trait for Prefix<'a, T> {
      fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {

        write!(f,"[")?;
        let mut s = self.stream.clone();
        for i in 0 .. self.length {
          let x = match s.first() {
            Some(x) => x,
            None    => break
          };
          if i > 0 { write!(f,", ")? }
          fmt::$trait::fmt(x,f)?;
          if i + 1 < self.length { s = s.rest() }
        }
        write!(f, "]")
      }
    }
    )*
  }
}

PrefixFormatter! { Display, Binary, Octal, UpperHex, LowerHex }
