use crate::stream::Stream;

/// Element-wise equality.
/// Forces both streams as far as they agree, so this only returns on
/// infinite streams if they differ somewhere, or share a node.
pub fn equal<T: PartialEq>(a: &Stream<T>, b: &Stream<T>) -> bool {
  let mut a = a.clone();
  let mut b = b.clone();
  loop {
    if a.ptr_eq(&b) { return true }
    let same = match (a.first(), b.first()) {
      (Some(x), Some(y)) => x == y,
      _                  => false
    };
    if !same { return false }
    a = a.rest();
    b = b.rest();
  }
}

impl<T: PartialEq> PartialEq for Stream<T> {
  fn eq(&self, other: &Self) -> bool { equal(self, other) }
}

impl<T: Eq> Eq for Stream<T> {}
