use ::proptest::prelude::*;
use ::proptest::collection::vec;
use ::proptest::test_runner::*;
use crate::Stream;

/// Contents of a finite stream.
pub fn elements() -> impl Strategy<Value = Vec<i64>> {
  vec(-1000i64 .. 1000, 0 .. 48)
}

/// Contents of a finite stream, and a count that may run past its end.
pub fn elements_and_count() -> impl Strategy<Value = (Vec<i64>, usize)> {
  (elements(), 0usize .. 64)
}

/// A stream with the given elements, none of its tails forced yet.
pub fn lazy(xs: &[i64]) -> Stream<i64> {
  Stream::from_iter_lazy(xs.to_vec())
}

/// Check `p` on values from `strategy`.
/// `p` returns `None` for inputs it does not apply to.
pub fn do_test<S, P>(strategy: S, p: P)
  where S: Strategy, P: Fn(S::Value) -> Option<bool>
{
  let mut cfg: Config = <_>::default();
  cfg.failure_persistence = None;
  let mut runner = TestRunner::new(cfg);
  runner.run(&strategy, |arg| {
    match p(arg) {
      Some(result) =>
        if result { Ok(()) }
        else {
          Err(TestCaseError::Fail("unexpected result".into()))
        },
      None => Err(TestCaseError::Reject("invalid input".into()))
    }
  }).unwrap()
}
