use thiserror::Error;

/// Failures reported by the checked stream accessors.
#[derive(Debug,Clone,Copy,PartialEq,Eq,Error)]
pub enum StreamError {

  /// The head or tail of the empty stream was requested.
  #[error("the empty stream has no head or tail")]
  Empty,

  /// A tail was forced again while its own thunk was still running.
  #[error("stream tail depends on itself before producing a head")]
  Cycle,

  /// An earlier attempt to force this tail panicked.
  #[error("stream tail was poisoned by a panic in its thunk")]
  Poisoned,

  /// A knot was read before the stream it names was built.
  #[error("self-referential stream used before it was defined")]
  Unbound,
}

pub type Result<T> = std::result::Result<T, StreamError>;
