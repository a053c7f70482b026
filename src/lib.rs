//! Lazy, memoized, possibly infinite streams.
//!
//! A [`Stream`] is either empty, or a head element followed by a tail that
//! is computed the first time it is needed and remembered afterwards.
//! Tails may refer to streams that are not built yet, including the stream
//! being defined (see [`Stream::fix`]), which makes definitions like
//! "the Fibonacci numbers are 0, 1, then themselves plus their own tail"
//! directly expressible.

pub mod stream;
pub mod error;
pub mod traversal;
pub mod combine;
pub mod cmp;
pub mod iter;
pub mod range;
pub mod display;

#[cfg(test)]
pub mod proptest;

pub use crate::stream::{Stream,Knot,Thunk};
pub use crate::error::StreamError;
pub use crate::combine::{zip_map,zip_with,add,interleave};
pub use crate::cmp::equal;
pub use crate::iter::Iter;
pub use crate::display::Prefix;
