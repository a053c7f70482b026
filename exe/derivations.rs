// Classic stream definitions, written against the public combinators.

use std::rc::Rc;
use lazy_stream::{add, interleave, stream, Stream};
use lazy_stream::range::from_to;

pub fn integers_from(n: u64) -> Stream<u64> {
  stream![n => integers_from(n + 1)]
}

pub fn fibgen(a: u64, b: u64) -> Stream<u64> {
  stream![a => fibgen(b, a + b)]
}

/// Sieve of Eratosthenes: keep the first element, strike out its multiples
/// from the rest, repeat.
pub fn sieve(s: Stream<u64>) -> Stream<u64> {
  let p = match s.first() {
    Some(p) => *p,
    None    => return Stream::empty()
  };
  stream![p => sieve(s.rest().select(move |x| x % p > 0))]
}

/// Is `n` prime, using the (possibly still growing) stream of primes.
/// Only primes up to `sqrt(n)` are looked at.
pub fn is_prime(n: u64, primes: &Stream<u64>) -> bool {
  let mut ps = primes.clone();
  while let Some(p) = ps.first().copied() {
    if p * p > n    { return true }
    if n % p == 0   { return false }
    ps = ps.rest();
  }
  true
}

/// The primes, defined in terms of themselves.
/// Testing `n` only needs primes up to `sqrt(n)`, which are always
/// computed by the time `n` is reached.
pub fn primes() -> Stream<u64> {
  Stream::fix(|primes| stream![2 => {
    integers_from(3).select(move |n| is_prime(*n, &primes.get()))
  }])
}

pub fn prime_enumerate_interval(low: u64, high: u64, primes: &Stream<u64>)
  -> Stream<u64> {
  let primes = primes.clone();
  from_to(low, high).select(move |n| is_prime(*n, &primes))
}


fn sqrt_improve(guess: f64, x: f64) -> f64 { (guess + x / guess) / 2.0 }

/// Newton's method guesses for `sqrt(x)`, each derived from the last.
pub fn sqrt_stream(x: f64) -> Stream<f64> {
  Stream::fix(move |guesses| stream![1.0 => {
    guesses.get().map(move |g| sqrt_improve(*g, x))
  }])
}

fn pi_summands(n: f64) -> Stream<f64> {
  stream![1.0 / n => pi_summands(n + 2.0).map(|x| -x)]
}

/// Partial sums of `4 * (1 - 1/3 + 1/5 - ...)`.
pub fn pi_stream() -> Stream<f64> {
  pi_summands(1.0).partial_sums().scale(4.0)
}

/// Euler's sequence accelerator.
pub fn euler_transform(s: Stream<f64>) -> Stream<f64> {
  let (s0, s1, s2) = match (s.index(0), s.index(1), s.index(2)) {
    (Some(a), Some(b), Some(c)) => (a, b, c),
    _                           => return Stream::empty()
  };
  stream![s2 - (s2 - s1).powi(2) / (s0 - 2.0 * s1 + s2) => euler_transform(s.rest())]
}

fn make_tableau<F>(s: Stream<f64>, transform: Rc<F>) -> Stream<Stream<f64>>
  where F: Fn(Stream<f64>) -> Stream<f64> + 'static
{
  stream![s.clone() => make_tableau(transform(s), transform)]
}

/// First elements of `s`, `transform(s)`, `transform(transform(s))`, ...
pub fn accelerated_sequence<F>(s: Stream<f64>, transform: F) -> Stream<f64>
  where F: Fn(Stream<f64>) -> Stream<f64> + 'static
{
  make_tableau(s, Rc::new(transform))
    .select(|row| !row.is_empty())
    .map(|row| row.first().copied().unwrap_or(f64::NAN))
}


/// All pairs `(s[i], t[j])` with `i <= j`, enumerated diagonally.
pub fn pairs<T: Clone + 'static>(s: &Stream<T>, t: &Stream<T>) -> Stream<(T, T)> {
  let (x, y) = match (s.first(), t.first()) {
    (Some(x), Some(y)) => (x.clone(), y.clone()),
    _                  => return Stream::empty()
  };
  let s = s.clone();
  let t = t.clone();
  let row = x.clone();
  stream![(x, y) => interleave( &t.rest().map(move |z| (row.clone(), z.clone()))
                              , &pairs(&s.rest(), &t.rest()) )]
}


/// Running integral of `integrand`, which is only asked for once the
/// second element is needed, so it may refer to the result.
pub fn integral<I>(integrand: I, initial: f64, dt: f64) -> Stream<f64>
  where I: FnOnce() -> Stream<f64> + 'static
{
  Stream::fix(move |int| stream![initial => {
    add(&[integrand().scale(dt), int.get()])
  }])
}

/// Solve `dy/dt = f(y)` with `y(0) = y0`, in steps of `dt`.
pub fn solve<F>(f: F, y0: f64, dt: f64) -> Stream<f64>
  where F: Fn(f64) -> f64 + 'static
{
  Stream::fix(move |y| integral(move || y.get().map(move |v| f(*v)), y0, dt))
}
