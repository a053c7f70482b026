mod derivations;

use clap::{Parser, ValueEnum};
use env_logger::Env;
use derivations::*;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Derivation {
  /// 1, 2, 3, ...
  Integers,
  /// Fibonacci numbers from an explicit generator
  Fibs,
  /// Primes by the sieve of Eratosthenes
  Sieve,
  /// Primes defined in terms of themselves
  Primes,
  /// Primes between COUNT and 2 * COUNT
  Interval,
  /// Newton's method guesses for the square root of 2
  Sqrt,
  /// Partial sums of the Leibniz series for pi
  Pi,
  /// The pi series after one Euler transform
  Euler,
  /// The pi series accelerated with a tableau of Euler transforms
  Accelerated,
  /// Pairs of positive integers, enumerated diagonally
  Pairs,
  /// e, approximated by solving dy/dt = y in COUNT steps
  Solve,
}

/// Print the first few elements of some classic lazy streams.
#[derive(Parser, Debug)]
#[command(name = "lazy_stream", version)]
struct Args {
  /// Which stream to print
  #[arg(value_enum)]
  derivation: Derivation,

  /// How many elements to print
  #[arg(short = 'n', long, default_value_t = 10)]
  count: usize,
}

fn main() {
  env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

  let args = Args::parse();
  let n    = args.count;
  log::info!("printing {} elements of {:?}", n, args.derivation);

  match args.derivation {
    Derivation::Integers    => integers_from(1).take(n).print(),
    Derivation::Fibs        => fibgen(0, 1).take(n).print(),
    Derivation::Sieve       => sieve(integers_from(2)).take(n).print(),
    Derivation::Primes      => primes().take(n).print(),
    Derivation::Interval    => {
      let low = n as u64;
      prime_enumerate_interval(low, 2 * low, &primes()).print()
    }
    Derivation::Sqrt        => sqrt_stream(2.0).take(n).print(),
    Derivation::Pi          => pi_stream().take(n).print(),
    Derivation::Euler       => euler_transform(pi_stream()).take(n).print(),
    Derivation::Accelerated =>
      accelerated_sequence(pi_stream(), euler_transform).take(n).print(),
    Derivation::Pairs       =>
      pairs(&integers_from(1), &integers_from(1))
        .take(n)
        .each(|(x, y)| println!("({}, {})", x, y)),
    Derivation::Solve       => {
      let steps = n.max(1);
      match solve(|y| y, 1.0, 1.0 / steps as f64).index(steps) {
        Some(e) => println!("{}", e),
        None    => log::error!("solution ended before step {}", steps)
      }
    }
  }
}
