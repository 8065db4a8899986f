//! Random integers, bytes, strings, permutations and identifiers from a choice of sources.
//!
//! Every generator takes a [`Source`] that decides where the randomness comes from:
//!
//! - [`Source::Fast`], a seeded non-cryptographic generator owned by the [`Entropy`] value,
//! - [`Source::Secure`], the platform's cryptographically secure generator,
//! - [`Source::Device`], a device file such as `/dev/urandom`, opened and read on every call.
//!
//! ```
//! use devrand::{alphabet, Entropy, Source};
//!
//! let entropy = Entropy::new();
//! let token = entropy.chars(16, alphabet::NUMBER_LETTERS, &Source::Secure).unwrap();
//! let noise = entropy.bytes(32, &Source::urandom()).unwrap();
//! let order = entropy.permutation(10, &Source::Fast).unwrap();
//! assert_eq!((token.len(), noise.len(), order.len()), (16, 32, 10));
//! ```
//!
//! Nothing here retries. Failures of the secure generator or of a device come back as
//! [`Error`]s, and so do invalid lengths and intervals.

pub mod alphabet;
mod chars;
mod entropy;
mod error;
mod permutation;
mod rand_support;
mod rng;
mod source;
mod uuid;

pub use entropy::Entropy;
pub use error::{Error, ErrorKind, Result};
pub use permutation::Sequence;
pub use rng::{FastRng, Generator, Random, RandomRange};
pub use source::{Source, RANDOM, URANDOM};

#[cfg(test)]
mod tests;
